use dioxus::prelude::*;

use crate::domain::models::User;
use crate::server_fns::UsersPageData;

// Users list page (BEM: c-users)
#[component]
pub fn UsersPage(users: Vec<User>, rendered_at: String) -> Element {
    rsx! {
        h1 { class: "c-users__title", "Users" }
        p { class: "c-users__time", "{rendered_at}" }
        ul { class: "c-users__list",
            for user in users.iter() {
                li {
                    key: "{user.id}",
                    class: "c-users__item",
                    "data-user-id": "{user.id}",
                    p { "{user.name}" }
                }
            }
        }
    }
}

/// Render the page body to an HTML fragment.
pub fn render_users_page(data: &UsersPageData) -> String {
    dioxus_ssr::render_element(rsx! {
        UsersPage {
            users: data.users.clone(),
            rendered_at: data.rendered_at_display.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn page_data(users: Vec<User>) -> UsersPageData {
        UsersPageData {
            users,
            rendered_at: Local::now(),
            rendered_at_display: "3:04:05 PM".to_string(),
        }
    }

    #[test]
    fn test_single_user() {
        let html = render_users_page(&page_data(vec![User::new("1", "Leanne Graham")]));

        assert!(html.contains("Users</h1>"));
        assert!(html.contains("3:04:05 PM"));
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("data-user-id=\"1\""));
        assert!(html.contains("Leanne Graham"));
    }

    #[test]
    fn test_one_item_per_user_with_distinct_keys() {
        let users = vec![
            User::new("1", "Leanne Graham"),
            User::new("2", "Ervin Howell"),
            User::new("3", "Clementine Bauch"),
        ];
        let html = render_users_page(&page_data(users.clone()));

        assert_eq!(html.matches("<li").count(), users.len());
        for user in &users {
            assert!(html.contains(&format!("data-user-id=\"{}\"", user.id)));
            assert!(html.contains(&user.name));
        }
    }

    #[test]
    fn test_items_keep_upstream_order() {
        let html = render_users_page(&page_data(vec![
            User::new("9", "Zed"),
            User::new("1", "Amy"),
        ]));
        let zed = html.find("Zed").unwrap();
        let amy = html.find("Amy").unwrap();
        assert!(zed < amy);
    }

    #[test]
    fn test_empty_list() {
        let html = render_users_page(&page_data(Vec::new()));

        assert!(html.contains("<ul"));
        assert_eq!(html.matches("<li").count(), 0);
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_users_page(&page_data(vec![User::new("1", "<script>x</script>")]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;x&#60;/script&#62;"));
    }
}
