pub mod pages;

pub use pages::users::{render_users_page, UsersPage};

/// Wrap a rendered body fragment in a complete HTML document.
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title></head><body>{body}</body></html>"
    )
}
