//! Users page handler
//!
//! Renders the page on every request; the host's generic 500 covers failures.

use axum::{response::Html, Extension};

use crate::server_fns::PageRenderer;
use crate::shared::logging::log_page_render_error;
use crate::shared::AppError;

/// Users page handler state
#[derive(Clone)]
pub struct UsersPageState {
    pub renderer: PageRenderer,
}

impl UsersPageState {
    pub fn new(renderer: PageRenderer) -> Self {
        Self { renderer }
    }
}

/// GET /users
/// Fetch users from upstream and render the page
pub async fn users_page_handler(
    Extension(state): Extension<UsersPageState>,
) -> Result<Html<String>, AppError> {
    let page = state
        .renderer
        .render()
        .await
        .inspect_err(|e| log_page_render_error(&e.to_string()))?;

    Ok(Html(page.html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::User;
    use crate::handlers::users_router;
    use crate::infrastructure::api::UserSource;
    use crate::shared::Result;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Stub(Option<Vec<User>>);

    #[async_trait]
    impl UserSource for Stub {
        async fn fetch_users(&self) -> Result<Vec<User>> {
            match &self.0 {
                Some(users) => Ok(users.clone()),
                None => Err(serde_json::from_str::<Vec<User>>("oops").unwrap_err().into()),
            }
        }
    }

    fn router(stub: Stub) -> axum::Router {
        users_router(UsersPageState::new(PageRenderer::new(Arc::new(stub))))
    }

    #[tokio::test]
    async fn test_get_users_renders_html() {
        let app = router(Stub(Some(vec![User::new("1", "Leanne Graham")])));

        let response = app
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Leanne Graham"));
        assert!(html.contains("data-user-id=\"1\""));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_without_partial_list() {
        let app = router(Stub(None));

        let response = app
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("<li"));
    }

    #[tokio::test]
    async fn test_root_redirects_to_users() {
        let app = router(Stub(Some(Vec::new())));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/users");
    }
}
