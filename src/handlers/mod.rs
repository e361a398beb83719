use std::sync::Arc;

use axum::{response::Redirect, routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::infrastructure::api::UsersClient;
use crate::server_fns::PageRenderer;
use crate::shared::Result;

/// Server-rendered users page
pub mod users;

pub use users::{users_page_handler, UsersPageState};

/// Build the application router
pub fn users_router(state: UsersPageState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/users") }))
        .route("/users", get(users_page_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Validate `config`, bind its address and serve until the listener fails.
pub async fn serve(config: &Config) -> Result<()> {
    config.validate()?;

    let client = UsersClient::from_config(config)?;
    tracing::info!(
        users_url = client.url(),
        cache_policy = client.policy().as_str(),
        "Starting users page..."
    );

    let renderer = PageRenderer::new(Arc::new(client)).with_time_format(&config.time_format)?;
    let app = users_router(UsersPageState::new(renderer));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}/users", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::AppError;

    #[tokio::test]
    async fn test_serve_reports_bind_failure_as_io() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = Config {
            port: taken.local_addr().unwrap().port(),
            ..Config::default()
        };

        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_serve_rejects_invalid_config_before_binding() {
        let config = Config {
            time_format: "%Q".to_string(),
            ..Config::default()
        };

        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
