//! Users Page - Main Entry Point
//!
//! Serves the server-rendered users page with Axum.
//!
//! Run with: PORT=3000 cargo run

use clap::Parser;

use users_page::config::Config;
use users_page::handlers::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();
    serve(&config).await?;
    Ok(())
}
