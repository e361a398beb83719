// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Server-rendered views
pub mod app;

// Render pass orchestration
pub mod server_fns;

pub mod handlers;
pub mod infrastructure;
