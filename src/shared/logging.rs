//! Structured logging helpers for the users page
//!
//! Keeps log fields consistent between the upstream client, the cache and
//! the page renderer.

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    UpstreamFetch,
    CacheLookup,
    PageRender,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::UpstreamFetch => "upstream_fetch",
            LogOperation::CacheLookup => "cache_lookup",
            LogOperation::PageRender => "page_render",
        }
    }
}

/// Log the start of an upstream fetch
pub fn log_upstream_fetch_start(url: &str, policy: &str) {
    tracing::debug!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        cache_policy = policy,
        "Fetching users from upstream"
    );
}

/// Log a decoded upstream response
pub fn log_upstream_fetch_result(url: &str, user_count: usize, elapsed: Duration) {
    tracing::info!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        user_count = user_count,
        elapsed_ms = elapsed.as_millis() as u64,
        "Upstream fetch completed"
    );
}

/// Log an upstream failure (transport, status or decode)
pub fn log_upstream_fetch_error(url: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        error = error,
        "Upstream fetch failed"
    );
}

pub fn log_cache_hit(url: &str, age: Duration) {
    tracing::debug!(
        operation = LogOperation::CacheLookup.as_str(),
        url = url,
        age_ms = age.as_millis() as u64,
        "Serving users from revalidation cache"
    );
}

pub fn log_cache_expired(url: &str) {
    tracing::debug!(
        operation = LogOperation::CacheLookup.as_str(),
        url = url,
        "Cached users expired, revalidating"
    );
}

/// Log a finished render pass
pub fn log_page_rendered(user_count: usize, rendered_at: &str) {
    tracing::info!(
        operation = LogOperation::PageRender.as_str(),
        user_count = user_count,
        rendered_at = rendered_at,
        "Users page rendered"
    );
}

pub fn log_page_render_error(error: &str) {
    tracing::error!(
        operation = LogOperation::PageRender.as_str(),
        error = error,
        "Users page render failed"
    );
}
