//! Server configuration
//!
//! Every flag can also be supplied through an environment variable:
//! ```text
//! users-page --port 3000 --revalidate-secs 10
//! PORT=3000 USERS_REVALIDATE_SECS=10 users-page
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use clap::Parser;

use crate::shared::{AppError, Result};

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Matches an en-US `toLocaleTimeString()`, e.g. `3:04:05 PM`.
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// How upstream responses may be reused between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Always fetch live data and ask intermediaries not to store it.
    #[default]
    NoStore,
    /// Reuse the last decoded response until the interval elapses.
    Revalidate(Duration),
}

impl CachePolicy {
    pub fn from_revalidate_secs(secs: Option<u64>) -> Self {
        match secs {
            None | Some(0) => CachePolicy::NoStore,
            Some(secs) => CachePolicy::Revalidate(Duration::from_secs(secs)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CachePolicy::NoStore => "no-store",
            CachePolicy::Revalidate(_) => "revalidate",
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "users-page", version, about = "Serve the server-rendered users page")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "USERS_PAGE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Upstream endpoint returning a JSON array of users
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_USERS_URL)]
    pub users_url: String,

    /// Reuse fetched users for this many seconds (0 or unset: always fetch)
    #[arg(long, env = "USERS_REVALIDATE_SECS")]
    pub revalidate_secs: Option<u64>,

    /// strftime format of the render timestamp
    #[arg(long, env = "USERS_TIME_FORMAT", default_value = DEFAULT_TIME_FORMAT)]
    pub time_format: String,

    /// Abort the upstream request after this many seconds
    #[arg(long, env = "USERS_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            users_url: DEFAULT_USERS_URL.to_string(),
            revalidate_secs: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            upstream_timeout_secs: None,
        }
    }
}

impl Config {
    /// Reject settings that would only fail later, mid-request.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.users_url)
            .map_err(|e| AppError::Config(format!("invalid users URL '{}': {}", self.users_url, e)))?;
        validate_time_format(&self.time_format)?;
        Ok(())
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::from_revalidate_secs(self.revalidate_secs)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// chrono panics when displaying an invalid format, so check it up front.
pub fn validate_time_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(AppError::Config("time format must not be empty".to_string()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!("invalid time format '{}'", format)));
    }
    Ok(())
}
