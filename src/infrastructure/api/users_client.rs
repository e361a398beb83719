//! Upstream users API client
//!
//! Fetches the user list over HTTP. With `CachePolicy::NoStore` every call is a
//! live request marked `Cache-Control: no-store`; with
//! `CachePolicy::Revalidate` a decoded list is reused until its interval
//! elapses.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::header::{ACCEPT, CACHE_CONTROL};

use crate::config::{CachePolicy, Config};
use crate::domain::models::User;
use crate::shared::logging::{
    log_cache_expired, log_cache_hit, log_upstream_fetch_error, log_upstream_fetch_result,
    log_upstream_fetch_start,
};
use crate::shared::{AppError, Result};

/// Anything able to produce the user list for one render pass.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

struct CachedUsers {
    users: Vec<User>,
    fetched_at: Instant,
}

/// HTTP-backed [`UserSource`]. Cloning shares the connection pool and cache.
#[derive(Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    url: String,
    policy: CachePolicy,
    /// Keyed by endpoint URL, only populated in revalidate mode
    cache: Arc<DashMap<String, CachedUsers>>,
}

impl UsersClient {
    pub fn new(url: impl Into<String>, policy: CachePolicy) -> Result<Self> {
        Self::with_timeout(url, policy, None)
    }

    pub fn with_timeout(
        url: impl Into<String>,
        policy: CachePolicy,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url: url.into(),
            policy,
            cache: Arc::new(DashMap::new()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(
            config.users_url.clone(),
            config.cache_policy(),
            config.upstream_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    fn cached(&self, interval: Duration) -> Option<Vec<User>> {
        let entry = self.cache.get(&self.url)?;
        let age = entry.fetched_at.elapsed();
        if age < interval {
            log_cache_hit(&self.url, age);
            return Some(entry.users.clone());
        }

        // Expired, drop the read guard before removing
        drop(entry);
        self.cache.remove(&self.url);
        log_cache_expired(&self.url);
        None
    }

    async fn fetch_live(&self) -> Result<Vec<User>> {
        let started = Instant::now();
        log_upstream_fetch_start(&self.url, self.policy.as_str());

        let mut request = self.http.get(&self.url).header(ACCEPT, "application/json");
        if self.policy == CachePolicy::NoStore {
            request = request.header(CACHE_CONTROL, "no-store");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        let users: Vec<User> = serde_json::from_slice(&body)?;

        log_upstream_fetch_result(&self.url, users.len(), started.elapsed());
        Ok(users)
    }
}

#[async_trait]
impl UserSource for UsersClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        if let CachePolicy::Revalidate(interval) = self.policy {
            if let Some(users) = self.cached(interval) {
                return Ok(users);
            }
        }

        let users = self
            .fetch_live()
            .await
            .inspect_err(|e| log_upstream_fetch_error(&self.url, &e.to_string()))?;

        if matches!(self.policy, CachePolicy::Revalidate(_)) {
            self.cache.insert(
                self.url.clone(),
                CachedUsers {
                    users: users.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }

        Ok(users)
    }
}
