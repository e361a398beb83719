//! Server-side page loading
//!
//! One render pass: fetch users, stamp the render time, render the view.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::app::{render_document, render_users_page};
use crate::config::{validate_time_format, DEFAULT_TIME_FORMAT};
use crate::domain::models::User;
use crate::infrastructure::api::UserSource;
use crate::shared::logging::log_page_rendered;
use crate::shared::Result;

/// Everything the users view needs for a single render
#[derive(Debug, Clone, PartialEq)]
pub struct UsersPageData {
    pub users: Vec<User>,
    pub rendered_at: DateTime<Local>,
    pub rendered_at_display: String,
}

/// Output of one render pass
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub rendered_at: DateTime<Local>,
    pub user_count: usize,
}

#[derive(Clone)]
pub struct PageRenderer {
    source: Arc<dyn UserSource>,
    time_format: String,
}

impl PageRenderer {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            source,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Rejects formats chrono cannot display.
    pub fn with_time_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_time_format(&format)?;
        self.time_format = format;
        Ok(self)
    }

    pub async fn load(&self) -> Result<UsersPageData> {
        let users = self.source.fetch_users().await?;
        let rendered_at = Local::now();

        Ok(UsersPageData {
            users,
            rendered_at_display: rendered_at.format(&self.time_format).to_string(),
            rendered_at,
        })
    }

    pub async fn render(&self) -> Result<RenderedPage> {
        let data = self.load().await?;
        let html = render_document("Users", &render_users_page(&data));

        log_page_rendered(data.users.len(), &data.rendered_at_display);
        Ok(RenderedPage {
            html,
            rendered_at: data.rendered_at,
            user_count: data.users.len(),
        })
    }
}
