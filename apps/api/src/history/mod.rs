//! Per-user browsing history: most recent first, capped, no consecutive repeats.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod redis_log;

pub const MAX_HISTORY_ENTRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: String,
    pub title: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: page_title(path),
            visited_at: Utc::now(),
        }
    }
}

/// Human-readable title for an app path.
pub fn page_title(path: &str) -> String {
    match path {
        "/" => "Home".to_string(),
        "/auth" => "Login / Signup".to_string(),
        "/dashboard" => "Dashboard".to_string(),
        "/history" => "Browsing History".to_string(),
        other => {
            let trimmed = other.strip_prefix('/').unwrap_or(other);
            if trimmed.is_empty() {
                "Unknown Page".to_string()
            } else {
                trimmed.replacen('-', " ", 1)
            }
        }
    }
}

#[async_trait]
pub trait HistoryLog: Send + Sync {
    /// Records a visit unless the latest entry already has this path.
    /// Returns whether an entry was added.
    async fn record_visit(&self, user_id: Uuid, path: &str) -> Result<bool, AppError>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<HistoryEntry>, AppError>;

    async fn clear(&self, user_id: Uuid) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title("/"), "Home");
        assert_eq!(page_title("/auth"), "Login / Signup");
        assert_eq!(page_title("/dashboard"), "Dashboard");
        assert_eq!(page_title("/history"), "Browsing History");
        assert_eq!(page_title("/portfolio-setup"), "portfolio setup");
        assert_eq!(page_title("/my-cool-page"), "my cool-page");
        assert_eq!(page_title(""), "Unknown Page");
    }
}
