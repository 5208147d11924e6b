//! Types for the remote paper feed.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::SearchField;

/// Timestamp format used by the feed (e.g. `2024-02-20T15:30:00Z`).
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Raw paper metadata as returned by a remote source, before cataloging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPaper {
    pub title: String,
    pub authors: Vec<String>,
    /// Publication timestamp in the feed's fixed format.
    pub published: String,
    /// Abstract.
    pub summary: String,
    pub link: String,
    pub categories: Vec<String>,
    /// Citation count when the source reports one; window fetches yield 0.
    #[serde(default)]
    pub citations: i64,
}

impl RawPaper {
    /// Parse the published timestamp. `None` when the source value does not
    /// match the feed format; callers default to ingestion time.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.published, FEED_TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// A remote metadata query.
#[derive(Debug, Clone)]
pub enum FeedQuery {
    /// Exact search by title or author.
    Exact {
        field: SearchField,
        text: String,
        max_results: u32,
    },
    /// Match any of the given terms against the title (fuzzy tier).
    AnyTerm { terms: Vec<String>, max_results: u32 },
}

/// Errors for remote feed operations.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Trait for remote paper metadata sources.
#[async_trait]
pub trait PaperFeed: Send + Sync {
    /// Fetch papers submitted on the day `look_back_days` before today.
    /// An empty result is a valid outcome, not a failure.
    async fn fetch_by_window(&self, look_back_days: u32) -> Result<Vec<RawPaper>, FeedError>;

    /// Search papers remotely.
    async fn fetch_by_query(&self, query: &FeedQuery) -> Result<Vec<RawPaper>, FeedError>;
}

/// Trait for sources of highly-cited papers. These feed the cited
/// partition; every returned paper carries a non-zero citation count.
#[async_trait]
pub trait CitedFeed: Send + Sync {
    async fn fetch_popular(&self) -> Result<Vec<RawPaper>, FeedError>;
}
