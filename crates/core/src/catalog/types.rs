//! Types for the paper catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page size for catalog listings.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Maximum page size accepted for catalog listings.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One of the two disjoint id sequences in the catalog.
///
/// A paper's citation count is the discriminator: zero citations means
/// `Recent`, anything else means `Cited`. Each partition carries its own
/// dense, 1-based id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Recent,
    Cited,
}

impl Partition {
    /// Parse a partition token from an API request.
    pub fn parse(token: &str) -> Option<Partition> {
        match token {
            "recent" => Some(Partition::Recent),
            "cited" => Some(Partition::Cited),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Recent => "recent",
            Partition::Cited => "cited",
        }
    }

    /// The partition a paper with the given citation count belongs to.
    pub fn of(citations: i64) -> Partition {
        if citations > 0 {
            Partition::Cited
        } else {
            Partition::Recent
        }
    }
}

/// Field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Parse a search option token from an API request.
    pub fn parse(token: &str) -> Option<SearchField> {
        match token {
            "title" => Some(SearchField::Title),
            "author" => Some(SearchField::Author),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

/// A cataloged paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Dense 1-based id, unique within the paper's citation partition.
    pub id: i64,
    /// Paper title (case-insensitively unique across the catalog).
    pub title: String,
    /// Authors in publication order.
    pub authors: Vec<String>,
    /// Publication timestamp (UTC).
    pub published: DateTime<Utc>,
    /// Original abstract.
    pub summary: String,
    /// Derived layman summary, absent until summarization succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layman_summary: Option<String>,
    /// Canonical source link (globally unique natural key).
    pub link: String,
    /// Topic tags.
    pub categories: Vec<String>,
    /// Citation count; zero keeps the paper in the `recent` partition.
    pub citations: i64,
}

impl Paper {
    pub fn partition(&self) -> Partition {
        Partition::of(self.citations)
    }
}

/// A paper about to be inserted (no id yet - the store assigns one).
#[derive(Debug, Clone)]
pub struct NewPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub published: DateTime<Utc>,
    pub summary: String,
    pub layman_summary: Option<String>,
    pub link: String,
    pub categories: Vec<String>,
    pub citations: i64,
}

impl NewPaper {
    pub fn partition(&self) -> Partition {
        Partition::of(self.citations)
    }
}

/// Clamp raw pagination parameters to the accepted range.
///
/// Returns `(page, page_size)` with `page >= 1` and
/// `1 <= page_size <= MAX_PAGE_SIZE`.
pub fn clamp_page(page: u32, page_size: u32) -> (u32, u32) {
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    (page, page_size)
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
