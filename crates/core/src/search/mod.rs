//! Layered paper search.
//!
//! Search runs up to two tiers against a shared result budget: an exact,
//! case-insensitive substring match over the local catalog, then - only if
//! the budget is not yet exhausted - a remote query, either term-ranked
//! (for short "partial" queries) or exact by title/author. Remote results
//! already present locally are suppressed via a seen-link set; the rest
//! are marked as not yet cataloged.

mod ranking;

pub use ranking::{is_partial_query, query_terms, rank_candidates};

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, Paper, PaperCatalog, SearchField};
use crate::feed::{FeedQuery, PaperFeed, RawPaper};

/// Over-fetch factor for the term-ranked remote query: asking for more
/// candidates than the budget leaves room for re-ranking.
const FUZZY_OVER_FETCH: u32 = 3;

/// One search result, local or remote.
///
/// `id`, `layman_summary` and `citations` are `None` for remote-fallback
/// items that are not yet in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SearchItem {
    pub id: Option<i64>,
    pub title: String,
    pub authors: Vec<String>,
    pub published: DateTime<Utc>,
    pub summary: String,
    pub layman_summary: Option<String>,
    pub link: String,
    pub categories: Vec<String>,
    pub citations: Option<i64>,
}

impl From<Paper> for SearchItem {
    fn from(paper: Paper) -> Self {
        Self {
            id: Some(paper.id),
            title: paper.title,
            authors: paper.authors,
            published: paper.published,
            summary: paper.summary,
            layman_summary: paper.layman_summary,
            link: paper.link,
            categories: paper.categories,
            citations: Some(paper.citations),
        }
    }
}

impl SearchItem {
    fn from_remote(paper: RawPaper) -> Self {
        let published = paper.published_at().unwrap_or_else(Utc::now);
        Self {
            id: None,
            title: paper.title,
            authors: paper.authors,
            published,
            summary: paper.summary,
            layman_summary: None,
            link: paper.link,
            categories: paper.categories,
            citations: None,
        }
    }
}

/// Layered search over the local catalog with remote fallback.
pub struct SearchEngine {
    catalog: Arc<dyn PaperCatalog>,
    feed: Arc<dyn PaperFeed>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<dyn PaperCatalog>, feed: Arc<dyn PaperFeed>) -> Self {
        Self { catalog, feed }
    }

    /// Run a search capped at `max_results` items.
    ///
    /// Remote-tier failures degrade to "no results"; only local catalog
    /// failures surface to the caller.
    pub async fn search(
        &self,
        field: SearchField,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchItem>, CatalogError> {
        let budget = max_results as usize;
        if budget == 0 {
            return Ok(Vec::new());
        }

        let local = self.catalog.find_local(field, query, max_results)?;
        let mut seen: HashSet<String> = local.iter().map(|p| p.link.clone()).collect();
        let mut items: Vec<SearchItem> = local.into_iter().map(SearchItem::from).collect();

        if items.len() >= budget {
            debug!(query = query, "Local tier filled the result budget");
            items.truncate(budget);
            return Ok(items);
        }

        let remote = if is_partial_query(query) {
            self.fetch_ranked(query, max_results).await
        } else {
            self.fetch_exact(field, query, max_results).await
        };

        for paper in remote {
            if items.len() >= budget {
                break;
            }
            if !seen.insert(paper.link.clone()) {
                continue;
            }
            items.push(SearchItem::from_remote(paper));
        }

        Ok(items)
    }

    /// Term-ranked remote tier for partial queries.
    async fn fetch_ranked(&self, query: &str, max_results: u32) -> Vec<RawPaper> {
        let terms = query_terms(query);
        if terms.is_empty() {
            debug!(query = query, "No rankable terms in query");
            return Vec::new();
        }

        let request = FeedQuery::AnyTerm {
            terms: terms.clone(),
            max_results: max_results.saturating_mul(FUZZY_OVER_FETCH),
        };

        match self.feed.fetch_by_query(&request).await {
            Ok(candidates) => rank_candidates(&terms, candidates, max_results as usize),
            Err(e) => {
                warn!(query = query, error = %e, "Ranked remote tier failed");
                Vec::new()
            }
        }
    }

    /// Exact remote tier for full title/author queries.
    async fn fetch_exact(&self, field: SearchField, query: &str, max_results: u32) -> Vec<RawPaper> {
        let request = FeedQuery::Exact {
            field,
            text: query.to_string(),
            max_results,
        };

        match self.feed.fetch_by_query(&request).await {
            Ok(papers) => papers,
            Err(e) => {
                warn!(query = query, error = %e, "Exact remote tier failed");
                Vec::new()
            }
        }
    }
}
