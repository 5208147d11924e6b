//! Request-facing service layer.
//!
//! Validates raw request parameters (partition tokens, search options,
//! pagination) and delegates to the catalog and the search engine. HTTP
//! handlers stay thin by mapping `ServiceError` variants to status codes.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{
    clamp_page, CatalogError, Paper, PaperCatalog, Partition, SearchField, DEFAULT_PAGE_SIZE,
};
use crate::search::{SearchEngine, SearchItem};

/// Default result cap for search requests.
pub const DEFAULT_SEARCH_RESULTS: u32 = 5;

/// Maximum result cap accepted for search requests.
pub const MAX_SEARCH_RESULTS: u32 = 100;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One page of a catalog partition.
#[derive(Debug, Serialize)]
pub struct PaperPage {
    pub items: Vec<Paper>,
    pub total_count: u64,
}

/// The paper service - parameter validation in front of the catalog and
/// the search engine.
pub struct CatalogService {
    catalog: Arc<dyn PaperCatalog>,
    search: SearchEngine,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn PaperCatalog>, search: SearchEngine) -> Self {
        Self { catalog, search }
    }

    /// List one page of the partition named by `partition_token`.
    pub fn get_papers(
        &self,
        partition_token: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<PaperPage, ServiceError> {
        let partition = Partition::parse(partition_token).ok_or_else(|| {
            ServiceError::InvalidArgument(format!("unknown partition '{}'", partition_token))
        })?;

        let (page, page_size) = clamp_page(
            page.unwrap_or(1),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );

        debug!(partition = partition.as_str(), page, page_size, "Listing papers");

        let (items, total_count) = self.catalog.list_page(partition, page, page_size)?;
        Ok(PaperPage { items, total_count })
    }

    /// Search papers by title or author, as named by `option_token`.
    pub async fn search(
        &self,
        option_token: &str,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<Vec<SearchItem>, ServiceError> {
        let field = SearchField::parse(option_token).ok_or_else(|| {
            ServiceError::InvalidArgument(format!("unknown search option '{}'", option_token))
        })?;

        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "query cannot be empty".to_string(),
            ));
        }

        let max_results = max_results
            .unwrap_or(DEFAULT_SEARCH_RESULTS)
            .clamp(1, MAX_SEARCH_RESULTS);

        debug!(field = field.as_str(), query, max_results, "Searching papers");

        let items = self.search.search(field, query, max_results).await?;
        Ok(items)
    }
}
