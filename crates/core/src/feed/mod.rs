//! Remote paper metadata sources.
//!
//! This module provides a `PaperFeed` trait for fetching paper metadata
//! from remote providers, with an arXiv Atom API implementation. The
//! scheduler uses the submission-window fetch, the search engine the
//! query fetch. A separate `CitedFeed` trait covers sources of
//! highly-cited papers, implemented against Semantic Scholar.

mod arxiv;
mod semantic_scholar;
mod types;

pub use arxiv::ArxivFeed;
pub use semantic_scholar::SemanticScholarFeed;
pub use types::*;
