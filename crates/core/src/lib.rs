pub mod catalog;
pub mod config;
pub mod feed;
pub mod scheduler;
pub mod search;
pub mod service;
pub mod summarizer;

pub use catalog::{
    CatalogError, NewPaper, Paper, PaperCatalog, Partition, SearchField, SqlitePaperCatalog,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use feed::{ArxivFeed, CitedFeed, FeedError, PaperFeed, SemanticScholarFeed};
pub use scheduler::IngestScheduler;
pub use search::{SearchEngine, SearchItem};
pub use service::{CatalogService, PaperPage, ServiceError};
pub use summarizer::{OpenRouterSummarizer, PdfTextExtractor, Summarizer, TextExtractor};
