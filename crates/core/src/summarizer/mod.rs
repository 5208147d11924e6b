//! Full-text extraction and layman summarization.
//!
//! Two collaborator traits sit at this seam: `TextExtractor` pulls the
//! document body from a paper link (best-effort, never fails loudly), and
//! `Summarizer` turns that body into a plain-language summary. Daily
//! ingestion only stores a paper once the summary comes back non-empty.

mod llm;
mod pdf;

pub use llm::OpenRouterSummarizer;
pub use pdf::PdfTextExtractor;

use async_trait::async_trait;
use thiserror::Error;

/// Errors for summarization operations.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(String),
}

/// Best-effort full-text extraction from a paper's document link.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the extracted text, or an empty string on any failure
    /// (network, parse, format). Never errors.
    async fn extract(&self, link: &str) -> String;
}

/// Plain-language summarization of extracted paper text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the given text. Empty input yields empty output; callers
    /// treat an error or an empty result as "skip this paper".
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError>;
}
