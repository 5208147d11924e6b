//! PDF full-text extraction for arXiv papers.

use async_trait::async_trait;
use regex_lite::Regex;
use std::time::Duration;
use tracing::{debug, warn};

use super::TextExtractor;

/// Extracts text from the PDF rendition of an arXiv abstract link
/// (`/abs/` rewritten to `/pdf/`).
pub struct PdfTextExtractor {
    client: reqwest::Client,
}

impl PdfTextExtractor {
    pub fn new(timeout_secs: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn try_extract(&self, link: &str) -> Result<String, String> {
        let pdf_url = link.replace("/abs/", "/pdf/");

        let response = self
            .client
            .get(&pdf_url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }

        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        extract_pdf_text(&bytes)
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, link: &str) -> String {
        match self.try_extract(link).await {
            Ok(text) => {
                debug!(link = link, chars = text.len(), "Extracted paper text");
                text
            }
            Err(e) => {
                warn!(link = link, error = %e, "Text extraction failed");
                String::new()
            }
        }
    }
}

/// Pull text out of PDF bytes, page by page, stopping at the bibliography.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;

    // Everything from the references section on is noise for summarization.
    let references = Regex::new(r"(?i)\breferences\b").map_err(|e| e.to_string())?;

    let mut text = String::new();
    for (page_num, _) in doc.get_pages() {
        let page_text = match doc.extract_text(&[page_num]) {
            Ok(t) => t,
            Err(e) => {
                debug!(page = page_num, error = %e, "Skipping unreadable page");
                continue;
            }
        };

        if references.is_match(&page_text) {
            break;
        }

        text.push_str(&page_text);
        text.push_str("\n\n");
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rejects_non_pdf_bytes() {
        let result = extract_pdf_text(b"<html>not a pdf</html>");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extract_returns_empty_on_unreachable_host() {
        let extractor = PdfTextExtractor::new(1);
        let text = extractor.extract("http://127.0.0.1:1/abs/1234.5678").await;
        assert!(text.is_empty());
    }
}
