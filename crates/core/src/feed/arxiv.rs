//! arXiv Atom API feed implementation.

use chrono::{Duration, Utc};
use reqwest::Client;
use std::time::Duration as StdDuration;
use tracing::debug;

use crate::catalog::SearchField;
use crate::config::FeedConfig;

use super::{FeedError, FeedQuery, PaperFeed, RawPaper};

/// arXiv export API feed.
pub struct ArxivFeed {
    client: Client,
    config: FeedConfig,
}

impl ArxivFeed {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Self {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Build the query URL for a single submission-day window.
    fn build_window_url(&self, look_back_days: u32) -> String {
        let day = (Utc::now() - Duration::days(look_back_days as i64)).format("%Y%m%d");

        let cats = self
            .config
            .categories
            .iter()
            .map(|c| format!("cat:{}", c))
            .collect::<Vec<_>>()
            .join(" OR ");

        let search_query = format!(
            "({}) AND submittedDate:[{}0000 TO {}2359]",
            cats, day, day
        );

        format!(
            "{}?search_query={}&max_results={}&sortBy=submittedDate&sortOrder=descending",
            self.config.base_url,
            urlencoding::encode(&search_query),
            self.config.window_max_results,
        )
    }

    /// Build the query URL for a search request.
    fn build_query_url(&self, query: &FeedQuery) -> String {
        let (search_query, max_results) = match query {
            FeedQuery::Exact {
                field,
                text,
                max_results,
            } => {
                let prefix = match field {
                    SearchField::Title => "ti",
                    SearchField::Author => "au",
                };
                (format!("{}:\"{}\"", prefix, text), *max_results)
            }
            FeedQuery::AnyTerm { terms, max_results } => (
                terms
                    .iter()
                    .map(|t| format!("ti:{}", t))
                    .collect::<Vec<_>>()
                    .join(" OR "),
                *max_results,
            ),
        };

        format!(
            "{}?search_query={}&max_results={}&sortBy=relevance&sortOrder=descending",
            self.config.base_url,
            urlencoding::encode(&search_query),
            max_results,
        )
    }

    async fn fetch(&self, url: &str) -> Result<Vec<RawPaper>, FeedError> {
        debug!(url = url, "Querying arXiv");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout
            } else if e.is_connect() {
                FeedError::ConnectionFailed(e.to_string())
            } else {
                FeedError::ApiError(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::ApiError(e.to_string()))?;

        parse_atom(&body)
    }

    /// True when every category of the entry is in the configured allow-list.
    fn all_categories_allowed(&self, paper: &RawPaper) -> bool {
        paper
            .categories
            .iter()
            .all(|c| self.config.categories.contains(c))
    }
}

#[async_trait::async_trait]
impl PaperFeed for ArxivFeed {
    async fn fetch_by_window(&self, look_back_days: u32) -> Result<Vec<RawPaper>, FeedError> {
        let url = self.build_window_url(look_back_days);
        let papers = self.fetch(&url).await?;

        // Cross-listed papers straying outside the configured categories
        // are dropped entirely.
        let papers: Vec<RawPaper> = papers
            .into_iter()
            .filter(|p| self.all_categories_allowed(p))
            .collect();

        debug!(
            count = papers.len(),
            look_back_days, "Fetched submission window"
        );
        Ok(papers)
    }

    async fn fetch_by_query(&self, query: &FeedQuery) -> Result<Vec<RawPaper>, FeedError> {
        let url = self.build_query_url(query);
        self.fetch(&url).await
    }
}

/// Parse an arXiv Atom feed into raw papers.
///
/// The `<id>` element of each entry doubles as the canonical abstract link.
pub(crate) fn parse_atom(xml: &str) -> Result<Vec<RawPaper>, FeedError> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut papers = Vec::new();

    let mut in_entry = false;
    let mut in_title = false;
    let mut in_author = false;
    let mut in_name = false;
    let mut in_summary = false;
    let mut in_published = false;
    let mut in_id = false;

    let mut title = String::new();
    let mut authors: Vec<String> = Vec::new();
    let mut name = String::new();
    let mut summary = String::new();
    let mut published = String::new();
    let mut link = String::new();
    let mut categories: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"entry" => {
                    in_entry = true;
                    title.clear();
                    authors.clear();
                    summary.clear();
                    published.clear();
                    link.clear();
                    categories.clear();
                }
                b"title" if in_entry => in_title = true,
                b"author" if in_entry => in_author = true,
                b"name" if in_author => {
                    in_name = true;
                    name.clear();
                }
                b"summary" if in_entry => in_summary = true,
                b"published" if in_entry => in_published = true,
                b"id" if in_entry => in_id = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"category" && in_entry {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"term" {
                            categories.push(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default();
                if in_title {
                    title.push_str(&text);
                } else if in_name {
                    name.push_str(&text);
                } else if in_summary {
                    summary.push_str(&text);
                } else if in_published {
                    published.push_str(&text);
                } else if in_id {
                    link.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"entry" => {
                    in_entry = false;
                    if !title.trim().is_empty() && !link.trim().is_empty() {
                        papers.push(RawPaper {
                            title: collapse_whitespace(&title),
                            authors: authors.clone(),
                            published: published.trim().to_string(),
                            summary: collapse_whitespace(&summary),
                            link: link.trim().to_string(),
                            categories: categories.clone(),
                            citations: 0,
                        });
                    }
                }
                b"title" => in_title = false,
                b"author" => {
                    if !name.trim().is_empty() {
                        authors.push(name.trim().to_string());
                        name.clear();
                    }
                    in_author = false;
                }
                b"name" => in_name = false,
                b"summary" => in_summary = false,
                b"published" => in_published = false,
                b"id" => in_id = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(papers)
}

/// Trim and collapse internal whitespace runs (Atom bodies wrap lines).
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
