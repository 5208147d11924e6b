//! Semantic Scholar bulk search feed for highly-cited papers.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration as StdDuration;
use tracing::debug;

use crate::config::CitedFeedConfig;

use super::{CitedFeed, FeedError, RawPaper};

/// Publication date used when Semantic Scholar reports none. Matches the
/// lower bound of the year filter.
const FALLBACK_PUBLISHED: &str = "2015-01-01T00:00:00Z";

/// Semantic Scholar bulk paper search client.
///
/// Fetches computer-science papers above a citation threshold; papers
/// cross-listed under any other field of study are dropped.
pub struct SemanticScholarFeed {
    client: Client,
    config: CitedFeedConfig,
}

#[derive(Debug, Deserialize)]
struct BulkSearchResponse {
    #[serde(default)]
    data: Vec<ScholarPaper>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScholarPaper {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<ScholarAuthor>,
    publication_date: Option<String>,
    citation_count: Option<i64>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    url: Option<String>,
    fields_of_study: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ScholarAuthor {
    name: Option<String>,
}

impl SemanticScholarFeed {
    /// Create a new feed client with the given configuration.
    pub fn new(config: CitedFeedConfig) -> Self {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn build_url(&self) -> String {
        format!(
            "{}?query=%2A&fields={}&limit={}&minCitationCount={}&fieldsOfStudy={}&sort={}&year=2015-",
            self.config.base_url,
            urlencoding::encode("title,authors,publicationDate,citationCount,abstract,url,fieldsOfStudy"),
            self.config.limit,
            self.config.min_citations,
            urlencoding::encode("Computer Science"),
            urlencoding::encode("citationCount:desc"),
        )
    }
}

#[async_trait::async_trait]
impl CitedFeed for SemanticScholarFeed {
    async fn fetch_popular(&self) -> Result<Vec<RawPaper>, FeedError> {
        let url = self.build_url();
        debug!(url = url, "Querying Semantic Scholar");

        let response = self.client.get(&url).send().await.map_err(|e| {
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

        let papers = parse_bulk_response(&body)?;
        debug!(count = papers.len(), "Fetched highly-cited papers");
        Ok(papers)
    }
}

/// Parse a bulk search response into raw papers.
///
/// Entries without a title or URL are skipped, as are papers whose fields
/// of study are anything other than exactly computer science.
pub(crate) fn parse_bulk_response(json: &str) -> Result<Vec<RawPaper>, FeedError> {
    let response: BulkSearchResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Parse(e.to_string()))?;

    let papers = response
        .data
        .into_iter()
        .filter_map(|paper| {
            let fields = paper.fields_of_study.unwrap_or_default();
            if fields != ["Computer Science"] {
                return None;
            }

            let title = paper.title.filter(|t| !t.trim().is_empty())?;
            let link = paper.url.filter(|u| !u.trim().is_empty())?;

            Some(RawPaper {
                title: title.trim().to_string(),
                authors: paper
                    .authors
                    .into_iter()
                    .filter_map(|a| a.name)
                    .collect(),
                published: paper
                    .publication_date
                    .map(|d| format!("{}T00:00:00Z", d))
                    .unwrap_or_else(|| FALLBACK_PUBLISHED.to_string()),
                summary: paper.abstract_text.unwrap_or_default(),
                link: link.trim().to_string(),
                categories: fields,
                citations: paper.citation_count.unwrap_or(0),
            })
        })
        .collect();

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "total": 3,
        "data": [
            {
                "title": "Deep Residual Learning for Image Recognition",
                "authors": [{"name": "Kaiming He"}, {"name": "Xiangyu Zhang"}],
                "publicationDate": "2015-12-10",
                "citationCount": 180000,
                "abstract": "Deeper neural networks are more difficult to train.",
                "url": "https://www.semanticscholar.org/paper/resnet",
                "fieldsOfStudy": ["Computer Science"]
            },
            {
                "title": "A Cross-Listed Paper",
                "authors": [{"name": "Someone Else"}],
                "publicationDate": "2018-01-01",
                "citationCount": 25000,
                "abstract": "Also popular elsewhere.",
                "url": "https://www.semanticscholar.org/paper/crosslisted",
                "fieldsOfStudy": ["Computer Science", "Medicine"]
            },
            {
                "title": "No Date Paper",
                "authors": [],
                "publicationDate": null,
                "citationCount": 12000,
                "abstract": null,
                "url": "https://www.semanticscholar.org/paper/nodate",
                "fieldsOfStudy": ["Computer Science"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_bulk_response_keeps_pure_cs_papers() {
        let papers = parse_bulk_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(papers.len(), 2);

        let first = &papers[0];
        assert_eq!(first.title, "Deep Residual Learning for Image Recognition");
        assert_eq!(
            first.authors,
            vec!["Kaiming He".to_string(), "Xiangyu Zhang".to_string()]
        );
        assert_eq!(first.published, "2015-12-10T00:00:00Z");
        assert_eq!(first.citations, 180_000);
        assert_eq!(first.categories, vec!["Computer Science"]);
    }

    #[test]
    fn test_parse_bulk_response_defaults_missing_date() {
        let papers = parse_bulk_response(SAMPLE_RESPONSE).unwrap();
        let no_date = papers.iter().find(|p| p.title == "No Date Paper").unwrap();
        assert_eq!(no_date.published, FALLBACK_PUBLISHED);
        assert!(no_date.summary.is_empty());
    }

    #[test]
    fn test_parse_bulk_response_skips_incomplete_entries() {
        let json = r#"{"data": [
            {"title": null, "url": "https://x/1", "fieldsOfStudy": ["Computer Science"]},
            {"title": "Untracked", "url": null, "fieldsOfStudy": ["Computer Science"]}
        ]}"#;
        let papers = parse_bulk_response(json).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_bulk_response_empty_body() {
        let papers = parse_bulk_response(r#"{"data": []}"#).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_bulk_response_malformed() {
        assert!(parse_bulk_response("not json").is_err());
    }

    #[test]
    fn test_build_url() {
        let feed = SemanticScholarFeed::new(CitedFeedConfig::default());
        let url = feed.build_url();

        assert!(url.starts_with("http://api.semanticscholar.org/graph/v1/paper/search/bulk?"));
        assert!(url.contains("minCitationCount=10000"));
        assert!(url.contains("limit=1000"));
        assert!(url.contains("year=2015-"));
        assert!(url.contains(&urlencoding::encode("citationCount:desc").to_string()));
    }
}
