use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub cited_feed: Option<CitedFeedConfig>,
    #[serde(default)]
    pub summarizer: Option<SummarizerConfig>,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("bytesize.db")
}

/// Remote feed configuration (arXiv export API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Query endpoint base URL
    #[serde(default = "default_feed_base_url")]
    pub base_url: String,
    /// Category allow-list; papers with any category outside it are dropped
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Maximum entries requested per submission-window fetch (default: 100)
    #[serde(default = "default_window_max_results")]
    pub window_max_results: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base_url(),
            categories: default_categories(),
            timeout_secs: default_timeout(),
            window_max_results: default_window_max_results(),
        }
    }
}

fn default_feed_base_url() -> String {
    "http://export.arxiv.org/api/query".to_string()
}

fn default_categories() -> Vec<String> {
    ["cs.AI", "cs.CL", "cs.CV", "cs.LG", "cs.MA", "cs.NE"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timeout() -> u32 {
    30
}

fn default_window_max_results() -> u32 {
    100
}

/// Highly-cited paper feed configuration (Semantic Scholar bulk search).
/// When absent the cited partition is never fed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CitedFeedConfig {
    /// Bulk search endpoint URL
    #[serde(default = "default_cited_base_url")]
    pub base_url: String,
    /// Minimum citation count for a paper to qualify (default: 10000)
    #[serde(default = "default_min_citations")]
    pub min_citations: u32,
    /// Maximum papers requested per fetch (default: 1000)
    #[serde(default = "default_cited_limit")]
    pub limit: u32,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for CitedFeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_cited_base_url(),
            min_citations: default_min_citations(),
            limit: default_cited_limit(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_cited_base_url() -> String {
    "http://api.semanticscholar.org/graph/v1/paper/search/bulk".to_string()
}

fn default_min_citations() -> u32 {
    10_000
}

fn default_cited_limit() -> u32 {
    1000
}

/// Summarizer configuration. When absent the ingestion scheduler is not
/// started, since nothing could produce layman summaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizerConfig {
    /// API key for the chat-completions endpoint
    pub api_key: String,
    /// Chat-completions endpoint URL
    #[serde(default = "default_summarizer_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Completion token budget (default: 2048)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds (default: 120)
    #[serde(default = "default_summarizer_timeout")]
    pub timeout_secs: u32,
}

fn default_summarizer_base_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_summarizer_timeout() -> u32 {
    120
}

/// Ingestion scheduler configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Whether the daily ingestion loop runs (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Recent papers older than this are evicted (default: 60 days)
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Maximum papers backfilled with a layman summary per cycle
    #[serde(default = "default_backfill_limit")]
    pub backfill_limit: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            retention_days: default_retention_days(),
            backfill_limit: default_backfill_limit(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_retention_days() -> u32 {
    60
}

fn default_backfill_limit() -> u32 {
    25
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub feed: FeedConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cited_feed: Option<CitedFeedConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarizer: Option<SanitizedSummarizerConfig>,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSummarizerConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            database: config.database.clone(),
            feed: config.feed.clone(),
            cited_feed: config.cited_feed.clone(),
            summarizer: config
                .summarizer
                .as_ref()
                .map(|s| SanitizedSummarizerConfig {
                    base_url: s.base_url.clone(),
                    model: s.model.clone(),
                    max_tokens: s.max_tokens,
                    timeout_secs: s.timeout_secs,
                }),
            scheduler: config.scheduler.clone(),
        }
    }
}
