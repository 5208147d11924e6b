//! OpenRouter chat-completions summarizer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::SummarizerConfig;

use super::{Summarizer, SummarizerError};

const SYSTEM_PROMPT: &str = "You are a helpful assistant that explains high level technical \
reports in layman terms. Ensure the output has 2 paragraphs: the first paragraph is a layman \
abstraction; the second can be longer and contains the methodology and results, explaining the \
methodology in simple terms. Do not include formatting such as **Abstract** or **Methodology**.";

/// Summarizer backed by an OpenRouter-compatible chat-completions endpoint.
pub struct OpenRouterSummarizer {
    client: reqwest::Client,
    config: SummarizerConfig,
}

impl OpenRouterSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl Summarizer for OpenRouterSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        // Nothing to summarize, skip the round-trip
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::Json(e.to_string()))?;

        let summary = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        debug!(chars = summary.len(), "Generated layman summary");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummarizerConfig;

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        // No HTTP call is made for empty input, so a bogus endpoint is fine.
        let summarizer = OpenRouterSummarizer::new(SummarizerConfig {
            api_key: "k".to_string(),
            base_url: "http://127.0.0.1:1/never".to_string(),
            model: "test".to_string(),
            max_tokens: 128,
            timeout_secs: 1,
        });

        let summary = summarizer.summarize("   \n ").await.unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Plain words."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Plain words.");
    }
}
