use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Feed category allow-list is non-empty
/// - Scheduler retention is at least one day
/// - Cited feed request limit is at least 1 when a cited feed is configured
/// - Summarizer API key is non-empty when a summarizer is configured
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.feed.categories.is_empty() {
        return Err(ConfigError::ValidationError(
            "feed.categories cannot be empty".to_string(),
        ));
    }

    if config.scheduler.retention_days == 0 {
        return Err(ConfigError::ValidationError(
            "scheduler.retention_days must be at least 1".to_string(),
        ));
    }

    if let Some(cited) = &config.cited_feed {
        if cited.limit == 0 {
            return Err(ConfigError::ValidationError(
                "cited_feed.limit must be at least 1".to_string(),
            ));
        }
    }

    if let Some(summarizer) = &config.summarizer {
        if summarizer.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "summarizer.api_key cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
