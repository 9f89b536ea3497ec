use crate::error::{ClientError, Result};
use crate::http::HttpSummarizer;
use crate::offline::FixedSummarizer;
use brevia_core::config::EndpointConfig;
use brevia_core::summarizer::Summarizer;
use std::sync::Arc;
use tracing::{info, warn};

/// Factory for creating summarizer clients
pub struct SummarizerFactory;

impl SummarizerFactory {
    /// Create a summarizer based on configuration
    pub fn create(config: &EndpointConfig) -> Result<Arc<dyn Summarizer>> {
        if config.offline || config.url.is_empty() {
            info!("Offline mode; using fixed placeholder summarizer");
            return Ok(Arc::new(FixedSummarizer));
        }

        Self::validate_config(config)?;

        info!("Creating HTTP summarizer for {}", config.url);
        let client = HttpSummarizer::from_endpoint_config(config)?;
        Ok(Arc::new(client))
    }

    /// Validate endpoint configuration
    pub fn validate_config(config: &EndpointConfig) -> Result<()> {
        if !config.offline {
            if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
                return Err(ClientError::Configuration {
                    message: "Endpoint URL must start with http:// or https://".to_string(),
                });
            }
        }

        if config.timeout_seconds == 0 {
            warn!("Timeout is set to 0, this may cause issues");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::PLACEHOLDER_SUMMARY;
    use brevia_core::summarizer::SummarizeRequest;

    #[test]
    fn test_validate_config_invalid_url() {
        let config = EndpointConfig {
            url: "summarizer.local/summarize".to_string(),
            timeout_seconds: 30,
            offline: false,
        };

        let result = SummarizerFactory::validate_config(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_config_valid() {
        let config = EndpointConfig {
            url: "https://summarizer.local/summarize".to_string(),
            timeout_seconds: 30,
            offline: false,
        };

        let result = SummarizerFactory::validate_config(&config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_config_offline_skips_url_check() {
        let config = EndpointConfig {
            url: String::new(),
            timeout_seconds: 30,
            offline: true,
        };

        let result = SummarizerFactory::validate_config(&config);
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_offline_uses_fixed_summarizer() {
        let config = EndpointConfig {
            url: "http://127.0.0.1:5000/summarize".to_string(),
            timeout_seconds: 30,
            offline: true,
        };

        let summarizer = SummarizerFactory::create(&config).expect("offline summarizer");
        let response = summarizer
            .summarize(SummarizeRequest::new("Hello"))
            .await
            .expect("placeholder response");
        assert_eq!(response.summary, PLACEHOLDER_SUMMARY);
    }

    #[tokio::test]
    async fn test_create_without_url_falls_back_to_fixed() {
        let config = EndpointConfig {
            url: String::new(),
            timeout_seconds: 30,
            offline: false,
        };

        let summarizer = SummarizerFactory::create(&config).expect("fallback summarizer");
        let response = summarizer
            .summarize(SummarizeRequest::new("Hello"))
            .await
            .expect("placeholder response");
        assert_eq!(response.summary, PLACEHOLDER_SUMMARY);
    }
}
