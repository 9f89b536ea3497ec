use crate::error::{ClientError, Result};
use crate::models::{ApiErrorBody, SummarizeBody, SummaryBody};
use async_trait::async_trait;
use brevia_core::config::EndpointConfig;
use brevia_core::summarizer::{SummarizeRequest, SummarizeResponse, Summarizer};
use reqwest::{header, Client, Response};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument};

/// Summarization endpoint client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000/summarize".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&EndpointConfig> for HttpConfig {
    fn from(config: &EndpointConfig) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Network-backed summarizer: one POST exchange per request, no automatic
/// retries. A failed exchange is reported to the caller and must be
/// re-triggered by the user.
pub struct HttpSummarizer {
    client: Client,
    config: HttpConfig,
}

impl HttpSummarizer {
    pub fn new(config: HttpConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::Configuration {
                message: "Summarization endpoint URL must be set".to_string(),
            });
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("brevia/0.1.0"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn from_endpoint_config(config: &EndpointConfig) -> Result<Self> {
        Self::new(config.into())
    }

    #[instrument(skip(self, body), fields(url = %self.config.url))]
    async fn exchange(&self, body: &SummarizeBody) -> Result<SummaryBody> {
        debug!("Posting summarization request to: {}", self.config.url);

        let response = timeout(
            self.config.timeout,
            self.client.post(&self.config.url).json(body).send(),
        )
        .await
        .map_err(|_| ClientError::Timeout {
            timeout_ms: self.config.timeout.as_millis() as u64,
        })?
        .map_err(ClientError::Http)?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<SummaryBody> {
        let status = response.status();

        if status.is_success() {
            let response_text = response.text().await.map_err(ClientError::Http)?;
            debug!("Received response: {}", response_text);

            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse response: {}, text: {}", e, response_text);
                ClientError::MalformedResponse {
                    message: e.to_string(),
                }
            })
        } else {
            Err(self.parse_error_response(response).await)
        }
    }

    async fn parse_error_response(&self, response: Response) -> ClientError {
        let status_code = response.status().as_u16();
        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ClientError::Http(e),
        };

        // The service answers errors as { "error": ... } when it can
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&response_text) {
            ClientError::Api {
                status_code,
                message: body.error,
            }
        } else {
            let message = if response_text.is_empty() {
                "no response body".to_string()
            } else {
                response_text
            };
            ClientError::Api {
                status_code,
                message,
            }
        }
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn summarize(
        &self,
        request: SummarizeRequest,
    ) -> brevia_core::Result<SummarizeResponse> {
        if request.text.trim().is_empty() {
            return Err(ClientError::EmptyInput.into());
        }

        info!(
            "Requesting summary for {} characters of input",
            request.text.chars().count()
        );

        let body = SummarizeBody { text: request.text };
        let summary = self.exchange(&body).await?;

        Ok(SummarizeResponse {
            id: request.id,
            summary: summary.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_from_endpoint_config() {
        let endpoint_config = EndpointConfig {
            url: "http://summarizer.test/summarize".to_string(),
            timeout_seconds: 60,
            offline: false,
        };

        let http_config = HttpConfig::from(&endpoint_config);
        assert_eq!(http_config.url, "http://summarizer.test/summarize");
        assert_eq!(http_config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_client_creation_fails_without_url() {
        let config = HttpConfig {
            url: String::new(),
            ..Default::default()
        };

        let result = HttpSummarizer::new(config);
        assert!(result.is_err());

        if let Err(ClientError::Configuration { message }) = result {
            assert!(message.contains("URL"));
        } else {
            panic!("Expected Configuration error");
        }
    }

    #[tokio::test]
    async fn test_empty_input_rejected_without_exchange() {
        // The loopback port below is never contacted: the guard fires first.
        let client = HttpSummarizer::new(HttpConfig {
            url: "http://127.0.0.1:1/summarize".to_string(),
            timeout: Duration::from_millis(100),
        })
        .expect("client");

        let result = client.summarize(SummarizeRequest::new("   \n")).await;
        assert!(matches!(
            result,
            Err(brevia_core::BreviaError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        // Port 1 on loopback refuses connections immediately.
        let client = HttpSummarizer::new(HttpConfig {
            url: "http://127.0.0.1:1/summarize".to_string(),
            timeout: Duration::from_secs(2),
        })
        .expect("client");

        let result = client.summarize(SummarizeRequest::new("some text")).await;
        assert!(matches!(
            result,
            Err(brevia_core::BreviaError::Network { .. })
        ));
    }
}
