use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No text provided for summarization")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Endpoint returned HTTP {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Malformed response body: {message}")]
    MalformedResponse { message: String },

    #[error("Exchange timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl From<ClientError> for brevia_core::BreviaError {
    fn from(err: ClientError) -> Self {
        match err {
            // Invalid input is the caller's problem, not the exchange's;
            // the UI surfaces the two differently.
            ClientError::EmptyInput => brevia_core::BreviaError::InvalidInput {
                message: err.to_string(),
            },
            ClientError::Configuration { message } => brevia_core::BreviaError::ConfigInvalid {
                issue: message,
                suggestion: "Check the [endpoint] section of the configuration".to_string(),
            },
            other => brevia_core::BreviaError::Network {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brevia_core::BreviaError;

    #[test]
    fn test_empty_input_maps_to_invalid_input() {
        let err: BreviaError = ClientError::EmptyInput.into();
        assert!(matches!(err, BreviaError::InvalidInput { .. }));
    }

    #[test]
    fn test_exchange_failures_map_to_network() {
        let err: BreviaError = ClientError::Api {
            status_code: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, BreviaError::Network { .. }));

        let err: BreviaError = ClientError::MalformedResponse {
            message: "not json".to_string(),
        }
        .into();
        assert!(matches!(err, BreviaError::Network { .. }));

        let err: BreviaError = ClientError::Timeout { timeout_ms: 30_000 }.into();
        assert!(matches!(err, BreviaError::Network { .. }));
    }
}
