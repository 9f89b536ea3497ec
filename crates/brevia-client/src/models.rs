use serde::{Deserialize, Serialize};

/// Request body of the summarization exchange.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeBody {
    pub text: String,
}

/// Success response body of the summarization exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryBody {
    pub summary: String,
}

/// Error body some deployments of the service answer with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = SummarizeBody {
            text: "long text".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "long text" }));
    }

    #[test]
    fn test_success_body_parses() {
        let body: SummaryBody = serde_json::from_str(r#"{"summary":"short"}"#).unwrap();
        assert_eq!(body.summary, "short");
    }

    #[test]
    fn test_error_body_parses() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"No text provided for summarization"}"#).unwrap();
        assert_eq!(body.error, "No text provided for summarization");
    }

    #[test]
    fn test_missing_summary_field_is_rejected() {
        let result = serde_json::from_str::<SummaryBody>(r#"{"result":"short"}"#);
        assert!(result.is_err());
    }
}
