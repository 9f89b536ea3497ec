use crate::error::ClientError;
use async_trait::async_trait;
use brevia_core::summarizer::{SummarizeRequest, SummarizeResponse, Summarizer};

/// The summary the offline variant answers with, regardless of input.
pub const PLACEHOLDER_SUMMARY: &str = "This is a placeholder summary produced in offline mode. \
Configure a summarization endpoint to get real results.";

/// Stand-in summarizer used when no endpoint is configured or offline mode
/// is requested. Also serves as the test stub for everything that consumes
/// the Summarizer contract.
#[derive(Debug, Default)]
pub struct FixedSummarizer;

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(
        &self,
        request: SummarizeRequest,
    ) -> brevia_core::Result<SummarizeResponse> {
        if request.text.trim().is_empty() {
            return Err(ClientError::EmptyInput.into());
        }

        Ok(SummarizeResponse {
            id: request.id,
            summary: PLACEHOLDER_SUMMARY.to_string(),
        })
    }
}
