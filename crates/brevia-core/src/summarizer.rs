use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub id: Uuid,
    pub text: String,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub id: Uuid,
    pub summary: String,
}

/// Capability of turning a piece of text into a summary.
///
/// The network-backed client and the offline placeholder both implement
/// this, so the UI and the tests share one contract. Implementations must
/// reject empty or whitespace-only input without doing any work.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse>;
}
