use async_trait::async_trait;

/// A single structured generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    /// JSON schema the model must shape its answer to.
    pub response_schema: serde_json::Value,
    pub temperature: f32,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one request and returns the raw text of the model's answer.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api key is not configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
