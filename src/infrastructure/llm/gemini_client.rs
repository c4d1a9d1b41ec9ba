use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// `generateContent` client for the Gemini REST API.
///
/// Every call is an independent single-turn request; nothing is retried.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Fails with `MissingApiKey` when the key is absent or blank.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self, LlmClientError> {
        Self::with_options(api_key, model, GEMINI_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_options(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(LlmClientError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("http client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn candidate_text(response: GenerateContentResponse) -> Result<String, LlmClientError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmClientError::InvalidResponse(format!(
            "prompt blocked: {reason}"
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmClientError::InvalidResponse("no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmClientError::InvalidResponse(format!(
            "empty candidate (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }

    Ok(text)
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError> {
        tracing::debug!(
            prompt = %sanitize_prompt(&request.prompt),
            temperature = request.temperature,
            "Sending generateContent request"
        );

        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmClientError::Timeout
                } else {
                    LlmClientError::ApiRequestFailed(e.to_string())
                }
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {status}: {text}"
            )));
        }

        let raw_bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                LlmClientError::Timeout
            } else {
                LlmClientError::ApiRequestFailed(format!("failed to read body: {e}"))
            }
        })?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse generateContent JSON"
            );
            LlmClientError::InvalidResponse(e.to_string())
        })?;

        let text = candidate_text(parsed)?;
        tracing::info!(response_chars = text.len(), "Model response received");
        Ok(text)
    }
}
