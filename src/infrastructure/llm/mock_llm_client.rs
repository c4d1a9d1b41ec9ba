use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{GenerationRequest, LlmClient, LlmClientError};

/// Replies with a fixed answer and remembers what it was asked.
pub struct MockLlmClient {
    response: Result<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl MockLlmClient {
    pub fn responding(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Every call fails with `ApiRequestFailed(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.clone());

        self.response
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}
