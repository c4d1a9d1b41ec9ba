use async_trait::async_trait;

use crate::domain::{EvaluationResult, ExtractedText};

/// Grades a paper against a rubric.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(
        &self,
        document_text: &ExtractedText,
        rubric_text: &ExtractedText,
    ) -> Result<EvaluationResult, EvaluationError>;
}

/// Failures callers surface to the user as-is. Both are retryable by
/// submitting again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Failed to get a valid response from the AI model.")]
    Remote,
    #[error("AI response is missing required fields. Please try again.")]
    MissingFields,
}
