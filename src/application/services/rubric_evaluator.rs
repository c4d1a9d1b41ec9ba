use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    EvaluationError, Evaluator, GenerationRequest, LlmClient, LlmClientError,
};
use crate::domain::{CriterionFeedback, EvaluationResult, ExtractedText};

use super::evaluation_prompt::{build_evaluation_prompt, evaluation_response_schema};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Grades documents with one structured call to a hosted model.
pub struct RubricEvaluator<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    temperature: f32,
}

impl<L> RubricEvaluator<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self {
            llm_client,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl<L> Evaluator for RubricEvaluator<L>
where
    L: LlmClient + ?Sized,
{
    #[tracing::instrument(
        skip_all,
        fields(
            document_chars = document_text.char_count(),
            rubric_chars = rubric_text.char_count(),
        )
    )]
    async fn evaluate(
        &self,
        document_text: &ExtractedText,
        rubric_text: &ExtractedText,
    ) -> Result<EvaluationResult, EvaluationError> {
        let request = GenerationRequest {
            prompt: build_evaluation_prompt(document_text, rubric_text),
            response_schema: evaluation_response_schema(),
            temperature: self.temperature,
        };

        let raw = self
            .llm_client
            .generate(&request)
            .await
            .map_err(|e: LlmClientError| {
                tracing::error!(error = %e, "Model call failed");
                EvaluationError::Remote
            })?;

        let result = decode_evaluation(&raw)?;

        let out_of_range: Vec<f64> = result.out_of_range_scores().collect();
        if !out_of_range.is_empty() {
            tracing::warn!(?out_of_range, "Model returned scores outside 0-10");
        }

        tracing::info!(
            overall_score = result.overall_score,
            criteria_count = result.criteria_feedback.len(),
            "Evaluation complete"
        );

        Ok(result)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvaluation {
    overall_score: Option<f64>,
    summary: Option<String>,
    criteria_feedback: Option<Vec<RawCriterion>>,
}

#[derive(Deserialize)]
struct RawCriterion {
    criterion: Option<String>,
    score: Option<f64>,
    feedback: Option<String>,
}

/// Turns the model's raw answer into a fully populated result.
///
/// The schema sent with the request is not trusted: fields the model dropped
/// are reported as `MissingFields` instead of being defaulted.
fn decode_evaluation(raw: &str) -> Result<EvaluationResult, EvaluationError> {
    let parsed: RawEvaluation = serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::error!(error = %e, "Model response is not valid evaluation JSON");
        EvaluationError::Remote
    })?;

    let (Some(overall_score), Some(raw_criteria)) =
        (parsed.overall_score, parsed.criteria_feedback)
    else {
        tracing::warn!("Model response lacks overallScore or criteriaFeedback");
        return Err(EvaluationError::MissingFields);
    };

    let criteria_feedback = raw_criteria
        .into_iter()
        .map(|c| match (c.criterion, c.score, c.feedback) {
            (Some(criterion), Some(score), Some(feedback)) if !criterion.trim().is_empty() => {
                Ok(CriterionFeedback {
                    criterion,
                    score,
                    feedback,
                })
            }
            _ => Err(EvaluationError::MissingFields),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EvaluationResult {
        overall_score,
        summary: parsed.summary.unwrap_or_default(),
        criteria_feedback,
    })
}
