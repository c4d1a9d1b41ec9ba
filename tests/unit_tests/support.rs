use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rubric_grader::application::ports::{
    EvaluationError, Evaluator, FileLoader, FileLoaderError,
};
use rubric_grader::domain::{
    ContentType, CriterionFeedback, Document, EvaluationResult, ExtractedText,
};
use tokio::sync::Notify;

pub const PAPER_TEXT: &str = "Paper body text...";
pub const RUBRIC_TEXT: &str = "Clarity (0-10): ...\nRigor (0-10): ...";
pub const SCENARIO_RESPONSE: &str = r#"{"overallScore":7.5,"summary":"Solid draft.","criteriaFeedback":[{"criterion":"Clarity","score":8,"feedback":"Clear prose."},{"criterion":"Rigor","score":7,"feedback":"Needs more citations."}]}"#;

pub fn pdf(filename: &str) -> Document {
    Document::new(filename.to_string(), ContentType::Pdf, Vec::<u8>::new())
}

pub fn text(value: &str) -> ExtractedText {
    ExtractedText::new(value.to_string()).unwrap()
}

/// Returns a scripted result per filename and counts calls.
pub struct ScriptedFileLoader {
    outputs: HashMap<String, Result<String, String>>,
    calls: AtomicUsize,
}

impl ScriptedFileLoader {
    pub fn new() -> Self {
        Self {
            outputs: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_text(mut self, filename: &str, text: &str) -> Self {
        self.outputs
            .insert(filename.to_string(), Ok(text.to_string()));
        self
    }

    pub fn with_failure(mut self, filename: &str, reason: &str) -> Self {
        self.outputs
            .insert(filename.to_string(), Err(reason.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileLoader for ScriptedFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outputs.get(&document.filename) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(FileLoaderError::ExtractionFailed(reason.clone())),
            None => Err(FileLoaderError::ExtractionFailed(format!(
                "no script for {}",
                document.filename
            ))),
        }
    }
}

pub fn scenario_result() -> EvaluationResult {
    EvaluationResult {
        overall_score: 7.5,
        summary: "Solid draft.".to_string(),
        criteria_feedback: vec![
            CriterionFeedback {
                criterion: "Clarity".to_string(),
                score: 8.0,
                feedback: "Clear prose.".to_string(),
            },
            CriterionFeedback {
                criterion: "Rigor".to_string(),
                score: 7.0,
                feedback: "Needs more citations.".to_string(),
            },
        ],
    }
}

/// Evaluator stub with a fixed outcome and a call counter.
pub struct CountingEvaluator {
    outcome: Result<EvaluationResult, EvaluationError>,
    calls: AtomicUsize,
}

impl CountingEvaluator {
    pub fn succeeding(result: EvaluationResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: EvaluationError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Evaluator for CountingEvaluator {
    async fn evaluate(
        &self,
        _document_text: &ExtractedText,
        _rubric_text: &ExtractedText,
    ) -> Result<EvaluationResult, EvaluationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Blocks inside `evaluate` until released, so a cycle can be held open.
pub struct GatedEvaluator {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait::async_trait]
impl Evaluator for GatedEvaluator {
    async fn evaluate(
        &self,
        _document_text: &ExtractedText,
        _rubric_text: &ExtractedText,
    ) -> Result<EvaluationResult, EvaluationError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(scenario_result())
    }
}
