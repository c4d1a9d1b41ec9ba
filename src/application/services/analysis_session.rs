use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::application::ports::{Evaluator, FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentRole, EvaluationResult, ExtractedText};

pub const MISSING_DOCUMENTS_MESSAGE: &str =
    "Please upload both the academic paper and the rubric PDF files.";
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Could not extract text from one or both PDFs. Please ensure they are text-based.";
pub const ANALYSIS_FAILED_PREFIX: &str = "Analysis Failed: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// How a completed `analyze` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Succeeded,
    MissingDocuments,
    ExtractionFailed,
    EvaluationFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedEvaluation {
    pub result: EvaluationResult,
    pub evaluated_at: DateTime<Utc>,
}

/// Read-only copy of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: AnalysisPhase,
    pub busy: bool,
    pub paper: Option<String>,
    pub rubric: Option<String>,
    pub error: Option<String>,
    pub evaluation: Option<CompletedEvaluation>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please select a valid PDF file.")]
    NotPdf,
    #[error("an analysis is already running")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("an analysis is already running")]
    Busy,
}

struct SessionState {
    phase: AnalysisPhase,
    paper: Option<Document>,
    rubric: Option<Document>,
    error: Option<String>,
    evaluation: Option<CompletedEvaluation>,
}

impl SessionState {
    fn slot_mut(&mut self, role: DocumentRole) -> &mut Option<Document> {
        match role {
            DocumentRole::Paper => &mut self.paper,
            DocumentRole::Rubric => &mut self.rubric,
        }
    }

    fn fail(&mut self, message: String) {
        self.phase = AnalysisPhase::Failed;
        self.evaluation = None;
        self.error = Some(message);
    }

    fn succeed(&mut self, result: EvaluationResult) {
        self.phase = AnalysisPhase::Succeeded;
        self.error = None;
        self.evaluation = Some(CompletedEvaluation {
            result,
            evaluated_at: Utc::now(),
        });
    }
}

/// Clears the busy flag when a cycle ends, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the paper/rubric pair and drives one analysis cycle at a time.
///
/// The session is the only writer of its state. `busy` is taken with a
/// compare-exchange so two cycles can never be `Running` together; a second
/// trigger gets `AnalysisError::Busy` and changes nothing.
pub struct AnalysisSession {
    file_loader: Arc<dyn FileLoader>,
    evaluator: Arc<dyn Evaluator>,
    busy: AtomicBool,
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    pub fn new(file_loader: Arc<dyn FileLoader>, evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            file_loader,
            evaluator,
            busy: AtomicBool::new(false),
            state: Mutex::new(SessionState {
                phase: AnalysisPhase::Idle,
                paper: None,
                rubric: None,
                error: None,
                evaluation: None,
            }),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Fills a slot. Anything not declared as PDF is turned away untouched.
    pub fn select_document(
        &self,
        role: DocumentRole,
        document: Document,
    ) -> Result<(), SelectionError> {
        if !document.is_pdf() {
            tracing::warn!(
                role = role.as_str(),
                content_type = document.content_type.as_mime(),
                "Rejected non-PDF selection"
            );
            return Err(SelectionError::NotPdf);
        }

        let mut state = self.lock_state();
        if self.is_busy() || state.phase == AnalysisPhase::Running {
            return Err(SelectionError::Busy);
        }
        tracing::debug!(
            role = role.as_str(),
            filename = %document.filename,
            bytes = document.size_bytes(),
            "Document selected"
        );
        *state.slot_mut(role) = Some(document);
        Ok(())
    }

    pub fn clear_document(&self, role: DocumentRole) -> Result<(), SelectionError> {
        let mut state = self.lock_state();
        if self.is_busy() || state.phase == AnalysisPhase::Running {
            return Err(SelectionError::Busy);
        }
        *state.slot_mut(role) = None;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state();
        SessionSnapshot {
            phase: state.phase,
            busy: self.is_busy(),
            paper: state.paper.as_ref().map(|d| d.filename.clone()),
            rubric: state.rubric.as_ref().map(|d| d.filename.clone()),
            error: state.error.clone(),
            evaluation: state.evaluation.clone(),
        }
    }

    /// Runs one full cycle: extract both documents, then grade.
    ///
    /// Every failure is recorded on the session as a single user-facing
    /// message; only a concurrent trigger is reported as `Err`.
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self) -> Result<AnalysisOutcome, AnalysisError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Analysis requested while another is running");
            return Err(AnalysisError::Busy);
        }
        let _busy = BusyGuard(&self.busy);

        let documents = {
            let mut state = self.lock_state();
            match (state.paper.clone(), state.rubric.clone()) {
                (Some(paper), Some(rubric)) => {
                    state.phase = AnalysisPhase::Running;
                    state.error = None;
                    state.evaluation = None;
                    Some((paper, rubric))
                }
                _ => {
                    state.phase = AnalysisPhase::Idle;
                    state.evaluation = None;
                    state.error = Some(MISSING_DOCUMENTS_MESSAGE.to_string());
                    None
                }
            }
        };

        let Some((paper, rubric)) = documents else {
            tracing::info!("Analysis not started: a document slot is empty");
            return Ok(AnalysisOutcome::MissingDocuments);
        };

        let extracted = tokio::try_join!(self.extract(&paper), self.extract(&rubric));

        let (paper_text, rubric_text) = match extracted {
            Ok(texts) => texts,
            Err(e) => {
                tracing::warn!(error = %e, "Text extraction failed");
                self.lock_state()
                    .fail(format!("{ANALYSIS_FAILED_PREFIX}{EXTRACTION_FAILED_MESSAGE}"));
                return Ok(AnalysisOutcome::ExtractionFailed);
            }
        };

        match self.evaluator.evaluate(&paper_text, &rubric_text).await {
            Ok(result) => {
                self.lock_state().succeed(result);
                Ok(AnalysisOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Evaluation failed");
                self.lock_state().fail(format!("{ANALYSIS_FAILED_PREFIX}{e}"));
                Ok(AnalysisOutcome::EvaluationFailed)
            }
        }
    }

    async fn extract(&self, document: &Document) -> Result<ExtractedText, FileLoaderError> {
        let text = self
            .file_loader
            .extract_text(&document.data, document)
            .await?;

        ExtractedText::new(text)
            .ok_or_else(|| FileLoaderError::NoTextFound(document.filename.clone()))
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
