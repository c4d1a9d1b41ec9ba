mod analysis_session;
mod evaluation_prompt;
mod rubric_evaluator;

pub use analysis_session::{
    ANALYSIS_FAILED_PREFIX, AnalysisError, AnalysisOutcome, AnalysisPhase, AnalysisSession,
    CompletedEvaluation, EXTRACTION_FAILED_MESSAGE, MISSING_DOCUMENTS_MESSAGE, SelectionError,
    SessionSnapshot,
};
pub use evaluation_prompt::{build_evaluation_prompt, evaluation_response_schema};
pub use rubric_evaluator::{DEFAULT_TEMPERATURE, RubricEvaluator};
