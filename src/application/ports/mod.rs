mod evaluator;
mod file_loader;
mod llm_client;

pub use evaluator::{EvaluationError, Evaluator};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{GenerationRequest, LlmClient, LlmClientError};
