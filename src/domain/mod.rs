mod document;
mod document_id;
mod evaluation;
mod extracted_text;
mod score_tier;

pub use document::{ContentType, Document, DocumentRole};
pub use document_id::DocumentId;
pub use evaluation::{CriterionFeedback, EvaluationResult};
pub use extracted_text::ExtractedText;
pub use score_tier::ScoreTier;
