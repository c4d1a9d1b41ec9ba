mod documents;
mod health;
mod session;
pub mod session_view;

pub use documents::{clear_document_handler, upload_document_handler};
pub use health::health_handler;
pub use session::{analyze_handler, session_handler};
