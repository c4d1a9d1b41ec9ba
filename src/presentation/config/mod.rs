mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ExtractionSettings, GeminiSettings, LoggingSettings, ServerSettings, Settings};
