use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Treats document bytes as UTF-8 text. Used where no PDF parsing is wanted.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], doc: &Document) -> Result<String, FileLoaderError> {
        String::from_utf8(data.to_vec()).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("{} is not UTF-8: {e}", doc.filename))
        })
    }
}
