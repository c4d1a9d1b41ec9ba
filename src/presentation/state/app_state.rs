use std::sync::Arc;

use crate::application::services::AnalysisSession;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<AnalysisSession>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(session: Arc<AnalysisSession>, max_upload_bytes: usize) -> Self {
        Self {
            session,
            max_upload_bytes,
        }
    }
}
