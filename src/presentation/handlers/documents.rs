use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::SelectionError;
use crate::domain::{ContentType, Document, DocumentRole};
use crate::presentation::state::AppState;

use super::session_view::{ErrorResponse, SessionView};

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn selection_error_response(error: SelectionError) -> Response {
    let status = match error {
        SelectionError::NotPdf => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        SelectionError::Busy => StatusCode::CONFLICT,
    };
    error_response(status, error.to_string())
}

fn parse_role(slug: &str) -> Result<DocumentRole, Response> {
    DocumentRole::from_slug(slug).ok_or_else(|| {
        error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown document slot: {slug}. Expected paper or rubric"),
        )
    })
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler(
    State(state): State<AppState>,
    Path(slot): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let role = match parse_role(&slot) {
        Ok(role) => role,
        Err(response) => return response,
    };

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(e.status(), format!("Failed to read multipart: {e}"));
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let Some(content_type) = ContentType::from_mime(&content_type_str) else {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return selection_error_response(SelectionError::NotPdf);
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {e}"));
        }
    };

    if data.len() > state.max_upload_bytes {
        tracing::warn!(bytes = data.len(), limit = state.max_upload_bytes, "Upload too large");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("File exceeds the {} byte limit", state.max_upload_bytes),
        );
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let document = Document::new(filename, content_type, data);
    if let Err(e) = state.session.select_document(role, document) {
        return selection_error_response(e);
    }

    (
        StatusCode::OK,
        Json(SessionView::from(state.session.snapshot())),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn clear_document_handler(
    State(state): State<AppState>,
    Path(slot): Path<String>,
) -> Response {
    let role = match parse_role(&slot) {
        Ok(role) => role,
        Err(response) => return response,
    };

    if let Err(e) = state.session.clear_document(role) {
        return selection_error_response(e);
    }

    (
        StatusCode::OK,
        Json(SessionView::from(state.session.snapshot())),
    )
        .into_response()
}
