use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::services::{AnalysisError, AnalysisOutcome};
use crate::presentation::state::AppState;

use super::session_view::{ErrorResponse, SessionView};

pub async fn session_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SessionView::from(state.session.snapshot())),
    )
}

#[tracing::instrument(skip(state))]
pub async fn analyze_handler(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = match state.session.analyze().await {
        Ok(outcome) => outcome,
        Err(AnalysisError::Busy) => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(AnalysisError::Busy.to_string())),
            )
                .into_response();
        }
    };

    let status = match outcome {
        AnalysisOutcome::Succeeded => StatusCode::OK,
        AnalysisOutcome::MissingDocuments | AnalysisOutcome::ExtractionFailed => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AnalysisOutcome::EvaluationFailed => StatusCode::BAD_GATEWAY,
    };

    tracing::info!(?outcome, status = status.as_u16(), "Analysis request finished");

    (status, Json(SessionView::from(state.session.snapshot()))).into_response()
}
