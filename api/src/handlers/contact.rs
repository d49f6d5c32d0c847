//! Contact form handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::app::FormInteraction;
use crate::domain::entities::ContactSubmission;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// POST /api/contact
///
/// Validate and deliver one submission. Field errors come back as 422;
/// delivery failure as 502 with a generic retry message.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    state.contact_service.submit(submission).await?;
    Ok(Json(SubmitResponse { success: true }))
}

/// Pre-submit interaction reported by the form
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionRequest {
    Started,
    FieldFocused { field: String },
}

/// POST /api/contact/events
///
/// Fire-and-forget interaction tracking; always accepted.
pub async fn track_form_event(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> StatusCode {
    let interaction = match request {
        InteractionRequest::Started => FormInteraction::Started,
        InteractionRequest::FieldFocused { field } => FormInteraction::FieldFocused { field },
    };
    state.contact_service.track_interaction(interaction).await;
    StatusCode::ACCEPTED
}
