//! HTTP handler for the conversational endpoint.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::assistant::ChatCommand;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{ChatRequest, ChatResponse};

/// POST /api/assistant/chat - one conversational turn.
///
/// Soft failures (missing fields, unknown client, provider rate limit) come
/// back as `success: true` conversational replies; only infrastructure
/// failures produce a 500.
pub async fn chat(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message required"));
    }

    let reply = state
        .assistant
        .handle(ChatCommand {
            message: request.message,
            history: request.conversation_history,
            agency_id: user.agency_id,
            user_id: user.id,
        })
        .await
        .map_err(|e| ApiError::internal("AI processing failed", e))?;

    Ok((StatusCode::OK, Json(ChatResponse::from(reply))))
}
