//! Routes for the assistant endpoint.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::chat;

/// Assistant routes:
/// - POST /assistant/chat - conversational turn
pub fn routes() -> Router<AppState> {
    Router::new().route("/assistant/chat", post(chat))
}
