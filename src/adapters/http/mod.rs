//! HTTP layer: axum routers, handlers, and middleware.

pub mod assistant;
pub mod clients;
mod error;
pub mod invoices;
pub mod itineraries;
pub mod middleware;
mod state;
pub mod suppliers;

pub use error::ApiError;
pub use state::AppState;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use middleware::{auth_middleware, AuthState};

/// Builds the full application router.
///
/// All `/api` routes sit behind the auth middleware; `/health` is open.
pub fn api_router(state: AppState, validator: AuthState) -> Router {
    let api = Router::new()
        .merge(assistant::routes())
        .merge(clients::routes())
        .merge(itineraries::routes())
        .merge(invoices::routes())
        .merge(suppliers::routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
