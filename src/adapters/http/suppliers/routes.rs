//! Routes for the supplier directory.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{list_suppliers, upsert_supplier};

/// Supplier routes:
/// - GET  /suppliers
/// - POST /suppliers (create-or-update by name)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers))
        .route("/suppliers", post(upsert_supplier))
}
