//! Routes for invoice CRUD.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};

/// Invoice routes:
/// - GET    /invoices
/// - POST   /invoices
/// - GET    /invoices/:id
/// - PUT    /invoices/:id
/// - DELETE /invoices/:id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices))
        .route("/invoices", post(create_invoice))
        .route("/invoices/:id", get(get_invoice))
        .route("/invoices/:id", put(update_invoice))
        .route("/invoices/:id", delete(delete_invoice))
}
