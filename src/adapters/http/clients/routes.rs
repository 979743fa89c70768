//! Routes for client CRUD.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{create_client, delete_client, get_client, list_clients, update_client};

/// Client routes:
/// - GET    /clients
/// - POST   /clients
/// - GET    /clients/:id
/// - PUT    /clients/:id
/// - DELETE /clients/:id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients))
        .route("/clients", post(create_client))
        .route("/clients/:id", get(get_client))
        .route("/clients/:id", put(update_client))
        .route("/clients/:id", delete(delete_client))
}
