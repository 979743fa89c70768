//! Routes for itinerary CRUD.

use axum::routing::{delete, get, patch};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{delete_itinerary, get_itinerary, list_itineraries, update_status};

/// Itinerary routes:
/// - GET    /itineraries
/// - GET    /itineraries/:id
/// - PATCH  /itineraries/:id/status
/// - DELETE /itineraries/:id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/itineraries", get(list_itineraries))
        .route("/itineraries/:id", get(get_itinerary))
        .route("/itineraries/:id/status", patch(update_status))
        .route("/itineraries/:id", delete(delete_itinerary))
}
