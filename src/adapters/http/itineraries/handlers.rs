//! HTTP handlers for itinerary CRUD.
//!
//! Generation happens on the assistant path; this surface covers listing,
//! inspection, status transitions, and deletion.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::domain::foundation::ItineraryId;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{ItineraryView, UpdateStatusRequest};

/// GET /api/itineraries
pub async fn list_itineraries(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let itineraries = state.itineraries.list(user.agency_id).await?;
    let views: Vec<ItineraryView> = itineraries.iter().map(ItineraryView::from).collect();
    Ok(Json(
        serde_json::json!({ "success": true, "itineraries": views }),
    ))
}

/// GET /api/itineraries/:id
pub async fn get_itinerary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ItineraryId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid itinerary ID format"))?;
    let itinerary = state
        .itineraries
        .find_by_id(user.agency_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Itinerary"))?;
    Ok(Json(
        serde_json::json!({ "success": true, "itinerary": ItineraryView::from(&itinerary) }),
    ))
}

/// PATCH /api/itineraries/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ItineraryId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid itinerary ID format"))?;
    state
        .itineraries
        .update_status(user.agency_id, id, request.status)
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/itineraries/:id
pub async fn delete_itinerary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ItineraryId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid itinerary ID format"))?;
    state.itineraries.delete(user.agency_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "message": "Itinerary deleted" }),
    ))
}
