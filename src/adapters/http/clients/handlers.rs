//! HTTP handlers for client CRUD.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::domain::foundation::ClientId;
use crate::domain::travel::Client;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{ClientView, CreateClientRequest, ListClientsParams, UpdateClientRequest};

/// GET /api/clients - list clients, optionally filtered by name.
pub async fn list_clients(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListClientsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state
        .clients
        .list(user.agency_id, params.q.as_deref(), params.limit)
        .await?;
    let views: Vec<ClientView> = clients.iter().map(ClientView::from).collect();
    Ok(Json(serde_json::json!({ "success": true, "clients": views })))
}

/// GET /api/clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ClientId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid client ID format"))?;
    let client = state
        .clients
        .find_by_id(user.agency_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client"))?;
    Ok(Json(
        serde_json::json!({ "success": true, "client": ClientView::from(&client) }),
    ))
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.full_name.trim().is_empty() {
        return Err(ApiError::bad_request("Client name is required"));
    }

    let mut client = Client::new(user.agency_id, request.full_name.trim(), Utc::now());
    client.email = request.email;
    client.phone = request.phone;
    client.address = request.address;
    client.interests = request.interests;
    client.budget_range = request.budget_range;
    client.notes = request.notes;

    state.clients.insert(&client).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "client": ClientView::from(&client) })),
    ))
}

/// PUT /api/clients/:id - partial update.
pub async fn update_client(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ClientId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid client ID format"))?;
    let mut client = state
        .clients
        .find_by_id(user.agency_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client"))?;

    if let Some(full_name) = request.full_name {
        client.full_name = full_name;
    }
    if let Some(email) = request.email {
        client.email = Some(email);
    }
    if let Some(phone) = request.phone {
        client.phone = Some(phone);
    }
    if let Some(address) = request.address {
        client.address = Some(address);
    }
    if let Some(interests) = request.interests {
        client.interests = Some(interests);
    }
    if let Some(budget_range) = request.budget_range {
        client.budget_range = Some(budget_range);
    }
    if let Some(notes) = request.notes {
        client.notes = Some(notes);
    }
    client.updated_at = Utc::now();

    state.clients.update(&client).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "client": ClientView::from(&client) }),
    ))
}

/// DELETE /api/clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ClientId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid client ID format"))?;
    state.clients.delete(user.agency_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "message": "Client deleted" }),
    ))
}
