//! HTTP handlers for the supplier directory.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::domain::travel::Supplier;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{ListSuppliersParams, SupplierView, UpsertSupplierRequest};

/// GET /api/suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListSuppliersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let suppliers = state.suppliers.list(user.agency_id, params.limit).await?;
    let views: Vec<SupplierView> = suppliers.iter().map(SupplierView::from).collect();
    Ok(Json(
        serde_json::json!({ "success": true, "suppliers": views }),
    ))
}

/// POST /api/suppliers - create, or update the existing supplier with the
/// same (case-insensitive) name.
pub async fn upsert_supplier(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpsertSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Supplier name is required"));
    }
    let name = request.name.trim();

    let (mut supplier, is_new) = match state.suppliers.find_by_name(user.agency_id, name).await? {
        Some(existing) => (existing, false),
        None => (Supplier::new(user.agency_id, name, Utc::now()), true),
    };

    supplier.name = name.to_string();
    if let Some(kind) = request.kind {
        supplier.kind = kind;
    }
    supplier.email = request.email.or(supplier.email);
    supplier.region = request.region.or(supplier.region);
    supplier.website_url = request.website_url.or(supplier.website_url);
    if let Some(is_active) = request.is_active {
        supplier.is_active = is_active;
    }
    supplier.updated_at = Utc::now();

    let status = if is_new {
        state.suppliers.insert(&supplier).await?;
        StatusCode::CREATED
    } else {
        state.suppliers.update(&supplier).await?;
        StatusCode::OK
    };

    Ok((
        status,
        Json(serde_json::json!({ "success": true, "supplier": SupplierView::from(&supplier) })),
    ))
}
