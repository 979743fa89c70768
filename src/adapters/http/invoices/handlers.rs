//! HTTP handlers for invoice CRUD.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::domain::foundation::{ClientId, InvoiceId};
use crate::domain::travel::Invoice;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{CreateInvoiceRequest, InvoiceView, ListInvoicesParams, UpdateInvoiceRequest};

/// GET /api/invoices - list invoices, optionally for one client.
pub async fn list_invoices(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListInvoicesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id = params
        .client_id
        .as_deref()
        .map(str::parse::<ClientId>)
        .transpose()
        .map_err(|_| ApiError::bad_request("Invalid client ID format"))?;

    let invoices = state.invoices.list(user.agency_id, client_id).await?;
    let views: Vec<InvoiceView> = invoices.iter().map(InvoiceView::from).collect();
    Ok(Json(
        serde_json::json!({ "success": true, "invoices": views }),
    ))
}

/// GET /api/invoices/:id
pub async fn get_invoice(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: InvoiceId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid invoice ID format"))?;
    let invoice = state
        .invoices
        .find_by_id(user.agency_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice"))?;
    Ok(Json(
        serde_json::json!({ "success": true, "invoice": InvoiceView::from(&invoice) }),
    ))
}

/// POST /api/invoices - manual creation with the same number scheme as the
/// assistant path.
pub async fn create_invoice(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.total <= 0.0 {
        return Err(ApiError::bad_request("Total must be positive"));
    }
    let client_id: ClientId = request
        .client_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid client ID format"))?;

    state
        .clients
        .find_by_id(user.agency_id, client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client"))?;

    let invoice = Invoice::draft(
        user.agency_id,
        client_id,
        request.total,
        request.notes,
        request.due_date,
        user.id,
        Utc::now(),
    );
    state.invoices.insert(&invoice).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "invoice": InvoiceView::from(&invoice) })),
    ))
}

/// PUT /api/invoices/:id - partial update.
pub async fn update_invoice(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: InvoiceId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid invoice ID format"))?;
    let mut invoice = state
        .invoices
        .find_by_id(user.agency_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invoice"))?;

    if let Some(total) = request.total {
        invoice.total = total;
    }
    if let Some(status) = request.status {
        invoice.status = status;
    }
    if let Some(notes) = request.notes {
        invoice.notes = Some(notes);
    }
    if let Some(due_date) = request.due_date {
        invoice.due_date = Some(due_date);
    }

    state.invoices.update(&invoice).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "invoice": InvoiceView::from(&invoice) }),
    ))
}

/// DELETE /api/invoices/:id
pub async fn delete_invoice(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: InvoiceId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid invoice ID format"))?;
    state.invoices.delete(user.agency_id, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "message": "Invoice deleted" }),
    ))
}
