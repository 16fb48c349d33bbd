//! # Shipment Handlers
//!
//! ```text
//! GET  /api/shipment        → 200 {"shipments": [...]}
//! POST /api/shipment        → 201 {"id": n, "price": p}
//! GET  /api/shipment/{id}   → 200 {"shipment": {...}}
//! GET  /health              → 200 {"status": "ok", "database": bool}
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shipment_core::{ShipmentId, ShipmentRequest};
use tracing::{debug, info};

use crate::dto::{
    CreatedResponse, HealthResponse, ShipmentDetailResponse, ShipmentListResponse,
    ShipmentResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_shipments(
    State(state): State<AppState>,
) -> Result<Json<ShipmentListResponse>, ApiError> {
    let records = state.service.list_shipments().await?;
    debug!(count = records.len(), "Listing shipments");

    Ok(Json(ShipmentListResponse {
        shipments: records.into_iter().map(ShipmentResponse::from).collect(),
    }))
}

/// Validates, prices and stores a shipment.
///
/// Any body that doesn't deserialize into a [`ShipmentRequest`] (bad JSON,
/// missing fields, wrong content type) is answered with `INVALID_BODY`.
pub async fn create_shipment(
    State(state): State<AppState>,
    body: Result<Json<ShipmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = body?;

    let priced = state.service.add_shipment(&request).await?;
    info!(id = %priced.id, price = priced.price, "Shipment created");

    Ok((StatusCode::CREATED, Json(priced.into())))
}

pub async fn get_shipment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ShipmentDetailResponse>, ApiError> {
    let id: u64 = raw_id.parse().map_err(|_| ApiError::invalid_id(&raw_id))?;

    let record = state.service.get_shipment(ShipmentId(id)).await?;

    Ok(Json(ShipmentDetailResponse {
        shipment: record.into(),
    }))
}

/// Liveness plus a database round trip. Always 200; `database` reports
/// whether SQLite answered.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        database: state.db.health_check().await,
    })
}
