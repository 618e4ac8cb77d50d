//! Request handlers. Each one validates its input before touching the store.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;

use supplychain_core::SCHEMA_VERSION;
use supplychain_store::{PartRow, SupplierRow, pull_suppliers};

use crate::dto::{CreatePartRequest, CreateSupplierRequest, FetchAndInsertResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Marks rows created through this API.
pub const API_DATA_SOURCE: &str = "api.v1";

pub async fn health() -> &'static str {
    "OK"
}

pub async fn create_supplier(
    State(state): State<AppState>,
    payload: Result<Json<CreateSupplierRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SupplierRow>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let (supplier_id, supplier_code) =
        state.with_generator(|generator| (generator.next_id(), generator.next_supplier_code()));
    let now = Utc::now();

    let mut row = SupplierRow::new(supplier_id, request.tenant_id, request.legal_name);
    row.supplier_code = Some(supplier_code);
    row.data_source = Some(API_DATA_SOURCE.to_string());
    row.source_timestamp = Some(now);
    row.ingestion_timestamp = Some(now);
    row.schema_version = Some(SCHEMA_VERSION.to_string());

    let stored = state.store.insert_supplier(&row).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn create_part(
    State(state): State<AppState>,
    payload: Result<Json<CreatePartRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PartRow>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let part_id = state.with_generator(|generator| generator.next_id());
    let now = Utc::now();

    let mut row = PartRow::new(
        part_id,
        request.tenant_id,
        request.part_number,
        request.description,
    );
    row.data_source = Some(API_DATA_SOURCE.to_string());
    row.source_timestamp = Some(now);
    row.ingestion_timestamp = Some(now);
    row.schema_version = Some(SCHEMA_VERSION.to_string());

    let stored = state.store.insert_part(&row).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_supplier(&supplier_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_part(
    State(state): State<AppState>,
    Path(part_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_part(&part_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn fetch_and_insert(
    State(state): State<AppState>,
) -> Result<Json<FetchAndInsertResponse>, ApiError> {
    let Some(warehouse) = state.warehouse.clone() else {
        return Err(ApiError::Unavailable(
            "no warehouse is configured".to_string(),
        ));
    };

    let summary = pull_suppliers(warehouse.as_ref(), &state.store).await?;
    info!(
        event = "fetch_and_insert_completed",
        source = summary.source,
        fetched = summary.fetched,
        inserted = summary.inserted,
    );
    Ok(Json(FetchAndInsertResponse {
        source: summary.source.to_string(),
        fetched: summary.fetched,
        inserted: summary.inserted,
    }))
}
