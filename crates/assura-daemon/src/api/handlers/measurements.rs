//! Measurement ingestion handlers

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use assura_types::MeasurementRow;

use crate::api::state::AppState;
use crate::error::ApiResult;

/// Ingestion response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub appended: usize,
    pub total: usize,
}

/// Append measurement rows to the snapshot
pub async fn ingest_measurements(
    State(state): State<AppState>,
    Json(rows): Json<Vec<MeasurementRow>>,
) -> ApiResult<Json<IngestResponse>> {
    let appended = rows.len();
    state.store.append_rows(rows).await?;
    let total = state.store.count().await?;

    info!(appended, total, "ingested measurement rows");
    Ok(Json(IngestResponse { appended, total }))
}

/// Snapshot row count response
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub rows: usize,
}

/// Current snapshot size
pub async fn measurement_count(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let rows = state.store.count().await?;
    Ok(Json(CountResponse { rows }))
}
