//! Dashboard query handlers
//!
//! `GET /dashboard` accepts one optional `<column>=<value>` pair per
//! configured dimension plus an optional `breakdown=<column>`; anything
//! else in the query string is ignored. The response is the engine's four
//! result sets, evaluated against the current snapshot.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use assura_engine::{
    build_dashboard, dimension_options, latest_datestamp, Dashboard, DashboardQuery,
    FilterSelection,
};
use assura_types::{DashboardConfig, MeasurementRow};

use crate::api::state::AppState;
use crate::error::{ApiError, ApiResult};

/// Evaluate the four dashboard views for the given filter selections
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Dashboard>> {
    let breakdown = params.get("breakdown").cloned();
    if let Some(column) = &breakdown {
        if !state.dashboard.has_dimension(column) {
            return Err(ApiError::BadRequest(format!(
                "unknown breakdown dimension: {column}"
            )));
        }
    }

    let mut selection = FilterSelection::new();
    for dim in &state.dashboard.dimensions {
        if let Some(value) = params.get(&dim.column) {
            selection.set(dim.column.clone(), value.clone());
        }
    }

    let rows = state.store.load_summary().await?;
    let query = DashboardQuery {
        selection,
        breakdown,
    };
    Ok(Json(build_dashboard(&rows, &state.dashboard, &query)))
}

/// Dashboard configuration endpoint: dimensions and palette for the
/// rendering layer
pub async fn dashboard_config(State(state): State<AppState>) -> Json<DashboardConfig> {
    Json(state.dashboard.as_ref().clone())
}

/// Options for one dimension dropdown
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub column: String,
    pub label: String,
    pub options: Vec<String>,
}

/// Filter options response
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub filters: Vec<FilterOptions>,
}

/// Selectable values per configured dimension, drawn from the newest
/// period in the snapshot. A dimension no row carries lists no options.
pub async fn filter_options(
    State(state): State<AppState>,
) -> ApiResult<Json<FilterOptionsResponse>> {
    let rows = state.store.load_summary().await?;
    let refs: Vec<&MeasurementRow> = rows.iter().collect();
    let latest: Vec<&MeasurementRow> = match latest_datestamp(&refs) {
        Some(date) => refs
            .into_iter()
            .filter(|row| row.datestamp == date)
            .collect(),
        None => Vec::new(),
    };

    let filters = state
        .dashboard
        .dimensions
        .iter()
        .map(|dim| FilterOptions {
            column: dim.column.clone(),
            label: dim.label.clone(),
            options: dimension_options(&latest, &dim.column),
        })
        .collect();

    Ok(Json(FilterOptionsResponse { filters }))
}
