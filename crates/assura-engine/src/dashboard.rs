//! Dashboard query
//!
//! One query in, four result sets out. The caller supplies its filter
//! selections and (optionally) which dimension column the dimensional
//! breakdown should use; each view derives independently from the same
//! filtered subset.

use serde::{Deserialize, Serialize};
use tracing::debug;

use assura_types::{DashboardConfig, MeasurementRow};

use crate::breakdown::{category_breakdown, dimension_breakdown, BreakdownRow};
use crate::filter::{filter_rows, FilterSelection};
use crate::metric_table::{metric_table, MetricRow};
use crate::overview::{overview_series, OverviewPoint};

/// Parameters of one dashboard evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Dimension selections to filter by; empty means the full snapshot
    #[serde(default)]
    pub selection: FilterSelection,

    /// Column for the dimensional breakdown; the first configured
    /// dimension when unset
    #[serde(default)]
    pub breakdown: Option<String>,
}

/// The four result sets for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Weighted score per observation period
    pub overview: Vec<OverviewPoint>,

    /// Latest-period breakdown by the chosen dimension
    pub dimension: Vec<BreakdownRow>,

    /// Latest-period breakdown by category
    pub category: Vec<BreakdownRow>,

    /// Latest-period score per metric, worst first
    pub metrics: Vec<MetricRow>,
}

/// Evaluate all four views against a measurement snapshot.
///
/// Pure and synchronous: equal inputs produce identical output, and
/// concurrent evaluations share nothing. An empty filtered subset yields
/// four empty result sets.
pub fn build_dashboard(
    rows: &[MeasurementRow],
    config: &DashboardConfig,
    query: &DashboardQuery,
) -> Dashboard {
    let subset = filter_rows(rows, &query.selection);
    debug!(
        total_rows = rows.len(),
        filtered_rows = subset.len(),
        "evaluating dashboard views"
    );

    let breakdown_column = query
        .breakdown
        .as_deref()
        .or_else(|| config.default_breakdown());
    let dimension = match breakdown_column {
        Some(column) => dimension_breakdown(&subset, column),
        None => Vec::new(),
    };

    Dashboard {
        overview: overview_series(&subset),
        dimension,
        category: category_breakdown(&subset),
        metrics: metric_table(&subset),
    }
}
