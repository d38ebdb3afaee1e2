//! Per-metric table
//!
//! The finest view: one row per metric at the newest period, worst score
//! first. No roll-up happens here — metric is already the final grouping
//! key, so weight is irrelevant. The formatted percentage is what the
//! table displays; the raw numerics stay on the row for sorting and
//! conditional styling downstream.

use serde::{Deserialize, Serialize};

use assura_types::{MeasurementRow, MetricId, RagStatus};

use crate::aggregate::weighted_scores;
use crate::filter::latest_datestamp;

/// One metric in the table view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Metric identifier
    pub metric_id: MetricId,

    /// Human-readable metric name
    pub title: String,

    /// Compliance score at the latest period
    pub score: f64,

    /// Score formatted for display, e.g. `70.00%`
    pub score_display: String,

    /// Red/amber boundary
    pub slo_min: f64,

    /// Green threshold
    pub slo: f64,

    /// Classification of the score
    pub rag: RagStatus,
}

/// Format a ratio as a display percentage.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Build the metric table: one row per metric at the latest period,
/// ascending by score so the worst metrics list first. Metrics that
/// evaluated nothing are excluded.
pub fn metric_table(rows: &[&MeasurementRow]) -> Vec<MetricRow> {
    let Some(latest) = latest_datestamp(rows) else {
        return Vec::new();
    };
    let latest_rows: Vec<&MeasurementRow> = rows
        .iter()
        .copied()
        .filter(|row| row.datestamp == latest)
        .collect();

    let fine = weighted_scores(&latest_rows, |row| {
        Some((row.metric_id.clone(), row.title.clone()))
    });

    let mut out: Vec<MetricRow> = fine
        .into_iter()
        .filter_map(|group| {
            group.score.map(|score| MetricRow {
                metric_id: group.key.0,
                title: group.key.1,
                score,
                score_display: format_percent(score),
                slo_min: group.slo_min,
                slo: group.slo,
                rag: RagStatus::classify(score, group.slo_min, group.slo),
            })
        })
        .collect();

    out.sort_by(|a, b| a.score.total_cmp(&b.score));
    out
}
