//! Dimensional and category breakdowns
//!
//! Both views answer "who is compliant right now": they restrict to the
//! newest period in the (already filtered) snapshot, score each metric
//! within a group, roll the metric scores up per group value, and sort
//! best-first. The dimension view groups by a configurable column, the
//! category view by the fixed `category` column; the arithmetic is shared.

use serde::{Deserialize, Serialize};

use assura_types::{MeasurementRow, RagStatus};

use crate::aggregate::{roll_up, weighted_scores};
use crate::filter::latest_datestamp;

/// One group (a dimension value or a category) in a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// The group's value, e.g. a team name or a category name
    pub value: String,

    /// Weighted compliance score of the group's metrics
    pub score: f64,

    /// Mean red/amber boundary across the group's metrics
    pub slo_min: f64,

    /// Mean green threshold across the group's metrics
    pub slo: f64,

    /// Classification of the group score
    pub rag: RagStatus,
}

/// Breakdown by a configurable dimension column.
///
/// Rows that do not carry the column are skipped — they cannot be
/// attributed to any group. Groups without a score are excluded from the
/// classified output.
pub fn dimension_breakdown(rows: &[&MeasurementRow], column: &str) -> Vec<BreakdownRow> {
    grouped_breakdown(rows, |row| row.dimension(column).map(str::to_owned))
}

/// Breakdown by the fixed category column.
pub fn category_breakdown(rows: &[&MeasurementRow]) -> Vec<BreakdownRow> {
    grouped_breakdown(rows, |row| Some(row.category.clone()))
}

fn grouped_breakdown<F>(rows: &[&MeasurementRow], value_of: F) -> Vec<BreakdownRow>
where
    F: Fn(&MeasurementRow) -> Option<String>,
{
    let Some(latest) = latest_datestamp(rows) else {
        return Vec::new();
    };
    let latest_rows: Vec<&MeasurementRow> = rows
        .iter()
        .copied()
        .filter(|row| row.datestamp == latest)
        .collect();

    let fine = weighted_scores(&latest_rows, |row| {
        value_of(row).map(|value| (row.metric_id.clone(), value))
    });

    let mut out: Vec<BreakdownRow> = roll_up(&fine, |group| group.key.1.clone())
        .into_iter()
        .filter_map(|rolled| {
            rolled.score.map(|score| BreakdownRow {
                value: rolled.key,
                score,
                slo_min: rolled.slo_min,
                slo: rolled.slo,
                rag: RagStatus::classify(score, rolled.slo_min, rolled.slo),
            })
        })
        .collect();

    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assura_types::MetricId;

    use super::*;

    fn row(
        metric: &str,
        date: &str,
        category: &str,
        team: Option<&str>,
        totalok: f64,
    ) -> MeasurementRow {
        let mut dimensions = BTreeMap::new();
        if let Some(team) = team {
            dimensions.insert("team".to_string(), team.to_string());
        }
        MeasurementRow {
            datestamp: date.parse().unwrap(),
            metric_id: MetricId::new(metric),
            title: metric.to_string(),
            category: category.to_string(),
            total: 10.0,
            totalok,
            slo: 0.9,
            slo_min: 0.8,
            weight: 1.0,
            dimensions,
        }
    }

    #[test]
    fn groups_by_dimension_value_and_sorts_descending() {
        let rows = vec![
            row("a", "2026-07-01", "Hygiene", Some("edge"), 5.0),
            row("b", "2026-07-01", "Hygiene", Some("core"), 9.0),
        ];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        let breakdown = dimension_breakdown(&refs, "team");
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].value, "core");
        assert_eq!(breakdown[0].score, 0.9);
        assert_eq!(breakdown[0].rag, RagStatus::Green);
        assert_eq!(breakdown[1].value, "edge");
        assert_eq!(breakdown[1].rag, RagStatus::Red);
    }

    #[test]
    fn only_the_latest_period_counts() {
        let rows = vec![
            row("a", "2026-06-01", "Hygiene", Some("core"), 1.0),
            row("a", "2026-07-01", "Hygiene", Some("core"), 9.0),
        ];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        let breakdown = dimension_breakdown(&refs, "team");
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].score, 0.9);
    }

    #[test]
    fn rows_without_the_column_are_skipped() {
        let rows = vec![
            row("a", "2026-07-01", "Hygiene", Some("core"), 9.0),
            row("b", "2026-07-01", "Hygiene", None, 1.0),
        ];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        let breakdown = dimension_breakdown(&refs, "team");
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].value, "core");
        assert_eq!(breakdown[0].score, 0.9);
    }

    #[test]
    fn unscored_groups_are_excluded() {
        let mut empty = row("a", "2026-07-01", "Hygiene", Some("core"), 0.0);
        empty.total = 0.0;
        let rows = vec![empty, row("b", "2026-07-01", "Hygiene", Some("edge"), 9.0)];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        let breakdown = dimension_breakdown(&refs, "team");
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].value, "edge");
    }

    #[test]
    fn category_breakdown_blends_metric_scores_by_weight() {
        let rows = vec![
            row("a", "2026-07-01", "C1", None, 9.0),
            row("b", "2026-07-01", "C1", None, 5.0),
        ];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        let breakdown = category_breakdown(&refs);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].value, "C1");
        // equal weights: (0.9 + 0.5) / 2 = 0.7, below the 0.8 floor
        assert!((breakdown[0].score - 0.7).abs() < 1e-12);
        assert_eq!(breakdown[0].rag, RagStatus::Red);
    }

    #[test]
    fn empty_input_yields_empty_breakdowns() {
        assert!(dimension_breakdown(&[], "team").is_empty());
        assert!(category_breakdown(&[]).is_empty());
    }
}
