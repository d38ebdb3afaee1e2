//! Filter stage
//!
//! Narrows the measurement snapshot to the rows matching the caller's
//! dimension selections before any aggregation runs. Filtering is
//! conjunctive: a row must match every selected dimension. Dimensions with
//! no selection are unconstrained, so an empty selection is the identity.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assura_types::MeasurementRow;

/// Equality predicates on dimension columns, ANDed together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    selected: std::collections::BTreeMap<String, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `column == value` predicate (builder form)
    pub fn select(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Add a `column == value` predicate
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.selected.insert(column.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether a row satisfies every selected predicate
    pub fn matches(&self, row: &MeasurementRow) -> bool {
        self.selected
            .iter()
            .all(|(column, value)| row.dimension(column) == Some(value.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected
            .iter()
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }
}

/// Rows matching the selection. Borrows from the snapshot; the source is
/// never mutated. Zero matches is a normal, displayable outcome.
pub fn filter_rows<'a>(
    rows: &'a [MeasurementRow],
    selection: &FilterSelection,
) -> Vec<&'a MeasurementRow> {
    rows.iter().filter(|row| selection.matches(row)).collect()
}

/// Sorted distinct values of a dimension column across the given rows.
///
/// A column no row carries yields an empty set, not an error: the filter
/// simply has no selectable values.
pub fn dimension_options(rows: &[&MeasurementRow], column: &str) -> Vec<String> {
    let values: BTreeSet<&str> = rows.iter().filter_map(|row| row.dimension(column)).collect();
    values.into_iter().map(str::to_owned).collect()
}

/// The most recent datestamp present in the given rows.
///
/// Callers pass the already-filtered set: a filter that removes the newest
/// period's rows moves "latest" back to the newest period that survives.
pub fn latest_datestamp(rows: &[&MeasurementRow]) -> Option<NaiveDate> {
    rows.iter().map(|row| row.datestamp).max()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assura_types::MetricId;

    use super::*;

    fn row(metric: &str, date: &str, team: Option<&str>) -> MeasurementRow {
        let mut dimensions = BTreeMap::new();
        if let Some(team) = team {
            dimensions.insert("team".to_string(), team.to_string());
        }
        MeasurementRow {
            datestamp: date.parse().unwrap(),
            metric_id: MetricId::new(metric),
            title: metric.to_string(),
            category: "Hygiene".to_string(),
            total: 10.0,
            totalok: 9.0,
            slo: 0.9,
            slo_min: 0.8,
            weight: 1.0,
            dimensions,
        }
    }

    #[test]
    fn empty_selection_is_identity() {
        let rows = vec![
            row("a", "2026-07-01", Some("core")),
            row("b", "2026-07-01", Some("edge")),
        ];
        let subset = filter_rows(&rows, &FilterSelection::new());
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn selections_are_conjunctive() {
        let mut both = row("a", "2026-07-01", Some("core"));
        both.dimensions
            .insert("region".to_string(), "emea".to_string());
        let rows = vec![both, row("b", "2026-07-01", Some("core"))];

        let selection = FilterSelection::new()
            .select("team", "core")
            .select("region", "emea");
        let subset = filter_rows(&rows, &selection);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].metric_id.as_str(), "a");
    }

    #[test]
    fn unmatched_selection_yields_empty_subset() {
        let rows = vec![row("a", "2026-07-01", Some("core"))];
        let selection = FilterSelection::new().select("team", "missing");
        assert!(filter_rows(&rows, &selection).is_empty());
    }

    #[test]
    fn rows_without_the_column_never_match_a_selection_on_it() {
        let rows = vec![row("a", "2026-07-01", None)];
        let selection = FilterSelection::new().select("team", "core");
        assert!(filter_rows(&rows, &selection).is_empty());
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let rows = vec![
            row("a", "2026-07-01", Some("edge")),
            row("b", "2026-07-01", Some("core")),
            row("c", "2026-07-01", Some("edge")),
            row("d", "2026-07-01", None),
        ];
        let refs: Vec<&MeasurementRow> = rows.iter().collect();
        assert_eq!(dimension_options(&refs, "team"), vec!["core", "edge"]);
        assert!(dimension_options(&refs, "region").is_empty());
    }

    #[test]
    fn latest_datestamp_tracks_the_filtered_set() {
        let rows = vec![
            row("a", "2026-06-01", Some("core")),
            row("a", "2026-07-01", Some("edge")),
        ];
        let all: Vec<&MeasurementRow> = rows.iter().collect();
        assert_eq!(latest_datestamp(&all), Some("2026-07-01".parse().unwrap()));

        // Filtering away the newest period moves "latest" back
        let subset = filter_rows(&rows, &FilterSelection::new().select("team", "core"));
        assert_eq!(
            latest_datestamp(&subset),
            Some("2026-06-01".parse().unwrap())
        );

        assert_eq!(latest_datestamp(&[]), None);
    }
}
