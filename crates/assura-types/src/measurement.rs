//! Measurement schema
//!
//! A MeasurementRow is one observation of a monitored metric: how many units
//! were evaluated in a period, how many passed, and the SLO band the metric
//! is held to. Rows arrive from upstream measurement producers and are
//! treated as well-formed; the documented invariants are the producer's
//! responsibility.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a monitored metric
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetricId(String);

impl MetricId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One compliance measurement for a metric, period, and dimension combination
///
/// Invariants expected from producers (not validated here):
/// `total >= totalok >= 0` and `0 <= slo_min <= slo <= 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRow {
    /// Calendar date of the observation period
    pub datestamp: NaiveDate,

    /// Metric identifier
    pub metric_id: MetricId,

    /// Human-readable metric name
    pub title: String,

    /// Fixed categorical grouping key
    pub category: String,

    /// Count of evaluated units
    pub total: f64,

    /// Count of units that passed
    pub totalok: f64,

    /// Target compliance ratio (green threshold)
    pub slo: f64,

    /// Minimum acceptable compliance ratio (red/amber boundary)
    pub slo_min: f64,

    /// Relative importance of this metric within any roll-up
    pub weight: f64,

    /// Configurable dimension columns (e.g. team, region), kept inline with
    /// the fixed columns on the wire
    #[serde(flatten)]
    pub dimensions: BTreeMap<String, String>,
}

impl MeasurementRow {
    /// Value of a configured dimension column, if the row carries it
    pub fn dimension(&self, column: &str) -> Option<&str> {
        self.dimensions.get(column).map(String::as_str)
    }
}
