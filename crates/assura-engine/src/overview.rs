//! Time-series overview
//!
//! One point per observation period: fine scores per (metric, period) are
//! rolled up to a single weighted score per period, classified, and split
//! into three stacked channels so the rendering layer can color a bar by
//! classification without re-deriving it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assura_types::{MeasurementRow, RagStatus};

use crate::aggregate::{roll_up, weighted_scores};

/// The period score split by classification: the score sits in the channel
/// matching its RAG tier, the other two are zero. All three are zero when
/// the period has no score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RagChannels {
    pub red: f64,
    pub amber: f64,
    pub green: f64,
}

impl RagChannels {
    fn split(score: f64, status: RagStatus) -> Self {
        let mut channels = Self::default();
        match status {
            RagStatus::Red => channels.red = score,
            RagStatus::Amber => channels.amber = score,
            RagStatus::Green => channels.green = score,
        }
        channels
    }
}

/// One period of the overview series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewPoint {
    /// Observation period
    pub datestamp: NaiveDate,

    /// Weighted compliance score for the period, if any metric evaluated
    /// anything
    pub score: Option<f64>,

    /// Mean red/amber boundary across the period's metrics
    pub slo_min: f64,

    /// Mean green threshold across the period's metrics
    pub slo: f64,

    /// Classification of the period score; absent when the score is
    /// undefined
    pub rag: Option<RagStatus>,

    /// Score bucketed by classification for stacked rendering
    pub channels: RagChannels,
}

/// Build the overview series: weighted score per period, ascending by date.
pub fn overview_series(rows: &[&MeasurementRow]) -> Vec<OverviewPoint> {
    let fine = weighted_scores(rows, |row| Some((row.metric_id.clone(), row.datestamp)));

    roll_up(&fine, |group| group.key.1)
        .into_iter()
        .map(|rolled| {
            let rag = rolled
                .score
                .map(|score| RagStatus::classify(score, rolled.slo_min, rolled.slo));
            let channels = match (rolled.score, rag) {
                (Some(score), Some(status)) => RagChannels::split(score, status),
                _ => RagChannels::default(),
            };
            OverviewPoint {
                datestamp: rolled.key,
                score: rolled.score,
                slo_min: rolled.slo_min,
                slo: rolled.slo,
                rag,
                channels,
            }
        })
        .collect()
}
