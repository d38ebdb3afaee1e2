//! Red/Amber/Green classification
//!
//! A score is classified against its SLO band. Boundary ties go to the
//! less severe tier: a score exactly at `slo_min` is Amber, a score exactly
//! at `slo` is Green. This drives visible color-coding and must not drift.

use serde::{Deserialize, Serialize};

/// Three-tier compliance classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Red,
    Amber,
    Green,
}

impl RagStatus {
    /// Classify a compliance score against its SLO band.
    ///
    /// `slo_min` is the red/amber boundary, `slo` the amber/green boundary.
    /// Inverted bands (`slo_min > slo`) are not corrected; `score < slo_min`
    /// wins, so such data classifies Red even above target.
    pub fn classify(score: f64, slo_min: f64, slo: f64) -> Self {
        if score < slo_min {
            RagStatus::Red
        } else if score < slo {
            RagStatus::Amber
        } else {
            RagStatus::Green
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RagStatus::Red => "red",
            RagStatus::Amber => "amber",
            RagStatus::Green => "green",
        }
    }
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
