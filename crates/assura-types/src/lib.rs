//! Assura Types - Core types for continuous assurance reporting
//!
//! Assura ingests periodic compliance measurements (pass/fail counts per
//! monitored metric) and rolls them up into weighted compliance scores
//! classified Red/Amber/Green against per-metric SLO thresholds.
//!
//! ## Architectural Boundaries
//!
//! - **assura-types** owns: the measurement schema, RAG classification,
//!   dashboard configuration (dimensions, palette)
//! - **assura-engine** owns: filtering, aggregation, roll-up, view building
//! - **assura-store** owns: persistence of the measurement snapshot
//!
//! ## Key Concepts
//!
//! - **MeasurementRow**: one observation of a metric for one period and one
//!   combination of dimension values
//! - **RagStatus**: three-tier Red/Amber/Green classification of a score
//!   against its SLO band
//! - **DashboardConfig**: which columns are filterable dimensions, and the
//!   colors each RAG tier maps to

pub mod config;
pub mod measurement;
pub mod rag;

// Re-export main types
pub use config::{DashboardConfig, DimensionSpec, RagColor, RagPalette};
pub use measurement::{MeasurementRow, MetricId};
pub use rag::RagStatus;
