//! Assura Engine - Scoring and RAG classification
//!
//! The engine turns a snapshot of compliance measurements into four
//! reporting views: a time-series overview, a breakdown by a configurable
//! dimension, a breakdown by category, and a per-metric table. Every view
//! is the same composition — filter, aggregate raw counts once, roll the
//! resulting scores up by weight, classify — differing only in grouping
//! keys and output shape.
//!
//! ## Aggregation model
//!
//! Raw pass/fail counts are summed exactly once, at the finest grouping
//! level ([`aggregate::weighted_scores`]). Every coarser score is a
//! weight-normalized blend of those already-computed scores
//! ([`aggregate::roll_up`]), never a re-aggregation of raw counts:
//! sum-of-ratios and ratio-of-sums diverge, and the blend is the defined
//! semantics.
//!
//! A group whose evaluated-unit count sums to zero has no score. That is
//! surfaced as `None` rather than a sentinel, and such groups are excluded
//! from classification and from classified output.
//!
//! All entry points are pure functions over immutable row snapshots; they
//! share no state and may run concurrently.

pub mod aggregate;
pub mod breakdown;
pub mod dashboard;
pub mod filter;
pub mod metric_table;
pub mod overview;

// Re-export main types
pub use aggregate::{roll_up, weighted_scores, GroupScore, RolledScore};
pub use breakdown::{category_breakdown, dimension_breakdown, BreakdownRow};
pub use dashboard::{build_dashboard, Dashboard, DashboardQuery};
pub use filter::{dimension_options, filter_rows, latest_datestamp, FilterSelection};
pub use metric_table::{format_percent, metric_table, MetricRow};
pub use overview::{overview_series, OverviewPoint, RagChannels};
