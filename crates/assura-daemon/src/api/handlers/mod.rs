//! API handlers

mod dashboard;
mod health;
mod measurements;

pub use dashboard::{dashboard, dashboard_config, filter_options};
pub use health::health_check;
pub use measurements::{ingest_measurements, measurement_count};
