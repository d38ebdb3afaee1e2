//! Application state for API handlers

use std::sync::Arc;

use assura_store::MeasurementStore;
use assura_types::DashboardConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Measurement snapshot storage
    pub store: Arc<dyn MeasurementStore>,

    /// Dashboard configuration (dimensions, palette)
    pub dashboard: Arc<DashboardConfig>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn MeasurementStore>, dashboard: DashboardConfig) -> Self {
        Self {
            store,
            dashboard: Arc::new(dashboard),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
