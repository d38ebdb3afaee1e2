//! Storage trait definitions

use async_trait::async_trait;

use assura_types::MeasurementRow;

use crate::error::StoreResult;

/// Port for measurement snapshot storage.
///
/// Reads return the full table; the engine filters and aggregates from
/// there. Mutations operate on the snapshot as a whole — there is no
/// incremental update path.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Load the full measurement snapshot
    async fn load_summary(&self) -> StoreResult<Vec<MeasurementRow>>;

    /// Append rows to the snapshot
    async fn append_rows(&self, rows: Vec<MeasurementRow>) -> StoreResult<()>;

    /// Replace the entire snapshot
    async fn replace_all(&self, rows: Vec<MeasurementRow>) -> StoreResult<()>;

    /// Number of rows currently stored
    async fn count(&self) -> StoreResult<usize>;
}
