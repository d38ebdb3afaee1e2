//! In-memory measurement store

use async_trait::async_trait;
use tokio::sync::RwLock;

use assura_types::MeasurementRow;

use crate::error::StoreResult;
use crate::traits::MeasurementStore;

/// In-memory snapshot store for development and tests
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<Vec<MeasurementRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_rows(rows: Vec<MeasurementRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl MeasurementStore for InMemoryStore {
    async fn load_summary(&self) -> StoreResult<Vec<MeasurementRow>> {
        Ok(self.rows.read().await.clone())
    }

    async fn append_rows(&self, rows: Vec<MeasurementRow>) -> StoreResult<()> {
        self.rows.write().await.extend(rows);
        Ok(())
    }

    async fn replace_all(&self, rows: Vec<MeasurementRow>) -> StoreResult<()> {
        *self.rows.write().await = rows;
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.rows.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assura_types::MetricId;

    use super::*;

    fn row(metric: &str) -> MeasurementRow {
        MeasurementRow {
            datestamp: "2026-07-01".parse().unwrap(),
            metric_id: MetricId::new(metric),
            title: metric.to_string(),
            category: "Hygiene".to_string(),
            total: 10.0,
            totalok: 9.0,
            slo: 0.9,
            slo_min: 0.8,
            weight: 1.0,
            dimensions: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn starts_empty_and_appends() {
        let store = InMemoryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store.append_rows(vec![row("a"), row("b")]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        let rows = store.load_summary().await.unwrap();
        assert_eq!(rows[0].metric_id.as_str(), "a");
    }

    #[tokio::test]
    async fn replace_discards_previous_rows() {
        let store = InMemoryStore::with_rows(vec![row("a")]);
        store.replace_all(vec![row("b")]).await.unwrap();

        let rows = store.load_summary().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric_id.as_str(), "b");
    }

    #[tokio::test]
    async fn loads_are_snapshots_not_views() {
        let store = InMemoryStore::with_rows(vec![row("a")]);
        let before = store.load_summary().await.unwrap();
        store.append_rows(vec![row("b")]).await.unwrap();
        assert_eq!(before.len(), 1);
    }
}
