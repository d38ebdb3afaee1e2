//! JSON snapshot file store
//!
//! Persists the measurement table as one JSON array on disk. A missing
//! file is seeded with an empty snapshot on open, so a fresh deployment
//! serves an empty (not failing) dashboard until the first ingest.
//! Mutations rewrite the whole file: the table is a bulk snapshot, not an
//! append log.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use assura_types::MeasurementRow;

use crate::error::StoreResult;
use crate::traits::MeasurementStore;

/// Measurement store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,

    /// Serializes read-modify-write cycles; plain loads go lock-free
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`, seeding an empty snapshot if the file does
    /// not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if tokio::fs::try_exists(&path).await? {
            info!(path = %path.display(), "opening measurement snapshot");
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            write_snapshot(&path, &[]).await?;
            info!(path = %path.display(), "seeded empty measurement snapshot");
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn read_snapshot(path: &Path) -> StoreResult<Vec<MeasurementRow>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn write_snapshot(path: &Path, rows: &[MeasurementRow]) -> StoreResult<()> {
    let bytes = serde_json::to_vec_pretty(rows)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[async_trait]
impl MeasurementStore for JsonFileStore {
    async fn load_summary(&self) -> StoreResult<Vec<MeasurementRow>> {
        read_snapshot(&self.path).await
    }

    async fn append_rows(&self, rows: Vec<MeasurementRow>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = read_snapshot(&self.path).await?;
        snapshot.extend(rows);
        write_snapshot(&self.path, &snapshot).await
    }

    async fn replace_all(&self, rows: Vec<MeasurementRow>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        write_snapshot(&self.path, &rows).await
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(read_snapshot(&self.path).await?.len())
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
            dimensions: BTreeMap::from([("team".to_string(), "core".to_string())]),
        }
    }

    #[tokio::test]
    async fn seeds_an_empty_snapshot_on_first_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn rows_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        store.append_rows(vec![row("a"), row("b")]).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let rows = reopened.load_summary().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metric_id.as_str(), "a");
        assert_eq!(rows[0].dimension("team"), Some("core"));
    }

    #[tokio::test]
    async fn replace_overwrites_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        store.append_rows(vec![row("a")]).await.unwrap();
        store.replace_all(vec![row("b")]).await.unwrap();

        let rows = store.load_summary().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric_id.as_str(), "b");
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/summary.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
