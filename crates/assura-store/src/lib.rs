//! Assura Store - Measurement snapshot storage
//!
//! The engine treats the measurement table as a bulk immutable snapshot:
//! every query loads the full table, and ingestion replaces or extends it
//! wholesale. This crate provides that port and two backends:
//!
//! - [`InMemoryStore`]: for development and tests
//! - [`JsonFileStore`]: a single JSON snapshot file, seeded empty on first
//!   start

pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

// Re-export main types
pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::MeasurementStore;
