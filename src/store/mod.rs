//! Persistence abstraction for carers and their documents.
//!
//! This module defines the [`CarerStore`] trait so the API layer can be
//! exercised against any backing storage, plus the in-memory
//! implementation used by tests and single-process deployments. The
//! stored carer status is a cache of the classification engine's
//! derivation; callers refresh it after every document mutation.

mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Carer, CarerDocument, ComplianceSnapshot, ComplianceStatus};

pub use memory::MemoryStore;

/// A carer together with their documents.
///
/// Documents belong to exactly one carer; the record is the unit of
/// storage and retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarerRecord {
    /// The carer's identity fields and cached status.
    pub carer: Carer,
    /// The carer's documents.
    pub documents: Vec<CarerDocument>,
}

/// Error enumeration for store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same id already exists.
    #[error("record already exists")]
    Conflict,
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// The store could not be reached or is corrupted.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for carers, documents, and dashboard snapshots.
///
/// Implementations must be safe to share across request handlers.
pub trait CarerStore: Send + Sync {
    /// Inserts a new carer with no documents.
    ///
    /// Fails with [`StoreError::Conflict`] if the id is taken.
    fn insert_carer(&self, carer: Carer) -> Result<(), StoreError>;

    /// Replaces a carer's identity fields, keeping their documents.
    ///
    /// Fails with [`StoreError::NotFound`] if the carer does not exist.
    fn update_carer(&self, carer: Carer) -> Result<(), StoreError>;

    /// Deletes a carer and all their documents.
    fn delete_carer(&self, carer_id: &str) -> Result<(), StoreError>;

    /// Fetches a carer record by id.
    fn get_carer(&self, carer_id: &str) -> Result<Option<CarerRecord>, StoreError>;

    /// Lists all carer records, ordered by carer id.
    fn list_carers(&self) -> Result<Vec<CarerRecord>, StoreError>;

    /// Adds a document to a carer, or replaces it if the document id exists.
    fn upsert_document(&self, carer_id: &str, document: CarerDocument) -> Result<(), StoreError>;

    /// Removes a document from a carer.
    ///
    /// Fails with [`StoreError::NotFound`] if either the carer or the
    /// document does not exist.
    fn delete_document(&self, carer_id: &str, document_id: &str) -> Result<(), StoreError>;

    /// Persists a freshly derived status for a carer.
    fn set_carer_status(&self, carer_id: &str, status: ComplianceStatus)
    -> Result<(), StoreError>;

    /// Records a dashboard snapshot.
    fn record_snapshot(&self, snapshot: ComplianceSnapshot) -> Result<(), StoreError>;

    /// Lists recorded snapshots, oldest first.
    fn snapshots(&self) -> Result<Vec<ComplianceSnapshot>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::Conflict.to_string(), "record already exists");
        assert_eq!(StoreError::NotFound.to_string(), "record not found");
        assert_eq!(
            StoreError::Unavailable("lock poisoned".to_string()).to_string(),
            "store unavailable: lock poisoned"
        );
    }

    #[test]
    fn test_carer_store_is_object_safe() {
        fn assert_object_safe(_store: &dyn CarerStore) {}
        let store = MemoryStore::new();
        assert_object_safe(&store);
    }
}
