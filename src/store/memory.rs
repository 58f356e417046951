//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{Carer, CarerDocument, ComplianceSnapshot, ComplianceStatus};

use super::{CarerRecord, CarerStore, StoreError};

/// An in-memory [`CarerStore`] backed by `RwLock`-guarded maps.
///
/// Suitable for tests and single-process deployments. Lock poisoning
/// surfaces as [`StoreError::Unavailable`] rather than a panic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CarerRecord>>,
    snapshots: RwLock<Vec<ComplianceSnapshot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_records(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, CarerRecord>>, StoreError> {
        self.records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write_records(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, CarerRecord>>, StoreError> {
        self.records
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl CarerStore for MemoryStore {
    fn insert_carer(&self, carer: Carer) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        if records.contains_key(&carer.id) {
            return Err(StoreError::Conflict);
        }
        records.insert(
            carer.id.clone(),
            CarerRecord {
                carer,
                documents: Vec::new(),
            },
        );
        Ok(())
    }

    fn update_carer(&self, carer: Carer) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        let record = records.get_mut(&carer.id).ok_or(StoreError::NotFound)?;
        record.carer = carer;
        Ok(())
    }

    fn delete_carer(&self, carer_id: &str) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        records.remove(carer_id).ok_or(StoreError::NotFound)?;
        Ok(())
    }

    fn get_carer(&self, carer_id: &str) -> Result<Option<CarerRecord>, StoreError> {
        let records = self.read_records()?;
        Ok(records.get(carer_id).cloned())
    }

    fn list_carers(&self) -> Result<Vec<CarerRecord>, StoreError> {
        let records = self.read_records()?;
        let mut list: Vec<CarerRecord> = records.values().cloned().collect();
        list.sort_by(|a, b| a.carer.id.cmp(&b.carer.id));
        Ok(list)
    }

    fn upsert_document(&self, carer_id: &str, document: CarerDocument) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        let record = records.get_mut(carer_id).ok_or(StoreError::NotFound)?;
        match record.documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => record.documents.push(document),
        }
        Ok(())
    }

    fn delete_document(&self, carer_id: &str, document_id: &str) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        let record = records.get_mut(carer_id).ok_or(StoreError::NotFound)?;
        let before = record.documents.len();
        record.documents.retain(|d| d.id != document_id);
        if record.documents.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn set_carer_status(
        &self,
        carer_id: &str,
        status: ComplianceStatus,
    ) -> Result<(), StoreError> {
        let mut records = self.write_records()?;
        let record = records.get_mut(carer_id).ok_or(StoreError::NotFound)?;
        record.carer.status = status;
        Ok(())
    }

    fn record_snapshot(&self, snapshot: ComplianceSnapshot) -> Result<(), StoreError> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        snapshots.push(snapshot);
        Ok(())
    }

    fn snapshots(&self) -> Result<Vec<ComplianceSnapshot>, StoreError> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(snapshots.clone())
    }
}
