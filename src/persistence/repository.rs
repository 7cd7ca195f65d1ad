//! In-process store of encoded record snapshots.

use crate::persistence::error::PersistenceError;
use crate::persistence::persistent::Persistent;
use crate::persistence::record::Record;
use crate::persistence::snapshot::{RecordSnapshot, SnapshotFormat};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Keeps encoded snapshots keyed by record id.
///
/// Every save stores a fresh encoding, so a loaded record never shares
/// state with the host it was saved from.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    format: SnapshotFormat,
    entries: HashMap<Uuid, Vec<u8>>,
}

impl MemoryRepository {
    pub fn new(format: SnapshotFormat) -> Self {
        Self {
            format,
            entries: HashMap::new(),
        }
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    /// Store `record`, replacing any earlier save under the same id.
    pub fn save(&mut self, record: &Record) -> Result<Uuid, PersistenceError> {
        let bytes = RecordSnapshot::of(record).encode(self.format)?;
        debug!("Saved record {} ({} bytes)", record.id(), bytes.len());
        self.entries.insert(record.id(), bytes);
        Ok(record.id())
    }

    /// Materialize the stored record `id`.
    pub fn load(&self, id: Uuid) -> Result<Record, PersistenceError> {
        let bytes = self
            .entries
            .get(&id)
            .ok_or(PersistenceError::RecordNotFound(id))?;
        let record = RecordSnapshot::decode(bytes, self.format)?.into_record();
        debug!("Loaded record {}", id);
        Ok(record)
    }

    /// Load record `id` into a host and run its post-load hook.
    pub fn find<H: Persistent>(&self, id: Uuid) -> Result<H, PersistenceError> {
        self.load(id).map(H::load)
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
