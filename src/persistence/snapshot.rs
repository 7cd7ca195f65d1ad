//! Versioned, encodable snapshots of records.

use crate::persistence::error::PersistenceError;
use crate::persistence::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Encoding used for stored snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-readable JSON
    #[default]
    Json,

    /// Compact bincode
    Binary,
}

/// Serializable copy of a record at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The captured record
    pub record: Record,
}

impl RecordSnapshot {
    pub fn of(record: &Record) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            record: record.clone(),
        }
    }

    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>, PersistenceError> {
        match format {
            SnapshotFormat::Json => serde_json::to_vec(self)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string())),
            SnapshotFormat::Binary => bincode::serialize(self)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string())),
        }
    }

    /// Decode a snapshot, rejecting versions this build cannot read.
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self, PersistenceError> {
        let snapshot: Self = match format {
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?,
            SnapshotFormat::Binary => bincode::deserialize(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?,
        };

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}
