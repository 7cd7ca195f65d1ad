//! Persistence error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while storing or restoring stateful records
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// No state definition carries this token
    #[error("Unknown state token '{token}'")]
    UnknownState { token: String },

    /// No record is stored under this id
    #[error("Record {0} not found")]
    RecordNotFound(Uuid),
}
