//! Record-backed persistence for stateful hosts.
//!
//! A persisted host keeps its current state's name in a record attribute.
//! Every `set_state` writes the name back, and loading a record installs
//! the stored state again (or the initial state when the name is missing
//! or no longer resolves). Records are stored as versioned snapshots in
//! JSON or binary form.

pub mod error;
pub mod persistent;
pub mod record;
pub mod repository;
pub mod snapshot;

pub use error::PersistenceError;
pub use persistent::{Persistent, DEFAULT_STATE_ATTRIBUTE};
pub use record::{Record, Value};
pub use repository::MemoryRepository;
pub use snapshot::{RecordSnapshot, SnapshotFormat, SNAPSHOT_VERSION};
