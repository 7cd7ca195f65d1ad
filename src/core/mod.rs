//! Core state pattern engine.
//!
//! This module contains the collaboration between a stateful host and its
//! state definitions:
//! - State definitions via the `State` trait, hooks via `Lifecycle`
//! - Immutable `StateInstance`s chained to their predecessors
//! - The `StateMachine` slot and the `Stateful` transition algorithm
//!
//! Nothing here performs I/O. Storage integrations plug in through
//! `Stateful::state_set`.

mod error;
mod instance;
mod machine;
mod state;
mod stateful;

pub use error::StateError;
pub use instance::{Lineage, StateInstance};
pub use machine::{Installed, StateMachine};
pub use state::{Lifecycle, State};
pub use stateful::{Delegation, Stateful};
