//! Faults raised by delegated handlers.

use super::state::State;
use thiserror::Error;

/// Errors surfaced through a host's forwarded handler methods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// The current state does not implement the invoked handler
    #[error("Handler '{handler}' is not implemented by state '{state}'")]
    UnresolvedHandler {
        handler: &'static str,
        state: &'static str,
    },
}

impl StateError {
    /// Fault for `handler` invoked while `state` is current.
    pub fn unresolved<S: State>(handler: &'static str, state: S) -> Self {
        Self::UnresolvedHandler {
            handler,
            state: state.name(),
        }
    }
}
