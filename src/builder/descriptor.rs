//! Immutable per-type state declarations.

use crate::builder::error::BuildError;
use crate::builder::validation;
use crate::core::{Delegation, State};
use stillwater::validation::Validation;

/// Declared initial state and handler surface of a stateful type.
///
/// Built once, shared behind an `Arc`, and handed to every
/// [`StateMachine`](crate::core::StateMachine) of that type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateDescriptor<S: State> {
    initial: S,
    handlers: Vec<&'static str>,
}

impl<S: State> StateDescriptor<S> {
    /// Declare `initial` as the initial state, with no forwarded handlers.
    ///
    /// Use [`declare_for`](Self::declare_for) for a host that forwards
    /// handlers through `delegate_handlers!`.
    pub fn declare(initial: S) -> Result<Self, BuildError> {
        Self::builder().initial(initial).build()
    }

    /// Declare `initial` together with the handler names `H` forwards.
    pub fn declare_for<H: Delegation>(initial: S) -> Result<Self, BuildError> {
        Self::builder().initial(initial).delegate::<H>().build()
    }

    pub fn builder() -> DescriptorBuilder<S> {
        DescriptorBuilder::new()
    }

    pub fn initial_state(&self) -> S {
        self.initial
    }

    /// Handler names forwarded to the current state, in declaration order.
    ///
    /// Descriptive only. Dispatch goes through the trait that
    /// `delegate_handlers!` generates, so the names here are checked at build
    /// time against lifecycle names and duplicates, and kept for callers that
    /// list or look up a host's handler surface.
    pub fn handler_names(&self) -> &[&'static str] {
        &self.handlers
    }

    pub fn declares_handler(&self, name: &str) -> bool {
        self.handlers.contains(&name)
    }
}

/// Builder for state descriptors with a fluent API.
pub struct DescriptorBuilder<S: State> {
    initial: Option<S>,
    handlers: Vec<&'static str>,
}

impl<S: State> DescriptorBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            handlers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add forwarded handler names.
    pub fn handlers(mut self, names: &[&'static str]) -> Self {
        self.handlers.extend_from_slice(names);
        self
    }

    /// Add the handler names a host forwards through `delegate_handlers!`.
    pub fn delegate<H: Delegation>(self) -> Self {
        self.handlers(H::HANDLERS)
    }

    /// Build the descriptor.
    /// Returns every violation found if the declaration is inconsistent.
    pub fn build(self) -> Result<StateDescriptor<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        match validation::validate(initial, &self.handlers) {
            Validation::Success(_) => Ok(StateDescriptor {
                initial,
                handlers: self.handlers,
            }),
            Validation::Failure(violations) => Err(BuildError::InvalidDescriptor(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl<S: State> Default for DescriptorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
