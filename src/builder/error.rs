//! Build errors for state descriptors.

use thiserror::Error;

/// Errors that can occur when declaring a state descriptor.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Invalid state descriptor: {}", join(.0))]
    InvalidDescriptor(Vec<DescriptorViolation>),
}

/// A single problem found while validating a descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorViolation {
    #[error("State enum declares no definitions")]
    NoDefinitions,

    #[error("State definition {definition} has an empty name")]
    EmptyStateName { definition: String },

    #[error("State name '{name}' is used by more than one definition")]
    DuplicateStateName { name: &'static str },

    #[error("Initial state '{name}' is not among the declared definitions")]
    UndeclaredInitialState { name: &'static str },

    #[error("Handler '{name}' is declared more than once")]
    DuplicateHandler { name: &'static str },

    #[error("Handler '{name}' collides with a lifecycle or accessor method")]
    ReservedHandler { name: &'static str },
}

fn join(violations: &[DescriptorViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
