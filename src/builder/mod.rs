//! Declaration API for stateful types.
//!
//! This module provides the descriptor builder that fixes a type's initial
//! state and forwarded handlers, plus the macros that remove the
//! boilerplate of declaring states and delegating handlers.

pub mod descriptor;
pub mod error;
pub mod macros;
pub mod validation;

pub use descriptor::{DescriptorBuilder, StateDescriptor};
pub use error::{BuildError, DescriptorViolation};
pub use validation::RESERVED_HANDLER_NAMES;
