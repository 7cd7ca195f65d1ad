//! Descriptor checks using Validation.
//!
//! Every check runs and every violation is reported, so a broken
//! declaration can be fixed in one pass.

use crate::builder::error::DescriptorViolation;
use crate::core::State;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Method names a handler may not take, since hosts and states already
/// expose them.
pub const RESERVED_HANDLER_NAMES: &[&str] = &[
    "enter",
    "exit",
    "transition_to",
    "current_state",
    "current_definition",
    "set_state",
    "enter_state",
    "previous_state",
    "name",
    "definition",
];

type Check = Validation<(), NonEmptyVec<DescriptorViolation>>;

/// Validate an initial state and handler set, accumulating ALL violations.
pub(crate) fn validate<S: State>(initial: S, handlers: &[&'static str]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let definitions = S::definitions();

    if definitions.is_empty() {
        checks.push(Validation::fail(DescriptorViolation::NoDefinitions));
    }

    let mut names = HashSet::new();
    for definition in definitions {
        let name = definition.name();
        if name.is_empty() {
            checks.push(Validation::fail(DescriptorViolation::EmptyStateName {
                definition: format!("{definition:?}"),
            }));
        } else if !names.insert(name) {
            checks.push(Validation::fail(DescriptorViolation::DuplicateStateName {
                name,
            }));
        }
    }

    if !definitions.contains(&initial) {
        checks.push(Validation::fail(
            DescriptorViolation::UndeclaredInitialState {
                name: initial.name(),
            },
        ));
    }

    let mut seen = HashSet::new();
    for &handler in handlers {
        if RESERVED_HANDLER_NAMES.contains(&handler) {
            checks.push(Validation::fail(DescriptorViolation::ReservedHandler {
                name: handler,
            }));
        }
        if !seen.insert(handler) {
            checks.push(Validation::fail(DescriptorViolation::DuplicateHandler {
                name: handler,
            }));
        }
    }

    checks.push(Validation::success(()));
    Validation::all_vec(checks).map(|_| ())
}
