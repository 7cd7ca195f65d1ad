//! State definitions and their lifecycle hooks.
//!
//! A state definition is one case of a closed enum. It carries no data of
//! its own: its identity is its persisted name, and its behaviour lives in
//! the handler methods and lifecycle hooks implemented on the enum.

use super::instance::StateInstance;
use super::stateful::Stateful;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Trait for state definitions.
///
/// Implementors are plain `Copy` enums, usually declared with
/// [`state_enum!`](crate::state_enum). The name doubles as the token
/// written to storage, so it must be stable and unique among the
/// enum's variants.
///
/// # Example
///
/// ```rust
/// use state_pattern::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Door::Open",
///             Self::Closed => "Door::Closed",
///         }
///     }
///
///     fn definitions() -> &'static [Self] {
///         &[Self::Open, Self::Closed]
///     }
/// }
///
/// assert_eq!(Door::resolve("Door::Closed"), Some(Door::Closed));
/// assert_eq!(Door::resolve("Door::Ajar"), None);
/// ```
pub trait State: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Stable name of this definition, used as the persisted token.
    fn name(&self) -> &'static str;

    /// Every definition of this state enum.
    fn definitions() -> &'static [Self];

    /// Map a persisted token back to a definition.
    ///
    /// Returns `None` when no definition carries that name.
    fn resolve(token: &str) -> Option<Self> {
        Self::definitions()
            .iter()
            .copied()
            .find(|definition| definition.name() == token)
    }
}

/// Lifecycle hooks run around a transition on host `H`.
///
/// Both hooks default to no-ops. The engine calls `enter` exactly once per
/// fresh entry and `exit` exactly once before leaving; neither runs while an
/// instance is merely constructed.
pub trait Lifecycle<H>: State {
    /// Runs once this definition has become current on `host`.
    fn enter(self, _host: &mut H) {}

    /// Runs immediately before `host` leaves this definition.
    fn exit(self, _host: &mut H) {}

    /// Move `host` to `next`, for handler code written on the state side.
    fn transition_to(self, host: &mut H, next: Self) -> Arc<StateInstance<Self>>
    where
        H: Stateful<State = Self>,
    {
        host.transition_to(next)
    }
}
