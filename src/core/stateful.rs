//! Host side of the state pattern: transitions and delegation.

use super::instance::StateInstance;
use super::machine::StateMachine;
use super::state::{Lifecycle, State};
use std::sync::Arc;
use tracing::debug;

/// Trait for objects whose behaviour is delegated to a current state.
///
/// A host embeds a [`StateMachine`] and exposes it through the two
/// accessors; every other method is provided. Handler methods are
/// forwarded to the current state with [`delegate_handlers!`].
///
/// All operations run synchronously on the caller's thread. A hook or
/// handler that transitions the same host again before returning sees the
/// newest instance installed while the outer call is still unwinding.
///
/// # Example
///
/// ```rust
/// use state_pattern::builder::StateDescriptor;
/// use state_pattern::core::{Lifecycle, StateMachine, Stateful};
/// use state_pattern::state_enum;
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Valve {
///         Shut,
///         Flowing,
///     }
/// }
///
/// struct Pipe {
///     machine: StateMachine<Valve>,
/// }
///
/// impl Lifecycle<Pipe> for Valve {}
///
/// impl Stateful for Pipe {
///     type State = Valve;
///
///     fn state_machine(&self) -> &StateMachine<Valve> {
///         &self.machine
///     }
///
///     fn state_machine_mut(&mut self) -> &mut StateMachine<Valve> {
///         &mut self.machine
///     }
/// }
///
/// let descriptor = Arc::new(StateDescriptor::declare(Valve::Shut).unwrap());
/// let mut pipe = Pipe { machine: StateMachine::new(descriptor) };
///
/// assert_eq!(pipe.current_definition(), Valve::Shut);
/// pipe.transition_to(Valve::Flowing);
/// assert_eq!(pipe.current_definition(), Valve::Flowing);
/// ```
///
/// [`delegate_handlers!`]: crate::delegate_handlers
pub trait Stateful: Sized {
    type State: Lifecycle<Self>;

    fn state_machine(&self) -> &StateMachine<Self::State>;

    fn state_machine_mut(&mut self) -> &mut StateMachine<Self::State>;

    /// Called after every [`set_state`](Stateful::set_state), including
    /// calls that kept the existing instance.
    ///
    /// Default is a no-op. Storage integrations override it to record the
    /// current state's name.
    fn state_set(&mut self, _instance: &Arc<StateInstance<Self::State>>) {}

    /// Current instance, entering the declared initial state on first access.
    fn current_state(&mut self) -> Arc<StateInstance<Self::State>> {
        if let Some(current) = self.state_machine().current() {
            return Arc::clone(current);
        }

        let initial = self.state_machine().initial_state();
        self.enter_state(initial)
    }

    /// Definition of the current instance.
    fn current_definition(&mut self) -> Self::State {
        self.current_state().definition()
    }

    /// Install `target` as current without running any hook.
    ///
    /// Setting the definition that is already current returns the existing
    /// instance unchanged.
    fn set_state(&mut self, target: Self::State) -> Arc<StateInstance<Self::State>> {
        let instance = self.state_machine_mut().install(target).into_instance();
        self.state_set(&instance);
        instance
    }

    /// Install `next` and run its `enter` hook if a new instance was built.
    ///
    /// Returns the instance current once the hook has finished, which is a
    /// later one if the hook transitioned again.
    fn enter_state(&mut self, next: Self::State) -> Arc<StateInstance<Self::State>> {
        let before = self.state_machine().current().cloned();
        let instance = self.set_state(next);

        let fresh = before.is_none_or(|b| !Arc::ptr_eq(&b, &instance));
        if !fresh {
            return instance;
        }

        debug!(
            "Machine {} entering {}",
            self.state_machine().id(),
            next.name()
        );
        next.enter(self);
        // enter hooks may have moved on already
        match self.state_machine().current() {
            Some(current) => Arc::clone(current),
            None => instance,
        }
    }

    /// Exit the current state, then enter `next`.
    ///
    /// Transitioning to the current definition exits it and keeps the same
    /// instance without entering again.
    fn transition_to(&mut self, next: Self::State) -> Arc<StateInstance<Self::State>> {
        let current = self.current_state().definition();
        debug!(
            "Machine {} exiting {} for {}",
            self.state_machine().id(),
            current.name(),
            next.name()
        );
        current.exit(self);
        self.enter_state(next)
    }
}

/// Handler names forwarded from a host to its current state.
///
/// Implemented by [`delegate_handlers!`](crate::delegate_handlers).
pub trait Delegation {
    const HANDLERS: &'static [&'static str];
}
