//! Per-object slot holding the current state instance.

use crate::builder::StateDescriptor;
use crate::core::instance::StateInstance;
use crate::core::state::State;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Outcome of installing a definition into a machine.
#[derive(Debug)]
pub enum Installed<S: State> {
    /// A new instance was constructed and is now current
    Fresh(Arc<StateInstance<S>>),

    /// The definition was already current; the existing instance is kept
    Unchanged(Arc<StateInstance<S>>),
}

impl<S: State> Installed<S> {
    pub fn instance(&self) -> &Arc<StateInstance<S>> {
        match self {
            Self::Fresh(instance) | Self::Unchanged(instance) => instance,
        }
    }

    pub fn into_instance(self) -> Arc<StateInstance<S>> {
        match self {
            Self::Fresh(instance) | Self::Unchanged(instance) => instance,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// State slot embedded in every stateful host.
///
/// The machine knows nothing about hooks or hosts; it only tracks which
/// instance is current and builds successors. [`Stateful`] drives it.
///
/// [`Stateful`]: crate::core::Stateful
pub struct StateMachine<S: State> {
    id: Uuid,
    descriptor: Arc<StateDescriptor<S>>,
    current: Option<Arc<StateInstance<S>>>,
}

impl<S: State> StateMachine<S> {
    /// Create an uninitialized machine for the declared state type.
    pub fn new(descriptor: Arc<StateDescriptor<S>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            descriptor,
            current: None,
        }
    }

    /// Id recorded as the owner of every instance this machine builds.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn descriptor(&self) -> &Arc<StateDescriptor<S>> {
        &self.descriptor
    }

    pub fn initial_state(&self) -> S {
        self.descriptor.initial_state()
    }

    /// Current instance, without triggering lazy entry.
    pub fn current(&self) -> Option<&Arc<StateInstance<S>>> {
        self.current.as_ref()
    }

    /// Check whether any state has been installed yet.
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Make `target` current, keeping the existing instance when it already is.
    ///
    /// A fresh instance records the outgoing one as its predecessor.
    pub fn install(&mut self, target: S) -> Installed<S> {
        if let Some(current) = self.current.as_ref().filter(|c| c.is(target)) {
            trace!("Machine {} already in {}", self.id, target.name());
            return Installed::Unchanged(Arc::clone(current));
        }

        let previous = self.current.take();
        debug!(
            "Machine {} installing {} (previous: {})",
            self.id,
            target.name(),
            previous.as_ref().map_or("none", |p| p.name())
        );
        let instance = Arc::new(StateInstance::new(self.id, target, previous));
        self.current = Some(Arc::clone(&instance));
        Installed::Fresh(instance)
    }
}

impl<S: State> std::fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("initial", &self.descriptor.initial_state())
            .field("current", &self.current.as_ref().map(|c| c.definition()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum WorkflowState {
        Initial,
        Processing,
        Complete,
    }

    impl State for WorkflowState {
        fn name(&self) -> &'static str {
            match self {
                Self::Initial => "WorkflowState::Initial",
                Self::Processing => "WorkflowState::Processing",
                Self::Complete => "WorkflowState::Complete",
            }
        }

        fn definitions() -> &'static [Self] {
            &[Self::Initial, Self::Processing, Self::Complete]
        }
    }

    fn machine() -> StateMachine<WorkflowState> {
        let descriptor = StateDescriptor::declare(WorkflowState::Initial).unwrap();
        StateMachine::new(Arc::new(descriptor))
    }

    #[test]
    fn new_machine_is_uninitialized() {
        let machine = machine();

        assert!(!machine.is_initialized());
        assert!(machine.current().is_none());
        assert_eq!(machine.initial_state(), WorkflowState::Initial);
    }

    #[test]
    fn install_builds_fresh_instance() {
        let mut machine = machine();

        let installed = machine.install(WorkflowState::Processing);

        assert!(installed.is_fresh());
        let instance = installed.into_instance();
        assert!(instance.is(WorkflowState::Processing));
        assert!(instance.previous_state().is_none());
        assert_eq!(instance.owner(), machine.id());
        assert!(Arc::ptr_eq(machine.current().unwrap(), &instance));
    }

    #[test]
    fn install_same_definition_keeps_instance() {
        let mut machine = machine();

        let first = machine.install(WorkflowState::Initial).into_instance();
        let second = machine.install(WorkflowState::Initial);

        assert!(!second.is_fresh());
        assert!(Arc::ptr_eq(&first, second.instance()));
    }

    #[test]
    fn install_links_predecessor() {
        let mut machine = machine();

        let initial = machine.install(WorkflowState::Initial).into_instance();
        let processing = machine.install(WorkflowState::Processing).into_instance();
        let complete = machine.install(WorkflowState::Complete).into_instance();

        assert!(Arc::ptr_eq(complete.previous_state().unwrap(), &processing));
        assert!(Arc::ptr_eq(processing.previous_state().unwrap(), &initial));
        assert!(initial.previous_state().is_none());
    }

    #[test]
    fn machines_have_distinct_ids() {
        assert_ne!(machine().id(), machine().id());
    }
}
