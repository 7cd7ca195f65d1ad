//! Storing a host's current state name in its record.

use crate::core::{State, StateInstance, Stateful};
use crate::persistence::error::PersistenceError;
use crate::persistence::record::Record;
use std::sync::Arc;
use tracing::warn;

/// Attribute holding the state token unless a host overrides it.
pub const DEFAULT_STATE_ATTRIBUTE: &str = "state";

/// A stateful host backed by a [`Record`].
///
/// Hosts forward [`Stateful::state_set`] to [`persist_state`] so that every
/// installed state is written back to the record:
///
/// ```ignore
/// fn state_set(&mut self, instance: &Arc<StateInstance<Self::State>>) {
///     self.persist_state(instance);
/// }
/// ```
///
/// [`persist_state`]: Persistent::persist_state
pub trait Persistent: Stateful {
    /// Record attribute that stores the state token.
    const STATE_ATTRIBUTE: &'static str = DEFAULT_STATE_ATTRIBUTE;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Build a host around a materialized record, without touching its state.
    fn from_record(record: Record) -> Self;

    /// Build a host around `record` and run the post-load hook once.
    fn load(record: Record) -> Self {
        let mut host = Self::from_record(record);
        host.restore_state();
        host
    }

    fn state_token(&self) -> Option<&str> {
        self.record().read_str(Self::STATE_ATTRIBUTE)
    }

    fn set_state_token(&mut self, token: &str) {
        self.record_mut().write_attribute(Self::STATE_ATTRIBUTE, token);
    }

    /// Write `instance`'s name to the state attribute.
    fn persist_state(&mut self, instance: &StateInstance<Self::State>) {
        self.set_state_token(instance.name());
    }

    /// Post-load hook: install the stored state, or the initial state when
    /// nothing is stored or the token no longer resolves.
    fn restore_state(&mut self) -> Arc<StateInstance<Self::State>> {
        let initial = self.state_machine().initial_state();
        let target = match self.state_token() {
            None => initial,
            Some(token) => match <Self::State as State>::resolve(token) {
                Some(definition) => definition,
                None => {
                    warn!(
                        "Record {} stores unknown state '{}', falling back to {}",
                        self.record().id(),
                        token,
                        initial.name()
                    );
                    initial
                }
            },
        };
        self.set_state(target)
    }

    /// Install the state named by `token`.
    fn set_current_state(
        &mut self,
        token: &str,
    ) -> Result<Arc<StateInstance<Self::State>>, PersistenceError> {
        let target = <Self::State as State>::resolve(token).ok_or_else(|| {
            PersistenceError::UnknownState {
                token: token.to_string(),
            }
        })?;
        Ok(self.set_state(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateDescriptor;
    use crate::core::{Lifecycle, StateMachine};
    use std::sync::OnceLock;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Door {
        Open,
        Closed,
    }

    impl State for Door {
        fn name(&self) -> &'static str {
            match self {
                Self::Open => "Door::Open",
                Self::Closed => "Door::Closed",
            }
        }

        fn definitions() -> &'static [Self] {
            &[Self::Open, Self::Closed]
        }
    }

    impl Lifecycle<Hatch> for Door {
        fn enter(self, hatch: &mut Hatch) {
            hatch.entered += 1;
        }
    }

    struct Hatch {
        machine: StateMachine<Door>,
        record: Record,
        entered: usize,
    }

    fn descriptor() -> Arc<StateDescriptor<Door>> {
        static DESCRIPTOR: OnceLock<Arc<StateDescriptor<Door>>> = OnceLock::new();
        Arc::clone(DESCRIPTOR.get_or_init(|| {
            Arc::new(StateDescriptor::declare(Door::Closed).unwrap())
        }))
    }

    impl Stateful for Hatch {
        type State = Door;

        fn state_machine(&self) -> &StateMachine<Door> {
            &self.machine
        }

        fn state_machine_mut(&mut self) -> &mut StateMachine<Door> {
            &mut self.machine
        }

        fn state_set(&mut self, instance: &Arc<StateInstance<Door>>) {
            self.persist_state(instance);
        }
    }

    impl Persistent for Hatch {
        const STATE_ATTRIBUTE: &'static str = "position";

        fn record(&self) -> &Record {
            &self.record
        }

        fn record_mut(&mut self) -> &mut Record {
            &mut self.record
        }

        fn from_record(record: Record) -> Self {
            Self {
                machine: StateMachine::new(descriptor()),
                record,
                entered: 0,
            }
        }
    }

    #[test]
    fn load_without_token_stores_initial_state() {
        let hatch = Hatch::load(Record::new());

        assert_eq!(hatch.state_token(), Some("Door::Closed"));
        assert_eq!(hatch.record().read_str("state"), None);
    }

    #[test]
    fn load_restores_stored_state_without_entering() {
        let mut hatch = Hatch::load(Record::with_attributes([("position", "Door::Open")]));

        assert_eq!(hatch.current_definition(), Door::Open);
        assert_eq!(hatch.entered, 0);
    }

    #[test]
    fn load_falls_back_on_unknown_token() {
        let mut hatch = Hatch::load(Record::with_attributes([("position", "Door::Ajar")]));

        assert_eq!(hatch.current_definition(), Door::Closed);
        assert_eq!(hatch.state_token(), Some("Door::Closed"));
    }

    #[test]
    fn transitions_are_persisted() {
        let mut hatch = Hatch::load(Record::new());

        hatch.transition_to(Door::Open);

        assert_eq!(hatch.state_token(), Some("Door::Open"));
        assert_eq!(hatch.entered, 1);
    }

    #[test]
    fn set_current_state_accepts_known_token() {
        let mut hatch = Hatch::load(Record::new());

        let instance = hatch.set_current_state("Door::Open").unwrap();

        assert!(instance.is(Door::Open));
        assert_eq!(hatch.state_token(), Some("Door::Open"));
    }

    #[test]
    fn set_current_state_rejects_unknown_token() {
        let mut hatch = Hatch::load(Record::new());

        let result = hatch.set_current_state("Door::Ajar");

        assert!(matches!(
            result,
            Err(PersistenceError::UnknownState { token }) if token == "Door::Ajar"
        ));
        assert_eq!(hatch.current_definition(), Door::Closed);
    }
}
