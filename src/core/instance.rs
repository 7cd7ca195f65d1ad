//! Entered occurrences of a state definition.

use super::state::State;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// One entered occurrence of a state definition.
///
/// An instance is created every time its owner moves into a new state and
/// is never mutated afterwards. When the owner moves on, the instance stays
/// reachable only through its successor's [`previous_state`], so the whole
/// chain is released once nothing holds the newest instance.
///
/// The owner is recorded by machine id rather than by pointer; handler code
/// receives the owning host directly as an argument.
///
/// [`previous_state`]: StateInstance::previous_state
pub struct StateInstance<S: State> {
    definition: S,
    owner: Uuid,
    previous: Option<Arc<StateInstance<S>>>,
    created_at: DateTime<Utc>,
}

impl<S: State> StateInstance<S> {
    /// Bind a new instance of `definition` to `owner`, after `previous`.
    ///
    /// No hooks run here; entering is the owner's job.
    pub fn new(owner: Uuid, definition: S, previous: Option<Arc<StateInstance<S>>>) -> Self {
        Self {
            definition,
            owner,
            previous,
            created_at: Utc::now(),
        }
    }

    pub fn definition(&self) -> S {
        self.definition
    }

    /// Persisted token of this instance's definition.
    pub fn name(&self) -> &'static str {
        self.definition.name()
    }

    /// Id of the machine this instance belongs to.
    pub fn owner(&self) -> Uuid {
        self.owner
    }

    /// The instance this one superseded, `None` for the first entry.
    pub fn previous_state(&self) -> Option<&Arc<StateInstance<S>>> {
        self.previous.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check whether this instance is an occurrence of `definition`.
    pub fn is(&self, definition: S) -> bool {
        self.definition == definition
    }

    /// Walk this instance and its predecessors, newest first.
    pub fn lineage(&self) -> Lineage<'_, S> {
        Lineage { next: Some(self) }
    }
}

impl<S: State> fmt::Debug for StateInstance<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateInstance")
            .field("definition", &self.definition)
            .field("owner", &self.owner)
            .field("previous", &self.previous.as_ref().map(|p| p.name()))
            .field("created_at", &self.created_at)
            .finish()
    }
}

// Unlinks the chain iteratively so long histories do not overflow the stack.
impl<S: State> Drop for StateInstance<S> {
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(instance) = next {
            match Arc::try_unwrap(instance) {
                Ok(mut inner) => next = inner.previous.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over an instance and its predecessors.
pub struct Lineage<'a, S: State> {
    next: Option<&'a StateInstance<S>>,
}

impl<'a, S: State> Iterator for Lineage<'a, S> {
    type Item = &'a StateInstance<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Phase {
        One,
        Two,
        Three,
    }

    impl State for Phase {
        fn name(&self) -> &'static str {
            match self {
                Self::One => "Phase::One",
                Self::Two => "Phase::Two",
                Self::Three => "Phase::Three",
            }
        }

        fn definitions() -> &'static [Self] {
            &[Self::One, Self::Two, Self::Three]
        }
    }

    #[test]
    fn first_instance_has_no_predecessor() {
        let owner = Uuid::new_v4();
        let instance = StateInstance::new(owner, Phase::One, None);

        assert!(instance.previous_state().is_none());
        assert_eq!(instance.owner(), owner);
        assert_eq!(instance.name(), "Phase::One");
        assert!(instance.is(Phase::One));
        assert!(!instance.is(Phase::Two));
    }

    #[test]
    fn lineage_walks_newest_first() {
        let owner = Uuid::new_v4();
        let one = Arc::new(StateInstance::new(owner, Phase::One, None));
        let two = Arc::new(StateInstance::new(owner, Phase::Two, Some(Arc::clone(&one))));
        let three = StateInstance::new(owner, Phase::Three, Some(Arc::clone(&two)));

        let names: Vec<_> = three.lineage().map(StateInstance::name).collect();
        assert_eq!(names, vec!["Phase::Three", "Phase::Two", "Phase::One"]);

        let previous = three.previous_state().unwrap();
        assert!(Arc::ptr_eq(previous, &two));
        assert!(Arc::ptr_eq(previous.previous_state().unwrap(), &one));
    }

    #[test]
    fn dropping_a_long_chain_does_not_overflow() {
        let owner = Uuid::new_v4();
        let mut newest = Arc::new(StateInstance::new(owner, Phase::One, None));
        for i in 0..200_000 {
            let definition = if i % 2 == 0 { Phase::Two } else { Phase::One };
            newest = Arc::new(StateInstance::new(owner, definition, Some(newest)));
        }
        assert_eq!(newest.lineage().count(), 200_001);
        drop(newest);
    }

    #[test]
    fn shared_predecessor_survives_successor_drop() {
        let owner = Uuid::new_v4();
        let one = Arc::new(StateInstance::new(owner, Phase::One, None));
        let two = StateInstance::new(owner, Phase::Two, Some(Arc::clone(&one)));

        drop(two);

        assert_eq!(Arc::strong_count(&one), 1);
        assert_eq!(one.name(), "Phase::One");
    }

    #[test]
    fn debug_shows_predecessor_name_only() {
        let owner = Uuid::new_v4();
        let one = Arc::new(StateInstance::new(owner, Phase::One, None));
        let two = StateInstance::new(owner, Phase::Two, Some(one));

        let rendered = format!("{two:?}");
        assert!(rendered.contains("Two"));
        assert!(rendered.contains("Phase::One"));
    }
}
