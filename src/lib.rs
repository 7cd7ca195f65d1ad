//! State pattern: objects that delegate behaviour to swappable states
//!
//! A stateful host owns exactly one current state instance and forwards its
//! handler methods to it. Handlers (and lifecycle hooks) can move the host
//! to another state, which exits the old state, builds a new instance
//! linked to its predecessor, and enters it.
//!
//! # Core Concepts
//!
//! - **State**: a closed enum of definitions via the `State` trait
//! - **Lifecycle**: `enter`/`exit` hooks run around every transition
//! - **Stateful**: the host-side transition algorithm and lazy initial entry
//! - **Delegation**: handler traits forwarded with `delegate_handlers!`
//! - **Persistence**: optional record storage of the current state's name
//!
//! # Example
//!
//! ```rust
//! use state_pattern::builder::StateDescriptor;
//! use state_pattern::core::{Lifecycle, StateMachine, Stateful};
//! use state_pattern::{delegate_handlers, state_enum};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum ButtonState {
//!         On,
//!         Off,
//!     }
//! }
//!
//! impl ButtonState {
//!     fn press(self, button: &mut Button) -> String {
//!         let next = match self {
//!             Self::On => ButtonState::Off,
//!             Self::Off => ButtonState::On,
//!         };
//!         self.transition_to(button, next);
//!         format!("{} is {}", button.name, if next == ButtonState::On { "on" } else { "off" })
//!     }
//! }
//!
//! impl Lifecycle<Button> for ButtonState {}
//!
//! struct Button {
//!     name: String,
//!     machine: StateMachine<ButtonState>,
//! }
//!
//! impl Stateful for Button {
//!     type State = ButtonState;
//!
//!     fn state_machine(&self) -> &StateMachine<ButtonState> {
//!         &self.machine
//!     }
//!
//!     fn state_machine_mut(&mut self) -> &mut StateMachine<ButtonState> {
//!         &mut self.machine
//!     }
//! }
//!
//! delegate_handlers! {
//!     trait ButtonHandlers for Button {
//!         fn press(&mut self) -> String;
//!     }
//! }
//!
//! let descriptor = StateDescriptor::builder()
//!     .initial(ButtonState::Off)
//!     .delegate::<Button>()
//!     .build()
//!     .unwrap();
//! let mut button = Button {
//!     name: "The button".to_string(),
//!     machine: StateMachine::new(Arc::new(descriptor)),
//! };
//!
//! assert_eq!(button.press(), "The button is on");
//! assert_eq!(button.press(), "The button is off");
//! ```

pub mod builder;
pub mod core;
pub mod persistence;

// Re-export commonly used types
pub use builder::{BuildError, StateDescriptor};
pub use self::core::{Lifecycle, State, StateError, StateInstance, StateMachine, Stateful};
pub use persistence::{Persistent, PersistenceError, Record};
