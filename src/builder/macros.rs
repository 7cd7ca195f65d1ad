//! Macros for declaring state enums and forwarding handlers.

/// Declare a closed state enum and implement [`State`](crate::core::State).
///
/// Each variant's name is `"<Enum>::<Variant>"`, which is also the token
/// persisted for it.
///
/// # Example
///
/// ```
/// use state_pattern::core::State;
/// use state_pattern::state_enum;
///
/// state_enum! {
///     pub enum Switch {
///         On,
///         Off,
///     }
/// }
///
/// assert_eq!(Switch::Off.name(), "Switch::Off");
/// assert_eq!(Switch::definitions(), &[Switch::On, Switch::Off]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!(stringify!($name), "::", stringify!($variant))),*
                }
            }

            fn definitions() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}

/// Declare a handler trait on a stateful host and forward it to the
/// current state.
///
/// Every method becomes a host method that looks up the current state
/// (entering the initial state on first use) and calls the state's
/// same-named method with the host and the remaining arguments. The
/// state's return value is passed back unchanged. The macro also
/// implements [`Delegation`](crate::core::Delegation) with the handler names.
///
/// # Example
///
/// ```
/// use state_pattern::builder::StateDescriptor;
/// use state_pattern::core::{Lifecycle, StateMachine, Stateful};
/// use state_pattern::{delegate_handlers, state_enum};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Bulb {
///         Lit,
///         Dark,
///     }
/// }
///
/// impl Bulb {
///     fn flick(self, lamp: &mut Lamp) -> &'static str {
///         match self {
///             Self::Lit => {
///                 self.transition_to(lamp, Bulb::Dark);
///                 "dark"
///             }
///             Self::Dark => {
///                 self.transition_to(lamp, Bulb::Lit);
///                 "lit"
///             }
///         }
///     }
/// }
///
/// impl Lifecycle<Lamp> for Bulb {}
///
/// struct Lamp {
///     machine: StateMachine<Bulb>,
/// }
///
/// impl Stateful for Lamp {
///     type State = Bulb;
///
///     fn state_machine(&self) -> &StateMachine<Bulb> {
///         &self.machine
///     }
///
///     fn state_machine_mut(&mut self) -> &mut StateMachine<Bulb> {
///         &mut self.machine
///     }
/// }
///
/// delegate_handlers! {
///     trait LampHandlers for Lamp {
///         fn flick(&mut self) -> &'static str;
///     }
/// }
///
/// let descriptor = StateDescriptor::builder()
///     .initial(Bulb::Dark)
///     .delegate::<Lamp>()
///     .build()
///     .unwrap();
/// let mut lamp = Lamp { machine: StateMachine::new(Arc::new(descriptor)) };
///
/// assert_eq!(lamp.flick(), "lit");
/// assert_eq!(lamp.flick(), "dark");
/// ```
#[macro_export]
macro_rules! delegate_handlers {
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident for $host:ty {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&mut self $(, $arg:ident : $arg_ty:ty)*) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $trait_name {
            $(
                $(#[$method_meta])*
                fn $method(&mut self $(, $arg: $arg_ty)*) $(-> $ret)?;
            )*
        }

        impl $trait_name for $host {
            $(
                fn $method(&mut self $(, $arg: $arg_ty)*) $(-> $ret)? {
                    let state = $crate::core::Stateful::current_state(self).definition();
                    state.$method(self $(, $arg)*)
                }
            )*
        }

        impl $crate::core::Delegation for $host {
            const HANDLERS: &'static [&'static str] = &[$(stringify!($method)),*];
        }
    };
}
