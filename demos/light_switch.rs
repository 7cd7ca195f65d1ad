//! Light Switch
//!
//! This example demonstrates a stateful host delegating to swappable states.
//!
//! Key concepts:
//! - Closed state enum declared with `state_enum!`
//! - Handler forwarding with `delegate_handlers!`
//! - Enter/exit hooks around every transition
//! - Persisting the current state and restoring it after a reload
//!
//! Run with: cargo run --example light_switch

use state_pattern::builder::StateDescriptor;
use state_pattern::core::{Lifecycle, State, StateInstance, StateMachine, Stateful};
use state_pattern::persistence::{MemoryRepository, Persistent, Record, SnapshotFormat};
use state_pattern::{delegate_handlers, state_enum};
use std::sync::{Arc, OnceLock};

state_enum! {
    enum Light {
        On,
        Off,
    }
}

impl Light {
    fn flip(self, switch: &mut Switch) -> &'static str {
        match self {
            Self::On => {
                self.transition_to(switch, Light::Off);
                "click (off)"
            }
            Self::Off => {
                self.transition_to(switch, Light::On);
                "click (on)"
            }
        }
    }

    fn watts(self, _switch: &mut Switch) -> u32 {
        match self {
            Self::On => 60,
            Self::Off => 0,
        }
    }
}

impl Lifecycle<Switch> for Light {
    fn enter(self, switch: &mut Switch) {
        println!("  [{}] entering {}", switch.label, self.name());
    }

    fn exit(self, switch: &mut Switch) {
        println!("  [{}] leaving {}", switch.label, self.name());
    }
}

struct Switch {
    label: String,
    machine: StateMachine<Light>,
    record: Record,
}

fn descriptor() -> Arc<StateDescriptor<Light>> {
    static DESCRIPTOR: OnceLock<Arc<StateDescriptor<Light>>> = OnceLock::new();
    Arc::clone(DESCRIPTOR.get_or_init(|| {
        let descriptor = StateDescriptor::builder()
            .initial(Light::Off)
            .delegate::<Switch>()
            .build()
            .expect("light switch descriptor is valid");
        Arc::new(descriptor)
    }))
}

impl Stateful for Switch {
    type State = Light;

    fn state_machine(&self) -> &StateMachine<Light> {
        &self.machine
    }

    fn state_machine_mut(&mut self) -> &mut StateMachine<Light> {
        &mut self.machine
    }

    fn state_set(&mut self, instance: &Arc<StateInstance<Light>>) {
        self.persist_state(instance);
    }
}

impl Persistent for Switch {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn from_record(record: Record) -> Self {
        let label = record.read_str("label").unwrap_or("switch").to_string();
        Self {
            label,
            machine: StateMachine::new(descriptor()),
            record,
        }
    }
}

delegate_handlers! {
    trait SwitchHandlers for Switch {
        fn flip(&mut self) -> &'static str;
        fn watts(&mut self) -> u32;
    }
}

fn main() {
    println!("=== Light Switch Example ===\n");

    let mut repository = MemoryRepository::new(SnapshotFormat::Json);
    let mut switch = Switch::load(Record::with_attributes([("label", "hallway")]));

    println!("Forwarded handlers: {:?}", descriptor().handler_names());
    println!("Stored state: {:?}\n", switch.state_token());

    for _ in 0..3 {
        println!("{}", switch.flip());
        println!("  drawing {} W", switch.watts());
    }

    let id = match repository.save(switch.record()) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Failed to save switch: {e}");
            return;
        }
    };
    println!("\nSaved record {id}");

    match repository.find::<Switch>(id) {
        Ok(mut reloaded) => {
            println!("Reloaded state: {:?}", reloaded.current_definition());
            println!("{}", reloaded.flip());
        }
        Err(e) => eprintln!("Failed to reload switch: {e}"),
    }

    println!("\n=== Example Complete ===");
}
