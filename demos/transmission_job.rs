//! Transmission Job
//!
//! A job that transmits, then waits for a confirmation. Advancing to the
//! confirmation step is gated by a `hold?` guard, and a missing
//! confirmation is handled by the host by firing a failure event instead.
//!
//! Key concepts:
//! - Guards are predicates on the host itself
//! - A failing guard makes the event fail without changing state
//! - Recovery belongs to the host, not the machine
//!
//! Run with: cargo run --example transmission_job

use std::sync::Arc;
use switchyard::builder::{guarded_transition, simple_transition, DefinitionBuilder};
use switchyard::core::{Guard, StateOptions};
use switchyard::machine::{Machine, MachineDefinition, MachineError, Stateful};

type Definition = MachineDefinition<String, String, TransmissionJob>;

fn build_definition() -> Result<Definition, switchyard::BuildError> {
    DefinitionBuilder::<String, String, TransmissionJob>::new()
        .initial("transmitting")
        .state("waiting_confirmation", StateOptions::default())
        .state(
            "terminated",
            StateOptions::default().with_metadata("final", true),
        )
        .event(
            "work_succeeded",
            vec![
                simple_transition("waiting_confirmation", "transmitting"),
                guarded_transition(
                    "transmitting",
                    "waiting_confirmation",
                    Guard::new("hold?", |job: &TransmissionJob| job.hold),
                ),
            ],
        )
        .event(
            "work_failed",
            vec![switchyard::TransitionBuilder::new()
                .from_any(["transmitting", "waiting_confirmation"])
                .to("terminated")],
        )
        .build()
}

struct TransmissionJob {
    hold: bool,
    confirmations: Vec<bool>,
    machine: Machine<String, String, TransmissionJob>,
}

impl TransmissionJob {
    fn new(
        definition: Arc<Definition>,
        hold: bool,
        confirmations: Vec<bool>,
    ) -> Result<Self, MachineError> {
        Ok(Self {
            hold,
            confirmations,
            machine: Machine::new(definition)?,
        })
    }

    fn work(&mut self) -> Result<String, MachineError> {
        let event = if self.current_state() == "waiting_confirmation" && !self.confirm() {
            "work_failed"
        } else {
            "work_succeeded"
        };
        Ok(self.fire(&event.to_string())?.clone())
    }

    fn confirm(&mut self) -> bool {
        if self.confirmations.is_empty() {
            false
        } else {
            self.confirmations.remove(0)
        }
    }
}

impl Stateful for TransmissionJob {
    type State = String;
    type Event = String;

    fn machine(&self) -> &Machine<String, String, Self> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut Machine<String, String, Self> {
        &mut self.machine
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Transmission Job Example ===\n");

    let definition = Arc::new(build_definition()?);

    println!("Held job, one confirmation then silence:");
    let mut held = TransmissionJob::new(Arc::clone(&definition), true, vec![true])?;
    while !held.machine().is_terminal() {
        let state = held.work()?;
        println!("  -> {state}");
    }

    println!("\nReleased job:");
    let mut released = TransmissionJob::new(definition, false, Vec::new())?;
    println!("  permitted events: {:?}", released.permitted_events());
    if let Err(err) = released.work() {
        println!("  {err}");
    }
    println!("  still {}", released.current_state());

    println!("\nHistory of the held job:");
    for change in held.machine().history().transitions() {
        println!(
            "  {:<22} {} -> {}",
            change.event.as_deref().unwrap_or("(assigned)"),
            change.from,
            change.to
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
