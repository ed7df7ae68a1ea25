//! Periodic Job
//!
//! A job that alternates between waiting and executing until a failure
//! terminates it.
//!
//! Key concepts:
//! - Enum identifiers via `state_enum!` / `event_enum!`
//! - One shared definition, many independent instances
//! - The host drives its machine through `Stateful`
//!
//! Run with: cargo run --example periodic_job

use std::sync::{Arc, OnceLock};
use switchyard::builder::{simple_transition, DefinitionBuilder, TransitionBuilder};
use switchyard::core::StateOptions;
use switchyard::machine::{Machine, MachineDefinition, MachineError, Stateful};
use switchyard::{event_enum, state_enum};

state_enum! {
    enum JobState {
        Waiting,
        Executing,
        Terminated,
    }
}

event_enum! {
    enum JobEvent {
        WorkSucceeded,
        WorkFailed,
    }
}

type JobDefinition = MachineDefinition<JobState, JobEvent, PeriodicJob>;

fn definition() -> Arc<JobDefinition> {
    static DEFINITION: OnceLock<Arc<JobDefinition>> = OnceLock::new();
    DEFINITION
        .get_or_init(|| {
            let definition = DefinitionBuilder::new()
                .initial(JobState::Waiting)
                .state(JobState::Executing, StateOptions::default())
                .state(JobState::Terminated, StateOptions::default())
                .event(
                    JobEvent::WorkSucceeded,
                    vec![
                        simple_transition(JobState::Executing, JobState::Waiting),
                        simple_transition(JobState::Waiting, JobState::Executing),
                    ],
                )
                .event(
                    JobEvent::WorkFailed,
                    vec![TransitionBuilder::new()
                        .from_any([JobState::Waiting, JobState::Executing])
                        .to(JobState::Terminated)],
                )
                .strict()
                .build()
                .expect("periodic job definition is well formed");
            Arc::new(definition)
        })
        .clone()
}

struct PeriodicJob {
    name: &'static str,
    machine: Machine<JobState, JobEvent, PeriodicJob>,
}

impl PeriodicJob {
    fn new(name: &'static str) -> Result<Self, MachineError> {
        Ok(Self {
            name,
            machine: Machine::new(definition())?,
        })
    }

    fn work(&mut self) -> Result<JobState, MachineError> {
        let next = *self.fire(&JobEvent::WorkSucceeded)?;
        println!("  {} -> {:?}", self.name, next);
        Ok(next)
    }
}

impl Stateful for PeriodicJob {
    type State = JobState;
    type Event = JobEvent;

    fn machine(&self) -> &Machine<JobState, JobEvent, Self> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut Machine<JobState, JobEvent, Self> {
        &mut self.machine
    }
}

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Periodic Job Example ===\n");

    let mut nightly = PeriodicJob::new("nightly")?;
    let mut hourly = PeriodicJob::new("hourly")?;

    println!("Declared states: {:?}", nightly.states());

    for _ in 0..3 {
        nightly.work()?;
    }
    hourly.work()?;

    println!("\nnightly fails:");
    nightly.fire(&JobEvent::WorkFailed)?;
    println!("  nightly -> {:?}", nightly.current_state());

    match nightly.work() {
        Err(err) => println!("  nightly refuses more work: {err}"),
        Ok(state) => println!("  unexpected transition to {state:?}"),
    }

    println!("\nhourly is unaffected: {:?}", hourly.current_state());
    println!("\n=== Example Complete ===");
    Ok(())
}
