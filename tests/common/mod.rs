//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use switchyard::builder::{simple_transition, DefinitionBuilder};
use switchyard::core::StateOptions;
use switchyard::machine::{Machine, MachineDefinition};

/// Setup tracing for tests
pub fn setup_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn s(name: &str) -> String {
    name.to_string()
}

/// Host without guards.
pub struct Plain;

pub type NamedMachine = Machine<String, String, Plain>;

/// creating(initial) -> running -> finished, all on `work_succeeded`.
pub fn creating_running_finished() -> Arc<MachineDefinition<String, String, Plain>> {
    let definition = DefinitionBuilder::<String, String, Plain>::new()
        .initial("creating")
        .state("running", StateOptions::default())
        .state("finished", StateOptions::default())
        .event(
            "work_succeeded",
            vec![
                simple_transition("creating", "running"),
                simple_transition("running", "finished"),
            ],
        )
        .build()
        .expect("fixture definition builds");
    Arc::new(definition)
}

/// waiting(initial) <-> executing on `work_succeeded`, both -> terminated on
/// `work_failed`.
pub fn waiting_executing_terminated() -> Arc<MachineDefinition<String, String, Plain>> {
    let definition = DefinitionBuilder::<String, String, Plain>::new()
        .initial("waiting")
        .state("executing", StateOptions::default())
        .state("terminated", StateOptions::default())
        .event(
            "work_succeeded",
            vec![
                simple_transition("executing", "waiting"),
                simple_transition("waiting", "executing"),
            ],
        )
        .event(
            "work_failed",
            vec![switchyard::TransitionBuilder::new()
                .from_any(["waiting", "executing"])
                .to("terminated")],
        )
        .build()
        .expect("fixture definition builds");
    Arc::new(definition)
}
