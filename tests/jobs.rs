//! Host types driving their own machines through `Stateful`.

mod common;

use common::setup_tracing;
use std::sync::{Arc, OnceLock};
use switchyard::builder::{guarded_transition, simple_transition, DefinitionBuilder};
use switchyard::core::{Guard, StateOptions};
use switchyard::machine::{Machine, MachineDefinition, MachineError, Stateful};
use switchyard::{event_enum, state_enum};

state_enum! {
    enum Periodic {
        Waiting,
        Executing,
        Terminated,
    }
}

state_enum! {
    enum Transmission {
        Transmitting,
        WaitingConfirmation,
        Terminated,
    }
}

event_enum! {
    enum Work {
        WorkSucceeded,
        WorkFailed,
    }
}

/// Alternates between waiting and executing until it fails.
struct PeriodicJob {
    machine: Machine<Periodic, Work, PeriodicJob>,
}

impl PeriodicJob {
    fn definition() -> Arc<MachineDefinition<Periodic, Work, PeriodicJob>> {
        static DEFINITION: OnceLock<Arc<MachineDefinition<Periodic, Work, PeriodicJob>>> =
            OnceLock::new();
        DEFINITION
            .get_or_init(|| {
                let definition = DefinitionBuilder::new()
                    .initial(Periodic::Waiting)
                    .state(Periodic::Executing, StateOptions::default())
                    .state(Periodic::Terminated, StateOptions::default())
                    .event(
                        Work::WorkSucceeded,
                        vec![
                            simple_transition(Periodic::Executing, Periodic::Waiting),
                            simple_transition(Periodic::Waiting, Periodic::Executing),
                        ],
                    )
                    .event(
                        Work::WorkFailed,
                        vec![switchyard::TransitionBuilder::new()
                            .from_any([Periodic::Waiting, Periodic::Executing])
                            .to(Periodic::Terminated)],
                    )
                    .strict()
                    .build()
                    .expect("periodic job definition is well formed");
                Arc::new(definition)
            })
            .clone()
    }

    fn new() -> Self {
        Self {
            machine: Machine::new(Self::definition()).expect("periodic job has an initial state"),
        }
    }

    fn work(&mut self) -> Result<&Periodic, MachineError> {
        self.fire(&Work::WorkSucceeded)
    }
}

impl Stateful for PeriodicJob {
    type State = Periodic;
    type Event = Work;

    fn machine(&self) -> &Machine<Periodic, Work, Self> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut Machine<Periodic, Work, Self> {
        &mut self.machine
    }
}

/// Transmits, then waits for confirmation only while held; a failed
/// confirmation falls back to `WorkFailed`.
struct TransmissionJob {
    hold: bool,
    confirmed: bool,
    machine: Machine<Transmission, Work, TransmissionJob>,
}

impl TransmissionJob {
    fn definition() -> Arc<MachineDefinition<Transmission, Work, TransmissionJob>> {
        static DEFINITION: OnceLock<Arc<MachineDefinition<Transmission, Work, TransmissionJob>>> =
            OnceLock::new();
        DEFINITION
            .get_or_init(|| {
                let definition = DefinitionBuilder::new()
                    .initial(Transmission::Transmitting)
                    .state(Transmission::WaitingConfirmation, StateOptions::default())
                    .state(Transmission::Terminated, StateOptions::default())
                    .event(
                        Work::WorkSucceeded,
                        vec![
                            simple_transition(
                                Transmission::WaitingConfirmation,
                                Transmission::Transmitting,
                            ),
                            guarded_transition(
                                Transmission::Transmitting,
                                Transmission::WaitingConfirmation,
                                Guard::new("hold?", |job: &TransmissionJob| job.hold),
                            ),
                        ],
                    )
                    .event(
                        Work::WorkFailed,
                        vec![switchyard::TransitionBuilder::new()
                            .from_any([
                                Transmission::Transmitting,
                                Transmission::WaitingConfirmation,
                            ])
                            .to(Transmission::Terminated)],
                    )
                    .build()
                    .expect("transmission job definition is well formed");
                Arc::new(definition)
            })
            .clone()
    }

    fn new(hold: bool, confirmed: bool) -> Self {
        Self {
            hold,
            confirmed,
            machine: Machine::new(Self::definition())
                .expect("transmission job has an initial state"),
        }
    }

    fn work(&mut self) -> Result<&Transmission, MachineError> {
        let event = match self.current_state() {
            Transmission::WaitingConfirmation if !self.confirmed => Work::WorkFailed,
            _ => Work::WorkSucceeded,
        };
        self.fire(&event)
    }
}

impl Stateful for TransmissionJob {
    type State = Transmission;
    type Event = Work;

    fn machine(&self) -> &Machine<Transmission, Work, Self> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut Machine<Transmission, Work, Self> {
        &mut self.machine
    }
}

#[test]
fn periodic_job_alternates_until_failure() {
    setup_tracing();
    let mut job = PeriodicJob::new();

    assert_eq!(job.states(), vec![&Periodic::Waiting, &Periodic::Executing, &Periodic::Terminated]);
    assert_eq!(job.current_state(), &Periodic::Waiting);
    assert_eq!(job.work(), Ok(&Periodic::Executing));
    assert_eq!(job.work(), Ok(&Periodic::Waiting));
    assert_eq!(job.fire(&Work::WorkFailed), Ok(&Periodic::Terminated));
    assert_eq!(
        job.work(),
        Err(MachineError::InvalidTransition {
            event: "WorkSucceeded".to_string(),
            from: "Terminated".to_string(),
        })
    );
}

#[test]
fn periodic_jobs_do_not_share_state() {
    setup_tracing();
    let mut first = PeriodicJob::new();
    let second = PeriodicJob::new();

    first.work().unwrap();

    assert_eq!(first.current_state(), &Periodic::Executing);
    assert_eq!(second.current_state(), &Periodic::Waiting);
    assert!(Arc::ptr_eq(first.machine().definition(), second.machine().definition()));
}

#[test]
fn held_transmission_waits_for_confirmation() {
    setup_tracing();
    let mut job = TransmissionJob::new(true, true);

    assert_eq!(job.work(), Ok(&Transmission::WaitingConfirmation));
    assert_eq!(job.work(), Ok(&Transmission::Transmitting));
}

#[test]
fn released_transmission_cannot_advance() {
    setup_tracing();
    let mut job = TransmissionJob::new(false, true);

    assert!(matches!(
        job.work(),
        Err(MachineError::InvalidTransition { .. })
    ));
    assert_eq!(job.current_state(), &Transmission::Transmitting);
    assert_eq!(job.permitted_events(), vec![&Work::WorkFailed]);
}

#[test]
fn unconfirmed_transmission_falls_back_to_failure() {
    setup_tracing();
    let mut job = TransmissionJob::new(true, false);

    job.work().unwrap();
    assert_eq!(job.work(), Ok(&Transmission::Terminated));
    assert!(job.machine().is_terminal());
}

#[test]
fn history_tracks_host_driven_changes() {
    setup_tracing();
    let mut job = TransmissionJob::new(true, false);

    job.work().unwrap();
    job.work().unwrap();

    let history = job.machine().history();
    let events: Vec<Option<Work>> = history.transitions().iter().map(|t| t.event).collect();
    assert_eq!(events, vec![Some(Work::WorkSucceeded), Some(Work::WorkFailed)]);
    assert_eq!(
        history.get_path(),
        vec![
            &Transmission::Transmitting,
            &Transmission::WaitingConfirmation,
            &Transmission::Terminated,
        ]
    );
}
