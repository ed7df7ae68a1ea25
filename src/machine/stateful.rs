//! Host types that embed their own machine.

use crate::core::{Event, State};
use crate::machine::engine::Machine;
use crate::machine::error::MachineError;

/// Implemented by host types that carry a [`Machine`] whose guards are
/// predicates on the host itself.
///
/// Only the two accessors are required; every operation is provided. Firing
/// resolves the transition while the host is borrowed immutably (guards read
/// it), then commits the new state through [`machine_mut`](Self::machine_mut).
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, OnceLock};
/// use switchyard::builder::{DefinitionBuilder, TransitionBuilder};
/// use switchyard::core::StateOptions;
/// use switchyard::machine::{Machine, MachineDefinition, Stateful};
///
/// struct Job {
///     machine: Machine<String, String, Job>,
/// }
///
/// fn definition() -> Arc<MachineDefinition<String, String, Job>> {
///     static DEFINITION: OnceLock<Arc<MachineDefinition<String, String, Job>>> = OnceLock::new();
///     DEFINITION
///         .get_or_init(|| {
///             let definition = DefinitionBuilder::new()
///                 .initial("creating")
///                 .state("running", StateOptions::default())
///                 .event(
///                     "work_succeeded",
///                     vec![TransitionBuilder::new().from("creating").to("running")],
///                 )
///                 .build()
///                 .expect("job definition is well formed");
///             Arc::new(definition)
///         })
///         .clone()
/// }
///
/// impl Stateful for Job {
///     type State = String;
///     type Event = String;
///
///     fn machine(&self) -> &Machine<String, String, Job> {
///         &self.machine
///     }
///
///     fn machine_mut(&mut self) -> &mut Machine<String, String, Job> {
///         &mut self.machine
///     }
/// }
///
/// let mut job = Job { machine: Machine::new(definition()).unwrap() };
/// assert_eq!(job.fire(&"work_succeeded".to_string()).unwrap(), "running");
/// ```
pub trait Stateful: Sized {
    type State: State;
    type Event: Event;

    fn machine(&self) -> &Machine<Self::State, Self::Event, Self>;

    fn machine_mut(&mut self) -> &mut Machine<Self::State, Self::Event, Self>;

    fn current_state(&self) -> &Self::State {
        self.machine().current_state()
    }

    fn states(&self) -> Vec<&Self::State> {
        self.machine().states().collect()
    }

    fn set_current_state(&mut self, state: Self::State) -> Result<&Self::State, MachineError> {
        self.machine_mut().set_current_state(state)
    }

    fn fire(&mut self, event: &Self::Event) -> Result<&Self::State, MachineError> {
        let to = self.machine().resolve(event, self)?.to.clone();
        Ok(self.machine_mut().apply(Some(event.clone()), to))
    }

    fn can_fire(&self, event: &Self::Event) -> Result<bool, MachineError> {
        self.machine().can_fire(event, self)
    }

    fn permitted_events(&self) -> Vec<&Self::Event> {
        self.machine().permitted_events(self)
    }
}
