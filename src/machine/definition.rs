//! Immutable description of a machine's states and events.

use crate::core::{Event, State, StateDecl};
use crate::machine::error::{DefinitionViolation, MachineError};
use crate::machine::transition::Transition;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An event together with its transitions, in declaration order.
pub struct EventDecl<S: State, E: Event, H> {
    pub id: E,
    pub transitions: Vec<Transition<S, H>>,
}

impl<S: State, E: Event, H> Clone for EventDecl<S, E, H> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: State, E: Event, H> fmt::Debug for EventDecl<S, E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDecl")
            .field("id", &self.id)
            .field("transitions", &self.transitions)
            .finish()
    }
}

/// The compiled description of a machine, shared by every instance of a
/// host type.
///
/// Built with [`DefinitionBuilder`](crate::builder::DefinitionBuilder) or
/// from a [`MachineConfig`](crate::builder::MachineConfig). Once built it is
/// never mutated; wrap it in an `Arc` to share it.
pub struct MachineDefinition<S: State, E: Event, H> {
    pub(crate) states: Vec<StateDecl<S>>,
    pub(crate) events: Vec<EventDecl<S, E, H>>,
}

impl<S: State, E: Event, H> MachineDefinition<S, E, H> {
    pub(crate) fn new(states: Vec<StateDecl<S>>, events: Vec<EventDecl<S, E, H>>) -> Self {
        Self { states, events }
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter().map(|decl| &decl.id)
    }

    /// The declaration (options and metadata) for `id`.
    pub fn state(&self, id: &S) -> Option<&StateDecl<S>> {
        self.states.iter().find(|decl| decl.id == *id)
    }

    pub fn is_declared(&self, id: &S) -> bool {
        self.state(id).is_some()
    }

    /// The state instances start in.
    ///
    /// When several states are marked initial the first declared one wins.
    pub fn initial_state(&self) -> Result<&S, MachineError> {
        self.states
            .iter()
            .find(|decl| decl.is_initial())
            .map(|decl| &decl.id)
            .ok_or(MachineError::NoInitialState)
    }

    /// Declared events, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> + '_ {
        self.events.iter().map(|decl| &decl.id)
    }

    /// Transitions declared for `id`, in declaration order.
    pub fn event(&self, id: &E) -> Result<&[Transition<S, H>], MachineError> {
        self.events
            .iter()
            .find(|decl| decl.id == *id)
            .map(|decl| decl.transitions.as_slice())
            .ok_or_else(|| MachineError::UndefinedEvent {
                event: id.name().to_string(),
            })
    }

    /// Whether no declared transition leaves `state`.
    pub fn is_terminal(&self, state: &S) -> bool {
        !self
            .events
            .iter()
            .flat_map(|decl| decl.transitions.iter())
            .any(|transition| transition.leaves(state))
    }

    /// Check the definition for structural problems, collecting all of them.
    ///
    /// Reports a missing or ambiguous initial state and every transition
    /// endpoint that names an undeclared state.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionViolation>>> = Vec::new();

        let initial: Vec<String> = self
            .states
            .iter()
            .filter(|decl| decl.is_initial())
            .map(|decl| decl.id.name().to_string())
            .collect();
        checks.push(match initial.len() {
            0 => Validation::fail(DefinitionViolation::NoInitialState),
            1 => Validation::success(()),
            _ => Validation::fail(DefinitionViolation::MultipleInitialStates { states: initial }),
        });

        for decl in &self.events {
            for transition in &decl.transitions {
                for source in &transition.from {
                    if !self.is_declared(source) {
                        checks.push(Validation::fail(DefinitionViolation::UndeclaredSource {
                            event: decl.id.name().to_string(),
                            state: source.name().to_string(),
                        }));
                    }
                }
                if !self.is_declared(&transition.to) {
                    checks.push(Validation::fail(DefinitionViolation::UndeclaredTarget {
                        event: decl.id.name().to_string(),
                        state: transition.to.name().to_string(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: State, E: Event, H> fmt::Debug for MachineDefinition<S, E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("states", &self.states)
            .field("events", &self.events)
            .finish()
    }
}
