//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State, StateDecl, StateOptions};
use crate::machine::{EventDecl, MachineDefinition};
use stillwater::validation::Validation;

/// Builder for constructing machine definitions with a fluent API.
///
/// By default the builder is permissive: transitions may name states that
/// were never declared, and a definition without an initial state builds
/// (the error surfaces when an instance is created). Call
/// [`strict`](Self::strict) to reject such definitions up front.
///
/// Declaring a state or an event twice replaces the earlier declaration
/// but keeps its original position.
pub struct DefinitionBuilder<S: State, E: Event, H> {
    states: Vec<StateDecl<S>>,
    events: Vec<(E, Vec<TransitionBuilder<S, H>>)>,
    strict: bool,
}

impl<S: State, E: Event, H> DefinitionBuilder<S, E, H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            events: Vec::new(),
            strict: false,
        }
    }

    /// Declare a state.
    pub fn state(mut self, id: impl Into<S>, options: StateOptions) -> Self {
        let id = id.into();
        match self.states.iter_mut().find(|decl| decl.id == id) {
            Some(existing) => existing.options = options,
            None => self.states.push(StateDecl::new(id, options)),
        }
        self
    }

    /// Declare the initial state.
    pub fn initial(self, id: impl Into<S>) -> Self {
        self.state(id, StateOptions::initial())
    }

    /// Declare an event with its transitions, in priority order.
    pub fn event<I>(mut self, id: impl Into<E>, transitions: I) -> Self
    where
        I: IntoIterator<Item = TransitionBuilder<S, H>>,
    {
        let id = id.into();
        let transitions: Vec<_> = transitions.into_iter().collect();
        match self.events.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, existing)) => *existing = transitions,
            None => self.events.push((id, transitions)),
        }
        self
    }

    /// Validate initial state and transition endpoints when building.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the definition.
    pub fn build(self) -> Result<MachineDefinition<S, E, H>, BuildError> {
        let events = self
            .events
            .into_iter()
            .map(|(id, builders)| -> Result<EventDecl<S, E, H>, BuildError> {
                let transitions = builders
                    .into_iter()
                    .map(TransitionBuilder::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(EventDecl { id, transitions })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        let definition = MachineDefinition::new(self.states, events);

        if self.strict {
            if let Validation::Failure(violations) = definition.validate() {
                return Err(BuildError::InvalidDefinition(
                    violations.iter().cloned().collect(),
                ));
            }
        }

        tracing::debug!(
            states = definition.states.len(),
            events = definition.events.len(),
            strict = self.strict,
            "machine definition built"
        );

        Ok(definition)
    }
}

impl<S: State, E: Event, H> Default for DefinitionBuilder<S, E, H> {
    fn default() -> Self {
        Self::new()
    }
}
