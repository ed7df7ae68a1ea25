//! Per-instance transition engine.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::definition::MachineDefinition;
use crate::machine::error::MachineError;
use crate::machine::transition::Transition;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Number of state changes an instance remembers unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A running machine: the shared definition plus this instance's current
/// state.
///
/// The current state is set to the definition's initial state when the
/// machine is created and afterwards only changes through
/// [`set_current_state`](Self::set_current_state) or
/// [`fire`](Self::fire). Both take `&mut self`, so a single instance is
/// driven by one caller at a time.
pub struct Machine<S: State, E: Event, H> {
    definition: Arc<MachineDefinition<S, E, H>>,
    current: S,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event, H> Machine<S, E, H> {
    /// Create a machine in the definition's initial state.
    pub fn new(definition: Arc<MachineDefinition<S, E, H>>) -> Result<Self, MachineError> {
        Self::with_history_limit(definition, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a machine that keeps at most `limit` history records.
    pub fn with_history_limit(
        definition: Arc<MachineDefinition<S, E, H>>,
        limit: usize,
    ) -> Result<Self, MachineError> {
        let current = definition.initial_state()?.clone();
        Ok(Self {
            definition,
            current,
            history: StateHistory::bounded(limit),
        })
    }

    pub fn definition(&self) -> &Arc<MachineDefinition<S, E, H>> {
        &self.definition
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.definition.states()
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Whether no declared transition leaves the current state.
    pub fn is_terminal(&self) -> bool {
        self.definition.is_terminal(&self.current)
    }

    /// Move directly to `state`, bypassing events and guards.
    ///
    /// Fails with [`MachineError::UndefinedState`] when `state` is not
    /// declared; the current state is then left as it was.
    pub fn set_current_state(&mut self, state: S) -> Result<&S, MachineError> {
        if !self.definition.is_declared(&state) {
            return Err(MachineError::UndefinedState {
                state: state.name().to_string(),
            });
        }

        Ok(self.apply(None, state))
    }

    /// Find the transition `event` would take from the current state.
    ///
    /// Transitions are scanned in declaration order. The first one that
    /// leaves the current state and whose guards all pass on `host` is
    /// selected; a transition whose guards fail is skipped and the scan
    /// continues. Nothing is mutated.
    pub fn resolve(&self, event: &E, host: &H) -> Result<&Transition<S, H>, MachineError> {
        let transitions = self.definition.event(event)?;

        for transition in transitions.iter().filter(|t| t.leaves(&self.current)) {
            match transition.blocking_guard(host) {
                None => return Ok(transition),
                Some(guard) => tracing::trace!(
                    event = event.name(),
                    from = self.current.name(),
                    to = transition.to.name(),
                    guard,
                    "guard rejected candidate transition"
                ),
            }
        }

        Err(MachineError::InvalidTransition {
            event: event.name().to_string(),
            from: self.current.name().to_string(),
        })
    }

    /// Fire `event`, advancing at most one edge.
    ///
    /// Returns the new current state, or [`MachineError::UndefinedEvent`] /
    /// [`MachineError::InvalidTransition`] with the state unchanged.
    pub fn fire(&mut self, event: &E, host: &H) -> Result<&S, MachineError> {
        let to = self.resolve(event, host)?.to.clone();
        Ok(self.apply(Some(event.clone()), to))
    }

    /// Whether firing `event` now would succeed.
    pub fn can_fire(&self, event: &E, host: &H) -> Result<bool, MachineError> {
        match self.resolve(event, host) {
            Ok(_) => Ok(true),
            Err(MachineError::InvalidTransition { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Declared events that could fire from the current state, in
    /// declaration order.
    pub fn permitted_events(&self, host: &H) -> Vec<&E> {
        self.definition
            .events
            .iter()
            .filter(|decl| {
                decl.transitions
                    .iter()
                    .any(|transition| transition.can_execute(&self.current, host))
            })
            .map(|decl| &decl.id)
            .collect()
    }

    pub(crate) fn apply(&mut self, event: Option<E>, to: S) -> &S {
        let from = std::mem::replace(&mut self.current, to);

        match &event {
            Some(event) => tracing::debug!(
                event = event.name(),
                from = from.name(),
                to = self.current.name(),
                "transition applied"
            ),
            None => tracing::debug!(
                from = from.name(),
                to = self.current.name(),
                "state assigned"
            ),
        }

        self.history.push(StateTransition {
            from,
            to: self.current.clone(),
            event,
            timestamp: Utc::now(),
        });

        &self.current
    }
}

impl<S: State, E: Event, H> Clone for Machine<S, E, H> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            current: self.current.clone(),
            history: self.history.clone(),
        }
    }
}

impl<S: State, E: Event, H> fmt::Debug for Machine<S, E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}
