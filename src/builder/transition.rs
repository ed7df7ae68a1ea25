//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, H> {
    from: Vec<S>,
    to: Option<S>,
    guards: Vec<Guard<H>>,
}

impl<S: State, H> TransitionBuilder<S, H> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: Vec::new(),
            to: None,
            guards: Vec::new(),
        }
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: impl Into<S>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states at once.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<S>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard (optional). Guards combine with logical AND.
    pub fn guard(mut self, guard: Guard<H>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(name, predicate))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, H>, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from: self.from,
            to,
            guards: self.guards,
        })
    }
}

impl<S: State, H> Default for TransitionBuilder<S, H> {
    fn default() -> Self {
        Self::new()
    }
}
