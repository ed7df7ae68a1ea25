//! Transition rules declared under an event.

use crate::core::{Guard, State};
use std::fmt;

/// A single declared edge: leave any state in `from`, enter `to`, provided
/// every guard passes on the host.
pub struct Transition<S: State, H> {
    pub from: Vec<S>,
    pub to: S,
    pub guards: Vec<Guard<H>>,
}

impl<S: State, H> Transition<S, H> {
    /// Whether `current` is one of the states this transition leaves.
    pub fn leaves(&self, current: &S) -> bool {
        self.from.contains(current)
    }

    /// Whether every guard passes. An unguarded transition always passes.
    pub fn guard_passes(&self, host: &H) -> bool {
        self.guards.iter().all(|guard| guard.check(host))
    }

    /// Name of the first guard that rejects the host, if any.
    pub fn blocking_guard(&self, host: &H) -> Option<&str> {
        self.guards
            .iter()
            .find(|guard| !guard.check(host))
            .map(Guard::name)
    }

    /// Check if this transition can execute from the current state.
    pub fn can_execute(&self, current: &S, host: &H) -> bool {
        self.leaves(current) && self.guard_passes(host)
    }

    pub fn is_guarded(&self) -> bool {
        !self.guards.is_empty()
    }
}

impl<S: State, H> Clone for Transition<S, H> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guards: self.guards.clone(),
        }
    }
}

impl<S: State, H> fmt::Debug for Transition<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guards", &self.guards)
            .finish()
    }
}
