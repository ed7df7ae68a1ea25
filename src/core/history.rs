//! State change history tracking.
//!
//! Every machine instance keeps an in-memory log of the state changes it
//! applied, whether caused by firing an event or by direct assignment.
//! The log lives and dies with the instance.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateTransition;
/// use chrono::Utc;
///
/// let transition: StateTransition<String, String> = StateTransition {
///     from: "waiting".to_string(),
///     to: "executing".to_string(),
///     event: Some("work_succeeded".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_fired());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The event that caused the change; `None` for direct assignment
    pub event: Option<E>,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State, E: Event> StateTransition<S, E> {
    /// Whether this change came from firing an event.
    pub fn is_fired(&self) -> bool {
        self.event.is_some()
    }
}

/// Ordered history of state changes.
///
/// A history may be bounded; once the bound is reached the oldest record is
/// dropped for every new one.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history: StateHistory<String, String> = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: "creating".to_string(),
///     to: "running".to_string(),
///     event: Some("work_succeeded".to_string()),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec!["creating", "running"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of zero disables recording altogether.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest record when bounded.
    pub fn push(&mut self, transition: StateTransition<S, E>) {
        match self.limit {
            Some(0) => {}
            Some(limit) => {
                if self.transitions.len() >= limit {
                    let excess = self.transitions.len() + 1 - limit;
                    self.transitions.drain(..excess);
                }
                self.transitions.push(transition);
            }
            None => self.transitions.push(transition),
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first retained record, then the `to`
    /// state of each record in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
