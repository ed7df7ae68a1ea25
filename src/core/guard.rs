//! Guard predicates for controlling state transitions.
//!
//! A guard is a named, zero-argument predicate evaluated against the host
//! that owns the machine. A transition may carry several guards; it is only
//! taken when every one of them passes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Named predicate over a host of type `H`.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// struct TransmissionJob {
///     hold: bool,
/// }
///
/// let hold = Guard::new("hold?", |job: &TransmissionJob| job.hold);
///
/// assert_eq!(hold.name(), "hold?");
/// assert!(hold.check(&TransmissionJob { hold: true }));
/// assert!(!hold.check(&TransmissionJob { hold: false }));
/// ```
pub struct Guard<H> {
    name: String,
    predicate: Arc<dyn Fn(&H) -> bool + Send + Sync>,
}

impl<H> Guard<H> {
    /// Create a guard from a predicate on the host.
    ///
    /// The predicate must be thread-safe (Send + Sync) so that definitions
    /// holding it can be shared between threads.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        Guard {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate against the host.
    pub fn check(&self, host: &H) -> bool {
        (self.predicate)(host)
    }
}

impl<H> Clone for Guard<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<H> fmt::Debug for Guard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

/// Lookup from guard name to predicate.
///
/// Used when a machine is described as data and its guards are referenced
/// by name; every name must be registered before the description is built.
pub struct GuardRegistry<H> {
    guards: HashMap<String, Guard<H>>,
}

impl<H> GuardRegistry<H> {
    pub fn new() -> Self {
        Self {
            guards: HashMap::new(),
        }
    }

    /// Register a predicate under `name`, replacing any previous one.
    pub fn register<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        self.insert(Guard::new(name, predicate));
        self
    }

    pub fn insert(&mut self, guard: Guard<H>) {
        self.guards.insert(guard.name.clone(), guard);
    }

    pub fn get(&self, name: &str) -> Option<&Guard<H>> {
        self.guards.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.guards.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl<H> Default for GuardRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for GuardRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.guards.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("GuardRegistry")
            .field("guards", &names)
            .finish()
    }
}
