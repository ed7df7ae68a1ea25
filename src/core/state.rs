//! State identifiers and their declared options.
//!
//! A state is any identifier implementing [`State`]. Plain enums get an
//! implementation from [`state_enum!`](crate::state_enum), and `String`
//! implements it for machines keyed by name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied into history records
/// - `PartialEq`: membership checks against declared states and `from` sets
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: machines can be described as data
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum JobState {
///     Waiting,
///     Executing,
///     Terminated,
/// }
///
/// impl State for JobState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Waiting => "Waiting",
///             Self::Executing => "Executing",
///             Self::Terminated => "Terminated",
///         }
///     }
/// }
///
/// assert_eq!(JobState::Executing.name(), "Executing");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Options attached to a state declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateOptions {
    /// Whether instances start in this state.
    #[serde(default)]
    pub initial: bool,

    /// Free-form metadata carried alongside the state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl StateOptions {
    /// Options for the initial state.
    pub fn initial() -> Self {
        Self {
            initial: true,
            ..Self::default()
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A declared state together with its options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDecl<S: State> {
    pub id: S,
    #[serde(flatten)]
    pub options: StateOptions,
}

impl<S: State> StateDecl<S> {
    pub fn new(id: S, options: StateOptions) -> Self {
        Self { id, options }
    }

    pub fn is_initial(&self) -> bool {
        self.options.initial
    }

    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.options.metadata.get(key)
    }
}
