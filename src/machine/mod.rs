//! Machine definitions and the per-instance transition engine.
//!
//! A [`MachineDefinition`] is built once per host type and shared through
//! an `Arc`. Each host instance owns a [`Machine`], which holds the current
//! state and resolves events against the shared definition:
//!
//! 1. transitions of the event are scanned in declaration order;
//! 2. those leaving the current state are candidates;
//! 3. the first candidate whose guards all pass is taken;
//! 4. if none passes the event fails and the state is unchanged.

mod definition;
mod engine;
mod error;
mod stateful;
mod transition;

pub use definition::{EventDecl, MachineDefinition};
pub use engine::{Machine, DEFAULT_HISTORY_LIMIT};
pub use error::{DefinitionViolation, MachineError};
pub use stateful::Stateful;
pub use transition::Transition;
