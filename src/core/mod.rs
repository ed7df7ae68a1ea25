//! Core identifier and predicate types.
//!
//! This module contains the building blocks shared by definitions and
//! running machines:
//! - State and event identifiers via the `State` and `Event` traits
//! - Named guard predicates over the host
//! - The per-instance change history

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::{Guard, GuardRegistry};
pub use history::{StateHistory, StateTransition};
pub use state::{State, StateDecl, StateOptions};
