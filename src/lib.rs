//! Switchyard: a small declarative finite state machine.
//!
//! A host type declares its states (one of them initial) and its events.
//! Each event carries an ordered list of transitions; each transition
//! leaves one or more states for a single target and may be gated by named
//! guard predicates on the host.
//!
//! # Core Concepts
//!
//! - **Definition**: the immutable, shared description of states and events
//! - **Machine**: one host instance's current state, driven by events
//! - **Guards**: predicates on the host deciding whether a transition fires
//! - **First match**: the first transition leaving the current state whose
//!   guards all pass is taken; a failing guard moves on to the next one
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use switchyard::builder::{DefinitionBuilder, TransitionBuilder};
//! use switchyard::core::StateOptions;
//! use switchyard::machine::{Machine, MachineError};
//!
//! struct Job;
//!
//! let definition = DefinitionBuilder::<String, String, Job>::new()
//!     .initial("creating")
//!     .state("running", StateOptions::default())
//!     .state("finished", StateOptions::default())
//!     .event(
//!         "work_succeeded",
//!         vec![
//!             TransitionBuilder::new().from("creating").to("running"),
//!             TransitionBuilder::new().from("running").to("finished"),
//!         ],
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(Arc::new(definition)).unwrap();
//! let event = "work_succeeded".to_string();
//!
//! assert_eq!(machine.fire(&event, &Job).unwrap(), "running");
//! assert_eq!(machine.fire(&event, &Job).unwrap(), "finished");
//! assert!(matches!(
//!     machine.fire(&event, &Job),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, DefinitionBuilder, MachineConfig, TransitionBuilder};
pub use crate::core::{Event, Guard, GuardRegistry, State, StateHistory, StateOptions, StateTransition};
pub use crate::machine::{Machine, MachineDefinition, MachineError, Stateful};
