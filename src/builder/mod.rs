//! Builder API for declaring machines.
//!
//! Definitions can be declared with the fluent [`DefinitionBuilder`], or as
//! data through [`MachineConfig`]. The `state_enum!` and `event_enum!`
//! macros give plain enums the identifier traits.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use config::{EventConfig, MachineConfig, OneOrMany, StateConfig, TransitionConfig};
pub use error::BuildError;
pub use machine::DefinitionBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, State};

/// Start an unconditional transition.
///
/// # Example
///
/// ```
/// use switchyard::builder::{simple_transition, TransitionBuilder};
///
/// struct Job;
///
/// let step: TransitionBuilder<String, Job> = simple_transition("creating", "running");
/// assert!(step.build().is_ok());
/// ```
pub fn simple_transition<S, H>(from: impl Into<S>, to: impl Into<S>) -> TransitionBuilder<S, H>
where
    S: State,
{
    TransitionBuilder::new().from(from).to(to)
}

/// Start a transition gated by `guard`.
///
/// # Example
///
/// ```
/// use switchyard::builder::guarded_transition;
/// use switchyard::core::Guard;
///
/// struct Job {
///     hold: bool,
/// }
///
/// let transition = guarded_transition::<String, Job>(
///     "transmitting",
///     "waiting_confirmation",
///     Guard::new("hold?", |job: &Job| job.hold),
/// )
/// .build()
/// .unwrap();
///
/// assert!(transition.is_guarded());
/// ```
pub fn guarded_transition<S, H>(
    from: impl Into<S>,
    to: impl Into<S>,
    guard: Guard<H>,
) -> TransitionBuilder<S, H>
where
    S: State,
{
    simple_transition(from, to).guard(guard)
}
