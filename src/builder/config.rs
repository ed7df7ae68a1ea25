//! Machine descriptions as data.
//!
//! A [`MachineConfig`] describes states and events the same way the fluent
//! builder does, but as a serde value. Guards are referenced by name and
//! resolved against a [`GuardRegistry`] when the description is built.
//!
//! ```json
//! {
//!   "states": [
//!     { "name": "waiting", "initial": true },
//!     { "name": "executing" },
//!     { "name": "terminated", "metadata": { "final": true } }
//!   ],
//!   "events": [
//!     { "name": "work_succeeded", "transitions": [
//!       { "from": "executing", "to": "waiting" },
//!       { "from": "waiting", "to": "executing", "guard": ["ready?"] }
//!     ] },
//!     { "name": "work_failed", "transitions": [
//!       { "from": ["waiting", "executing"], "to": "terminated" }
//!     ] }
//!   ]
//! }
//! ```

use crate::builder::error::BuildError;
use crate::builder::machine::DefinitionBuilder;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, GuardRegistry, State, StateOptions};
use crate::machine::MachineDefinition;
use serde::{Deserialize, Serialize};

/// A single state or a list of states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<S> {
    One(S),
    Many(Vec<S>),
}

impl<S> OneOrMany<S> {
    pub fn into_vec(self) -> Vec<S> {
        match self {
            Self::One(state) => vec![state],
            Self::Many(states) => states,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateConfig<S: State> {
    pub name: S,
    #[serde(flatten)]
    pub options: StateOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionConfig<S: State> {
    pub from: OneOrMany<S>,
    pub to: S,
    /// Names of guards that must all pass.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guard: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EventConfig<S: State, E: Event> {
    pub name: E,
    #[serde(default)]
    pub transitions: Vec<TransitionConfig<S>>,
}

/// Serializable description of a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State, E: Event> {
    pub states: Vec<StateConfig<S>>,
    #[serde(default)]
    pub events: Vec<EventConfig<S, E>>,
    /// Build with [`DefinitionBuilder::strict`].
    #[serde(default)]
    pub strict: bool,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a definition, resolving guard names through `guards`.
    ///
    /// Every referenced guard must be registered, whether or not the
    /// transition using it can ever be reached.
    pub fn build<H>(
        self,
        guards: &GuardRegistry<H>,
    ) -> Result<MachineDefinition<S, E, H>, BuildError> {
        let mut builder = DefinitionBuilder::<S, E, H>::new();

        for state in self.states {
            builder = builder.state(state.name, state.options);
        }

        for event in self.events {
            let mut transitions = Vec::with_capacity(event.transitions.len());
            for transition in event.transitions {
                let mut step = TransitionBuilder::<S, H>::new()
                    .from_any(transition.from.into_vec())
                    .to(transition.to);
                for name in transition.guard {
                    let guard = guards
                        .get(&name)
                        .ok_or_else(|| BuildError::UnknownGuard { guard: name.clone() })?;
                    step = step.guard(guard.clone());
                }
                transitions.push(step);
            }
            builder = builder.event(event.name, transitions);
        }

        if self.strict {
            builder = builder.strict();
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::MachineError;
    use serde_json::json;

    struct Host {
        ready: bool,
    }

    type Config = MachineConfig<String, String>;

    const PERIODIC_JOB: &str = r#"{
        "states": [
            { "name": "waiting", "initial": true },
            { "name": "executing" },
            { "name": "terminated", "metadata": { "final": true } }
        ],
        "events": [
            { "name": "work_succeeded", "transitions": [
                { "from": "executing", "to": "waiting" },
                { "from": "waiting", "to": "executing", "guard": ["ready?"] }
            ] },
            { "name": "work_failed", "transitions": [
                { "from": ["waiting", "executing"], "to": "terminated" }
            ] }
        ]
    }"#;

    fn registry() -> GuardRegistry<Host> {
        GuardRegistry::new().register("ready?", |h: &Host| h.ready)
    }

    #[test]
    fn parses_single_and_multiple_sources() {
        let config = Config::from_json(PERIODIC_JOB).unwrap();

        assert_eq!(config.states.len(), 3);
        assert_eq!(
            config.events[0].transitions[0].from,
            OneOrMany::One("executing".to_string())
        );
        assert_eq!(
            config.events[1].transitions[0].from.clone().into_vec(),
            vec!["waiting", "executing"]
        );
        assert!(!config.strict);
    }

    #[test]
    fn builds_definition_with_resolved_guards() {
        let definition = Config::from_json(PERIODIC_JOB)
            .unwrap()
            .build(&registry())
            .unwrap();

        let states: Vec<&String> = definition.states().collect();
        assert_eq!(states, vec!["waiting", "executing", "terminated"]);
        assert_eq!(definition.initial_state(), Ok(&"waiting".to_string()));

        let succeeded = definition.event(&"work_succeeded".to_string()).unwrap();
        assert!(succeeded[1].guard_passes(&Host { ready: true }));
        assert!(!succeeded[1].guard_passes(&Host { ready: false }));

        let terminated = definition.state(&"terminated".to_string()).unwrap();
        assert_eq!(terminated.metadata("final"), Some(&json!(true)));
    }

    #[test]
    fn unknown_guard_fails_build() {
        let result = Config::from_json(PERIODIC_JOB)
            .unwrap()
            .build(&GuardRegistry::<Host>::new());

        assert!(matches!(
            result,
            Err(BuildError::UnknownGuard { guard }) if guard == "ready?"
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let result = Config::from_json(r#"{ "states": "#);

        assert!(matches!(result, Err(BuildError::Config(_))));
    }

    #[test]
    fn strict_flag_is_honoured() {
        let config = Config::from_json(
            r#"{ "states": [{ "name": "a" }],
                 "events": [{ "name": "go", "transitions": [{ "from": "a", "to": "b" }] }],
                 "strict": true }"#,
        )
        .unwrap();

        assert!(matches!(
            config.build(&registry()),
            Err(BuildError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn permissive_config_defers_missing_initial_state() {
        let definition = Config::from_json(r#"{ "states": [{ "name": "a" }] }"#)
            .unwrap()
            .build(&registry())
            .unwrap();

        assert_eq!(definition.initial_state(), Err(MachineError::NoInitialState));
    }

    #[test]
    fn json_round_trip_preserves_description() {
        let config = Config::from_json(PERIODIC_JOB).unwrap();
        let reparsed = Config::from_json(&config.to_json().unwrap()).unwrap();

        assert_eq!(reparsed, config);
    }
}
