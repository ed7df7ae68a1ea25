//! Machine From Config
//!
//! Describes a machine as JSON and resolves its guards by name.
//!
//! Key concepts:
//! - `MachineConfig` is plain serde data
//! - Guard names are resolved against a `GuardRegistry`
//! - Strict mode reports every structural problem at once
//!
//! Run with: cargo run --example machine_from_config

use std::sync::Arc;
use switchyard::builder::{BuildError, MachineConfig};
use switchyard::core::GuardRegistry;
use switchyard::machine::Machine;

const DEPLOYMENT: &str = r#"{
    "states": [
        { "name": "pending", "initial": true },
        { "name": "deploying" },
        { "name": "live", "metadata": { "color": "green" } },
        { "name": "rolled_back", "metadata": { "color": "red" } }
    ],
    "events": [
        { "name": "advance", "transitions": [
            { "from": "pending", "to": "deploying", "guard": ["approved?"] },
            { "from": "deploying", "to": "live", "guard": ["healthy?"] },
            { "from": "deploying", "to": "rolled_back" }
        ] },
        { "name": "abort", "transitions": [
            { "from": ["pending", "deploying"], "to": "rolled_back" }
        ] }
    ],
    "strict": true
}"#;

const BROKEN: &str = r#"{
    "states": [{ "name": "a" }],
    "events": [{ "name": "go", "transitions": [{ "from": "a", "to": "b" }] }],
    "strict": true
}"#;

struct Deployment {
    approved: bool,
    healthy: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Machine From Config Example ===\n");

    let guards = GuardRegistry::new()
        .register("approved?", |d: &Deployment| d.approved)
        .register("healthy?", |d: &Deployment| d.healthy);

    let config: MachineConfig<String, String> = MachineConfig::from_json(DEPLOYMENT)?;
    let definition = Arc::new(config.build(&guards)?);

    let advance = "advance".to_string();
    for healthy in [true, false] {
        let deployment = Deployment {
            approved: true,
            healthy,
        };
        let mut machine = Machine::new(Arc::clone(&definition))?;
        machine.fire(&advance, &deployment)?;
        let outcome = machine.fire(&advance, &deployment)?.clone();
        let color = definition
            .state(&outcome)
            .and_then(|decl| decl.metadata("color"))
            .and_then(|value| value.as_str())
            .unwrap_or("none");
        println!("healthy={healthy}: ended in {outcome} ({color})");
    }

    println!("\nStrict validation of a broken description:");
    let broken: MachineConfig<String, String> = MachineConfig::from_json(BROKEN)?;
    match broken.build(&guards) {
        Err(BuildError::InvalidDefinition(violations)) => {
            for violation in violations {
                println!("  - {violation}");
            }
        }
        Err(err) => println!("  unexpected error: {err}"),
        Ok(_) => println!("  unexpectedly valid"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
