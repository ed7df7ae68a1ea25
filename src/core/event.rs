//! Event identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for event identifiers.
///
/// Events are the names a host fires to move between states. Like
/// [`State`](super::State), they are plain values: enums via
/// [`event_enum!`](crate::event_enum) or `String` for name-keyed machines.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum JobEvent {
        WorkSucceeded,
        WorkFailed,
    }

    impl Event for JobEvent {
        fn name(&self) -> &str {
            match self {
                Self::WorkSucceeded => "WorkSucceeded",
                Self::WorkFailed => "WorkFailed",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(JobEvent::WorkSucceeded.name(), "WorkSucceeded");
        assert_eq!(JobEvent::WorkFailed.name(), "WorkFailed");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = JobEvent::WorkFailed;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: JobEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn string_events_are_named_by_their_contents() {
        assert_eq!(String::from("work_failed").name(), "work_failed");
    }
}
