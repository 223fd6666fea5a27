//! Plain structured records of a state machine.
//!
//! A record carries the full configuration plus the current state, in the
//! shape other implementations and persisted snapshots exchange:
//!
//! ```json
//! {
//!   "initial": "two",
//!   "state": "three",
//!   "states": ["one", "two", "three"],
//!   "transitions": [["one", "two"], ["two", "*"], ["*", "one"]]
//! }
//! ```

use crate::core::{Endpoint, State, Transition};
use crate::machine::{ConfigError, MachineError, StateMachine};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::RecordError;

/// Serializable snapshot of a state machine.
///
/// Fields are optional on input so partial records decode; validation
/// happens in [`StateMachine::from_record`]. Transitions stay loose pairs
/// here so a rule with the wrong number of sides is reported as a
/// [`ConfigError::MalformedTransition`] rather than a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: State")]
pub struct MachineRecord<S> {
    /// Initial state; the first declared state when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<S>,

    /// Current state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<S>,

    /// Declared states, in order
    #[serde(default)]
    pub states: Vec<S>,

    /// Declared rules as `[source, destination]` pairs, in order
    #[serde(default)]
    pub transitions: Vec<Vec<Endpoint<S>>>,
}

impl<S: State> StateMachine<S> {
    /// Snapshot the configuration and current state.
    pub fn to_record(&self) -> MachineRecord<S> {
        MachineRecord {
            initial: Some(self.initial().clone()),
            state: Some(self.state().clone()),
            states: self.states().to_vec(),
            transitions: self.transitions().iter().map(Transition::to_pair).collect(),
        }
    }

    /// Rebuild a machine from a record.
    ///
    /// The configuration goes through the same validation as
    /// [`StateMachine::new`]. The recorded current state is then restored
    /// directly: it must be a declared state, but no rule has to lead to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{MachineError, StateMachine};
    /// use turnstile::record::MachineRecord;
    ///
    /// let record: MachineRecord<String> = serde_json::from_str(
    ///     r#"{"initial": "one", "state": "three",
    ///         "states": ["one", "two", "three"],
    ///         "transitions": [["one", "two"], ["*", "one"]]}"#,
    /// )
    /// .unwrap();
    ///
    /// let mut machine = StateMachine::from_record(record).unwrap();
    /// assert_eq!(machine.state(), "three");
    ///
    /// machine.transition_to("one").unwrap();
    /// assert!(matches!(
    ///     machine.transition_to("three"),
    ///     Err(MachineError::InvalidTransition { .. })
    /// ));
    /// ```
    pub fn from_record(record: MachineRecord<S>) -> Result<Self, MachineError> {
        let MachineRecord {
            initial,
            state,
            states,
            transitions,
        } = record;

        let transitions = transitions
            .into_iter()
            .map(Transition::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut machine = Self::new(states, transitions, initial)?;
        let state = state.ok_or(ConfigError::MissingField("state"))?;
        machine.restore(state)?;

        debug!(state = ?machine.state(), "state machine loaded from record");
        Ok(machine)
    }

    /// Serialize the record to compact JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(&self.to_record())
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Serialize the record to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(&self.to_record())
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Parse a JSON record and rebuild the machine from it.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: MachineRecord<S> = serde_json::from_str(json)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        Ok(Self::from_record(record)?)
    }
}

impl<S: State> From<StateMachine<S>> for MachineRecord<S> {
    fn from(machine: StateMachine<S>) -> Self {
        machine.to_record()
    }
}

impl<S: State> TryFrom<MachineRecord<S>> for StateMachine<S> {
    type Error = MachineError;

    fn try_from(record: MachineRecord<S>) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
