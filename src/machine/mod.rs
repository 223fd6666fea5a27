//! The transition engine.
//!
//! A [`StateMachine`] owns its declared states, its transition rules and its
//! initial state, all fixed at construction, plus a current state that only
//! moves through validated operations.

use crate::core::{State, Transition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, trace};

pub mod error;

pub use error::{ConfigError, MachineError};

use error::describe;

/// Finite state machine that validates every move against declared rules.
///
/// Serializes through [`MachineRecord`](crate::record::MachineRecord), so
/// deserializing a machine applies the same validation as [`StateMachine::new`].
///
/// Not synchronized: share it across threads behind a lock if needed.
///
/// # Example
///
/// ```rust
/// use turnstile::{MachineError, StateMachine, Transition};
///
/// let states = ["one", "two", "three"].map(String::from);
/// let transitions = [("one", "two"), ("two", "three"), ("three", "one")]
///     .map(|(from, to)| Transition::between(from.to_string(), to.to_string()));
///
/// let mut machine = StateMachine::new(states, transitions, Some("two".to_string())).unwrap();
/// assert_eq!(machine.state(), "two");
///
/// machine.transition_to("three").unwrap();
/// assert_eq!(machine.state(), "three");
///
/// let err = machine.transition_to("three").unwrap_err();
/// assert!(matches!(err, MachineError::InvalidTransition { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "crate::record::MachineRecord<S>",
    try_from = "crate::record::MachineRecord<S>",
    bound = "S: State"
)]
pub struct StateMachine<S: State> {
    states: Vec<S>,
    transitions: Vec<Transition<S>>,
    initial: S,
    current: S,
}

/// Keep the first occurrence of each item, preserving input order.
fn unique<T, I>(items: I) -> Vec<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

impl<S: State> StateMachine<S> {
    /// Create a validated machine whose current state is the initial state.
    ///
    /// Duplicate states and rules are collapsed to their first occurrence.
    /// When `initial` is `None`, the first declared state is used.
    pub fn new<I, T>(states: I, transitions: T, initial: Option<S>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        T: IntoIterator<Item = Transition<S>>,
    {
        let states = unique(states);
        let transitions = unique(transitions.into_iter().map(Transition::folded));

        let Some(first) = states.first() else {
            return Err(ConfigError::NoStates);
        };

        if states.iter().any(State::is_wildcard) {
            return Err(ConfigError::ReservedStateName);
        }

        let initial = match initial {
            Some(initial) if states.contains(&initial) => initial,
            Some(initial) => {
                return Err(ConfigError::InvalidInitial {
                    state: describe(&initial),
                })
            }
            None => first.clone(),
        };

        if let Some(unknown) = transitions
            .iter()
            .flat_map(|rule| rule.named_states())
            .find(|state| !states.contains(state))
        {
            return Err(ConfigError::UnknownState {
                state: describe(unknown),
            });
        }

        trace!(
            states = states.len(),
            transitions = transitions.len(),
            initial = ?initial,
            "state machine constructed"
        );

        Ok(Self {
            current: initial.clone(),
            initial,
            states,
            transitions,
        })
    }

    /// Get the current state.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine starts in and returns to on reset.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Declared rules, in declaration order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    pub fn is_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Check whether `transition_to(target)` would succeed, without moving.
    pub fn can_transition_to(&self, target: &S) -> bool {
        self.check_transition(target).is_ok()
    }

    /// Declared states the machine may move to from the current one.
    pub fn reachable_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states
            .iter()
            .filter(move |target| self.is_permitted(target))
    }

    /// Move to `target`.
    ///
    /// Succeeds when a rule `(current, target)`, `(current, *)` or
    /// `(*, target)` is declared. Staying in the current state is a move
    /// like any other and needs a matching rule.
    pub fn transition_to(&mut self, target: impl Into<S>) -> Result<(), MachineError> {
        let target = target.into();
        self.check_transition(&target)?;

        debug!(from = ?self.current, to = ?target, "state transition");
        self.current = target;
        Ok(())
    }

    /// Move to `target`, but only if the machine is currently in `source`.
    pub fn transition_from_to(
        &mut self,
        source: impl Into<S>,
        target: impl Into<S>,
    ) -> Result<(), MachineError> {
        let source = source.into();
        if self.current != source {
            return Err(MachineError::UnexpectedState {
                expected: describe(&source),
                actual: describe(&self.current),
            });
        }
        self.transition_to(target)
    }

    /// Assign the current state.
    ///
    /// Same validation as [`transition_to`](Self::transition_to); there is
    /// no unchecked overwrite.
    pub fn set_state(&mut self, state: impl Into<S>) -> Result<(), MachineError> {
        self.transition_to(state)
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        debug!(from = ?self.current, to = ?self.initial, "state machine reset");
        self.current = self.initial.clone();
    }

    /// Overwrite the current state with any declared state, skipping rule checks.
    pub(crate) fn restore(&mut self, state: S) -> Result<(), MachineError> {
        if !self.is_state(&state) {
            return Err(MachineError::InvalidState {
                state: describe(&state),
            });
        }
        debug!(state = ?state, "state restored");
        self.current = state;
        Ok(())
    }

    fn is_permitted(&self, target: &S) -> bool {
        self.transitions
            .iter()
            .any(|rule| rule.permits(&self.current, target))
    }

    fn check_transition(&self, target: &S) -> Result<(), MachineError> {
        if !self.is_state(target) {
            return Err(MachineError::InvalidState {
                state: describe(target),
            });
        }
        if !self.is_permitted(target) {
            return Err(MachineError::InvalidTransition {
                from: describe(&self.current),
                to: describe(target),
            });
        }
        Ok(())
    }
}
