//! Transition rules and their endpoints.
//!
//! A rule is a `(source, destination)` pair where either side may be the
//! wildcard. Rules are plain values; the machine decides which of them
//! apply to a requested move.

use super::state::{State, WILDCARD};
use crate::machine::ConfigError;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};

/// One side of a transition rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint<S> {
    /// Matches any declared state. Spelled `"*"` when serialized.
    Any,
    /// Matches exactly this declared state.
    State(S),
}

impl<S: State> Endpoint<S> {
    /// Wrap a state, folding a value that spells the wildcard into [`Endpoint::Any`].
    pub fn from_state(state: S) -> Self {
        if state.is_wildcard() {
            Endpoint::Any
        } else {
            Endpoint::State(state)
        }
    }

    fn folded(self) -> Self {
        match self {
            Endpoint::State(state) => Endpoint::from_state(state),
            Endpoint::Any => Endpoint::Any,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Endpoint::Any)
    }

    /// The concrete state, if this endpoint names one.
    pub fn as_state(&self) -> Option<&S> {
        match self {
            Endpoint::Any => None,
            Endpoint::State(state) => Some(state),
        }
    }
}

impl<S: State> Serialize for Endpoint<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        match self {
            Endpoint::Any => serializer.serialize_str(WILDCARD),
            Endpoint::State(state) => state.serialize(serializer),
        }
    }
}

/// Accepts only the string `"*"`.
struct WildcardToken;

impl<'de> Deserialize<'de> for WildcardToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        if token == WILDCARD {
            Ok(WildcardToken)
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Str(&token),
                &"the wildcard token \"*\"",
            ))
        }
    }
}

impl<'de, S: State> Deserialize<'de> for Endpoint<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged, bound = "T: State")]
        enum Repr<T> {
            Wildcard(WildcardToken),
            State(T),
        }

        Ok(match Repr::<S>::deserialize(deserializer)? {
            Repr::Wildcard(WildcardToken) => Endpoint::Any,
            Repr::State(state) => Endpoint::from_state(state),
        })
    }
}

/// A declared permission to move from `from` to `to`.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Endpoint, Transition};
///
/// let rule: Transition<String> = ("one".to_string(), "*".to_string()).into();
/// assert_eq!(rule.from, Endpoint::State("one".to_string()));
/// assert_eq!(rule.to, Endpoint::Any);
///
/// assert!(rule.permits(&"one".to_string(), &"two".to_string()));
/// assert!(!rule.permits(&"two".to_string(), &"one".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition<S> {
    /// Source side of the rule
    pub from: Endpoint<S>,
    /// Destination side of the rule
    pub to: Endpoint<S>,
}

impl<S: State> Transition<S> {
    pub fn new(from: Endpoint<S>, to: Endpoint<S>) -> Self {
        Self { from, to }.folded()
    }

    /// Fold any `Endpoint::State` spelling the wildcard into `Endpoint::Any`.
    pub(crate) fn folded(self) -> Self {
        Self {
            from: self.from.folded(),
            to: self.to.folded(),
        }
    }

    /// Rule between two concrete states.
    pub fn between(from: S, to: S) -> Self {
        Self::new(Endpoint::from_state(from), Endpoint::from_state(to))
    }

    /// Rule allowing `from` to move to any declared state.
    pub fn to_any(from: S) -> Self {
        Self::new(Endpoint::from_state(from), Endpoint::Any)
    }

    /// Rule allowing any declared state to move to `to`.
    pub fn from_any(to: S) -> Self {
        Self::new(Endpoint::Any, Endpoint::from_state(to))
    }

    /// Check whether this rule allows moving from `current` to `target`.
    ///
    /// Exactly three shapes match: `(current, target)`, `(current, *)` and
    /// `(*, target)`. A `(*, *)` rule matches nothing.
    pub fn permits(&self, current: &S, target: &S) -> bool {
        match (&self.from, &self.to) {
            (Endpoint::State(from), Endpoint::State(to)) => from == current && to == target,
            (Endpoint::State(from), Endpoint::Any) => from == current,
            (Endpoint::Any, Endpoint::State(to)) => to == target,
            (Endpoint::Any, Endpoint::Any) => false,
        }
    }

    /// Concrete states referenced by this rule.
    pub(crate) fn named_states(&self) -> impl Iterator<Item = &S> {
        self.from.as_state().into_iter().chain(self.to.as_state())
    }

    pub(crate) fn to_pair(&self) -> Vec<Endpoint<S>> {
        vec![self.from.clone(), self.to.clone()]
    }
}

impl<S: State> From<(S, S)> for Transition<S> {
    fn from((from, to): (S, S)) -> Self {
        Self::between(from, to)
    }
}

impl<S: State> TryFrom<Vec<Endpoint<S>>> for Transition<S> {
    type Error = ConfigError;

    fn try_from(pair: Vec<Endpoint<S>>) -> Result<Self, Self::Error> {
        let arity = pair.len();
        let mut sides = pair.into_iter();
        match (sides.next(), sides.next(), sides.next()) {
            (Some(from), Some(to), None) => Ok(Self::new(from, to)),
            _ => Err(ConfigError::MalformedTransition { arity }),
        }
    }
}
