//! Builder for constructing state machines.

use crate::core::{State, Transition};
use crate::machine::{ConfigError, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Arguments take `impl Into<S>`, so a `String` machine can be declared
/// with string literals. Passing `"*"` as either side of a rule makes that
/// side the wildcard.
pub struct StateMachineBuilder<S: State> {
    states: Vec<S>,
    transitions: Vec<Transition<S>>,
    initial: Option<S>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Declare several states at once, in order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Allow moving from `from` to `to`.
    pub fn transition(mut self, from: impl Into<S>, to: impl Into<S>) -> Self {
        self.transitions.push(Transition::between(from.into(), to.into()));
        self
    }

    /// Allow moving from `from` to any declared state.
    pub fn transition_to_any(mut self, from: impl Into<S>) -> Self {
        self.transitions.push(Transition::to_any(from.into()));
        self
    }

    /// Allow moving from any declared state to `to`.
    pub fn transition_from_any(mut self, to: impl Into<S>) -> Self {
        self.transitions.push(Transition::from_any(to.into()));
        self
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: Transition<S>) -> Self {
        self.transitions.push(rule);
        self
    }

    /// Set the initial state. Defaults to the first declared state.
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<S>, ConfigError> {
        StateMachine::new(self.states, self.transitions, self.initial)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Endpoint;
    use crate::machine::MachineError;

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::<String>::new().build();

        assert!(matches!(result, Err(ConfigError::NoStates)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::<String>::new()
            .state("one")
            .state("two")
            .state("three")
            .transition("one", "two")
            .transition("two", "three")
            .initial("two")
            .build()
            .unwrap();

        assert_eq!(machine.state(), "two");
        assert_eq!(machine.initial(), "two");
        assert_eq!(machine.states().len(), 3);
        assert_eq!(machine.transitions().len(), 2);
    }

    #[test]
    fn star_literal_becomes_wildcard() {
        let machine = StateMachineBuilder::<String>::new()
            .states(["one", "two"])
            .transition("one", "*")
            .transition("*", "one")
            .build()
            .unwrap();

        assert_eq!(machine.transitions()[0].to, Endpoint::Any);
        assert_eq!(machine.transitions()[1].from, Endpoint::Any);
    }

    #[test]
    fn wildcard_helpers_match_star_literals() {
        let explicit = StateMachineBuilder::<String>::new()
            .states(["one", "two"])
            .transition_to_any("one")
            .transition_from_any("one")
            .build()
            .unwrap();

        let literal = StateMachineBuilder::<String>::new()
            .states(["one", "two"])
            .transition("one", "*")
            .transition("*", "one")
            .build()
            .unwrap();

        assert_eq!(explicit, literal);
    }

    #[test]
    fn rule_accepts_prebuilt_transitions() {
        let mut machine = StateMachineBuilder::<u32>::new()
            .states([1u32, 2])
            .rule(Transition::between(1, 2))
            .build()
            .unwrap();

        machine.transition_to(2u32).unwrap();
        assert!(matches!(
            machine.transition_to(1u32),
            Err(MachineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn builder_surfaces_config_errors() {
        let result = StateMachineBuilder::<String>::new()
            .state("one")
            .transition("one", "missing")
            .build();
        assert!(matches!(result, Err(ConfigError::UnknownState { .. })));

        let result = StateMachineBuilder::<String>::new()
            .state("one")
            .initial("missing")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidInitial { .. })));

        let result = StateMachineBuilder::<String>::new().state("*").build();
        assert!(matches!(result, Err(ConfigError::ReservedStateName)));
    }
}
