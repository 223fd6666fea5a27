//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify construction, transition and
//! serialization laws across many randomly generated machines.

use proptest::prelude::*;
use std::collections::HashSet;
use turnstile::{ConfigError, Endpoint, MachineError, StateMachine, Transition};

const NAMES: [&str; 6] = ["one", "two", "three", "four", "five", "six"];

prop_compose! {
    fn arbitrary_name()(index in 0..NAMES.len()) -> String {
        NAMES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_endpoint()(wildcard in prop::bool::weighted(0.2), name in arbitrary_name())
        -> Endpoint<String>
    {
        if wildcard {
            Endpoint::Any
        } else {
            Endpoint::State(name)
        }
    }
}

prop_compose! {
    fn arbitrary_rule()(from in arbitrary_endpoint(), to in arbitrary_endpoint()) -> Transition<String> {
        Transition::new(from, to)
    }
}

prop_compose! {
    /// A valid machine over the full name set, with a random initial state.
    fn arbitrary_machine()(
        rules in prop::collection::vec(arbitrary_rule(), 0..12),
        initial in prop::option::of(arbitrary_name()),
    ) -> StateMachine<String> {
        let states = NAMES.iter().map(|name| name.to_string());
        StateMachine::new(states, rules, initial).unwrap()
    }
}

fn first_occurrences<T: Clone + Eq + std::hash::Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn duplicates_collapse_to_first_occurrence(
        states in prop::collection::vec(arbitrary_name(), 1..20),
        rule_pairs in prop::collection::vec((arbitrary_name(), arbitrary_name()), 0..20),
    ) {
        let known: HashSet<_> = states.iter().cloned().collect();
        let rules: Vec<Transition<String>> = rule_pairs
            .into_iter()
            .filter(|(from, to)| known.contains(from) && known.contains(to))
            .map(Transition::from)
            .collect();

        let machine = StateMachine::new(states.clone(), rules.clone(), None).unwrap();

        let expected_states = first_occurrences(&states);
        let expected_rules = first_occurrences(&rules);
        prop_assert_eq!(machine.states(), expected_states.as_slice());
        prop_assert_eq!(machine.transitions(), expected_rules.as_slice());
    }

    #[test]
    fn initial_defaults_to_first_declared_state(
        states in prop::collection::vec(arbitrary_name(), 1..10),
    ) {
        let machine = StateMachine::new(states.clone(), Vec::new(), None).unwrap();

        prop_assert_eq!(machine.initial(), &states[0]);
        prop_assert_eq!(machine.state(), machine.initial());
    }

    #[test]
    fn current_starts_at_initial(machine in arbitrary_machine()) {
        prop_assert_eq!(machine.state(), machine.initial());
    }

    #[test]
    fn wildcard_state_is_always_rejected(
        mut states in prop::collection::vec(arbitrary_name(), 0..10),
        position in any::<prop::sample::Index>(),
    ) {
        let at = position.index(states.len() + 1);
        states.insert(at, "*".to_string());

        let result = StateMachine::new(states, Vec::new(), None);
        prop_assert_eq!(result, Err(ConfigError::ReservedStateName));
    }

    #[test]
    fn no_transitions_means_no_moves(
        states in prop::collection::vec(arbitrary_name(), 1..10),
        target in arbitrary_name(),
    ) {
        let mut machine = StateMachine::new(states, Vec::new(), None).unwrap();
        let before = machine.state().clone();

        let result = machine.transition_to(target.clone());
        if machine.is_state(&target) {
            prop_assert!(
                matches!(result, Err(MachineError::InvalidTransition { .. })),
                "expected InvalidTransition, got {:?}",
                result
            );
        } else {
            prop_assert!(
                matches!(result, Err(MachineError::InvalidState { .. })),
                "expected InvalidState, got {:?}",
                result
            );
        }
        prop_assert_eq!(machine.state(), &before);
    }

    #[test]
    fn transition_succeeds_iff_a_rule_matches(
        mut machine in arbitrary_machine(),
        targets in prop::collection::vec(arbitrary_name(), 1..20),
    ) {
        for target in targets {
            let current = machine.state().clone();
            let allowed = machine.transitions().iter().any(|rule| {
                rule == &Transition::between(current.clone(), target.clone())
                    || rule == &Transition::to_any(current.clone())
                    || rule == &Transition::from_any(target.clone())
            });

            let result = machine.transition_to(target.clone());
            prop_assert_eq!(result.is_ok(), allowed);

            if allowed {
                prop_assert_eq!(machine.state(), &target);
            } else {
                prop_assert_eq!(machine.state(), &current);
            }
        }
    }

    #[test]
    fn reachable_states_agree_with_can_transition_to(machine in arbitrary_machine()) {
        let reachable: Vec<_> = machine.reachable_states().cloned().collect();
        let expected: Vec<_> = machine
            .states()
            .iter()
            .filter(|state| machine.can_transition_to(state))
            .cloned()
            .collect();

        prop_assert_eq!(reachable, expected);
    }

    #[test]
    fn reset_restores_initial(
        mut machine in arbitrary_machine(),
        targets in prop::collection::vec(arbitrary_name(), 0..20),
    ) {
        for target in targets {
            let _ = machine.transition_to(target);
        }

        machine.reset();
        prop_assert_eq!(machine.state(), machine.initial());
    }

    #[test]
    fn transition_from_to_requires_matching_source(
        mut machine in arbitrary_machine(),
        source in arbitrary_name(),
        target in arbitrary_name(),
    ) {
        let current = machine.state().clone();
        let result = machine.transition_from_to(source.clone(), target);

        if source != current {
            prop_assert!(
                matches!(result, Err(MachineError::UnexpectedState { .. })),
                "expected UnexpectedState, got {:?}",
                result
            );
            prop_assert_eq!(machine.state(), &current);
        }
    }

    #[test]
    fn record_round_trip_is_identity(
        mut machine in arbitrary_machine(),
        targets in prop::collection::vec(arbitrary_name(), 0..10),
    ) {
        for target in targets {
            let _ = machine.transition_to(target);
        }

        let restored = StateMachine::from_record(machine.to_record()).unwrap();

        prop_assert_eq!(restored.states(), machine.states());
        prop_assert_eq!(restored.transitions(), machine.transitions());
        prop_assert_eq!(restored.initial(), machine.initial());
        prop_assert_eq!(restored.state(), machine.state());
    }

    #[test]
    fn json_round_trip_is_identity(machine in arbitrary_machine()) {
        let json = machine.to_json().unwrap();
        let restored = StateMachine::<String>::from_json(&json).unwrap();

        prop_assert_eq!(restored, machine);
    }

    #[test]
    fn from_record_rejects_undeclared_state(machine in arbitrary_machine(), unknown in "[a-z]{7,10}") {
        let mut record = machine.to_record();
        record.state = Some(unknown);

        let result = StateMachine::from_record(record);
        prop_assert!(
            matches!(result, Err(MachineError::InvalidState { .. })),
            "expected InvalidState, got {:?}",
            result
        );
    }
}
