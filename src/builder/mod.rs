//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `state_enum!` macro for
//! declaring machines with minimal boilerplate. Both end in the same
//! validation as [`StateMachine::new`].

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;

use crate::core::State;
use crate::machine::StateMachine;

impl<S: State> StateMachine<S> {
    /// Start a [`StateMachineBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// use turnstile::StateMachine;
    ///
    /// let mut machine = StateMachine::<String>::builder()
    ///     .states(["locked", "unlocked"])
    ///     .transition("locked", "unlocked")
    ///     .transition("unlocked", "locked")
    ///     .build()
    ///     .unwrap();
    ///
    /// machine.transition_to("unlocked").unwrap();
    /// assert_eq!(machine.state(), "unlocked");
    /// ```
    pub fn builder() -> StateMachineBuilder<S> {
        StateMachineBuilder::new()
    }
}
