//! Turnstile: a small, validated finite state machine.
//!
//! A machine is declared with a set of states, a set of allowed transitions
//! and an initial state. It tracks one current state and only lets it move
//! along declared rules.
//!
//! # Core Concepts
//!
//! - **State**: any identifier implementing the `State` trait (strings,
//!   integers, `state_enum!` enums)
//! - **Transition**: a `(source, destination)` rule where either side may be
//!   the wildcard `"*"`, meaning "any declared state"
//! - **Record**: the flat `{initial, state, states, transitions}` snapshot a
//!   machine serializes to and is rebuilt from
//!
//! # Example
//!
//! ```rust
//! use turnstile::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::<String>::builder()
//!     .states(["one", "two", "three"])
//!     .transition("one", "*")
//!     .transition("two", "three")
//!     .transition("*", "one")
//!     .build()
//!     .unwrap();
//!
//! machine.transition_to("two").unwrap();
//! assert!(matches!(
//!     machine.transition_to("two"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//! machine.transition_to("three").unwrap();
//! machine.transition_to("one").unwrap();
//!
//! let json = machine.to_json().unwrap();
//! let restored = StateMachine::<String>::from_json(&json).unwrap();
//! assert_eq!(restored, machine);
//!
//! machine.reset();
//! assert_eq!(machine.state(), "one");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod record;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use core::{Endpoint, State, Transition, WILDCARD};
pub use machine::{ConfigError, MachineError, StateMachine};
pub use record::{MachineRecord, RecordError};
