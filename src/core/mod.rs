//! Core state machine types.
//!
//! This module contains the value types the engine is built from:
//! - State identifiers via the `State` trait
//! - Transition rules, whose endpoints may be the wildcard
//!
//! Nothing here holds mutable state; the [`StateMachine`](crate::StateMachine)
//! is the only place a "current state" lives.

mod state;
mod transition;

pub use state::{State, WILDCARD};
pub use transition::{Endpoint, Transition};
