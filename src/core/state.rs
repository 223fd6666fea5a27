//! Core State trait for state machine states.
//!
//! A state is an opaque identifier: the machine only ever compares, hashes,
//! clones and serializes it. Declaration order is tracked by the machine,
//! not by the state type.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Reserved token meaning "any declared state" on either side of a rule.
pub const WILDCARD: &str = "*";

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out owned copies in records
/// - `Eq` + `Hash`: membership checks and duplicate collapsing
/// - `Debug`: states are rendered into error messages and log fields
/// - `Serialize` + `Deserialize`: states travel inside a
///   [`MachineRecord`](crate::record::MachineRecord)
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {}
///
/// assert!(!Door::Locked.is_wildcard());
/// assert!("*".to_string().is_wildcard());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Check if this value spells the reserved wildcard token.
    ///
    /// A wildcard is never a valid declared state. Types that cannot
    /// represent `"*"` keep the default, which returns `false`.
    fn is_wildcard(&self) -> bool {
        false
    }
}

impl State for String {
    fn is_wildcard(&self) -> bool {
        self == WILDCARD
    }
}

impl State for char {
    fn is_wildcard(&self) -> bool {
        *self == '*'
    }
}

macro_rules! integer_states {
    ($($ty:ty),* $(,)?) => {
        $(impl State for $ty {})*
    };
}

integer_states!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
