//! Macros for ergonomic state machine construction.

/// Declare a unit-variant enum usable as a machine state.
///
/// Derives the traits [`State`](crate::core::State) requires, implements it,
/// and adds an `ALL` constant listing the variants in declaration order.
///
/// # Example
///
/// ```
/// use turnstile::{state_enum, StateMachine, Transition};
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// let mut machine = StateMachine::new(
///     Light::ALL.iter().copied(),
///     [
///         Transition::between(Light::Red, Light::Green),
///         Transition::between(Light::Green, Light::Yellow),
///         Transition::from_any(Light::Red),
///     ],
///     None,
/// )
/// .unwrap();
///
/// machine.transition_to(Light::Green).unwrap();
/// machine.transition_to(Light::Red).unwrap();
/// assert_eq!(machine.state(), &Light::Red);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {}
    };
}
