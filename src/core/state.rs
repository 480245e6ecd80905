//! Core State trait for registry endpoints.
//!
//! States are the nodes of a transition table. They are plain values
//! compared by equality and hashed into the registry's indexes.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the states a transition table connects.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the registry's indexes
/// - `Eq` + `Hash`: States key the `(from, to)` lookup map
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel in reports and logs
///
/// # Example
///
/// ```rust
/// use phasemap::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Solid,
///     Liquid,
///     Gas,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Solid => "Solid",
///             Self::Liquid => "Liquid",
///             Self::Gas => "Gas",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Gas.name(), "Gas");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A type whose complete set of values is known up front.
///
/// Implemented by the enums that `state_enum!` and `transition_enum!`
/// generate. `ALL` lists every variant in declaration order.
pub trait Enumerable: Sized + 'static {
    const ALL: &'static [Self];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    impl Enumerable for TestState {
        const ALL: &'static [Self] = &[Self::Initial, Self::Processing, Self::Complete];
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn enumerable_lists_every_variant_in_order() {
        assert_eq!(
            TestState::ALL,
            &[
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Initial;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Processing, TestState::Processing);
        assert_ne!(TestState::Processing, TestState::Complete);
    }
}
