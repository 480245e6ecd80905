//! Registry errors.

use thiserror::Error;

/// Errors raised while building or checking a transition registry.
///
/// States and transitions are identified by name so the inconsistency can
/// be fixed where the catalogue is declared.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Transitions '{first}' and '{second}' both connect '{from}' to '{to}'")]
    DuplicateTransition {
        from: String,
        to: String,
        first: String,
        second: String,
    },

    #[error("Transition name '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("State '{state}' has no outgoing transition")]
    IncompleteState { state: String },
}

impl RegistryError {
    /// Whether this error prevents a registry from being built.
    ///
    /// `IncompleteState` is only ever reported by completeness checks.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::IncompleteState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_transition_names_both_edges() {
        let error = RegistryError::DuplicateTransition {
            from: "Solid".to_string(),
            to: "Liquid".to_string(),
            first: "Melt".to_string(),
            second: "FakeMelt".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Transitions 'Melt' and 'FakeMelt' both connect 'Solid' to 'Liquid'"
        );
        assert!(error.is_fatal());
    }

    #[test]
    fn incomplete_state_is_not_fatal() {
        let error = RegistryError::IncompleteState {
            state: "Gas".to_string(),
        };

        assert_eq!(error.to_string(), "State 'Gas' has no outgoing transition");
        assert!(!error.is_fatal());
    }
}
