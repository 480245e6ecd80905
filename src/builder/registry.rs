//! Fluent builder for transition registries.

use crate::core::{RegistryError, Transition, TransitionRegistry};

/// Builder that accumulates states and transitions before validation.
///
/// Nothing is checked until [`build`](Self::build), which hands the
/// collected catalogue to [`TransitionRegistry::build`].
pub struct RegistryBuilder<T: Transition> {
    states: Vec<T::State>,
    transitions: Vec<T>,
}

impl<T: Transition> RegistryBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: T::State) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T::State>,
    {
        self.states.extend(states);
        self
    }

    /// Add a transition.
    pub fn transition(mut self, transition: T) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the registry.
    /// Returns an error if two transitions share a pair or a name.
    pub fn build(self) -> Result<TransitionRegistry<T>, RegistryError> {
        TransitionRegistry::build(self.states, self.transitions)
    }
}

impl<T: Transition> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NamedTransition;

    type Edge = NamedTransition<String>;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn empty_builder_builds_empty_registry() {
        let registry = RegistryBuilder::<Edge>::new().build().unwrap();

        assert!(registry.is_empty());
        assert!(registry.states().is_empty());
    }

    #[test]
    fn fluent_api_builds_registry() {
        let registry = RegistryBuilder::<Edge>::new()
            .state(s("locked"))
            .state(s("unlocked"))
            .transition(Edge::new("unlock", s("locked"), s("unlocked")))
            .transition(Edge::new("lock", s("unlocked"), s("locked")))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup(&s("locked"), &s("unlocked")).map(|t| t.name()),
            Some("unlock")
        );
        assert!(registry.is_complete(registry.states()));
    }

    #[test]
    fn add_multiple_transitions() {
        let registry = RegistryBuilder::<Edge>::new()
            .states(vec![s("a"), s("b"), s("c")])
            .transitions(vec![
                Edge::new("ab", s("a"), s("b")),
                Edge::new("bc", s("b"), s("c")),
            ])
            .build()
            .unwrap();

        assert_eq!(registry.states().len(), 3);
        assert_eq!(registry.outgoing(&s("a")).count(), 1);
        assert!(!registry.is_complete(registry.states()));
    }

    #[test]
    fn builder_surfaces_duplicate_pairs() {
        let result = RegistryBuilder::<Edge>::new()
            .transition(Edge::new("open", s("closed"), s("open")))
            .transition(Edge::new("pry", s("closed"), s("open")))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateTransition { ref first, ref second, .. })
                if first == "open" && second == "pry"
        ));
    }
}
