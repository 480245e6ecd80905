//! The immutable transition registry.
//!
//! A registry is built once from the complete catalogue of transitions and
//! answers read-only queries afterwards. Building validates that no two
//! transitions share a `(from, to)` pair or a name; a build either yields a
//! fully indexed registry or an error, never something in between.

use super::error::RegistryError;
use super::state::{Enumerable, State};
use super::transition::Transition;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validated lookup table from `(from, to)` pairs to transitions.
///
/// Lookups are hash-map lookups. `outgoing` and `incoming` yield
/// transitions in the order they were declared.
///
/// # Example
///
/// ```rust
/// use phasemap::core::TransitionRegistry;
/// use phasemap::{state_enum, transition_enum};
///
/// state_enum! {
///     pub enum Phase { Solid, Liquid, Gas }
/// }
///
/// transition_enum! {
///     pub enum PhaseChange: Phase {
///         Melt(Solid => Liquid),
///         Freeze(Liquid => Solid),
///         Boil(Liquid => Gas),
///         Condense(Gas => Liquid),
///         Sublime(Solid => Gas),
///         Deposit(Gas => Solid),
///     }
/// }
///
/// let registry = TransitionRegistry::<PhaseChange>::from_catalogue().unwrap();
///
/// assert_eq!(registry.lookup(&Phase::Solid, &Phase::Liquid), Some(&PhaseChange::Melt));
/// assert_eq!(registry.lookup(&Phase::Solid, &Phase::Solid), None);
/// assert_eq!(registry.outgoing(&Phase::Gas).count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionRegistry<T: Transition> {
    states: Vec<T::State>,
    transitions: Vec<T>,
    by_pair: HashMap<(T::State, T::State), usize>,
    by_name: HashMap<String, usize>,
    outgoing: HashMap<T::State, Vec<usize>>,
    incoming: HashMap<T::State, Vec<usize>>,
}

impl<T: Transition> TransitionRegistry<T> {
    /// Build a registry from a state set and the full transition catalogue.
    ///
    /// `states` only feeds diagnostics (`states`, `isolated_states`); it
    /// never prunes transitions. Fails on the first transition that claims
    /// a pair or a name already taken by an earlier one.
    pub fn build<I, J>(states: I, transitions: J) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = T::State>,
        J: IntoIterator<Item = T>,
    {
        let mut declared = Vec::new();
        let mut seen = HashSet::new();
        for state in states {
            if seen.insert(state.clone()) {
                declared.push(state);
            }
        }

        let mut registry = Self {
            states: declared,
            transitions: Vec::new(),
            by_pair: HashMap::new(),
            by_name: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        };

        for transition in transitions {
            if let Err(error) = registry.insert(transition, &seen) {
                tracing::debug!(%error, "Rejected transition catalogue");
                return Err(error);
            }
        }

        tracing::debug!(
            transitions = registry.transitions.len(),
            states = registry.states.len(),
            "Built transition registry"
        );
        Ok(registry)
    }

    fn insert(
        &mut self,
        transition: T,
        declared: &HashSet<T::State>,
    ) -> Result<(), RegistryError> {
        let key = (transition.from().clone(), transition.to().clone());

        if let Some(&first) = self.by_pair.get(&key) {
            return Err(RegistryError::DuplicateTransition {
                from: key.0.name().to_string(),
                to: key.1.name().to_string(),
                first: self.transitions[first].name().to_string(),
                second: transition.name().to_string(),
            });
        }

        if self.by_name.contains_key(transition.name()) {
            return Err(RegistryError::DuplicateName {
                name: transition.name().to_string(),
            });
        }

        if !declared.is_empty() {
            for endpoint in [&key.0, &key.1] {
                if !declared.contains(endpoint) {
                    tracing::warn!(
                        transition = transition.name(),
                        state = endpoint.name(),
                        "Transition endpoint is not a declared state"
                    );
                }
            }
        }

        let index = self.transitions.len();
        self.outgoing.entry(key.0.clone()).or_default().push(index);
        self.incoming.entry(key.1.clone()).or_default().push(index);
        self.by_name.insert(transition.name().to_string(), index);
        self.by_pair.insert(key, index);
        self.transitions.push(transition);
        Ok(())
    }

    /// Build from the closed state and transition sets of enum catalogues.
    pub fn from_catalogue() -> Result<Self, RegistryError>
    where
        T: Enumerable + Clone,
        T::State: Enumerable,
    {
        Self::build(
            <T::State as Enumerable>::ALL.iter().cloned(),
            <T as Enumerable>::ALL.iter().cloned(),
        )
    }

    /// The transition connecting `from` to `to`, if one was declared.
    ///
    /// `None` is an ordinary answer meaning "no such edge".
    pub fn lookup(&self, from: &T::State, to: &T::State) -> Option<&T> {
        let key = (from.clone(), to.clone());
        self.by_pair.get(&key).map(|&index| &self.transitions[index])
    }

    /// Whether an edge connects `from` to `to`.
    pub fn contains(&self, from: &T::State, to: &T::State) -> bool {
        self.lookup(from, to).is_some()
    }

    /// Every transition leaving `from`, in declaration order.
    pub fn outgoing(&self, from: &T::State) -> impl Iterator<Item = &T> + '_ {
        self.indexed(self.outgoing.get(from))
    }

    /// Every transition arriving at `to`, in declaration order.
    pub fn incoming(&self, to: &T::State) -> impl Iterator<Item = &T> + '_ {
        self.indexed(self.incoming.get(to))
    }

    fn indexed<'a>(
        &'a self,
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a T> + 'a {
        indices
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&index| &self.transitions[index])
    }

    /// The transition with the given name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&index| &self.transitions[index])
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[T] {
        &self.transitions
    }

    /// The declared state set, deduplicated, in first-seen order.
    pub fn states(&self) -> &[T::State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Declared states that no transition enters or leaves.
    pub fn isolated_states(&self) -> impl Iterator<Item = &T::State> + '_ {
        self.states.iter().filter(|state| {
            !self.outgoing.contains_key(*state) && !self.incoming.contains_key(*state)
        })
    }

    /// Whether every state in `require_states` has at least one outgoing
    /// transition.
    pub fn is_complete<'a, I>(&self, require_states: I) -> bool
    where
        I: IntoIterator<Item = &'a T::State>,
        T::State: 'a,
    {
        require_states
            .into_iter()
            .all(|state| self.outgoing.contains_key(state))
    }

    /// Like [`is_complete`](Self::is_complete), but reports every state
    /// without an outgoing transition.
    pub fn check_complete<'a, I>(
        &self,
        require_states: I,
    ) -> Validation<(), NonEmptyVec<RegistryError>>
    where
        I: IntoIterator<Item = &'a T::State>,
        T::State: 'a,
    {
        let checks: Vec<Validation<(), NonEmptyVec<RegistryError>>> = require_states
            .into_iter()
            .map(|state| {
                if self.outgoing.contains_key(state) {
                    Validation::success(())
                } else {
                    Validation::fail(RegistryError::IncompleteState {
                        state: state.name().to_string(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
