//! Named directed edges between states.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named directed edge from one state to another.
///
/// Implemented by enums declared with `transition_enum!` and by
/// [`NamedTransition`] for catalogues assembled at runtime.
///
/// # Example
///
/// ```rust
/// use phasemap::core::Transition;
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
///     }
/// }
///
/// assert_eq!(PhaseChange::Melt.name(), "Melt");
/// assert_eq!(PhaseChange::Melt.from(), &Phase::Solid);
/// assert_eq!(PhaseChange::Melt.to(), &Phase::Liquid);
/// ```
pub trait Transition: Debug {
    /// The state type this transition connects.
    type State: State;

    /// Unique name of the transition within its catalogue.
    fn name(&self) -> &str;

    /// Source state.
    fn from(&self) -> &Self::State;

    /// Destination state.
    fn to(&self) -> &Self::State;

    /// Whether the edge leads back to its own source.
    fn is_self_loop(&self) -> bool {
        self.from() == self.to()
    }
}

/// An owned `(name, from, to)` triple.
///
/// Use this when the catalogue comes from data rather than from an enum
/// declaration.
///
/// ```rust
/// use phasemap::core::{NamedTransition, Transition};
///
/// let melt = NamedTransition::new("MELT", "solid".to_string(), "liquid".to_string());
/// assert_eq!(melt.name(), "MELT");
/// assert!(!melt.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NamedTransition<S: State> {
    name: String,
    from: S,
    to: S,
}

impl<S: State> NamedTransition<S> {
    pub fn new(name: impl Into<String>, from: S, to: S) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }
}

impl<S: State> Transition for NamedTransition<S> {
    type State = S;

    fn name(&self) -> &str {
        &self.name
    }

    fn from(&self) -> &S {
        &self.from
    }

    fn to(&self) -> &S {
        &self.to
    }
}

/// Plain strings make convenient states for data-driven catalogues.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}
