//! Phasemap: validated transition tables for closed sets of states
//!
//! A transition table maps ordered `(from, to)` pairs of states to the one
//! named transition connecting them. Phasemap builds that table once from a
//! complete catalogue, rejects catalogues where two transitions claim the
//! same pair, and then answers lookups without further mutation.
//!
//! # Core Concepts
//!
//! - **State**: A member of a closed set, usually declared with `state_enum!`
//! - **Transition**: A named directed edge, declared with `transition_enum!`
//!   or supplied at runtime as a `NamedTransition`
//! - **Registry**: The immutable, validated lookup structure
//!
//! # Example
//!
//! ```rust
//! use phasemap::{state_enum, transition_enum, RegistryError, TransitionRegistry};
//!
//! state_enum! {
//!     pub enum Phase {
//!         Solid,
//!         Liquid,
//!         Gas,
//!     }
//! }
//!
//! transition_enum! {
//!     pub enum PhaseChange: Phase {
//!         Melt(Solid => Liquid),
//!         Freeze(Liquid => Solid),
//!         Boil(Liquid => Gas),
//!         Condense(Gas => Liquid),
//!         Sublime(Solid => Gas),
//!         Deposit(Gas => Solid),
//!     }
//! }
//!
//! let registry = TransitionRegistry::<PhaseChange>::from_catalogue()?;
//!
//! assert_eq!(registry.lookup(&Phase::Gas, &Phase::Solid), Some(&PhaseChange::Deposit));
//! assert_eq!(registry.lookup(&Phase::Solid, &Phase::Solid), None);
//! assert!(registry.is_complete(&[Phase::Solid, Phase::Liquid, Phase::Gas]));
//! # Ok::<(), RegistryError>(())
//! ```

pub mod builder;
pub mod core;
pub mod diagnostics;

// Re-export commonly used types
pub use crate::builder::RegistryBuilder;
pub use crate::core::{
    Enumerable, NamedTransition, RegistryError, State, Transition, TransitionRegistry,
};
