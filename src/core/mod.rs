//! Core registry types and logic.
//!
//! This module contains the pure core of the crate:
//! - State and transition definitions via the `State` and `Transition` traits
//! - The immutable `TransitionRegistry` and its construction errors
//!
//! Nothing in this module performs I/O. A built registry is never mutated,
//! so it can be shared across threads without locking.

mod error;
mod registry;
mod state;
mod transition;

pub use error::RegistryError;
pub use registry::TransitionRegistry;
pub use state::{Enumerable, State};
pub use transition::{NamedTransition, Transition};
