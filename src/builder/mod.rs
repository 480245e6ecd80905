//! Builder API for ergonomic registry construction.
//!
//! This module provides a fluent builder for catalogues assembled at
//! runtime and macros for catalogues declared as enums.

pub mod macros;
pub mod registry;

pub use registry::RegistryBuilder;
