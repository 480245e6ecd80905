//! Accumulating checks over transition catalogues.
//!
//! `TransitionRegistry::build` stops at the first inconsistency. The checks
//! here use Stillwater's `Validation` to collect every problem in one pass,
//! which is what you want when reporting on a hand-maintained catalogue.
//!
//! # Example
//!
//! ```rust
//! use phasemap::core::NamedTransition;
//! use phasemap::diagnostics::validate_catalogue;
//! use stillwater::validation::Validation;
//!
//! let catalogue = vec![
//!     NamedTransition::new("melt", "solid".to_string(), "liquid".to_string()),
//!     NamedTransition::new("thaw", "solid".to_string(), "liquid".to_string()),
//!     NamedTransition::new("melt", "gas".to_string(), "solid".to_string()),
//! ];
//!
//! match validate_catalogue(&catalogue) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("catalogue has duplicates"),
//! }
//! ```

use crate::core::{RegistryError, State, Transition};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a catalogue for every duplicate pair and every duplicate name.
///
/// Each later transition that reuses a `(from, to)` pair is reported against
/// the first transition that claimed it. A catalogue that passes here builds
/// successfully.
pub fn validate_catalogue<'a, T, I>(transitions: I) -> Validation<(), NonEmptyVec<RegistryError>>
where
    T: Transition + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut first_by_pair: HashMap<(&T::State, &T::State), &str> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut checks: Vec<Validation<(), NonEmptyVec<RegistryError>>> = Vec::new();

    for transition in transitions {
        let pair = (transition.from(), transition.to());
        match first_by_pair.get(&pair) {
            Some(first) => checks.push(Validation::fail(RegistryError::DuplicateTransition {
                from: pair.0.name().to_string(),
                to: pair.1.name().to_string(),
                first: first.to_string(),
                second: transition.name().to_string(),
            })),
            None => {
                first_by_pair.insert(pair, transition.name());
            }
        }

        let seen = names.entry(transition.name()).or_insert(0);
        *seen += 1;
        // Report each repeated name once.
        if *seen == 2 {
            checks.push(Validation::fail(RegistryError::DuplicateName {
                name: transition.name().to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
