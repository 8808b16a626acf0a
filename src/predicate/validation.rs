//! Validation integration for predicates
//!
//! Lifts a predicate check into a [`Validation`] so independent checks can be
//! accumulated with [`Validation::all`].

use super::combinators::Predicate;
use crate::Validation;

/// Validate a borrowed value using a predicate.
///
/// Returns `Validation::success(())` if the predicate is satisfied,
/// otherwise `Validation::failure(error)`.
///
/// ```rust
/// use formwater::{Validation, predicate::*};
///
/// let result = validate("ab", len_min(3), vec!["too short"]);
/// assert_eq!(result, Validation::failure(vec!["too short"]));
/// ```
pub fn validate<T, E, P>(value: &T, predicate: P, error: E) -> Validation<(), E>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Validation::success(())
    } else {
        Validation::failure(error)
    }
}

/// Validate a borrowed value with an error factory.
///
/// The factory only runs when the predicate fails, so building a formatted
/// message costs nothing on the success path.
pub fn validate_with<T, E, P, F>(value: &T, predicate: P, error_fn: F) -> Validation<(), E>
where
    T: ?Sized,
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(value) {
        Validation::success(())
    } else {
        Validation::failure(error_fn(value))
    }
}
