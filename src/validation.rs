//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result`, but combining several of them keeps
//! every failure instead of stopping at the first one. The form composers use
//! it to run all field checks in one pass and report each failing field.
//!
//! # Examples
//!
//! ```
//! use formwater::Validation;
//!
//! let ok = Validation::<_, Vec<&str>>::success("validuser123");
//! let short = Validation::<&str, _>::failure(vec!["Username must be at least 3 characters long"]);
//!
//! assert!(ok.is_success());
//! assert!(short.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use formwater::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<(), _>::failure(vec!["email"]),
//!     Validation::<(), Vec<&str>>::success(()),
//!     Validation::<(), _>::failure(vec!["password"]),
//! )
//!     .validate_all();
//!
//! assert_eq!(result, Validation::Failure(vec!["email", "password"]));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (a `Semigroup` when combining)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use formwater::Validation;
    ///
    /// let v = Validation::from_result(Err::<(), _>("Invalid form data"));
    /// assert_eq!(v, Validation::Failure("Invalid form data"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// The form composers use this to file a field's messages under its name.
    ///
    /// ```
    /// use formwater::Validation;
    ///
    /// let v = Validation::<(), _>::failure(vec!["Passwords do not match"]);
    /// let keyed = v.map_err(|messages| ("confirmPassword", messages));
    /// assert_eq!(keyed, Validation::Failure(("confirmPassword", vec!["Passwords do not match"])));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Borrow the accumulated errors, if any
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs if this validation succeeded, so this is the
    /// short-circuiting counterpart of [`Validation::and`].
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine all validations in a tuple
    ///
    /// Delegates to [`ValidateAll`]; implemented for tuples of up to six
    /// validations.
    pub fn all<V>(validations: V) -> Self
    where
        V: ValidateAll<E, Output = T>,
    {
        validations.validate_all()
    }

    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// ```
    /// use formwater::Validation;
    ///
    /// let email = Validation::<(), _>::failure(vec!["email"]);
    /// let password = Validation::<(), _>::failure(vec!["password"]);
    /// assert_eq!(email.and(password), Validation::Failure(vec!["email", "password"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

/// Trait for combining multiple validations in a tuple
///
/// Every element is inspected; failures are combined left to right, so the
/// accumulated errors follow the order of the tuple.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

#[inline]
fn accumulate<E: Semigroup>(acc: &mut Option<E>, error: E) {
    *acc = Some(match acc.take() {
        Some(previous) => previous.combine(error),
        None => error,
    });
}

macro_rules! impl_validate_all {
    ($($T:ident $v:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validation<$T, E>,)+) {
            type Output = ($($T,)+);

            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($($v,)+) = self;
                let mut errors = None;
                $(
                    let $v = match $v {
                        Validation::Success(value) => Some(value),
                        Validation::Failure(error) => {
                            accumulate(&mut errors, error);
                            None
                        }
                    };
                )+
                match (errors, ($($v,)+)) {
                    (Some(errors), _) => Validation::Failure(errors),
                    (None, ($(Some($v),)+)) => Validation::Success(($($v,)+)),
                    (None, _) => unreachable!("every failed element records its errors"),
                }
            }
        }
    };
}

impl_validate_all!(T1 v1);
impl_validate_all!(T1 v1, T2 v2);
impl_validate_all!(T1 v1, T2 v2, T3 v3);
impl_validate_all!(T1 v1, T2 v2, T3 v3, T4 v4);
impl_validate_all!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
impl_validate_all!(T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6);

#[cfg(test)]
mod tests {
    use super::*;

    fn check(ok: bool, message: &'static str) -> Validation<(), Vec<&'static str>> {
        if ok {
            Validation::success(())
        } else {
            Validation::failure(vec![message])
        }
    }

    #[test]
    fn test_from_result_roundtrip() {
        assert_eq!(Validation::from_result(Ok::<_, ()>(3)).into_result(), Ok(3));
        assert_eq!(Validation::<(), _>::from_result(Err("bad")).into_result(), Err("bad"));
    }

    #[test]
    fn test_map_and_map_err() {
        let v = Validation::<_, Vec<&str>>::success(5).map(|x| x * 2);
        assert_eq!(v, Validation::Success(10));

        let v = Validation::<i32, _>::failure(vec!["a", "b"]).map_err(|e| e.len());
        assert_eq!(v, Validation::Failure(2));
    }

    #[test]
    fn test_errors_accessor() {
        assert_eq!(check(true, "x").errors(), None);
        assert_eq!(check(false, "x").errors(), Some(&vec!["x"]));
    }

    #[test]
    fn test_and_accumulates_both_failures() {
        let result = check(false, "first").and(check(false, "second"));
        assert_eq!(result, Validation::Failure(vec!["first", "second"]));
    }

    #[test]
    fn test_and_single_failure() {
        assert_eq!(
            check(true, "first").and(check(false, "second")),
            Validation::Failure(vec!["second"])
        );
        assert_eq!(
            check(false, "first").and(check(true, "second")),
            Validation::Failure(vec!["first"])
        );
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut ran = false;
        let result = check(false, "required").and_then(|_| {
            ran = true;
            check(false, "too short")
        });
        assert!(!ran);
        assert_eq!(result, Validation::Failure(vec!["required"]));
    }

    #[test]
    fn test_validate_all_success_keeps_values() {
        let result = (
            Validation::<_, Vec<&str>>::success(1),
            Validation::success("two"),
            Validation::success(3.0),
        )
            .validate_all();
        assert_eq!(result, Validation::Success((1, "two", 3.0)));
    }

    #[test]
    fn test_validate_all_never_stops_early() {
        let result = Validation::all((
            check(false, "username"),
            check(false, "email"),
            check(true, "password"),
            check(false, "confirmPassword"),
            check(false, "acceptTerms"),
        ));
        assert_eq!(
            result,
            Validation::Failure(vec!["username", "email", "confirmPassword", "acceptTerms"])
        );
    }

    #[test]
    fn test_validate_all_single_element() {
        assert_eq!((check(true, "x"),).validate_all(), Validation::Success(((),)));
        assert_eq!(
            (check(false, "x"),).validate_all(),
            Validation::Failure(vec!["x"])
        );
    }

    #[test]
    fn test_validate_all_six_elements() {
        let result = Validation::all((
            check(true, "1"),
            check(true, "2"),
            check(true, "3"),
            check(true, "4"),
            check(true, "5"),
            check(false, "6"),
        ));
        assert_eq!(result, Validation::Failure(vec!["6"]));
    }
}
