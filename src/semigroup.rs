//! Semigroup trait for associative error accumulation
//!
//! A Semigroup is a type with an associative binary operation. Form validation
//! relies on it to merge the errors of independent checks instead of stopping
//! at the first failing one.
//!
//! For a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use formwater::Semigroup;
//!
//! let first = vec!["Username must be at least 3 characters long"];
//! let second = vec!["Username can only contain letters, numbers, and underscores"];
//! assert_eq!(first.combine(second).len(), 2);
//! ```
//!
//! Per-field reports ([`FieldErrors`](crate::FieldErrors)) are a Semigroup too:
//! merging two reports keeps the first report's field order and appends
//! messages for fields present in both.

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the original is needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use formwater::Semigroup;
    ///
    /// let messages = vec!["a".to_string()].combine(vec!["b".to_string()]);
    /// assert_eq!(messages, vec!["a", "b"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
