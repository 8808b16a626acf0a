//! Predicate combinators for composable validation logic
//!
//! Field rules are built from small string predicates combined with `and` and
//! `not`, then lifted into [`Validation`](crate::Validation) with
//! [`validate`] so that independent rules accumulate their messages.
//!
//! # Example
//!
//! ```rust
//! use formwater::{Validation, predicate::*};
//!
//! let word_chars = all_chars(|c: char| c.is_ascii_alphanumeric() || c == '_');
//! assert!(word_chars.check("john_doe"));
//! assert!(!word_chars.check("john-doe"));
//!
//! let result = Validation::all((
//!     validate("ab", len_min(3), vec!["too short"]),
//!     validate("ab", len_max(20), vec!["too long"]),
//! ));
//! assert_eq!(result, Validation::failure(vec!["too short"]));
//! ```

mod combinators;
mod string;
mod validation;

pub use combinators::{And, Not, Predicate, PredicateExt};

pub use string::{
    all_chars, is_blank, len_between, len_max, len_min, matches, not_empty, utf16_len, AllChars,
    Blank, LenBetween, Matches, NotEmpty,
};

pub use validation::{validate, validate_with};
