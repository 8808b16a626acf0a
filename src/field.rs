//! Field validators
//!
//! Each validator checks one value of unknown type against one rule set and
//! never fails the call itself: wrong types, `null` and missing values come
//! back as an invalid result. Inputs are only borrowed.
//!
//! The plain functions use [`Rules::STANDARD`]; the `_with` forms take
//! explicit rules.
//!
//! ```
//! use formwater::{validate_email, validate_password, validate_username, Input};
//!
//! assert!(validate_email("user@example.com"));
//! assert!(!validate_email(Input::Null));
//!
//! assert_eq!(
//!     validate_password("short").errors(),
//!     ["Password must be at least 8 characters long"]
//! );
//! assert!(validate_username("validuser123").is_valid());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::input::Input;
use crate::messages::{PASSWORD_REQUIRED, USERNAME_CHARSET, USERNAME_REQUIRED};
use crate::predicate::{all_chars, len_max, len_min, matches, not_empty, validate, PredicateExt};
use crate::{Rules, Validation, ValidationResult};

/// `<local>@<domain>.<tld>`, each part free of whitespace and `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check that a value is a string shaped like an email address.
///
/// Surrounding whitespace is ignored; whitespace inside the address is not.
pub fn validate_email<'a>(value: impl Into<Input<'a>>) -> bool {
    let Some(email) = value.into().as_filled_str() else {
        return false;
    };
    validate(email.trim(), matches(&EMAIL_PATTERN), ()).is_success()
}

/// Check that a password is present and long enough.
///
/// A missing, empty or non-string password reports only
/// "Password is required"; the length rule is not evaluated for it.
pub fn validate_password<'a>(value: impl Into<Input<'a>>) -> ValidationResult {
    validate_password_with(value, &Rules::STANDARD)
}

/// [`validate_password`] with explicit rules.
pub fn validate_password_with<'a>(value: impl Into<Input<'a>>, rules: &Rules) -> ValidationResult {
    let Some(password) = value.into().as_filled_str() else {
        return ValidationResult::invalid(PASSWORD_REQUIRED);
    };

    validate(
        password,
        len_min(rules.password_min_len),
        vec![rules.password_too_short()],
    )
    .into()
}

/// Check a username's length and character set.
///
/// The trimmed value is checked, and every rule that fails contributes a
/// message: a blank username is both too short and has no valid characters.
pub fn validate_username<'a>(value: impl Into<Input<'a>>) -> ValidationResult {
    validate_username_with(value, &Rules::STANDARD)
}

/// [`validate_username`] with explicit rules.
pub fn validate_username_with<'a>(value: impl Into<Input<'a>>, rules: &Rules) -> ValidationResult {
    let Some(username) = value.into().as_filled_str() else {
        return ValidationResult::invalid(USERNAME_REQUIRED);
    };
    let username = username.trim();

    Validation::all((
        validate(
            username,
            len_min(rules.username_min_len),
            vec![rules.username_too_short()],
        ),
        validate(
            username,
            len_max(rules.username_max_len),
            vec![rules.username_too_long()],
        ),
        validate(
            username,
            PredicateExt::<str>::and(not_empty(), all_chars(is_username_char)),
            vec![USERNAME_CHARSET.to_string()],
        ),
    ))
    .into()
}

/// Check that a confirmation matches the password exactly.
///
/// Both values must be truthy; they are then compared without trimming or
/// type coercion.
pub fn validate_password_confirmation<'a, 'b>(
    password: impl Into<Input<'a>>,
    confirmation: impl Into<Input<'b>>,
) -> bool {
    let password = password.into();
    let confirmation = confirmation.into();

    password.is_truthy() && confirmation.is_truthy() && password.strict_eq(&confirmation)
}
