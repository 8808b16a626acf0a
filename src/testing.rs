//! Assertion macros for validation results
//!
//! The macros work with both [`ValidationResult`](crate::ValidationResult)
//! and [`FormValidationResult`](crate::FormValidationResult), and print the
//! collected messages when an assertion fails.
//!
//! ```rust
//! use formwater::{assert_field_errors, assert_invalid, assert_valid};
//! use formwater::{validate_login_form, validate_username};
//! use serde_json::json;
//!
//! assert_valid!(validate_username("validuser123"));
//! assert_invalid!(validate_username("ab"));
//!
//! let result = validate_login_form(&json!({ "email": "user@example.com" }));
//! assert_field_errors!(result, "password", ["Password is required"]);
//! ```

/// Assert that a result has no errors.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match &$result {
            result if result.is_valid() => {}
            result => panic!("Expected valid result, got errors: {:?}", result.errors()),
        }
    };
}

/// Assert that a result has at least one error.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        if $result.is_valid() {
            panic!("Expected invalid result, got no errors");
        }
    };
}

/// Assert the exact messages recorded for one field of a form result.
#[macro_export]
macro_rules! assert_field_errors {
    ($result:expr, $field:expr, $expected:expr) => {
        match $result.field($field) {
            Some(messages) => assert_eq!(messages, $expected, "messages for field {:?}", $field),
            None => panic!(
                "Expected errors {:?} for field {:?}, got none (errors: {:?})",
                $expected,
                $field,
                $result.errors()
            ),
        }
    };
}
