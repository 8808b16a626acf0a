//! Form composers
//!
//! A composer takes the raw form data of one page, runs every field validator
//! that applies, and merges the outcomes into one [`FormValidationResult`].
//! All checks run on every call; a failing field never hides another.
//!
//! The only early return is for form data that is not a mapping at all,
//! which is reported under the `general` key.
//!
//! # Example
//!
//! ```
//! use formwater::validate_signup_form;
//! use serde_json::json;
//!
//! let result = validate_signup_form(&json!({
//!     "username": "ab",
//!     "email": "invalid-email",
//!     "password": "short",
//!     "confirmPassword": "different",
//!     "acceptTerms": false,
//! }));
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.errors().fields().collect::<Vec<_>>(),
//!     ["username", "email", "password", "confirmPassword", "acceptTerms"]
//! );
//! ```

use serde_json::{Map, Value};

use crate::field::{
    validate_email, validate_password_confirmation, validate_password_with,
    validate_username_with,
};
use crate::input::Input;
use crate::messages::{INVALID_EMAIL, PASSWORDS_DO_NOT_MATCH, TERMS_NOT_ACCEPTED};
use crate::{FieldErrors, FormValidationResult, Rules, Validation};

/// Field names the login and signup pages submit.
pub mod fields {
    /// Email address (login, signup).
    pub const EMAIL: &str = "email";
    /// Password (login, signup).
    pub const PASSWORD: &str = "password";
    /// Username (signup).
    pub const USERNAME: &str = "username";
    /// Password confirmation (signup).
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    /// Terms and conditions checkbox (signup).
    pub const ACCEPT_TERMS: &str = "acceptTerms";
}

/// A well-formed form submission: a mapping of field name to raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormData<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FormData<'a> {
    /// Accept the value if it is a mapping.
    pub fn from_input(input: Input<'a>) -> Option<Self> {
        input.as_object().map(|fields| FormData { fields })
    }

    /// The raw value of a field; a missing field is [`Input::Undefined`].
    pub fn field(&self, name: &str) -> Input<'a> {
        Input::from(self.fields.get(name))
    }

    /// The underlying mapping.
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.fields
    }
}

type FieldCheck = Validation<(), FieldErrors>;

fn check(passed: bool, field: &str, message: &str) -> FieldCheck {
    if passed {
        Validation::success(())
    } else {
        Validation::failure(FieldErrors::single(field, vec![message.to_string()]))
    }
}

/// Validates the login and signup forms against a set of [`Rules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidator {
    rules: Rules,
}

impl FormValidator {
    /// A validator using the given rules.
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The rules in use.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Validate the login form: `email` and `password`.
    pub fn login<'a>(&self, form: impl Into<Input<'a>>) -> FormValidationResult {
        let Some(form) = FormData::from_input(form.into()) else {
            return malformed("login");
        };

        let outcome = Validation::all((self.email(&form), self.password(&form)));
        finish("login", outcome)
    }

    /// Validate the signup form: `username`, `email`, `password`,
    /// `confirmPassword` and `acceptTerms`.
    ///
    /// The confirmation is compared even when the password itself fails.
    pub fn signup<'a>(&self, form: impl Into<Input<'a>>) -> FormValidationResult {
        let Some(form) = FormData::from_input(form.into()) else {
            return malformed("signup");
        };

        let outcome = Validation::all((
            validate_username_with(form.field(fields::USERNAME), &self.rules)
                .for_field(fields::USERNAME),
            self.email(&form),
            self.password(&form),
            check(
                validate_password_confirmation(
                    form.field(fields::PASSWORD),
                    form.field(fields::CONFIRM_PASSWORD),
                ),
                fields::CONFIRM_PASSWORD,
                PASSWORDS_DO_NOT_MATCH,
            ),
            check(
                form.field(fields::ACCEPT_TERMS).is_truthy(),
                fields::ACCEPT_TERMS,
                TERMS_NOT_ACCEPTED,
            ),
        ));
        finish("signup", outcome)
    }

    fn email(&self, form: &FormData<'_>) -> FieldCheck {
        check(
            validate_email(form.field(fields::EMAIL)),
            fields::EMAIL,
            INVALID_EMAIL,
        )
    }

    fn password(&self, form: &FormData<'_>) -> FieldCheck {
        validate_password_with(form.field(fields::PASSWORD), &self.rules)
            .for_field(fields::PASSWORD)
    }
}

fn malformed(form: &'static str) -> FormValidationResult {
    #[cfg(feature = "tracing")]
    tracing::debug!(form, "form data is not a mapping");
    #[cfg(not(feature = "tracing"))]
    let _ = form;

    FormValidationResult::malformed()
}

fn finish<T>(form: &'static str, outcome: Validation<T, FieldErrors>) -> FormValidationResult {
    let result = FormValidationResult::from(outcome);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        form,
        valid = result.is_valid(),
        failed = ?result.errors().fields().collect::<Vec<_>>(),
        "form validated"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = form;

    result
}

/// Validate login form data with the standard rules.
pub fn validate_login_form<'a>(form: impl Into<Input<'a>>) -> FormValidationResult {
    FormValidator::default().login(form)
}

/// Validate signup form data with the standard rules.
pub fn validate_signup_form<'a>(form: impl Into<Input<'a>>) -> FormValidationResult {
    FormValidator::default().signup(form)
}
