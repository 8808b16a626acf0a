//! Submission outcomes
//!
//! The login and signup pages validate on submit and either hand the data
//! on or show the errors. [`submit`] runs the matching composer and returns
//! that decision.
//!
//! ```
//! use formwater::submit::{submit, FormKind, Submission};
//! use serde_json::json;
//!
//! let form = json!({ "email": "user@example.com", "password": "validpassword123" });
//! let outcome = submit(FormKind::Login, &form);
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(outcome.message(), "Form submitted successfully");
//! ```

use crate::form::{FormData, FormValidator};
use crate::input::Input;
use crate::messages::{SUBMISSION_ACCEPTED, SUBMISSION_REJECTED};
use crate::FieldErrors;

/// Which page the form came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// The login page.
    Login,
    /// The signup page.
    Signup,
}

/// The result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<'a> {
    /// Validation passed; the data can be handed on.
    Accepted {
        /// The submitted form data.
        data: FormData<'a>,
    },
    /// Validation failed.
    Rejected {
        /// Messages to show, by field.
        errors: FieldErrors,
    },
}

impl Submission<'_> {
    /// Whether the form was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    /// The banner message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Submission::Accepted { .. } => SUBMISSION_ACCEPTED,
            Submission::Rejected { .. } => SUBMISSION_REJECTED,
        }
    }

    /// The field errors of a rejected submission.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Submission::Accepted { .. } => None,
            Submission::Rejected { errors } => Some(errors),
        }
    }
}

/// Validate a form with the standard rules and decide its outcome.
pub fn submit<'a>(kind: FormKind, form: impl Into<Input<'a>>) -> Submission<'a> {
    submit_with(&FormValidator::default(), kind, form)
}

/// [`submit`] with an explicit validator.
pub fn submit_with<'a>(
    validator: &FormValidator,
    kind: FormKind,
    form: impl Into<Input<'a>>,
) -> Submission<'a> {
    let input = form.into();
    let result = match kind {
        FormKind::Login => validator.login(input),
        FormKind::Signup => validator.signup(input),
    };

    match FormData::from_input(input) {
        Some(data) if result.is_valid() => Submission::Accepted { data },
        _ => Submission::Rejected {
            errors: result.into_errors(),
        },
    }
}
