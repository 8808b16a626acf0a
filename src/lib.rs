//! # Formwater
//!
//! Pure, accumulating validation for the login, signup and course-creation
//! forms of a learning platform.
//!
//! Every validator is a synchronous function of its arguments: it never
//! performs I/O, never panics on bad input, and reports problems as data.
//! Form composers run every field check and return all failing fields at
//! once, keyed by field name, in the order the checks ran.
//!
//! ## Quick Example
//!
//! ```rust
//! use formwater::{validate_login_form, validate_signup_form};
//! use serde_json::json;
//!
//! let login = validate_login_form(&json!({
//!     "email": "user@example.com",
//!     "password": "validpassword123",
//! }));
//! assert!(login.is_valid());
//!
//! let signup = validate_signup_form(&json!({
//!     "username": "validuser123",
//!     "email": "user@example.com",
//!     "password": "validpassword123",
//!     "confirmPassword": "validpassword124",
//!     "acceptTerms": true,
//! }));
//! assert_eq!(
//!     signup.field("confirmPassword").unwrap(),
//!     ["Passwords do not match"]
//! );
//! ```
//!
//! Values of unknown type enter through [`Input`]; anything that is not a
//! string where a string is expected is simply invalid:
//!
//! ```rust
//! use formwater::{validate_email, validate_password, Input};
//!
//! assert!(!validate_email(Input::Null));
//! assert_eq!(validate_password(Input::Undefined).errors(), ["Password is required"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every form validated.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod course;
pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod messages;
pub mod predicate;
pub mod result;
pub mod rules;
pub mod semigroup;
pub mod submit;
pub mod testing;
pub mod validation;

// Re-exports
pub use course::validate_course_step;
pub use error::Error;
pub use field::{
    validate_email, validate_password, validate_password_confirmation, validate_password_with,
    validate_username, validate_username_with,
};
pub use form::{validate_login_form, validate_signup_form, FormData, FormValidator};
pub use input::Input;
pub use result::{FieldErrors, FormValidationResult, ValidationResult};
pub use rules::Rules;
pub use semigroup::Semigroup;
pub use submit::{submit, FormKind, Submission};
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::field::{
        validate_email, validate_password, validate_password_confirmation, validate_username,
    };
    pub use crate::form::{validate_login_form, validate_signup_form, FormValidator};
    pub use crate::input::Input;
    pub use crate::result::{FieldErrors, FormValidationResult, ValidationResult};
    pub use crate::rules::Rules;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
