//! User-facing messages
//!
//! The page scripts render these verbatim under each field. Messages that
//! depend on a configured length are built by [`Rules`](crate::Rules).

/// Form data was not a mapping.
pub const INVALID_FORM_DATA: &str = "Invalid form data";

/// Email failed the shape check.
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Password missing, empty or not a string.
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Username missing, empty or not a string.
pub const USERNAME_REQUIRED: &str = "Username is required";

/// Username contains characters outside `[a-zA-Z0-9_]`.
pub const USERNAME_CHARSET: &str = "Username can only contain letters, numbers, and underscores";

/// Confirmation missing or different from the password.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Terms checkbox not ticked.
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions";

/// A required course wizard field is blank.
pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";

/// No level chosen on the level step.
pub const LEVEL_NOT_SELECTED: &str = "Please select your current level";

/// No learning style chosen on the learning style step.
pub const LEARNING_STYLE_NOT_SELECTED: &str = "Please select at least one learning style";

/// Submission passed validation.
pub const SUBMISSION_ACCEPTED: &str = "Form submitted successfully";

/// Submission failed validation.
pub const SUBMISSION_REJECTED: &str = "Form validation failed";
