//! Result shapes returned by the validators
//!
//! Both result types derive validity from their errors, so "valid" and "has
//! no errors" cannot disagree. They serialize to the JSON shape the page
//! scripts render from:
//!
//! ```
//! use formwater::validate_login_form;
//! use serde_json::json;
//!
//! let result = validate_login_form(&json!({ "email": "nope", "password": "validpassword123" }));
//! assert_eq!(
//!     serde_json::to_value(&result).unwrap(),
//!     json!({ "isValid": false, "errors": { "email": ["Please enter a valid email address"] } })
//! );
//! ```

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::messages::INVALID_FORM_DATA;
use crate::{Semigroup, Validation};

/// Outcome of a single-field validator: an ordered list of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A result carrying one message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Build a result from a message list; an empty list is valid.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the result, returning its messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Convert into a [`Validation`] for composition.
    pub fn into_validation(self) -> Validation<(), Vec<String>> {
        if self.errors.is_empty() {
            Validation::success(())
        } else {
            Validation::failure(self.errors)
        }
    }

    /// File this result's messages under `field`.
    pub fn for_field(self, field: &str) -> Validation<(), FieldErrors> {
        self.into_validation()
            .map_err(|messages| FieldErrors::single(field, messages))
    }
}

impl<T> From<Validation<T, Vec<String>>> for ValidationResult {
    fn from(validation: Validation<T, Vec<String>>) -> Self {
        match validation {
            Validation::Success(_) => Self::valid(),
            Validation::Failure(errors) => Self::from_errors(errors),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Per-field error messages, keyed by field name in the order fields failed.
///
/// A field is present only if it has at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report with one field.
    pub fn single(field: impl Into<String>, messages: Vec<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, messages);
        errors
    }

    /// Add messages for a field, appending if the field is already present.
    ///
    /// An empty message list leaves the report unchanged.
    pub fn insert(&mut self, field: impl Into<String>, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.extend(messages),
            None => self.entries.push((field, messages)),
        }
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Whether a field failed.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Failing field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(field, messages)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, messages) in other.entries {
            self.insert(field, messages);
        }
        self
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Outcome of a form composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationResult {
    errors: FieldErrors,
}

impl FormValidationResult {
    /// Key used when the form data itself is unusable.
    pub const GENERAL: &'static str = "general";

    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// The result for form data that is not a mapping.
    pub fn malformed() -> Self {
        Self {
            errors: FieldErrors::single(Self::GENERAL, vec![INVALID_FORM_DATA.to_string()]),
        }
    }

    /// Build a result from a per-field report.
    pub fn from_errors(errors: FieldErrors) -> Self {
        Self { errors }
    }

    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The per-field report.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Messages for one field.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field)
    }

    /// Consume the result, returning its report.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

impl<T> From<Validation<T, FieldErrors>> for FormValidationResult {
    fn from(validation: Validation<T, FieldErrors>) -> Self {
        match validation {
            Validation::Success(_) => Self::valid(),
            Validation::Failure(errors) => Self::from_errors(errors),
        }
    }
}

impl Serialize for FormValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
