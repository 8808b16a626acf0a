//! Untyped input values
//!
//! Form values arrive from the browser with no guaranteed shape: a field may
//! be missing, `null`, a boolean, a number or a string. [`Input`] is a
//! borrowed, tagged view over such a value. Validators match on it and only
//! apply string rules to the [`Input::Str`] case.
//!
//! Truthiness and equality follow the rules a browser script applies to the
//! same values, so `""`, `0`, `false`, `null` and a missing field are all
//! "not filled in".
//!
//! # Examples
//!
//! ```
//! use formwater::Input;
//! use serde_json::json;
//!
//! let form = json!({ "acceptTerms": true, "password": "" });
//!
//! assert!(Input::from(form.get("acceptTerms")).is_truthy());
//! assert!(!Input::from(form.get("password")).is_truthy());
//! assert_eq!(Input::from(form.get("username")), Input::Undefined);
//! ```

use serde_json::{Map, Value};

/// A borrowed view of a value of unknown type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// The value is absent (a missing key).
    Undefined,
    /// An explicit `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number; `NaN` stands in for numbers that have no `f64` form.
    Number(f64),
    /// A string, untrimmed.
    Str(&'a str),
    /// A list of values.
    Array(&'a [Value]),
    /// A mapping of names to values.
    Object(&'a Map<String, Value>),
}

impl<'a> Input<'a> {
    /// Whether the value counts as "present" in a boolean context.
    ///
    /// `Undefined`, `Null`, `false`, `0`, `-0`, `NaN` and `""` are falsy;
    /// everything else is truthy, including `"false"`, `"0"` and empty
    /// arrays or objects.
    pub fn is_truthy(&self) -> bool {
        match *self {
            Input::Undefined | Input::Null => false,
            Input::Bool(b) => b,
            Input::Number(n) => n != 0.0 && !n.is_nan(),
            Input::Str(s) => !s.is_empty(),
            Input::Array(_) | Input::Object(_) => true,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Input::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The string contents, if this is a non-empty string.
    ///
    /// This is the "is a string and is filled in" guard every string
    /// validator starts with.
    pub fn as_filled_str(&self) -> Option<&'a str> {
        self.as_str().filter(|s| !s.is_empty())
    }

    /// The mapping, if this is an object.
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            Input::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Strict equality without type coercion.
    ///
    /// Strings, numbers and booleans compare by value. Arrays and objects
    /// compare by identity, so two separately submitted values never match
    /// even if their contents do.
    pub fn strict_eq(&self, other: &Input<'_>) -> bool {
        match (*self, *other) {
            (Input::Undefined, Input::Undefined) | (Input::Null, Input::Null) => true,
            (Input::Bool(a), Input::Bool(b)) => a == b,
            (Input::Number(a), Input::Number(b)) => a == b,
            (Input::Str(a), Input::Str(b)) => a == b,
            (Input::Array(a), Input::Array(b)) => std::ptr::eq(a, b),
            (Input::Object(a), Input::Object(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }

    /// A short name for the kind of value, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Undefined => "undefined",
            Input::Null => "null",
            Input::Bool(_) => "boolean",
            Input::Number(_) => "number",
            Input::Str(_) => "string",
            Input::Array(_) => "array",
            Input::Object(_) => "object",
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(*b),
            Value::Number(n) => Input::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Input::Str(s),
            Value::Array(items) => Input::Array(items),
            Value::Object(map) => Input::Object(map),
        }
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Input::Undefined, Input::from)
    }
}

impl<'a> From<&'a Map<String, Value>> for Input<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Input::Object(map)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Str(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Str(value)
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Input::Undefined, Input::Str)
    }
}

impl From<bool> for Input<'_> {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Number(value)
    }
}

impl From<()> for Input<'_> {
    fn from(_: ()) -> Self {
        Input::Null
    }
}
