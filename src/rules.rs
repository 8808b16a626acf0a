//! Length limits applied by the field validators
//!
//! The defaults are the limits the signup and login pages enforce. A
//! deployment can tighten them by loading a JSON document; missing keys keep
//! their defaults.
//!
//! ```
//! use formwater::Rules;
//!
//! let rules = Rules::from_json_str(r#"{ "passwordMinLen": 12 }"#).unwrap();
//! assert_eq!(rules.password_min_len, 12);
//! assert_eq!(rules.username_max_len, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length limits for passwords and usernames.
///
/// Lengths count UTF-16 code units. Username limits apply to the trimmed
/// value, the password limit to the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Rules {
    /// Minimum password length.
    pub password_min_len: usize,
    /// Minimum username length.
    pub username_min_len: usize,
    /// Maximum username length.
    pub username_max_len: usize,
}

impl Rules {
    /// The limits used by the plain `validate_*` functions.
    pub const STANDARD: Rules = Rules {
        password_min_len: 8,
        username_min_len: 3,
        username_max_len: 20,
    };

    /// Parse rules from a JSON document and check they are satisfiable.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.checked()
    }

    /// Build rules from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let rules: Rules = serde_json::from_value(value)?;
        rules.checked()
    }

    fn checked(self) -> Result<Self> {
        if self.username_min_len > self.username_max_len {
            return Err(Error::InvertedUsernameBounds {
                min: self.username_min_len,
                max: self.username_max_len,
            });
        }
        Ok(self)
    }

    pub(crate) fn password_too_short(&self) -> String {
        format!(
            "Password must be at least {} characters long",
            self.password_min_len
        )
    }

    pub(crate) fn username_too_short(&self) -> String {
        format!(
            "Username must be at least {} characters long",
            self.username_min_len
        )
    }

    pub(crate) fn username_too_long(&self) -> String {
        format!(
            "Username must be no more than {} characters long",
            self.username_max_len
        )
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::STANDARD
    }
}
