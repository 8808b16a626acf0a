//! Course-creation wizard steps
//!
//! The dashboard's course wizard validates the current step before letting
//! the learner move on. Unlike the login and signup composers, a step stops
//! at its first problem: the wizard shows one notification at a time.
//!
//! ```
//! use formwater::course::{validate_course_step, LEVEL_STEP};
//! use serde_json::json;
//!
//! let form = json!({ "topic": "Rust ownership", "goal": "  " });
//! let result = validate_course_step(1, &["topic", "goal"], &form);
//! assert_eq!(result.errors(), ["Please fill in all required fields"]);
//!
//! let form = json!({ "level": "beginner" });
//! assert!(validate_course_step(LEVEL_STEP, &[], &form).is_valid());
//! ```

use crate::form::FormData;
use crate::input::Input;
use crate::messages::{
    INVALID_FORM_DATA, LEARNING_STYLE_NOT_SELECTED, LEVEL_NOT_SELECTED, REQUIRED_FIELDS_MISSING,
};
use crate::predicate::{is_blank, validate, PredicateExt};
use crate::{Validation, ValidationResult};

/// Step on which the learner picks their current level.
pub const LEVEL_STEP: usize = 2;

/// Step on which the learner picks one or more learning styles.
pub const LEARNING_STYLE_STEP: usize = 3;

/// Field holding the selected level.
pub const LEVEL_FIELD: &str = "level";

/// Field holding the selected learning styles.
pub const LEARNING_STYLE_FIELD: &str = "learningStyle";

/// Whether a value is a string with non-whitespace content.
fn is_filled(input: Input<'_>) -> bool {
    input
        .as_str()
        .is_some_and(|s| validate(s, is_blank().not(), ()).is_success())
}

/// Whether a choice field holds at least one selection.
///
/// Checkbox groups submit a list; a single selection may arrive as a string.
fn has_selection(input: Input<'_>) -> bool {
    match input {
        Input::Array(items) => items.iter().any(|item| Input::from(item).is_truthy()),
        other => is_filled(other),
    }
}

fn require(passed: bool, message: &str) -> Validation<(), String> {
    if passed {
        Validation::success(())
    } else {
        Validation::failure(message.to_string())
    }
}

/// Validate one wizard step (numbered from 1).
///
/// Checks run in order and the first failure is the only one reported:
/// the form data must be a mapping, every field in `required` must be
/// filled in, the level step needs a level and the learning style step
/// needs at least one style.
pub fn validate_course_step<'a>(
    step: usize,
    required: &[&str],
    form: impl Into<Input<'a>>,
) -> ValidationResult {
    let Some(form) = FormData::from_input(form.into()) else {
        return ValidationResult::invalid(INVALID_FORM_DATA);
    };

    let outcome = require(
        required.iter().all(|name| is_filled(form.field(name))),
        REQUIRED_FIELDS_MISSING,
    )
    .and_then(|()| {
        require(
            step != LEVEL_STEP || is_filled(form.field(LEVEL_FIELD)),
            LEVEL_NOT_SELECTED,
        )
    })
    .and_then(|()| {
        require(
            step != LEARNING_STYLE_STEP || has_selection(form.field(LEARNING_STYLE_FIELD)),
            LEARNING_STYLE_NOT_SELECTED,
        )
    });

    outcome.map_err(|message| vec![message]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_with_all_required_fields() {
        let form = json!({ "title": "Intro to Rust", "goal": "Ship a CLI" });
        assert!(validate_course_step(1, &["title", "goal"], &form).is_valid());
    }

    #[test]
    fn test_blank_or_missing_required_field() {
        for form in [
            json!({ "title": "Intro to Rust" }),
            json!({ "title": "Intro to Rust", "goal": "" }),
            json!({ "title": "Intro to Rust", "goal": " \n\t" }),
            json!({ "title": "Intro to Rust", "goal": null }),
            json!({ "title": "Intro to Rust", "goal": 7 }),
        ] {
            assert_eq!(
                validate_course_step(1, &["title", "goal"], &form).errors(),
                ["Please fill in all required fields"],
                "{form}"
            );
        }
    }

    #[test]
    fn test_level_step() {
        assert_eq!(
            validate_course_step(LEVEL_STEP, &[], &json!({})).errors(),
            ["Please select your current level"]
        );
        assert!(validate_course_step(LEVEL_STEP, &[], &json!({ "level": "advanced" })).is_valid());
        // the level only matters on its own step
        assert!(validate_course_step(1, &[], &json!({})).is_valid());
    }

    #[test]
    fn test_required_fields_checked_before_level() {
        let result = validate_course_step(LEVEL_STEP, &["hoursPerWeek"], &json!({}));
        assert_eq!(result.errors(), ["Please fill in all required fields"]);
    }

    #[test]
    fn test_learning_style_step() {
        let step = LEARNING_STYLE_STEP;
        for form in [
            json!({}),
            json!({ "learningStyle": [] }),
            json!({ "learningStyle": [""] }),
            json!({ "learningStyle": "  " }),
        ] {
            assert_eq!(
                validate_course_step(step, &[], &form).errors(),
                ["Please select at least one learning style"],
                "{form}"
            );
        }

        for form in [
            json!({ "learningStyle": ["visual", "hands-on"] }),
            json!({ "learningStyle": "reading" }),
        ] {
            assert!(validate_course_step(step, &[], &form).is_valid(), "{form}");
        }
    }

    #[test]
    fn test_malformed_form_data() {
        assert_eq!(
            validate_course_step(1, &["title"], Input::Null).errors(),
            ["Invalid form data"]
        );
    }
}
