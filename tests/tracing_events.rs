//! Log events emitted by the composers when the `tracing` feature is enabled

#![cfg(feature = "tracing")]

use formwater::{validate_login_form, validate_signup_form, Input};
use serde_json::json;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn valid_login_logs_success() {
    let result = validate_login_form(&json!({
        "email": "user@example.com",
        "password": "validpassword123",
    }));

    assert!(result.is_valid());
    assert!(logs_contain("form validated"));
    assert!(logs_contain("form=\"login\""));
    assert!(logs_contain("valid=true"));
}

#[traced_test]
#[test]
fn failed_signup_logs_failing_fields() {
    let result = validate_signup_form(&json!({ "username": "ab" }));

    assert!(!result.is_valid());
    assert!(logs_contain("form=\"signup\""));
    assert!(logs_contain("valid=false"));
    assert!(logs_contain("confirmPassword"));
}

#[traced_test]
#[test]
fn malformed_form_data_is_logged() {
    let result = validate_login_form(Input::Null);

    assert!(!result.is_valid());
    assert!(logs_contain("form data is not a mapping"));
}
