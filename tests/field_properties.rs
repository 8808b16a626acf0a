//! Property-based tests for the field validators and composers

use formwater::{
    validate_email, validate_login_form, validate_password, validate_password_confirmation,
    validate_signup_form, validate_username, FieldErrors, Input, Semigroup,
};
use proptest::prelude::*;
use serde_json::json;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,12}"
}

proptest! {
    #[test]
    fn prop_email_without_at_is_invalid(s in "[^@]*") {
        prop_assert!(!validate_email(s.as_str()));
    }

    #[test]
    fn prop_email_shape_is_valid(
        local in "[a-z0-9._+-]{1,16}",
        domain in "[a-z0-9-]{1,16}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(validate_email(email.as_str()));
    }

    #[test]
    fn prop_email_with_inner_space_is_invalid(a in word(), b in word()) {
        let email = format!("{a} {b}@example.com");
        prop_assert!(!validate_email(email.as_str()));
    }

    #[test]
    fn prop_short_password_reports_length(p in "[ -~]{1,7}") {
        let result = validate_password(p.as_str());
        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.errors(), ["Password must be at least 8 characters long"]);
    }

    #[test]
    fn prop_long_password_is_valid(p in "[ -~]{8,64}") {
        prop_assert!(validate_password(p.as_str()).is_valid());
    }

    #[test]
    fn prop_well_formed_username_is_valid(u in "[a-zA-Z0-9_]{3,20}", pad in " {0,3}") {
        let padded = format!("{pad}{u}{pad}");
        prop_assert!(validate_username(padded.as_str()).is_valid());
    }

    #[test]
    fn prop_username_errors_are_ordered_subset(u in "[ -~]{1,30}") {
        let expected_order = [
            "Username must be at least 3 characters long",
            "Username must be no more than 20 characters long",
            "Username can only contain letters, numbers, and underscores",
        ];
        let result = validate_username(u.as_str());
        let positions: Vec<usize> = result
            .errors()
            .iter()
            .map(|m| expected_order.iter().position(|e| e == m).expect("known message"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn prop_confirmation_of_itself_matches(x in "[ -~]{1,32}") {
        prop_assert!(validate_password_confirmation(x.as_str(), x.as_str()));
    }

    #[test]
    fn prop_confirmation_of_different_values_fails(x in word(), y in word()) {
        prop_assume!(x != y);
        prop_assert!(!validate_password_confirmation(x.as_str(), y.as_str()));
    }

    #[test]
    fn prop_login_validity_matches_fields(email in "[ -~]{0,24}", password in "[ -~]{0,16}") {
        let result = validate_login_form(&json!({ "email": email, "password": password }));
        let expected = validate_email(email.as_str()) && validate_password(password.as_str()).is_valid();
        prop_assert_eq!(result.is_valid(), expected);
        prop_assert_eq!(result.field("email").is_some(), !validate_email(email.as_str()));
    }

    #[test]
    fn prop_signup_never_reports_general_for_objects(
        username in "[ -~]{0,24}",
        terms in any::<bool>(),
    ) {
        let result = validate_signup_form(&json!({ "username": username, "acceptTerms": terms }));
        prop_assert!(!result.is_valid());
        prop_assert!(result.field("general").is_none());
        prop_assert_eq!(result.field("acceptTerms").is_some(), !terms);
    }

    #[test]
    fn prop_field_errors_merge_is_associative(
        a in prop::collection::vec((0usize..4, word()), 0..5),
        b in prop::collection::vec((0usize..4, word()), 0..5),
        c in prop::collection::vec((0usize..4, word()), 0..5),
    ) {
        const NAMES: [&str; 4] = ["username", "email", "password", "acceptTerms"];
        let build = |entries: &[(usize, String)]| {
            let mut errors = FieldErrors::new();
            for (field, message) in entries {
                errors.insert(NAMES[*field], vec![message.clone()]);
            }
            errors
        };

        let left = build(&a).combine(build(&b)).combine(build(&c));
        let right = build(&a).combine(build(&b).combine(build(&c)));
        prop_assert_eq!(left, right);
    }
}

#[test]
fn non_string_inputs_never_pass() {
    let values = [json!(null), json!(true), json!(0), json!(12345678), json!(["a@b.c"]), json!({})];
    for value in &values {
        assert!(!validate_email(value));
        assert!(!validate_password(value).is_valid());
        assert!(!validate_username(value).is_valid());
    }
    assert!(!validate_email(Input::Undefined));
}
