//! Tests for validators and the built-in rule library.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tether::context::BindContext;
use tether::outcome::Outcome;
use tether::validation::{Validator, rules};

fn cx() -> BindContext {
    BindContext::new()
}

/// A validator that counts its invocations before passing or failing.
fn counting(counter: &Arc<AtomicUsize>, pass: bool, message: &str) -> Validator<String> {
    let counter = Arc::clone(counter);
    let message = message.to_string();
    Validator::from_fn(move |_value: &String, _cx| {
        counter.fetch_add(1, Ordering::SeqCst);
        if pass { Ok(()) } else { Err(message.clone()) }
    })
}

#[test]
fn test_passing_validator_echoes_input() {
    let validator = rules::min_length(3, "too short");
    let value = "hello".to_string();
    assert_eq!(validator.validate(&value, &cx()), Outcome::ok(value.clone()));
}

#[test]
fn test_failing_validator_reports_message() {
    let validator = rules::min_length(3, "too short");
    assert_eq!(
        validator.validate(&"hi".to_string(), &cx()),
        Outcome::error("too short")
    );
}

#[test]
fn test_computed_message_uses_failing_value() {
    let validator = Validator::with_message(
        |value: &String, _cx| value.len() <= 3,
        |value| format!("'{value}' is too long"),
    );
    assert_eq!(
        validator.validate(&"abcdef".to_string(), &cx()),
        Outcome::error("'abcdef' is too long")
    );
}

#[test]
fn test_composite_stops_at_first_error() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let third = Arc::new(AtomicUsize::new(0));

    let composite = Validator::all([
        counting(&first, true, "first"),
        counting(&second, false, "second failed"),
        counting(&third, true, "third"),
    ]);

    assert_eq!(
        composite.validate(&"x".to_string(), &cx()),
        Outcome::error("second failed")
    );
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(third.load(Ordering::SeqCst), 0);
}

#[test]
fn test_composite_passes_when_all_pass() {
    let composite = Validator::all([
        rules::required("required"),
        rules::min_length(2, "too short"),
    ]);
    let value = "ok".to_string();
    assert_eq!(composite.validate(&value, &cx()), Outcome::ok(value.clone()));
}

#[test]
fn test_required_rejects_blank() {
    let validator = rules::required("Name is required");
    assert!(validator.validate(&"   ".to_string(), &cx()).is_error());
    assert!(validator.validate(&"a".to_string(), &cx()).is_ok());
}

#[test]
fn test_email_rule_rejects_with_exact_message() {
    let validator = rules::email("This doesn't look like a valid email address");
    assert_eq!(
        validator.validate(&"not-an-email".to_string(), &cx()),
        Outcome::error("This doesn't look like a valid email address")
    );
}

#[test]
fn test_email_rule_with_domain_restriction() {
    let validator = Validator::all([
        rules::email("This doesn't look like a valid email address"),
        rules::custom(
            |value: &String| value.ends_with("@acme.com"),
            "Must be an acme.com address",
        ),
    ]);
    let value = "a@acme.com".to_string();
    assert_eq!(validator.validate(&value, &cx()), Outcome::ok(value.clone()));
    assert_eq!(
        validator.validate(&"a@other.com".to_string(), &cx()),
        Outcome::error("Must be an acme.com address")
    );
}

#[test]
fn test_email_rule_accepts_empty() {
    // Empty is valid; required() owns the non-empty check.
    let validator = rules::email("invalid");
    assert!(validator.validate(&String::new(), &cx()).is_ok());
}

#[test]
fn test_pattern_rule() {
    let validator = rules::pattern(r"^\d{4}$", "Enter a four-digit code");
    assert!(validator.validate(&"1234".to_string(), &cx()).is_ok());
    assert_eq!(
        validator.validate(&"12a4".to_string(), &cx()),
        Outcome::error("Enter a four-digit code")
    );
}

#[test]
fn test_range_rule() {
    let validator = rules::range(13..=130, "Age must be between 13 and 130");
    assert!(validator.validate(&36, &cx()).is_ok());
    assert!(validator.validate(&12, &cx()).is_error());
    assert!(validator.validate(&131, &cx()).is_error());
}

#[test]
fn test_equals_and_contains_rules() {
    let equals = rules::equals("secret", "Values must match");
    assert!(equals.validate(&"secret".to_string(), &cx()).is_ok());
    assert!(equals.validate(&"other".to_string(), &cx()).is_error());

    let contains = rules::contains("@", "Missing @");
    assert!(contains.validate(&"a@b".to_string(), &cx()).is_ok());
    assert!(contains.validate(&"ab".to_string(), &cx()).is_error());
}

#[test]
fn test_shared_validator_is_reusable() {
    // Cloned validators share the same rule and stay independent of any
    // particular binding.
    let validator = rules::min_length(2, "too short");
    let clone = validator.clone();
    assert!(validator.validate(&"ab".to_string(), &cx()).is_ok());
    assert!(clone.validate(&"a".to_string(), &cx()).is_error());
}
