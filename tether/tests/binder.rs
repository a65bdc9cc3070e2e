//! Tests for binder batch passes, write policies, and cross-field wiring.

use std::sync::Arc;

use chrono::NaiveDate;
use tether::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    email: String,
}

/// Binder with a passing "name" binding and a failing "email" binding.
fn mixed_binder(policy: WritePolicy) -> (Binder<Person>, TextField, TextField) {
    let name = TextField::with_value("after".to_string());
    let email = TextField::with_value("not-an-email".to_string());

    let mut binder: Binder<Person> = Binder::new(policy);
    binder
        .for_field(&name, "name")
        .required("Name is required")
        .bind(|p: &Person| p.name.clone(), |p, v| p.name = v);
    binder
        .for_field(&email, "email")
        .email("This doesn't look like a valid email address")
        .bind(|p: &Person| p.email.clone(), |p, v| p.email = v);

    (binder, name, email)
}

#[test]
fn test_all_or_nothing_discards_sibling_mutations() {
    let (binder, _name, _email) = mixed_binder(WritePolicy::AllOrNothing);
    let mut person = Person {
        name: "before".to_string(),
        email: "before@acme.com".to_string(),
    };

    let errors = binder.write_to(&mut person).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
    assert_eq!(
        errors[0].message,
        "This doesn't look like a valid email address"
    );
    // The passing binding's mutation was withheld along with the rest.
    assert_eq!(person.name, "before");
    assert_eq!(person.email, "before@acme.com");
}

#[test]
fn test_best_effort_applies_passing_bindings() {
    let (binder, _name, _email) = mixed_binder(WritePolicy::BestEffort);
    let mut person = Person {
        name: "before".to_string(),
        email: "before@acme.com".to_string(),
    };

    let errors = binder.write_to(&mut person).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
    // The passing binding was applied despite the sibling failure.
    assert_eq!(person.name, "after");
    assert_eq!(person.email, "before@acme.com");
}

#[test]
fn test_every_binding_reports_status_during_batch_write() {
    let (binder, _name, _email) = mixed_binder(WritePolicy::AllOrNothing);
    let mut person = Person::default();
    let _ = binder.write_to(&mut person);

    let statuses = binder.statuses();
    assert_eq!(statuses.len(), 2);
    assert!(statuses[0].is_valid());
    assert!(statuses[1].is_invalid());
    assert!(!binder.is_valid());
}

#[test]
fn test_write_with_no_object_is_rejected() {
    let (mut binder, _name, _email) = mixed_binder(WritePolicy::AllOrNothing);
    assert!(matches!(binder.write(), Err(WriteError::NoObjectLoaded)));
}

#[test]
fn test_write_updates_loaded_object() {
    let (mut binder, name, email) = mixed_binder(WritePolicy::AllOrNothing);
    binder.read_object(Person {
        name: "ada".to_string(),
        email: "ada@acme.com".to_string(),
    });

    name.set_value("grace".to_string());
    email.set_value("grace@acme.com".to_string());
    binder.write().unwrap();

    let person = binder.object().unwrap();
    assert_eq!(person.name, "grace");
    assert_eq!(person.email, "grace@acme.com");
}

#[test]
fn test_read_object_presents_values_and_clears_statuses() {
    let (mut binder, name, email) = mixed_binder(WritePolicy::AllOrNothing);

    // Leave both bindings with a known status first.
    let mut person = Person::default();
    let _ = binder.write_to(&mut person);
    assert!(!binder.is_valid());

    binder.read_object(Person {
        name: "ada".to_string(),
        email: "ada@acme.com".to_string(),
    });

    assert_eq!(name.value(), "ada");
    assert_eq!(email.value(), "ada@acme.com");
    // Loaded values are presumed valid, not yet re-checked.
    assert!(
        binder
            .statuses()
            .iter()
            .all(|status| *status == ValidationStatus::Unvalidated)
    );
    assert!(binder.is_valid());
}

#[test]
fn test_take_object_unloads() {
    let (mut binder, _name, _email) = mixed_binder(WritePolicy::AllOrNothing);
    binder.read_object(Person::default());
    assert!(binder.object().is_some());
    assert!(binder.take_object().is_some());
    assert!(binder.object().is_none());
    assert!(matches!(binder.write(), Err(WriteError::NoObjectLoaded)));
}

#[test]
fn test_validate_all_aggregates_failures() {
    let (binder, _name, email) = mixed_binder(WritePolicy::AllOrNothing);

    let errors = binder.validate_all().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "email: This doesn't look like a valid email address");

    email.set_value("ada@acme.com".to_string());
    assert!(binder.validate_all().is_ok());
}

#[test]
fn test_duplicate_bindings_to_same_field_are_independent() {
    let field = TextField::with_value("hi".to_string());
    let mut binder: Binder<Person> = Binder::new(WritePolicy::BestEffort);

    let short = binder
        .for_field(&field, "name-short")
        .max_length(5, "Too long")
        .bind(|p: &Person| p.name.clone(), |p, v| p.name = v);
    let long = binder
        .for_field(&field, "name-long")
        .min_length(5, "Too short")
        .bind(|p: &Person| p.name.clone(), |p, v| p.name = v);

    assert!(short.validate().is_valid());
    assert_eq!(long.validate(), ValidationStatus::Invalid("Too short".to_string()));
    assert_eq!(binder.len(), 2);
}

// -----------------------------------------------------------------------------
// Cross-field revalidation
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Trip {
    departing: NaiveDate,
    returning: NaiveDate,
}

#[test]
fn test_cross_field_revalidation() {
    let departing = TextField::with_value("2024-01-10".to_string());
    let returning = TextField::with_value("2024-01-05".to_string());

    let mut binder: Binder<Trip> = Binder::new(WritePolicy::AllOrNothing);
    binder
        .for_field(&departing, "departing")
        .convert_with(converters::date("%Y-%m-%d", "Enter a date as YYYY-MM-DD"))
        .bind(|t: &Trip| t.departing, |t, v| t.departing = v);

    let departing_for_rule = departing.clone();
    let returning_binding = binder
        .for_field(&returning, "returning")
        .convert_with(converters::date("%Y-%m-%d", "Enter a date as YYYY-MM-DD"))
        .rule(
            move |value: &NaiveDate| {
                match NaiveDate::parse_from_str(departing_for_rule.value().trim(), "%Y-%m-%d") {
                    Ok(departing) => *value >= departing,
                    // An unparsable departing date is its own binding's problem.
                    Err(_) => true,
                }
            },
            "Cannot return before departing",
        )
        .bind(|t: &Trip| t.returning, |t, v| t.returning = v);

    // The dependency is wired explicitly: editing "departing" revalidates
    // the "returning" binding.
    let dependent = returning_binding.clone();
    departing.on_value_change(Arc::new(move || {
        dependent.validate();
    }));

    assert_eq!(
        returning_binding.validate(),
        ValidationStatus::Invalid("Cannot return before departing".to_string())
    );

    departing.set_value("2024-01-01".to_string());
    assert!(returning_binding.status().is_valid());
}
