//! Registration Form Example
//!
//! Builds a binder over a small registration object, simulates a user
//! editing the fields, and runs write passes under the all-or-nothing
//! policy.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tether::prelude::*;

#[derive(Debug, Default, Clone)]
struct Registration {
    username: String,
    email: String,
    age: i32,
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("registration.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let username = TextField::new();
    let email = TextField::new();
    let age = TextField::new();

    let mut binder: Binder<Registration> = Binder::new(WritePolicy::AllOrNothing);

    binder
        .for_field(&username, "username")
        .required("Username is required")
        .min_length(3, "Username must be at least 3 characters")
        .bind(|r: &Registration| r.username.clone(), |r, v| r.username = v);

    // Route this binding's status into the field's error slot, the way a
    // presentation layer would.
    let email_cell = email.clone();
    binder
        .for_field(&email, "email")
        .required("Email is required")
        .email("This doesn't look like a valid email address")
        .on_status(move |status| match status {
            ValidationStatus::Invalid(message) => email_cell.set_error(message.clone()),
            _ => email_cell.clear_error(),
        })
        .bind(|r: &Registration| r.email.clone(), |r, v| r.email = v);

    binder
        .for_field(&age, "age")
        .convert_with(converters::parsed::<i32>("Age must be a number"))
        .validate_with(rules::range(13..=130, "Age must be between 13 and 130"))
        .bind(|r: &Registration| r.age, |r, v| r.age = v);

    binder.read_object(Registration {
        username: "ada".to_string(),
        email: "ada@acme.com".to_string(),
        age: 36,
    });
    println!(
        "loaded: username={:?} email={:?} age={:?}",
        username.value(),
        email.value(),
        age.value()
    );

    // Simulate the user mistyping the email and age.
    email.set_value("not-an-email".to_string());
    age.set_value("19x9".to_string());

    match binder.write() {
        Ok(()) => println!("write succeeded"),
        Err(WriteError::Invalid(errors)) => {
            println!("write rejected:");
            for error in &errors {
                println!("  {error}");
            }
        }
        Err(error) => println!("write failed: {error}"),
    }
    println!("email field error: {:?}", email.error());

    // Fix the input and try again.
    email.set_value("ada@example.com".to_string());
    age.set_value("37".to_string());

    match binder.write() {
        Ok(()) => println!("write succeeded: {:?}", binder.object()),
        Err(error) => println!("write failed: {error}"),
    }
}
