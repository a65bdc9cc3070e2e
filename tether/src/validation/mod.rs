//! Value validation for binding chains.
//!
//! A [`Validator`] is a pure predicate-with-message: it either echoes its
//! input unchanged or rejects it with a user-facing message. Validators
//! hold no interior state, so one validator value can be shared across
//! any number of bindings and binders.
//!
//! # Example
//!
//! ```
//! use tether::context::BindContext;
//! use tether::validation::{Validator, rules};
//!
//! let email = Validator::all([
//!     rules::required("Email is required"),
//!     rules::email("Please enter a valid email"),
//! ]);
//!
//! let cx = BindContext::new();
//! assert!(email.validate(&"a@acme.com".to_string(), &cx).is_ok());
//! ```

mod status;
mod validator;

pub mod rules;

pub use status::ValidationStatus;
pub use validator::Validator;
