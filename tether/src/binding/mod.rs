//! Field-to-property bindings.
//!
//! A binding tethers one field endpoint to one property of a business
//! object through a validator/converter chain. Construction goes through
//! the one-shot [`BindingBuilder`] obtained from
//! [`Binder::for_field`](crate::binder::Binder::for_field); the builder
//! is consumed by [`BindingBuilder::bind`], so a finalized binding can
//! never be reconfigured.
//!
//! # Example
//!
//! ```
//! use tether::prelude::*;
//!
//! #[derive(Default)]
//! struct Person {
//!     email: String,
//! }
//!
//! let email = TextField::new();
//! let mut binder: Binder<Person> = Binder::new(WritePolicy::AllOrNothing);
//!
//! let binding = binder
//!     .for_field(&email, "email")
//!     .required("Email is required")
//!     .email("Please enter a valid email")
//!     .bind(|p: &Person| p.email.clone(), |p, v| p.email = v);
//!
//! email.set_value("a@acme.com".to_string());
//! assert!(binding.status().is_valid());
//! ```

mod builder;
mod handle;

pub use builder::BindingBuilder;
pub use handle::Binding;

pub(crate) use handle::ObjectBinding;
