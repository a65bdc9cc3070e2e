//! Bidirectional conversion between field and model types.
//!
//! A [`Converter`] pairs a fallible field-to-model transform with a total
//! model-to-field transform. The model direction may reject malformed
//! input with a user-facing message; the presentation direction is
//! assumed infallible because only chain-validated values ever reach the
//! business object.

mod converter;

pub mod converters;

pub use converter::Converter;
