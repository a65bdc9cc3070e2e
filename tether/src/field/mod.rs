//! Field endpoint contract and the in-memory field cell.
//!
//! A field is the interactive side of a binding: something with a current
//! value, a way to overwrite it, and change notification. The engine only
//! ever talks to fields through the [`Field`] trait; [`FieldCell`] is the
//! built-in in-memory implementation.

mod cell;

pub use cell::{FieldCell, FieldId, TextField};

use std::sync::Arc;

/// Shared change-notification listener.
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Contract for the interactive endpoint of a binding.
pub trait Field: Send + Sync {
    /// The field-side value type.
    type Value: Clone + Send + Sync + 'static;

    /// Get the current field value.
    fn value(&self) -> Self::Value;

    /// Overwrite the field value. Fires change listeners.
    fn set_value(&self, value: Self::Value);

    /// Register a listener invoked after every value change.
    fn on_value_change(&self, listener: ChangeListener);
}
