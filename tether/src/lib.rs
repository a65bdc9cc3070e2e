pub mod binder;
pub mod binding;
pub mod chain;
pub mod context;
pub mod conversion;
pub mod error;
pub mod field;
pub mod outcome;
pub mod validation;

pub mod prelude {
    pub use crate::binder::{Binder, FieldError, WritePolicy};
    pub use crate::binding::{Binding, BindingBuilder};
    pub use crate::chain::Chain;
    pub use crate::context::BindContext;
    pub use crate::conversion::{Converter, converters};
    pub use crate::error::WriteError;
    pub use crate::field::{ChangeListener, Field, FieldCell, FieldId, TextField};
    pub use crate::outcome::Outcome;
    pub use crate::validation::{ValidationStatus, Validator, rules};
}
