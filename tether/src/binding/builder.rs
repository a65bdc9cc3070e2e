use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

use crate::binder::Binder;
use crate::chain::Chain;
use crate::conversion::Converter;
use crate::field::Field;
use crate::validation::{ValidationStatus, Validator, rules};

use super::handle::{Binding, BindingInner, Getter, Setter, StatusSink};

/// One-shot fluent builder for a binding.
///
/// Obtained from [`Binder::for_field`]. Steps run in declaration order;
/// [`convert_with`](BindingBuilder::convert_with) advances the stage type
/// `T`, so a step whose input type does not match the stage does not
/// compile. `bind` and `bind_read_only` consume the builder — once a
/// binding is finalized there is no way to reconfigure it.
pub struct BindingBuilder<'b, B, W: Field, T> {
    pub(crate) binder: &'b mut Binder<B>,
    pub(crate) field: W,
    pub(crate) name: String,
    pub(crate) chain: Chain<W::Value, T>,
    pub(crate) status_sink: Option<StatusSink>,
}

impl<'b, B, W, T> BindingBuilder<'b, B, W, T>
where
    B: 'static,
    W: Field + Clone + 'static,
    T: Send + 'static,
{
    /// Append a validator step at the current stage type.
    pub fn validate_with(mut self, validator: Validator<T>) -> Self {
        self.chain = self.chain.validate(validator);
        self
    }

    /// Append a converter step, advancing the stage type.
    pub fn convert_with<N: Send + 'static>(
        self,
        converter: Converter<T, N>,
    ) -> BindingBuilder<'b, B, W, N> {
        BindingBuilder {
            binder: self.binder,
            field: self.field,
            name: self.name,
            chain: self.chain.convert(converter),
            status_sink: self.status_sink,
        }
    }

    /// Add a custom rule at the current stage type.
    pub fn rule(
        self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.validate_with(rules::custom(predicate, message))
    }

    /// Attach the status sink, notified once per validation attempt.
    pub fn on_status(
        mut self,
        sink: impl Fn(&ValidationStatus) + Send + Sync + 'static,
    ) -> Self {
        self.status_sink = Some(Box::new(sink));
        self
    }

    /// Finalize with a property getter/setter pair and register the
    /// binding with the binder.
    ///
    /// Also registers one change listener on the field that revalidates
    /// this binding whenever the field value changes.
    pub fn bind(
        self,
        getter: impl Fn(&B) -> T + Send + Sync + 'static,
        setter: impl Fn(&mut B, T) + Send + Sync + 'static,
    ) -> Binding<B, W, T> {
        self.finish(Box::new(getter), Some(Box::new(setter)))
    }

    /// Finalize without a setter: the forward chain still validates, but
    /// a write pass never mutates the bound property.
    pub fn bind_read_only(
        self,
        getter: impl Fn(&B) -> T + Send + Sync + 'static,
    ) -> Binding<B, W, T> {
        self.finish(Box::new(getter), None)
    }

    fn finish(self, getter: Getter<B, T>, setter: Option<Setter<B, T>>) -> Binding<B, W, T> {
        let field = self.field;
        let inner = Arc::new(BindingInner {
            name: self.name,
            field: field.clone(),
            chain: self.chain,
            getter,
            setter,
            status_sink: self.status_sink,
            status: RwLock::new(ValidationStatus::Unvalidated),
            context: self.binder.context().clone(),
            muted: AtomicBool::new(false),
        });
        let binding = Binding::from_inner(inner);
        let trigger = binding.clone();
        field.on_value_change(Arc::new(move || trigger.handle_field_change()));
        self.binder.register(Arc::new(binding.clone()));
        binding
    }
}

impl<'b, B, W> BindingBuilder<'b, B, W, String>
where
    B: 'static,
    W: Field + Clone + 'static,
{
    /// Require a non-blank value.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.validate_with(rules::required(message))
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.validate_with(rules::min_length(min, message))
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.validate_with(rules::max_length(max, message))
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Self {
        self.validate_with(rules::pattern(pattern, message))
    }

    /// Require a syntactically valid email address.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.validate_with(rules::email(message))
    }
}
