use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::binder::FieldError;
use crate::chain::Chain;
use crate::context::BindContext;
use crate::field::Field;
use crate::outcome::Outcome;
use crate::validation::ValidationStatus;

/// Type alias for the boxed model property getter.
pub(crate) type Getter<B, M> = Box<dyn Fn(&B) -> M + Send + Sync>;

/// Type alias for the boxed model property setter.
pub(crate) type Setter<B, M> = Box<dyn Fn(&mut B, M) + Send + Sync>;

/// Type alias for the boxed status sink.
pub(crate) type StatusSink = Box<dyn Fn(&ValidationStatus) + Send + Sync>;

/// Shared state of a finalized binding.
pub(crate) struct BindingInner<B, W: Field, M> {
    pub(crate) name: String,
    pub(crate) field: W,
    pub(crate) chain: Chain<W::Value, M>,
    pub(crate) getter: Getter<B, M>,
    pub(crate) setter: Option<Setter<B, M>>,
    pub(crate) status_sink: Option<StatusSink>,
    pub(crate) status: RwLock<ValidationStatus>,
    pub(crate) context: BindContext,
    /// Suppresses the binding's own change listener while the engine
    /// writes into the field.
    pub(crate) muted: AtomicBool,
}

/// A finalized field-to-property binding.
///
/// `Binding` is a cheap-clone handle sharing one underlying binding, so a
/// clone can be captured by a change listener to wire cross-field
/// revalidation: field X's validity depending on field Y's value is
/// expressed by registering a listener on Y that calls
/// [`Binding::validate`] on X's handle. The engine does no dependency
/// tracking of its own.
pub struct Binding<B, W: Field, M> {
    inner: Arc<BindingInner<B, W, M>>,
}

impl<B, W: Field, M> Clone for Binding<B, W, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B, W: Field, M: 'static> Binding<B, W, M> {
    pub(crate) fn from_inner(inner: Arc<BindingInner<B, W, M>>) -> Self {
        Self { inner }
    }

    /// Name given to this binding at declaration.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Last-known validation status.
    pub fn status(&self) -> ValidationStatus {
        self.inner
            .status
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Extract the bound property and present it in the field.
    ///
    /// Runs the chain's backward direction only. Validation status is not
    /// touched, and the binding's own change listener does not fire for
    /// the engine-driven write.
    pub fn read_into_field(&self, object: &B) {
        let model = (self.inner.getter)(object);
        let presented = self.inner.chain.run_backward(&model, &self.inner.context);
        self.inner.muted.store(true, Ordering::SeqCst);
        self.inner.field.set_value(presented);
        self.inner.muted.store(false, Ordering::SeqCst);
    }

    /// Run the forward chain and, on success, apply the result through
    /// the setter. A read-only binding validates but never mutates.
    ///
    /// The status sink is notified either way; on error the model is left
    /// untouched and the terminal outcome carries the step's message.
    pub fn write_from_field(&self, object: &mut B) -> Outcome<()> {
        match self.run_chain() {
            Outcome::Ok(model) => {
                if let Some(setter) = &self.inner.setter {
                    setter(object, model);
                }
                self.report(ValidationStatus::Valid);
                Outcome::ok(())
            }
            Outcome::Error(message) => {
                self.report(ValidationStatus::Invalid(message.clone()));
                Outcome::error(message)
            }
        }
    }

    /// Re-run the forward chain for status only; no model write.
    ///
    /// Idempotent: with no intervening field change, repeated calls yield
    /// the same status. This is the entry point for cross-field
    /// revalidation wiring.
    pub fn validate(&self) -> ValidationStatus {
        let status = match self.run_chain() {
            Outcome::Ok(_) => ValidationStatus::Valid,
            Outcome::Error(message) => ValidationStatus::Invalid(message),
        };
        self.report(status.clone());
        status
    }

    fn run_chain(&self) -> Outcome<M> {
        let value = self.inner.field.value();
        self.inner.chain.run_forward(&value, &self.inner.context)
    }

    /// Store the new status and push it to the sink, once per attempt.
    fn report(&self, status: ValidationStatus) {
        log::trace!("binding '{}' status: {:?}", self.inner.name, status);
        if let Ok(mut guard) = self.inner.status.write() {
            *guard = status.clone();
        }
        if let Some(sink) = &self.inner.status_sink {
            sink(&status);
        }
    }

    /// Change-listener entry point; ignored while the engine itself is
    /// writing into the field.
    pub(crate) fn handle_field_change(&self) {
        if self.inner.muted.load(Ordering::SeqCst) {
            return;
        }
        self.validate();
    }
}

/// Object-safe view of a binding, used by the binder to drive
/// heterogeneous bindings in declaration order.
pub(crate) trait ObjectBinding<B>: Send + Sync {
    fn name(&self) -> &str;
    fn read_into_field(&self, object: &B);
    fn write_from_field(&self, object: &mut B) -> Result<(), FieldError>;
    /// Validate and defer the mutation: the returned applier carries the
    /// already-converted model value, so a batch can withhold every
    /// mutation until all of its bindings have passed.
    fn prepare_write(&self) -> Result<Box<dyn FnOnce(&mut B) + Send>, FieldError>;
    fn validate(&self) -> ValidationStatus;
    fn status(&self) -> ValidationStatus;
    fn reset_status(&self);
}

impl<B, W, M> ObjectBinding<B> for Binding<B, W, M>
where
    B: 'static,
    W: Field + 'static,
    M: Send + 'static,
{
    fn name(&self) -> &str {
        Binding::name(self)
    }

    fn read_into_field(&self, object: &B) {
        Binding::read_into_field(self, object)
    }

    fn write_from_field(&self, object: &mut B) -> Result<(), FieldError> {
        match Binding::write_from_field(self, object) {
            Outcome::Ok(()) => Ok(()),
            Outcome::Error(message) => Err(FieldError::new(self.name(), message)),
        }
    }

    fn prepare_write(&self) -> Result<Box<dyn FnOnce(&mut B) + Send>, FieldError> {
        match self.run_chain() {
            Outcome::Ok(model) => {
                self.report(ValidationStatus::Valid);
                let inner = Arc::clone(&self.inner);
                Ok(Box::new(move |object: &mut B| {
                    if let Some(setter) = &inner.setter {
                        setter(object, model);
                    }
                }))
            }
            Outcome::Error(message) => {
                self.report(ValidationStatus::Invalid(message.clone()));
                Err(FieldError::new(self.name(), message))
            }
        }
    }

    fn validate(&self) -> ValidationStatus {
        Binding::validate(self)
    }

    fn status(&self) -> ValidationStatus {
        Binding::status(self)
    }

    fn reset_status(&self) {
        self.report(ValidationStatus::Unvalidated);
    }
}
