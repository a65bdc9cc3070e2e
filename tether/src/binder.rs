//! Binder: the per-business-object collection of bindings.
//!
//! A [`Binder`] owns every binding declared for one business-object type,
//! drives "model to fields" and "fields to model" as batch passes in
//! declaration order, and aggregates validation status. The business
//! object is only ever mutated through a write pass; under
//! [`WritePolicy::AllOrNothing`] a pass with any failing binding mutates
//! nothing at all.

use std::sync::Arc;

use crate::binding::{BindingBuilder, ObjectBinding};
use crate::chain::Chain;
use crate::context::BindContext;
use crate::error::WriteError;
use crate::field::Field;
use crate::validation::ValidationStatus;

/// How a batch write applies successful bindings when siblings fail.
///
/// There is no default: callers pick a policy when constructing the
/// binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Defer every mutation; apply none unless every binding passes.
    AllOrNothing,
    /// Apply each passing binding immediately; failures are report-only.
    BestEffort,
}

/// Error information for one binding that failed a write pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Binding name (from [`Binder::for_field`]).
    pub field: String,
    /// Human-facing validation or conversion message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Owns the bindings for one business-object type and drives bulk
/// read/write passes.
///
/// Bindings run in declaration order; duplicate bindings to the same
/// field are legal and independent. The binder also owns the currently
/// loaded business object — "no object loaded" is a valid state.
pub struct Binder<B> {
    bindings: Vec<Arc<dyn ObjectBinding<B>>>,
    object: Option<B>,
    policy: WritePolicy,
    context: BindContext,
}

impl<B: 'static> Binder<B> {
    /// Create a binder with an explicit write policy.
    pub fn new(policy: WritePolicy) -> Self {
        Self {
            bindings: Vec::new(),
            object: None,
            policy,
            context: BindContext::default(),
        }
    }

    /// Replace the context handed to every validator and converter call.
    ///
    /// Bindings capture the context when they are finalized, so set it
    /// before declaring them.
    pub fn with_context(mut self, context: BindContext) -> Self {
        self.context = context;
        self
    }

    /// The context bindings are finalized with.
    pub fn context(&self) -> &BindContext {
        &self.context
    }

    /// The configured write policy.
    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Start declaring a binding for `field`. `name` identifies the
    /// binding in error reports.
    pub fn for_field<W: Field + Clone + 'static>(
        &mut self,
        field: &W,
        name: impl Into<String>,
    ) -> BindingBuilder<'_, B, W, W::Value> {
        BindingBuilder {
            binder: self,
            field: field.clone(),
            name: name.into(),
            chain: Chain::new(),
            status_sink: None,
        }
    }

    pub(crate) fn register(&mut self, binding: Arc<dyn ObjectBinding<B>>) {
        self.bindings.push(binding);
    }

    /// Load `object`: present every bound property in its field, reset
    /// all statuses to `Unvalidated`, and take ownership of the object.
    ///
    /// Loaded values are presumed valid and are not re-checked.
    pub fn read_object(&mut self, object: B) {
        log::debug!(
            "binder: reading object into {} binding(s)",
            self.bindings.len()
        );
        for binding in &self.bindings {
            binding.read_into_field(&object);
        }
        // Cross-field wiring may have revalidated a sibling while its
        // neighbours were still loading; reset statuses only after every
        // field holds its presented value.
        for binding in &self.bindings {
            binding.reset_status();
        }
        self.object = Some(object);
    }

    /// The currently loaded object (if any).
    pub fn object(&self) -> Option<&B> {
        self.object.as_ref()
    }

    /// Unload and return the object.
    pub fn take_object(&mut self) -> Option<B> {
        self.object.take()
    }

    /// Run a write pass against `object` under the configured policy.
    ///
    /// Every binding runs and reports status regardless of earlier
    /// failures; the returned error list aggregates the failures in
    /// declaration order.
    pub fn write_to(&self, object: &mut B) -> Result<(), Vec<FieldError>> {
        match self.policy {
            WritePolicy::AllOrNothing => self.write_all_or_nothing(object),
            WritePolicy::BestEffort => self.write_best_effort(object),
        }
    }

    /// Run a write pass against the loaded object.
    pub fn write(&mut self) -> Result<(), WriteError> {
        let mut object = self.object.take().ok_or(WriteError::NoObjectLoaded)?;
        let result = self.write_to(&mut object);
        self.object = Some(object);
        result.map_err(WriteError::Invalid)
    }

    fn write_all_or_nothing(&self, object: &mut B) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut appliers = Vec::new();
        for binding in &self.bindings {
            match binding.prepare_write() {
                Ok(apply) => appliers.push(apply),
                Err(error) => errors.push(error),
            }
        }
        if !errors.is_empty() {
            log::debug!(
                "binder: write pass discarded, {} binding(s) invalid",
                errors.len()
            );
            return Err(errors);
        }
        for apply in appliers {
            apply(object);
        }
        Ok(())
    }

    fn write_best_effort(&self, object: &mut B) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for binding in &self.bindings {
            if let Err(error) = binding.write_from_field(object) {
                errors.push(error);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Revalidate every binding in declaration order without touching the
    /// model; returns the aggregated failures.
    pub fn validate_all(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for binding in &self.bindings {
            if let ValidationStatus::Invalid(message) = binding.validate() {
                errors.push(FieldError::new(binding.name(), message));
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// True iff no binding's last-known status is invalid.
    ///
    /// `Unvalidated` bindings count as valid: a freshly loaded object is
    /// presumed valid until re-checked.
    pub fn is_valid(&self) -> bool {
        self.bindings
            .iter()
            .all(|binding| !binding.status().is_invalid())
    }

    /// Last-known statuses in declaration order.
    pub fn statuses(&self) -> Vec<ValidationStatus> {
        self.bindings.iter().map(|binding| binding.status()).collect()
    }

    /// Number of declared bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no bindings have been declared.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
