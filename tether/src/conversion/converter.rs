//! Converter values and the panic boundary.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::context::BindContext;
use crate::outcome::Outcome;

/// Type alias for the shared model-direction transform.
type ToModel<F, M> = Arc<dyn Fn(&F, &BindContext) -> Result<M, String> + Send + Sync>;

/// Type alias for the shared presentation-direction transform.
type ToPresentation<F, M> = Arc<dyn Fn(&M, &BindContext) -> F + Send + Sync>;

/// A pair of pure transforms between a field type `F` and a model type
/// `M`.
///
/// Both transforms receive the invocation context (e.g. for locale-aware
/// parsing). Converters hold no interior state and are cheap to clone.
pub struct Converter<F, M> {
    to_model: ToModel<F, M>,
    to_presentation: ToPresentation<F, M>,
    fallback: Option<String>,
}

impl<F, M> Clone for Converter<F, M> {
    fn clone(&self) -> Self {
        Self {
            to_model: Arc::clone(&self.to_model),
            to_presentation: Arc::clone(&self.to_presentation),
            fallback: self.fallback.clone(),
        }
    }
}

impl<F: 'static, M: 'static> Converter<F, M> {
    /// Build a converter from its two transforms.
    pub fn new(
        to_model: impl Fn(&F, &BindContext) -> Result<M, String> + Send + Sync + 'static,
        to_presentation: impl Fn(&M, &BindContext) -> F + Send + Sync + 'static,
    ) -> Self {
        Self {
            to_model: Arc::new(to_model),
            to_presentation: Arc::new(to_presentation),
            fallback: None,
        }
    }

    /// Set the message reported when the model-direction transform panics
    /// instead of returning an error.
    pub fn with_fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = Some(message.into());
        self
    }

    /// Convert a field value into a model value.
    ///
    /// A panic inside the transform never crosses this boundary: it is
    /// caught and reported as the configured fallback message, or as the
    /// extracted panic text when no fallback is configured.
    pub fn to_model(&self, value: &F, cx: &BindContext) -> Outcome<M> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.to_model)(value, cx)));
        match result {
            Ok(Ok(model)) => Outcome::ok(model),
            Ok(Err(message)) => Outcome::error(message),
            Err(payload) => {
                let message = self
                    .fallback
                    .clone()
                    .unwrap_or_else(|| extract_panic_message(&payload));
                log::debug!("conversion transform panicked: {message}");
                Outcome::error(message)
            }
        }
    }

    /// Convert a model value back into its field presentation.
    ///
    /// A panic here indicates a model value that never passed the chain
    /// (an inconsistent business object) and is deliberately left to
    /// propagate.
    pub fn to_presentation(&self, value: &M, cx: &BindContext) -> F {
        (self.to_presentation)(value, cx)
    }
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can carry either `&str` or `String` payloads. Anything else
/// falls back to a generic message.
fn extract_panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
