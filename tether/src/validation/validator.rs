//! Validator values and composition.

use std::sync::Arc;

use crate::context::BindContext;
use crate::outcome::Outcome;

/// Type alias for shared validation rule closures.
type Rule<T> = Arc<dyn Fn(&T, &BindContext) -> Result<(), String> + Send + Sync>;

/// A pure predicate-with-message over values of type `T`.
///
/// Validators never transform: on success the input is echoed unchanged.
/// Cloning is cheap (the rule is shared), and a validator is safe to use
/// from any number of bindings since it holds no interior state.
pub struct Validator<T> {
    rule: Rule<T>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: 'static> Validator<T> {
    /// Build a validator from a predicate and a fixed message.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T, &BindContext) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self {
            rule: Arc::new(move |value, cx| {
                if predicate(value, cx) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }),
        }
    }

    /// Build a validator whose message is computed from the failing value.
    pub fn with_message<F, G>(predicate: F, message: G) -> Self
    where
        F: Fn(&T, &BindContext) -> bool + Send + Sync + 'static,
        G: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(move |value, cx| {
                if predicate(value, cx) {
                    Ok(())
                } else {
                    Err(message(value))
                }
            }),
        }
    }

    /// Build a validator from a closure producing the verdict directly.
    pub fn from_fn<F>(rule: F) -> Self
    where
        F: Fn(&T, &BindContext) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Combine validators into one that runs each child in declared order
    /// and stops at the first rejection.
    pub fn all(validators: impl IntoIterator<Item = Validator<T>>) -> Self {
        let validators: Vec<Validator<T>> = validators.into_iter().collect();
        Self {
            rule: Arc::new(move |value, cx| {
                for validator in &validators {
                    (validator.rule)(value, cx)?;
                }
                Ok(())
            }),
        }
    }

    /// Run the validator. `Ok` echoes the input unchanged.
    pub fn validate(&self, value: &T, cx: &BindContext) -> Outcome<T>
    where
        T: Clone,
    {
        match (self.rule)(value, cx) {
            Ok(()) => Outcome::ok(value.clone()),
            Err(message) => Outcome::error(message),
        }
    }

    /// Run the validator without cloning the value on success.
    pub(crate) fn check(&self, value: &T, cx: &BindContext) -> Result<(), String> {
        (self.rule)(value, cx)
    }
}
