//! Ordered validator/converter pipelines.
//!
//! A chain runs forward (field value to model value) fail-fast: after the
//! first rejection no later step executes. The backward direction runs
//! the converter steps only, in reverse declared order; validators have
//! no presentation-direction role.
//!
//! Step types must line up at construction time. [`Chain::validate`]
//! keeps the chain's output type and [`Chain::convert`] advances it, so
//! appending a step whose input type differs from the current output type
//! does not compile.

use std::sync::Arc;

use crate::context::BindContext;
use crate::conversion::Converter;
use crate::outcome::Outcome;
use crate::validation::Validator;

/// Type alias for the composed forward (field to model) execution.
type Forward<F, M> = Arc<dyn Fn(&F, &BindContext) -> Outcome<M> + Send + Sync>;

/// Type alias for the composed backward (model to field) execution.
type Backward<F, M> = Arc<dyn Fn(&M, &BindContext) -> F + Send + Sync>;

/// An ordered pipeline of validators and converters from a field type `F`
/// to a model type `M`.
pub struct Chain<F, M> {
    forward: Forward<F, M>,
    backward: Backward<F, M>,
    steps: usize,
}

impl<F, M> Clone for Chain<F, M> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
            steps: self.steps,
        }
    }
}

impl<F: Clone + 'static> Chain<F, F> {
    /// The empty chain: both directions echo the value unchanged.
    pub fn new() -> Self {
        Self {
            forward: Arc::new(|value: &F, _cx: &BindContext| Outcome::ok(value.clone())),
            backward: Arc::new(|value: &F, _cx: &BindContext| value.clone()),
            steps: 0,
        }
    }
}

impl<F: Clone + 'static> Default for Chain<F, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: 'static, M: 'static> Chain<F, M> {
    /// Append a validator step. The chain's output type is unchanged.
    pub fn validate(self, validator: Validator<M>) -> Chain<F, M> {
        let step = self.steps + 1;
        let previous = Arc::clone(&self.forward);
        let forward: Forward<F, M> = Arc::new(move |value, cx| {
            previous(value, cx).and_then(|current| match validator.check(&current, cx) {
                Ok(()) => Outcome::ok(current),
                Err(message) => {
                    log::debug!("chain step {step}: validator rejected value: {message}");
                    Outcome::error(message)
                }
            })
        });
        Chain {
            forward,
            backward: self.backward,
            steps: step,
        }
    }

    /// Append a converter step, advancing the chain's output type.
    pub fn convert<N: 'static>(self, converter: Converter<M, N>) -> Chain<F, N> {
        let step = self.steps + 1;
        let previous = Arc::clone(&self.forward);
        let model_converter = converter.clone();
        let forward: Forward<F, N> = Arc::new(move |value, cx| {
            previous(value, cx).and_then(|current| {
                let outcome = model_converter.to_model(&current, cx);
                if let Some(message) = outcome.message() {
                    log::debug!("chain step {step}: conversion failed: {message}");
                }
                outcome
            })
        });
        let previous_backward = Arc::clone(&self.backward);
        let backward: Backward<F, N> = Arc::new(move |value, cx| {
            let presented = converter.to_presentation(value, cx);
            previous_backward(&presented, cx)
        });
        Chain {
            forward,
            backward,
            steps: step,
        }
    }

    /// Run the forward direction: field value in, model value out.
    pub fn run_forward(&self, value: &F, cx: &BindContext) -> Outcome<M> {
        (self.forward)(value, cx)
    }

    /// Run the backward direction through the converter steps only.
    pub fn run_backward(&self, value: &M, cx: &BindContext) -> F {
        (self.backward)(value, cx)
    }

    /// Number of steps appended so far.
    pub fn len(&self) -> usize {
        self.steps
    }

    /// Check if the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}
