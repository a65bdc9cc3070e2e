//! Invocation context passed to validators and converters.

use std::collections::HashMap;

/// Opaque context handed unchanged to every validator and converter call.
///
/// Carries a locale tag plus free-form named hints. There is no ambient
/// fallback: a chain only ever sees the context its binder was built
/// with, passed explicitly into each invocation.
#[derive(Debug, Clone)]
pub struct BindContext {
    locale: String,
    hints: HashMap<String, String>,
}

impl BindContext {
    /// Create a context with the default `"en"` locale.
    pub fn new() -> Self {
        Self {
            locale: "en".to_string(),
            hints: HashMap::new(),
        }
    }

    /// Create a context with an explicit locale tag (e.g. `"de-DE"`).
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            hints: HashMap::new(),
        }
    }

    /// The locale tag for this context.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a named hint.
    pub fn hint(&self, name: &str) -> Option<&str> {
        self.hints.get(name).map(String::as_str)
    }

    /// Set a named hint, replacing any previous value.
    pub fn set_hint(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.hints.insert(name.into(), value.into());
    }
}

impl Default for BindContext {
    fn default() -> Self {
        Self::new()
    }
}
