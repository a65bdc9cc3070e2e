//! Value-or-message outcome type threaded through binding chains.

/// Outcome of pushing a value through one or more chain steps.
///
/// Exactly one variant is ever populated: `Ok` carries the value that
/// passed every step executed so far, `Error` carries the user-facing
/// message of the step that rejected it. Outcomes are immutable once
/// constructed; they are only ever consumed or inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The value passed every step executed so far.
    Ok(T),
    /// A step rejected the value with a user-facing message.
    Error(String),
}

impl<T> Outcome<T> {
    /// Create a successful outcome carrying `value`.
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Create a failed outcome carrying a user-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Check if the outcome carries a value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Check if the outcome carries an error message.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Get the error message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    /// Get a reference to the carried value (if any).
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Consume the outcome and return the carried value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Error`. Calling this without checking
    /// [`Outcome::is_ok`] first is an API misuse, not a recoverable
    /// condition.
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(message) => {
                panic!("into_value called on an error outcome: {message}")
            }
        }
    }

    /// Map the carried value, passing errors through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Error(message) => Outcome::Error(message),
        }
    }

    /// Chain another fallible step, short-circuiting on error.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(message) => Outcome::Error(message),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T> From<Result<T, String>> for Outcome<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(message) => Self::Error(message),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(message) => Err(message),
        }
    }
}
