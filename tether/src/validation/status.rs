/// Last-known validation state of a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationStatus {
    /// No validation pass has run since the binding was created or the
    /// business object was (re)loaded.
    #[default]
    Unvalidated,
    /// The most recent pass accepted the field value.
    Valid,
    /// The most recent pass rejected the field value.
    Invalid(String),
}

impl ValidationStatus {
    /// Check if the most recent pass accepted the field value.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the most recent pass rejected the field value.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Get the rejection message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}
