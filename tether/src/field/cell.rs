use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{ChangeListener, Field};

/// Unique identifier for a [`FieldCell`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Convenience alias for the common string-valued field.
pub type TextField = FieldCell<String>;

/// Internal state for a field cell.
struct CellInner<T> {
    /// Current field value.
    value: T,
    /// Displayed validation error message (if any).
    error: Option<String>,
}

/// An in-memory field endpoint with reactive state.
///
/// Cloning a `FieldCell` is cheap and shares the same underlying cell, so
/// one clone can live inside a binding while another stays with whatever
/// owns the presentation. The error slot mirrors what a presentation
/// layer would display next to the field; the engine itself only touches
/// it through whatever status sink the caller wires up.
pub struct FieldCell<T> {
    /// Unique identifier for this cell instance.
    id: FieldId,
    /// Internal state.
    inner: Arc<RwLock<CellInner<T>>>,
    /// Registered change listeners.
    listeners: Arc<RwLock<Vec<ChangeListener>>>,
    /// Dirty flag for presentation refresh.
    dirty: Arc<AtomicBool>,
}

impl<T: Clone + Send + Sync + 'static> FieldCell<T> {
    /// Create a cell with a default value.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::with_value(T::default())
    }

    /// Create a cell with an initial value.
    pub fn with_value(value: T) -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(CellInner { value, error: None })),
            listeners: Arc::new(RwLock::new(Vec::new())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this cell.
    pub fn id(&self) -> FieldId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Value access
    // -------------------------------------------------------------------------

    /// Get the current value.
    pub fn value(&self) -> T {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().value.clone())
    }

    /// Set the value and notify change listeners.
    pub fn set_value(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify();
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the cell state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Error slot
    // -------------------------------------------------------------------------

    /// Set a validation error message on this cell.
    pub fn set_error(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this cell has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Invoke listeners outside the value lock so they can read back.
    fn notify(&self) {
        let listeners: Vec<ChangeListener> = self
            .listeners
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        for listener in listeners {
            listener();
        }
    }
}

impl<T> Clone for FieldCell<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for FieldCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for FieldCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCell")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + Sync + 'static> Field for FieldCell<T> {
    type Value = T;

    fn value(&self) -> T {
        FieldCell::value(self)
    }

    fn set_value(&self, value: T) {
        FieldCell::set_value(self, value)
    }

    fn on_value_change(&self, listener: ChangeListener) {
        if let Ok(mut guard) = self.listeners.write() {
            guard.push(listener);
        }
    }
}
