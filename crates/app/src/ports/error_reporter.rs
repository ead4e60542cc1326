//! Error-reporting port.

/// Receives failures that are replaced by a generic message for visitors.
pub trait ErrorReporter {
    /// Record `message` (the raw error text) under a fixed `label`.
    fn report(&self, label: &str, message: &str);
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for std::sync::Arc<T> {
    fn report(&self, label: &str, message: &str) {
        (**self).report(label, message);
    }
}
