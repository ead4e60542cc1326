//! In-process error reporting backed by `tracing`.

use std::error::Error;
use std::fmt::Write;

use crate::ports::ErrorReporter;

/// Reports failures as `ERROR` events on the `rescuehub::errors` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, label: &str, message: &str) {
        tracing::error!(target: "rescuehub::errors", error = %message, "{label}");
    }
}

/// Render an error together with its chain of sources, `outer: inner: root`.
#[must_use]
pub fn describe(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }
    message
}
