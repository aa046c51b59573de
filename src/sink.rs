//! # Warning Sinks
//!
//! Where a walk reports the failures it tolerates.
//!
//! A recoverable parse failure does not fail the walk, so the only trace it
//! leaves is the warning handed to the backend's [`WarningSink`]. Backends take
//! the sink at construction time. The default, [`TracingSink`], emits a
//! `tracing` warning event. Tests and embedders can substitute their own sink.

use std::path::Path;

use crate::VisitError;

/// Receiver for warnings raised during a walk.
///
/// # Thread Safety
///
/// Sinks are shared by backends that are `Send + Sync`, so sinks must be too.
///
/// # Example
///
/// ```rust
/// use scanfs::{VisitError, WarningSink};
/// use std::path::{Path, PathBuf};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<PathBuf>>);
///
/// impl WarningSink for Collect {
///     fn warn(&self, path: &Path, _error: &VisitError) {
///         self.0.lock().unwrap().push(path.to_path_buf());
///     }
/// }
/// ```
pub trait WarningSink: Send + Sync {
    /// Report that `path` failed with a tolerated error.
    fn warn(&self, path: &Path, error: &VisitError);
}

/// Sink that forwards warnings to the `tracing` subscriber in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, path: &Path, error: &VisitError) {
        tracing::warn!(path = %path.display(), error = %error, "tolerated parse failure");
    }
}
