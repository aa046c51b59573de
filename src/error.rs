//! Error types for filesystem traversal and reads.

use std::path::{Path, PathBuf};

/// Filesystem error type returned by walks and reads.
///
/// All error variants include relevant context (path, operation) where applicable.
/// Uses `#[non_exhaustive]` so new backends can add failure kinds.
///
/// # Examples
///
/// ```rust
/// use scanfs::FsError;
/// use std::path::PathBuf;
///
/// let err = FsError::NotFound { path: PathBuf::from("/missing") };
/// assert!(err.to_string().contains("/missing"));
/// assert!(err.is_not_found());
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Expected a file but found something else.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: PathBuf,
    },

    /// Permission denied for operation.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// File content could not be interpreted as requested.
    #[error("invalid data: {path} ({details})")]
    InvalidData {
        /// The path with invalid data.
        path: PathBuf,
        /// Details about the invalid data.
        details: String,
    },

    /// The directory walk could not descend into part of the tree.
    #[error("walk failed at {path}: {source}")]
    Walk {
        /// The entry the walk failed on.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// The visitor aborted the walk with a non-recoverable failure.
    ///
    /// The visitor's error is carried unchanged.
    #[error(transparent)]
    Visitor(VisitError),

    /// The backend's configuration descriptor could not be decoded.
    #[error("malformed container config: {0}")]
    Config(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Returns `true` for the not-found class of errors.
    pub fn is_not_found(&self) -> bool {
        match self {
            FsError::NotFound { .. } => true,
            FsError::Walk { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            _ => false,
        }
    }

    /// Map an I/O error into the most specific variant, keeping the path.
    pub(crate) fn from_io(error: std::io::Error, operation: &'static str, path: &Path) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, operation },
            std::io::ErrorKind::IsADirectory => FsError::NotAFile { path },
            _ => FsError::Io {
                operation,
                path,
                source: error,
            },
        }
    }

    /// Map a `walkdir` error. Entries without a path are attributed to `root`.
    pub(crate) fn from_walk(error: walkdir::Error, root: &Path) -> Self {
        let path = error.path().unwrap_or(root).to_path_buf();
        match error.io_error().map(std::io::Error::kind) {
            Some(std::io::ErrorKind::NotFound) => FsError::NotFound { path },
            Some(std::io::ErrorKind::PermissionDenied) => FsError::PermissionDenied {
                path,
                operation: "walk",
            },
            _ => FsError::Walk {
                path,
                source: error,
            },
        }
    }
}

impl From<VisitError> for FsError {
    fn from(error: VisitError) -> Self {
        FsError::Visitor(error)
    }
}

/// Result of a single visitor call that did not succeed.
///
/// The walk treats the two kinds differently:
///
/// - [`VisitError::ParseFailedAlthoughChecked`] is logged and the walk continues.
/// - [`VisitError::Failed`] aborts the walk and is returned to the caller.
///
/// # Examples
///
/// ```rust
/// use scanfs::VisitError;
///
/// let soft = VisitError::parse_failed("/certs/a.pem", "truncated PEM block");
/// assert!(soft.is_recoverable());
///
/// let hard = VisitError::failed("out of memory");
/// assert!(!hard.is_recoverable());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// The file passed the pre-checks for a scan target but its content
    /// could not be parsed.
    #[error("parsing failed although checked: {path} ({reason})")]
    ParseFailedAlthoughChecked {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Any other failure. Aborts the walk.
    #[error("{0}")]
    Failed(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl VisitError {
    /// Build the recoverable parse-failure kind.
    pub fn parse_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        VisitError::ParseFailedAlthoughChecked {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a fatal failure from any error or message.
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        VisitError::Failed(error.into())
    }

    /// Returns `true` if the walk should log this error and keep going.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, VisitError::ParseFailedAlthoughChecked { .. })
    }
}

impl From<FsError> for VisitError {
    fn from(error: FsError) -> Self {
        VisitError::Failed(Box::new(error))
    }
}

impl From<std::io::Error> for VisitError {
    fn from(error: std::io::Error) -> Self {
        VisitError::Failed(Box::new(error))
    }
}
