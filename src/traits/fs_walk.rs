//! Traversal of a filesystem's files.

use std::path::Path;

use crate::{FsError, VisitError};

/// Per-file callback passed to [`FsWalk::walk_dir`].
///
/// Receives the path of each file as the walk produced it.
pub type WalkFn<'a> = dyn FnMut(&Path) -> Result<(), VisitError> + 'a;

/// Walk every file reachable from a backend's root.
///
/// # Contract
///
/// - The visitor is called once per file, synchronously, on the calling thread.
///   It is never called for directories.
/// - A visitor error for which [`VisitError::is_recoverable`] is `true` is
///   reported as a warning and the walk continues.
/// - Any other visitor error stops the walk immediately and is returned as
///   [`FsError::Visitor`], unchanged.
/// - A failure to enumerate part of the tree stops the walk and is returned.
///
/// Backends document their visit order.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsWalk`.
pub trait FsWalk: Send + Sync {
    /// Visit every file under the root.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the root does not exist
    /// - [`FsError::PermissionDenied`] if part of the tree cannot be listed
    /// - [`FsError::Visitor`] if the visitor returned a non-recoverable error
    fn walk_dir(&self, visitor: &mut WalkFn<'_>) -> Result<(), FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_walk_is_object_safe() {
        fn _check(_: &dyn FsWalk) {}
    }

    #[test]
    fn walk_fn_accepts_capturing_closure() {
        let mut seen = Vec::new();
        let visitor: &mut WalkFn<'_> = &mut |path: &Path| {
            seen.push(path.to_path_buf());
            Ok(())
        };
        visitor(Path::new("/a")).unwrap();
        visitor(Path::new("/b")).unwrap();
        assert_eq!(seen.len(), 2);
    }
}
