//! # Extension Traits
//!
//! Convenience methods built on the [`Filesystem`] contract.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`files`](FilesystemExt::files) | Collect every visited path in walk order |
//! | [`walk_contents`](FilesystemExt::walk_contents) | Walk and hand each file's bytes to the visitor |
//!
//! Both go through [`walk_dir`](crate::FsWalk::walk_dir), so the backend's
//! ordering and error-tolerance policy apply unchanged.

use std::path::{Path, PathBuf};

use crate::{Filesystem, FsError, VisitError};

/// Extension methods for any filesystem backend.
///
/// Implemented for every [`Filesystem`], including `dyn Filesystem`.
///
/// # Example
///
/// ```rust,no_run
/// use scanfs::{FilesystemExt, FsError, PlainFilesystem, VisitError};
///
/// fn scan(root: &str) -> Result<(), FsError> {
///     let fs = PlainFilesystem::new(root);
///     fs.walk_contents(&mut |path, bytes| {
///         if bytes.starts_with(b"-----BEGIN") && !bytes.ends_with(b"-----\n") {
///             return Err(VisitError::parse_failed(path, "unterminated PEM block"));
///         }
///         Ok(())
///     })
/// }
/// ```
pub trait FilesystemExt: Filesystem {
    /// Collect the path of every file the walk visits, in walk order.
    ///
    /// # Errors
    ///
    /// Any enumeration failure from [`walk_dir`](crate::FsWalk::walk_dir).
    fn files(&self) -> Result<Vec<PathBuf>, FsError> {
        let mut paths = Vec::new();
        self.walk_dir(&mut |path| {
            paths.push(path.to_path_buf());
            Ok(())
        })?;
        Ok(paths)
    }

    /// Walk the tree and pass each file's path and full contents to `visitor`.
    ///
    /// A file that cannot be read aborts the walk like any other fatal
    /// visitor failure.
    ///
    /// # Errors
    ///
    /// - Any enumeration failure from [`walk_dir`](crate::FsWalk::walk_dir)
    /// - [`FsError::Visitor`] wrapping a read failure or the visitor's own
    ///   non-recoverable error
    fn walk_contents(
        &self,
        visitor: &mut dyn FnMut(&Path, &[u8]) -> Result<(), VisitError>,
    ) -> Result<(), FsError> {
        self.walk_dir(&mut |path| {
            let bytes = self.read_file(path)?;
            visitor(path, bytes.as_slice())
        })
    }
}

impl<T: Filesystem + ?Sized> FilesystemExt for T {}
