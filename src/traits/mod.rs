//! # Filesystem Traits
//!
//! The capability contract every scan source implements.
//!
//! ## Component Traits
//!
//! | Trait | Operation | Purpose |
//! |-------|-----------|---------|
//! | [`FsWalk`] | `walk_dir` | Visit every file under the root |
//! | [`FsRead`] | `read_file` | Read one file by path |
//! | [`FsConfig`] | `config` | Native container configuration, if any |
//!
//! [`Filesystem`] combines the three and has a blanket implementation.
//! Implement the components and you get `Filesystem` for free:
//!
//! ```rust
//! use scanfs::{Filesystem, FsConfig, FsError, FsRead, FsWalk, WalkFn};
//! use std::path::Path;
//!
//! struct Empty;
//!
//! impl FsWalk for Empty {
//!     fn walk_dir(&self, _: &mut WalkFn<'_>) -> Result<(), FsError> { Ok(()) }
//! }
//! impl FsRead for Empty {
//!     fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
//!         Err(FsError::NotFound { path: path.to_path_buf() })
//!     }
//! }
//! impl FsConfig for Empty {}
//!
//! fn scan(_fs: &dyn Filesystem) {}
//! scan(&Empty); // ✓ Works
//! ```
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Methods take `&self`; backends hold no
//! mutable state shared between calls.

mod fs_config;
mod fs_read;
mod fs_walk;

pub use fs_config::FsConfig;
pub use fs_read::FsRead;
pub use fs_walk::{FsWalk, WalkFn};

/// A tree of files to be scanned.
///
/// Combines walking ([`FsWalk`]), reading ([`FsRead`]), and configuration
/// lookup ([`FsConfig`]). Callers hold a `Filesystem` and never branch on
/// which backend is behind it.
///
/// # Example
///
/// ```rust
/// use scanfs::{Filesystem, FsError, VisitError};
///
/// fn count_pem_files(fs: &dyn Filesystem) -> Result<usize, FsError> {
///     let mut count = 0;
///     fs.walk_dir(&mut |path| {
///         if path.extension().is_some_and(|ext| ext == "pem") {
///             let text = fs.read_to_string(path)?;
///             if !text.contains("-----BEGIN") {
///                 return Err(VisitError::parse_failed(path, "no PEM header"));
///             }
///             count += 1;
///         }
///         Ok(())
///     })?;
///     Ok(count)
/// }
/// ```
pub trait Filesystem: FsWalk + FsRead + FsConfig {}

// Blanket implementation - any type implementing all three gets Filesystem for free
impl<T: FsWalk + FsRead + FsConfig> Filesystem for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_is_object_safe() {
        fn _check(_: &dyn Filesystem) {}
        fn _boxed(_: Box<dyn Filesystem>) {}
    }

    #[test]
    fn filesystem_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<dyn Filesystem>();
    }
}
