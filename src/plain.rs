//! # Plain Directory Backend
//!
//! [`PlainFilesystem`] scans a real directory tree on the host.
//!
//! ## Visit Order
//!
//! The walk is depth-first. Entries within each directory are visited in
//! file-name order, and a directory's own entry comes before its contents.
//! For a root holding `a.txt`, `b.txt` and `d/c.txt`, the visitor sees
//! `a.txt`, `b.txt`, `d/c.txt`.
//!
//! ## What Gets Visited
//!
//! Regular files, and symlinks that resolve to a regular file. Directories
//! are structural and never reach the visitor. By default a symlink to a
//! directory is not descended into and a dangling symlink is skipped; with
//! [`PlainFilesystem::follow_links`] enabled, linked directories are walked
//! too. Sockets, FIFOs and devices are skipped.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::{FsConfig, FsError, FsRead, FsWalk, TracingSink, WalkFn, WarningSink};

/// A filesystem backed by a directory on the host.
///
/// The root is fixed at construction. Paths handed to the visitor are the
/// root joined with each file's relative path, and [`read_file`](FsRead::read_file)
/// accepts those paths as-is.
///
/// # Example
///
/// ```rust,no_run
/// use scanfs::{FsError, FsWalk, PlainFilesystem};
///
/// fn list(root: &str) -> Result<(), FsError> {
///     let fs = PlainFilesystem::new(root);
///     fs.walk_dir(&mut |path| {
///         println!("{}", path.display());
///         Ok(())
///     })
/// }
/// ```
#[derive(Clone)]
pub struct PlainFilesystem {
    root: PathBuf,
    follow_links: bool,
    sink: Arc<dyn WarningSink>,
}

impl PlainFilesystem {
    /// Create a backend rooted at `root`.
    ///
    /// The path is not checked here; a missing root surfaces as an error from
    /// the first walk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
            sink: Arc::new(TracingSink),
        }
    }

    /// Send tolerated-failure warnings to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Descend into symlinked directories. Off by default.
    ///
    /// Symlinks to regular files are visited either way.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// The directory this backend scans.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl fmt::Debug for PlainFilesystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainFilesystem")
            .field("root", &self.root)
            .field("follow_links", &self.follow_links)
            .finish_non_exhaustive()
    }
}

impl FsWalk for PlainFilesystem {
    fn walk_dir(&self, visitor: &mut WalkFn<'_>) -> Result<(), FsError> {
        tracing::debug!(root = %self.root.display(), "walking directory");

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        let mut visited = 0usize;
        for entry in walker {
            let entry = entry.map_err(|e| FsError::from_walk(e, &self.root))?;
            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            // Unfollowed links are visited when they resolve to a regular file.
            let is_file = if entry.path_is_symlink() && !self.follow_links {
                match std::fs::metadata(entry.path()) {
                    Ok(target) => target.is_file(),
                    Err(e) => {
                        tracing::debug!(
                            path = %entry.path().display(),
                            error = %e,
                            "skipping dangling symlink"
                        );
                        false
                    }
                }
            } else {
                file_type.is_file()
            };
            if !is_file {
                tracing::debug!(path = %entry.path().display(), "skipping non-regular entry");
                continue;
            }

            visited += 1;
            match visitor(entry.path()) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => self.sink.warn(entry.path(), &e),
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), "visitor aborted walk");
                    return Err(FsError::Visitor(e));
                }
            }
        }

        tracing::debug!(root = %self.root.display(), visited, "walk complete");
        Ok(())
    }
}

impl FsRead for PlainFilesystem {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, "read", path))
    }
}

// A plain directory has no native build/runtime configuration.
impl FsConfig for PlainFilesystem {}
