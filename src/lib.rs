//! # scanfs
//!
//! A uniform **"tree of files to be scanned"** abstraction for
//! cryptographic-material scanners.
//!
//! A scanner written against [`Filesystem`] runs unchanged over a plain
//! directory today and over container image layers or other virtual sources
//! later. This crate defines the contract and ships the plain-directory
//! backend.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scanfs::{Filesystem, FsError, PlainFilesystem, VisitError};
//!
//! fn scan(fs: &dyn Filesystem) -> Result<(), FsError> {
//!     fs.walk_dir(&mut |path| {
//!         let data = fs.read_file(path)?;
//!         if data.starts_with(b"-----BEGIN") && !data.ends_with(b"-----\n") {
//!             // Logged and skipped; the walk keeps going.
//!             return Err(VisitError::parse_failed(path, "unterminated PEM block"));
//!         }
//!         Ok(())
//!     })
//! }
//!
//! scan(&PlainFilesystem::new("/etc/ssl")).unwrap();
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Filesystem`] | The capability contract: walk, read, config |
//! | [`PlainFilesystem`] | Backend over a host directory |
//! | [`VisitError`] | Visitor result: recoverable parse failure or fatal failure |
//! | [`FsError`] | Walk and read errors with context |
//! | [`ContainerConfig`] | Optional container configuration descriptor |
//! | [`WarningSink`] | Where tolerated failures are reported |
//!
//! ---
//!
//! ## Error Tolerance
//!
//! During [`walk_dir`](FsWalk::walk_dir):
//!
//! - [`VisitError::ParseFailedAlthoughChecked`] is passed to the backend's
//!   [`WarningSink`] and the walk continues.
//! - Any other visitor error stops the walk and is returned as
//!   [`FsError::Visitor`].
//! - Failures to list the tree stop the walk.
//!
//! There are no retries.
//!
//! ---
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events and never
//! installs a subscriber. Tolerated failures go through [`TracingSink`] at
//! `WARN` unless another sink is injected with
//! [`PlainFilesystem::with_sink`].
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`ContainerConfig`] and `ContainerConfig::from_image_config_json` |

// Private modules
mod config;
mod error;
mod ext;
mod plain;
mod sink;
mod traits;

// Public re-exports - error types
pub use error::{FsError, VisitError};

// Public re-exports - core types
pub use config::{ContainerConfig, EmptyObject};

// Public re-exports - traits
pub use traits::{Filesystem, FsConfig, FsRead, FsWalk, WalkFn};

// Public re-exports - backends
pub use plain::PlainFilesystem;

// Public re-exports - infrastructure
pub use ext::FilesystemExt;
pub use sink::{TracingSink, WarningSink};
