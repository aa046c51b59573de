//! Scan a directory for PEM-encoded material.
//!
//! Demonstrates the error-tolerance policy: files that look like PEM but do
//! not parse are logged as warnings and skipped, while an unreadable file
//! aborts the scan.
//!
//! Run with: `RUST_LOG=debug cargo run --example scan_directory -- /etc/ssl`

use scanfs::{Filesystem, FsError, PlainFilesystem, VisitError};
use tracing_subscriber::EnvFilter;

const BEGIN: &[u8] = b"-----BEGIN ";
const END: &[u8] = b"-----END ";

/// Count PEM blocks, flagging files whose blocks are not terminated.
fn scan(fs: &dyn Filesystem) -> Result<usize, FsError> {
    let mut blocks = 0;
    fs.walk_dir(&mut |path| {
        let data = fs.read_file(path)?;
        let begins = count(&data, BEGIN);
        if begins == 0 {
            return Ok(());
        }
        if count(&data, END) != begins {
            return Err(VisitError::parse_failed(path, "unterminated PEM block"));
        }
        blocks += begins;
        Ok(())
    })?;
    Ok(blocks)
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let root = std::env::args().nth(1).unwrap_or_else(|| ".".into());
    let fs = PlainFilesystem::new(root);

    match scan(&fs) {
        Ok(blocks) => tracing::info!(root = %fs.root().display(), blocks, "scan complete"),
        Err(e) => {
            tracing::error!(error = %e, "scan failed");
            std::process::exit(1);
        }
    }
}
