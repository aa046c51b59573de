//! Read operations for scan sources.

use std::path::Path;

use crate::FsError;

/// Read access to files within a backend's namespace.
///
/// Reads are independent of any walk in progress and may be issued from
/// inside a visitor or from other threads.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsRead`.
pub trait FsRead: Send + Sync {
    /// Read entire file contents as bytes.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotAFile`] if the path is a directory
    /// - [`FsError::PermissionDenied`] if read access is denied
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Read file contents as UTF-8 string.
    ///
    /// # Errors
    ///
    /// - Everything [`read_file`](Self::read_file) returns
    /// - [`FsError::InvalidData`] if the file contains invalid UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|e| FsError::InvalidData {
            path: path.to_path_buf(),
            details: e.utf8_error().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl FsRead for Fixed {
        fn read_file(&self, _: &Path) -> Result<Vec<u8>, FsError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn fs_read_is_object_safe() {
        fn _check(_: &dyn FsRead) {}
    }

    #[test]
    fn fs_read_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: FsRead>() {
            _assert_send_sync::<T>();
        }
    }

    #[test]
    fn read_to_string_decodes_utf8() {
        let fs = Fixed(b"-----BEGIN CERTIFICATE-----".to_vec());
        assert_eq!(
            fs.read_to_string(Path::new("/c.pem")).unwrap(),
            "-----BEGIN CERTIFICATE-----"
        );
    }

    #[test]
    fn read_to_string_rejects_invalid_utf8() {
        let fs = Fixed(vec![0xff, 0xfe, 0x00]);
        let err = fs.read_to_string(Path::new("/der.bin")).unwrap_err();
        assert!(matches!(err, FsError::InvalidData { .. }));
    }
}
