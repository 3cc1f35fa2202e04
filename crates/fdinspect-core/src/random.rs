//! One-byte sampling from a randomness device.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{InspectError, Operation, Result};
use crate::handle::FileHandle;

/// Device the `rand:` pseudo-path maps to on Unix.
pub const DEFAULT_RANDOM_SOURCE: &str = "/dev/urandom";

/// A readable randomness device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSource {
    path: PathBuf,
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_SOURCE)
    }
}

impl RandomSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the source, read exactly one byte and release it again.
    ///
    /// The byte is returned reinterpreted as a signed value.
    pub fn sample(&self) -> Result<i8> {
        let mut handle = FileHandle::open_as(&self.path, Operation::OpenRand)?;
        let mut byte = [0u8; 1];
        let n = handle.read_chunk(&mut byte, Operation::ReadRand)?;
        handle.close();

        if n == 0 {
            return Err(InspectError::ShortRandom);
        }
        let value = i8::from_ne_bytes(byte);
        debug!(path = %self.path.display(), value, "rand");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_sample_is_signed() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&[0xfe, 0x01]).unwrap();
        tmp.flush().unwrap();

        let source = RandomSource::new(tmp.path());
        assert_eq!(source.sample().unwrap(), -2);
    }

    #[test]
    fn test_empty_source() {
        let tmp = NamedTempFile::new().unwrap();
        let err = RandomSource::new(tmp.path()).sample().unwrap_err();
        assert!(matches!(err, InspectError::ShortRandom));
        assert_eq!(err.operation(), Operation::ReadRand);
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let err = RandomSource::new(dir.path().join("nope"))
            .sample()
            .unwrap_err();
        assert_eq!(err.operation(), Operation::OpenRand);
    }

    #[test]
    fn test_default_device() {
        let source = RandomSource::default();
        assert_eq!(source.path(), Path::new(DEFAULT_RANDOM_SOURCE));
        if source.path().exists() {
            source.sample().unwrap();
        }
    }
}
