//! Exclusive read-only file handles.

use std::fs::File;
use std::io::Read;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{InspectError, Operation, Result};
use crate::stream::ByteStream;
use crate::types::FileMetadata;

/// An open, read-only file owned by exactly one inspection.
///
/// The descriptor is released once: by [`FileHandle::close`] on the normal
/// path, or when the handle goes out of scope on an error path.
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
    fd: RawFd,
}

impl FileHandle {
    /// Open `path` read-only. Failures are tagged with `op`.
    pub(crate) fn open_as(path: &Path, op: Operation) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "{op} failed");
            InspectError::io(op, e)
        })?;
        let fd = file.as_raw_fd();
        debug!(path = %path.display(), fd, "{op}");

        Ok(Self {
            file,
            path: path.to_path_buf(),
            fd,
        })
    }

    /// Open the target file read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_as(path.as_ref(), Operation::Open)
    }

    /// Numeric descriptor of the open file.
    pub const fn fd(&self) -> RawFd {
        self.fd
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot the file's metadata through the open descriptor.
    pub fn metadata(&self) -> Result<FileMetadata> {
        let meta = self.file.metadata().map_err(|e| {
            debug!(fd = self.fd, error = %e, "fstat failed");
            InspectError::io(Operation::Fstat, e)
        })?;
        let meta = FileMetadata::from(&meta);
        debug!(fd = self.fd, size = meta.size, "fstat");
        Ok(meta)
    }

    /// Read up to `buf.len()` bytes. `Ok(0)` is end-of-stream.
    ///
    /// Interrupted reads are not retried.
    pub fn read_chunk(&mut self, buf: &mut [u8], op: Operation) -> Result<usize> {
        let n = self.file.read(buf).map_err(|e| {
            debug!(fd = self.fd, error = %e, "{op} failed");
            InspectError::io(op, e)
        })?;
        trace!(fd = self.fd, len = buf.len(), n, "{op}");
        Ok(n)
    }

    /// Stream the remaining contents in fixed-size chunks.
    pub fn stream(&mut self) -> ByteStream<'_> {
        ByteStream::new(self)
    }

    /// Release the descriptor.
    pub fn close(self) {
        debug!(fd = self.fd, "close");
        drop(self.file);
    }
}
