//! Chunked, forward-only reads of an open file.

use std::io::Write;
use tracing::debug;

use crate::error::{InspectError, Operation, Result};
use crate::handle::FileHandle;

/// Fixed size of every read issued while streaming.
pub const CHUNK_SIZE: usize = 256;

/// How streamed bytes are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentMode {
    /// Bytes are written verbatim
    #[default]
    Raw,
    /// Bytes are written with ASCII escapes, followed by one newline at the end
    Escaped,
}

/// Lazy, finite byte sequence over a [`FileHandle`].
///
/// Each call to [`ByteStream::next_chunk`] issues one bounded read. Once a
/// zero-length read is observed the stream stays exhausted.
#[derive(Debug)]
pub struct ByteStream<'a> {
    handle: &'a mut FileHandle,
    buf: [u8; CHUNK_SIZE],
    done: bool,
}

impl<'a> ByteStream<'a> {
    pub(crate) fn new(handle: &'a mut FileHandle) -> Self {
        Self {
            handle,
            buf: [0; CHUNK_SIZE],
            done: false,
        }
    }

    /// Next chunk of at most [`CHUNK_SIZE`] bytes, or `None` at end-of-stream.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }
        let n = self.handle.read_chunk(&mut self.buf, Operation::Read)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(&self.buf[..n]))
    }

    /// Drain the stream into `out`, returning the number of bytes read.
    ///
    /// Every chunk is fully written before the next read is issued.
    pub fn copy_to<W: Write>(mut self, out: &mut W, mode: ContentMode) -> Result<u64> {
        let mut total = 0u64;
        let mut chunks = 0u64;
        while let Some(chunk) = self.next_chunk()? {
            total += chunk.len() as u64;
            chunks += 1;
            let written = match mode {
                ContentMode::Raw => out.write_all(chunk),
                ContentMode::Escaped => write_escaped(out, chunk),
            };
            written.map_err(|e| InspectError::io(Operation::Write, e))?;
        }
        if mode == ContentMode::Escaped {
            out.write_all(b"\n")
                .map_err(|e| InspectError::io(Operation::Write, e))?;
        }
        out.flush()
            .map_err(|e| InspectError::io(Operation::Write, e))?;

        debug!(fd = self.handle.fd(), bytes = total, chunks, "stream complete");
        Ok(total)
    }
}

fn write_escaped<W: Write>(out: &mut W, chunk: &[u8]) -> std::io::Result<()> {
    let escaped: Vec<u8> = chunk
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .collect();
    out.write_all(&escaped)
}
