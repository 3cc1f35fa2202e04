//! The inspection pipeline: echo arguments, open, stat, stream, sample.

use std::io::{self, Write};
use std::os::unix::io::RawFd;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{InspectError, Operation, Result};
use crate::handle::FileHandle;
use crate::random::RandomSource;
use crate::stream::ContentMode;
use crate::types::{FileMetadata, InvocationArguments};

/// File inspected when no path is configured.
pub const DEFAULT_PATH: &str = "README.md";

/// Renders the metadata section of a report.
pub trait MetadataRenderer {
    fn render(&self, out: &mut dyn Write, meta: &FileMetadata) -> io::Result<()>;
}

/// One `"<label>: <value>"` line per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledLines;

impl MetadataRenderer for LabeledLines {
    fn render(&self, mut out: &mut dyn Write, meta: &FileMetadata) -> io::Result<()> {
        meta.write_lines(&mut out)
    }
}

/// What to inspect and how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorOptions {
    /// Target file, relative paths resolve against the working directory
    pub path: PathBuf,
    /// How the file's bytes are written
    pub content: ContentMode,
    /// Randomness source to sample after streaming, if any
    pub random: Option<RandomSource>,
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            content: ContentMode::Raw,
            random: None,
        }
    }
}

/// Summary of a completed inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Descriptor the target was opened on
    pub fd: RawFd,
    /// Metadata snapshot taken through that descriptor
    pub metadata: FileMetadata,
    /// Content bytes streamed
    pub bytes: u64,
    /// Sampled random byte, if sampling was enabled
    pub random: Option<i8>,
}

/// Runs the inspection steps in order, stopping at the first failure.
///
/// Every handle acquired is released on every exit path.
#[derive(Debug, Clone)]
pub struct FileInspector<R = LabeledLines> {
    options: InspectorOptions,
    renderer: R,
}

impl FileInspector<LabeledLines> {
    pub const fn new(options: InspectorOptions) -> Self {
        Self {
            options,
            renderer: LabeledLines,
        }
    }
}

impl<R: MetadataRenderer> FileInspector<R> {
    /// Replace the metadata renderer.
    pub fn with_renderer<T: MetadataRenderer>(self, renderer: T) -> FileInspector<T> {
        FileInspector {
            options: self.options,
            renderer,
        }
    }

    pub const fn options(&self) -> &InspectorOptions {
        &self.options
    }

    /// Run every step against `out`.
    pub fn run<W: Write>(&self, args: &InvocationArguments, out: &mut W) -> Result<Report> {
        debug!(pid = std::process::id(), argc = args.len(), "inspect");

        self.enumerate_arguments(args, out)?;

        let mut handle = self.open_target(out)?;
        let fd = handle.fd();
        let metadata = self.report_metadata(&handle, out)?;
        let bytes = self.stream_contents(&mut handle, out)?;
        handle.close();

        let random = match &self.options.random {
            Some(source) => Some(self.sample_randomness(source, out)?),
            None => None,
        };

        out.flush().map_err(write_error)?;
        info!(path = %self.options.path.display(), bytes, "inspection complete");

        Ok(Report {
            fd,
            metadata,
            bytes,
            random,
        })
    }

    /// Write `"<index>: <value>"` for each argument.
    pub fn enumerate_arguments<W: Write>(
        &self,
        args: &InvocationArguments,
        out: &mut W,
    ) -> Result<()> {
        args.write_lines(out).map_err(write_error)
    }

    /// Open the configured path and print its descriptor.
    pub fn open_target<W: Write>(&self, out: &mut W) -> Result<FileHandle> {
        let handle = FileHandle::open(&self.options.path)?;
        writeln!(out, "open {}", handle.fd()).map_err(write_error)?;
        Ok(handle)
    }

    /// Snapshot metadata and render it.
    pub fn report_metadata<W: Write>(
        &self,
        handle: &FileHandle,
        out: &mut W,
    ) -> Result<FileMetadata> {
        let meta = handle.metadata()?;
        self.renderer.render(out, &meta).map_err(write_error)?;
        Ok(meta)
    }

    /// Copy the remaining contents of `handle` to `out`.
    pub fn stream_contents<W: Write>(&self, handle: &mut FileHandle, out: &mut W) -> Result<u64> {
        handle.stream().copy_to(out, self.options.content)
    }

    /// Read one byte from `source` and print it as `rand <value>`.
    pub fn sample_randomness<W: Write>(&self, source: &RandomSource, out: &mut W) -> Result<i8> {
        let value = source.sample()?;
        writeln!(out, "rand {value}").map_err(write_error)?;
        Ok(value)
    }
}

fn write_error(e: io::Error) -> InspectError {
    InspectError::io(Operation::Write, e)
}
