//! File inspection primitives.
//!
//! This crate provides the pieces behind the `fdinspect` command:
//!
//! - **Handles**: exclusive read-only [`FileHandle`]s released on every path
//! - **Metadata**: [`FileMetadata`] snapshots of the twelve `stat` fields
//! - **Streams**: [`ByteStream`], fixed 256-byte reads until end-of-stream
//! - **Randomness**: [`RandomSource`], one signed byte from a device
//! - **Pipeline**: [`FileInspector`], which runs the steps in order
//!
//! # Example
//!
//! ```rust,no_run
//! use fdinspect_core::{FileInspector, InspectorOptions, InvocationArguments};
//!
//! fn main() -> fdinspect_core::Result<()> {
//!     let inspector = FileInspector::new(InspectorOptions::default());
//!     let report = inspector.run(&InvocationArguments::from_env(), &mut std::io::stdout())?;
//!     eprintln!("streamed {} bytes", report.bytes);
//!     Ok(())
//! }
//! ```

#[cfg(not(unix))]
compile_error!("fdinspect-core requires a Unix platform");

mod error;
pub mod handle;
pub mod inspector;
pub mod random;
pub mod stream;
pub mod types;

pub use error::{InspectError, Operation, Result};
pub use handle::FileHandle;
pub use inspector::{
    FileInspector, InspectorOptions, LabeledLines, MetadataRenderer, Report, DEFAULT_PATH,
};
pub use random::{RandomSource, DEFAULT_RANDOM_SOURCE};
pub use stream::{ByteStream, ContentMode, CHUNK_SIZE};
pub use types::*;
