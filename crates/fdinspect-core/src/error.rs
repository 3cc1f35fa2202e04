use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias for inspection operations
pub type Result<T> = std::result::Result<T, InspectError>;

/// The low-level operation an error is attributed to.
///
/// The label is what gets printed in front of the system error message,
/// in the same way `perror(3)` tags its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Opening the target file
    Open,
    /// Querying metadata through the open handle
    Fstat,
    /// Reading a chunk of the target file
    Read,
    /// Writing a report line or content bytes to the output
    Write,
    /// Opening the randomness source
    OpenRand,
    /// Reading from the randomness source
    ReadRand,
}

impl Operation {
    /// Short context label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fstat => "fstat",
            Self::Read => "read",
            Self::Write => "write",
            Self::OpenRand => "open rand",
            Self::ReadRand => "read rand",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while inspecting a file.
///
/// Every variant is fatal; nothing in this crate retries.
#[derive(Error, Debug)]
pub enum InspectError {
    /// An I/O operation failed
    #[error("{op}")]
    Io {
        /// Which operation failed
        op: Operation,
        /// The underlying system error
        #[source]
        source: io::Error,
    },

    /// The randomness source reached end-of-stream before yielding a byte
    #[error("{}: randomness source returned no data", Operation::ReadRand)]
    ShortRandom,
}

impl InspectError {
    /// Attach an operation label to an I/O error.
    pub const fn io(op: Operation, source: io::Error) -> Self {
        Self::Io { op, source }
    }

    /// Returns the operation this error is attributed to
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Io { op, .. } => *op,
            Self::ShortRandom => Operation::ReadRand,
        }
    }
}
