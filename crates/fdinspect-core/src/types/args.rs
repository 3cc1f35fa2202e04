use std::ffi::OsString;
use std::io::{self, Write};

/// The arguments a process was started with, program name first.
///
/// Captured once and never mutated. Non-UTF-8 arguments are converted
/// lossily for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArguments {
    values: Vec<String>,
}

impl InvocationArguments {
    /// Capture the current process's arguments.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_os(std::env::args_os())
    }

    /// Build from raw OS strings.
    pub fn from_os<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self {
            values: args
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Write one `"<index>: <value>"` line per argument.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, arg) in self.values.iter().enumerate() {
            writeln!(out, "{i}: {arg}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for InvocationArguments {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}
