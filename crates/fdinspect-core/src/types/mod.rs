mod args;
mod metadata;

pub use args::*;
pub use metadata::*;
