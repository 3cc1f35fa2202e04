//! # fdinspect-cli
//!
//! Command-line front end for [`fdinspect_core`].
//!
//! ## Features
//!
//! - **Argument echo**: every raw argument printed as `<index>: <value>`
//! - **Metadata report**: labeled lines, JSON or YAML
//! - **Content streaming**: raw bytes or ASCII-escaped
//! - **Randomness sample**: optional single byte from `/dev/urandom`
//! - **Config file**: TOML defaults under the platform config directory

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::{main, run};
