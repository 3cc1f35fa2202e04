//! CLI argument parsing and dispatch.

pub mod args;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use colored::Colorize;
use fdinspect_core::{
    ContentMode, FileInspector, InspectorOptions, InvocationArguments, RandomSource,
};
use std::io::{self, BufWriter};
use std::process::ExitCode;

use crate::config::Config;
use crate::logging;

/// Entry point: run and map the outcome to an exit status.
pub fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    // Captured before clap sees them so every raw argument is echoed
    let invocation = InvocationArguments::from_env();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, cli.no_color);

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.output.unwrap_or(config.output_format);
    let inspector = FileInspector::new(resolve_options(&cli, config)).with_renderer(format);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    inspector.run(&invocation, &mut out)?;

    Ok(())
}

/// Merge flags over config values.
pub fn resolve_options(cli: &Cli, config: Config) -> InspectorOptions {
    let escape = cli.escape || config.escape;
    let sample = cli.sample_random || cli.random_source.is_some() || config.sample_random;
    let random_source = cli.random_source.clone().unwrap_or(config.random_source);

    InspectorOptions {
        path: cli.path.clone().unwrap_or(config.path),
        content: if escape {
            ContentMode::Escaped
        } else {
            ContentMode::Raw
        },
        random: sample.then(|| RandomSource::new(random_source)),
    }
}
