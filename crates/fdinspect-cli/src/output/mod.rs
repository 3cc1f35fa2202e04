//! Output formatting for the metadata section.

use clap::ValueEnum;
use fdinspect_core::{FileMetadata, MetadataRenderer};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

/// Available metadata formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `label: value` line per field
    #[default]
    Plain,
    /// Pretty-printed JSON object
    Json,
    /// YAML document
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: plain, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl MetadataRenderer for OutputFormat {
    fn render(&self, mut out: &mut dyn Write, meta: &FileMetadata) -> io::Result<()> {
        match self {
            Self::Plain => meta.write_lines(&mut out),
            Self::Json => {
                serde_json::to_writer_pretty(&mut out, meta)?;
                writeln!(out)
            }
            Self::Yaml => {
                let doc = serde_yaml::to_string(meta)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                out.write_all(doc.as_bytes())
            }
        }
    }
}
