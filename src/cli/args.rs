//! Command-line argument definitions for the DDT importer
//!
//! Defines the CLI interface using the clap derive API. The import command
//! maps its flags onto an [`ImportConfig`]; everything else in the core is
//! reachable through that configuration surface.

use crate::app::services::fixed_width_parser::RevisionId;
use crate::config::{ImportConfig, RowPolicy};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the DDT importer
///
/// Normalizes supplier delivery documents (DDT) from delimited or
/// fixed-width text exports into a uniform document model.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ddt-importer",
    version,
    about = "Normalize supplier DDT delivery documents into a uniform document model",
    long_about = "Reads a flat-text delivery document (DDT) export, detects which vendor \
                  layout it uses (or honors an explicit format), extracts header and line-item \
                  data, and prints the normalized document. Per-row issues are reported as \
                  diagnostics instead of failing the whole document."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import one DDT text export and print the normalized document
    Import(ImportArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Path to the DDT text export to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Explicit format, bypassing detection (wuerth, svai, innerhofer)
    ///
    /// When omitted the importer infers the format from the first
    /// non-empty line of the file.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Abort on the first row that cannot be mapped instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Fixed-width offset revision for Innerhofer exports (r2019, r2021, r2023)
    ///
    /// Defaults to the newest known revision.
    #[arg(long, value_name = "REV")]
    pub revision: Option<String>,

    /// Accepted recipient alias for the destination check (repeatable)
    ///
    /// With no aliases configured the document is reported as not checked.
    #[arg(long = "recipient", value_name = "ALIAS")]
    pub recipients: Vec<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Suppress everything except the document summary and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl ImportArgs {
    /// Build the importer configuration from CLI flags
    pub fn to_config(&self) -> Result<ImportConfig> {
        let fixed_width_revision = match &self.revision {
            Some(name) => RevisionId::parse(name).ok_or_else(|| {
                Error::configuration(format!(
                    "unknown fixed-width revision '{}' (expected r2019, r2021, or r2023)",
                    name
                ))
            })?,
            None => RevisionId::default(),
        };

        let config = ImportConfig {
            row_policy: if self.strict {
                RowPolicy::Strict
            } else {
                RowPolicy::Tolerant
            },
            fixed_width_revision,
            accepted_recipients: self.recipients.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import_args(extra: &[&str]) -> ImportArgs {
        let mut argv = vec!["ddt-importer", "import", "doc.txt"];
        argv.extend(extra);
        match Args::try_parse_from(argv).unwrap().command.unwrap() {
            Commands::Import(args) => args,
        }
    }

    #[test]
    fn test_defaults() {
        let args = import_args(&[]);
        let config = args.to_config().unwrap();
        assert_eq!(config.row_policy, RowPolicy::Tolerant);
        assert_eq!(config.fixed_width_revision, RevisionId::R2023);
        assert!(config.accepted_recipients.is_empty());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_strict_and_revision_flags() {
        let args = import_args(&["--strict", "--revision", "r2021"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.row_policy, RowPolicy::Strict);
        assert_eq!(config.fixed_width_revision, RevisionId::R2021);
    }

    #[test]
    fn test_unknown_revision_is_rejected() {
        let args = import_args(&["--revision", "r1999"]);
        assert!(args.to_config().is_err());
    }

    #[test]
    fn test_repeatable_recipients() {
        let args = import_args(&["--recipient", "Officina Rossi", "--recipient", "Rossi SRL"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.accepted_recipients.len(), 2);
    }
}
