//! Import facade: raw document text in, normalized document out
//!
//! The single boundary operation of the crate: resolve the vendor format
//! (explicit hint or detection), dispatch to the matching parser over the
//! closed [`DocumentFormat`] set, run the advisory destination check, and
//! hand back the document together with its diagnostics.

use tracing::info;

use super::delimited_parser::{DelimitedParser, spec_for};
use super::destination_validator;
use super::diagnostics::Diagnostics;
use super::fixed_width_parser::{FixedWidthParser, RevisionLayout};
use super::format_detector;
use crate::app::models::{Document, DocumentFormat};
use crate::config::ImportConfig;
use crate::{Error, Result};

/// Result of one import: the normalized document plus accumulated
/// diagnostics for rows that could not be fully mapped.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub document: Document,
    pub format: DocumentFormat,
    pub diagnostics: Diagnostics,
}

/// Stateless importer for DDT document texts.
///
/// Holds only configuration; independent documents may be parsed by
/// independent importers concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct DdtImporter {
    config: ImportConfig,
}

impl DdtImporter {
    /// Create an importer with the given configuration
    pub fn new(config: ImportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an importer with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    /// Parse one document text into a normalized document.
    ///
    /// An explicit `format_hint` bypasses detection; it must name a
    /// supported format.
    pub fn parse(&self, text: &str, format_hint: Option<&str>) -> Result<ImportOutcome> {
        let format = format_detector::resolve(text, format_hint)?;
        info!("importing document as {} format", format);

        let mut diagnostics = Diagnostics::new();
        let mut document = match format {
            DocumentFormat::Wuerth | DocumentFormat::Svai => {
                let spec = spec_for(format).ok_or_else(|| {
                    Error::unsupported_format(format.name())
                })?;
                DelimitedParser::new(spec, &self.config).parse(text, &mut diagnostics)?
            }
            DocumentFormat::Innerhofer => {
                let layout = RevisionLayout::for_revision(self.config.fixed_width_revision);
                FixedWidthParser::new(layout, &self.config)?.parse(text, &mut diagnostics)?
            }
        };

        destination_validator::verify(&mut document, &self.config.accepted_recipients);

        info!(
            "import complete: {} line items, {} diagnostics, verification {:?}",
            document.line_items.len(),
            diagnostics.entries.len(),
            document.verification
        );
        Ok(ImportOutcome {
            document,
            format,
            diagnostics,
        })
    }
}
