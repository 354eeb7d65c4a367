//! Configuration for DDT import behavior
//!
//! Provides the per-import configuration surface: row strictness policy,
//! fixed-width layout revision selection, and the accepted-recipient aliases
//! used by the advisory destination check.

use crate::Result;
use crate::app::services::fixed_width_parser::layout::RevisionId;
use serde::{Deserialize, Serialize};

/// Strictness policy for per-row parse failures.
///
/// This is an explicit parameter of every parser, not per-format ad hoc
/// behavior. Structural errors (unknown format, missing column, empty
/// document) always abort regardless of policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Skip the failing row, record a diagnostic, keep parsing (default)
    #[default]
    Tolerant,

    /// Abort the whole parse on the first row failure
    Strict,
}

impl RowPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, RowPolicy::Strict)
    }
}

/// Configuration for one importer instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// How per-row failures are handled
    pub row_policy: RowPolicy,

    /// Which fixed-width offset revision to parse Innerhofer exports with
    pub fixed_width_revision: RevisionId,

    /// Accepted-recipient aliases for the destination check, matched
    /// case-insensitively as substrings. Empty leaves documents NotChecked.
    pub accepted_recipients: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            row_policy: RowPolicy::Tolerant,
            fixed_width_revision: RevisionId::default(),
            accepted_recipients: Vec::new(),
        }
    }
}

impl ImportConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Blank aliases would match every document; reject them early.
        for alias in &self.accepted_recipients {
            if alias.trim().is_empty() {
                return Err(crate::Error::configuration(
                    "accepted recipient alias must not be blank",
                ));
            }
        }
        Ok(())
    }
}
