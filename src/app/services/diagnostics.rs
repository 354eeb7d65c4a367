//! Diagnostics accumulator for partial-failure parsing
//!
//! Expected, recoverable per-row issues (malformed rows, short fixed-width
//! records, unparsable numeric tokens) are collected here instead of being
//! raised as errors, so the overall parse result is (document, diagnostics)
//! rather than control flow by exception. Nothing in the core writes to the
//! console or any global state.

use serde::{Deserialize, Serialize};

/// Kinds of recoverable per-row issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Delimited row with fewer fields than the header width
    MalformedRow,

    /// Fixed-width field extended past the end of its line
    RecordTooShort,

    /// Numeric token unparsable under any locale; value degraded to zero
    NumericParseFailure,

    /// Row skipped under the tolerant row policy
    RowSkipped,
}

/// A single recorded diagnostic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based physical line number in the source text, where known
    pub line: Option<usize>,

    /// Issue category
    pub kind: DiagnosticKind,

    /// Human-readable detail
    pub message: String,
}

/// Parsing statistics and accumulated diagnostics for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Total number of data rows encountered
    pub rows_seen: usize,

    /// Number of line items successfully parsed
    pub items_parsed: usize,

    /// Number of rows skipped due to recoverable issues
    pub rows_skipped: usize,

    /// Recorded issues in encounter order
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue against a source line
    pub fn record(&mut self, line: Option<usize>, kind: DiagnosticKind, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            line,
            kind,
            message: message.into(),
        });
    }

    /// Whether the parse completed without any recorded issue
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty() && self.rows_skipped == 0
    }

    /// Fraction of encountered rows that yielded a line item, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.items_parsed as f64 / self.rows_seen as f64) * 100.0
        }
    }

    /// Number of entries of the given kind
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
