//! DDT Importer Library
//!
//! A Rust library for normalizing supplier delivery documents (DDT,
//! "Documento di Trasporto") from incompatible flat-text exports into one
//! uniform document model.
//!
//! This library provides tools for:
//! - Detecting which vendor layout a raw text blob uses
//! - Parsing delimited exports via named-column lookup (Wuerth, Svai)
//! - Parsing positional fixed-width exports via per-revision offset tables (Innerhofer)
//! - Normalizing locale-ambiguous numeric tokens into decimal values
//! - Flagging documents whose recipient does not match accepted aliases
//! - Collecting per-row diagnostics instead of failing whole documents

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod delimited_parser;
        pub mod destination_validator;
        pub mod diagnostics;
        pub mod fixed_width_parser;
        pub mod format_detector;
        pub mod importer;
        pub mod numeric;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Document, DocumentFormat, LineItem, VerificationStatus};
pub use app::services::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use app::services::importer::{DdtImporter, ImportOutcome};
pub use config::{ImportConfig, RowPolicy};

/// Result type alias for DDT import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for DDT import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Format detection yielded no unique answer
    #[error("cannot determine document format: {message}")]
    AmbiguousFormat { message: String },

    /// An explicit format hint named no known parser
    #[error("unsupported document format: '{name}'")]
    UnsupportedFormat { name: String },

    /// A required column is absent from a delimited header row
    #[error("required column '{column}' missing from {format} header")]
    MissingColumn { format: String, column: String },

    /// A fixed-width field extends past the end of its line
    #[error("line {line}: record too short ({actual} bytes, field ends at {required})")]
    RecordTooShort {
        line: usize,
        required: usize,
        actual: usize,
    },

    /// A data row could not be mapped under the strict row policy
    #[error("line {line}: {message}")]
    RowParse { line: usize, message: String },

    /// Parsing produced zero line items
    #[error("{format} document contains no line items")]
    EmptyDocument { format: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an ambiguous format error
    pub fn ambiguous_format(message: impl Into<String>) -> Self {
        Self::AmbiguousFormat {
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Create a missing column error
    pub fn missing_column(format: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            format: format.into(),
            column: column.into(),
        }
    }

    /// Create a record too short error
    pub fn record_too_short(line: usize, required: usize, actual: usize) -> Self {
        Self::RecordTooShort {
            line,
            required,
            actual,
        }
    }

    /// Create a row parse error
    pub fn row_parse(line: usize, message: impl Into<String>) -> Self {
        Self::RowParse {
            line,
            message: message.into(),
        }
    }

    /// Create an empty document error
    pub fn empty_document(format: impl Into<String>) -> Self {
        Self::EmptyDocument {
            format: format.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
