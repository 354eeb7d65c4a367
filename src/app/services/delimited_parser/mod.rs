//! Delimited parser for named-column vendor exports
//!
//! Wuerth and SVAI ship DDT exports as ';'-separated rows under a named
//! header row. One format-agnostic parser drives a per-vendor
//! [`formats::FormatSpec`]; adding a vendor layout means declaring a new
//! spec, not writing a new parser.
//!
//! ## Architecture
//!
//! - [`formats`] - Per-vendor format specifications (declarative field maps)
//! - [`column_mapping`] - Header analysis and required-column enforcement
//! - [`field_parsers`] - Named-field extraction helpers
//! - [`parser`] - Row iteration, header population, line-item mapping

pub mod column_mapping;
pub mod field_parsers;
pub mod formats;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use formats::{FormatSpec, spec_for};
pub use parser::DelimitedParser;
