//! Fixed-width parser for positional Innerhofer exports
//!
//! Innerhofer ships DDT exports as positional records: no header row, no
//! delimiter, a 3-character record tag at offset 0 and fields at fixed byte
//! offsets. The offsets differ between export revisions, so they live in
//! per-revision [`layout::RevisionLayout`] tables rather than code.
//!
//! ## Architecture
//!
//! - [`layout`] - Per-revision offset tables and span extraction
//! - [`parser`] - Record-tag dispatch and line-item construction

pub mod layout;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use layout::{FieldSpan, RevisionId, RevisionLayout};
pub use parser::FixedWidthParser;
