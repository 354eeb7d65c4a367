//! Per-revision offset tables for the Innerhofer fixed-width export
//!
//! Innerhofer has shipped at least three incompatible revisions of the same
//! export, each moving field boundaries. Offsets are therefore data, not
//! code: every revision is a [`RevisionLayout`] value that can also be
//! deserialized from configuration to cover a layout change without a
//! rebuild.

use crate::constants::ORDER_REF_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed byte span within a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpan {
    /// Byte offset of the first character
    pub start: usize,

    /// Field width in bytes
    pub len: usize,
}

impl FieldSpan {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Extract this span from a line; `None` when the line is too short
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.start..self.end())
    }
}

/// Known revisions of the Innerhofer export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisionId {
    /// Original export observed through 2019
    R2019,
    /// Widened customer and description fields
    R2021,
    /// Current layout (default)
    #[default]
    R2023,
}

impl RevisionId {
    pub const ALL: &'static [RevisionId] = &[RevisionId::R2019, RevisionId::R2021, RevisionId::R2023];

    pub fn name(&self) -> &'static str {
        match self {
            RevisionId::R2019 => "r2019",
            RevisionId::R2021 => "r2021",
            RevisionId::R2023 => "r2023",
        }
    }

    /// Parse a revision name as used on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "r2019" | "2019" => Some(RevisionId::R2019),
            "r2021" | "2021" => Some(RevisionId::R2021),
            "r2023" | "2023" => Some(RevisionId::R2023),
            _ => None,
        }
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Complete offset table for one export revision.
///
/// Every line starts with a 3-character record tag at offset 0; spans are
/// absolute byte offsets within the full line, tag included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionLayout {
    pub revision: RevisionId,

    /// Tag marking a document header record
    pub header_tag: String,

    /// Tag marking a line-item detail record
    pub detail_tag: String,

    // Header record spans
    pub doc_number: FieldSpan,
    pub doc_date: FieldSpan,
    pub customer_name: FieldSpan,
    pub destination: FieldSpan,

    // Detail record spans
    pub supplier_code: FieldSpan,
    pub manufacturer_code: FieldSpan,
    pub description: FieldSpan,
    pub unit_of_measure: FieldSpan,
    pub quantity: FieldSpan,

    /// Marker preceding the order-reference token, searched rather than
    /// addressed by offset since its position varies between exports
    pub order_ref_marker: String,
}

impl RevisionLayout {
    /// Built-in offset table for a known revision
    pub fn for_revision(revision: RevisionId) -> Self {
        match revision {
            RevisionId::R2019 => Self {
                revision,
                header_tag: "TES".to_string(),
                detail_tag: "RIG".to_string(),
                doc_number: FieldSpan::new(3, 7),
                doc_date: FieldSpan::new(10, 8),
                customer_name: FieldSpan::new(18, 25),
                destination: FieldSpan::new(43, 30),
                supplier_code: FieldSpan::new(3, 10),
                manufacturer_code: FieldSpan::new(13, 10),
                description: FieldSpan::new(23, 30),
                unit_of_measure: FieldSpan::new(53, 2),
                quantity: FieldSpan::new(55, 8),
                order_ref_marker: ORDER_REF_MARKER.to_string(),
            },
            RevisionId::R2021 => Self {
                revision,
                header_tag: "TES".to_string(),
                detail_tag: "RIG".to_string(),
                doc_number: FieldSpan::new(3, 8),
                doc_date: FieldSpan::new(11, 8),
                customer_name: FieldSpan::new(19, 30),
                destination: FieldSpan::new(49, 35),
                supplier_code: FieldSpan::new(3, 13),
                manufacturer_code: FieldSpan::new(16, 13),
                description: FieldSpan::new(29, 35),
                unit_of_measure: FieldSpan::new(64, 2),
                quantity: FieldSpan::new(66, 8),
                order_ref_marker: ORDER_REF_MARKER.to_string(),
            },
            RevisionId::R2023 => Self {
                revision,
                header_tag: "TES".to_string(),
                detail_tag: "RIG".to_string(),
                doc_number: FieldSpan::new(3, 10),
                doc_date: FieldSpan::new(13, 8),
                customer_name: FieldSpan::new(21, 35),
                destination: FieldSpan::new(56, 40),
                supplier_code: FieldSpan::new(3, 15),
                manufacturer_code: FieldSpan::new(18, 15),
                description: FieldSpan::new(33, 40),
                unit_of_measure: FieldSpan::new(73, 3),
                quantity: FieldSpan::new(76, 8),
                order_ref_marker: ORDER_REF_MARKER.to_string(),
            },
        }
    }

    /// Length of the record-type tag at offset 0
    pub fn tag_len(&self) -> usize {
        self.header_tag.len()
    }
}
