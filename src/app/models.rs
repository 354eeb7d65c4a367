//! Data models for DDT import
//!
//! This module contains the core data structures for representing a
//! normalized delivery document: the document header, its ordered line
//! items, and the closed set of supported vendor formats.

use crate::constants::DOC_TYPE_DDT;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Document Format
// =============================================================================

/// The closed set of supported vendor layouts.
///
/// Each variant maps to exactly one parser: Wuerth and Svai are
/// delimiter-separated layouts read via named-column lookup, Innerhofer is
/// the positional fixed-width layout read via per-revision byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    Wuerth,
    Svai,
    Innerhofer,
}

impl DocumentFormat {
    /// All supported formats in detection priority order
    pub const ALL: &'static [DocumentFormat] = &[
        DocumentFormat::Wuerth,
        DocumentFormat::Svai,
        DocumentFormat::Innerhofer,
    ];

    /// Canonical lowercase name of the format
    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Wuerth => "wuerth",
            DocumentFormat::Svai => "svai",
            DocumentFormat::Innerhofer => "innerhofer",
        }
    }

    /// Whether this format is positional (no field delimiter)
    pub fn is_fixed_width(&self) -> bool {
        matches!(self, DocumentFormat::Innerhofer)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wuerth" => Ok(DocumentFormat::Wuerth),
            "svai" => Ok(DocumentFormat::Svai),
            "innerhofer" => Ok(DocumentFormat::Innerhofer),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

// =============================================================================
// Verification Status
// =============================================================================

/// Outcome of the advisory destination check.
///
/// `NotChecked` means no accepted-recipient aliases were configured, so the
/// check could not run. An `Unverified` document is still returned to the
/// caller; the flag exists so downstream consumers can route it to manual
/// review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    NotChecked,
    Verified,
    Unverified,
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }
}

// =============================================================================
// Document Header
// =============================================================================

/// A normalized delivery document: header data plus ordered line items.
///
/// Constructed fresh per parse call, populated in a single linear pass over
/// the input text, and handed to the caller with no reference back to the
/// raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable supplier identifier, fixed per format
    pub supplier_id: String,

    /// Human-readable supplier name, fixed per format
    pub supplier_name: String,

    /// Document type, always "DDT" for delivery documents
    pub doc_type: String,

    /// Document number from the source header data
    pub doc_number: Option<String>,

    /// Document issue date
    pub doc_date: Option<NaiveDate>,

    /// Customer code as assigned by the supplier
    pub customer_code: Option<String>,

    /// Resolved customer / recipient name
    pub customer_name: Option<String>,

    /// First free-text ship-to address line
    pub destination_line1: Option<String>,

    /// Second free-text ship-to address line
    pub destination_line2: Option<String>,

    /// Supplier-side order reference
    pub supplier_order_ref: Option<String>,

    /// Customer-side order reference
    pub customer_order_ref: Option<String>,

    /// Advisory destination check outcome
    pub verification: VerificationStatus,

    /// Line items in input order
    pub line_items: Vec<LineItem>,
}

impl Document {
    /// Create an empty document carrying the fixed supplier identity
    pub fn new(supplier_id: impl Into<String>, supplier_name: impl Into<String>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            supplier_name: supplier_name.into(),
            doc_type: DOC_TYPE_DDT.to_string(),
            doc_number: None,
            doc_date: None,
            customer_code: None,
            customer_name: None,
            destination_line1: None,
            destination_line2: None,
            supplier_order_ref: None,
            customer_order_ref: None,
            verification: VerificationStatus::NotChecked,
            line_items: Vec::new(),
        }
    }

    /// Whether document-level header fields have been populated.
    ///
    /// Header data is set exactly once, from the first record that carries
    /// it; parsers use this guard so later occurrences never overwrite.
    pub fn has_header_data(&self) -> bool {
        self.doc_number.is_some()
    }

    /// Append a line item, preserving input order
    pub fn push_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Validate the finished document for the given format.
    ///
    /// A document with zero line items is invalid and must not be returned
    /// successfully.
    pub fn finalize(self, format: DocumentFormat) -> Result<Self> {
        if self.line_items.is_empty() {
            return Err(Error::empty_document(format.name()));
        }
        Ok(self)
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// One product/quantity/price entry within a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based row number; parse order unless the source supplies an
    /// authoritative position, which is used verbatim
    pub row_number: u32,

    /// Row-type tag from the source, where present
    pub row_type: Option<String>,

    /// Generic article code
    pub article_code: Option<String>,

    /// Supplier-assigned article code
    pub supplier_article_code: Option<String>,

    /// Manufacturer article code
    pub manufacturer_code: Option<String>,

    /// EAN / barcode
    pub barcode: Option<String>,

    /// Article description
    pub description: Option<String>,

    /// Brand name
    pub brand: Option<String>,

    /// Delivered quantity, always non-negative
    pub quantity: f64,

    /// Unit of measure
    pub unit_of_measure: Option<String>,

    /// Packaging descriptor
    pub packaging: Option<String>,

    /// Unit price, rounded to 2 fractional digits
    pub unit_price: Option<f64>,

    /// Up to three successive discount percentages
    pub discount1: Option<f64>,
    pub discount2: Option<f64>,
    pub discount3: Option<f64>,

    /// Gross line total before discounts
    pub gross_total: Option<f64>,

    /// Net line total after discounts
    pub net_total: Option<f64>,

    /// VAT code from the source
    pub vat_code: Option<String>,

    /// VAT percentage applied to the line
    pub vat_rate: Option<f64>,

    /// Supplier-side order reference
    pub supplier_order_ref: Option<String>,

    /// Customer-side order reference
    pub customer_order_ref: Option<String>,
}

impl LineItem {
    /// Create an empty line item with the given row number
    pub fn new(row_number: u32) -> Self {
        Self {
            row_number,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trips_through_names() {
        for format in DocumentFormat::ALL {
            assert_eq!(format.name().parse::<DocumentFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_format_from_str_rejects_unknown_names() {
        let err = "spazio".parse::<DocumentFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { name } if name == "spazio"));
    }

    #[test]
    fn test_only_innerhofer_is_fixed_width() {
        assert!(DocumentFormat::Innerhofer.is_fixed_width());
        assert!(!DocumentFormat::Wuerth.is_fixed_width());
        assert!(!DocumentFormat::Svai.is_fixed_width());
    }

    #[test]
    fn test_new_document_has_no_header_data() {
        let doc = Document::new("WUERTH", "Wuerth");
        assert!(!doc.has_header_data());
        assert_eq!(doc.doc_type, "DDT");
        assert_eq!(doc.verification, VerificationStatus::NotChecked);
    }

    #[test]
    fn test_finalize_rejects_empty_document() {
        let doc = Document::new("SVAI", "SVAI Srl");
        let err = doc.finalize(DocumentFormat::Svai).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { format } if format == "svai"));
    }

    #[test]
    fn test_finalize_accepts_document_with_items() {
        let mut doc = Document::new("SVAI", "SVAI Srl");
        doc.push_item(LineItem::new(1));
        let doc = doc.finalize(DocumentFormat::Svai).unwrap();
        assert_eq!(doc.line_items.len(), 1);
        assert_eq!(doc.line_items[0].row_number, 1);
    }
}
