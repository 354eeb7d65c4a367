//! Positional record parsing for Innerhofer fixed-width exports
//!
//! Fixed-width exports carry no header row and no delimiter: every line
//! starts with a record tag, header-tag lines populate document fields once,
//! detail-tag lines become line items, and unknown tags are ignored.

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info, warn};

use super::layout::{FieldSpan, RevisionLayout};
use crate::app::models::{Document, DocumentFormat, LineItem};
use crate::app::services::diagnostics::{DiagnosticKind, Diagnostics};
use crate::config::ImportConfig;
use crate::constants::{
    FIXED_WIDTH_DATE_FORMAT, QUANTITY_SCALE, SUPPLIER_INNERHOFER_ID, SUPPLIER_INNERHOFER_NAME,
};
use crate::{Error, Result};

/// Parser for the positional Innerhofer layout
#[derive(Debug)]
pub struct FixedWidthParser<'a> {
    layout: RevisionLayout,
    config: &'a ImportConfig,
    order_ref_pattern: Regex,
}

impl<'a> FixedWidthParser<'a> {
    /// Create a parser for the given offset revision
    pub fn new(layout: RevisionLayout, config: &'a ImportConfig) -> Result<Self> {
        let pattern = format!(
            r"\b{}[.:]?\s*([A-Za-z0-9/_-]+)",
            regex::escape(&layout.order_ref_marker)
        );
        let order_ref_pattern = Regex::new(&pattern)
            .map_err(|e| Error::configuration(format!("invalid order-ref marker: {}", e)))?;

        Ok(Self {
            layout,
            config,
            order_ref_pattern,
        })
    }

    /// Parse a full fixed-width document text
    pub fn parse(&self, text: &str, diags: &mut Diagnostics) -> Result<Document> {
        debug!(
            "parsing fixed-width document with revision {}",
            self.layout.revision
        );

        let mut document = Document::new(SUPPLIER_INNERHOFER_ID, SUPPLIER_INNERHOFER_NAME);

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let tag = match line.get(..self.layout.tag_len()) {
                Some(tag) => tag,
                None => {
                    debug!("line {}: shorter than a record tag, ignoring", line_no);
                    continue;
                }
            };

            if tag == self.layout.header_tag {
                // Header data is populated exactly once; later header
                // records never overwrite it.
                if !document.has_header_data() {
                    match self.read_header(line, line_no, &mut document) {
                        Ok(()) => {}
                        Err(error) => self.handle_line_failure(line_no, error, diags)?,
                    }
                }
            } else if tag == self.layout.detail_tag {
                diags.rows_seen += 1;
                let row_number = document.line_items.len() as u32 + 1;
                match self.read_detail(line, line_no, row_number, diags) {
                    Ok(item) => {
                        document.push_item(item);
                        diags.items_parsed += 1;
                    }
                    Err(error) => {
                        diags.rows_skipped += 1;
                        self.handle_line_failure(line_no, error, diags)?;
                    }
                }
            } else {
                debug!("line {}: unrecognized record tag '{}', ignoring", line_no, tag);
            }
        }

        info!(
            "fixed-width parse complete: {} items from {} detail records",
            diags.items_parsed, diags.rows_seen
        );
        document.finalize(DocumentFormat::Innerhofer)
    }

    /// Populate document-level fields from a header record
    fn read_header(&self, line: &str, line_no: usize, document: &mut Document) -> Result<()> {
        let number_raw = self.extract(line, line_no, self.layout.doc_number)?;
        let date_raw = self.extract(line, line_no, self.layout.doc_date)?;
        let customer_raw = self.extract(line, line_no, self.layout.customer_name)?;
        let destination_raw = self.extract(line, line_no, self.layout.destination)?;

        // Document numbers arrive zero-padded
        let number = number_raw.trim().trim_start_matches('0');
        document.doc_number = Some(if number.is_empty() {
            "0".to_string()
        } else {
            number.to_string()
        });

        match NaiveDate::parse_from_str(date_raw.trim(), FIXED_WIDTH_DATE_FORMAT) {
            Ok(date) => document.doc_date = Some(date),
            Err(_) => warn!(
                "line {}: invalid document date '{}', leaving unset",
                line_no,
                date_raw.trim()
            ),
        }

        document.customer_name = non_empty(customer_raw);
        document.destination_line1 = non_empty(destination_raw);
        Ok(())
    }

    /// Build one line item from a detail record
    fn read_detail(
        &self,
        line: &str,
        line_no: usize,
        row_number: u32,
        diags: &mut Diagnostics,
    ) -> Result<LineItem> {
        let mut item = LineItem::new(row_number);

        item.supplier_article_code = non_empty(self.extract(line, line_no, self.layout.supplier_code)?);
        item.manufacturer_code =
            non_empty(self.extract(line, line_no, self.layout.manufacturer_code)?);
        item.description = non_empty(self.extract(line, line_no, self.layout.description)?);
        item.unit_of_measure =
            non_empty(self.extract(line, line_no, self.layout.unit_of_measure)?);

        let quantity_raw = self.extract(line, line_no, self.layout.quantity)?;
        item.quantity = decode_scaled_quantity(quantity_raw).unwrap_or_else(|| {
            diags.record(
                Some(line_no),
                DiagnosticKind::NumericParseFailure,
                format!("quantity '{}' carries no digits, using 0", quantity_raw.trim()),
            );
            0.0
        });

        // The order reference drifts between exports; locate it by marker
        // instead of a fixed offset.
        item.supplier_order_ref = self
            .order_ref_pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        Ok(item)
    }

    /// Extract a span, failing with RecordTooShort past the line end
    fn extract<'l>(&self, line: &'l str, line_no: usize, span: FieldSpan) -> Result<&'l str> {
        span.extract(line)
            .ok_or_else(|| Error::record_too_short(line_no, span.end(), line.len()))
    }

    /// Apply the configured row policy to a per-line failure
    fn handle_line_failure(
        &self,
        line_no: usize,
        error: Error,
        diags: &mut Diagnostics,
    ) -> Result<()> {
        if self.config.row_policy.is_strict() {
            return Err(error);
        }
        let kind = match error {
            Error::RecordTooShort { .. } => DiagnosticKind::RecordTooShort,
            _ => DiagnosticKind::RowSkipped,
        };
        debug!("line {}: skipped ({})", line_no, error);
        diags.record(Some(line_no), kind, error.to_string());
        Ok(())
    }
}

/// Decode a zero-padded fixed-point digit string with 4 implied decimals.
///
/// Non-digit characters are stripped before dividing by the scale;
/// "00001250" decodes to 0.1250. `None` when no digits remain.
pub fn decode_scaled_quantity(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| v as f64 / QUANTITY_SCALE)
}

/// Trim a raw field, mapping empty to missing
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
