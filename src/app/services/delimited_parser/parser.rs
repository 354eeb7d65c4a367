//! Format-agnostic parsing of delimited vendor exports
//!
//! Drives one [`FormatSpec`] over a raw text blob: header row into a column
//! mapping, data rows into line items, document-level fields from the first
//! successfully split data row. Rows narrower than the header are always
//! skipped as malformed; row mapping failures follow the configured
//! [`RowPolicy`].

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_field, get_text, parse_date, resolve_source};
use super::formats::FormatSpec;
use crate::app::models::{Document, LineItem};
use crate::app::services::diagnostics::{DiagnosticKind, Diagnostics};
use crate::app::services::numeric::{normalize, normalize_monetary};
use crate::config::ImportConfig;
use crate::{Error, Result};

/// Parser for delimiter-separated vendor exports
#[derive(Debug)]
pub struct DelimitedParser<'a> {
    spec: &'static FormatSpec,
    config: &'a ImportConfig,
}

impl<'a> DelimitedParser<'a> {
    /// Create a parser bound to one vendor format spec
    pub fn new(spec: &'static FormatSpec, config: &'a ImportConfig) -> Self {
        Self { spec, config }
    }

    /// Parse a full delimited document text
    pub fn parse(&self, text: &str, diags: &mut Diagnostics) -> Result<Document> {
        debug!("parsing {} delimited document", self.spec.format);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.spec.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.trim_start().as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| Error::ambiguous_format(format!("unreadable header row: {}", e)))?;
        let mapping =
            ColumnMapping::analyze(headers, self.spec.required_columns, self.spec.format.name())?;

        let mut document = Document::new(self.spec.supplier_id, self.spec.supplier_name);

        for result in reader.records() {
            diags.rows_seen += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    diags.rows_skipped += 1;
                    diags.record(
                        None,
                        DiagnosticKind::MalformedRow,
                        format!("unsplittable row: {}", e),
                    );
                    continue;
                }
            };
            let line = record.position().map(|p| p.line() as usize);

            // Rows narrower than the header cannot be addressed by column
            // name; always skipped, never fatal.
            if record.len() < mapping.width() {
                diags.rows_skipped += 1;
                diags.record(
                    line,
                    DiagnosticKind::MalformedRow,
                    format!("{} of {} fields", record.len(), mapping.width()),
                );
                continue;
            }

            // Document-level header data comes from the first successfully
            // split data row, exactly once.
            if !document.has_header_data() {
                self.read_header(&record, &mapping, &mut document);
            }

            let fallback_row_number = document.line_items.len() as u32 + 1;
            match self.read_item(&record, &mapping, line, fallback_row_number, diags) {
                Ok(item) => {
                    document.push_item(item);
                    diags.items_parsed += 1;
                }
                Err(error) => {
                    diags.rows_skipped += 1;
                    if self.config.row_policy.is_strict() {
                        return Err(error);
                    }
                    debug!("row skipped: {}", error);
                    diags.record(line, DiagnosticKind::RowSkipped, error.to_string());
                }
            }
        }

        info!(
            "{} parse complete: {} items from {} rows",
            self.spec.format, diags.items_parsed, diags.rows_seen
        );
        document.finalize(self.spec.format)
    }

    /// Populate document-level fields from a data row
    fn read_header(&self, record: &StringRecord, mapping: &ColumnMapping, document: &mut Document) {
        let header = &self.spec.header;

        document.doc_number = get_text(record, mapping, header.doc_number);

        if let Some(raw) = get_field(record, mapping, header.doc_date) {
            match parse_date(raw) {
                Some(date) => document.doc_date = Some(date),
                None => warn!("invalid document date '{}', leaving unset", raw),
            }
        }

        document.customer_code = header
            .customer_code
            .and_then(|column| get_text(record, mapping, column));
        document.customer_name = header
            .customer_name
            .as_ref()
            .and_then(|source| resolve_source(record, mapping, source));
        document.destination_line1 = header
            .destination_line1
            .and_then(|column| get_text(record, mapping, column));
        document.destination_line2 = header
            .destination_line2
            .as_ref()
            .and_then(|source| resolve_source(record, mapping, source));
    }

    /// Map one data row into a line item
    fn read_item(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
        line: Option<usize>,
        fallback_row_number: u32,
        diags: &mut Diagnostics,
    ) -> Result<LineItem> {
        let map = &self.spec.line;

        // An authoritative source row number is used verbatim; a token that
        // is present but not numeric is a row mapping failure.
        let row_number = match map.row_number.and_then(|column| get_field(record, mapping, column))
        {
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                Error::row_parse(
                    line.unwrap_or(0),
                    format!("row number '{}' is not numeric", raw),
                )
            })?,
            None => fallback_row_number,
        };

        let mut item = LineItem::new(row_number);
        item.row_type = map.row_type.and_then(|c| get_text(record, mapping, c));
        item.article_code = map.article_code.and_then(|c| get_text(record, mapping, c));
        item.supplier_article_code = map
            .supplier_article_code
            .and_then(|c| get_text(record, mapping, c));
        item.manufacturer_code = map
            .manufacturer_code
            .and_then(|c| get_text(record, mapping, c));
        item.barcode = map.barcode.and_then(|c| get_text(record, mapping, c));
        item.description = map.description.and_then(|c| get_text(record, mapping, c));
        item.brand = map.brand.and_then(|c| get_text(record, mapping, c));
        item.unit_of_measure = map
            .unit_of_measure
            .and_then(|c| get_text(record, mapping, c));
        item.packaging = map.packaging.and_then(|c| get_text(record, mapping, c));

        item.quantity = self
            .numeric(record, mapping, map.quantity, diags)
            .unwrap_or(0.0);
        if item.quantity < 0.0 {
            diags.record(
                line,
                DiagnosticKind::NumericParseFailure,
                format!("negative quantity {}, clamped to 0", item.quantity),
            );
            item.quantity = 0.0;
        }

        item.unit_price = self.monetary(record, mapping, map.unit_price, diags);
        item.discount1 = self.numeric(record, mapping, map.discounts[0], diags);
        item.discount2 = self.numeric(record, mapping, map.discounts[1], diags);
        item.discount3 = self.numeric(record, mapping, map.discounts[2], diags);
        item.gross_total = self.monetary(record, mapping, map.gross_total, diags);
        item.net_total = self.monetary(record, mapping, map.net_total, diags);
        item.vat_code = map.vat_code.and_then(|c| get_text(record, mapping, c));
        item.vat_rate = self.numeric(record, mapping, map.vat_rate, diags);
        item.supplier_order_ref = map
            .supplier_order_ref
            .and_then(|c| get_text(record, mapping, c));
        item.customer_order_ref = map
            .customer_order_ref
            .and_then(|c| get_text(record, mapping, c));

        Ok(item)
    }

    /// Normalize an unrounded numeric column (quantities, rates, discounts)
    fn numeric(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
        column: Option<&'static str>,
        diags: &mut Diagnostics,
    ) -> Option<f64> {
        let column = column?;
        let raw = get_field(record, mapping, column)?;
        normalize(raw, column, diags)
    }

    /// Normalize a monetary column, rounded to 2 fractional digits
    fn monetary(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
        column: Option<&'static str>,
        diags: &mut Diagnostics,
    ) -> Option<f64> {
        let column = column?;
        let raw = get_field(record, mapping, column)?;
        normalize_monetary(raw, column, diags)
    }
}
