//! Vendor format detection from raw document text
//!
//! Inspects the first non-empty line of a document and decides which known
//! vendor layout it uses. Detection is a pure function of that line and the
//! static signature tables in [`crate::constants`]; it holds no state and
//! has no side effects.
//!
//! Signature matching uses the exact-subset policy: a format matches only
//! when every column name in its signature appears among the observed
//! header tokens. Formats are tried in declared priority order.

use crate::app::models::DocumentFormat;
use crate::constants::{
    FIELD_DELIMITER, HEADER_STRIP_CHARS, NARROW_ROW_MAX_COLUMNS, SVAI_COLUMN_COUNT,
    SVAI_SIGNATURE, WIDE_ROW_MIN_COLUMNS, WUERTH_SIGNATURE,
};
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Signatures in detection priority order
const SIGNATURES: &[(DocumentFormat, &[&str])] = &[
    (DocumentFormat::Wuerth, WUERTH_SIGNATURE),
    (DocumentFormat::Svai, SVAI_SIGNATURE),
];

/// Resolve the format for a document, honoring an explicit caller hint.
///
/// A hint bypasses detection entirely but must name a supported format;
/// otherwise the resolve fails with [`Error::UnsupportedFormat`].
pub fn resolve(text: &str, hint: Option<&str>) -> Result<DocumentFormat> {
    match hint {
        Some(name) => name.parse(),
        None => detect(text),
    }
}

/// Detect which vendor layout a raw text blob uses.
///
/// The decisive first rule: a header line without any field delimiter is
/// the positional format, ahead of any column-name check.
pub fn detect(text: &str) -> Result<DocumentFormat> {
    let header = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| Error::ambiguous_format("document is empty"))?;

    let cleaned: String = header
        .chars()
        .filter(|c| !HEADER_STRIP_CHARS.contains(c))
        .collect();

    if !cleaned.contains(FIELD_DELIMITER) {
        debug!("no field delimiter in header line, positional format");
        return Ok(DocumentFormat::Innerhofer);
    }

    let tokens: Vec<String> = cleaned
        .split(FIELD_DELIMITER)
        .map(|token| token.trim().to_lowercase())
        .collect();
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    for (format, signature) in SIGNATURES {
        if signature.iter().all(|column| token_set.contains(column)) {
            debug!("header matches {} signature", format);
            return Ok(*format);
        }
    }

    // No full signature match; fall back to column-count heuristics before
    // giving up.
    let columns = tokens.len();
    debug!("no signature match, {} columns observed", columns);
    if columns >= WIDE_ROW_MIN_COLUMNS {
        Ok(DocumentFormat::Wuerth)
    } else if columns == SVAI_COLUMN_COUNT {
        Ok(DocumentFormat::Svai)
    } else if columns <= NARROW_ROW_MAX_COLUMNS {
        Ok(DocumentFormat::Innerhofer)
    } else {
        Err(Error::ambiguous_format(format!(
            "header row with {} columns matches no known signature",
            columns
        )))
    }
}
