//! Locale-ambiguous numeric token normalization
//!
//! Supplier exports mix Italian ("1.234,56") and invariant ("1,234.56")
//! numeric notation, sometimes with currency symbols or percent signs
//! attached. These helpers turn such tokens into decimal values without ever
//! failing the parse: empty input is missing, an irrecoverable token
//! degrades to zero with a diagnostic.

use super::diagnostics::{DiagnosticKind, Diagnostics};
use tracing::debug;

/// Normalize a free-form numeric token into a decimal value.
///
/// Returns `None` for empty input. Never errors; an unparsable token yields
/// `Some(0.0)` and a [`DiagnosticKind::NumericParseFailure`] entry naming
/// the field.
pub fn normalize(raw: &str, field: &str, diags: &mut Diagnostics) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match parse_token(trimmed) {
        Some(value) => Some(value),
        None => {
            debug!("unparsable numeric token '{}' for field {}", trimmed, field);
            diags.record(
                None,
                DiagnosticKind::NumericParseFailure,
                format!("{}='{}' is not numeric, using 0", field, trimmed),
            );
            Some(0.0)
        }
    }
}

/// Normalize a monetary token, rounding the result to 2 fractional digits.
///
/// Quantities, rates, and percentages go through [`normalize`] unrounded;
/// only explicitly monetary fields use this variant.
pub fn normalize_monetary(raw: &str, field: &str, diags: &mut Diagnostics) -> Option<f64> {
    normalize(raw, field, diags).map(round_monetary)
}

/// Round a value to 2 fractional digits
pub fn round_monetary(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Attempt to parse a cleaned token; `None` when irrecoverable
fn parse_token(token: &str) -> Option<f64> {
    // Keep only digits, separators, and a sign; drops currency symbols,
    // percent signs, and stray whitespace.
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }

    decimal_form(&cleaned).parse::<f64>().ok()
}

/// Rewrite a token into invariant dot-decimal form.
///
/// When both separators appear, the one occurring last is the decimal point
/// and all occurrences of the other are thousands grouping. A repeated
/// single separator is read the same way: the last occurrence is the
/// decimal point. A lone ',' is a decimal point (Italian-locale-first
/// reading), as is a lone '.'.
fn decimal_form(cleaned: &str) -> String {
    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    let decimal = match (last_dot, last_comma) {
        (Some(d), Some(c)) => {
            if d > c {
                '.'
            } else {
                ','
            }
        }
        (Some(_), None) => '.',
        (None, Some(_)) => ',',
        (None, None) => return cleaned.to_string(),
    };
    let grouping = if decimal == '.' { ',' } else { '.' };

    // Strip grouping separators, keep only the final decimal occurrence.
    let last_decimal_idx = cleaned.rfind(decimal).unwrap_or(0);
    cleaned
        .char_indices()
        .filter(|(i, c)| *c != grouping && (*c != decimal || *i == last_decimal_idx))
        .map(|(i, c)| if c == decimal && i == last_decimal_idx { '.' } else { c })
        .collect()
}
