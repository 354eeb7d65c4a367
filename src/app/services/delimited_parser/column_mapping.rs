//! Named-column lookup for delimited vendor exports
//!
//! Delimited exports carry a header row; this module turns it into a
//! case-insensitive name-to-index map and enforces each format's required
//! columns up front, so row parsing can address fields by name.

use crate::constants::HEADER_STRIP_CHARS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping built from a delimited header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Normalized column name to index
    name_to_index: HashMap<String, usize>,

    /// Number of columns in the header row; narrower data rows are malformed
    width: usize,
}

impl ColumnMapping {
    /// Analyze a header row against a format's required columns.
    ///
    /// Fails with [`Error::MissingColumn`] naming the first required column
    /// that is absent.
    pub fn analyze(
        headers: &StringRecord,
        required_columns: &[&str],
        format_name: &str,
    ) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let name = normalize_column_name(header);
            // First occurrence wins for duplicated column names
            name_to_index.entry(name).or_insert(index);
        }

        for column in required_columns {
            if !name_to_index.contains_key(*column) {
                return Err(Error::missing_column(format_name, *column));
            }
        }

        Ok(ColumnMapping {
            name_to_index,
            width: headers.len(),
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Header row width in columns
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Normalize a header token: drop quoting and padding noise, lowercase
fn normalize_column_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !HEADER_STRIP_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}
