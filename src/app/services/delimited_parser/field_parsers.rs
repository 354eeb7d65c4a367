//! Field extraction helpers for delimited records
//!
//! Helpers for reading trimmed values out of a [`StringRecord`] by column
//! name and resolving composite column sources into document attributes.

use super::column_mapping::ColumnMapping;
use super::formats::ColumnSource;
use crate::constants::DELIMITED_DATE_FORMATS;
use chrono::NaiveDate;
use csv::StringRecord;

/// Get a trimmed field value by column name; empty maps to `None`
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    column_name: &str,
) -> Option<&'a str> {
    mapping
        .get_index(column_name)
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Get a trimmed field value as an owned string
pub fn get_text(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column_name: &str,
) -> Option<String> {
    get_field(record, mapping, column_name).map(str::to_string)
}

/// Resolve a column source (single, joined, or locality) into a value
pub fn resolve_source(
    record: &StringRecord,
    mapping: &ColumnMapping,
    source: &ColumnSource,
) -> Option<String> {
    match source {
        ColumnSource::Single(column) => get_text(record, mapping, column),
        ColumnSource::SpaceJoined(columns) => {
            let joined = columns
                .iter()
                .filter_map(|column| get_field(record, mapping, column))
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() { None } else { Some(joined) }
        }
        ColumnSource::Locality {
            postcode,
            city,
            province,
        } => {
            let postcode = get_field(record, mapping, postcode).unwrap_or_default();
            let city = get_field(record, mapping, city).unwrap_or_default();
            let province = get_field(record, mapping, province);

            let mut line = format!("{} {}", postcode, city).trim().to_string();
            if let Some(province) = province {
                if line.is_empty() {
                    line = format!("({})", province);
                } else {
                    line = format!("{} ({})", line, province);
                }
            }
            if line.is_empty() { None } else { Some(line) }
        }
    }
}

/// Parse a delimited-export date token, trying the accepted formats in order
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DELIMITED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
