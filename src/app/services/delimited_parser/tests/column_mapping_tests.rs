//! Tests for header analysis and required-column enforcement

use crate::Error;
use crate::app::services::delimited_parser::column_mapping::ColumnMapping;
use csv::StringRecord;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_builds_case_insensitive_index() {
    let headers = record(&["Numero_Bolla", "DATA_BOLLA", "rag_soc_1"]);
    let mapping = ColumnMapping::analyze(&headers, &["numero_bolla", "data_bolla"], "svai").unwrap();

    assert_eq!(mapping.get_index("numero_bolla"), Some(0));
    assert_eq!(mapping.get_index("data_bolla"), Some(1));
    assert_eq!(mapping.get_index("rag_soc_1"), Some(2));
    assert!(mapping.has_column("rag_soc_1"));
    assert!(!mapping.has_column("quantita"));
    assert_eq!(mapping.width(), 3);
}

#[test]
fn test_quoting_and_padding_noise_is_stripped() {
    let headers = record(&["\"Numero_Bolla\"", " Data_Bolla\t", "\u{a0}Rag_Soc_1"]);
    let mapping = ColumnMapping::analyze(&headers, &[], "svai").unwrap();

    assert_eq!(mapping.get_index("numero_bolla"), Some(0));
    assert_eq!(mapping.get_index("data_bolla"), Some(1));
    assert_eq!(mapping.get_index("rag_soc_1"), Some(2));
}

#[test]
fn test_missing_required_column_is_named() {
    let headers = record(&["numero_bolla", "rag_soc_1"]);
    let err =
        ColumnMapping::analyze(&headers, &["numero_bolla", "data_bolla"], "svai").unwrap_err();

    match err {
        Error::MissingColumn { format, column } => {
            assert_eq!(format, "svai");
            assert_eq!(column, "data_bolla");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_duplicate_column_keeps_first_occurrence() {
    let headers = record(&["quantita", "prezzo", "quantita"]);
    let mapping = ColumnMapping::analyze(&headers, &["quantita"], "svai").unwrap();
    assert_eq!(mapping.get_index("quantita"), Some(0));
}
