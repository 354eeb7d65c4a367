//! Application constants for the DDT importer
//!
//! This module contains supplier identities, format signatures, detection
//! heuristic thresholds, and field-encoding constants used throughout the
//! importer.

// =============================================================================
// Supplier Identities
// =============================================================================

/// Stable supplier identifier for Wuerth delimited exports
pub const SUPPLIER_WUERTH_ID: &str = "WUERTH";
pub const SUPPLIER_WUERTH_NAME: &str = "Wuerth";

/// Stable supplier identifier for SVAI delimited exports
pub const SUPPLIER_SVAI_ID: &str = "SVAI";
pub const SUPPLIER_SVAI_NAME: &str = "SVAI Srl";

/// Stable supplier identifier for Innerhofer fixed-width exports
pub const SUPPLIER_INNERHOFER_ID: &str = "INNERHOFER";
pub const SUPPLIER_INNERHOFER_NAME: &str = "Innerhofer";

/// Document type carried by every imported document
pub const DOC_TYPE_DDT: &str = "DDT";

// =============================================================================
// Format Detection
// =============================================================================

/// Field delimiter used by every known delimited vendor export
pub const FIELD_DELIMITER: char = ';';
pub const FIELD_DELIMITER_BYTE: u8 = b';';

/// Characters stripped from the header candidate line before inspection
pub const HEADER_STRIP_CHARS: &[char] = &['"', '\t', '\u{a0}'];

/// Column-name signature of the Wuerth export (lowercased).
///
/// A header matches when every signature name appears among its column
/// tokens; the real export carries roughly twice as many columns.
pub const WUERTH_SIGNATURE: &[&str] = &[
    "codice_cliente",
    "nome_cliente",
    "via",
    "codice_postale",
    "citta",
    "provincia",
    "data_ddt",
    "numero_ddt",
    "numero_pos_ddt",
    "codice_prodotto",
    "descrizione_prodotto",
    "confezione",
    "numero_ordine_cliente",
    "codice_articolo_cliente",
    "unita_di_misura",
    "quantita",
    "prezzo_netto",
    "prezzo_posizione",
    "aliquota_iva",
    "numero_ordine",
    "codice_ean",
];

/// Column-name signature of the SVAI export (lowercased, all 21 columns)
pub const SVAI_SIGNATURE: &[&str] = &[
    "numero_bolla",
    "data_bolla",
    "rag_soc_1",
    "rag_soc_2",
    "indirizzo",
    "cap",
    "localita",
    "provincia",
    "tipo_riga",
    "codice_articolo",
    "marca",
    "descrizione_articolo",
    "codice_fornitore",
    "quantita",
    "prezzo",
    "sconto_1",
    "sconto_2",
    "sconto_3",
    "netto_riga",
    "iva",
    "ordine",
];

/// Column-count fallbacks used when no signature fully matches.
///
/// Wuerth exports are by far the widest observed layout; SVAI always ships
/// exactly its 21 named columns; anything narrower than the narrow threshold
/// is treated as a positional record that happens to contain a stray
/// delimiter.
pub const WIDE_ROW_MIN_COLUMNS: usize = 30;
pub const SVAI_COLUMN_COUNT: usize = 21;
pub const NARROW_ROW_MAX_COLUMNS: usize = 4;

// =============================================================================
// Field Encodings
// =============================================================================

/// Date formats accepted in delimited exports, tried in order
pub const DELIMITED_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y"];

/// Date format of the 8-digit token in fixed-width header records
pub const FIXED_WIDTH_DATE_FORMAT: &str = "%Y%m%d";

/// Implied decimal scale of fixed-width quantity fields.
///
/// Quantities arrive as zero-padded digit strings with four implied decimal
/// places: "00001250" encodes 0.1250.
pub const QUANTITY_SCALE: f64 = 10_000.0;

/// Marker substring that precedes the order-reference token in fixed-width
/// detail records; its column position varies between exports.
pub const ORDER_REF_MARKER: &str = "ORD";
