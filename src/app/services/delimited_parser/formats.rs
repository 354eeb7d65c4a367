//! Per-vendor format specifications for delimited exports
//!
//! Each delimited vendor layout is one [`FormatSpec`] value: delimiter,
//! required columns, and a declarative map from named columns to document
//! and line-item attributes. The parser itself is format-agnostic; adding a
//! vendor means adding a spec, not a parser.

use crate::app::models::DocumentFormat;
use crate::constants::{
    FIELD_DELIMITER_BYTE, SUPPLIER_SVAI_ID, SUPPLIER_SVAI_NAME, SUPPLIER_WUERTH_ID,
    SUPPLIER_WUERTH_NAME, SVAI_SIGNATURE, WUERTH_SIGNATURE,
};

/// Where a document attribute comes from within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// One named column
    Single(&'static str),

    /// Several columns joined with single spaces, empty ones dropped
    SpaceJoined(&'static [&'static str]),

    /// Postal locality line rendered as "postcode city (province)"
    Locality {
        postcode: &'static str,
        city: &'static str,
        province: &'static str,
    },
}

/// Columns feeding document-level header fields.
///
/// These are read from the first successfully split data row, exactly once.
#[derive(Debug, Clone, Copy)]
pub struct HeaderMap {
    pub doc_number: &'static str,
    pub doc_date: &'static str,
    pub customer_code: Option<&'static str>,
    pub customer_name: Option<ColumnSource>,
    pub destination_line1: Option<&'static str>,
    pub destination_line2: Option<ColumnSource>,
}

/// Columns feeding line-item fields.
///
/// `None` means the format does not carry that attribute. Numeric
/// attributes route through the numeric normalizer; `row_number` is an
/// authoritative source position used verbatim when present.
#[derive(Debug, Clone, Copy)]
pub struct LineMap {
    pub row_number: Option<&'static str>,
    pub row_type: Option<&'static str>,
    pub article_code: Option<&'static str>,
    pub supplier_article_code: Option<&'static str>,
    pub manufacturer_code: Option<&'static str>,
    pub barcode: Option<&'static str>,
    pub description: Option<&'static str>,
    pub brand: Option<&'static str>,
    pub quantity: Option<&'static str>,
    pub unit_of_measure: Option<&'static str>,
    pub packaging: Option<&'static str>,
    pub unit_price: Option<&'static str>,
    pub discounts: [Option<&'static str>; 3],
    pub gross_total: Option<&'static str>,
    pub net_total: Option<&'static str>,
    pub vat_code: Option<&'static str>,
    pub vat_rate: Option<&'static str>,
    pub supplier_order_ref: Option<&'static str>,
    pub customer_order_ref: Option<&'static str>,
}

/// Complete per-format configuration for the delimited parser
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub format: DocumentFormat,
    pub supplier_id: &'static str,
    pub supplier_name: &'static str,
    pub delimiter: u8,
    pub required_columns: &'static [&'static str],
    pub header: HeaderMap,
    pub line: LineMap,
}

/// Wuerth export: very wide rows, authoritative per-row position numbers
pub static WUERTH: FormatSpec = FormatSpec {
    format: DocumentFormat::Wuerth,
    supplier_id: SUPPLIER_WUERTH_ID,
    supplier_name: SUPPLIER_WUERTH_NAME,
    delimiter: FIELD_DELIMITER_BYTE,
    required_columns: WUERTH_SIGNATURE,
    header: HeaderMap {
        doc_number: "numero_ddt",
        doc_date: "data_ddt",
        customer_code: Some("codice_cliente"),
        customer_name: Some(ColumnSource::Single("nome_cliente")),
        destination_line1: Some("via"),
        destination_line2: Some(ColumnSource::Locality {
            postcode: "codice_postale",
            city: "citta",
            province: "provincia",
        }),
    },
    line: LineMap {
        row_number: Some("numero_pos_ddt"),
        row_type: None,
        article_code: Some("codice_articolo_cliente"),
        supplier_article_code: Some("codice_prodotto"),
        manufacturer_code: None,
        barcode: Some("codice_ean"),
        description: Some("descrizione_prodotto"),
        brand: None,
        quantity: Some("quantita"),
        unit_of_measure: Some("unita_di_misura"),
        packaging: Some("confezione"),
        unit_price: Some("prezzo_netto"),
        discounts: [None, None, None],
        gross_total: Some("prezzo_posizione"),
        net_total: None,
        vat_code: None,
        vat_rate: Some("aliquota_iva"),
        supplier_order_ref: Some("numero_ordine"),
        customer_order_ref: Some("numero_ordine_cliente"),
    },
};

/// SVAI export: 21 named columns, three-stage discount chain
pub static SVAI: FormatSpec = FormatSpec {
    format: DocumentFormat::Svai,
    supplier_id: SUPPLIER_SVAI_ID,
    supplier_name: SUPPLIER_SVAI_NAME,
    delimiter: FIELD_DELIMITER_BYTE,
    required_columns: SVAI_SIGNATURE,
    header: HeaderMap {
        doc_number: "numero_bolla",
        doc_date: "data_bolla",
        customer_code: None,
        customer_name: Some(ColumnSource::SpaceJoined(&["rag_soc_1", "rag_soc_2"])),
        destination_line1: Some("indirizzo"),
        destination_line2: Some(ColumnSource::Locality {
            postcode: "cap",
            city: "localita",
            province: "provincia",
        }),
    },
    line: LineMap {
        row_number: None,
        row_type: Some("tipo_riga"),
        article_code: Some("codice_fornitore"),
        supplier_article_code: Some("codice_articolo"),
        manufacturer_code: None,
        barcode: None,
        description: Some("descrizione_articolo"),
        brand: Some("marca"),
        quantity: Some("quantita"),
        unit_of_measure: None,
        packaging: None,
        unit_price: Some("prezzo"),
        discounts: [Some("sconto_1"), Some("sconto_2"), Some("sconto_3")],
        gross_total: None,
        net_total: Some("netto_riga"),
        vat_code: None,
        vat_rate: Some("iva"),
        supplier_order_ref: Some("ordine"),
        customer_order_ref: None,
    },
};

/// Look up the spec for a delimited format; `None` for fixed-width formats
pub fn spec_for(format: DocumentFormat) -> Option<&'static FormatSpec> {
    match format {
        DocumentFormat::Wuerth => Some(&WUERTH),
        DocumentFormat::Svai => Some(&SVAI),
        DocumentFormat::Innerhofer => None,
    }
}
