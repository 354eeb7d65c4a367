//! End-to-end integration tests for the DDT importer
//!
//! Exercises the public boundary operation (text in, normalized document
//! out) with complete sample exports for every supported vendor format.

use chrono::NaiveDate;
use ddt_importer::{
    DdtImporter, DocumentFormat, Error, ImportConfig, RowPolicy, VerificationStatus,
};
use std::io::Write;

const SVAI_SAMPLE: &str = "\
Numero_Bolla;Data_Bolla;Rag_Soc_1;Rag_Soc_2;Indirizzo;CAP;Localita;Provincia;Tipo_Riga;Codice_Articolo;Marca;Descrizione_Articolo;Codice_Fornitore;Quantita;Prezzo;Sconto_1;Sconto_2;Sconto_3;Netto_Riga;IVA;Ordine
4521;15/03/2023;Officina Rossi;SRL;Via Garibaldi 5;39100;Bolzano;BZ;V;ART-1;Bosch;Filtro olio motore;FOR-11;2;10,50;10;5;0;17,96;22;ORD-777
4521;15/03/2023;Officina Rossi;SRL;Via Garibaldi 5;39100;Bolzano;BZ;V;ART-2;Mann;Filtro aria;FOR-12;6;3,20;10;0;0;17,28;22;ORD-777";

const WUERTH_SAMPLE: &str = "\
CODICE_CLIENTE;NOME_CLIENTE;VIA;CODICE_POSTALE;CITTA;PROVINCIA;FILLER_1;DATA_DDT;NUMERO_DDT;NUMERO_POS_DDT;CODICE_PRODOTTO;DESCRIZIONE_PRODOTTO;CONFEZIONE;FILLER_2;NUMERO_ORDINE_CLIENTE;FILLER_3;CODICE_ARTICOLO_CLIENTE;UNITA_DI_MISURA;QUANTITA;PREZZO_NETTO;FILLER_4;PREZZO_POSIZIONE;FILLER_5;ALIQUOTA_IVA;FILLER_6;NUMERO_ORDINE;FILLER_7;CODICE_EAN
C0042;Officina Rossi SRL;Via Garibaldi 5;39100;Bolzano;BZ;x;15/03/2023;88123;10;W-PROD-1;Vite autofilettante 4x40;CF100;x;OC-555;x;ART-100;PZ;100;0,05;x;5,00;x;22;x;4500321;x;4007380112233
C0042;Officina Rossi SRL;Via Garibaldi 5;39100;Bolzano;BZ;x;15/03/2023;88123;20;W-PROD-2;Tassello nylon 8mm;CF50;x;OC-555;x;ART-101;PZ;50;0,10;x;5,00;x;22;x;4500321;x;4007380445566";

fn innerhofer_sample() -> String {
    let header = format!(
        "TES{:0>10}{}{:<35}{:<40}",
        "451", "20230315", "OFFICINA ROSSI SRL", "VIA ROMA 12 39100 BOLZANO"
    );
    let detail_1 = format!(
        "RIG{:<15}{:<15}{:<40}{:<3}{:0>8} ORD 4500123",
        "INH-000123", "BOSCH-7701", "PUNTA TRAPANO HSS 6MM", "PZ", "00050000"
    );
    let detail_2 = format!(
        "RIG{:<15}{:<15}{:<40}{:<3}{:0>8} ORD 4500123",
        "INH-000456", "MAKITA-220", "DISCO TAGLIO 115MM", "CF", "00001250"
    );
    format!("{}\n{}\n{}", header, detail_1, detail_2)
}

#[test]
fn imports_svai_export_end_to_end() {
    let importer = DdtImporter::with_defaults();
    let outcome = importer.parse(SVAI_SAMPLE, None).unwrap();

    assert_eq!(outcome.format, DocumentFormat::Svai);
    let document = &outcome.document;
    assert_eq!(document.doc_number.as_deref(), Some("4521"));
    assert_eq!(
        document.doc_date,
        Some(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap())
    );
    assert_eq!(document.customer_name.as_deref(), Some("Officina Rossi SRL"));
    assert_eq!(document.line_items.len(), 2);
    assert_eq!(document.line_items[0].row_number, 1);
    assert_eq!(document.line_items[1].row_number, 2);
    assert_eq!(document.line_items[1].quantity, 6.0);
    assert_eq!(document.line_items[1].net_total, Some(17.28));
    assert!(outcome.diagnostics.is_clean());
}

#[test]
fn imports_wuerth_export_end_to_end() {
    let importer = DdtImporter::with_defaults();
    let outcome = importer.parse(WUERTH_SAMPLE, None).unwrap();

    assert_eq!(outcome.format, DocumentFormat::Wuerth);
    let document = &outcome.document;
    assert_eq!(document.doc_number.as_deref(), Some("88123"));
    assert_eq!(document.customer_code.as_deref(), Some("C0042"));
    assert_eq!(document.line_items.len(), 2);
    // Wuerth supplies authoritative position numbers, used verbatim
    assert_eq!(document.line_items[0].row_number, 10);
    assert_eq!(document.line_items[1].row_number, 20);
    assert_eq!(document.line_items[1].barcode.as_deref(), Some("4007380445566"));
}

#[test]
fn imports_innerhofer_export_end_to_end() {
    let importer = DdtImporter::with_defaults();
    let outcome = importer.parse(&innerhofer_sample(), None).unwrap();

    assert_eq!(outcome.format, DocumentFormat::Innerhofer);
    let document = &outcome.document;
    assert_eq!(document.doc_number.as_deref(), Some("451"));
    assert_eq!(document.customer_name.as_deref(), Some("OFFICINA ROSSI SRL"));
    assert_eq!(document.line_items.len(), 2);
    assert_eq!(document.line_items[0].quantity, 5.0);
    assert_eq!(document.line_items[1].quantity, 0.125);
    assert_eq!(
        document.line_items[0].supplier_order_ref.as_deref(),
        Some("4500123")
    );
}

#[test]
fn explicit_hint_overrides_detection() {
    let importer = DdtImporter::with_defaults();
    // Parsing an SVAI export as Wuerth must fail on required columns,
    // proving the hint actually bypassed detection.
    let err = importer.parse(SVAI_SAMPLE, Some("wuerth")).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
}

#[test]
fn unknown_hint_fails_before_parsing() {
    let importer = DdtImporter::with_defaults();
    let err = importer.parse(SVAI_SAMPLE, Some("spazio")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn destination_check_verifies_known_recipient() {
    let config = ImportConfig {
        accepted_recipients: vec!["officina rossi".to_string()],
        ..ImportConfig::default()
    };
    let importer = DdtImporter::new(config).unwrap();

    let outcome = importer.parse(SVAI_SAMPLE, None).unwrap();
    assert_eq!(outcome.document.verification, VerificationStatus::Verified);

    let config = ImportConfig {
        accepted_recipients: vec!["carrozzeria bianchi".to_string()],
        ..ImportConfig::default()
    };
    let importer = DdtImporter::new(config).unwrap();
    let outcome = importer.parse(SVAI_SAMPLE, None).unwrap();
    assert_eq!(outcome.document.verification, VerificationStatus::Unverified);
}

#[test]
fn strict_policy_aborts_on_bad_rows() {
    let config = ImportConfig {
        row_policy: RowPolicy::Strict,
        ..ImportConfig::default()
    };
    let importer = DdtImporter::new(config).unwrap();

    let broken = WUERTH_SAMPLE.replace(";10;W-PROD-1;", ";not-a-number;W-PROD-1;");
    let err = importer.parse(&broken, None).unwrap_err();
    assert!(matches!(err, Error::RowParse { .. }));

    // The same document imports fine under the tolerant default
    let outcome = DdtImporter::with_defaults().parse(&broken, None).unwrap();
    assert_eq!(outcome.document.line_items.len(), 1);
    assert_eq!(outcome.diagnostics.rows_skipped, 1);
}

#[test]
fn document_without_data_rows_is_rejected() {
    let importer = DdtImporter::with_defaults();
    let header_only = SVAI_SAMPLE.lines().next().unwrap();
    let err = importer.parse(header_only, None).unwrap_err();
    assert!(matches!(err, Error::EmptyDocument { .. }));
}

#[test]
fn imports_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", SVAI_SAMPLE).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let outcome = DdtImporter::with_defaults().parse(&text, None).unwrap();
    assert_eq!(outcome.document.line_items.len(), 2);
}
