//! Test utilities for delimited parser testing
//!
//! Sample builders mimic real vendor exports: SVAI's exact 21-column layout
//! and a Wuerth-style wide export carrying the signature columns plus
//! filler columns the importer ignores.

mod column_mapping_tests;

/// SVAI header row, original column casing
pub const SVAI_HEADER: &str = "Numero_Bolla;Data_Bolla;Rag_Soc_1;Rag_Soc_2;Indirizzo;CAP;\
Localita;Provincia;Tipo_Riga;Codice_Articolo;Marca;Descrizione_Articolo;Codice_Fornitore;\
Quantita;Prezzo;Sconto_1;Sconto_2;Sconto_3;Netto_Riga;IVA;Ordine";

/// One well-formed SVAI data row
pub fn svai_row(article: &str, quantity: &str, price: &str) -> String {
    format!(
        "4521;15/03/2023;Officina Rossi;SRL;Via Garibaldi 5;39100;Bolzano;BZ;V;{};Bosch;\
         Filtro olio motore;FOR-11;{};{};10;5;0;17,96;22;ORD-777",
        article, quantity, price
    )
}

/// Complete SVAI sample with the given data rows
pub fn svai_text(rows: &[String]) -> String {
    let mut lines = vec![SVAI_HEADER.to_string()];
    lines.extend(rows.iter().cloned());
    lines.join("\n")
}

/// Wuerth-style header: signature columns interleaved with filler columns
pub const WUERTH_HEADER: &str = "CODICE_CLIENTE;NOME_CLIENTE;VIA;CODICE_POSTALE;CITTA;PROVINCIA;\
FILLER_1;DATA_DDT;NUMERO_DDT;NUMERO_POS_DDT;CODICE_PRODOTTO;DESCRIZIONE_PRODOTTO;CONFEZIONE;\
FILLER_2;NUMERO_ORDINE_CLIENTE;FILLER_3;CODICE_ARTICOLO_CLIENTE;UNITA_DI_MISURA;QUANTITA;\
PREZZO_NETTO;FILLER_4;PREZZO_POSIZIONE;FILLER_5;ALIQUOTA_IVA;FILLER_6;NUMERO_ORDINE;FILLER_7;\
CODICE_EAN";

/// One well-formed Wuerth data row with the given source position number
pub fn wuerth_row(position: &str, product: &str, quantity: &str) -> String {
    format!(
        "C0042;Officina Rossi SRL;Via Garibaldi 5;39100;Bolzano;BZ;x;15/03/2023;88123;{};{};\
         Vite autofilettante 4x40;CF100;x;OC-555;x;ART-100;PZ;{};0,05;x;5,00;x;22;x;4500321;x;\
         4007380112233",
        position, product, quantity
    )
}

/// Complete Wuerth sample with the given data rows
pub fn wuerth_text(rows: &[String]) -> String {
    let mut lines = vec![WUERTH_HEADER.to_string()];
    lines.extend(rows.iter().cloned());
    lines.join("\n")
}
