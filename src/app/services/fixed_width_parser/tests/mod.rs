//! Test utilities for fixed-width parser testing
//!
//! Sample builders produce lines laid out against the r2023 offset table so
//! tests stay readable instead of hand-counting columns.


/// Build an r2023 header record ("TES" tag)
pub fn header_line(doc_number: &str, date: &str, customer: &str, destination: &str) -> String {
    format!(
        "TES{:0>10}{}{:<35}{:<40}",
        doc_number, date, customer, destination
    )
}

/// Build an r2023 detail record ("RIG" tag) with an order reference
pub fn detail_line(
    supplier_code: &str,
    manufacturer_code: &str,
    description: &str,
    unit: &str,
    quantity: &str,
    order_ref: &str,
) -> String {
    format!(
        "RIG{:<15}{:<15}{:<40}{:<3}{:0>8} ORD {}",
        supplier_code, manufacturer_code, description, unit, quantity, order_ref
    )
}

/// Build a complete well-formed r2023 sample document
pub fn sample_document() -> String {
    let mut lines = vec![header_line(
        "451",
        "20230315",
        "OFFICINA ROSSI SRL",
        "VIA ROMA 12 39100 BOLZANO",
    )];
    lines.push(detail_line(
        "INH-000123",
        "BOSCH-7701",
        "PUNTA TRAPANO HSS 6MM",
        "PZ",
        "00050000",
        "4500123",
    ));
    lines.push(detail_line(
        "INH-000456",
        "MAKITA-220",
        "DISCO TAGLIO 115MM",
        "CF",
        "00001250",
        "4500123",
    ));
    lines.push("XYZ some trailing summary record".to_string());
    lines.join("\n")
}
