//! Advisory destination check for parsed documents
//!
//! Flags whether a document's resolved recipient matches any configured
//! accepted alias. This is advisory only: it never aborts a parse, and an
//! unverified document is still returned for the caller to route to manual
//! review.

use crate::app::models::{Document, VerificationStatus};
use tracing::debug;

/// Check the document recipient against accepted aliases and set its
/// verification status.
///
/// Matching is a case-insensitive substring test over the customer name and
/// the first destination line. With no aliases configured the document is
/// left `NotChecked`.
pub fn verify(document: &mut Document, accepted_aliases: &[String]) {
    if accepted_aliases.is_empty() {
        document.verification = VerificationStatus::NotChecked;
        return;
    }

    let candidates: Vec<String> = [&document.customer_name, &document.destination_line1]
        .into_iter()
        .flatten()
        .map(|value| value.to_lowercase())
        .collect();

    let matched = accepted_aliases.iter().any(|alias| {
        let alias = alias.trim().to_lowercase();
        !alias.is_empty()
            && candidates
                .iter()
                .any(|candidate| candidate.contains(&alias))
    });

    document.verification = if matched {
        VerificationStatus::Verified
    } else {
        debug!(
            "recipient '{}' matches no accepted alias",
            document.customer_name.as_deref().unwrap_or("<unset>")
        );
        VerificationStatus::Unverified
    };
}
