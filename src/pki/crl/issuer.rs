//! Issuer identity for CRLs and certificates
//!
//! Two distinguished names identify the same issuer when OpenSSL considers them
//! equal. OpenSSL compares the canonical encoding of each name, so the ASN.1
//! string type, letter case and redundant whitespace of attribute values do not
//! matter. Raw DER or rendered strings must never be compared directly.

use std::cmp::Ordering;

use openssl::x509::X509NameRef;
use tracing::debug;
use x509_parser::prelude::{FromDer, X509Name};

use super::errors::CrlResult;

/// Returns true if both names identify the same issuer
pub fn same_issuer(a: &X509NameRef, b: &X509NameRef) -> CrlResult<bool> {
    Ok(a.try_cmp(b)? == Ordering::Equal)
}

/// Renders a distinguished name for diagnostics, e.g. `O=Example Org, CN=Org-A`
pub fn describe_name(name: &X509NameRef) -> String {
    let rendered = name.to_der().ok().and_then(|der| {
        X509Name::from_der(&der)
            .ok()
            .map(|(_, parsed)| parsed.to_string())
    });

    rendered.unwrap_or_else(|| {
        debug!("Falling back to OpenSSL entry rendering for distinguished name");
        render_entries(name)
    })
}

/// Renders a name entry by entry with OpenSSL, used when x509-parser rejects it
fn render_entries(name: &X509NameRef) -> String {
    name.entries()
        .map(|entry| {
            let key = entry.object().nid().short_name().unwrap_or("?");
            let value = entry
                .data()
                .to_string()
                .map(|value| value.to_string())
                .unwrap_or_else(|_| "error".to_string());
            format!("{key}={value}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
