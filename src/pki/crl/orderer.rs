use indexmap::IndexMap;
use openssl::x509::X509;
use tracing::debug;

use super::errors::{CrlError, CrlResult};
use super::issuer::{describe_name, same_issuer};
use super::scanner::scan_crl_envelopes;
use super::types::ParsedCrl;

/// Builds one CRL bundle per certificate with the CRL of the certificate's
/// issuer moved to the front.
///
/// The remaining CRLs keep their order from `crl_bundle`. Each CRL is emitted
/// as it appears in `crl_bundle`, terminated by a newline. The returned map has
/// the same keys, in the same order, as `certs_by_name`.
///
/// # Errors
/// The whole call fails if a certificate or a CRL cannot be parsed, or if a
/// certificate's issuer has no CRL in the bundle.
pub fn order_crl_bundles(
    certs_by_name: &IndexMap<String, String>,
    crl_bundle: &str,
) -> CrlResult<IndexMap<String, String>> {
    let envelopes = scan_crl_envelopes(crl_bundle);
    let crls = envelopes
        .iter()
        .enumerate()
        .map(|(index, pem)| ParsedCrl::from_pem(pem, index))
        .collect::<CrlResult<Vec<_>>>()?;

    let mut ordered = IndexMap::with_capacity(certs_by_name.len());
    for (name, cert_pem) in certs_by_name {
        let cert =
            X509::from_pem(cert_pem.as_bytes()).map_err(|source| CrlError::Certificate {
                name: name.clone(),
                source,
            })?;

        let mut matching = None;
        for (idx, crl) in crls.iter().enumerate() {
            if same_issuer(cert.issuer_name(), crl.issuer())? {
                matching = Some(idx);
                break;
            }
        }

        let Some(idx) = matching else {
            return Err(CrlError::MissingCrl {
                name: name.clone(),
                issuer: describe_name(cert.issuer_name()),
            });
        };

        let bundle = issuer_first(&envelopes, idx);
        if !bundle.is_ascii() {
            return Err(CrlError::Encoding { name: name.clone() });
        }

        debug!("Ordered {} CRLs for '{}', issuer CRL was #{}", envelopes.len(), name, idx);
        ordered.insert(name.clone(), bundle);
    }

    Ok(ordered)
}

/// Concatenates `envelopes` with the one at `idx` rotated to the front
fn issuer_first(envelopes: &[&str], idx: usize) -> String {
    let mut reordered = envelopes.to_vec();
    reordered[..=idx].rotate_right(1);

    let mut bundle = String::with_capacity(envelopes.iter().map(|e| e.len() + 1).sum());
    for envelope in reordered {
        bundle.push_str(envelope);
        bundle.push('\n');
    }
    bundle
}
