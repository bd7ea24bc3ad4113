use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::CrlResult;
use super::scanner::scan_crl_envelopes;
use super::types::ParsedCrl;

/// One positional argument of a merge: a bundle or a list of bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleInput {
    One(String),
    Many(Vec<String>),
}

impl BundleInput {
    /// Flattens this argument by one level
    pub fn bundles(&self) -> impl Iterator<Item = &str> {
        let bundles: &[String] = match self {
            BundleInput::One(bundle) => std::slice::from_ref(bundle),
            BundleInput::Many(bundles) => bundles,
        };
        bundles.iter().map(String::as_str)
    }
}

impl From<String> for BundleInput {
    fn from(bundle: String) -> Self {
        BundleInput::One(bundle)
    }
}

impl From<&str> for BundleInput {
    fn from(bundle: &str) -> Self {
        BundleInput::One(bundle.to_string())
    }
}

impl From<Vec<String>> for BundleInput {
    fn from(bundles: Vec<String>) -> Self {
        BundleInput::Many(bundles)
    }
}

/// Merges CRL bundles so that only the most recent CRL of each issuer remains.
///
/// Every argument is flattened by one level before scanning. Issuers appear in
/// the output in the order they were first seen. When several CRLs of one
/// issuer share the latest `lastUpdate`, the first one seen is kept.
///
/// Returns an empty string if no CRL was found at all.
///
/// # Errors
/// Fails with [`CrlError::Parse`](super::CrlError::Parse) as soon as one
/// envelope does not hold a valid CRL; no partial bundle is produced.
pub fn merge_crl_bundles(inputs: &[BundleInput]) -> CrlResult<String> {
    merge_pem_bundles(inputs.iter().flat_map(|input| input.bundles()))
}

/// Merges an already flat sequence of PEM bundles, see [`merge_crl_bundles`]
pub fn merge_pem_bundles<'a, I>(bundles: I) -> CrlResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut latest: Vec<ParsedCrl> = Vec::new();
    let mut scanned = 0;

    for bundle in bundles {
        for envelope in scan_crl_envelopes(bundle) {
            let crl = ParsedCrl::from_pem(envelope, scanned)?;
            scanned += 1;

            let mut group = None;
            for (idx, kept) in latest.iter().enumerate() {
                if kept.same_issuer(&crl)? {
                    group = Some(idx);
                    break;
                }
            }

            match group {
                Some(idx) => {
                    if crl.is_newer_than(&latest[idx])? {
                        latest[idx] = crl;
                    }
                }
                None => latest.push(crl),
            }
        }
    }

    debug!("Merged {} CRLs into {} issuer groups", scanned, latest.len());

    let mut merged = String::new();
    for crl in &latest {
        merged.push_str(&crl.to_pem()?);
    }
    Ok(merged)
}
