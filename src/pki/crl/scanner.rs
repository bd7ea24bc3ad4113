use std::sync::LazyLock;

use regex::Regex;

/// Matches one PEM-armored CRL, shortest match first so adjacent CRLs stay apart
static CRL_ENVELOPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)-----BEGIN X509 CRL-----.+?-----END X509 CRL-----")
        .expect("Invalid regex pattern for CRL envelopes")
});

/// Returns every CRL envelope found in `pem`, in order of appearance.
///
/// Text outside the envelopes (certificates, comments, blank lines) is ignored.
/// The returned slices borrow from `pem` and include both armor lines but no
/// trailing newline.
pub fn scan_crl_envelopes(pem: &str) -> Vec<&str> {
    CRL_ENVELOPE_REGEX
        .find_iter(pem)
        .map(|m| m.as_str())
        .collect()
}
