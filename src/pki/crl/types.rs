use std::cmp::Ordering;

use openssl::asn1::Asn1TimeRef;
use openssl::x509::{X509Crl, X509NameRef};

use super::errors::{CrlError, CrlResult};
use super::issuer::same_issuer;

/// A CRL parsed from one PEM envelope
pub struct ParsedCrl {
    crl: X509Crl,
}

impl ParsedCrl {
    /// Parses a single PEM envelope. `index` is reported back on failure.
    pub fn from_pem(pem: &str, index: usize) -> CrlResult<Self> {
        let crl = X509Crl::from_pem(pem.as_bytes())
            .map_err(|source| CrlError::Parse { index, source })?;
        Ok(Self { crl })
    }

    pub fn issuer(&self) -> &X509NameRef {
        self.crl.issuer_name()
    }

    pub fn last_update(&self) -> &Asn1TimeRef {
        self.crl.last_update()
    }

    pub fn same_issuer(&self, other: &ParsedCrl) -> CrlResult<bool> {
        same_issuer(self.issuer(), other.issuer())
    }

    /// True if this CRL was issued strictly later than `other`
    pub fn is_newer_than(&self, other: &ParsedCrl) -> CrlResult<bool> {
        Ok(self.last_update().compare(other.last_update())? == Ordering::Greater)
    }

    /// Canonical PEM serialization, terminated by a newline
    pub fn to_pem(&self) -> CrlResult<String> {
        let pem = self.crl.to_pem()?;
        String::from_utf8(pem).map_err(CrlError::Serialization)
    }
}

impl std::fmt::Debug for ParsedCrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedCrl")
            .field("issuer", &super::issuer::describe_name(self.issuer()))
            .field("last_update", &self.last_update().to_string())
            .finish()
    }
}
