use std::string::FromUtf8Error;

use openssl::error::ErrorStack;
use thiserror::Error;

/// CRL bundle errors
#[derive(Error, Debug)]
pub enum CrlError {
    #[error("CRL #{index} could not be parsed: {source}")]
    Parse {
        /// Zero-based position of the CRL among all scanned envelopes
        index: usize,
        #[source]
        source: ErrorStack,
    },

    #[error("Certificate '{name}' could not be parsed: {source}")]
    Certificate {
        name: String,
        #[source]
        source: ErrorStack,
    },

    #[error("Missing CRL for certificate '{name}' (issuer: {issuer})")]
    MissingCrl { name: String, issuer: String },

    #[error("CRL bundle for certificate '{name}' is not plain ASCII")]
    Encoding { name: String },

    #[error("Serialized CRL is not valid UTF-8: {0}")]
    Serialization(#[source] FromUtf8Error),

    #[error("OpenSSL operation failed: {0}")]
    Openssl(#[from] ErrorStack),
}

/// Convenient Result type alias
pub type CrlResult<T> = Result<T, CrlError>;
