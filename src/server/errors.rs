use axum::http::StatusCode;
use thiserror::Error;
use tokio::task::JoinError;

use crate::pki::crl::CrlError;

const INVALID_PEM: &str = "invalid_pem";
const INVALID_CERTIFICATE: &str = "invalid_certificate";
const MISSING_CRL: &str = "missing_crl";
const ENCODING: &str = "encoding";
const INTERNAL_ERROR: &str = "internal";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Crl(#[from] CrlError),
    #[error("CRL task did not complete: {0}")]
    Task(#[from] JoinError),
}

impl AppError {
    /// HTTP status reported for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Crl(CrlError::Openssl(_) | CrlError::Serialization(_))
            | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Crl(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Crl(CrlError::Parse { .. }) => INVALID_PEM,
            AppError::Crl(CrlError::Certificate { .. }) => INVALID_CERTIFICATE,
            AppError::Crl(CrlError::MissingCrl { .. }) => MISSING_CRL,
            AppError::Crl(CrlError::Encoding { .. }) => ENCODING,
            AppError::Crl(CrlError::Openssl(_) | CrlError::Serialization(_))
            | AppError::Task(_) => INTERNAL_ERROR,
        }
    }
}
