//! Certificate Revocation List (CRL) bundle handling
//!
//! CRL bundles are PEM text holding any number of `X509 CRL` objects. This
//! module provides the two operations used when assembling a CA trust file:
//!
//! - [`merge_crl_bundles`] keeps only the most recent CRL of every issuer
//! - [`order_crl_bundles`] puts the CRL of a certificate's issuer first
//!
//! Both are pure functions over in-memory text. Issuers are compared with
//! OpenSSL's distinguished name comparison, not as strings.

mod errors;
pub mod issuer;
mod merger;
mod orderer;
pub mod scanner;
mod types;

// Re-export public types
pub use errors::{CrlError, CrlResult};
pub use merger::{BundleInput, merge_crl_bundles, merge_pem_bundles};
pub use orderer::order_crl_bundles;
pub use types::ParsedCrl;
