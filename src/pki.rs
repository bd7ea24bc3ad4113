pub mod crl;

// Re-export commonly used types
pub use crl::{BundleInput, CrlError, CrlResult, merge_crl_bundles, order_crl_bundles};
