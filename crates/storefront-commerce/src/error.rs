//! Commerce error types.

use storefront_cache::CacheError;
use thiserror::Error;

/// Errors surfaced by the commerce layer.
///
/// Cart and wishlist mutations never fail; these come from parsing user
/// input, validating configuration, and explicit flushes.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Variant selector could not be parsed.
    #[error("Invalid variant selector: {0}")]
    InvalidVariant(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),
}
