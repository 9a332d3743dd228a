//! Commerce error types.

use thiserror::Error;

/// Errors that can occur handling catalog and cart data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product identifier could not be parsed.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Currency code is not one we can format.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
