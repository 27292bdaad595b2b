//! Error types for license parsing and construction.

use thiserror::Error;

/// Licensing-specific errors.
///
/// A signature that does not match is deliberately absent: it surfaces as
/// [`License::is_valid`](crate::License::is_valid) returning `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    /// The license text does not follow the block grammar.
    #[error("invalid license format: {0}")]
    InvalidFormat(String),

    /// A license was constructed directly with an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Public key material could not be read.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl LicenseError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }

    /// Returns true if the input text was malformed.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Returns true if the API was called with an invalid argument.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
