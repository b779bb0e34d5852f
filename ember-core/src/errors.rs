// src/errors.rs

//! Error types for transaction construction and signing.

use ember_crypto::CryptoError;
use std::fmt;

/// Main error type for transaction domain operations
#[derive(Debug, Clone, PartialEq)]
pub enum TxError {
    /// Malformed payload or address argument; never retried
    InvalidArgument(String),

    /// Envelope could not be signed (locally detectable malformation)
    SigningError(String),
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TxError::SigningError(msg) => write!(f, "Signing error: {}", msg),
        }
    }
}

impl std::error::Error for TxError {}

impl From<CryptoError> for TxError {
    fn from(err: CryptoError) -> Self {
        TxError::InvalidArgument(format!("{}", err))
    }
}

/// Result type alias for transaction domain operations
pub type Result<T> = std::result::Result<T, TxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TxError::InvalidArgument("empty collection name".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: empty collection name");
    }

    #[test]
    fn test_from_crypto_error() {
        let err: TxError = CryptoError::InvalidHex("odd length".to_string()).into();
        assert!(matches!(err, TxError::InvalidArgument(_)));
    }
}
