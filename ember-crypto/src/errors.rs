// src/errors.rs

//! Error types for cryptographic operations.
//!
//! Every fallible primitive in this crate reports one of these kinds so
//! callers can distinguish local validation failures from each other.

use std::fmt;

/// Main error type for cryptographic operations
#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    /// Mnemonic phrase failed wordlist or checksum validation
    InvalidMnemonic(String),

    /// Hex text could not be decoded
    InvalidHex(String),

    /// Invalid key format or size
    InvalidKey(String),

    /// Signature verification input was malformed
    SignatureError(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidMnemonic(msg) => write!(f, "Invalid mnemonic: {}", msg),
            CryptoError::InvalidHex(msg) => write!(f, "Invalid hex: {}", msg),
            CryptoError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            CryptoError::SignatureError(msg) => write!(f, "Signature error: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Result type alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
