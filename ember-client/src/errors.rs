// src/errors.rs

//! Error types for client operations.
//!
//! The taxonomy separates local validation failures (never retried,
//! caller must fix the input) from chain-reported terminal outcomes and
//! transport-level failures. Conversions from the lower crates preserve
//! the failure kind; nothing is remapped or swallowed on the way up.

use ember_core::TxError;
use ember_crypto::CryptoError;
use std::fmt;

/// Main error type for client operations
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Mnemonic failed wordlist or checksum validation; local, never
    /// retried
    InvalidMnemonic(String),

    /// Malformed payload or address argument; local, never retried
    InvalidArgument(String),

    /// Envelope signing failed on locally detectable malformation
    Signing(String),

    /// Chain rejected the transaction; terminal, reason reported
    /// verbatim
    Rejected(String),

    /// Confirmation was not observed within the bound; the caller may
    /// re-query by hash later
    Timeout {
        /// How long the coordinator waited before giving up
        waited_ms: u64,
    },

    /// Network-level failure from the transport collaborator
    Transport(String),

    /// Configuration could not be loaded or saved
    Config(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidMnemonic(msg) => write!(f, "Invalid mnemonic: {}", msg),
            ClientError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ClientError::Signing(msg) => write!(f, "Signing failed: {}", msg),
            ClientError::Rejected(reason) => write!(f, "Transaction rejected: {}", reason),
            ClientError::Timeout { waited_ms } => {
                write!(f, "Confirmation not observed within {} ms", waited_ms)
            }
            ClientError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            ClientError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<CryptoError> for ClientError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidMnemonic(msg) => ClientError::InvalidMnemonic(msg),
            CryptoError::InvalidHex(msg) => ClientError::InvalidArgument(msg),
            CryptoError::InvalidKey(msg) => ClientError::InvalidArgument(msg),
            CryptoError::SignatureError(msg) => ClientError::Signing(msg),
        }
    }
}

impl From<TxError> for ClientError {
    fn from(err: TxError) -> Self {
        match err {
            TxError::InvalidArgument(msg) => ClientError::InvalidArgument(msg),
            TxError::SigningError(msg) => ClientError::Signing(msg),
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Rejected("sequence number too old".to_string());
        assert_eq!(
            format!("{}", err),
            "Transaction rejected: sequence number too old"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = ClientError::Timeout { waited_ms: 10_000 };
        assert!(format!("{}", err).contains("10000"));
    }

    #[test]
    fn test_mnemonic_kind_preserved() {
        let err: ClientError =
            CryptoError::InvalidMnemonic("bad checksum".to_string()).into();
        assert!(matches!(err, ClientError::InvalidMnemonic(_)));
    }

    #[test]
    fn test_argument_kind_preserved() {
        let err: ClientError =
            TxError::InvalidArgument("empty name".to_string()).into();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
