// src/lib.rs

//! # Ember Core
//!
//! Transaction domain types for the Ember client SDK.
//!
//! This crate defines the data that crosses the chain boundary:
//!
//! - **Addresses**: 32-byte account identifiers with canonical hex forms
//! - **Payloads**: typed, validated entry-function payloads
//! - **Envelopes**: the raw transaction envelope, its canonical signing
//!   encoding, and the signed form
//! - **Events**: token identities and the deposit/withdrawal event
//!   stream shapes
//!
//! ## Example Usage
//!
//! ```rust
//! use ember_core::{AccountAddress, GasParams, RawTransaction, TransactionPayload};
//!
//! let sender = AccountAddress::new([1u8; 32]);
//! let recipient = AccountAddress::new([2u8; 32]);
//!
//! let tx = RawTransaction::new(
//!     sender,
//!     0,
//!     TransactionPayload::transfer(&recipient, 1000),
//!     GasParams { max_gas_amount: 2000, gas_unit_price: 100 },
//!     1_700_000_600,
//!     4,
//! );
//!
//! // The canonical encoding is a pure function of the envelope
//! assert_eq!(tx.canonical_bytes(), tx.canonical_bytes());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod payload;
pub mod transaction;
pub mod events;
pub mod errors;

// Re-export crypto for convenience
pub use ember_crypto;

// Re-export commonly used types
pub use crate::errors::{Result, TxError};
pub use crate::events::{EventPage, TokenEvent, TokenId};
pub use crate::payload::{PayloadKind, TransactionPayload};
pub use crate::transaction::{GasParams, RawTransaction, SignedTransaction};
pub use crate::types::{AccountAddress, Timestamp};

/// Account address size in bytes
pub const ADDRESS_SIZE: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ADDRESS_SIZE, ember_crypto::AUTH_KEY_SIZE);
    }
}
