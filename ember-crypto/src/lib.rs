// src/lib.rs

//! # Ember Crypto
//!
//! Cryptographic primitives for the Ember client SDK.
//!
//! This crate covers the deterministic, offline half of the SDK:
//!
//! - **Hex codec**: canonical `0x`-prefixed lowercase text forms
//! - **Mnemonics**: BIP-39 phrase generation, validation and seed derivation
//! - **Account keys**: Ed25519 keypairs derived from a mnemonic seed
//! - **Authentication keys**: SHA3-256 over the public key and scheme byte
//!
//! ## Determinism
//!
//! Every operation here is a pure function of its inputs: the same
//! mnemonic always yields the same keys, and the same (key, message)
//! pair always yields the same signature. There is no network access
//! and no persistent state.
//!
//! ## Example Usage
//!
//! ```rust
//! use ember_crypto::keys::AccountKey;
//! use ember_crypto::mnemonic;
//!
//! // Create a fresh wallet phrase and derive its keys
//! let phrase = mnemonic::generate_phrase(12).unwrap();
//! let key = AccountKey::from_phrase(&phrase).unwrap();
//!
//! // Sign deterministically
//! let signature = key.sign(b"payload bytes");
//! assert!(ember_crypto::keys::verify(b"payload bytes", &signature, key.public_key()).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod hash;
pub mod hex;
pub mod mnemonic;
pub mod keys;

// Re-export commonly used types
pub use crate::errors::{CryptoError, Result};
pub use crate::hex::HexString;
pub use crate::keys::AccountKey;

/// Standard hash output size (32 bytes / 256 bits)
pub const HASH_SIZE: usize = 32;

/// Ed25519 public key size
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 private key seed size
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Ed25519 signature size
pub const SIGNATURE_SIZE: usize = 64;

/// Authentication key size (SHA3-256 digest)
pub const AUTH_KEY_SIZE: usize = 32;

/// BIP-39 seed size in bytes
pub const MNEMONIC_SEED_SIZE: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(HASH_SIZE, 32);
        assert_eq!(SIGNATURE_SIZE, 64);
        assert_eq!(MNEMONIC_SEED_SIZE, 2 * PRIVATE_KEY_SIZE);
    }
}
