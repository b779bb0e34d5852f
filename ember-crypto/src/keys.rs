// src/keys.rs

//! Ed25519 account keys and authentication-key derivation.
//!
//! An account's signing keypair is derived from the first 32 bytes of
//! its BIP-39 seed. This fixed truncation is compatibility-critical:
//! changing it would silently derive different keys for existing
//! wallets. The authentication key is SHA3-256 over the public key and
//! the single-signature scheme byte.

use crate::errors::{CryptoError, Result};
use crate::hash::sha3_256_chunks;
use crate::{mnemonic, AUTH_KEY_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Scheme byte appended to the public key when deriving the
/// authentication key (single-signature Ed25519)
pub const SIGNING_SCHEME_ED25519: u8 = 0x00;

/// Account keypair with derived authentication key
#[derive(Clone)]
pub struct AccountKey {
    /// Public key (32 bytes)
    public_key: [u8; PUBLIC_KEY_SIZE],

    /// Authentication key: sha3-256(public_key || scheme byte)
    auth_key: [u8; AUTH_KEY_SIZE],

    /// Private key seed, zeroized on drop
    private_key_inner: PrivateKey,
}

/// Private key wrapper that zeroizes on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct PrivateKey {
    data: [u8; PRIVATE_KEY_SIZE],
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl std::fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountKey")
            .field("public_key", &hex::encode(self.public_key))
            .field("auth_key", &hex::encode(self.auth_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl AccountKey {
    /// Builds the keypair from a 32-byte seed
    ///
    /// Deterministic: the same seed always yields the same keys.
    pub fn from_seed(seed: &[u8; PRIVATE_KEY_SIZE]) -> Self {
        let signing = SigningKey::from_bytes(seed);
        let public_key = signing.verifying_key().to_bytes();
        let auth_key = authentication_key(&public_key);

        Self {
            public_key,
            auth_key,
            private_key_inner: PrivateKey { data: *seed },
        }
    }

    /// Derives the keypair from a mnemonic phrase
    ///
    /// The phrase is validated (wordlist + checksum) before any key
    /// material is produced. Only the first 32 bytes of the 64-byte
    /// BIP-39 seed feed the signing key.
    ///
    /// # Example
    /// ```
    /// use ember_crypto::keys::AccountKey;
    ///
    /// let phrase = "abandon abandon abandon abandon abandon abandon \
    ///               abandon abandon abandon abandon abandon about";
    /// let key1 = AccountKey::from_phrase(phrase).unwrap();
    /// let key2 = AccountKey::from_phrase(phrase).unwrap();
    /// assert_eq!(key1.public_key(), key2.public_key());
    /// ```
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let seed = mnemonic::seed_from_phrase(phrase)?;

        let mut key_seed = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key_seed.copy_from_slice(&seed[..PRIVATE_KEY_SIZE]);

        Ok(Self::from_seed(&key_seed))
    }

    /// Gets the public key
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Gets the authentication key
    pub fn auth_key(&self) -> &[u8; AUTH_KEY_SIZE] {
        &self.auth_key
    }

    /// Gets the private key seed bytes
    pub fn private_key(&self) -> &[u8] {
        &self.private_key_inner.data
    }

    /// Signs a message
    ///
    /// Ed25519 signing is deterministic: the same (key, message) pair
    /// always yields byte-identical signatures.
    ///
    /// # Arguments
    /// * `message` - Bytes to sign
    ///
    /// # Returns
    /// 64-byte signature
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_SIZE] {
        let signing = SigningKey::from_bytes(&self.private_key_inner.data);
        signing.sign(message).to_bytes()
    }
}

/// Computes the authentication key for a public key
///
/// # Arguments
/// * `public_key` - 32-byte Ed25519 public key
///
/// # Returns
/// sha3-256(public_key || scheme byte)
pub fn authentication_key(public_key: &[u8; PUBLIC_KEY_SIZE]) -> [u8; AUTH_KEY_SIZE] {
    sha3_256_chunks(&[public_key, &[SIGNING_SCHEME_ED25519]])
}

/// Verifies a signature against a message and public key
///
/// # Arguments
/// * `message` - Original signed bytes
/// * `signature` - 64-byte signature
/// * `public_key` - 32-byte Ed25519 public key
///
/// # Returns
/// `Ok(true)` if the signature is valid, `Ok(false)` if not, `Err` on
/// malformed inputs
pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
    if public_key.len() != PUBLIC_KEY_SIZE {
        return Err(CryptoError::InvalidKey(
            format!("Invalid public key size: expected {}, got {}",
                    PUBLIC_KEY_SIZE, public_key.len())
        ));
    }

    if signature.len() != SIGNATURE_SIZE {
        return Err(CryptoError::SignatureError(
            format!("Invalid signature size: expected {}, got {}",
                    SIGNATURE_SIZE, signature.len())
        ));
    }

    let mut key_bytes = [0u8; PUBLIC_KEY_SIZE];
    key_bytes.copy_from_slice(public_key);
    let verifying = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|e| CryptoError::InvalidKey(format!("{}", e)))?;

    let mut sig_bytes = [0u8; SIGNATURE_SIZE];
    sig_bytes.copy_from_slice(signature);
    let sig = ed25519_dalek::Signature::from_bytes(&sig_bytes);

    Ok(verifying.verify(message, &sig).is_ok())
}
