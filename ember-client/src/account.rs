// src/account.rs

//! Local account: mnemonic-derived keys plus the on-chain address.

use crate::errors::Result;
use ember_core::AccountAddress;
use ember_crypto::keys::AccountKey;
use ember_crypto::mnemonic;
use ember_crypto::PUBLIC_KEY_SIZE;

/// Account held in process memory
///
/// The address defaults to the authentication key but can be overridden
/// for accounts whose on-chain address diverged after a key rotation:
/// reads then use the stored address while signing stays bound to the
/// mnemonic keys.
#[derive(Clone, Debug)]
pub struct LocalAccount {
    key: AccountKey,
    address: AccountAddress,
}

impl LocalAccount {
    /// Creates a fresh account with a newly generated mnemonic
    ///
    /// The phrase is returned exactly once, for the caller to back up;
    /// the SDK never persists it.
    pub fn generate() -> Result<(Self, String)> {
        let phrase = mnemonic::generate_phrase(mnemonic::DEFAULT_WORD_COUNT)?;
        let account = Self::from_phrase(&phrase, None)?;
        Ok((account, phrase))
    }

    /// Imports an account from an existing mnemonic phrase
    ///
    /// # Arguments
    /// * `phrase` - BIP-39 mnemonic; validated before any key material
    ///   is derived
    /// * `address_override` - Explicit on-chain address for key-rotated
    ///   accounts; defaults to the derived authentication key
    ///
    /// # Example
    /// ```
    /// use ember_client::LocalAccount;
    ///
    /// let phrase = "abandon abandon abandon abandon abandon abandon \
    ///               abandon abandon abandon abandon abandon about";
    /// let a = LocalAccount::from_phrase(phrase, None).unwrap();
    /// let b = LocalAccount::from_phrase(phrase, None).unwrap();
    /// assert_eq!(a.address(), b.address());
    /// ```
    pub fn from_phrase(phrase: &str, address_override: Option<AccountAddress>) -> Result<Self> {
        let key = AccountKey::from_phrase(phrase)?;
        let address = address_override
            .unwrap_or_else(|| AccountAddress::new(*key.auth_key()));

        Ok(Self { key, address })
    }

    /// Gets the on-chain address used for reads and as the sender
    pub fn address(&self) -> AccountAddress {
        self.address
    }

    /// Gets the Ed25519 public key
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.key.public_key()
    }

    /// Gets the signing key
    pub fn key(&self) -> &AccountKey {
        &self.key
    }
}
