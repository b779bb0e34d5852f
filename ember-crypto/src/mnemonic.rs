// src/mnemonic.rs

//! BIP-39 mnemonic handling.
//!
//! Phrases are validated against the English wordlist and checksum
//! before any seed material is derived. An invalid phrase fails fast
//! with no partial key material produced.

use crate::errors::{CryptoError, Result};
use crate::MNEMONIC_SEED_SIZE;
use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

/// Word count used for newly generated wallets
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Generates a new random mnemonic phrase
///
/// # Arguments
/// * `word_count` - Number of words (12, 15, 18, 21 or 24)
///
/// # Returns
/// The phrase as a single space-separated string
///
/// # Example
/// ```
/// use ember_crypto::mnemonic;
///
/// let phrase = mnemonic::generate_phrase(12).unwrap();
/// assert_eq!(phrase.split_whitespace().count(), 12);
/// ```
pub fn generate_phrase(word_count: usize) -> Result<String> {
    let mnemonic = Mnemonic::generate_in(Language::English, word_count)
        .map_err(|e| CryptoError::InvalidMnemonic(format!("{}", e)))?;
    Ok(mnemonic.to_string())
}

/// Validates a phrase against the wordlist and embedded checksum
///
/// # Arguments
/// * `phrase` - Space-separated mnemonic words
pub fn validate_phrase(phrase: &str) -> Result<()> {
    parse_phrase(phrase).map(|_| ())
}

/// Derives the 64-byte seed from a phrase
///
/// Validation happens first; no seed is ever computed from an unchecked
/// phrase. The seed lives in a zeroizing buffer and is wiped when the
/// caller drops it. Seed derivation uses the empty passphrase: adding a
/// passphrase parameter would change every previously derived account.
///
/// # Arguments
/// * `phrase` - Space-separated mnemonic words
///
/// # Returns
/// 64-byte seed, zeroized on drop
pub fn seed_from_phrase(phrase: &str) -> Result<Zeroizing<[u8; MNEMONIC_SEED_SIZE]>> {
    let mnemonic = parse_phrase(phrase)?;
    Ok(Zeroizing::new(mnemonic.to_seed("")))
}

fn parse_phrase(phrase: &str) -> Result<Mnemonic> {
    Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| CryptoError::InvalidMnemonic(format!("{}", e)))
}
