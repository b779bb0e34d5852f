// src/types.rs

//! Core type definitions using ember-crypto.

use crate::errors::{Result, TxError};
use crate::ADDRESS_SIZE;
use ember_crypto::hex::HexString;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Unix timestamp in seconds
pub type Timestamp = u64;

/// 32-byte on-chain account address
///
/// At first use an address equals the account's authentication key, but
/// the two can diverge after an on-chain key rotation, so an address is
/// stored as given and never re-derived from key material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; ADDRESS_SIZE]);

impl AccountAddress {
    /// Wraps raw address bytes
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parses an address from hex text
    ///
    /// Accepts both prefixed and bare forms. Shorter input is
    /// left-padded with zeros, so the short rendering parses back to
    /// the same address.
    ///
    /// # Example
    /// ```
    /// use ember_core::AccountAddress;
    ///
    /// let addr = AccountAddress::from_hex("0x01").unwrap();
    /// assert_eq!(addr.short(), "0x1");
    /// ```
    pub fn from_hex(text: &str) -> Result<Self> {
        let bare = text.strip_prefix("0x").unwrap_or(text);

        // Short-form input drops leading zeros, which can leave an odd
        // digit count the codec itself rejects
        let parsed = if bare.len() % 2 != 0 {
            HexString::parse(&format!("0{}", bare))?
        } else {
            HexString::parse(bare)?
        };
        let bytes = parsed.as_bytes();

        if bytes.len() > ADDRESS_SIZE {
            return Err(TxError::InvalidArgument(
                format!("address too long: {} bytes", bytes.len())
            ));
        }

        let mut out = [0u8; ADDRESS_SIZE];
        out[ADDRESS_SIZE - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Gets the raw address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Full canonical rendering: `0x` + 64 lowercase hex chars
    pub fn to_hex(&self) -> String {
        HexString::encode(&self.0).with_prefix()
    }

    /// Short rendering with leading zeros trimmed
    pub fn short(&self) -> String {
        HexString::encode(&self.0).short()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.short())
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        AccountAddress::from_hex(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let addr = AccountAddress::new([0xab; 32]);
        let parsed = AccountAddress::from_hex(&addr.to_hex()).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_short_round_trip() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x2c;
        bytes[30] = 0x01;
        let addr = AccountAddress::new(bytes);

        assert_eq!(addr.short(), "0x12c");
        assert_eq!(AccountAddress::from_hex(&addr.short()).unwrap(), addr);
    }

    #[test]
    fn test_left_padding() {
        let addr = AccountAddress::from_hex("0x01").unwrap();
        assert_eq!(addr.as_bytes()[31], 0x01);
        assert!(addr.as_bytes()[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_too_long_rejected() {
        let text = format!("0x{}", "ff".repeat(33));
        assert!(AccountAddress::from_hex(&text).is_err());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(AccountAddress::from_hex("0xzz").is_err());
        assert!(AccountAddress::from_hex("").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let addr = AccountAddress::new([0x11; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        let restored: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, restored);
    }

    #[test]
    fn test_display_full_form() {
        let addr = AccountAddress::new([0u8; 32]);
        let rendered = format!("{}", addr);
        assert_eq!(rendered.len(), 2 + 64);
        assert!(rendered.starts_with("0x"));
    }
}
