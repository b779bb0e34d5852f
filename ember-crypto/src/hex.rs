// src/hex.rs

//! Canonical hex text form for byte buffers.
//!
//! Everything the chain renders as text (addresses, keys, transaction
//! hashes) uses the same form: `0x` followed by lowercase, even-length
//! hex. `HexString` owns the underlying bytes so the round-trip law
//! `parse(render(x)) == x` holds for both the prefixed and bare forms.

use crate::errors::{CryptoError, Result};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Canonical wrapper over a byte buffer with hex text forms
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HexString {
    bytes: Vec<u8>,
}

impl HexString {
    /// Wraps a byte buffer
    ///
    /// # Example
    /// ```
    /// use ember_crypto::hex::HexString;
    ///
    /// let h = HexString::encode(&[0xde, 0xad, 0xbe, 0xef]);
    /// assert_eq!(h.with_prefix(), "0xdeadbeef");
    /// ```
    pub fn encode(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Parses hex text, with or without a `0x` prefix
    ///
    /// Uppercase digits are accepted on input; the canonical rendering
    /// is always lowercase. Odd-length or non-hex input is rejected.
    ///
    /// # Arguments
    /// * `text` - Hex text, e.g. `"0xdeadbeef"` or `"deadbeef"`
    pub fn parse(text: &str) -> Result<Self> {
        let bare = text.strip_prefix("0x").unwrap_or(text);

        if bare.is_empty() {
            return Err(CryptoError::InvalidHex("empty hex string".to_string()));
        }

        if bare.len() % 2 != 0 {
            return Err(CryptoError::InvalidHex(
                format!("odd hex length: {}", bare.len())
            ));
        }

        let bytes = hex::decode(bare)
            .map_err(|e| CryptoError::InvalidHex(format!("hex decode failed: {}", e)))?;

        Ok(Self { bytes })
    }

    /// Gets the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the wrapper, returning the byte buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders as `0x` + lowercase, even-length hex
    pub fn with_prefix(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }

    /// Renders as lowercase hex without the `0x` prefix
    pub fn bare(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Short form with leading zeros trimmed
    ///
    /// An all-zero buffer renders as `0x0`.
    ///
    /// # Example
    /// ```
    /// use ember_crypto::hex::HexString;
    ///
    /// let h = HexString::encode(&[0x00, 0x00, 0x01, 0x2c]);
    /// assert_eq!(h.short(), "0x12c");
    /// ```
    pub fn short(&self) -> String {
        let bare = hex::encode(&self.bytes);
        let trimmed = bare.trim_start_matches('0');

        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_prefix())
    }
}

impl fmt::Debug for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexString({})", self.with_prefix())
    }
}

impl Serialize for HexString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.with_prefix())
    }
}

impl<'de> Deserialize<'de> for HexString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HexVisitor;

        impl<'de> Visitor<'de> for HexVisitor {
            type Value = HexString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex string with optional 0x prefix")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<HexString, E> {
                HexString::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_prefixed() {
        let original = HexString::encode(&[0x01, 0xab, 0xff]);
        let parsed = HexString::parse(&original.with_prefix()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_round_trip_bare() {
        let original = HexString::encode(&[0x01, 0xab, 0xff]);
        let parsed = HexString::parse(&original.bare()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_lowercase_even_length() {
        let h = HexString::encode(&[0xAB, 0xCD]);
        let rendered = h.with_prefix();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered, rendered.to_lowercase());
        assert_eq!(rendered.len() % 2, 0);
    }

    #[test]
    fn test_accepts_uppercase_input() {
        let parsed = HexString::parse("0xDEADBEEF").unwrap();
        assert_eq!(parsed.with_prefix(), "0xdeadbeef");
    }

    #[test]
    fn test_rejects_odd_length() {
        let result = HexString::parse("0xabc");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_chars() {
        let result = HexString::parse("0xzzzz");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(HexString::parse("").is_err());
        assert!(HexString::parse("0x").is_err());
    }

    #[test]
    fn test_short_form() {
        let h = HexString::encode(&[0x00, 0x00, 0x00, 0x01]);
        assert_eq!(h.short(), "0x1");
    }

    #[test]
    fn test_short_form_all_zero() {
        let h = HexString::encode(&[0x00, 0x00]);
        assert_eq!(h.short(), "0x0");
    }

    #[test]
    fn test_short_form_no_leading_zeros() {
        let h = HexString::encode(&[0xab, 0xcd]);
        assert_eq!(h.short(), "0xabcd");
    }

    #[test]
    fn test_serde_round_trip() {
        let original = HexString::encode(&[0x12, 0x34]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"0x1234\"");

        let restored: HexString = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_display_matches_prefixed() {
        let h = HexString::encode(&[0xfe]);
        assert_eq!(format!("{}", h), "0xfe");
    }
}
