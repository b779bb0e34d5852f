// src/hash.rs

//! SHA3-256 hashing for the Ember protocol.
//!
//! The chain uses SHA3-256 everywhere a digest is needed: authentication
//! keys, signing-domain salts and transaction hashes.

use crate::HASH_SIZE;
use sha3::{Digest, Sha3_256};

/// Computes SHA3-256 hash of input data
///
/// # Arguments
/// * `data` - Input data to hash
///
/// # Returns
/// 32-byte hash digest
///
/// # Example
/// ```
/// use ember_crypto::hash::sha3_256;
///
/// let hash = sha3_256(b"Hello Ember");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha3_256(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&result[..HASH_SIZE]);
    out
}

/// Hashes multiple data chunks together
///
/// Equivalent to hashing the concatenation of all chunks, without the
/// intermediate allocation.
///
/// # Arguments
/// * `chunks` - Slice of data chunks to hash
///
/// # Returns
/// 32-byte hash of concatenated chunks
pub fn sha3_256_chunks(chunks: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha3_256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let result = hasher.finalize();
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&result[..HASH_SIZE]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_deterministic() {
        let data = b"test data";
        let hash1 = sha3_256(data);
        let hash2 = sha3_256(data);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_sha3_different_input() {
        let hash1 = sha3_256(b"data1");
        let hash2 = sha3_256(b"data2");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_sha3_empty_vector() {
        // Standard SHA3-256 test vector for the empty message
        let hash = sha3_256(&[]);
        assert_eq!(
            hex::encode(hash),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_hash_chunks() {
        let chunk1 = b"hello";
        let chunk2 = b"world";

        let hash1 = sha3_256_chunks(&[chunk1, chunk2]);
        let hash2 = sha3_256(b"helloworld");

        assert_eq!(hash1, hash2);
    }
}
