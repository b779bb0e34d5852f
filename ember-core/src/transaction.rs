// src/transaction.rs

//! Transaction envelope, canonical byte encoding and signing.
//!
//! The signing message is a SHA3-256 domain salt followed by a fixed
//! field-order encoding of the envelope. Field order and integer
//! endianness must match the chain's verifier exactly; u64 fields are
//! little-endian and strings are u32-length-prefixed.

use crate::errors::{Result, TxError};
use crate::payload::TransactionPayload;
use crate::types::{AccountAddress, Timestamp};
use ember_crypto::hash::sha3_256;
use ember_crypto::keys::AccountKey;
use ember_crypto::{HASH_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use serde::{Deserialize, Serialize};

/// Domain separator for raw transaction signing
const SIGNING_DOMAIN: &[u8] = b"EMBER::RawTransaction";

/// Gas parameters for a transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasParams {
    /// Maximum gas units the transaction may consume
    pub max_gas_amount: u64,

    /// Price per gas unit in base coin units
    pub gas_unit_price: u64,
}

/// Unsigned transaction envelope
///
/// Pure data: building an envelope never reads the clock or the chain.
/// The sequence number must be freshly fetched by the caller, because
/// stale or reused sequence numbers are rejected on submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Sender account address
    pub sender: AccountAddress,

    /// Account sequence number at submission time
    pub sequence_number: u64,

    /// Entry-function payload
    pub payload: TransactionPayload,

    /// Maximum gas units
    pub max_gas_amount: u64,

    /// Gas unit price
    pub gas_unit_price: u64,

    /// Expiration as a Unix timestamp in seconds
    pub expiration_timestamp_secs: Timestamp,

    /// Chain id guarding against cross-network replay
    pub chain_id: u8,
}

impl RawTransaction {
    /// Assembles an envelope from its parts
    pub fn new(
        sender: AccountAddress,
        sequence_number: u64,
        payload: TransactionPayload,
        gas: GasParams,
        expiration_timestamp_secs: Timestamp,
        chain_id: u8,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            payload,
            max_gas_amount: gas.max_gas_amount,
            gas_unit_price: gas.gas_unit_price,
            expiration_timestamp_secs,
            chain_id,
        }
    }

    /// Canonical field encoding, shared by signing and submission
    ///
    /// Layout: sender (32) || sequence_number (u64 LE) || payload ||
    /// max_gas_amount (u64 LE) || gas_unit_price (u64 LE) ||
    /// expiration (u64 LE) || chain_id (u8). The payload encodes as a
    /// length-prefixed function id, then the type-argument and argument
    /// lists each as a u32 LE count of length-prefixed strings.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(self.sender.as_bytes());
        data.extend_from_slice(&self.sequence_number.to_le_bytes());
        encode_payload(&mut data, &self.payload);
        data.extend_from_slice(&self.max_gas_amount.to_le_bytes());
        data.extend_from_slice(&self.gas_unit_price.to_le_bytes());
        data.extend_from_slice(&self.expiration_timestamp_secs.to_le_bytes());
        data.push(self.chain_id);
        data
    }

    /// Bytes actually signed: domain salt followed by the canonical
    /// field encoding
    pub fn signing_message(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(HASH_SIZE);
        data.extend_from_slice(&signing_salt());
        data.extend_from_slice(&self.canonical_bytes());
        data
    }

    /// Signs the envelope with an account key
    ///
    /// Deterministic: the same (key, envelope) pair always yields
    /// byte-identical signatures. Fails only on locally detectable
    /// malformation, never on network state.
    pub fn sign(self, key: &AccountKey) -> Result<SignedTransaction> {
        if self.payload.function().is_empty() {
            return Err(TxError::SigningError(
                "payload entry function is empty".to_string()
            ));
        }

        let signature = key.sign(&self.signing_message());

        Ok(SignedTransaction {
            raw: self,
            public_key: *key.public_key(),
            signature,
        })
    }
}

/// Signed transaction envelope
///
/// Immutable and single-use: resubmitting with the same sequence number
/// is rejected by the chain, so a signed envelope is never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    /// The signed envelope
    pub raw: RawTransaction,

    /// Signer's Ed25519 public key
    pub public_key: [u8; PUBLIC_KEY_SIZE],

    /// Ed25519 signature over the signing message
    pub signature: [u8; SIGNATURE_SIZE],
}

impl SignedTransaction {
    /// Submission encoding: canonical envelope bytes followed by the
    /// authenticator (public key, then signature)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = self.raw.canonical_bytes();
        data.extend_from_slice(&self.public_key);
        data.extend_from_slice(&self.signature);
        data
    }

    /// Verifies the signature against the embedded public key
    pub fn verify_signature(&self) -> Result<bool> {
        ember_crypto::keys::verify(
            &self.raw.signing_message(),
            &self.signature,
            &self.public_key,
        ).map_err(|e| TxError::SigningError(format!("{}", e)))
    }
}

/// Salt prepended to every signing message
pub fn signing_salt() -> [u8; HASH_SIZE] {
    sha3_256(SIGNING_DOMAIN)
}

fn encode_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn encode_payload(out: &mut Vec<u8>, payload: &TransactionPayload) {
    encode_str(out, payload.function());

    out.extend_from_slice(&(payload.type_args().len() as u32).to_le_bytes());
    for type_arg in payload.type_args() {
        encode_str(out, type_arg);
    }

    out.extend_from_slice(&(payload.args().len() as u32).to_le_bytes());
    for arg in payload.args() {
        encode_str(out, arg);
    }
}
