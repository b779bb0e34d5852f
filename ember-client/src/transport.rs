// src/transport.rs

//! Chain transport collaborator.
//!
//! The REST layer itself is out of scope; the client consumes it
//! through this trait so tests can substitute a deterministic in-memory
//! chain and no global HTTP state exists anywhere in the SDK. Every
//! method is a suspension point.

use crate::errors::Result;
use async_trait::async_trait;
use ember_core::{AccountAddress, EventPage};
use serde::{Deserialize, Serialize};

/// Status of a submitted transaction as reported by the chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Accepted but not yet executed
    Pending,

    /// Executed and committed
    Confirmed,

    /// Terminally rejected with the chain's reason string
    Rejected(String),
}

/// One on-chain resource attached to an account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountResource {
    /// Fully qualified resource type
    pub resource_type: String,

    /// Resource payload as reported by the chain
    pub data: serde_json::Value,
}

/// Operations consumed from the external transport collaborator
#[async_trait]
pub trait ChainTransport: Send + Sync {
    /// Fetches the account's current sequence number
    ///
    /// Always read immediately before building a transaction; stale or
    /// reused sequence numbers are rejected by the chain.
    async fn sequence_number(&self, address: &AccountAddress) -> Result<u64>;

    /// Submits signed transaction bytes, returning the transaction hash
    async fn submit(&self, signed_bytes: &[u8]) -> Result<String>;

    /// Fetches the status of a submitted transaction
    async fn transaction_status(&self, hash: &str) -> Result<TransactionStatus>;

    /// Fetches all resources attached to an account
    async fn account_resources(&self, address: &AccountAddress) -> Result<Vec<AccountResource>>;

    /// Fetches one page of an event stream
    ///
    /// # Arguments
    /// * `address` - Account owning the event handle
    /// * `handle` - Fully qualified event handle type
    /// * `field` - Stream field within the handle
    /// * `cursor` - Opaque continuation token from the previous page
    async fn event_page(
        &self,
        address: &AccountAddress,
        handle: &str,
        field: &str,
        cursor: Option<&str>,
    ) -> Result<EventPage>;

    /// Requests dev-network faucet funding; best-effort
    async fn fund_account(&self, address: &AccountAddress, amount: u64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_equality() {
        assert_eq!(TransactionStatus::Pending, TransactionStatus::Pending);
        assert_ne!(
            TransactionStatus::Confirmed,
            TransactionStatus::Rejected("out of gas".to_string())
        );
    }

    #[test]
    fn test_status_serde() {
        let status = TransactionStatus::Rejected("sequence number too old".to_string());
        let json = serde_json::to_string(&status).unwrap();
        let restored: TransactionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, restored);
    }

    #[test]
    fn test_resource_data_access() {
        let resource = AccountResource {
            resource_type: "0x1::coin::CoinStore<0x1::ember_coin::EmberCoin>".to_string(),
            data: serde_json::json!({ "coin": { "value": "10000" } }),
        };

        assert_eq!(resource.data["coin"]["value"], "10000");
    }
}
