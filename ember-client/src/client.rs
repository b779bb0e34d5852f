// src/client.rs

//! Client facade binding one account to one transport.

use crate::account::LocalAccount;
use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};
use crate::reconcile::EventReconciler;
use crate::submit::SubmissionCoordinator;
use crate::transport::ChainTransport;
use ember_core::{AccountAddress, RawTransaction, TokenId, TransactionPayload};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Coin-store resource holding an account's native coin balance
pub const COIN_STORE_RESOURCE: &str = "0x1::coin::CoinStore<0x1::ember_coin::EmberCoin>";

/// High-level client for one account
///
/// Owns the transport handle and serializes the sequence-number read,
/// build, sign and submit of each transaction behind a per-account
/// lock: two operations racing for the same sequence number would get
/// one of them rejected. Clients for different accounts are fully
/// independent.
pub struct EmberClient {
    account: LocalAccount,
    transport: Arc<dyn ChainTransport>,
    config: ClientConfig,
    coordinator: SubmissionCoordinator,
    reconciler: EventReconciler,
    submit_lock: Mutex<()>,
}

impl EmberClient {
    /// Creates a client for an account over a transport handle
    pub fn new(
        account: LocalAccount,
        transport: Arc<dyn ChainTransport>,
        config: ClientConfig,
    ) -> Self {
        Self {
            account,
            coordinator: SubmissionCoordinator::new(transport.clone()),
            reconciler: EventReconciler::new(transport.clone()),
            transport,
            config,
            submit_lock: Mutex::new(()),
        }
    }

    /// Gets the account's on-chain address
    pub fn address(&self) -> AccountAddress {
        self.account.address()
    }

    /// Gets the underlying account
    pub fn account(&self) -> &LocalAccount {
        &self.account
    }

    /// Transfers native coins to a recipient
    ///
    /// # Arguments
    /// * `recipient` - Destination address
    /// * `amount` - Amount in base units
    ///
    /// # Returns
    /// Hash of the confirmed transaction
    pub async fn transfer(&self, recipient: &AccountAddress, amount: u64) -> Result<String> {
        self.execute(TransactionPayload::transfer(recipient, amount)).await
    }

    /// Creates an NFT collection owned by this account
    pub async fn create_collection(
        &self,
        name: &str,
        description: &str,
        uri: &str,
    ) -> Result<String> {
        let payload = TransactionPayload::create_collection(name, description, uri)?;
        self.execute(payload).await
    }

    /// Creates a token within one of this account's collections
    pub async fn create_token(
        &self,
        collection: &str,
        name: &str,
        description: &str,
        supply: u64,
        uri: &str,
    ) -> Result<String> {
        let payload = TransactionPayload::create_token(collection, name, description, supply, uri)?;
        self.execute(payload).await
    }

    /// Offers a token to a recipient
    ///
    /// The recipient takes ownership only once they claim the offer.
    pub async fn offer_token(
        &self,
        recipient: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
        amount: u64,
    ) -> Result<String> {
        let payload =
            TransactionPayload::offer_token(recipient, creator, collection, name, amount)?;
        self.execute(payload).await
    }

    /// Cancels an offer this account made earlier
    pub async fn cancel_offer(
        &self,
        recipient: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
    ) -> Result<String> {
        let payload = TransactionPayload::cancel_offer(recipient, creator, collection, name)?;
        self.execute(payload).await
    }

    /// Claims a token offered to this account
    ///
    /// # Arguments
    /// * `sender` - Account that made the offer
    /// * `creator` - Token creator address
    /// * `collection` - Collection name
    /// * `name` - Token name
    pub async fn claim_token(
        &self,
        sender: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
    ) -> Result<String> {
        let payload = TransactionPayload::claim_token(sender, creator, collection, name)?;
        self.execute(payload).await
    }

    /// Calls an arbitrary entry function
    ///
    /// # Arguments
    /// * `function` - Fully qualified id, `address::module::function`
    /// * `type_args` - Ordered type arguments
    /// * `args` - Ordered string-encoded arguments
    pub async fn call(
        &self,
        function: &str,
        type_args: Vec<String>,
        args: Vec<String>,
    ) -> Result<String> {
        let payload = TransactionPayload::generic_call(function, type_args, args)?;
        self.execute(payload).await
    }

    /// Gets the token identities this account currently owns
    pub async fn owned_tokens(&self) -> Result<HashSet<TokenId>> {
        self.reconciler.owned_tokens(&self.account.address()).await
    }

    /// Gets the token identities this account created
    pub async fn minted_tokens(&self) -> Result<HashSet<TokenId>> {
        self.reconciler.minted_tokens(&self.account.address()).await
    }

    /// Gets every token identity ever deposited to this account
    pub async fn all_received_tokens(&self) -> Result<HashSet<TokenId>> {
        self.reconciler.all_received_tokens(&self.account.address()).await
    }

    /// Gets the reconciler for ownership queries on other addresses
    pub fn reconciler(&self) -> &EventReconciler {
        &self.reconciler
    }

    /// Gets the account's native coin balance
    ///
    /// An account with no coin store yet (never funded) has balance 0.
    pub async fn balance(&self) -> Result<u64> {
        let resources = self.transport.account_resources(&self.account.address()).await?;

        let store = match resources.iter().find(|r| r.resource_type == COIN_STORE_RESOURCE) {
            Some(store) => store,
            None => return Ok(0),
        };

        store.data["coin"]["value"]
            .as_str()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                ClientError::Transport("malformed coin store resource".to_string())
            })
    }

    /// Requests dev-network faucet funding for this account; best-effort
    pub async fn fund(&self, amount: u64) -> Result<()> {
        self.transport.fund_account(&self.account.address(), amount).await
    }

    /// Runs one transaction through the full pipeline
    ///
    /// Holds the per-account lock across the sequence-number read and
    /// the submission so concurrent operations on this account cannot
    /// race for a sequence number.
    async fn execute(&self, payload: TransactionPayload) -> Result<String> {
        let _guard = self.submit_lock.lock().await;

        let sender = self.account.address();
        let sequence_number = self.transport.sequence_number(&sender).await?;
        debug!("Building {:?} transaction at sequence {}", payload.kind(), sequence_number);

        let expiration = current_time_secs() + self.config.expiration_secs;
        let raw = RawTransaction::new(
            sender,
            sequence_number,
            payload,
            self.config.gas,
            expiration,
            self.config.chain_id,
        );

        let signed = raw.sign(self.account.key())?;

        self.coordinator
            .submit_and_confirm(&signed, self.config.confirm_timeout_ms, self.config.poll_interval_ms)
            .await
    }
}

fn current_time_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
