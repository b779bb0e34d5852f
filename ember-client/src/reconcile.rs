// src/reconcile.rs

//! Token ownership reconciliation over the event log.
//!
//! The chain keeps no per-account token index; ownership is derived
//! from the deposit and withdrawal event streams of the account's token
//! store. A deposit and a withdrawal pair up iff their token identities
//! are equal. Quantity and cross-stream ordering are intentionally not
//! consulted: this is set-membership reconciliation, not a balance
//! ledger, so with supply > 1 a partial withdrawal is indistinguishable
//! from a full one.

use crate::errors::Result;
use crate::transport::ChainTransport;
use ember_core::events::{DEPOSIT_EVENTS_FIELD, TOKEN_STORE, WITHDRAW_EVENTS_FIELD};
use ember_core::{AccountAddress, EventPage, TokenEvent, TokenId};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Attempts per page before a transport failure is surfaced
const PAGE_FETCH_ATTEMPTS: u32 = 3;

/// Fixed delay before a failed page fetch is retried
const PAGE_RETRY_DELAY_MS: u64 = 100;

/// Derives token ownership from an account's event streams
///
/// Read-only; every query recomputes from a fresh fetch of both
/// streams, so concurrent calls simply see different point-in-time
/// snapshots.
pub struct EventReconciler {
    /// Transport collaborator
    transport: Arc<dyn ChainTransport>,
}

impl EventReconciler {
    /// Creates a new reconciler over a transport handle
    pub fn new(transport: Arc<dyn ChainTransport>) -> Self {
        Self { transport }
    }

    /// Gets the token identities the account currently owns
    ///
    /// Every identity deposited with no identity-equal withdrawal.
    pub async fn owned_tokens(&self, address: &AccountAddress) -> Result<HashSet<TokenId>> {
        let deposits = self.fetch_stream(address, DEPOSIT_EVENTS_FIELD).await?;
        let withdrawals = self.fetch_stream(address, WITHDRAW_EVENTS_FIELD).await?;

        let withdrawn: HashSet<TokenId> =
            withdrawals.into_iter().map(|e| e.token_id).collect();

        let owned: HashSet<TokenId> = deposits
            .into_iter()
            .map(|e| e.token_id)
            .filter(|id| !withdrawn.contains(id))
            .collect();

        info!("Account {} owns {} token identities", address.short(), owned.len());

        Ok(owned)
    }

    /// Gets the token identities the account itself created
    ///
    /// Deposited identities whose creator equals the queried address,
    /// irrespective of later withdrawal.
    pub async fn minted_tokens(&self, address: &AccountAddress) -> Result<HashSet<TokenId>> {
        let deposits = self.fetch_stream(address, DEPOSIT_EVENTS_FIELD).await?;

        Ok(deposits
            .into_iter()
            .map(|e| e.token_id)
            .filter(|id| id.creator == *address)
            .collect())
    }

    /// Gets every token identity ever deposited to the account
    pub async fn all_received_tokens(&self, address: &AccountAddress) -> Result<HashSet<TokenId>> {
        let deposits = self.fetch_stream(address, DEPOSIT_EVENTS_FIELD).await?;

        Ok(deposits.into_iter().map(|e| e.token_id).collect())
    }

    /// Fetches one event stream to exhaustion
    ///
    /// Follows the opaque page cursor until the collaborator reports no
    /// next page. All pages must be in hand before any reconciliation:
    /// a partial fetch could show a token as owned when its withdrawal
    /// sits on an unfetched page. A persistent transport failure
    /// therefore aborts the query rather than returning a prefix.
    async fn fetch_stream(
        &self,
        address: &AccountAddress,
        field: &str,
    ) -> Result<Vec<TokenEvent>> {
        let mut events = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.fetch_page(address, field, cursor.as_deref()).await?;

            debug!(
                "Fetched {} {} events for {} (more: {})",
                page.events.len(),
                field,
                address.short(),
                page.next_cursor.is_some(),
            );

            events.extend(page.events);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(events)
    }

    /// Fetches one page, retrying transient transport failures
    ///
    /// The fetch is read-only, so a failed attempt is safely repeated
    /// from the same cursor, like confirmation polling.
    async fn fetch_page(
        &self,
        address: &AccountAddress,
        field: &str,
        cursor: Option<&str>,
    ) -> Result<EventPage> {
        let mut attempt = 1;

        loop {
            match self.transport.event_page(address, TOKEN_STORE, field, cursor).await {
                Ok(page) => return Ok(page),
                Err(e) if attempt < PAGE_FETCH_ATTEMPTS => {
                    warn!(
                        "Page fetch of {} for {} failed (attempt {}): {}",
                        field,
                        address.short(),
                        attempt,
                        e,
                    );
                    attempt += 1;
                    sleep(Duration::from_millis(PAGE_RETRY_DELAY_MS)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
