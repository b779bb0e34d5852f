// src/submit.rs

//! Transaction submission and confirmation polling.
//!
//! A signed transaction is submitted exactly once. A transport failure
//! on the submission call itself is surfaced, never retried: the signed
//! bytes may already be in flight, and resubmitting them risks a
//! duplicate-intent transaction. Only the read-only confirmation polls
//! are retried.

use crate::errors::{ClientError, Result};
use crate::transport::{ChainTransport, TransactionStatus};
use ember_core::SignedTransaction;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Delivers signed transactions and waits for their confirmation
pub struct SubmissionCoordinator {
    /// Transport collaborator
    transport: Arc<dyn ChainTransport>,
}

impl SubmissionCoordinator {
    /// Creates a new coordinator over a transport handle
    pub fn new(transport: Arc<dyn ChainTransport>) -> Self {
        Self { transport }
    }

    /// Submits a signed transaction and polls until a terminal outcome
    ///
    /// State machine: submitted, then pending until the chain reports
    /// `Confirmed` or `Rejected(reason)`. If the transaction is still
    /// pending past `timeout_ms` the wait ends with
    /// [`ClientError::Timeout`]; the caller may re-query the returned
    /// hash later, and no second submission is attempted.
    ///
    /// # Arguments
    /// * `signed` - Signed transaction; single-use
    /// * `timeout_ms` - Upper bound on the confirmation wait
    /// * `poll_interval_ms` - Fixed delay between status polls
    ///
    /// # Returns
    /// The transaction hash once the chain confirms it
    pub async fn submit_and_confirm(
        &self,
        signed: &SignedTransaction,
        timeout_ms: u64,
        poll_interval_ms: u64,
    ) -> Result<String> {
        let hash = self.transport.submit(&signed.to_bytes()).await?;
        debug!("Submitted transaction {} (sequence {})", hash, signed.raw.sequence_number);

        let deadline = Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            match self.transport.transaction_status(&hash).await {
                Ok(TransactionStatus::Confirmed) => {
                    info!("Transaction {} confirmed", hash);
                    return Ok(hash);
                }
                Ok(TransactionStatus::Rejected(reason)) => {
                    warn!("Transaction {} rejected: {}", hash, reason);
                    return Err(ClientError::Rejected(reason));
                }
                Ok(TransactionStatus::Pending) => {
                    debug!("Transaction {} still pending", hash);
                }
                // Polling is read-only, so a transport failure here is
                // retried on the next tick
                Err(e) => {
                    warn!("Status poll for {} failed: {}", hash, e);
                }
            }

            if Instant::now() >= deadline {
                warn!("Transaction {} not confirmed within {} ms", hash, timeout_ms);
                return Err(ClientError::Timeout { waited_ms: timeout_ms });
            }

            sleep(Duration::from_millis(poll_interval_ms)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::AccountResource;
    use async_trait::async_trait;
    use ember_core::{AccountAddress, EventPage, GasParams, RawTransaction, TransactionPayload};
    use ember_crypto::keys::AccountKey;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport whose status answers are scripted per poll
    struct ScriptedTransport {
        submits: AtomicUsize,
        polls: AtomicUsize,
        script: Vec<Result<TransactionStatus>>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<TransactionStatus>>) -> Self {
            Self {
                submits: AtomicUsize::new(0),
                polls: AtomicUsize::new(0),
                script,
            }
        }
    }

    #[async_trait]
    impl ChainTransport for ScriptedTransport {
        async fn sequence_number(&self, _address: &AccountAddress) -> Result<u64> {
            Ok(0)
        }

        async fn submit(&self, _signed_bytes: &[u8]) -> Result<String> {
            self.submits.fetch_add(1, Ordering::SeqCst);
            Ok("0xfeed".to_string())
        }

        async fn transaction_status(&self, _hash: &str) -> Result<TransactionStatus> {
            let i = self.polls.fetch_add(1, Ordering::SeqCst);
            // Past the end of the script the transaction stays pending
            self.script
                .get(i)
                .cloned()
                .unwrap_or(Ok(TransactionStatus::Pending))
        }

        async fn account_resources(&self, _address: &AccountAddress) -> Result<Vec<AccountResource>> {
            Ok(Vec::new())
        }

        async fn event_page(
            &self,
            _address: &AccountAddress,
            _handle: &str,
            _field: &str,
            _cursor: Option<&str>,
        ) -> Result<EventPage> {
            Ok(EventPage::default())
        }

        async fn fund_account(&self, _address: &AccountAddress, _amount: u64) -> Result<()> {
            Ok(())
        }
    }

    fn signed_transfer() -> SignedTransaction {
        let key = AccountKey::from_seed(&[5u8; 32]);
        let payload = TransactionPayload::transfer(&AccountAddress::new([2u8; 32]), 100);
        RawTransaction::new(
            AccountAddress::new([1u8; 32]),
            0,
            payload,
            GasParams { max_gas_amount: 2000, gas_unit_price: 100 },
            1_700_000_600,
            4,
        )
        .sign(&key)
        .unwrap()
    }

    #[tokio::test]
    async fn test_confirmed_after_pending() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(TransactionStatus::Pending),
            Ok(TransactionStatus::Pending),
            Ok(TransactionStatus::Confirmed),
        ]));
        let coordinator = SubmissionCoordinator::new(transport.clone());

        let hash = coordinator
            .submit_and_confirm(&signed_transfer(), 5_000, 10)
            .await
            .unwrap();

        assert_eq!(hash, "0xfeed");
        assert_eq!(transport.submits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejection_is_terminal_and_verbatim() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(TransactionStatus::Pending),
            Ok(TransactionStatus::Rejected("sequence number too old".to_string())),
        ]));
        let coordinator = SubmissionCoordinator::new(transport.clone());

        let err = coordinator
            .submit_and_confirm(&signed_transfer(), 5_000, 10)
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::Rejected("sequence number too old".to_string()));
        assert_eq!(transport.submits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout_without_resubmission() {
        // Status never leaves pending
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let coordinator = SubmissionCoordinator::new(transport.clone());

        let err = coordinator
            .submit_and_confirm(&signed_transfer(), 80, 10)
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::Timeout { waited_ms: 80 });
        assert_eq!(transport.submits.load(Ordering::SeqCst), 1);
        assert!(transport.polls.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_poll_transport_failure_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Err(ClientError::Transport("connection reset".to_string())),
            Err(ClientError::Transport("connection reset".to_string())),
            Ok(TransactionStatus::Confirmed),
        ]));
        let coordinator = SubmissionCoordinator::new(transport.clone());

        let hash = coordinator
            .submit_and_confirm(&signed_transfer(), 5_000, 10)
            .await
            .unwrap();

        assert_eq!(hash, "0xfeed");
        assert_eq!(transport.submits.load(Ordering::SeqCst), 1);
        assert_eq!(transport.polls.load(Ordering::SeqCst), 3);
    }
}
