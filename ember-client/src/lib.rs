// src/lib.rs

//! # Ember Client
//!
//! Async client for the Ember chain.
//!
//! This crate is the SDK's outer layer:
//!
//! - **Transport**: the [`ChainTransport`] trait the client consumes;
//!   the REST implementation lives outside this workspace
//! - **Accounts**: mnemonic-derived local accounts with an optional
//!   on-chain address override
//! - **Submission**: submit-once transaction delivery with bounded
//!   confirmation polling
//! - **Reconciliation**: token ownership derived from the deposit and
//!   withdrawal event streams
//! - **Facade**: [`EmberClient`], one account bound to one transport
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ember_client::{ClientConfig, EmberClient, LocalAccount};
//! use std::sync::Arc;
//!
//! # async fn example(transport: Arc<dyn ember_client::ChainTransport>) -> ember_client::Result<()> {
//! let (account, phrase) = LocalAccount::generate()?;
//! println!("back up this phrase: {}", phrase);
//!
//! let client = EmberClient::new(account, transport, ClientConfig::default());
//! let recipient = ember_core::AccountAddress::from_hex("0x2c")?;
//! let hash = client.transfer(&recipient, 1000).await?;
//! println!("confirmed: {}", hash);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod transport;
pub mod account;
pub mod config;
pub mod submit;
pub mod reconcile;
pub mod client;

// Re-export the domain crate
pub use ember_core;

// Re-export commonly used types
pub use crate::account::LocalAccount;
pub use crate::client::EmberClient;
pub use crate::config::ClientConfig;
pub use crate::errors::{ClientError, Result};
pub use crate::reconcile::EventReconciler;
pub use crate::submit::SubmissionCoordinator;
pub use crate::transport::{AccountResource, ChainTransport, TransactionStatus};

/// Default upper bound on the confirmation wait, in milliseconds
pub const DEFAULT_CONFIRM_TIMEOUT_MS: u64 = 10_000;

/// Default interval between confirmation polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
