// src/events.rs

//! Token identity and event-stream types.
//!
//! A token type is identified by its (creator, collection, name) triple;
//! there is no surrogate id. Events are immutable and ordered by
//! sequence number within a single handle/field; a fetched stream may
//! span multiple pages linked by opaque cursors.

use crate::types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event handle holding an account's token event streams
pub const TOKEN_STORE: &str = "0x3::token::TokenStore";

/// Field name of the deposit event stream
pub const DEPOSIT_EVENTS_FIELD: &str = "deposit_events";

/// Field name of the withdrawal event stream
pub const WITHDRAW_EVENTS_FIELD: &str = "withdraw_events";

/// Natural key of a token type
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId {
    /// Creator account address
    pub creator: AccountAddress,

    /// Collection name
    pub collection: String,

    /// Token name
    pub name: String,
}

impl TokenId {
    /// Builds a token identity from its triple
    pub fn new(
        creator: AccountAddress,
        collection: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            creator,
            collection: collection.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.creator.short(), self.collection, self.name)
    }
}

/// Single deposit or withdrawal event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEvent {
    /// Monotonic sequence number within the event handle
    pub sequence_number: u64,

    /// Token identity the event refers to
    pub token_id: TokenId,

    /// Units moved; carried on the wire but ignored by ownership
    /// reconciliation
    pub amount: u64,
}

/// One fetched page of an event stream
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPage {
    /// Events in ascending sequence-number order
    pub events: Vec<TokenEvent>,

    /// Opaque cursor for the next page; absent on the last page
    pub next_cursor: Option<String>,
}
