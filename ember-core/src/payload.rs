// src/payload.rs

//! Typed entry-function payloads.
//!
//! Each payload kind has a validating constructor that produces the
//! fully qualified entry-function id plus ordered type arguments and
//! string-encoded arguments. Numeric arguments are rendered as decimal
//! strings: the wire format requires textual integers for values in the
//! 64-bit range. A payload is immutable once built.

use crate::errors::{Result, TxError};
use crate::types::AccountAddress;
use serde::{Deserialize, Serialize};

/// Coin transfer entry function
pub const COIN_TRANSFER: &str = "0x1::coin::transfer";

/// Native coin type argument for transfers
pub const NATIVE_COIN_TYPE: &str = "0x1::ember_coin::EmberCoin";

/// Collection creation entry function
pub const CREATE_COLLECTION: &str = "0x3::token::create_collection_script";

/// Token creation entry function
pub const CREATE_TOKEN: &str = "0x3::token::create_token_script";

/// Token offer entry function
pub const OFFER_TOKEN: &str = "0x3::token_transfers::offer_script";

/// Token offer cancellation entry function
pub const CANCEL_OFFER: &str = "0x3::token_transfers::cancel_offer_script";

/// Token claim entry function
pub const CLAIM_TOKEN: &str = "0x3::token_transfers::claim_script";

/// Payload kind tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Coin transfer to a recipient
    Transfer,

    /// NFT collection creation
    CreateCollection,

    /// NFT token creation within a collection
    CreateToken,

    /// Offer a token to a recipient
    OfferToken,

    /// Cancel a previously made offer
    CancelOffer,

    /// Claim a token offered by a sender
    ClaimToken,

    /// Arbitrary entry-function call
    GenericCall,
}

/// Immutable entry-function payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    kind: PayloadKind,
    function: String,
    type_args: Vec<String>,
    args: Vec<String>,
}

impl TransactionPayload {
    /// Coin transfer payload
    ///
    /// # Arguments
    /// * `recipient` - Destination address
    /// * `amount` - Amount in base units, rendered as a decimal string
    pub fn transfer(recipient: &AccountAddress, amount: u64) -> Self {
        Self {
            kind: PayloadKind::Transfer,
            function: COIN_TRANSFER.to_string(),
            type_args: vec![NATIVE_COIN_TYPE.to_string()],
            args: vec![recipient.to_hex(), amount.to_string()],
        }
    }

    /// Collection creation payload
    ///
    /// # Arguments
    /// * `name` - Collection name, non-empty
    /// * `description` - Human-readable description
    /// * `uri` - Metadata URI
    pub fn create_collection(name: &str, description: &str, uri: &str) -> Result<Self> {
        validate_name("collection name", name)?;

        Ok(Self {
            kind: PayloadKind::CreateCollection,
            function: CREATE_COLLECTION.to_string(),
            type_args: Vec::new(),
            args: vec![
                name.to_string(),
                description.to_string(),
                uri.to_string(),
            ],
        })
    }

    /// Token creation payload
    ///
    /// # Arguments
    /// * `collection` - Existing collection name, non-empty
    /// * `name` - Token name, non-empty
    /// * `description` - Human-readable description
    /// * `supply` - Initial supply, rendered as a decimal string
    /// * `uri` - Metadata URI
    pub fn create_token(
        collection: &str,
        name: &str,
        description: &str,
        supply: u64,
        uri: &str,
    ) -> Result<Self> {
        validate_name("collection name", collection)?;
        validate_name("token name", name)?;

        if supply == 0 {
            return Err(TxError::InvalidArgument(
                "token supply must be positive".to_string()
            ));
        }

        Ok(Self {
            kind: PayloadKind::CreateToken,
            function: CREATE_TOKEN.to_string(),
            type_args: Vec::new(),
            args: vec![
                collection.to_string(),
                name.to_string(),
                description.to_string(),
                supply.to_string(),
                uri.to_string(),
            ],
        })
    }

    /// Token offer payload
    ///
    /// # Arguments
    /// * `recipient` - Address the offer is made to
    /// * `creator` - Token creator address
    /// * `collection` - Collection name, non-empty
    /// * `name` - Token name, non-empty
    /// * `amount` - Units offered, rendered as a decimal string
    pub fn offer_token(
        recipient: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
        amount: u64,
    ) -> Result<Self> {
        validate_name("collection name", collection)?;
        validate_name("token name", name)?;

        Ok(Self {
            kind: PayloadKind::OfferToken,
            function: OFFER_TOKEN.to_string(),
            type_args: Vec::new(),
            args: vec![
                recipient.to_hex(),
                creator.to_hex(),
                collection.to_string(),
                name.to_string(),
                amount.to_string(),
            ],
        })
    }

    /// Offer cancellation payload
    ///
    /// Argument order matches [`TransactionPayload::offer_token`] minus
    /// the amount.
    pub fn cancel_offer(
        recipient: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
    ) -> Result<Self> {
        validate_name("collection name", collection)?;
        validate_name("token name", name)?;

        Ok(Self {
            kind: PayloadKind::CancelOffer,
            function: CANCEL_OFFER.to_string(),
            type_args: Vec::new(),
            args: vec![
                recipient.to_hex(),
                creator.to_hex(),
                collection.to_string(),
                name.to_string(),
            ],
        })
    }

    /// Token claim payload
    ///
    /// # Arguments
    /// * `sender` - Address that made the offer
    /// * `creator` - Token creator address
    /// * `collection` - Collection name, non-empty
    /// * `name` - Token name, non-empty
    pub fn claim_token(
        sender: &AccountAddress,
        creator: &AccountAddress,
        collection: &str,
        name: &str,
    ) -> Result<Self> {
        validate_name("collection name", collection)?;
        validate_name("token name", name)?;

        Ok(Self {
            kind: PayloadKind::ClaimToken,
            function: CLAIM_TOKEN.to_string(),
            type_args: Vec::new(),
            args: vec![
                sender.to_hex(),
                creator.to_hex(),
                collection.to_string(),
                name.to_string(),
            ],
        })
    }

    /// Arbitrary entry-function call
    ///
    /// # Arguments
    /// * `function` - Fully qualified id, `address::module::function`
    /// * `type_args` - Ordered type arguments
    /// * `args` - Ordered string-encoded arguments
    pub fn generic_call(
        function: &str,
        type_args: Vec<String>,
        args: Vec<String>,
    ) -> Result<Self> {
        if function.is_empty() {
            return Err(TxError::InvalidArgument(
                "entry function id is empty".to_string()
            ));
        }

        if function.split("::").count() != 3 {
            return Err(TxError::InvalidArgument(
                format!("entry function id must be address::module::function, got '{}'", function)
            ));
        }

        Ok(Self {
            kind: PayloadKind::GenericCall,
            function: function.to_string(),
            type_args,
            args,
        })
    }

    /// Gets the payload kind tag
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Gets the fully qualified entry-function id
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Gets the ordered type arguments
    pub fn type_args(&self) -> &[String] {
        &self.type_args
    }

    /// Gets the ordered string-encoded arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn validate_name(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TxError::InvalidArgument(format!("{} is empty", label)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> AccountAddress {
        AccountAddress::new([byte; 32])
    }

    #[test]
    fn test_transfer_payload() {
        let payload = TransactionPayload::transfer(&addr(2), 1000);

        assert_eq!(payload.kind(), PayloadKind::Transfer);
        assert_eq!(payload.function(), COIN_TRANSFER);
        assert_eq!(payload.type_args(), &[NATIVE_COIN_TYPE.to_string()]);
        assert_eq!(payload.args()[1], "1000");
    }

    #[test]
    fn test_amounts_are_decimal_strings() {
        let payload = TransactionPayload::transfer(&addr(2), u64::MAX);
        assert_eq!(payload.args()[1], "18446744073709551615");
    }

    #[test]
    fn test_create_collection() {
        let payload = TransactionPayload::create_collection(
            "AliceCollection",
            "Alice's simple collection",
            "https://example.com",
        ).unwrap();

        assert_eq!(payload.kind(), PayloadKind::CreateCollection);
        assert_eq!(payload.args()[0], "AliceCollection");
    }

    #[test]
    fn test_create_collection_empty_name() {
        let result = TransactionPayload::create_collection("", "d", "u");
        assert!(matches!(result, Err(TxError::InvalidArgument(_))));

        let result = TransactionPayload::create_collection("   ", "d", "u");
        assert!(result.is_err());
    }

    #[test]
    fn test_create_token() {
        let payload = TransactionPayload::create_token(
            "AliceCollection",
            "AliceToken",
            "Alice's simple token",
            1,
            "https://example.com/img.png",
        ).unwrap();

        assert_eq!(payload.kind(), PayloadKind::CreateToken);
        assert_eq!(payload.args()[3], "1");
    }

    #[test]
    fn test_create_token_zero_supply() {
        let result = TransactionPayload::create_token("c", "t", "d", 0, "u");
        assert!(result.is_err());
    }

    #[test]
    fn test_offer_arg_order() {
        let payload = TransactionPayload::offer_token(
            &addr(2), &addr(1), "col", "tok", 1,
        ).unwrap();

        assert_eq!(payload.args()[0], addr(2).to_hex());
        assert_eq!(payload.args()[1], addr(1).to_hex());
        assert_eq!(payload.args()[2], "col");
        assert_eq!(payload.args()[3], "tok");
        assert_eq!(payload.args()[4], "1");
    }

    #[test]
    fn test_claim_payload() {
        let payload = TransactionPayload::claim_token(
            &addr(1), &addr(1), "col", "tok",
        ).unwrap();

        assert_eq!(payload.kind(), PayloadKind::ClaimToken);
        assert_eq!(payload.function(), CLAIM_TOKEN);
        assert_eq!(payload.args().len(), 4);
    }

    #[test]
    fn test_cancel_offer_empty_token_name() {
        let result = TransactionPayload::cancel_offer(&addr(2), &addr(1), "col", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_generic_call() {
        let payload = TransactionPayload::generic_call(
            "0x1::message::set_message",
            vec![],
            vec!["hello".to_string()],
        ).unwrap();

        assert_eq!(payload.kind(), PayloadKind::GenericCall);
        assert_eq!(payload.function(), "0x1::message::set_message");
    }

    #[test]
    fn test_generic_call_malformed_id() {
        assert!(TransactionPayload::generic_call("", vec![], vec![]).is_err());
        assert!(TransactionPayload::generic_call("set_message", vec![], vec![]).is_err());
        assert!(TransactionPayload::generic_call("0x1::message", vec![], vec![]).is_err());
    }
}
