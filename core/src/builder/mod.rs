// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction payload builder
//!
//! Each supported transaction variant has a builder function returning the
//! tagged [`Data`] body. A [`Transaction`] pairs this with the shared
//! [`TransactionHeader`] and produces the serialised `TransactionBody`
//! submitted to the device for signing.
//!
//! Builders are pure and perform no semantic validation, acceptance of a
//! transaction is left to the device.

use alloc::{string::String, vec::Vec};

use prost::Message;

use crate::{
    ids::AccountId,
    proto::{self, transaction_body::Data},
    Error,
};

pub mod contract;
pub mod crypto;
pub mod token;

pub use contract::ContractCall;
pub use crypto::{CreateAccount, HbarTransfer, TokenTransfer, TransferSet, UpdateAccount};
pub use token::{TokenAssociation, TokenSupply};

/// Point in time for transaction validity
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidStart {
    pub seconds: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nanos: i32,
}

impl From<ValidStart> for proto::Timestamp {
    fn from(v: ValidStart) -> Self {
        Self {
            seconds: v.seconds,
            nanos: v.nanos,
        }
    }
}

/// Fields common to every transaction body
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionHeader {
    /// Paying (operator) account, also the transaction id account
    pub payer: AccountId,
    /// Maximum transaction fee in tinybar
    pub fee: u64,
    /// Transaction memo
    #[cfg_attr(feature = "serde", serde(default))]
    pub memo: String,
    /// Transaction valid start, omitted when unset
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_start: Option<ValidStart>,
    /// Submitting node account, omitted when unset
    #[cfg_attr(feature = "serde", serde(default))]
    pub node_account: Option<AccountId>,
}

impl TransactionHeader {
    /// Create a header with the payer, fee and memo
    pub fn new(payer: AccountId, fee: u64, memo: impl Into<String>) -> Self {
        Self {
            payer,
            fee,
            memo: memo.into(),
            valid_start: None,
            node_account: None,
        }
    }

    /// Set the transaction valid start
    pub fn with_valid_start(mut self, seconds: i64, nanos: i32) -> Self {
        self.valid_start = Some(ValidStart { seconds, nanos });
        self
    }

    /// Set the submitting node account
    pub fn with_node_account(mut self, node: AccountId) -> Self {
        self.node_account = Some(node);
        self
    }
}

/// Staking target for account create / update
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StakeTarget {
    /// No staking fields are written
    #[default]
    None,
    /// Stake to an account
    Account(AccountId),
    /// Stake to a consensus node
    Node(i64),
}

/// Transaction header and exactly one body variant
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub header: TransactionHeader,
    pub data: Data,
}

impl Transaction {
    /// Create a new transaction from a header and body variant
    pub fn new(header: TransactionHeader, data: Data) -> Self {
        Self { header, data }
    }

    /// Build a transaction from a [`TransactionKind`] description
    pub fn build(header: TransactionHeader, kind: TransactionKind) -> Result<Self, Error> {
        log::debug!("building {kind} transaction for payer {}", header.payer);

        let data = kind.into_data()?;
        Ok(Self { header, data })
    }

    /// Assemble the protobuf `TransactionBody`
    pub fn to_proto(&self) -> proto::TransactionBody {
        let h = &self.header;

        let mut body = proto::TransactionBody::default();

        body.transaction_id = Some(proto::TransactionId {
            transaction_valid_start: h.valid_start.map(proto::Timestamp::from),
            account_id: Some(h.payer.into()),
        });
        body.node_account_id = h.node_account.map(proto::AccountId::from);
        body.transaction_fee = h.fee;
        body.memo = h.memo.clone();
        body.data = Some(self.data.clone());

        body
    }

    /// Serialise the transaction body
    pub fn encode(&self) -> Vec<u8> {
        let b = self.to_proto().encode_to_vec();

        log::trace!("encoded {} transaction ({} bytes)", self.data, b.len());

        b
    }
}

/// Description of a transaction body, one variant per builder
#[derive(Clone, Debug, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TransactionKind {
    CreateAccount(CreateAccount),
    UpdateAccount(UpdateAccount),
    Transfer(TransferSet),
    TransferHbar(HbarTransfer),
    VerifyAccount { account: AccountId },
    TransferToken(TokenTransfer),
    TokenAssociate(TokenAssociation),
    TokenDissociate(TokenAssociation),
    TokenBurn(TokenSupply),
    TokenMint(TokenSupply),
    ContractCall(ContractCall),
}

impl TransactionKind {
    /// Build the tagged body for this description
    pub fn into_data(self) -> Result<Data, Error> {
        let d = match self {
            TransactionKind::CreateAccount(p) => crypto::create_account(p),
            TransactionKind::UpdateAccount(p) => crypto::update_account(p),
            TransactionKind::Transfer(s) => crypto::transfer(s),
            TransactionKind::TransferHbar(t) => {
                crypto::transfer_hbar(t.sender, t.recipient, t.amount)
            }
            TransactionKind::VerifyAccount { account } => crypto::verify_account(account),
            TransactionKind::TransferToken(t) => crypto::transfer_token(t)?,
            TransactionKind::TokenAssociate(a) => token::associate(a.account, &a.tokens),
            TransactionKind::TokenDissociate(a) => token::dissociate(a.account, &a.tokens),
            TransactionKind::TokenBurn(s) => token::burn(s.token, s.amount),
            TransactionKind::TokenMint(s) => token::mint(s.token, s.amount),
            TransactionKind::ContractCall(c) => contract::call(c),
        };

        Ok(d)
    }
}
