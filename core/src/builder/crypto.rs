// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Account create / update and transfer bodies

use alloc::{string::String, vec, vec::Vec};

use super::StakeTarget;
use crate::{
    ids::{AccountId, TokenId},
    proto::{
        self, crypto_create_transaction_body as create, crypto_update_transaction_body as update,
        transaction_body::Data,
    },
    Error,
};

/// Account creation parameters
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateAccount {
    /// Initial balance in tinybar
    pub initial_balance: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stake: StakeTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub decline_reward: bool,
}

/// Account update parameters, `None` fields are left unchanged
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UpdateAccount {
    pub account: AccountId,
    pub decline_reward: Option<bool>,
    pub stake: StakeTarget,
    /// Auto renew period in seconds
    pub auto_renew_period: Option<i64>,
    /// Expiration time in seconds since the epoch
    pub expiration_time: Option<i64>,
    pub receiver_sig_required: Option<bool>,
    pub max_automatic_token_associations: Option<i32>,
    pub memo: Option<String>,
    /// Attach an (empty) key, signalling a key change
    pub include_key: bool,
}

/// Ordered hbar transfer legs
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferSet {
    pub transfers: Vec<(AccountId, i64)>,
}

impl TransferSet {
    /// Create an empty transfer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transfer leg
    pub fn add(mut self, account: AccountId, amount: i64) -> Self {
        self.transfers.push((account, amount));
        self
    }

    /// Check whether transfer amounts sum to zero
    pub fn is_balanced(&self) -> bool {
        let sum = self
            .transfers
            .iter()
            .try_fold(0i64, |acc, (_, v)| acc.checked_add(*v));

        sum == Some(0)
    }
}

/// Hbar transfer from a sender to a recipient
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HbarTransfer {
    pub sender: AccountId,
    pub recipient: AccountId,
    /// Amount in tinybar
    pub amount: i64,
}

/// Fungible token transfer from a sender to a recipient
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenTransfer {
    pub token: TokenId,
    pub sender: AccountId,
    pub recipient: AccountId,
    /// Amount in the token's smallest unit
    pub amount: u64,
    /// Expected token decimals, used by the device for display
    pub decimals: u32,
}

fn leg(account: AccountId, amount: i64) -> proto::AccountAmount {
    proto::AccountAmount {
        account_id: Some(account.into()),
        amount,
        is_approval: false,
    }
}

/// Build a `cryptoCreateAccount` body
///
/// `decline_reward` is only written alongside a stake target.
pub fn create_account(p: CreateAccount) -> Data {
    let (staked_id, decline_reward) = match p.stake {
        StakeTarget::None => (None, false),
        StakeTarget::Account(a) => (
            Some(create::StakedId::StakedAccountId(a.into())),
            p.decline_reward,
        ),
        StakeTarget::Node(n) => (Some(create::StakedId::StakedNodeId(n)), p.decline_reward),
    };

    Data::CryptoCreateAccount(proto::CryptoCreateTransactionBody {
        initial_balance: p.initial_balance,
        staked_id,
        decline_reward,
        ..Default::default()
    })
}

/// Build a `cryptoUpdateAccount` body
pub fn update_account(p: UpdateAccount) -> Data {
    let staked_id = match p.stake {
        StakeTarget::None => None,
        StakeTarget::Account(a) => Some(update::StakedId::StakedAccountId(a.into())),
        StakeTarget::Node(n) => Some(update::StakedId::StakedNodeId(n)),
    };

    let mut body = proto::CryptoUpdateTransactionBody {
        account_id_to_update: Some(p.account.into()),
        staked_id,
        decline_reward: p.decline_reward,
        memo: p.memo,
        max_automatic_token_associations: p.max_automatic_token_associations,
        ..Default::default()
    };

    if p.include_key {
        body.key = Some(proto::Key::default());
    }

    body.auto_renew_period = p
        .auto_renew_period
        .map(|seconds| proto::Duration { seconds });

    body.expiration_time = p
        .expiration_time
        .map(|seconds| proto::Timestamp { seconds, nanos: 0 });

    body.receiver_sig_required_field = p
        .receiver_sig_required
        .map(update::ReceiverSigRequiredField::ReceiverSigRequiredWrapper);

    Data::CryptoUpdateAccount(body)
}

/// Build a `cryptoTransfer` body from ordered hbar legs, balance is not checked
pub fn transfer(set: TransferSet) -> Data {
    let account_amounts = set.transfers.into_iter().map(|(a, v)| leg(a, v)).collect();

    Data::CryptoTransfer(proto::CryptoTransferTransactionBody {
        transfers: Some(proto::TransferList { account_amounts }),
        token_transfers: vec![],
    })
}

/// Build a two-leg hbar transfer
///
/// The recipient leg carries `amount`, the sender leg is written with a zero
/// amount.
pub fn transfer_hbar(sender: AccountId, recipient: AccountId, amount: i64) -> Data {
    transfer(TransferSet::new().add(recipient, amount).add(sender, 0))
}

/// Build a single zero-amount leg transfer, shown by the device as account
/// verification when the fee is one tinybar
pub fn verify_account(account: AccountId) -> Data {
    transfer(TransferSet::new().add(account, 0))
}

/// Build a fungible token transfer
///
/// As with [`transfer_hbar`] the recipient leg carries `amount` and the sender
/// leg is written with a zero amount.
pub fn transfer_token(t: TokenTransfer) -> Result<Data, Error> {
    let amount = i64::try_from(t.amount).map_err(|_| Error::AmountOutOfRange(t.amount))?;

    let token_transfer = proto::TokenTransferList {
        token: Some(t.token.into()),
        transfers: vec![leg(t.recipient, amount), leg(t.sender, 0)],
        expected_decimals: Some(t.decimals),
    };

    Ok(Data::CryptoTransfer(proto::CryptoTransferTransactionBody {
        transfers: Some(proto::TransferList::default()),
        token_transfers: vec![token_transfer],
    }))
}
