// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Hedera protobuf messages (`proto` package), restricted to the subset
//! understood by the Hedera ledger application.
//!
//! Field numbers are the Hedera HAPI wire contract and must not be changed.
//! `google.protobuf` wrapper types (`BoolValue`, `Int32Value`, `UInt32Value`,
//! `StringValue`) are mapped to optional scalars, as `prost-build` does.

/// Timestamp with nanosecond resolution
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

/// Length of time in seconds
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
}

/// Account identifier (`shardNum.realmNum.accountNum`)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(oneof = "account_id::Account", tags = "3, 4")]
    pub account: ::core::option::Option<account_id::Account>,
}
/// Nested message and enum types in `AccountID`.
pub mod account_id {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Account {
        #[prost(int64, tag = "3")]
        AccountNum(i64),
        /// Serialised public key alias
        #[prost(bytes, tag = "4")]
        Alias(::prost::alloc::vec::Vec<u8>),
    }
}

/// Token identifier (`shardNum.realmNum.tokenNum`)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(int64, tag = "3")]
    pub token_num: i64,
}

/// Smart contract identifier
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractId {
    #[prost(int64, tag = "1")]
    pub shard_num: i64,
    #[prost(int64, tag = "2")]
    pub realm_num: i64,
    #[prost(oneof = "contract_id::Contract", tags = "3, 4")]
    pub contract: ::core::option::Option<contract_id::Contract>,
}
/// Nested message and enum types in `ContractID`.
pub mod contract_id {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Contract {
        #[prost(int64, tag = "3")]
        ContractNum(i64),
        /// 20-byte EVM address
        #[prost(bytes, tag = "4")]
        EvmAddress(::prost::alloc::vec::Vec<u8>),
    }
}

/// Transaction identifier, the payer and valid start time
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionId {
    #[prost(message, optional, tag = "1")]
    pub transaction_valid_start: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub account_id: ::core::option::Option<AccountId>,
}

/// Public key
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Key {
    #[prost(oneof = "key::Key", tags = "2, 7")]
    pub key: ::core::option::Option<key::Key>,
}
/// Nested message and enum types in `Key`.
pub mod key {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Key {
        #[prost(bytes, tag = "2")]
        Ed25519(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "7")]
        EcdsaSecp256k1(::prost::alloc::vec::Vec<u8>),
    }
}

/// Account and signed amount to transfer
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountAmount {
    #[prost(message, optional, tag = "1")]
    pub account_id: ::core::option::Option<AccountId>,
    #[prost(sint64, tag = "2")]
    pub amount: i64,
    #[prost(bool, tag = "3")]
    pub is_approval: bool,
}

/// List of hbar transfers
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferList {
    #[prost(message, repeated, tag = "1")]
    pub account_amounts: ::prost::alloc::vec::Vec<AccountAmount>,
}

/// List of fungible transfers for a single token
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenTransferList {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(message, repeated, tag = "2")]
    pub transfers: ::prost::alloc::vec::Vec<AccountAmount>,
    #[prost(message, optional, tag = "4")]
    pub expected_decimals: ::core::option::Option<u32>,
}

/// Create a new account
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoCreateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub key: ::core::option::Option<Key>,
    #[prost(uint64, tag = "2")]
    pub initial_balance: u64,
    #[prost(string, tag = "13")]
    pub memo: ::prost::alloc::string::String,
    #[prost(bool, tag = "17")]
    pub decline_reward: bool,
    #[prost(oneof = "crypto_create_transaction_body::StakedId", tags = "15, 16")]
    pub staked_id: ::core::option::Option<crypto_create_transaction_body::StakedId>,
}
/// Nested message and enum types in `CryptoCreateTransactionBody`.
pub mod crypto_create_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "15")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "16")]
        StakedNodeId(i64),
    }
}

/// Update an existing account
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoUpdateTransactionBody {
    #[prost(message, optional, tag = "2")]
    pub account_id_to_update: ::core::option::Option<AccountId>,
    #[prost(message, optional, tag = "3")]
    pub key: ::core::option::Option<Key>,
    #[prost(message, optional, tag = "8")]
    pub auto_renew_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "9")]
    pub expiration_time: ::core::option::Option<Timestamp>,
    #[prost(message, optional, tag = "14")]
    pub memo: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "15")]
    pub max_automatic_token_associations: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "18")]
    pub decline_reward: ::core::option::Option<bool>,
    #[prost(
        oneof = "crypto_update_transaction_body::ReceiverSigRequiredField",
        tags = "6, 13"
    )]
    pub receiver_sig_required_field:
        ::core::option::Option<crypto_update_transaction_body::ReceiverSigRequiredField>,
    #[prost(oneof = "crypto_update_transaction_body::StakedId", tags = "16, 17")]
    pub staked_id: ::core::option::Option<crypto_update_transaction_body::StakedId>,
}
/// Nested message and enum types in `CryptoUpdateTransactionBody`.
pub mod crypto_update_transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ReceiverSigRequiredField {
        /// Deprecated plain boolean form
        #[prost(bool, tag = "6")]
        ReceiverSigRequired(bool),
        #[prost(message, tag = "13")]
        ReceiverSigRequiredWrapper(bool),
    }
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StakedId {
        #[prost(message, tag = "16")]
        StakedAccountId(super::AccountId),
        #[prost(int64, tag = "17")]
        StakedNodeId(i64),
    }
}

/// Transfer hbar and / or tokens between accounts
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CryptoTransferTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub transfers: ::core::option::Option<TransferList>,
    #[prost(message, repeated, tag = "2")]
    pub token_transfers: ::prost::alloc::vec::Vec<TokenTransferList>,
}

/// Associate an account with tokens
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenAssociateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: ::prost::alloc::vec::Vec<TokenId>,
}

/// Dissociate an account from tokens
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenDissociateTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<AccountId>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: ::prost::alloc::vec::Vec<TokenId>,
}

/// Burn fungible tokens from the treasury account
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenBurnTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
}

/// Mint fungible tokens to the treasury account
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenMintTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<TokenId>,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
}

/// Call a smart contract function
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCallTransactionBody {
    #[prost(message, optional, tag = "1")]
    pub contract_id: ::core::option::Option<ContractId>,
    #[prost(int64, tag = "2")]
    pub gas: i64,
    #[prost(int64, tag = "3")]
    pub amount: i64,
    #[prost(bytes, tag = "4")]
    pub function_parameters: ::prost::alloc::vec::Vec<u8>,
}

/// Transaction body, the bytes signed by the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionBody {
    #[prost(message, optional, tag = "1")]
    pub transaction_id: ::core::option::Option<TransactionId>,
    #[prost(message, optional, tag = "2")]
    pub node_account_id: ::core::option::Option<AccountId>,
    #[prost(uint64, tag = "3")]
    pub transaction_fee: u64,
    #[prost(message, optional, tag = "4")]
    pub transaction_valid_duration: ::core::option::Option<Duration>,
    #[prost(string, tag = "6")]
    pub memo: ::prost::alloc::string::String,
    #[prost(oneof = "transaction_body::Data", tags = "7, 11, 14, 15, 37, 38, 40, 41")]
    pub data: ::core::option::Option<transaction_body::Data>,
}
/// Nested message and enum types in `TransactionBody`.
pub mod transaction_body {
    #[derive(Clone, PartialEq, ::prost::Oneof, strum::Display)]
    pub enum Data {
        #[prost(message, tag = "7")]
        ContractCall(super::ContractCallTransactionBody),
        #[prost(message, tag = "11")]
        CryptoCreateAccount(super::CryptoCreateTransactionBody),
        #[prost(message, tag = "14")]
        CryptoTransfer(super::CryptoTransferTransactionBody),
        #[prost(message, tag = "15")]
        CryptoUpdateAccount(super::CryptoUpdateTransactionBody),
        #[prost(message, tag = "37")]
        TokenMint(super::TokenMintTransactionBody),
        #[prost(message, tag = "38")]
        TokenBurn(super::TokenBurnTransactionBody),
        #[prost(message, tag = "40")]
        TokenAssociate(super::TokenAssociateTransactionBody),
        #[prost(message, tag = "41")]
        TokenDissociate(super::TokenDissociateTransactionBody),
    }
}
