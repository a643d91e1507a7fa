// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Hedera hardware wallet core
//!
//! This provides the host-side [transaction builder][builder] for the Hedera
//! ledger application, producing serialised protobuf `TransactionBody` messages
//! and the [sign payloads][payload] submitted to the device.
//! See [ledger_hedera_apdu] for APDU objects and wire encodings.
//!
//! ## Operations
//!
//! Prior to signing, the client may issue an
//! [`AppConfigReq`][ledger_hedera_apdu::app_config::AppConfigReq] to fetch the
//! application version, and a [`PublicKeyReq`][ledger_hedera_apdu::public_key::PublicKeyReq]
//! to fetch the ed25519 public key for a derivation path.
//!
//! ### Signing a transaction
//!
//! 1. Describe the transaction as a [`TransactionKind`], or call a
//!    [builder][builder] function directly for the body variant
//! 2. Combine the body with a [`TransactionHeader`] (payer, fee, memo) via
//!    [`Transaction::new`] or [`Transaction::build`]
//! 3. Encode the derivation path and body with [`payload::sign_payload`], or wrap
//!    both in a [`SignTxReq`][ledger_hedera_apdu::sign::SignTxReq] APDU
//! 4. The device responds with an ed25519 signature over the body bytes
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use ledger_hedera_apdu::{self as apdu};

pub mod builder;
pub use builder::{StakeTarget, Transaction, TransactionHeader, TransactionKind};

pub mod ids;
pub use ids::{AccountId, ContractId, ContractTarget, TokenId};

pub mod payload;

pub mod proto;

mod error;
pub use error::Error;

