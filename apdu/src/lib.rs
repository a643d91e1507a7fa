// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Protocol / APDU definitions for Hedera app communication
//!
//! This module provides the command set understood by the Hedera ledger application,
//! along with encodings for request and response objects.
//!
//! Commands are short APDUs (`CLA | INS | P1 | P2 | Lc | DATA`) with at most
//! [`MAX_APDU_DATA`] bytes of data, responses carry their data followed by a two byte
//! [status word][status::StatusCode].
//! Integer fields (derivation path components) are encoded little-endian, transaction
//! bodies are passed through as serialised protobuf.
//!

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub use ledger_proto::{ApduError, ApduReq, ApduStatic};

pub mod app_config;
pub mod path;
pub mod prelude;
pub mod public_key;
pub mod sign;
pub mod status;

mod helpers;

/// Hedera APDU Class
pub const HEDERA_APDU_CLA: u8 = 0xE0;

/// Request user confirmation for the operation
pub const P1_CONFIRM: u8 = 0x00;

/// Skip user confirmation (public key requests only)
pub const P1_NON_CONFIRM: u8 = 0x01;

/// Extend a previous request
pub const P2_EXTEND: u8 = 0x01;

/// More data follows
pub const P2_MORE: u8 = 0x02;

/// Maximum data length for a single (short) APDU
pub const MAX_APDU_DATA: usize = 255;

/// Length of the APDU command header, including `Lc`
pub const APDU_HEADER_LEN: usize = 5;

/// Hedera APDU instruction codes
#[derive(Copy, Clone, Debug, PartialEq, num_enum::TryFromPrimitive, strum::Display)]
#[repr(u8)]
pub enum Instruction {
    /// Fetch application version
    GetAppConfiguration = 0x01,

    /// Fetch the ed25519 public key for a derivation path
    GetPublicKey = 0x02,

    /// Sign a serialised transaction body
    SignTransaction = 0x04,
}
