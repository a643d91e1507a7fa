// Copyright (c) 2022-2023 The MobileCoin Foundation

use ledger_hedera_apdu::{status::StatusCode, ApduError};

/// Ledger Hedera API Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Device transport error
    #[error("Transport error: {0}")]
    Transport(ledger_lib::Error),

    /// Request timeout
    #[error("Timeout waiting for device response")]
    RequestTimeout,

    /// Timeout waiting for user
    #[error("Timeout waiting for user interaction")]
    UserTimeout,

    /// User denied operation
    #[error("Operation rejected by user")]
    UserDenied,

    /// Device returned a known failure status
    #[error("Device error: {0}")]
    Status(StatusCode),

    /// Device returned an unrecognised status word
    #[error("Unknown status word: 0x{0:04x}")]
    UnknownStatus(u16),

    /// APDU encode / decode failure
    #[error("APDU error: {0:?}")]
    Apdu(ApduError),

    /// Transaction building failure
    #[error("Transaction error: {0}")]
    Core(#[from] ledger_hedera_core::Error),

    /// Signature did not verify against the device key
    #[error("Invalid signature")]
    InvalidSignature,

    /// Invalid key in response
    #[error("Invalid key object")]
    InvalidKey,
}

impl From<ApduError> for Error {
    fn from(e: ApduError) -> Self {
        Error::Apdu(e)
    }
}

/// Status words are mapped to Hedera application errors, timeouts to
/// [`Error::RequestTimeout`]
impl From<ledger_lib::Error> for Error {
    fn from(e: ledger_lib::Error) -> Self {
        match e {
            ledger_lib::Error::Timeout => Error::RequestTimeout,
            ledger_lib::Error::Status(s) => Error::from_status(s as u16),
            ledger_lib::Error::UnknownStatus(sw1, sw2) => {
                Error::from_status(u16::from_be_bytes([sw1, sw2]))
            }
            ledger_lib::Error::Apdu(e) => Error::Apdu(e),
            _ => Error::Transport(e),
        }
    }
}

impl Error {
    /// Map a non-success status word to an error
    pub fn from_status(sw: u16) -> Self {
        match StatusCode::try_from(sw) {
            Ok(StatusCode::UserRejected) => Error::UserDenied,
            Ok(s) => Error::Status(s),
            Err(_) => Error::UnknownStatus(sw),
        }
    }
}
