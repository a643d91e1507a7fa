// Copyright (c) 2022-2023 The MobileCoin Foundation

use ledger_hedera_apdu::{path::PathError, ApduError};

use crate::ids::IdError;

/// Transaction builder errors
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error {
    /// Malformed derivation path
    #[cfg_attr(feature = "thiserror", error("malformed path: {0}"))]
    Path(PathError),

    /// Token amount does not fit a signed 64-bit transfer leg
    #[cfg_attr(feature = "thiserror", error("amount {0} exceeds i64::MAX"))]
    AmountOutOfRange(u64),

    /// Malformed entity identifier
    #[cfg_attr(feature = "thiserror", error("invalid entity id: {0}"))]
    Id(IdError),

    /// APDU encoding failed
    #[cfg_attr(feature = "thiserror", error("apdu encoding failed: {0:?}"))]
    Apdu(ApduError),

    /// Transaction body decoding failed
    #[cfg_attr(feature = "thiserror", error("protobuf decode failed: {0}"))]
    Decode(prost::DecodeError),
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

impl From<IdError> for Error {
    fn from(e: IdError) -> Self {
        Error::Id(e)
    }
}

impl From<ApduError> for Error {
    fn from(e: ApduError) -> Self {
        Error::Apdu(e)
    }
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        Error::Decode(e)
    }
}
