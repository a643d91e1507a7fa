// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Prelude to simplify downstream use of APDU objects
//!

pub use crate::{
    app_config::{AppConfigReq, AppConfigResp},
    path::{DerivationPath, PathError},
    public_key::{PublicKeyReq, PublicKeyResp},
    sign::{SignTxReq, SignatureResp},
    status::StatusCode,
    ApduError, ApduReq, ApduStatic, Instruction,
};
