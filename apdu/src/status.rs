// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Response status words returned by the Hedera application

/// Known status words (`SW1 | SW2`), big-endian on the wire
#[derive(Copy, Clone, Debug, PartialEq, Eq, num_enum::TryFromPrimitive, strum::Display)]
#[repr(u16)]
pub enum StatusCode {
    /// Command completed
    #[strum(serialize = "ok")]
    Ok = 0x9000,

    /// Request rejected by the user on-device
    #[strum(serialize = "user rejected")]
    UserRejected = 0x6985,

    /// Device refused the operation (eg. a failed swap check)
    #[strum(serialize = "swap rejected")]
    SwapRejected = 0x6980,

    /// Malformed APDU or transaction body
    #[strum(serialize = "malformed apdu")]
    MalformedApdu = 0x6E00,

    /// Invalid P1 / P2 parameters
    #[strum(serialize = "invalid parameter")]
    InvalidParameter = 0x6B00,

    /// Instruction not supported by the application
    #[strum(serialize = "unknown instruction")]
    UnknownInstruction = 0x6D00,

    /// Internal IO reset
    #[strum(serialize = "io reset")]
    IoReset = 0x6700,

    /// Application buffer overflow
    #[strum(serialize = "overflow")]
    Overflow = 0x6701,

    /// Security check failure
    #[strum(serialize = "security error")]
    Security = 0x6702,
}
