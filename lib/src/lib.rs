// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Ledger Hedera API Library (and CLI)
//!
//! Provides a [DeviceHandle] for fetching application configuration and
//! public keys from the Hedera application, and for signing transactions
//! built with [ledger_hedera_core].
//!

/// Re-export [ledger_lib::Device] for [DeviceHandle] consumers
pub use ledger_lib::Device;

/// Transport configuration
#[cfg(feature = "transport_tcp")]
pub mod transport;

#[cfg(feature = "transport_tcp")]
pub use transport::TcpOptions;

/// Re-export `ledger-hedera-apdu` for consumers
pub use ledger_hedera_apdu::{self as apdu};

/// Re-export `ledger-hedera-core` for consumers
pub use ledger_hedera_core::{self as core};

mod handle;
pub use handle::{encode_sign_payload, verify_signature, DeviceHandle};

mod error;
pub use error::Error;

/// Generic ledger device handle (abstract over transport types)
#[cfg(feature = "transport_tcp")]
pub type GenericHandle = DeviceHandle<transport::GenericDevice>;

#[cfg(feature = "transport_tcp")]
impl GenericHandle {
    /// Connect to a device (or Speculos) over TCP
    pub async fn connect_tcp(opts: &TcpOptions) -> Result<Self, Error> {
        use ledger_lib::Transport;

        let mut t = transport::TcpTransport::new()?;

        let d: transport::GenericDevice = t.connect(opts.into()).await?.into();

        Ok(DeviceHandle::from(d))
    }
}
