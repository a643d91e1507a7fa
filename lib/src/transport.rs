// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transport configuration
//!
//! Device communication uses [ledger_lib] transports, this adds command line
//! and environment configuration for the Speculos APDU socket.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub use ledger_lib::transport::{GenericDevice, TcpInfo, TcpTransport};

/// Options for connecting to a Speculos APDU socket
#[derive(Clone, PartialEq, Debug, clap::Parser)]
pub struct TcpOptions {
    /// Speculos APDU socket address
    #[clap(long, env = "LEDGER_ADDR", default_value = "127.0.0.1")]
    pub addr: IpAddr,

    /// Speculos APDU socket port
    #[clap(long, env = "LEDGER_PORT", default_value_t = 9999)]
    pub port: u16,
}

impl Default for TcpOptions {
    fn default() -> Self {
        Self {
            addr: Ipv4Addr::LOCALHOST.into(),
            port: 9999,
        }
    }
}

impl TcpOptions {
    /// Socket address for the configured device
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

impl From<&TcpOptions> for TcpInfo {
    fn from(o: &TcpOptions) -> Self {
        TcpInfo {
            addr: o.socket_addr(),
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[test]
    fn tcp_options() {
        let o = TcpOptions::try_parse_from(["test"]).unwrap();
        assert_eq!(o, TcpOptions::default());

        let o = TcpOptions::try_parse_from(["test", "--addr", "10.0.0.2", "--port", "40000"])
            .unwrap();
        let info = TcpInfo::from(&o);
        assert_eq!(info.addr, "10.0.0.2:40000".parse::<SocketAddr>().unwrap());
    }
}
