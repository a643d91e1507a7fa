// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Command line utility for interacting with the Ledger Hedera application

use clap::Parser;
use log::{debug, info, LevelFilter};

use ledger_hedera::{
    apdu::path::DerivationPath, encode_sign_payload, verify_signature, Device, DeviceHandle,
    GenericHandle, TcpOptions,
};

mod helpers;
use helpers::*;

/// Ledger command line utility
#[derive(Clone, PartialEq, Debug, Parser)]
struct Options {
    /// Speculos / device connection options
    #[clap(flatten)]
    tcp: TcpOptions,

    /// Subcommand to execute
    #[clap(subcommand)]
    cmd: Actions,

    /// Enable verbose logging
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, PartialEq, Debug, Parser)]
#[non_exhaustive]
enum Actions {
    /// Print the hex encoded sign payload for a transaction (no device required)
    Encode {
        /// JSON transaction description
        #[clap(long)]
        input: String,

        /// Derivation path or key index
        #[clap(long, default_value = "0")]
        path: DerivationPath,
    },

    /// Fetch application version
    AppConfig,

    /// Fetch the ed25519 public key for a derivation path
    PublicKey {
        /// Derivation path or key index
        #[clap(long, default_value = "44'/3030'/0'/0'/0'")]
        path: DerivationPath,

        /// Display the key on the device for confirmation
        #[clap(long)]
        confirm: bool,
    },

    /// Sign a transaction and verify the signature against the device key
    Sign {
        /// JSON transaction description
        #[clap(long)]
        input: String,

        /// Derivation path or key index
        #[clap(long, default_value = "0")]
        path: DerivationPath,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Options::parse();

    // Setup logging
    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())?;

    // Encoding is handled without a device
    if let Actions::Encode { input, path } = &args.cmd {
        return encode(input, path).await;
    }

    // Connect to device
    debug!("Connecting to {}", args.tcp.socket_addr());
    let t = GenericHandle::connect_tcp(&args.tcp).await?;

    // Execute command
    execute(t, args.cmd).await?;

    Ok(())
}

/// Print the hex encoded sign payload for a transaction description
async fn encode(input: &str, path: &DerivationPath) -> anyhow::Result<()> {
    let tx = read_input::<TxDescription>(input).await?.build()?;
    let p = encode_sign_payload(path, &tx)?;

    info!("{} transaction, {} byte payload", tx.data, p.len());
    println!("{}", hex::encode(p));

    Ok(())
}

/// Execute a command with the provided device handle
async fn execute<T: Device + Send>(t: DeviceHandle<T>, cmd: Actions) -> anyhow::Result<()> {
    debug!("Executing command: {:?}", cmd);

    match cmd {
        Actions::AppConfig => {
            let c = t.app_config().await?;

            info!("app version: {}", c);
        }
        Actions::PublicKey { path, confirm } => {
            info!("requesting public key for path: {}", path);

            let k = t.public_key(&path, confirm).await?;

            info!("public key: {}", hex::encode(k.as_bytes()));
        }
        Actions::Sign { input, path } => {
            let tx = read_input::<TxDescription>(&input).await?.build()?;
            let body = tx.encode();

            info!(
                "signing {} transaction ({} bytes) with path: {}",
                tx.data,
                body.len(),
                path
            );

            let sig = t.sign_payload(&path, &body).await?;
            info!("signature: {}", hex::encode(sig.to_bytes()));

            // Check the signature against the key for the same path
            let key = t.public_key(&path, false).await?;
            verify_signature(&key, &body, &sig)?;

            info!("signature verified with key: {}", hex::encode(key.as_bytes()));
        }
        Actions::Encode { input, path } => encode(&input, &path).await?,
    }

    Ok(())
}
