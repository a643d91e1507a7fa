// Copyright (c) 2022-2023 The MobileCoin Foundation

use std::path::Path;

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use ledger_hedera::core::{Transaction, TransactionHeader, TransactionKind};

/// Transaction description loaded from JSON
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TxDescription {
    /// Payer, fee, memo and optional supplements
    pub header: TransactionHeader,
    /// Tagged body variant (`{ "type": "transfer_hbar", ... }`)
    pub body: TransactionKind,
}

impl TxDescription {
    /// Build the transaction described
    pub fn build(self) -> anyhow::Result<Transaction> {
        let tx = Transaction::build(self.header, self.body)?;
        Ok(tx)
    }
}

/// Helper to read input files where required
pub async fn read_input<T: DeserializeOwned>(file_name: &str) -> anyhow::Result<T> {
    debug!("Reading input from '{}'", file_name);

    let s = tokio::fs::read_to_string(file_name).await?;

    // Determine format from file name
    let p = Path::new(file_name);

    let v = match p.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&s)?,
        _ => return Err(anyhow::anyhow!("unsupported input file format")),
    };

    Ok(v)
}
