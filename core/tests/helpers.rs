// Copyright (c) 2022-2023 The MobileCoin Foundation

#![allow(unused)]

use std::str::FromStr;

use log::debug;

use ledger_hedera_core::{
    apdu::path::DerivationPath,
    payload::{decode_body, sign_payload},
    proto::{self, transaction_body::Data},
    AccountId, Transaction, TransactionHeader,
};

/// Derivation path used by the sign tests
pub const TEST_PATH: &str = "m/44'/3030'/0'";

/// Setup logging for tests, honouring `LOG_LEVEL` when set
pub fn setup_logging() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| log::LevelFilter::from_str(&l).ok())
        .unwrap_or(log::LevelFilter::Debug);

    let _ = simplelog::SimpleLogger::init(level, Default::default());
}

/// Standard operator header (`1.2.3`, fee 5, memo)
pub fn operator_header() -> TransactionHeader {
    TransactionHeader::new(AccountId::new(1, 2, 3), 5, "this_is_the_memo")
}

/// Build a sign payload, split it and decode the body
pub fn encode_and_decode(tx: &Transaction) -> anyhow::Result<proto::TransactionBody> {
    let path = DerivationPath::from_str(TEST_PATH)?;

    let p = sign_payload(&path, tx)?;
    debug!("payload: {}", hex::encode(&p));

    let n = path.len() * 4;
    assert_eq!(&p[n..], tx.encode().as_slice(), "payload body mismatch");

    let body = decode_body(&p[n..])?;

    // Header fields are always carried through
    assert_eq!(body.transaction_fee, tx.header.fee);
    assert_eq!(body.memo, tx.header.memo);
    assert_eq!(
        body.transaction_id.as_ref().and_then(|i| i.account_id.clone()),
        Some(tx.header.payer.into())
    );

    Ok(body)
}

/// Fetch the transfer body, panicking for other variants
pub fn transfer_body(b: &proto::TransactionBody) -> &proto::CryptoTransferTransactionBody {
    match &b.data {
        Some(Data::CryptoTransfer(t)) => t,
        d => panic!("expected crypto transfer, got: {d:?}"),
    }
}
