// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Sign request payloads, the encoded derivation path followed by the
//! serialised transaction body

use alloc::{vec, vec::Vec};

use encdec::Encode;
use ledger_hedera_apdu::path::DerivationPath;
use prost::Message;

use crate::{proto, Error, Transaction};

/// Concatenate an encoded path with serialised body bytes
pub fn encode_payload(path: &DerivationPath, body: &[u8]) -> Result<Vec<u8>, Error> {
    let n = path.encode_len()?;

    let mut buff = vec![0u8; n + body.len()];
    path.encode(&mut buff[..n])?;
    buff[n..].copy_from_slice(body);

    log::trace!("sign payload for {path}: {} bytes", buff.len());

    Ok(buff)
}

/// Build the sign payload for a transaction
pub fn sign_payload(path: &DerivationPath, tx: &Transaction) -> Result<Vec<u8>, Error> {
    encode_payload(path, &tx.encode())
}

/// Decode a serialised transaction body
pub fn decode_body(buff: &[u8]) -> Result<proto::TransactionBody, Error> {
    let b = proto::TransactionBody::decode(buff)?;
    Ok(b)
}
