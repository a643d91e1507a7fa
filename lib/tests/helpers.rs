// Copyright (c) 2022-2023 The MobileCoin Foundation

#![allow(unused)]

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use encdec::{Decode, Encode};
use log::{debug, LevelFilter};
use simplelog::SimpleLogger;

use ledger_lib::Exchange;

use ledger_hedera::{
    apdu::{prelude::*, APDU_HEADER_LEN, HEDERA_APDU_CLA, P1_CONFIRM, P1_NON_CONFIRM},
    core::{
        payload::decode_body,
        proto::{self, contract_id::Contract, transaction_body::Data},
        AccountId, TransactionHeader,
    },
    DeviceHandle,
};

/// Maximum memo length accepted by the device
pub const MAX_MEMO_LEN: usize = 100;

/// ERC-20 `transfer(address,uint256)` selector
pub const ERC20_TRANSFER: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Setup logging for tests, honouring `LOG_LEVEL` when set
pub fn setup_logging() {
    let log_level = match std::env::var("LOG_LEVEL").map(|v| LevelFilter::from_str(&v)) {
        Ok(Ok(l)) => l,
        _ => LevelFilter::Debug,
    };

    let _ = SimpleLogger::init(log_level, simplelog::Config::default());
}

/// Standard operator header (`0.0.2`, fee 100, memo)
pub fn operator_header() -> TransactionHeader {
    TransactionHeader::new(AccountId::from_num(2), 100, "ledger-hedera")
}

/// Create a device handle over a mock device with the provided approval behaviour
pub fn setup(approve: bool) -> (DeviceHandle<MockDevice>, MockDevice) {
    let d = MockDevice::new(approve);

    (handle(d.clone()), d)
}

/// Create a device handle for a mock device, with one second timeouts
pub fn handle(d: MockDevice) -> DeviceHandle<MockDevice> {
    setup_logging();

    DeviceHandle::from(d).with_timeouts(1, 1)
}

/// In-memory device emulating the Hedera application
///
/// Commands are decoded and checked with the same acceptance rules as the
/// device, signing with per-index keys derived from a random seed.
#[derive(Clone)]
pub struct MockDevice {
    seed: [u8; 32],
    approve: bool,
    version: AppConfigResp,
    delay: Duration,
}

impl MockDevice {
    pub fn new(approve: bool) -> Self {
        Self {
            seed: rand::random(),
            approve,
            version: AppConfigResp::new(2, 3, 1),
            delay: Duration::ZERO,
        }
    }

    /// Delay every response by the provided duration
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn version(&self) -> AppConfigResp {
        self.version
    }

    /// Signing key for a key index
    pub fn signing_key(&self, index: u32) -> SigningKey {
        let mut s = self.seed;
        for (a, b) in s.iter_mut().zip(index.to_le_bytes()) {
            *a ^= b;
        }
        SigningKey::from_bytes(&s)
    }

    pub fn verifying_key(&self, index: u32) -> VerifyingKey {
        self.signing_key(index).verifying_key()
    }

    /// Handle a command APDU, returning response data and status word
    fn handle(&self, command: &[u8]) -> Result<Vec<u8>, StatusCode> {
        if command.len() < APDU_HEADER_LEN {
            return Err(StatusCode::IoReset);
        }

        let (h, data) = command.split_at(APDU_HEADER_LEN);
        if h[0] != HEDERA_APDU_CLA || h[4] as usize != data.len() {
            return Err(StatusCode::MalformedApdu);
        }

        let p1 = h[2];

        match Instruction::try_from(h[1]) {
            Ok(Instruction::GetAppConfiguration) => encode(&self.version),
            Ok(Instruction::GetPublicKey) => self.public_key(p1, data),
            Ok(Instruction::SignTransaction) => self.sign(data),
            Err(_) => Err(StatusCode::UnknownInstruction),
        }
    }

    fn public_key(&self, p1: u8, data: &[u8]) -> Result<Vec<u8>, StatusCode> {
        let (req, _) = PublicKeyReq::decode(data).map_err(|_| StatusCode::MalformedApdu)?;

        // Single component paths are key indices, full paths use the last component
        let index = match req.path.len() {
            1 => req.path.components()[0],
            _ => req.path.key_index().ok_or(StatusCode::MalformedApdu)?,
        };

        debug!("mock public key request for index {} (p1: {})", index, p1);

        match p1 {
            P1_CONFIRM if !self.approve => return Err(StatusCode::UserRejected),
            P1_CONFIRM | P1_NON_CONFIRM => (),
            _ => return Err(StatusCode::InvalidParameter),
        }

        encode(&PublicKeyResp::new(self.verifying_key(index).to_bytes()))
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, StatusCode> {
        let (req, _) = SignTxReq::decode(data).map_err(|_| StatusCode::MalformedApdu)?;

        // Signing requests carry a key index rather than a full path
        let index = req.path.components()[0];

        let body = decode_body(req.tx).map_err(|_| StatusCode::MalformedApdu)?;

        debug!("mock sign request for index {}: {:?}", index, body.data);

        check_body(&body)?;

        if !self.approve {
            return Err(StatusCode::UserRejected);
        }

        let sig = self.signing_key(index).sign(req.tx);
        encode(&SignatureResp::new(sig.to_bytes()))
    }
}

/// Responses are `DATA | SW1 SW2`, failures carry the status word only
#[async_trait]
impl Exchange for MockDevice {
    async fn exchange(
        &mut self,
        command: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, ledger_lib::Error> {
        let r = tokio::time::timeout(timeout, async {
            tokio::time::sleep(self.delay).await;
            self.handle(command)
        })
        .await
        .map_err(|_| ledger_lib::Error::Timeout)?;

        let (mut resp, sw) = match r {
            Ok(d) => (d, StatusCode::Ok),
            Err(e) => (vec![], e),
        };

        resp.extend_from_slice(&(sw as u16).to_be_bytes());

        Ok(resp)
    }
}

fn encode(v: &impl Encode<Error = ApduError>) -> Result<Vec<u8>, StatusCode> {
    let mut buff = vec![0u8; v.encode_len().map_err(|_| StatusCode::Overflow)?];
    v.encode(&mut buff).map_err(|_| StatusCode::Overflow)?;
    Ok(buff)
}

/// Transaction acceptance rules
fn check_body(body: &proto::TransactionBody) -> Result<(), StatusCode> {
    if body.memo.len() > MAX_MEMO_LEN {
        return Err(StatusCode::MalformedApdu);
    }

    match &body.data {
        Some(Data::CryptoCreateAccount(_))
        | Some(Data::TokenAssociate(_))
        | Some(Data::TokenDissociate(_))
        | Some(Data::TokenBurn(_))
        | Some(Data::TokenMint(_)) => Ok(()),
        Some(Data::CryptoUpdateAccount(u)) => {
            // Key changes are not supported
            if u.key.is_some() {
                return Err(StatusCode::MalformedApdu);
            }

            match &u.account_id_to_update {
                Some(proto::AccountId {
                    shard_num: 0,
                    realm_num: 0,
                    account: Some(proto::account_id::Account::AccountNum(0)) | None,
                })
                | None => Err(StatusCode::MalformedApdu),
                _ => Ok(()),
            }
        }
        Some(Data::CryptoTransfer(t)) => check_transfer(body.transaction_fee, t),
        Some(Data::ContractCall(c)) => check_contract_call(c),
        None => Err(StatusCode::MalformedApdu),
    }
}

fn check_transfer(
    fee: u64,
    t: &proto::CryptoTransferTransactionBody,
) -> Result<(), StatusCode> {
    let hbar = t.transfers.as_ref().map(|l| l.account_amounts.as_slice());
    let hbar = hbar.unwrap_or(&[]);

    if hbar.len() > 2 || t.token_transfers.len() > 1 {
        return Err(StatusCode::MalformedApdu);
    }

    match (hbar.len(), t.token_transfers.first()) {
        // Token transfer, exactly two token legs
        (0, Some(tt)) if tt.transfers.len() == 2 => match tt.expected_decimals {
            Some(d) if d >= 20 => Err(StatusCode::MalformedApdu),
            _ => Ok(()),
        },
        // Account verification
        (1, None) if hbar[0].amount == 0 && fee == 1 => Ok(()),
        // Hbar transfer
        (2, None) => Ok(()),
        _ => Err(StatusCode::MalformedApdu),
    }
}

fn check_contract_call(c: &proto::ContractCallTransactionBody) -> Result<(), StatusCode> {
    if let Some(proto::ContractId {
        contract: Some(Contract::EvmAddress(a)),
        ..
    }) = &c.contract_id
    {
        if a.len() != 20 {
            return Err(StatusCode::MalformedApdu);
        }
    }

    if c.gas <= 0 || c.amount < 0 {
        return Err(StatusCode::MalformedApdu);
    }

    let p = &c.function_parameters;
    if p.len() < 68 || p[..4] != ERC20_TRANSFER {
        return Err(StatusCode::MalformedApdu);
    }

    Ok(())
}

/// ABI encoded ERC-20 `transfer(address,uint256)` call data
pub fn erc20_transfer(to: [u8; 20], amount: u64) -> Vec<u8> {
    let mut p = ERC20_TRANSFER.to_vec();

    let mut w = [0u8; 32];
    w[12..].copy_from_slice(&to);
    p.extend_from_slice(&w);

    let mut w = [0u8; 32];
    w[24..].copy_from_slice(&amount.to_be_bytes());
    p.extend_from_slice(&w);

    p
}
