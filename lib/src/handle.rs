// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Handle for connected ledger devices
//!
//! This provides methods for interacting with the Hedera application
//! and is generic over [ledger_lib::Device]

use std::{sync::Arc, time::Duration};

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use encdec::Encode;
use ledger_lib::Device;
use ledger_proto::{ApduBase, ApduReq};
use log::debug;
use tokio::sync::Mutex;

use ledger_hedera_apdu::{
    prelude::{
        AppConfigReq, AppConfigResp, DerivationPath, PublicKeyReq, PublicKeyResp, SignTxReq,
        SignatureResp,
    },
    ApduError, APDU_HEADER_LEN, MAX_APDU_DATA,
};
use ledger_hedera_core::{payload, Transaction};

use crate::Error;

/// Buffer for a complete command APDU
const APDU_BUFF_LEN: usize = APDU_HEADER_LEN + MAX_APDU_DATA;

/// Hedera handle for a connected ledger [Device].
///
/// This is generic over [Device] types to support different
/// underlying transports / providers
pub struct DeviceHandle<T: Device> {
    /// Device handle for communication, one request in flight at a time
    t: Arc<Mutex<T>>,
    /// Timeout for user acknowledgements
    user_timeout_s: u64,
    /// Timeout for APDU requests
    request_timeout_s: u64,
}

impl<T: Device> Clone for DeviceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            t: self.t.clone(),
            user_timeout_s: self.user_timeout_s,
            request_timeout_s: self.request_timeout_s,
        }
    }
}

/// Create a [DeviceHandle] wrapper from a type implementing [Device]
impl<T: Device> From<T> for DeviceHandle<T> {
    fn from(t: T) -> Self {
        Self {
            t: Arc::new(Mutex::new(t)),
            user_timeout_s: 30,
            request_timeout_s: 2,
        }
    }
}

/// Wait expected while a request is in flight
#[derive(Copy, Clone, Debug, PartialEq)]
enum Wait {
    /// Device response only
    Request,
    /// Device response following user interaction
    User,
}

impl<T: Device + Send> DeviceHandle<T> {
    /// Override user and request timeouts (in seconds)
    pub fn with_timeouts(mut self, user_timeout_s: u64, request_timeout_s: u64) -> Self {
        self.user_timeout_s = user_timeout_s;
        self.request_timeout_s = request_timeout_s;
        self
    }

    /// Helper to fetch user interaction timeout
    fn user_timeout(&self) -> Duration {
        Duration::from_secs(self.user_timeout_s)
    }

    /// Helper to fetch APDU request timeout
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_s)
    }

    /// Fetch ledger application version
    pub async fn app_config(&self) -> Result<AppConfigResp, Error> {
        let mut buff = [0u8; APDU_BUFF_LEN];

        debug!("Requesting app configuration");

        self.request::<AppConfigResp>(AppConfigReq {}, &mut buff, Wait::Request)
            .await
    }

    /// Fetch the ed25519 public key for a derivation path,
    /// optionally displaying it for user confirmation
    pub async fn public_key(
        &self,
        path: &DerivationPath,
        confirm: bool,
    ) -> Result<VerifyingKey, Error> {
        let mut buff = [0u8; APDU_BUFF_LEN];

        debug!("Requesting public key for path: {} (confirm: {})", path, confirm);

        let wait = match confirm {
            true => Wait::User,
            false => Wait::Request,
        };

        let req = PublicKeyReq::new(path.clone(), confirm);
        let resp = self.request::<PublicKeyResp>(req, &mut buff, wait).await?;

        VerifyingKey::from_bytes(&resp.key).map_err(|_| Error::InvalidKey)
    }

    /// Sign a transaction, returning the signature over the serialised body
    pub async fn sign_transaction(
        &self,
        path: &DerivationPath,
        tx: &Transaction,
    ) -> Result<Signature, Error> {
        debug!("Signing {} transaction with path: {}", tx.data, path);

        self.sign_payload(path, &tx.encode()).await
    }

    /// Sign a pre-serialised transaction body
    pub async fn sign_payload(
        &self,
        path: &DerivationPath,
        body: &[u8],
    ) -> Result<Signature, Error> {
        let mut buff = [0u8; APDU_BUFF_LEN];

        debug!("Requesting signature for {} byte body", body.len());

        // Bodies are sent in a single APDU
        let req = SignTxReq::new(path.clone(), body);
        if req.encode_len()? > MAX_APDU_DATA {
            return Err(Error::Apdu(ApduError::InvalidLength));
        }

        let resp = self
            .request::<SignatureResp>(req, &mut buff, Wait::User)
            .await?;

        Ok(Signature::from_bytes(&resp.signature))
    }

    /// Issue a request to the underlying [Device], timeouts are reported
    /// against the wait in progress
    async fn request<'a, 'b, RESP: ApduBase<'b>>(
        &self,
        req: impl ApduReq<'a> + Send,
        buff: &'b mut [u8],
        wait: Wait,
    ) -> Result<RESP, Error> {
        let timeout = match wait {
            Wait::Request => self.request_timeout(),
            Wait::User => self.user_timeout(),
        };

        let r = self.t.lock().await.request(req, buff, timeout).await;

        match r.map_err(Error::from) {
            Err(Error::RequestTimeout) if wait == Wait::User => Err(Error::UserTimeout),
            Err(e) => {
                debug!("Request failed: {}", e);
                Err(e)
            }
            Ok(v) => Ok(v),
        }
    }
}

/// Verify an ed25519 signature over a serialised transaction body
pub fn verify_signature(key: &VerifyingKey, body: &[u8], sig: &Signature) -> Result<(), Error> {
    key.verify(body, sig).map_err(|_| Error::InvalidSignature)
}

/// Build the sign payload for a transaction without a device,
/// rejecting payloads that do not fit a single APDU
pub fn encode_sign_payload(path: &DerivationPath, tx: &Transaction) -> Result<Vec<u8>, Error> {
    let p = payload::sign_payload(path, tx)?;

    if p.len() > MAX_APDU_DATA {
        return Err(Error::Apdu(ApduError::InvalidLength));
    }

    Ok(p)
}
