// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction signing APDUs
//!
//! The request carries the derivation path followed by the serialised
//! protobuf `TransactionBody`, the response the ed25519 signature over those
//! body bytes.

use encdec::{Decode, Encode};

use super::{ApduError, ApduStatic, Instruction, HEDERA_APDU_CLA, MAX_APDU_DATA, P1_CONFIRM};
use crate::{helpers::*, path::DerivationPath};

/// Length of the key index prefix read by the signing handler
pub const KEY_INDEX_LEN: usize = 4;

/// Sign transaction request APDU
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                 DERIVATION_PATH (4 * N bytes)                 /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                  TRANSACTION_BODY (protobuf)                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// There is no length prefix between path and body. On decode the path is
/// taken to be a single [`KEY_INDEX_LEN`] word, matching the device.
#[derive(Clone, PartialEq, Debug)]
pub struct SignTxReq<'a> {
    /// Signing key derivation path
    pub path: DerivationPath,
    /// Serialised transaction body
    pub tx: &'a [u8],
}

impl<'a> SignTxReq<'a> {
    /// Create a new [`SignTxReq`] APDU
    pub fn new(path: DerivationPath, tx: &'a [u8]) -> Self {
        Self { path, tx }
    }
}

impl<'a> ApduStatic for SignTxReq<'a> {
    const CLA: u8 = HEDERA_APDU_CLA;
    const INS: u8 = Instruction::SignTransaction as u8;

    fn p1(&self) -> u8 {
        P1_CONFIRM
    }
}

impl<'a> Encode for SignTxReq<'a> {
    type Error = ApduError;

    #[inline]
    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(self.path.encode_len()? + self.tx.len())
    }

    #[inline]
    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        let mut index = 0;

        // Check buffer length is valid and the request fits a single APDU
        let n = self.encode_len()?;
        if buff.len() < n || n > MAX_APDU_DATA {
            return Err(ApduError::InvalidLength);
        }

        // Write path
        index += self.path.encode(&mut buff[index..])?;

        // Write transaction body
        buff[index..][..self.tx.len()].copy_from_slice(self.tx);
        index += self.tx.len();

        Ok(index)
    }
}

impl<'a> Decode<'a> for SignTxReq<'a> {
    type Output = Self;
    type Error = ApduError;

    #[inline]
    fn decode(buff: &'a [u8]) -> Result<(Self, usize), ApduError> {
        // Check header and overall length
        if buff.len() < KEY_INDEX_LEN || buff.len() > MAX_APDU_DATA {
            return Err(ApduError::InvalidLength);
        }

        let (path, n) = DerivationPath::decode(&buff[..KEY_INDEX_LEN])?;
        let tx = &buff[n..];

        Ok((Self { path, tx }, buff.len()))
    }
}

/// Signature response APDU
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                           SIGNATURE                           /
/// /                   (64-byte ed25519 signature)                 /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug, encdec::Encode, encdec::Decode)]
#[encdec(error = "ApduError")]
pub struct SignatureResp {
    /// ed25519 signature over the transaction body
    #[encdec(with = "arr")]
    pub signature: [u8; 64],
}

impl SignatureResp {
    /// Create a new [`SignatureResp`] APDU
    pub fn new(signature: [u8; 64]) -> Self {
        Self { signature }
    }
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use rand::random;

    use super::*;
    use crate::test::{command, encode_decode_apdu};

    #[test]
    fn sign_tx_req_apdu() {
        let tx: [u8; 32] = random();
        let apdu = SignTxReq::new(DerivationPath::from_index(random()), &tx);

        let mut buff = [0u8; 256];
        let n = encode_decode_apdu(&mut buff, &apdu);
        assert_eq!(n, 4 + tx.len());
    }

    #[test]
    fn sign_tx_req_layout() {
        let path = DerivationPath::from_str("44'/3030'/0'").unwrap();
        let tx = [0x0a, 0x02, 0x18, 0x01];
        let apdu = SignTxReq::new(path, &tx);

        assert_eq!(
            hex::encode_upper(command(&apdu)),
            "E0040000102C000080D60B0080000000800A021801"
        );
    }

    #[test]
    fn sign_tx_req_oversized() {
        let tx = [0u8; MAX_APDU_DATA];
        let apdu = SignTxReq::new(DerivationPath::from_index(0), &tx);

        let mut buff = [0u8; 512];
        assert_eq!(apdu.encode_len().unwrap(), MAX_APDU_DATA + 4);
        assert!(matches!(
            apdu.encode(&mut buff),
            Err(ApduError::InvalidLength)
        ));
    }

    #[test]
    fn signature_resp_apdu() {
        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&random::<[u8; 32]>());
        signature[32..].copy_from_slice(&random::<[u8; 32]>());

        let mut buff = [0u8; 128];
        let n = encode_decode_apdu(&mut buff, &SignatureResp::new(signature));
        assert_eq!(n, 64);
    }
}
