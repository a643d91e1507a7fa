// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Public key APDUs, for fetching the ed25519 key for a derivation path

use encdec::{DecodeOwned, Encode};

use super::{ApduError, ApduStatic, Instruction, HEDERA_APDU_CLA, P1_CONFIRM, P1_NON_CONFIRM};
use crate::{helpers::*, path::DerivationPath};

/// Public key request APDU.
///
/// Requests the ed25519 public key for the provided derivation path,
/// with `P1` selecting whether the key is shown to the user for approval.
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                 DERIVATION_PATH (4 * N bytes)                 /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct PublicKeyReq {
    /// Derivation path for the requested key
    pub path: DerivationPath,
    /// Display the key and wait for user confirmation
    pub confirm: bool,
}

impl PublicKeyReq {
    /// Create a new [`PublicKeyReq`] APDU
    pub fn new(path: DerivationPath, confirm: bool) -> Self {
        Self { path, confirm }
    }
}

impl ApduStatic for PublicKeyReq {
    const CLA: u8 = HEDERA_APDU_CLA;
    const INS: u8 = Instruction::GetPublicKey as u8;

    fn p1(&self) -> u8 {
        match self.confirm {
            true => P1_CONFIRM,
            false => P1_NON_CONFIRM,
        }
    }
}

impl Encode for PublicKeyReq {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        self.path.encode_len()
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        self.path.encode(buff)
    }
}

/// Decodes the path only, `confirm` is carried in `P1` and defaults to `false`
impl DecodeOwned for PublicKeyReq {
    type Output = Self;
    type Error = ApduError;

    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        let (path, n) = DerivationPath::decode_owned(buff)?;
        Ok((
            Self {
                path,
                confirm: false,
            },
            n,
        ))
    }
}

/// Public key response APDU
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                          PUBLIC_KEY                           /
/// /                   (32-byte ed25519 public key)                /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug, encdec::Encode, encdec::Decode)]
#[encdec(error = "ApduError")]
pub struct PublicKeyResp {
    /// ed25519 public key
    #[encdec(with = "arr")]
    pub key: [u8; 32],
}

impl PublicKeyResp {
    /// Create a new [`PublicKeyResp`] APDU
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }
}

#[cfg(test)]
mod test {
    use rand::random;

    use super::*;
    use crate::test::{command, encode_decode_apdu};

    #[test]
    fn public_key_req_apdu() {
        let path = DerivationPath::hedera(random::<u32>() >> 1).unwrap();
        let apdu = PublicKeyReq::new(path, false);

        let mut buff = [0u8; 128];
        encode_decode_apdu(&mut buff, &apdu);
    }

    #[test]
    fn public_key_req_p1() {
        let path = DerivationPath::hedera(0).unwrap();

        let c = command(&PublicKeyReq::new(path.clone(), true));
        assert_eq!(c.len(), 5 + 20);
        assert_eq!(&c[..5], &[0xE0, 0x02, 0x00, 0x00, 20]);

        let c = command(&PublicKeyReq::new(path, false));
        assert_eq!(&c[..5], &[0xE0, 0x02, 0x01, 0x00, 20]);
    }

    #[test]
    fn public_key_resp_apdu() {
        let apdu = PublicKeyResp::new(random());

        let mut buff = [0u8; 128];
        let n = encode_decode_apdu(&mut buff, &apdu);
        assert_eq!(n, 32);
    }
}
