// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Application configuration APDUs

use core::fmt::{Display, Formatter};

use encdec::{DecodeOwned, Encode};

use super::{ApduError, ApduStatic, Instruction, HEDERA_APDU_CLA};

/// Fetch application configuration APDU
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct AppConfigReq {}

impl ApduStatic for AppConfigReq {
    const CLA: u8 = HEDERA_APDU_CLA;
    const INS: u8 = Instruction::GetAppConfiguration as u8;
}

impl Encode for AppConfigReq {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn encode(&self, _buff: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }
}

impl DecodeOwned for AppConfigReq {
    type Output = Self;

    type Error = ApduError;

    fn decode_owned(_buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        Ok((Self {}, 0))
    }
}

/// Application configuration response APDU
///
/// ## Encoding
///
/// ```text
///  0                   1                   2
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     MAJOR     |     MINOR     |     PATCH     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug, encdec::Encode, encdec::Decode)]
#[encdec(error = "ApduError")]
pub struct AppConfigResp {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl AppConfigResp {
    /// Create a new application configuration APDU
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Display for AppConfigResp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod test {
    use rand::random;

    use super::*;
    use crate::test::{command, encode_decode_apdu};

    #[test]
    fn app_config_req_apdu() {
        assert_eq!(
            command(&AppConfigReq::default()),
            &[0xE0, 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn app_config_resp_apdu() {
        let apdu = AppConfigResp::new(random(), random(), random());

        let mut buff = [0u8; 16];
        let n = encode_decode_apdu(&mut buff, &apdu);
        assert_eq!(n, 3);
    }

    #[test]
    fn app_config_display() {
        assert_eq!(std::format!("{}", AppConfigResp::new(1, 4, 2)), "1.4.2");
    }
}
