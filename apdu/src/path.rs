// Copyright (c) 2022-2023 The MobileCoin Foundation

//! BIP-0032 derivation paths
//!
//! Paths are parsed from the usual `m/44'/3030'/0'` notation and sent to the
//! device as consecutive little-endian `u32` words, with hardened components
//! carrying [`HARDENED`] in the top bit.
//!
//! ## Encoding:
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                     COMPONENT_0 (u32, LE)                     |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! /                              ...                              /
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                     COMPONENT_N (u32, LE)                     |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use core::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use encdec::{DecodeOwned, Encode};

use crate::ApduError;

/// Hardened derivation flag
pub const HARDENED: u32 = 0x8000_0000;

/// Maximum number of path components
pub const MAX_PATH_LEN: usize = 10;

/// BIP-0044 purpose
pub const PURPOSE: u32 = 44;

/// SLIP-0044 coin type for Hedera
pub const HEDERA_COIN_TYPE: u32 = 3030;

/// Derivation path parse errors
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathError {
    /// No components in path
    Empty,
    /// Component at index is not a decimal integer
    InvalidComponent(usize),
    /// Component at index exceeds the available index range
    OutOfRange(usize),
    /// More than [`MAX_PATH_LEN`] components
    TooLong,
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PathError::Empty => write!(f, "empty path"),
            PathError::InvalidComponent(i) => write!(f, "component {i} is not a valid index"),
            PathError::OutOfRange(i) => write!(f, "component {i} is out of range"),
            PathError::TooLong => write!(f, "more than {MAX_PATH_LEN} components"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// Parsed BIP-0032 derivation path
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DerivationPath {
    components: heapless::Vec<u32, MAX_PATH_LEN>,
}

impl DerivationPath {
    /// Build a path from raw (already flagged) components
    pub fn from_components(components: &[u32]) -> Result<Self, PathError> {
        if components.is_empty() {
            return Err(PathError::Empty);
        }

        let components =
            heapless::Vec::from_slice(components).map_err(|_| PathError::TooLong)?;

        Ok(Self { components })
    }

    /// Default Hedera path for a key index, `m/44'/3030'/0'/0'/index'`
    ///
    /// `index` must fit below [`HARDENED`] as the last component is hardened.
    pub fn hedera(index: u32) -> Result<Self, PathError> {
        if index & HARDENED != 0 {
            return Err(PathError::OutOfRange(4));
        }

        let components = [PURPOSE, HEDERA_COIN_TYPE, 0, 0, index]
            .into_iter()
            .map(|c| c | HARDENED)
            .collect();

        Ok(Self { components })
    }

    /// Single component key index path, as parsed by the signing handler
    pub fn from_index(index: u32) -> Self {
        Self {
            components: core::iter::once(index).collect(),
        }
    }

    /// Raw path components, hardened flag included
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Iterate over `(index, hardened)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.components
            .iter()
            .map(|c| (c & !HARDENED, c & HARDENED != 0))
    }

    /// Number of path components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check whether the path has no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Key index as shown by the device (last component, hardened flag cleared)
    pub fn key_index(&self) -> Option<u32> {
        self.components.last().map(|c| c & !HARDENED)
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("m/").unwrap_or(s);

        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let mut components = heapless::Vec::new();

        for (i, c) in s.split('/').enumerate() {
            let (digits, hardened) = match c.strip_suffix(['\'', 'h', 'H']) {
                Some(d) => (d, true),
                None => (c, false),
            };

            // `u32::from_str` accepts a leading `+`, paths do not
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PathError::InvalidComponent(i));
            }

            let v = u32::from_str(digits).map_err(|_| PathError::OutOfRange(i))?;

            let v = match hardened {
                true if v & HARDENED != 0 => return Err(PathError::OutOfRange(i)),
                true => v | HARDENED,
                false => v,
            };

            components.push(v).map_err(|_| PathError::TooLong)?;
        }

        Ok(Self { components })
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "m")?;
        for (index, hardened) in self.iter() {
            match hardened {
                true => write!(f, "/{index}'")?,
                false => write!(f, "/{index}")?,
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for DerivationPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl Encode for DerivationPath {
    type Error = ApduError;

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(self.components.len() * 4)
    }

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.encode_len()?;
        if buff.len() < n {
            return Err(ApduError::InvalidLength);
        }

        for (i, c) in self.components.iter().enumerate() {
            buff[i * 4..][..4].copy_from_slice(&c.to_le_bytes());
        }

        Ok(n)
    }
}

/// Decode a path occupying the whole of the provided buffer
impl DecodeOwned for DerivationPath {
    type Output = Self;
    type Error = ApduError;

    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        if buff.is_empty() || buff.len() % 4 != 0 {
            return Err(ApduError::InvalidLength);
        }

        let mut components = heapless::Vec::new();
        for w in buff.chunks_exact(4) {
            let c = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
            components
                .push(c)
                .map_err(|_| ApduError::InvalidLength)?;
        }

        Ok((Self { components }, buff.len()))
    }
}
