// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Hedera entity identifiers
//!
//! Accounts, tokens and contracts are addressed as `shard.realm.num`.
//! These are the caller-facing forms, converted into [`proto`][crate::proto]
//! messages when a transaction body is assembled.

use core::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use alloc::vec::Vec;

use crate::proto;

/// Errors parsing `shard.realm.num` identifiers
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum IdError {
    /// Expected three `.` separated components
    #[cfg_attr(feature = "thiserror", error("expected shard.realm.num"))]
    InvalidFormat,
    /// Component is not a valid integer
    #[cfg_attr(feature = "thiserror", error("invalid id component"))]
    InvalidNumber,
    /// EVM address is not 20 bytes of hex
    #[cfg_attr(feature = "thiserror", error("invalid evm address"))]
    InvalidAddress,
}

/// Parse a `shard.realm.num` triple
fn parse_triple(s: &str) -> Result<(i64, i64, i64), IdError> {
    let mut parts = s.trim().split('.');

    let mut next = || -> Result<i64, IdError> {
        let p = parts.next().ok_or(IdError::InvalidFormat)?;
        i64::from_str(p).map_err(|_| IdError::InvalidNumber)
    };

    let v = (next()?, next()?, next()?);

    match parts.next() {
        Some(_) => Err(IdError::InvalidFormat),
        None => Ok(v),
    }
}

/// Hedera account identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId {
    pub shard: i64,
    pub realm: i64,
    pub num: i64,
}

impl AccountId {
    /// Create a new account identifier
    pub const fn new(shard: i64, realm: i64, num: i64) -> Self {
        Self { shard, realm, num }
    }

    /// Account in the default shard and realm
    pub const fn from_num(num: i64) -> Self {
        Self::new(0, 0, num)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shard, realm, num) = parse_triple(s)?;
        Ok(Self { shard, realm, num })
    }
}

impl From<AccountId> for proto::AccountId {
    fn from(a: AccountId) -> Self {
        Self {
            shard_num: a.shard,
            realm_num: a.realm,
            account: Some(proto::account_id::Account::AccountNum(a.num)),
        }
    }
}

/// Hedera token identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId {
    pub shard: i64,
    pub realm: i64,
    pub num: i64,
}

impl TokenId {
    /// Create a new token identifier
    pub const fn new(shard: i64, realm: i64, num: i64) -> Self {
        Self { shard, realm, num }
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for TokenId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shard, realm, num) = parse_triple(s)?;
        Ok(Self { shard, realm, num })
    }
}

impl From<TokenId> for proto::TokenId {
    fn from(t: TokenId) -> Self {
        Self {
            shard_num: t.shard,
            realm_num: t.realm,
            token_num: t.num,
        }
    }
}

/// Contract addressing, by entity number or by EVM address
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContractTarget {
    Num(i64),
    EvmAddress([u8; 20]),
}

/// Hedera smart contract identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractId {
    #[cfg_attr(feature = "serde", serde(default))]
    pub shard: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub realm: i64,
    pub target: ContractTarget,
}

impl ContractId {
    /// Contract by `shard.realm.num`
    pub const fn new(shard: i64, realm: i64, num: i64) -> Self {
        Self {
            shard,
            realm,
            target: ContractTarget::Num(num),
        }
    }

    /// Contract by EVM address
    pub const fn evm(address: [u8; 20]) -> Self {
        Self {
            shard: 0,
            realm: 0,
            target: ContractTarget::EvmAddress(address),
        }
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match &self.target {
            ContractTarget::Num(n) => write!(f, "{}.{}.{}", self.shard, self.realm, n),
            ContractTarget::EvmAddress(a) => write!(f, "0x{}", hex::encode(a)),
        }
    }
}

/// Parses either `shard.realm.num` or a `0x` prefixed 20-byte EVM address
impl FromStr for ContractId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let h = match s.strip_prefix("0x") {
            Some(h) => h,
            None => {
                let (shard, realm, num) = parse_triple(s)?;
                return Ok(Self::new(shard, realm, num));
            }
        };

        let mut address = [0u8; 20];
        hex::decode_to_slice(h, &mut address).map_err(|_| IdError::InvalidAddress)?;

        Ok(Self::evm(address))
    }
}

/// EVM addressed contracts are always encoded with zero shard and realm
impl From<ContractId> for proto::ContractId {
    fn from(c: ContractId) -> Self {
        match c.target {
            ContractTarget::Num(n) => Self {
                shard_num: c.shard,
                realm_num: c.realm,
                contract: Some(proto::contract_id::Contract::ContractNum(n)),
            },
            ContractTarget::EvmAddress(a) => Self {
                shard_num: 0,
                realm_num: 0,
                contract: Some(proto::contract_id::Contract::EvmAddress(Vec::from(a))),
            },
        }
    }
}
