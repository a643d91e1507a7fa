// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Token association and supply bodies

use alloc::vec::Vec;

use crate::{
    ids::{AccountId, TokenId},
    proto::{self, transaction_body::Data},
};

/// Account and tokens to associate / dissociate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAssociation {
    pub account: AccountId,
    pub tokens: Vec<TokenId>,
}

/// Token and amount to mint / burn
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSupply {
    pub token: TokenId,
    pub amount: u64,
}

fn token_ids(tokens: &[TokenId]) -> Vec<proto::TokenId> {
    tokens.iter().map(|t| proto::TokenId::from(*t)).collect()
}

/// Build a `tokenAssociate` body
pub fn associate(account: AccountId, tokens: &[TokenId]) -> Data {
    Data::TokenAssociate(proto::TokenAssociateTransactionBody {
        account: Some(account.into()),
        tokens: token_ids(tokens),
    })
}

/// Build a `tokenDissociate` body
pub fn dissociate(account: AccountId, tokens: &[TokenId]) -> Data {
    Data::TokenDissociate(proto::TokenDissociateTransactionBody {
        account: Some(account.into()),
        tokens: token_ids(tokens),
    })
}

/// Build a `tokenBurn` body
pub fn burn(token: TokenId, amount: u64) -> Data {
    Data::TokenBurn(proto::TokenBurnTransactionBody {
        token: Some(token.into()),
        amount,
    })
}

/// Build a `tokenMint` body
pub fn mint(token: TokenId, amount: u64) -> Data {
    Data::TokenMint(proto::TokenMintTransactionBody {
        token: Some(token.into()),
        amount,
    })
}
