//! Token and amount types shared across the pipeline.
//!
//! A token is either the chain's native coin or an ERC20 contract. Pool math
//! only ever sees ERC20 tokens; native legs are translated by the
//! [`native::NativeTokenAdapter`] before routing.

pub mod native;

use alloy::primitives::{Address, U256};
use serde::Serialize;

/// Trade type: which side of the swap is fixed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeType {
    /// The sell amount is fixed; maximize the buy amount.
    ExactInput,
    /// The buy amount is fixed; minimize the sell amount.
    ExactOutput,
}

/// A chain-scoped token: the native coin or an ERC20 contract.
///
/// Equality and hashing consider only `(chain_id, variant, address)`;
/// decimals and display metadata are carried for convenience but two
/// `Token` values describing the same on-chain asset always compare equal.
#[derive(Debug, Clone, Serialize)]
pub enum Token {
    Native {
        chain_id: u64,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    },
    Erc20 {
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    },
}

impl Token {
    pub fn native(chain_id: u64, decimals: u8) -> Self {
        Token::Native { chain_id, decimals, symbol: None, name: None }
    }

    pub fn erc20(chain_id: u64, address: Address, decimals: u8) -> Self {
        Token::Erc20 { chain_id, address, decimals, symbol: None, name: None }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Token::Native { chain_id, .. } | Token::Erc20 { chain_id, .. } => *chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Token::Native { decimals, .. } | Token::Erc20 { decimals, .. } => *decimals,
        }
    }

    /// Contract address for ERC20 tokens, `None` for the native coin.
    pub fn address(&self) -> Option<Address> {
        match self {
            Token::Native { .. } => None,
            Token::Erc20 { address, .. } => Some(*address),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Token::Native { .. })
    }

    /// Short human-readable tag used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Native { .. } => "native".to_string(),
            Token::Erc20 { address, .. } => format!("{address}"),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id() == other.chain_id() && self.address() == other.address()
    }
}

impl Eq for Token {}

impl std::hash::Hash for Token {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.chain_id().hash(state);
        self.address().hash(state);
    }
}

/// An integer amount of a token in its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenAmount {
    pub token: Token,
    pub value: U256,
}

impl TokenAmount {
    pub fn new(token: Token, value: U256) -> Self {
        Self { token, value }
    }

    pub fn zero(token: Token) -> Self {
        Self { token, value: U256::ZERO }
    }
}
