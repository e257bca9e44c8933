//! Liquidity-pool discovery: candidate identities and validated pools.

pub mod address;
pub mod fetcher;
pub mod pairs;

use alloy::primitives::{Address, U256};

use crate::tokens::Token;

/// A pool identity derived off-chain: sorted token pair, fee tier and the
/// CREATE2 address they imply. Existence is not yet known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCandidate {
    /// Lower-addressed token of the pair.
    pub token0: Token,
    /// Higher-addressed token of the pair.
    pub token1: Token,
    /// Fee tier in hundredths of a basis point.
    pub fee: u32,
    pub address: Address,
}

/// A pool confirmed on-chain with nonzero price and liquidity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub token0: Token,
    pub token1: Token,
    pub fee: u32,
    pub address: Address,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub liquidity: u128,
}

impl Pool {
    pub fn involves(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// The pool's other token, or `None` when `token` is not in the pool.
    pub fn other_token(&self, token: &Token) -> Option<&Token> {
        if self.token0 == *token {
            Some(&self.token1)
        } else if self.token1 == *token {
            Some(&self.token0)
        } else {
            None
        }
    }
}
