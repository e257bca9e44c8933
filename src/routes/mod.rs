//! Route enumeration, quoting and selection.

pub mod path;
pub mod quote;
pub mod select;

use alloy::primitives::{Bytes, U256};

use crate::math::Fraction;
use crate::pools::Pool;
use crate::tokens::{Token, TokenAmount, TradeType};

/// An ordered pool sequence carrying a swap from `token_in` to `token_out`.
///
/// Invariants (upheld by the enumerator): no pool repeats, consecutive pools
/// share a token, the first pool contains `token_in` and the last contains
/// `token_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pools: Vec<Pool>,
    pub token_in: Token,
    pub token_out: Token,
}

impl Route {
    /// Tokens visited along the route, starting at `token_in`. Length is
    /// always `pools.len() + 1`.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = vec![&self.token_in];
        let mut current = &self.token_in;
        for pool in &self.pools {
            // Enumerator invariant: every pool involves the current token.
            let next = pool.other_token(current).unwrap_or(current);
            tokens.push(next);
            current = next;
        }
        tokens
    }

    /// Packed (token ‖ fee24 ‖ token ‖ …) path for the quoter and router.
    /// Exact-output paths are encoded from the output token backwards.
    pub fn encoded_path(&self, trade_type: TradeType) -> Bytes {
        let tokens = self.tokens();
        let mut legs: Vec<(&Token, u32, &Token)> = self
            .pools
            .iter()
            .enumerate()
            .map(|(i, pool)| (tokens[i], pool.fee, tokens[i + 1]))
            .collect();
        if trade_type == TradeType::ExactOutput {
            legs.reverse();
        }

        let mut out = Vec::with_capacity(tokens.len() * 20 + self.pools.len() * 3);
        for (i, (from, fee, to)) in legs.iter().enumerate() {
            let (first, second) = match trade_type {
                TradeType::ExactInput => (from, to),
                TradeType::ExactOutput => (to, from),
            };
            if i == 0 {
                out.extend_from_slice(first.address().unwrap_or_default().as_slice());
            }
            out.extend_from_slice(&fee.to_be_bytes()[1..]);
            out.extend_from_slice(second.address().unwrap_or_default().as_slice());
        }
        out.into()
    }
}

/// A successful simulated quote for one candidate route.
#[derive(Debug, Clone)]
pub struct QuoteResult {
    pub route: Route,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub trade_type: TradeType,
    pub gas_estimate: U256,
    /// Relative difference between execution price and the pools' mid
    /// price, as an exact rational (negative for adverse impact).
    pub price_impact: Fraction,
}
