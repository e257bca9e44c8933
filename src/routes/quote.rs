//! Batched quote simulation.
//!
//! Every candidate route is quoted in one multicall with per-call failure
//! allowed. A revert, empty return or decode failure drops that one route
//! and never aborts its siblings; only a batch-level transport failure is an
//! error here.

use alloy::primitives::{Address, U256,
    aliases::{U24, U160},
};
use alloy::sol_types::SolCall;
use num_bigint::BigInt;
use tracing::debug;

use super::{QuoteResult, Route};
use crate::abi::IQuoterV2;
use crate::errors::Result;
use crate::math::{Fraction, u256_to_biguint};
use crate::provider::{BlockchainProvider, ReadCall};
use crate::tokens::{TokenAmount, TradeType};

/// Spot price of the route's output token in units of its input token,
/// chained across every pool as an exact rational.
///
/// sqrtPriceX96 squared exceeds 256 bits for high price ratios, so the
/// product is taken in arbitrary precision.
pub fn route_mid_price(route: &Route) -> Fraction {
    let tokens = route.tokens();
    let mut price = Fraction::from_ratio(U256::from(1u8), U256::from(1u8));
    for (i, pool) in route.pools.iter().enumerate() {
        let sqrt_price = u256_to_biguint(pool.sqrt_price_x96);
        let ratio = Fraction::new(
            BigInt::from(&sqrt_price * &sqrt_price),
            BigInt::from(1u8) << 192,
        );
        // sqrtPriceX96 squared is token1 per token0; orient per hop.
        let hop_price = if *tokens[i] == pool.token0 { ratio } else { ratio.invert() };
        price = price.mul(&hop_price);
    }
    price
}

fn quote_calldata(route: &Route, amount: U256, trade_type: TradeType) -> Vec<u8> {
    if let [pool] = route.pools.as_slice() {
        let token_in = route.token_in.address().unwrap_or_default();
        let token_out = route.token_out.address().unwrap_or_default();
        let fee = U24::try_from(pool.fee).unwrap_or_default();
        return match trade_type {
            TradeType::ExactInput => IQuoterV2::quoteExactInputSingleCall {
                params: IQuoterV2::QuoteExactInputSingleParams {
                    tokenIn: token_in,
                    tokenOut: token_out,
                    amountIn: amount,
                    fee,
                    sqrtPriceLimitX96: U160::ZERO,
                },
            }
            .abi_encode(),
            TradeType::ExactOutput => IQuoterV2::quoteExactOutputSingleCall {
                params: IQuoterV2::QuoteExactOutputSingleParams {
                    tokenIn: token_in,
                    tokenOut: token_out,
                    amount,
                    fee,
                    sqrtPriceLimitX96: U160::ZERO,
                },
            }
            .abi_encode(),
        };
    }

    let path = route.encoded_path(trade_type);
    match trade_type {
        TradeType::ExactInput => {
            IQuoterV2::quoteExactInputCall { path, amountIn: amount }.abi_encode()
        }
        TradeType::ExactOutput => {
            IQuoterV2::quoteExactOutputCall { path, amountOut: amount }.abi_encode()
        }
    }
}

/// Simulates `amount` over every route, returning a quote per route whose
/// simulation succeeded and decoded. May legitimately return fewer quotes
/// than routes, including none.
pub async fn fetch_quotes(
    provider: &dyn BlockchainProvider,
    quoter: Address,
    routes: Vec<Route>,
    amount: U256,
    trade_type: TradeType,
) -> Result<Vec<QuoteResult>> {
    if routes.is_empty() {
        return Ok(Vec::new());
    }

    let calls: Vec<ReadCall> = routes
        .iter()
        .map(|route| ReadCall::new(quoter, quote_calldata(route, amount, trade_type)))
        .collect();
    let results = provider.try_batch(calls).await?;

    let mut quotes = Vec::new();
    for (route, result) in routes.into_iter().zip(results) {
        let Some(raw) = result else {
            debug!(hops = route.pools.len(), "quote simulation reverted, dropping route");
            continue;
        };
        let Some((amount_in, amount_out, gas_estimate)) =
            decode_quote(&route, &raw, amount, trade_type)
        else {
            debug!(hops = route.pools.len(), "undecodable quote result, dropping route");
            continue;
        };
        if amount_in.is_zero() || amount_out.is_zero() {
            debug!(hops = route.pools.len(), "zero-amount quote, dropping route");
            continue;
        }

        let execution_price = Fraction::from_ratio(amount_out, amount_in);
        let price_impact = execution_price.relative_difference(&route_mid_price(&route));
        quotes.push(QuoteResult {
            amount_in: TokenAmount::new(route.token_in.clone(), amount_in),
            amount_out: TokenAmount::new(route.token_out.clone(), amount_out),
            trade_type,
            gas_estimate,
            price_impact,
            route,
        });
    }
    Ok(quotes)
}

fn decode_quote(
    route: &Route,
    raw: &[u8],
    amount: U256,
    trade_type: TradeType,
) -> Option<(U256, U256, U256)> {
    let single = route.pools.len() == 1;
    match (trade_type, single) {
        (TradeType::ExactInput, true) => {
            let ret = IQuoterV2::quoteExactInputSingleCall::abi_decode_returns(raw).ok()?;
            Some((amount, ret.amountOut, ret.gasEstimate))
        }
        (TradeType::ExactInput, false) => {
            let ret = IQuoterV2::quoteExactInputCall::abi_decode_returns(raw).ok()?;
            Some((amount, ret.amountOut, ret.gasEstimate))
        }
        (TradeType::ExactOutput, true) => {
            let ret = IQuoterV2::quoteExactOutputSingleCall::abi_decode_returns(raw).ok()?;
            Some((ret.amountIn, amount, ret.gasEstimate))
        }
        (TradeType::ExactOutput, false) => {
            let ret = IQuoterV2::quoteExactOutputCall::abi_decode_returns(raw).ok()?;
            Some((ret.amountIn, amount, ret.gasEstimate))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::Pool;
    use crate::tokens::Token;
    use alloy::primitives::Address;

    fn token(byte: u8) -> Token {
        Token::erc20(1, Address::repeat_byte(byte), 18)
    }

    #[test]
    fn mid_price_at_parity_is_one() {
        let pool = Pool {
            token0: token(1),
            token1: token(2),
            fee: 3000,
            address: Address::repeat_byte(3),
            sqrt_price_x96: U256::from(1u8) << 96,
            tick: 0,
            liquidity: 1,
        };
        let route = Route { pools: vec![pool], token_in: token(1), token_out: token(2) };
        let mid = route_mid_price(&route);
        assert_eq!(mid, Fraction::from_ratio(U256::from(1u8), U256::from(1u8)));
    }

    #[test]
    fn mid_price_inverts_against_the_pair_order() {
        // sqrtP = 2 * 2^96 => token1/token0 price of 4.
        let pool = Pool {
            token0: token(1),
            token1: token(2),
            fee: 3000,
            address: Address::repeat_byte(3),
            sqrt_price_x96: U256::from(2u8) << 96,
            tick: 0,
            liquidity: 1,
        };
        let forward = Route {
            pools: vec![pool.clone()],
            token_in: token(1),
            token_out: token(2),
        };
        let backward = Route { pools: vec![pool], token_in: token(2), token_out: token(1) };
        assert_eq!(
            route_mid_price(&forward),
            Fraction::from_ratio(U256::from(4u8), U256::from(1u8))
        );
        assert_eq!(
            route_mid_price(&backward),
            Fraction::from_ratio(U256::from(1u8), U256::from(4u8))
        );
    }
}
