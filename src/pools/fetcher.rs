//! Batched on-chain pool validation.
//!
//! Candidates arrive ordered; two multicall reads (`slot0`, `liquidity`) are
//! issued in that same order and joined. A candidate survives only when both
//! reads decode and neither price nor liquidity is zero.

use alloy::primitives::U256;
use alloy::sol_types::SolCall;
use tracing::debug;

use super::{Pool, PoolCandidate};
use crate::abi::IUniswapV3Pool;
use crate::errors::Result;
use crate::provider::{BlockchainProvider, ReadCall};

/// Fetches price and liquidity for every candidate and keeps the usable
/// pools, preserving candidate order.
///
/// Batch-level failure surfaces as [`crate::errors::SwapError::ProviderCall`];
/// per-candidate absence (undeployed pool, zero price, zero liquidity) is an
/// exclusion, not an error.
pub async fn fetch_valid_pools(
    provider: &dyn BlockchainProvider,
    candidates: &[PoolCandidate],
) -> Result<Vec<Pool>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let slot0_calls: Vec<ReadCall> = candidates
        .iter()
        .map(|c| ReadCall::new(c.address, IUniswapV3Pool::slot0Call {}.abi_encode()))
        .collect();
    let liquidity_calls: Vec<ReadCall> = candidates
        .iter()
        .map(|c| ReadCall::new(c.address, IUniswapV3Pool::liquidityCall {}.abi_encode()))
        .collect();

    let (slot0_results, liquidity_results) = futures::future::try_join(
        provider.try_batch(slot0_calls),
        provider.try_batch(liquidity_calls),
    )
    .await?;

    let mut pools = Vec::new();
    for ((candidate, slot0), liquidity) in
        candidates.iter().zip(slot0_results).zip(liquidity_results)
    {
        let (Some(slot0), Some(liquidity)) = (slot0, liquidity) else {
            // Empty return on either read: the pool is not deployed.
            continue;
        };
        let Ok(slot0) = IUniswapV3Pool::slot0Call::abi_decode_returns(&slot0) else {
            debug!(pool = %candidate.address, "undecodable slot0 result, skipping pool");
            continue;
        };
        let Ok(liquidity) = IUniswapV3Pool::liquidityCall::abi_decode_returns(&liquidity) else {
            debug!(pool = %candidate.address, "undecodable liquidity result, skipping pool");
            continue;
        };

        let sqrt_price_x96 = slot0.sqrtPriceX96.to::<U256>();
        if sqrt_price_x96.is_zero() || liquidity == 0 {
            // Deployed but unusable: nothing to trade against.
            continue;
        }

        pools.push(Pool {
            token0: candidate.token0.clone(),
            token1: candidate.token1.clone(),
            fee: candidate.fee,
            address: candidate.address,
            sqrt_price_x96,
            tick: slot0.tick.as_i32(),
            liquidity,
        });
    }
    Ok(pools)
}
