//! Best-effort gas-price and gas-fee estimation.
//!
//! Gas data never fails a swap: when nothing is obtainable the estimate is
//! simply absent.

use alloy::primitives::U256;
use tracing::debug;

use crate::constants::SECONDARY_FEE_GAS_OVERHEAD;
use crate::provider::BlockchainProvider;

/// Effective per-gas price for the next block, or `None` when no fee data
/// could be read.
///
/// EIP-1559 chains: `2 * baseFee + maxPriorityFee`. Chains without a base
/// fee fall back to the legacy gas price.
pub async fn fetch_gas_price(provider: &dyn BlockchainProvider) -> Option<U256> {
    let fee_data = provider.fee_data().await;
    match fee_data.base_fee_per_gas {
        Some(base_fee) => {
            let priority = fee_data.max_priority_fee_per_gas.unwrap_or(0);
            Some(U256::from(base_fee) * U256::from(2u8) + U256::from(priority))
        }
        None => {
            if fee_data.gas_price.is_none() {
                debug!("no gas fee data obtainable, omitting estimate");
            }
            fee_data.gas_price.map(U256::from)
        }
    }
}

/// Total fee for a transaction consuming `gas_units` at `gas_price`, with a
/// fixed surcharge covering the fee proxy's overhead when secondary fees
/// are routed.
pub fn calculate_gas_fee(gas_price: U256, gas_units: U256, has_secondary_fees: bool) -> U256 {
    let mut fee = gas_price * gas_units;
    if has_secondary_fees {
        fee += gas_price * U256::from(SECONDARY_FEE_GAS_OVERHEAD);
    }
    fee
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_scales_with_units() {
        let fee = calculate_gas_fee(U256::from(10u64), U256::from(100_000u64), false);
        assert_eq!(fee, U256::from(1_000_000u64));
    }

    #[test]
    fn secondary_fees_add_the_proxy_surcharge() {
        let plain = calculate_gas_fee(U256::from(10u64), U256::from(100_000u64), false);
        let with_fees = calculate_gas_fee(U256::from(10u64), U256::from(100_000u64), true);
        assert_eq!(
            with_fees - plain,
            U256::from(10u64) * U256::from(SECONDARY_FEE_GAS_OVERHEAD)
        );
    }
}
