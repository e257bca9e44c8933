//! Deterministic pool-address derivation.
//!
//! A Uniswap-V3-style pool lives at a CREATE2 address that is a pure
//! function of (factory, sorted token pair, fee tier, init code hash): no
//! I/O is ever needed to know where a pool would be deployed.

use alloy::primitives::{Address, B256, U256, keccak256};
use alloy::sol_types::SolValue;

/// Sorts a token pair ascending by address bytes. Hex case never matters
/// because the comparison is on the raw bytes.
pub fn sort_token_pair(a: Address, b: Address) -> (Address, Address) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Computes the CREATE2 pool address for a token pair and fee tier.
///
/// The pair is sorted internally, so callers may pass it in either order
/// and always get the identical address.
pub fn compute_pool_address(
    factory: Address,
    pair: (Address, Address),
    fee: u32,
    init_code_hash: B256,
) -> Address {
    let (token0, token1) = sort_token_pair(pair.0, pair.1);
    let salt = keccak256((token0, token1, U256::from(fee)).abi_encode());

    let mut preimage = Vec::with_capacity(1 + 20 + 32 + 32);
    preimage.push(0xff);
    preimage.extend_from_slice(factory.as_slice());
    preimage.extend_from_slice(salt.as_slice());
    preimage.extend_from_slice(init_code_hash.as_slice());
    Address::from_slice(&keccak256(preimage)[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_POOL_INIT_CODE_HASH;
    use alloy::primitives::address;

    const FACTORY: Address = address!("0f85e0929eb510de3dbccfbc966ebc286fcaf726");

    #[test]
    fn pair_order_is_irrelevant() {
        let a = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        let b = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        for fee in [100u32, 500, 3000, 10_000] {
            assert_eq!(
                compute_pool_address(FACTORY, (a, b), fee, DEFAULT_POOL_INIT_CODE_HASH),
                compute_pool_address(FACTORY, (b, a), fee, DEFAULT_POOL_INIT_CODE_HASH),
            );
        }
    }

    #[test]
    fn distinct_fees_give_distinct_addresses() {
        let a = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        let b = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        let p1 = compute_pool_address(FACTORY, (a, b), 500, DEFAULT_POOL_INIT_CODE_HASH);
        let p2 = compute_pool_address(FACTORY, (a, b), 3000, DEFAULT_POOL_INIT_CODE_HASH);
        assert_ne!(p1, p2);
    }

    #[test]
    fn matches_canonical_mainnet_pool() {
        // USDC/WETH 0.05% on the canonical Uniswap V3 factory.
        let factory = address!("1F98431c8aD98523631AE4a59f267346ea31F984");
        let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        let weth = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        let pool = compute_pool_address(factory, (weth, usdc), 500, DEFAULT_POOL_INIT_CODE_HASH);
        assert_eq!(pool, address!("88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"));
    }

    #[test]
    fn sort_is_by_byte_order() {
        let lo = address!("0000000000000000000000000000000000000001");
        let hi = address!("ff00000000000000000000000000000000000000");
        assert_eq!(sort_token_pair(hi, lo), (lo, hi));
        assert_eq!(sort_token_pair(lo, hi), (lo, hi));
    }
}
