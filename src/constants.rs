//! Fixed protocol constants used across the pipeline.

use alloy::primitives::{B256, b256};

/// Fee tiers probed for every candidate token pair, in units of
/// hundredths of a basis point (0.01%, 0.05%, 0.3%, 1%).
pub const FEE_TIERS: [u32; 4] = [100, 500, 3000, 10_000];

/// Init code hash of the canonical Uniswap V3 pool contract, used as the
/// default for CREATE2 pool-address derivation.
pub const DEFAULT_POOL_INIT_CODE_HASH: B256 =
    b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

/// Basis-points denominator for secondary fees.
pub const BASIS_POINT_DENOMINATOR: u32 = 10_000;

/// Extra gas units charged when a swap is routed through the secondary-fee
/// proxy, reflecting the proxy's transfer overhead.
pub const SECONDARY_FEE_GAS_OVERHEAD: u64 = 50_000;

/// Gas units assumed for an ERC20 approval when estimating its fee.
pub const APPROVAL_GAS_UNITS: u64 = 60_000;

/// Bounds on the per-route hop count a caller may request.
pub const MIN_MAX_HOPS: u32 = 1;
pub const MAX_MAX_HOPS: u32 = 10;

/// Maximum accepted slippage tolerance, in percent.
pub const MAX_SLIPPAGE_PERCENT: u32 = 50;

/// Defaults applied by [`crate::exchange::SwapOptions`].
pub const DEFAULT_MAX_HOPS: u32 = 2;
pub const DEFAULT_DEADLINE_SECONDS: u64 = 900;

/// Sentinel literal accepted in place of an ERC20 address for the chain's
/// native coin.
pub const NATIVE_TOKEN_LITERAL: &str = "native";
