//! Immutable per-chain configuration injected at exchange construction.
//!
//! There is no ambient registry: everything the pipeline needs to know about
//! a chain (contract addresses, routing tokens, native/wrapped pair) is
//! carried by one [`ExchangeConfig`] value.

use alloy::primitives::{Address, B256};

use crate::constants::DEFAULT_POOL_INIT_CODE_HASH;
use crate::errors::{Result, SwapError};
use crate::fees::SecondaryFee;
use crate::tokens::Token;

/// Deployed contract addresses the pipeline reads from or targets.
#[derive(Debug, Clone)]
pub struct ExchangeContracts {
    /// Multicall aggregator used for all batched reads.
    pub multicall: Address,
    /// Uniswap-V3-style core factory; pool addresses derive from it.
    pub core_factory: Address,
    /// QuoterV2-style quoter used for swap simulation.
    pub quoter_v2: Address,
    /// Periphery swap router targeted when no secondary fees apply.
    pub swap_router: Address,
    /// Fee proxy mirroring the router functions, targeted when secondary
    /// fees are configured.
    pub secondary_fee: Address,
    /// Init code hash for CREATE2 pool-address derivation.
    pub pool_init_code_hash: B256,
}

/// Full configuration for one chain.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub chain_id: u64,
    pub contracts: ExchangeContracts,
    /// Intermediate tokens considered when enumerating multi-hop paths.
    pub routing_tokens: Vec<Token>,
    /// The chain's native coin.
    pub native_token: Token,
    /// ERC20 twin of the native coin, used for routing native legs.
    pub wrapped_native_token: Token,
    /// Platform fees applied to every swap, in basis points of the input.
    pub secondary_fees: Vec<SecondaryFee>,
}

impl ExchangeConfig {
    /// Validates the static parts of a configuration: a zero contract
    /// address or an out-of-range fee is a construction-time defect, not
    /// something to discover on the first swap.
    pub fn validated(self) -> Result<Self> {
        let contracts = [
            ("multicall", self.contracts.multicall),
            ("core factory", self.contracts.core_factory),
            ("quoter", self.contracts.quoter_v2),
            ("swap router", self.contracts.swap_router),
        ];
        for (label, address) in contracts {
            if address.is_zero() {
                return Err(SwapError::InvalidAddress(format!(
                    "{label} contract address must not be zero"
                )));
            }
        }
        crate::fees::validate_fees(&self.secondary_fees)?;
        if !self.native_token.is_native() {
            return Err(SwapError::TokenMismatch {
                expected: "native".into(),
                actual: self.native_token.describe(),
            });
        }
        if self.wrapped_native_token.is_native() {
            return Err(SwapError::TokenMismatch {
                expected: "erc20".into(),
                actual: self.wrapped_native_token.describe(),
            });
        }
        Ok(self)
    }
}

impl ExchangeContracts {
    /// Contracts with the canonical Uniswap V3 init code hash.
    pub fn new(
        multicall: Address,
        core_factory: Address,
        quoter_v2: Address,
        swap_router: Address,
        secondary_fee: Address,
    ) -> Self {
        Self {
            multicall,
            core_factory,
            quoter_v2,
            swap_router,
            secondary_fee,
            pool_init_code_hash: DEFAULT_POOL_INIT_CODE_HASH,
        }
    }
}
