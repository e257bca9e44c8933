//! The exchange orchestrator: validation, the discovery→quote→build
//! pipeline, and the public unsigned-transaction API.

use std::str::FromStr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use serde::Serialize;
use tracing::{debug, warn};

use crate::abi::{IERC20, ISecondaryFee};
use crate::config::ExchangeConfig;
use crate::constants::{
    DEFAULT_DEADLINE_SECONDS, DEFAULT_MAX_HOPS, FEE_TIERS, MAX_MAX_HOPS, MIN_MAX_HOPS,
    NATIVE_TOKEN_LITERAL,
};
use crate::errors::{Result, SwapError};
use crate::fees::{FeeBreakdown, SecondaryFee, SecondaryFees};
use crate::math::Fraction;
use crate::pools::fetcher::fetch_valid_pools;
use crate::pools::pairs::{expand_token_pairs, generate_pool_candidates};
use crate::provider::{BlockchainProvider, ReadCall};
use crate::routes::path::enumerate_routes;
use crate::routes::quote::fetch_quotes;
use crate::routes::select::select_best_quote;
use crate::slippage::Slippage;
use crate::tokens::native::NativeTokenAdapter;
use crate::tokens::{Token, TokenAmount, TradeType};
use crate::transaction::TransactionDetails;
use crate::transaction::approval::plan_approval;
use crate::transaction::gas::fetch_gas_price;
use crate::transaction::swap::{SwapTxParams, build_swap_transaction};

/// Per-call options with the documented defaults: 0.1% slippage, 2 hops,
/// a deadline 900 seconds out.
#[derive(Debug, Clone)]
pub struct SwapOptions {
    pub slippage: Slippage,
    pub max_hops: u32,
    pub deadline_seconds: u64,
}

impl Default for SwapOptions {
    fn default() -> Self {
        Self {
            slippage: Slippage::default(),
            max_hops: DEFAULT_MAX_HOPS,
            deadline_seconds: DEFAULT_DEADLINE_SECONDS,
        }
    }
}

/// The quote half of a swap response.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSummary {
    /// The quoted counter-amount: output for exact input, fee-inclusive
    /// input for exact output.
    pub amount: TokenAmount,
    /// Worst-case bound on `amount` under the slippage tolerance.
    pub amount_with_max_slippage: TokenAmount,
    /// Slippage tolerance as an exact decimal percent.
    pub slippage_percent: String,
    pub fees: Vec<FeeBreakdown>,
    /// Price impact versus the pools' mid price, as a decimal percent
    /// (negative for adverse impact).
    pub price_impact_percent: String,
}

/// Everything a caller needs to execute the swap: the quote, an approval
/// transaction when the allowance is short, and the unsigned swap itself.
#[derive(Debug, Clone, Serialize)]
pub struct SwapResponse {
    pub quote: QuoteSummary,
    pub approval: Option<TransactionDetails>,
    pub swap: TransactionDetails,
}

/// Swap-routing client bound to one chain configuration and provider.
///
/// Stateless across calls: every invocation rediscovers pools and quotes
/// fresh, and nothing is cached.
pub struct Exchange {
    config: ExchangeConfig,
    provider: Arc<dyn BlockchainProvider>,
    native_adapter: NativeTokenAdapter,
}

impl Exchange {
    pub fn new(config: ExchangeConfig, provider: Arc<dyn BlockchainProvider>) -> Result<Self> {
        let config = config.validated()?;
        let native_adapter = NativeTokenAdapter::new(
            config.native_token.clone(),
            config.wrapped_native_token.clone(),
        );
        Ok(Self { config, provider, native_adapter })
    }

    /// Quotes and builds an unsigned swap selling exactly `amount_in` of
    /// the input token.
    pub async fn get_unsigned_swap_tx_from_amount_in(
        &self,
        from_address: &str,
        token_in_literal: &str,
        token_out_literal: &str,
        amount_in: U256,
        options: SwapOptions,
    ) -> Result<SwapResponse> {
        self.swap(
            from_address,
            token_in_literal,
            token_out_literal,
            amount_in,
            TradeType::ExactInput,
            options,
        )
        .await
    }

    /// Quotes and builds an unsigned swap buying exactly `amount_out` of
    /// the output token.
    pub async fn get_unsigned_swap_tx_from_amount_out(
        &self,
        from_address: &str,
        token_in_literal: &str,
        token_out_literal: &str,
        amount_out: U256,
        options: SwapOptions,
    ) -> Result<SwapResponse> {
        self.swap(
            from_address,
            token_in_literal,
            token_out_literal,
            amount_out,
            TradeType::ExactOutput,
            options,
        )
        .await
    }

    async fn swap(
        &self,
        from_address: &str,
        token_in_literal: &str,
        token_out_literal: &str,
        amount: U256,
        trade_type: TradeType,
        options: SwapOptions,
    ) -> Result<SwapResponse> {
        // Fail fast on malformed input before any I/O.
        let (from, literal_in, literal_out) =
            validate_swap_inputs(from_address, token_in_literal, token_out_literal, &options)?;

        // Decimals, the paused flag and gas data are independent reads;
        // only pool discovery depends on the resolved tokens.
        let (resolved, secondary_fees, gas_price) = futures::join!(
            self.resolve_tokens(literal_in, literal_out),
            self.effective_secondary_fees(),
            fetch_gas_price(self.provider.as_ref()),
        );
        let (token_in, token_out) = resolved?;
        let wrapped_in = self.native_adapter.maybe_wrap_token(&token_in);
        let wrapped_out = self.native_adapter.maybe_wrap_token(&token_out);
        if wrapped_in == wrapped_out {
            return Err(SwapError::DuplicateAddresses);
        }

        let mut fee_engine =
            SecondaryFees::new(secondary_fees.clone(), wrapped_in.clone(), trade_type)?;

        // The amount actually simulated on-chain: for exact input the fees
        // come off the top first; for exact output the requested output is
        // quoted as-is and fees land on the resulting input.
        let request_amount = match trade_type {
            TradeType::ExactInput => {
                fee_engine.add_amount(&TokenAmount::new(wrapped_in.clone(), amount))?;
                fee_engine.amount_with_fees_applied()?.value
            }
            TradeType::ExactOutput => amount,
        };

        let pairs = expand_token_pairs(&wrapped_in, &wrapped_out, &self.config.routing_tokens);
        let candidates = generate_pool_candidates(
            &pairs,
            &FEE_TIERS,
            self.config.contracts.core_factory,
            self.config.contracts.pool_init_code_hash,
        );

        let pools = fetch_valid_pools(self.provider.as_ref(), &candidates).await?;

        let routes = enumerate_routes(&pools, &wrapped_in, &wrapped_out, options.max_hops);
        if routes.is_empty() {
            return Err(SwapError::NoRoutesAvailable);
        }
        debug!(
            candidates = candidates.len(),
            pools = pools.len(),
            routes = routes.len(),
            "enumerated candidate routes"
        );

        let quotes = fetch_quotes(
            self.provider.as_ref(),
            self.config.contracts.quoter_v2,
            routes,
            request_amount,
            trade_type,
        )
        .await?;
        let best = select_best_quote(quotes, trade_type)?;

        // Fee-inclusive input: what the user actually commits.
        let amount_in = match trade_type {
            TradeType::ExactInput => amount,
            TradeType::ExactOutput => {
                fee_engine.add_amount(&best.amount_in)?;
                fee_engine.amount_with_fees_applied()?.value
            }
        };
        let amount_out = best.amount_out.value;

        let deadline = U256::from(unix_now() + options.deadline_seconds);
        let swap_tx = build_swap_transaction(&SwapTxParams {
            route: &best.route,
            trade_type,
            amount_in,
            amount_out,
            secondary_fees: &secondary_fees,
            slippage: &options.slippage,
            deadline,
            from,
            router: self.config.contracts.swap_router,
            secondary_fee_contract: self.config.contracts.secondary_fee,
            input_is_native: token_in.is_native(),
            output_is_native: token_out.is_native(),
            gas_price,
            gas_units: best.gas_estimate,
        });

        let approval = if token_in.is_native() {
            None
        } else {
            let spender = if secondary_fees.is_empty() {
                self.config.contracts.swap_router
            } else {
                self.config.contracts.secondary_fee
            };
            // Exact output debits an unknown amount at execution time, so
            // the approval covers the worst case.
            let required = match trade_type {
                TradeType::ExactInput => amount_in,
                TradeType::ExactOutput => options.slippage.apply(TradeType::ExactOutput, amount_in),
            };
            plan_approval(self.provider.as_ref(), &token_in, from, spender, required, gas_price)
                .await?
        };

        let quote = self.summarize_quote(
            &token_in,
            &token_out,
            amount_in,
            amount_out,
            trade_type,
            &options.slippage,
            &fee_engine,
            &best.price_impact,
        )?;

        Ok(SwapResponse { quote, approval, swap: swap_tx })
    }

    #[allow(clippy::too_many_arguments)]
    fn summarize_quote(
        &self,
        token_in: &Token,
        token_out: &Token,
        amount_in: U256,
        amount_out: U256,
        trade_type: TradeType,
        slippage: &Slippage,
        fee_engine: &SecondaryFees,
        price_impact: &Fraction,
    ) -> Result<QuoteSummary> {
        let (quoted_token, quoted_value) = match trade_type {
            TradeType::ExactInput => (token_out, amount_out),
            TradeType::ExactOutput => (token_in, amount_in),
        };
        let bounded = slippage.apply(trade_type, quoted_value);
        let percent_100 = Fraction::from_ratio(U256::from(100u8), U256::from(1u8));
        Ok(QuoteSummary {
            amount: TokenAmount::new(quoted_token.clone(), quoted_value),
            amount_with_max_slippage: TokenAmount::new(quoted_token.clone(), bounded),
            slippage_percent: slippage.percent_string(4),
            fees: fee_engine.with_amounts()?,
            price_impact_percent: price_impact.mul(&percent_100).to_decimal_string(4),
        })
    }

    /// Resolves token literals into full tokens, fetching ERC20 decimals
    /// in one strict batch. Decimals are mandatory: a failed read fails
    /// the call.
    async fn resolve_tokens(
        &self,
        literal_in: TokenLiteral,
        literal_out: TokenLiteral,
    ) -> Result<(Token, Token)> {
        let mut calls = Vec::new();
        for literal in [&literal_in, &literal_out] {
            if let TokenLiteral::Erc20(address) = literal {
                calls.push(ReadCall::new(*address, IERC20::decimalsCall {}.abi_encode()));
            }
        }
        let mut results = if calls.is_empty() {
            Vec::new()
        } else {
            self.provider.batch(calls).await?
        }
        .into_iter();

        let mut resolve = |literal: TokenLiteral| -> Result<Token> {
            match literal {
                TokenLiteral::Native => Ok(self.config.native_token.clone()),
                TokenLiteral::Erc20(address) => {
                    let raw = results.next().ok_or_else(|| {
                        SwapError::ProviderCall("missing decimals result".into())
                    })?;
                    let decimals = IERC20::decimalsCall::abi_decode_returns(&raw)
                        .map_err(|e| {
                            SwapError::ProviderCall(format!("failed to decode decimals: {e}"))
                        })?;
                    Ok(Token::erc20(self.config.chain_id, address, decimals))
                }
            }
        };
        Ok((resolve(literal_in)?, resolve(literal_out)?))
    }

    /// Secondary fees for this call: the configured fees, unless the fee
    /// proxy reports itself paused, in which case the swap falls back to
    /// the plain router with no fees.
    async fn effective_secondary_fees(&self) -> Vec<SecondaryFee> {
        if self.config.secondary_fees.is_empty() {
            return Vec::new();
        }
        let call = ReadCall::new(
            self.config.contracts.secondary_fee,
            ISecondaryFee::pausedCall {}.abi_encode(),
        );
        match self.provider.call(call).await {
            Ok(raw) => match ISecondaryFee::pausedCall::abi_decode_returns(&raw) {
                Ok(true) => {
                    warn!("secondary fee contract is paused, swapping without fees");
                    Vec::new()
                }
                Ok(false) => self.config.secondary_fees.clone(),
                Err(e) => {
                    warn!(error = %e, "undecodable paused flag, keeping configured fees");
                    self.config.secondary_fees.clone()
                }
            },
            Err(e) => {
                warn!(error = %e, "paused flag unavailable, keeping configured fees");
                self.config.secondary_fees.clone()
            }
        }
    }
}

/// A parsed token literal: the native sentinel or an ERC20 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenLiteral {
    Native,
    Erc20(Address),
}

fn parse_address(literal: &str) -> Result<Address> {
    let address = Address::from_str(literal)
        .map_err(|_| SwapError::InvalidAddress(literal.to_string()))?;
    if address.is_zero() {
        return Err(SwapError::InvalidAddress(literal.to_string()));
    }
    Ok(address)
}

fn parse_token_literal(literal: &str) -> Result<TokenLiteral> {
    if literal.eq_ignore_ascii_case(NATIVE_TOKEN_LITERAL) {
        return Ok(TokenLiteral::Native);
    }
    parse_address(literal).map(TokenLiteral::Erc20)
}

/// Validates all user input up front, with zero I/O. Slippage range is
/// enforced by [`Slippage`] construction.
fn validate_swap_inputs(
    from_address: &str,
    token_in_literal: &str,
    token_out_literal: &str,
    options: &SwapOptions,
) -> Result<(Address, TokenLiteral, TokenLiteral)> {
    let from = parse_address(from_address)?;
    let token_in = parse_token_literal(token_in_literal)?;
    let token_out = parse_token_literal(token_out_literal)?;
    if token_in == token_out {
        return Err(SwapError::DuplicateAddresses);
    }
    if !(MIN_MAX_HOPS..=MAX_MAX_HOPS).contains(&options.max_hops) {
        return Err(SwapError::InvalidMaxHops {
            value: options.max_hops,
            min: MIN_MAX_HOPS,
            max: MAX_MAX_HOPS,
        });
    }
    Ok((from, token_in, token_out))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
