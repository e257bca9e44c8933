//! Swap calldata construction.
//!
//! Four call shapes (single/multi-hop × plain/fee-proxied), optionally
//! followed by a native unwrap, all batched into one `multicall(deadline,
//! bytes[])` on the target contract.

use alloy::primitives::{Address, Bytes, U256,
    aliases::{U24, U160},
};
use alloy::sol_types::SolCall;

use super::TransactionDetails;
use super::gas::calculate_gas_fee;
use crate::abi::{
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams,
    ISecondaryFee, ISwapRouter, SecondaryFeeParams,
};
use crate::fees::SecondaryFee;
use crate::routes::Route;
use crate::slippage::Slippage;
use crate::tokens::TradeType;

/// Everything the builder needs to emit the unsigned swap transaction.
#[derive(Debug, Clone)]
pub struct SwapTxParams<'a> {
    pub route: &'a Route,
    pub trade_type: TradeType,
    /// Fee-inclusive input amount (the amount the user actually commits).
    pub amount_in: U256,
    pub amount_out: U256,
    pub secondary_fees: &'a [SecondaryFee],
    pub slippage: &'a Slippage,
    /// Unix-seconds deadline carried by the outer multicall.
    pub deadline: U256,
    pub from: Address,
    pub router: Address,
    pub secondary_fee_contract: Address,
    /// Whether the user's original (pre-wrap) input is the native coin.
    pub input_is_native: bool,
    /// Whether the user's requested output is the native coin.
    pub output_is_native: bool,
    pub gas_price: Option<U256>,
    /// Simulated swap gas units from the quoter.
    pub gas_units: U256,
}

/// Builds the unsigned swap transaction for an already-selected quote.
pub fn build_swap_transaction(params: &SwapTxParams<'_>) -> TransactionDetails {
    let has_fees = !params.secondary_fees.is_empty();
    let to = if has_fees { params.secondary_fee_contract } else { params.router };

    // Worst-case bounds: only the non-fixed side moves with slippage.
    let (amount_in_max, amount_out_min) = match params.trade_type {
        TradeType::ExactInput => (
            params.amount_in,
            params.slippage.apply(TradeType::ExactInput, params.amount_out),
        ),
        TradeType::ExactOutput => (
            params.slippage.apply(TradeType::ExactOutput, params.amount_in),
            params.amount_out,
        ),
    };

    // With a native output the swap must pay the contract itself so the
    // unwrap step can forward unwrapped coin to the user.
    let recipient = if params.output_is_native { to } else { params.from };

    let swap_call = encode_swap_call(params, recipient, amount_in_max, amount_out_min, has_fees);
    let mut calls: Vec<Bytes> = vec![swap_call];
    if params.output_is_native {
        calls.push(
            ISecondaryFee::unwrapNativeTokenCall { amountMinimum: amount_out_min }
                .abi_encode()
                .into(),
        );
    }

    let data = ISwapRouter::multicallCall { deadline: params.deadline, data: calls }.abi_encode();

    TransactionDetails {
        to,
        from: params.from,
        value: if params.input_is_native { amount_in_max } else { U256::ZERO },
        data: data.into(),
        gas_fee_estimate: params
            .gas_price
            .map(|price| calculate_gas_fee(price, params.gas_units, has_fees)),
    }
}

fn fee_params(fees: &[SecondaryFee]) -> Vec<SecondaryFeeParams> {
    fees.iter()
        .map(|fee| SecondaryFeeParams {
            recipient: fee.recipient,
            basisPoints: fee.basis_points as u16,
        })
        .collect()
}

fn encode_swap_call(
    params: &SwapTxParams<'_>,
    recipient: Address,
    amount_in_max: U256,
    amount_out_min: U256,
    has_fees: bool,
) -> Bytes {
    let single_pool = params.route.pools.len() == 1;
    let encoded: Vec<u8> = match (params.trade_type, single_pool) {
        (TradeType::ExactInput, true) => {
            let swap = ExactInputSingleParams {
                tokenIn: params.route.token_in.address().unwrap_or_default(),
                tokenOut: params.route.token_out.address().unwrap_or_default(),
                fee: U24::try_from(params.route.pools[0].fee).unwrap_or_default(),
                recipient,
                amountIn: params.amount_in,
                amountOutMinimum: amount_out_min,
                sqrtPriceLimitX96: U160::ZERO,
            };
            if has_fees {
                ISecondaryFee::exactInputSingleWithSecondaryFeeCall {
                    secondaryFees: fee_params(params.secondary_fees),
                    params: swap,
                }
                .abi_encode()
            } else {
                ISwapRouter::exactInputSingleCall { params: swap }.abi_encode()
            }
        }
        (TradeType::ExactOutput, true) => {
            let swap = ExactOutputSingleParams {
                tokenIn: params.route.token_in.address().unwrap_or_default(),
                tokenOut: params.route.token_out.address().unwrap_or_default(),
                fee: U24::try_from(params.route.pools[0].fee).unwrap_or_default(),
                recipient,
                amountOut: params.amount_out,
                amountInMaximum: amount_in_max,
                sqrtPriceLimitX96: U160::ZERO,
            };
            if has_fees {
                ISecondaryFee::exactOutputSingleWithSecondaryFeeCall {
                    secondaryFees: fee_params(params.secondary_fees),
                    params: swap,
                }
                .abi_encode()
            } else {
                ISwapRouter::exactOutputSingleCall { params: swap }.abi_encode()
            }
        }
        (TradeType::ExactInput, false) => {
            let swap = ExactInputParams {
                path: params.route.encoded_path(TradeType::ExactInput),
                recipient,
                amountIn: params.amount_in,
                amountOutMinimum: amount_out_min,
            };
            if has_fees {
                ISecondaryFee::exactInputWithSecondaryFeeCall {
                    secondaryFees: fee_params(params.secondary_fees),
                    params: swap,
                }
                .abi_encode()
            } else {
                ISwapRouter::exactInputCall { params: swap }.abi_encode()
            }
        }
        (TradeType::ExactOutput, false) => {
            let swap = ExactOutputParams {
                path: params.route.encoded_path(TradeType::ExactOutput),
                recipient,
                amountOut: params.amount_out,
                amountInMaximum: amount_in_max,
            };
            if has_fees {
                ISecondaryFee::exactOutputWithSecondaryFeeCall {
                    secondaryFees: fee_params(params.secondary_fees),
                    params: swap,
                }
                .abi_encode()
            } else {
                ISwapRouter::exactOutputCall { params: swap }.abi_encode()
            }
        }
    };
    encoded.into()
}
