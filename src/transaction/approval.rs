//! ERC20 allowance checks and approval transactions.
//!
//! Only an ERC20 input ever needs approval; the orchestrator never calls
//! this for a native spend. An emitted approval always sets the full
//! required amount: allowances are overwritten, never topped up.

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use super::TransactionDetails;
use super::gas::calculate_gas_fee;
use crate::abi::IERC20;
use crate::constants::APPROVAL_GAS_UNITS;
use crate::errors::{Result, SwapError};
use crate::provider::{BlockchainProvider, ReadCall};
use crate::tokens::Token;

/// Checks the current allowance and plans an approval transaction when the
/// spender is not yet allowed to pull `required` from `owner`.
///
/// Returns `None` when the existing allowance already covers the spend.
pub async fn plan_approval(
    provider: &dyn BlockchainProvider,
    token: &Token,
    owner: Address,
    spender: Address,
    required: U256,
    gas_price: Option<U256>,
) -> Result<Option<TransactionDetails>> {
    let Some(token_address) = token.address() else {
        // Native spends carry value directly; nothing to approve.
        return Ok(None);
    };
    if owner == spender {
        return Err(SwapError::Approve(
            "owner and spender must not be the same address".into(),
        ));
    }

    let calldata = IERC20::allowanceCall { owner, spender }.abi_encode();
    let raw = provider
        .call(ReadCall::new(token_address, calldata))
        .await
        .map_err(|e| SwapError::Approve(format!("failed to read allowance: {e}")))?;
    let allowance = IERC20::allowanceCall::abi_decode_returns(&raw)
        .map_err(|e| SwapError::Approve(format!("failed to decode allowance: {e}")))?;

    if allowance >= required {
        return Ok(None);
    }

    Ok(Some(TransactionDetails {
        to: token_address,
        from: owner,
        value: U256::ZERO,
        data: IERC20::approveCall { spender, amount: required }.abi_encode().into(),
        gas_fee_estimate: gas_price
            .map(|price| calculate_gas_fee(price, U256::from(APPROVAL_GAS_UNITS), false)),
    }))
}
