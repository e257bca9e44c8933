//! Secondary (platform) fee accrual.
//!
//! Fees are taken on the swap's input token. For exact-input trades the fee
//! comes out of the amount the user already committed; for exact-output
//! trades the quoted input is grossed up so the net after fees still covers
//! the swap. All arithmetic is integer floor division.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::constants::BASIS_POINT_DENOMINATOR;
use crate::errors::{Result, SwapError};
use crate::math::mul_div_floor;
use crate::tokens::{Token, TokenAmount, TradeType};

/// One platform fee: recipient and size in basis points of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryFee {
    pub recipient: Address,
    pub basis_points: u32,
}

/// A computed fee entry, produced by [`SecondaryFees::with_amounts`].
#[derive(Debug, Clone, Serialize)]
pub struct FeeBreakdown {
    pub recipient: Address,
    pub basis_points: u32,
    pub amount: TokenAmount,
}

/// Rejects unusable fee configurations up front: a single fee above 100%
/// or a total at or above 100% would make the exact-output gross-up
/// divide by zero or go negative.
pub fn validate_fees(fees: &[SecondaryFee]) -> Result<()> {
    let mut total: u64 = 0;
    for fee in fees {
        if fee.basis_points > BASIS_POINT_DENOMINATOR {
            return Err(SwapError::InvalidSecondaryFee(format!(
                "fee of {} basis points exceeds 100%",
                fee.basis_points
            )));
        }
        total += u64::from(fee.basis_points);
    }
    if total >= u64::from(BASIS_POINT_DENOMINATOR) && !fees.is_empty() {
        return Err(SwapError::InvalidSecondaryFee(format!(
            "total of {total} basis points must be below 100%"
        )));
    }
    Ok(())
}

/// Fee engine bound to a reference token and trade type.
#[derive(Debug, Clone)]
pub struct SecondaryFees {
    fees: Vec<SecondaryFee>,
    reference_token: Token,
    trade_type: TradeType,
    base: U256,
}

impl SecondaryFees {
    pub fn new(fees: Vec<SecondaryFee>, reference_token: Token, trade_type: TradeType) -> Result<Self> {
        validate_fees(&fees)?;
        Ok(Self { fees, reference_token, trade_type, base: U256::ZERO })
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    pub fn fees(&self) -> &[SecondaryFee] {
        &self.fees
    }

    pub fn total_basis_points(&self) -> u32 {
        self.fees.iter().map(|f| f.basis_points).sum()
    }

    /// Stores the fee base. The amount must be denominated in the engine's
    /// reference token.
    pub fn add_amount(&mut self, amount: &TokenAmount) -> Result<()> {
        if amount.token != self.reference_token {
            return Err(SwapError::TokenMismatch {
                expected: self.reference_token.describe(),
                actual: amount.token.describe(),
            });
        }
        self.base = amount.value;
        Ok(())
    }

    /// Per-fee amounts against the stored base.
    ///
    /// Exact input: `floor(base * bps / 10000)`. Exact output:
    /// `floor(base * bps / (10000 - total_bps))`, the gross-up that makes
    /// the post-fee net equal the base.
    pub fn with_amounts(&self) -> Result<Vec<FeeBreakdown>> {
        let denominator = match self.trade_type {
            TradeType::ExactInput => U256::from(BASIS_POINT_DENOMINATOR),
            TradeType::ExactOutput => {
                let total = self.total_basis_points();
                if total >= BASIS_POINT_DENOMINATOR {
                    return Err(SwapError::InvalidSecondaryFee(format!(
                        "total of {total} basis points must be below 100%"
                    )));
                }
                U256::from(BASIS_POINT_DENOMINATOR - total)
            }
        };
        self.fees
            .iter()
            .map(|fee| {
                let amount =
                    mul_div_floor(self.base, U256::from(fee.basis_points), denominator)
                        .ok_or_else(|| {
                            SwapError::InvalidSecondaryFee("fee amount overflow".into())
                        })?;
                Ok(FeeBreakdown {
                    recipient: fee.recipient,
                    basis_points: fee.basis_points,
                    amount: TokenAmount::new(self.reference_token.clone(), amount),
                })
            })
            .collect()
    }

    /// The base adjusted for fees: reduced for exact input (fees come out
    /// of it), increased for exact output (fees come on top of it).
    pub fn amount_with_fees_applied(&self) -> Result<TokenAmount> {
        let total: U256 = self
            .with_amounts()?
            .iter()
            .fold(U256::ZERO, |acc, fee| acc + fee.amount.value);
        let value = match self.trade_type {
            TradeType::ExactInput => self.base.saturating_sub(total),
            TradeType::ExactOutput => self.base + total,
        };
        Ok(TokenAmount::new(self.reference_token.clone(), value))
    }
}
