//! Slippage tolerance as an exact rational.
//!
//! The tolerance is constructed by decimal-shifting a percent literal,
//! never by float division, so many-decimal inputs keep full precision all
//! the way into the worst-case bound arithmetic.

use alloy::primitives::U256;

use crate::constants::MAX_SLIPPAGE_PERCENT;
use crate::errors::{Result, SwapError};
use crate::math::{Fraction, mul_div_floor};
use crate::tokens::TradeType;

/// A slippage tolerance, stored as the exact fraction `numerator /
/// denominator` of the quoted amount (0.1% is 1/1000).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slippage {
    numerator: U256,
    denominator: U256,
}

impl Slippage {
    /// Parses a decimal percent literal, e.g. `"0.1"` for 0.1%.
    ///
    /// The literal is shifted into an integer ratio digit by digit; a
    /// malformed literal or one outside 0..=50 percent is
    /// [`SwapError::InvalidSlippage`].
    pub fn from_percent_str(literal: &str) -> Result<Self> {
        let invalid = || SwapError::InvalidSlippage(literal.to_string());
        let (integer, fraction) = match literal.split_once('.') {
            Some((i, f)) => (i, f),
            None => (literal, ""),
        };
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits =
            |s: &str| !s.chars().any(|c| !c.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        // percent = digits / 10^len(fraction); tolerance = percent / 100.
        let digits = format!("{integer}{fraction}");
        let trimmed = digits.trim_start_matches('0');
        let numerator = if trimmed.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(trimmed, 10).map_err(|_| invalid())?
        };
        let shift = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let denominator = U256::from(100u32)
            .checked_mul(U256::from(10u32).pow(U256::from(shift)))
            .ok_or_else(invalid)?;
        Self::from_ratio(numerator, denominator).map_err(|_| invalid())
    }

    /// Builds a tolerance from basis points (10 bps = 0.1%).
    pub fn from_basis_points(basis_points: u32) -> Result<Self> {
        Self::from_ratio(U256::from(basis_points), U256::from(10_000u32))
    }

    fn from_ratio(numerator: U256, denominator: U256) -> Result<Self> {
        // numerator/denominator <= 50% <=> 2 * numerator <= denominator.
        match numerator.checked_mul(U256::from(2u8)) {
            Some(doubled) if doubled <= denominator => Ok(Self { numerator, denominator }),
            _ => Err(SwapError::InvalidSlippage(format!(
                "slippage must be between 0 and {MAX_SLIPPAGE_PERCENT} percent"
            ))),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// The tolerance as a percent, rendered exactly with `dp` decimals.
    pub fn percent_string(&self, dp: usize) -> String {
        Fraction::from_ratio(self.numerator * U256::from(100u8), self.denominator)
            .to_decimal_string(dp)
    }

    /// Worst-case bound for a quoted amount.
    ///
    /// Exact input: minimum acceptable output, `amount / (1 + s)` with a
    /// floor-truncated quotient. Exact output: maximum acceptable input,
    /// `amount * (1 + s)`, same truncation.
    pub fn apply(&self, trade_type: TradeType, amount: U256) -> U256 {
        let expanded = self.denominator + self.numerator;
        let result = match trade_type {
            TradeType::ExactInput => mul_div_floor(amount, self.denominator, expanded),
            TradeType::ExactOutput => mul_div_floor(amount, expanded, self.denominator),
        };
        // Denominators are nonzero by construction; overflow above U256 is
        // impossible for exact input and pathological for exact output.
        result.unwrap_or(U256::MAX)
    }
}

impl Default for Slippage {
    /// 0.1%.
    fn default() -> Self {
        Self { numerator: U256::from(1u8), denominator: U256::from(1000u32) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e18(value: u64) -> U256 {
        U256::from(value) * U256::from(10u8).pow(U256::from(18u8))
    }

    #[test]
    fn exact_input_eighteen_decimal_vector() {
        // 100 tokens at 0.1%: 100e18 * 1000/1001.
        let slippage = Slippage::from_percent_str("0.1").unwrap();
        let out = slippage.apply(TradeType::ExactInput, e18(100));
        assert_eq!(out.to_string(), "99900099900099900099");
    }

    #[test]
    fn exact_output_expands() {
        let slippage = Slippage::from_percent_str("0.1").unwrap();
        let max_in = slippage.apply(TradeType::ExactOutput, U256::from(10_000u64));
        assert_eq!(max_in, U256::from(10_010u64));
    }

    #[test]
    fn many_decimal_literals_keep_precision() {
        // 0.05% == 5 bps exactly.
        assert_eq!(
            Slippage::from_percent_str("0.05").unwrap().apply(
                TradeType::ExactOutput,
                U256::from(1_000_000u64)
            ),
            Slippage::from_basis_points(5).unwrap().apply(
                TradeType::ExactOutput,
                U256::from(1_000_000u64)
            ),
        );
        // A long literal survives without float rounding.
        let fine = Slippage::from_percent_str("0.123456789").unwrap();
        assert_eq!(fine.percent_string(9), "0.123456789");
    }

    #[test]
    fn zero_slippage_is_identity() {
        let slippage = Slippage::from_percent_str("0").unwrap();
        assert!(slippage.is_zero());
        assert_eq!(slippage.apply(TradeType::ExactInput, e18(1)), e18(1));
        assert_eq!(slippage.apply(TradeType::ExactOutput, e18(1)), e18(1));
    }

    #[test]
    fn bounds_and_garbage_rejected() {
        assert!(Slippage::from_percent_str("50").is_ok());
        assert!(matches!(
            Slippage::from_percent_str("50.000001"),
            Err(SwapError::InvalidSlippage(_))
        ));
        for bad in ["", ".", "-1", "1e3", "five", "1.2.3"] {
            assert!(Slippage::from_percent_str(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn overlong_literals_are_rejected_not_zeroed() {
        // A digit string wider than 256 bits must fail, never collapse to 0%.
        let huge = "9".repeat(78);
        assert!(matches!(
            Slippage::from_percent_str(&huge),
            Err(SwapError::InvalidSlippage(_))
        ));
        // Leading zeros alone are still a valid zero tolerance.
        assert!(Slippage::from_percent_str("000.0").unwrap().is_zero());
    }

    #[test]
    fn percent_string_round_trips() {
        assert_eq!(Slippage::default().percent_string(1), "0.1");
    }
}
