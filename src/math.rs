//! Exact rational arithmetic for price and impact calculations.
//!
//! Financial quantities in the pipeline never touch floating point. Amounts
//! are `U256`; ratios that do not fit a fixed width (spot prices, price
//! impact) are arbitrary-precision [`Fraction`]s.

use alloy::primitives::U256;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Converts an alloy `U256` into an arbitrary-precision unsigned integer.
pub fn u256_to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}

/// Converts back to `U256`. Returns `None` when the value exceeds 256 bits.
pub fn biguint_to_u256(value: &BigUint) -> Option<U256> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    Some(U256::from_be_slice(&bytes))
}

/// A signed rational number in lowest terms. Denominator is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds a reduced fraction. Panics on a zero denominator, which is a
    /// programming error everywhere this type is used.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        assert!(!denominator.is_zero(), "fraction denominator must be nonzero");
        let (mut numerator, mut denominator) = (numerator, denominator);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let gcd = numerator.gcd(&denominator);
        if !gcd.is_zero() {
            numerator /= &gcd;
            denominator /= &gcd;
        }
        Self { numerator, denominator }
    }

    pub fn from_ratio(numerator: U256, denominator: U256) -> Self {
        Self::new(
            BigInt::from_biguint(Sign::Plus, u256_to_biguint(numerator)),
            BigInt::from_biguint(Sign::Plus, u256_to_biguint(denominator)),
        )
    }

    pub fn zero() -> Self {
        Self { numerator: BigInt::zero(), denominator: BigInt::from(1) }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn mul(&self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn sub(&self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn invert(&self) -> Fraction {
        assert!(!self.numerator.is_zero(), "cannot invert a zero fraction");
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Relative difference `(self - reference) / reference`.
    pub fn relative_difference(&self, reference: &Fraction) -> Fraction {
        self.sub(reference).mul(&reference.invert())
    }

    /// Renders the fraction as a decimal string with `dp` fractional digits,
    /// truncating toward zero.
    pub fn to_decimal_string(&self, dp: usize) -> String {
        let sign = if self.numerator.is_negative() { "-" } else { "" };
        let numerator = self.numerator.abs();
        let (integer, remainder) = numerator.div_rem(&self.denominator);
        if dp == 0 {
            return format!("{sign}{integer}");
        }
        let scale = BigInt::from(10u32).pow(dp as u32);
        let fractional = (remainder * scale) / &self.denominator;
        format!("{sign}{integer}.{fractional:0>dp$}", dp = dp)
    }
}

/// Floor of `value * numerator / denominator` without overflow.
pub fn mul_div_floor(value: U256, numerator: U256, denominator: U256) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let product = u256_to_biguint(value) * u256_to_biguint(numerator);
    biguint_to_u256(&(product / u256_to_biguint(denominator)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_reduces_to_lowest_terms() {
        let f = Fraction::from_ratio(U256::from(4u64), U256::from(8u64));
        assert_eq!(f, Fraction::from_ratio(U256::from(1u64), U256::from(2u64)));
    }

    #[test]
    fn relative_difference_signs() {
        let exec = Fraction::from_ratio(U256::from(99u64), U256::from(100u64));
        let mid = Fraction::from_ratio(U256::from(1u64), U256::from(1u64));
        let impact = exec.relative_difference(&mid);
        assert!(impact.is_negative());
        assert_eq!(impact.to_decimal_string(2), "-0.01");
    }

    #[test]
    fn decimal_rendering_truncates() {
        // 1/3 to five places, no rounding up.
        let f = Fraction::from_ratio(U256::from(1u64), U256::from(3u64));
        assert_eq!(f.to_decimal_string(5), "0.33333");
    }

    #[test]
    fn mul_div_floor_is_exact() {
        // floor(1e20 * 1000 / 1001)
        let value = U256::from(10u8).pow(U256::from(20u8));
        let out = mul_div_floor(value, U256::from(1000u64), U256::from(1001u64)).unwrap();
        assert_eq!(out.to_string(), "99900099900099900099");
    }

    #[test]
    fn biguint_round_trip() {
        let value = U256::MAX;
        assert_eq!(biguint_to_u256(&u256_to_biguint(value)), Some(value));
        let too_big = u256_to_biguint(value) + 1u32;
        assert_eq!(biguint_to_u256(&too_big), None);
    }
}
