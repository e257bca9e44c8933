//! Native/wrapped token translation.
//!
//! Pool math is ERC20-only, so a native leg is wrapped 1:1 for routing and
//! unwrapped again at transaction-build time when the user asked for the
//! native coin back.

use super::{Token, TokenAmount};
use crate::errors::{Result, SwapError};

/// Translates between the native coin and its wrapped ERC20 twin.
#[derive(Debug, Clone)]
pub struct NativeTokenAdapter {
    native: Token,
    wrapped: Token,
}

impl NativeTokenAdapter {
    pub fn new(native: Token, wrapped: Token) -> Self {
        Self { native, wrapped }
    }

    pub fn native_token(&self) -> &Token {
        &self.native
    }

    pub fn wrapped_token(&self) -> &Token {
        &self.wrapped
    }

    /// Converts a native amount into the wrapped ERC20, 1:1 by value.
    pub fn wrap_amount(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if amount.token != self.native {
            return Err(SwapError::TokenMismatch {
                expected: self.native.describe(),
                actual: amount.token.describe(),
            });
        }
        Ok(TokenAmount::new(self.wrapped.clone(), amount.value))
    }

    /// Converts a wrapped amount back to the native coin, 1:1 by value.
    pub fn unwrap_amount(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if amount.token != self.wrapped {
            return Err(SwapError::TokenMismatch {
                expected: self.wrapped.describe(),
                actual: amount.token.describe(),
            });
        }
        Ok(TokenAmount::new(self.native.clone(), amount.value))
    }

    /// Returns the wrapped twin for the native coin, identity for ERC20s.
    pub fn maybe_wrap_token(&self, token: &Token) -> Token {
        if token.is_native() { self.wrapped.clone() } else { token.clone() }
    }

    /// Like [`maybe_wrap_token`](Self::maybe_wrap_token), for amounts.
    pub fn maybe_wrap_amount(&self, amount: &TokenAmount) -> TokenAmount {
        TokenAmount::new(self.maybe_wrap_token(&amount.token), amount.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, address};

    fn adapter() -> NativeTokenAdapter {
        let native = Token::native(13371, 18);
        let wrapped =
            Token::erc20(13371, address!("4200000000000000000000000000000000000006"), 18);
        NativeTokenAdapter::new(native, wrapped)
    }

    #[test]
    fn wrap_then_unwrap_round_trips() {
        let adapter = adapter();
        let amount = TokenAmount::new(adapter.native_token().clone(), U256::from(12345u64));
        let wrapped = adapter.wrap_amount(&amount).unwrap();
        assert_eq!(wrapped.token, *adapter.wrapped_token());
        assert_eq!(wrapped.value, amount.value);
        let back = adapter.unwrap_amount(&wrapped).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn unwrap_rejects_wrong_token() {
        let adapter = adapter();
        let other = TokenAmount::new(
            Token::erc20(13371, address!("1111111111111111111111111111111111111111"), 18),
            U256::from(1u64),
        );
        assert!(matches!(
            adapter.unwrap_amount(&other),
            Err(SwapError::TokenMismatch { .. })
        ));
    }

    #[test]
    fn maybe_wrap_is_identity_on_erc20() {
        let adapter = adapter();
        let erc20 = Token::erc20(13371, address!("2222222222222222222222222222222222222222"), 6);
        assert_eq!(adapter.maybe_wrap_token(&erc20), erc20);
        // And idempotent on the wrapped token itself.
        let wrapped = adapter.wrapped_token().clone();
        assert_eq!(adapter.maybe_wrap_token(&wrapped), wrapped);
    }

    #[test]
    fn maybe_wrap_converts_native() {
        let adapter = adapter();
        let amount = TokenAmount::new(adapter.native_token().clone(), U256::from(7u64));
        let wrapped = adapter.maybe_wrap_amount(&amount);
        assert_eq!(wrapped.token, *adapter.wrapped_token());
        assert_eq!(wrapped.value, U256::from(7u64));
    }
}
