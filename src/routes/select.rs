//! Best-quote selection.

use super::QuoteResult;
use crate::errors::{Result, SwapError};
use crate::tokens::TradeType;

/// Picks the economically best quote: maximum output for exact input,
/// minimum input for exact output. Ties keep the first-encountered quote.
///
/// Zero quotes is [`SwapError::NoRoutesAvailable`], whether no candidate
/// routes existed or every simulation failed.
pub fn select_best_quote(quotes: Vec<QuoteResult>, trade_type: TradeType) -> Result<QuoteResult> {
    let mut best: Option<QuoteResult> = None;
    for quote in quotes {
        let better = match &best {
            None => true,
            Some(current) => match trade_type {
                TradeType::ExactInput => quote.amount_out.value > current.amount_out.value,
                TradeType::ExactOutput => quote.amount_in.value < current.amount_in.value,
            },
        };
        if better {
            best = Some(quote);
        }
    }
    best.ok_or(SwapError::NoRoutesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Fraction;
    use crate::pools::Pool;
    use crate::routes::Route;
    use crate::tokens::{Token, TokenAmount};
    use alloy::primitives::{Address, U256};

    fn token(byte: u8) -> Token {
        Token::erc20(1, Address::repeat_byte(byte), 18)
    }

    fn quote(label: u8, amount_in: u64, amount_out: u64, trade_type: TradeType) -> QuoteResult {
        let pool = Pool {
            token0: token(1),
            token1: token(2),
            fee: 3000,
            address: Address::repeat_byte(label),
            sqrt_price_x96: U256::from(1u8) << 96,
            tick: 0,
            liquidity: 1,
        };
        QuoteResult {
            route: Route { pools: vec![pool], token_in: token(1), token_out: token(2) },
            amount_in: TokenAmount::new(token(1), U256::from(amount_in)),
            amount_out: TokenAmount::new(token(2), U256::from(amount_out)),
            trade_type,
            gas_estimate: U256::from(100_000u64),
            price_impact: Fraction::zero(),
        }
    }

    #[test]
    fn exact_input_maximizes_output() {
        let quotes = vec![
            quote(1, 1000, 900, TradeType::ExactInput),
            quote(2, 1000, 950, TradeType::ExactInput),
            quote(3, 1000, 920, TradeType::ExactInput),
        ];
        let best = select_best_quote(quotes, TradeType::ExactInput).unwrap();
        assert_eq!(best.amount_out.value, U256::from(950u64));
    }

    #[test]
    fn exact_output_minimizes_input() {
        let quotes = vec![
            quote(1, 1100, 1000, TradeType::ExactOutput),
            quote(2, 1050, 1000, TradeType::ExactOutput),
            quote(3, 1080, 1000, TradeType::ExactOutput),
        ];
        let best = select_best_quote(quotes, TradeType::ExactOutput).unwrap();
        assert_eq!(best.amount_in.value, U256::from(1050u64));
    }

    #[test]
    fn ties_keep_first_encountered() {
        let quotes = vec![
            quote(1, 1000, 950, TradeType::ExactInput),
            quote(2, 1000, 950, TradeType::ExactInput),
        ];
        let best = select_best_quote(quotes, TradeType::ExactInput).unwrap();
        assert_eq!(best.route.pools[0].address, Address::repeat_byte(1));
    }

    #[test]
    fn empty_is_no_routes_available() {
        assert!(matches!(
            select_best_quote(Vec::new(), TradeType::ExactInput),
            Err(SwapError::NoRoutesAvailable)
        ));
    }
}
