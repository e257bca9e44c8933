//! Unsigned-swap construction for Uniswap-V3-style exchanges.
//!
//! Given a token pair and an amount, the [`Exchange`] discovers candidate
//! pools on-chain, enumerates swap routes through them, simulates every
//! route against the quoter in one batched call, and turns the best quote
//! into an unsigned transaction (plus an ERC20 approval when needed).
//! Nothing here signs or submits anything.

pub mod abi;
pub mod config;
pub mod constants;
pub mod errors;
pub mod exchange;
pub mod fees;
pub mod math;
pub mod pools;
pub mod provider;
pub mod routes;
pub mod slippage;
pub mod tokens;
pub mod transaction;

pub use crate::config::{ExchangeConfig, ExchangeContracts};
pub use crate::errors::{Result, SwapError};
pub use crate::exchange::{Exchange, QuoteSummary, SwapOptions, SwapResponse};
pub use crate::fees::{FeeBreakdown, SecondaryFee};
pub use crate::provider::{BlockchainProvider, FeeData, ReadCall, RpcProvider};
pub use crate::slippage::Slippage;
pub use crate::tokens::{Token, TokenAmount, TradeType};
pub use crate::transaction::TransactionDetails;
