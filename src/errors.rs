//! Typed error taxonomy for the swap pipeline.
//!
//! Callers dispatch on the variant, never on the message text. Validation
//! variants are raised before any I/O is performed.

/// Errors surfaced by the exchange pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// A supplied address literal is malformed or the zero address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Token in and token out resolve to the same token.
    #[error("duplicate addresses: token in and token out must differ")]
    DuplicateAddresses,

    /// Requested max hops is outside the supported range.
    #[error("max hops must be between {min} and {max}, got {value}")]
    InvalidMaxHops { value: u32, min: u32, max: u32 },

    /// Slippage percent is malformed or outside 0..=50.
    #[error("invalid slippage: {0}")]
    InvalidSlippage(String),

    /// Secondary fee configuration is unusable (e.g. total basis points
    /// at or above 100%).
    #[error("invalid secondary fee: {0}")]
    InvalidSecondaryFee(String),

    /// A required batched on-chain read failed. Never retried internally.
    #[error("provider call failed: {0}")]
    ProviderCall(String),

    /// Zero candidate paths, or every quote simulation failed.
    #[error("no routes available for the requested swap")]
    NoRoutesAvailable,

    /// Allowance lookup failed, or owner equals spender.
    #[error("approve failed: {0}")]
    Approve(String),

    /// A fee or wrap/unwrap operation was applied to the wrong token.
    #[error("token mismatch: expected {expected}, got {actual}")]
    TokenMismatch { expected: String, actual: String },
}

impl SwapError {
    /// Wraps a multicall transport failure with the standard prefix.
    pub(crate) fn failed_multicall(err: impl std::fmt::Display) -> Self {
        SwapError::ProviderCall(format!("failed multicall: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;
