//! Unsigned transaction construction: swap calldata, ERC20 approvals and
//! gas-fee estimation.

pub mod approval;
pub mod gas;
pub mod swap;

use alloy::primitives::{Address, Bytes, U256};
use serde::Serialize;

/// An unsigned transaction ready for signing and submission.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetails {
    pub to: Address,
    pub from: Address,
    pub value: U256,
    pub data: Bytes,
    /// Estimated total fee in wei; absent when no fee data was obtainable.
    pub gas_fee_estimate: Option<U256>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wallet_friendly_json() {
        let details = TransactionDetails {
            to: Address::repeat_byte(0x11),
            from: Address::repeat_byte(0x22),
            value: U256::from(1_000u64),
            data: Bytes::from(vec![0xde, 0xad]),
            gas_fee_estimate: None,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["data"], "0xdead");
        assert!(json["to"].as_str().unwrap().starts_with("0x"));
        assert!(json["gas_fee_estimate"].is_null());
    }
}
