//! Shared test support: a programmable in-memory blockchain provider.

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;

use dex_swap_sdk::{BlockchainProvider, FeeData, ReadCall, Result, SwapError};

/// A [`BlockchainProvider`] that answers reads from a programmed table
/// keyed by target contract and function selector. Unprogrammed calls
/// behave like reverts: `None` in a tolerant batch, an error for a single
/// call. Order-independent, so concurrent pipeline reads resolve the same
/// way every run.
#[derive(Default)]
pub struct MockProvider {
    responses: Vec<(Address, [u8; 4], Bytes)>,
    fee_data: FeeData,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs the return data for calls to `to` whose calldata starts
    /// with `selector`.
    pub fn respond(mut self, to: Address, selector: [u8; 4], data: Vec<u8>) -> Self {
        self.responses.push((to, selector, data.into()));
        self
    }

    pub fn with_fee_data(mut self, fee_data: FeeData) -> Self {
        self.fee_data = fee_data;
        self
    }

    fn lookup(&self, call: &ReadCall) -> Option<Bytes> {
        self.responses
            .iter()
            .find(|(to, selector, _)| *to == call.to && call.data.starts_with(selector))
            .map(|(_, _, data)| data.clone())
    }
}

#[async_trait]
impl BlockchainProvider for MockProvider {
    async fn try_batch(&self, calls: Vec<ReadCall>) -> Result<Vec<Option<Bytes>>> {
        Ok(calls.iter().map(|call| self.lookup(call)).collect())
    }

    async fn call(&self, call: ReadCall) -> Result<Bytes> {
        self.lookup(&call)
            .ok_or_else(|| SwapError::ProviderCall(format!("unprogrammed call to {}", call.to)))
    }

    async fn fee_data(&self) -> FeeData {
        self.fee_data
    }
}
