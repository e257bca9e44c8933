//! Read-only blockchain access behind a trait seam.
//!
//! The pipeline never talks to a transport directly: everything goes through
//! [`BlockchainProvider`], so integration tests can substitute a programmed
//! mock. The production implementation collapses batched reads into a single
//! Multicall3-style `aggregate3` round trip.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tracing::debug;

use crate::abi::IMulticall3;
use crate::errors::{Result, SwapError};

/// One read call in a batch: target contract and ABI-encoded calldata.
#[derive(Debug, Clone)]
pub struct ReadCall {
    pub to: Address,
    pub data: Bytes,
}

impl ReadCall {
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self { to, data: data.into() }
    }
}

/// Fee data read from the chain head, every field best-effort.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeData {
    pub base_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub gas_price: Option<u128>,
}

/// Read-only access to the chain, batched where possible.
#[async_trait]
pub trait BlockchainProvider: Send + Sync {
    /// Issues all calls in one multicall round trip, tolerating individual
    /// failures: a reverted call or an empty return becomes `None`.
    ///
    /// A batch-level transport failure is a [`SwapError::ProviderCall`].
    async fn try_batch(&self, calls: Vec<ReadCall>) -> Result<Vec<Option<Bytes>>>;

    /// Strict batch: any individual failure fails the whole read.
    async fn batch(&self, calls: Vec<ReadCall>) -> Result<Vec<Bytes>> {
        let results = self.try_batch(calls).await?;
        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| {
                result.ok_or_else(|| {
                    SwapError::ProviderCall(format!("required call {index} in batch failed"))
                })
            })
            .collect()
    }

    /// Single `eth_call`.
    async fn call(&self, call: ReadCall) -> Result<Bytes>;

    /// Best-effort fee data; absent fields are `None`, never errors from
    /// missing data.
    async fn fee_data(&self) -> FeeData;
}

/// Production provider over an alloy transport, batching through a deployed
/// multicall aggregator.
#[derive(Debug, Clone)]
pub struct RpcProvider<P> {
    inner: P,
    multicall: Address,
}

impl<P: Provider> RpcProvider<P> {
    pub fn new(inner: P, multicall: Address) -> Self {
        Self { inner, multicall }
    }

    async fn eth_call(&self, to: Address, data: Bytes) -> std::result::Result<Bytes, String> {
        let request = TransactionRequest::default().with_to(to).with_input(data);
        self.inner.call(request).await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl<P: Provider> BlockchainProvider for RpcProvider<P> {
    async fn try_batch(&self, calls: Vec<ReadCall>) -> Result<Vec<Option<Bytes>>> {
        let expected = calls.len();
        let aggregated = IMulticall3::aggregate3Call {
            calls: calls
                .into_iter()
                .map(|call| IMulticall3::Call3 {
                    target: call.to,
                    allowFailure: true,
                    callData: call.data,
                })
                .collect(),
        };
        let raw = self
            .eth_call(self.multicall, aggregated.abi_encode().into())
            .await
            .map_err(|e| SwapError::failed_multicall(e))?;
        let results = IMulticall3::aggregate3Call::abi_decode_returns(&raw)
            .map_err(|e| SwapError::failed_multicall(e))?;
        if results.len() != expected {
            return Err(SwapError::failed_multicall(format!(
                "expected {expected} results, got {}",
                results.len()
            )));
        }
        Ok(results
            .into_iter()
            .map(|result| {
                if result.success && !result.returnData.is_empty() {
                    Some(result.returnData)
                } else {
                    None
                }
            })
            .collect())
    }

    async fn call(&self, call: ReadCall) -> Result<Bytes> {
        self.eth_call(call.to, call.data).await.map_err(SwapError::ProviderCall)
    }

    async fn fee_data(&self) -> FeeData {
        let base_fee = async {
            match self
                .inner
                .get_block_by_number(alloy::eips::BlockNumberOrTag::Latest)
                .await
            {
                Ok(Some(block)) => block.header.base_fee_per_gas.map(u128::from),
                Ok(None) => None,
                Err(e) => {
                    debug!(error = %e, "failed to read latest block for base fee");
                    None
                }
            }
        };
        let priority_fee = async {
            match self.inner.get_max_priority_fee_per_gas().await {
                Ok(fee) => Some(fee),
                Err(e) => {
                    debug!(error = %e, "failed to read max priority fee");
                    None
                }
            }
        };
        let gas_price = async {
            match self.inner.get_gas_price().await {
                Ok(price) => Some(price),
                Err(e) => {
                    debug!(error = %e, "failed to read gas price");
                    None
                }
            }
        };
        let (base_fee_per_gas, max_priority_fee_per_gas, gas_price) =
            futures::join!(base_fee, priority_fee, gas_price);
        FeeData { base_fee_per_gas, max_priority_fee_per_gas, gas_price }
    }
}
