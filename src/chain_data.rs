//! The transport seam between the engine and the chain.
//!
//! The engine only ever talks to the chain through [`ChainData`]; the
//! JSON-RPC client behind it is an external collaborator. [`RpcChainData`]
//! adapts any alloy [`Provider`] to the trait.

use alloy::{
    eips::BlockNumberOrTag,
    providers::Provider,
    rpc::types::{FeeHistory, TransactionRequest},
    transports::TransportResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An authoritative gas estimate from a Linea-style gas oracle, covering one
/// specific call message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineaGasEstimate {
    /// Base fee per gas, as a hex quantity on the wire.
    #[serde(with = "alloy::serde::quantity")]
    pub base_fee_per_gas: u128,
    /// Priority fee per gas, as a hex quantity on the wire.
    #[serde(with = "alloy::serde::quantity")]
    pub priority_fee_per_gas: u128,
    /// Gas limit for the call.
    #[serde(with = "alloy::serde::quantity")]
    pub gas_limit: u64,
}

/// Chain data required by the suggestion engine.
///
/// All methods map one-to-one onto RPC calls; failures are surfaced as
/// transport errors and never retried here.
#[async_trait]
pub trait ChainData: Send + Sync {
    /// Fetches fee history for `block_count` blocks ending at `last_block`
    /// (`None` means the most recent block), with one reward column per
    /// requested percentile.
    async fn fetch_fee_history(
        &self,
        block_count: u64,
        last_block: Option<u64>,
        reward_percentiles: &[f64],
    ) -> TransportResult<FeeHistory>;

    /// Estimates the gas limit for a call message.
    async fn estimate_gas_limit(&self, call: &TransactionRequest) -> TransportResult<u64>;

    /// Queries the chain's gas oracle for an authoritative estimate.
    ///
    /// Only meaningful on Linea-style chains.
    async fn estimate_linea_gas(
        &self,
        call: &TransactionRequest,
    ) -> TransportResult<LineaGasEstimate>;
}

/// [`ChainData`] over any alloy [`Provider`].
#[derive(Debug, Clone)]
pub struct RpcChainData<P> {
    provider: P,
}

impl<P> RpcChainData<P> {
    /// Wraps a provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> ChainData for RpcChainData<P>
where
    P: Provider + Send + Sync,
{
    async fn fetch_fee_history(
        &self,
        block_count: u64,
        last_block: Option<u64>,
        reward_percentiles: &[f64],
    ) -> TransportResult<FeeHistory> {
        let last_block = last_block.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
        self.provider.get_fee_history(block_count, last_block, reward_percentiles).await
    }

    async fn estimate_gas_limit(&self, call: &TransactionRequest) -> TransportResult<u64> {
        self.provider.estimate_gas(call.clone()).await
    }

    async fn estimate_linea_gas(
        &self,
        call: &TransactionRequest,
    ) -> TransportResult<LineaGasEstimate> {
        self.provider.client().request("linea_estimateGas", (call.clone(),)).await
    }
}
