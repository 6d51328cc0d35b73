//! The suggestion engine: the public entry points.

use crate::{
    chain_data::ChainData,
    config::{ChainClass, ChainParameters, SuggestionsConfig},
    error::SuggestError,
    inclusion::{estimate_inclusion, sorted_base_fees, sorted_priority_fees},
    strategy,
    types::{Fee, Inclusion, TxSuggestions},
};
use alloy::rpc::types::TransactionRequest;
use tracing::{debug, instrument};

/// Gas fee suggestion engine over a [`ChainData`] source.
///
/// The engine is stateless between calls: every request fetches its own fee
/// history snapshot and performs pure computation over it, so a single
/// engine may serve concurrent callers as long as the source is safe for
/// concurrent use.
#[derive(Debug, Clone)]
pub struct SuggestionEngine<C> {
    source: C,
}

impl<C> SuggestionEngine<C> {
    /// Creates an engine over a chain data source.
    pub const fn new(source: C) -> Self {
        Self { source }
    }

    /// Returns the underlying chain data source.
    pub fn source(&self) -> &C {
        &self.source
    }
}

impl<C: ChainData> SuggestionEngine<C> {
    /// Produces low/medium/high fee suggestions for a transaction.
    ///
    /// When a call message is supplied its gas limit is estimated as well;
    /// without one the gas limit is reported as zero. Fee history sized to
    /// cover both the gas price and congestion windows is fetched once and
    /// dispatched to the chain class strategy. All fetch failures propagate
    /// immediately; there is no partial-result recovery.
    #[instrument(skip_all, fields(chain_class = ?params.chain_class))]
    pub async fn suggest_transaction(
        &self,
        params: &ChainParameters,
        config: &SuggestionsConfig,
        call: Option<&TransactionRequest>,
    ) -> Result<TxSuggestions, SuggestError> {
        if params.chain_class == ChainClass::LineaStack {
            let call = call.cloned().unwrap_or_default();
            let (fees, gas_limit) =
                strategy::linea::suggest(&self.source, params, config, &call).await?;
            return Ok(TxSuggestions { gas_limit, fees });
        }

        let gas_limit = match call {
            Some(call) => self.source.estimate_gas_limit(call).await?,
            None => 0,
        };

        let history = self
            .source
            .fetch_fee_history(config.fee_history_blocks(), None, &config.reward_percentiles())
            .await?;
        debug!(
            blocks = history.gas_used_ratio.len(),
            oldest_block = history.oldest_block,
            "Fetched fee history"
        );

        let fees = match params.chain_class {
            ChainClass::L1 => strategy::l1::suggest(&history, params, config)?,
            // ArbStack and OpStack share the flat rollup formula; anything
            // unrecognized deliberately falls back to it instead of failing.
            _ => strategy::l2::suggest(&history, params, config)?,
        };

        Ok(TxSuggestions { gas_limit, fees })
    }

    /// Predicts the inclusion bracket for a fee the caller already holds.
    ///
    /// Useful for re-checking a previously suggested or user-modified fee.
    /// Fetches a fee history window with only the medium percentile.
    #[instrument(skip_all, fields(chain_class = ?params.chain_class))]
    pub async fn estimate_inclusion(
        &self,
        params: &ChainParameters,
        config: &SuggestionsConfig,
        fee: &Fee,
    ) -> Result<Inclusion, SuggestError> {
        let history = self
            .source
            .fetch_fee_history(config.gas_price_blocks, None, &[config.medium_percentile])
            .await?;
        if history.base_fee_per_gas.is_empty() {
            return Err(SuggestError::EmptyFeeHistory);
        }

        Ok(estimate_inclusion(
            fee,
            &sorted_base_fees(&history),
            &sorted_priority_fees(&history, 0),
            params.network_block_time,
        ))
    }
}
