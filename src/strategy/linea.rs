//! Fee composition for Linea-style rollups.
//!
//! Linea's node exposes a gas oracle that prices a specific call message, so
//! historical percentiles are not used for the fee amount at all. Fee
//! history is still fetched afterwards, solely to feed the inclusion
//! estimator.

use crate::{
    chain_data::ChainData,
    config::{ChainParameters, SuggestionsConfig},
    constants::{LINEA_BASE_FEE_MULTIPLIER, LINEA_PRIORITY_FEE_BUFFER_PERCENT},
    error::SuggestError,
    inclusion::{estimate_inclusion, sorted_base_fees, sorted_priority_fees},
    types::{Fee, FeeSuggestions},
};
use alloy::rpc::types::TransactionRequest;
use tracing::{debug, instrument};

/// Suggests fee tiers for a Linea-style chain.
///
/// The oracle's priority fee is inflated by a fixed 15% buffer and used
/// identically for all three tiers; every tier's max fee is
/// `2 * baseFeePerGas + bufferedPriorityFee`. Returns the suggestions along
/// with the oracle's gas limit, which supersedes a plain `eth_estimateGas`.
#[instrument(skip_all)]
pub async fn suggest<C: ChainData>(
    source: &C,
    params: &ChainParameters,
    config: &SuggestionsConfig,
    call: &TransactionRequest,
) -> Result<(FeeSuggestions, u64), SuggestError> {
    let oracle = source.estimate_linea_gas(call).await?;
    debug!(
        base_fee = oracle.base_fee_per_gas,
        priority_fee = oracle.priority_fee_per_gas,
        gas_limit = oracle.gas_limit,
        "Fetched Linea oracle estimate"
    );

    let priority_fee = oracle
        .priority_fee_per_gas
        .saturating_mul(LINEA_PRIORITY_FEE_BUFFER_PERCENT)
        / 100;
    let fee = Fee {
        max_priority_fee_per_gas: priority_fee,
        max_fee_per_gas: oracle
            .base_fee_per_gas
            .saturating_mul(LINEA_BASE_FEE_MULTIPLIER)
            .saturating_add(priority_fee),
    };

    // Only the medium percentile is requested, so the inclusion estimator
    // reads reward column 0.
    let history = source
        .fetch_fee_history(config.fee_history_blocks(), None, &[config.medium_percentile])
        .await?;
    let inclusion = estimate_inclusion(
        &fee,
        &sorted_base_fees(&history),
        &sorted_priority_fees(&history, 0),
        params.network_block_time,
    );

    let fees = FeeSuggestions {
        low: fee,
        medium: fee,
        high: fee,
        low_inclusion: inclusion,
        medium_inclusion: inclusion,
        high_inclusion: inclusion,
        estimated_base_fee: oracle.base_fee_per_gas,
        priority_fee_lower_bound: priority_fee,
        priority_fee_upper_bound: priority_fee,
        congestion: 0.0,
    };

    Ok((fees, oracle.gas_limit))
}
