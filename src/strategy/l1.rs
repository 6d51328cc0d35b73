//! Fee composition for classic L1 chains.

use crate::{
    config::{ChainParameters, SuggestionsConfig},
    congestion::congestion,
    error::SuggestError,
    strategy::compose_from_history,
    types::FeeSuggestions,
};
use alloy::rpc::types::FeeHistory;
use tracing::debug;

/// Suggests fee tiers for an L1 chain.
///
/// This is the only path that models congestion: the base fee headroom of
/// each tier grows with the congestion score, scaled by the tier's
/// congestion multiplier.
pub fn suggest(
    history: &FeeHistory,
    params: &ChainParameters,
    config: &SuggestionsConfig,
) -> Result<FeeSuggestions, SuggestError> {
    let ratios = &history.gas_used_ratio;
    if ratios.is_empty() {
        return Err(SuggestError::EmptyFeeHistory);
    }
    let window_start = ratios.len().saturating_sub(config.congestion_blocks as usize);
    let score = congestion(&ratios[window_start..]);
    debug!(congestion = score, blocks = ratios.len() - window_start, "Scored L1 congestion");

    compose_from_history(history, params, config, score)
}
