//! Fee composition for Arbitrum-style and Optimism-style rollups.
//!
//! Both stacks share one formula: flat per-tier base fee headroom, no
//! congestion term. Unrecognized chain classes also land here; the
//! permissive fallback is deliberate, documented engine behavior.

use crate::{
    config::{ChainParameters, SuggestionsConfig},
    error::SuggestError,
    strategy::compose_from_history,
    types::FeeSuggestions,
};
use alloy::rpc::types::FeeHistory;

/// Suggests fee tiers for a rollup chain.
///
/// Congestion is not modeled on rollups and is reported as zero.
pub fn suggest(
    history: &FeeHistory,
    params: &ChainParameters,
    config: &SuggestionsConfig,
) -> Result<FeeSuggestions, SuggestError> {
    compose_from_history(history, params, config, 0.0)
}
