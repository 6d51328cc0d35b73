//! Per-chain parameters and tunable estimation settings.

use crate::constants::{
    DEFAULT_CONGESTION_BLOCKS, DEFAULT_GAS_PRICE_BLOCKS, DEFAULT_HIGH_PERCENTILE,
    DEFAULT_LOW_PERCENTILE, DEFAULT_MEDIUM_PERCENTILE,
};
use serde::{Deserialize, Serialize};

/// The category of fee calculation rules a chain follows.
///
/// Selected once per suggestion request; each variant has its own fee
/// composition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum ChainClass {
    /// Classic L1 with congestion-sensitive base fee adjustment.
    L1,
    /// Arbitrum-style rollup.
    ArbStack,
    /// Optimism-style rollup.
    OpStack,
    /// Linea-style rollup with oracle-driven estimation.
    LineaStack,
}

/// Static per-chain tuning for the suggestion engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainParameters {
    /// The chain's fee calculation class.
    pub chain_class: ChainClass,
    /// Average block time in seconds. Must be positive.
    pub network_block_time: f64,
}

/// Per-tier values for a tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierValues {
    /// Value for the low tier.
    pub low: f64,
    /// Value for the medium tier.
    pub medium: f64,
    /// Value for the high tier.
    pub high: f64,
}

/// Tunable estimation parameters.
///
/// Obtain pre-tuned values for a chain class with
/// [`SuggestionsConfig::for_chain_class`] and override fields as needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsConfig {
    /// Number of recent blocks scored for congestion.
    pub congestion_blocks: u64,
    /// Number of recent blocks used for gas price estimation.
    pub gas_price_blocks: u64,
    /// Reward percentile for the low tier. Percentiles must be strictly
    /// increasing across tiers.
    pub low_percentile: f64,
    /// Reward percentile for the medium tier.
    pub medium_percentile: f64,
    /// Reward percentile for the high tier.
    pub high_percentile: f64,
    /// Per-tier base fee multipliers.
    pub base_fee_multipliers: TierValues,
    /// Per-tier congestion multipliers. Only applied on the L1 path.
    pub congestion_multipliers: TierValues,
}

impl SuggestionsConfig {
    /// Returns the pre-tuned configuration for a chain class.
    ///
    /// These are documented constants, not runtime-varying defaults: L1
    /// chains get congestion-sensitive multipliers, rollups get flat base fee
    /// headroom only. Linea-style chains source their fee amounts from the
    /// gas oracle, so only the window sizes and the medium percentile matter
    /// there.
    pub fn for_chain_class(chain_class: ChainClass) -> Self {
        let base = Self {
            congestion_blocks: DEFAULT_CONGESTION_BLOCKS,
            gas_price_blocks: DEFAULT_GAS_PRICE_BLOCKS,
            low_percentile: DEFAULT_LOW_PERCENTILE,
            medium_percentile: DEFAULT_MEDIUM_PERCENTILE,
            high_percentile: DEFAULT_HIGH_PERCENTILE,
            base_fee_multipliers: TierValues { low: 1.0, medium: 1.5, high: 2.0 },
            congestion_multipliers: TierValues { low: 0.0, medium: 0.0, high: 0.0 },
        };

        match chain_class {
            ChainClass::L1 => Self {
                base_fee_multipliers: TierValues { low: 1.0, medium: 1.25, high: 1.5 },
                congestion_multipliers: TierValues { low: 0.0, medium: 0.5, high: 1.0 },
                ..base
            },
            _ => base,
        }
    }

    /// The fee history window size covering both estimation windows.
    pub fn fee_history_blocks(&self) -> u64 {
        self.gas_price_blocks.max(self.congestion_blocks)
    }

    /// The reward percentiles requested from fee history, one column per
    /// tier, ascending.
    pub fn reward_percentiles(&self) -> [f64; 3] {
        [self.low_percentile, self.medium_percentile, self.high_percentile]
    }
}
