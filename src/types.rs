//! Fee suggestion result types.
//!
//! All values are in the chain's smallest fee unit (wei on Ethereum mainnet)
//! and fit in a `u128`, matching the fee history wire types. Every type here
//! is transient: constructed per suggestion request and discarded after the
//! call returns.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single estimated base fee plus three priority fee tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPrice {
    /// The projected next-block base fee.
    pub base_fee: u128,
    /// Priority fee for the low tier.
    pub low: u128,
    /// Priority fee for the medium tier.
    pub medium: u128,
    /// Priority fee for the high tier.
    pub high: u128,
}

impl GasPrice {
    /// Raises any lower tier that exceeds the next one so that
    /// `low <= medium <= high` holds.
    pub fn enforce_tier_order(mut self) -> Self {
        self.medium = self.medium.max(self.low);
        self.high = self.high.max(self.medium);
        self
    }
}

/// One concrete fee tier for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Maximum priority fee per gas.
    pub max_priority_fee_per_gas: u128,
    /// Maximum total fee per gas. Always at least the priority fee.
    pub max_fee_per_gas: u128,
}

/// Predicted wait before a transaction paying a given [`Fee`] is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inclusion {
    /// Minimum number of blocks until inclusion.
    pub min_blocks: u32,
    /// Maximum number of blocks until inclusion.
    pub max_blocks: u32,
    /// Minimum time until inclusion, derived as blocks x average block time.
    pub min_time: Duration,
    /// Maximum time until inclusion, derived as blocks x average block time.
    pub max_time: Duration,
}

impl Inclusion {
    /// Builds an inclusion estimate from a block bracket and the network's
    /// average block time in seconds.
    pub fn from_blocks(min_blocks: u32, max_blocks: u32, block_time: f64) -> Self {
        Self {
            min_blocks,
            max_blocks,
            min_time: Duration::from_secs_f64(min_blocks as f64 * block_time),
            max_time: Duration::from_secs_f64(max_blocks as f64 * block_time),
        }
    }
}

/// The full fee suggestion for one chain at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSuggestions {
    /// Low fee tier.
    pub low: Fee,
    /// Medium fee tier.
    pub medium: Fee,
    /// High fee tier.
    pub high: Fee,
    /// Predicted inclusion for the low tier.
    pub low_inclusion: Inclusion,
    /// Predicted inclusion for the medium tier.
    pub medium_inclusion: Inclusion,
    /// Predicted inclusion for the high tier.
    pub high_inclusion: Inclusion,
    /// The estimated next-block base fee.
    pub estimated_base_fee: u128,
    /// Lower bound of the observed priority fee range.
    pub priority_fee_lower_bound: u128,
    /// Upper bound of the observed priority fee range.
    pub priority_fee_upper_bound: u128,
    /// Network congestion score in `[0, 1]`. Zero for rollups that do not
    /// model congestion.
    pub congestion: f64,
}

/// A complete transaction suggestion: gas limit plus fee tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSuggestions {
    /// Estimated gas limit for the call message, or zero if none was supplied.
    pub gas_limit: u64,
    /// Suggested fee tiers with inclusion estimates.
    pub fees: FeeSuggestions,
}
