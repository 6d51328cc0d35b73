//! Engine constants.

/// Default number of recent blocks used for gas price estimation.
pub const DEFAULT_GAS_PRICE_BLOCKS: u64 = 10;

/// Default number of recent blocks used for congestion scoring.
pub const DEFAULT_CONGESTION_BLOCKS: u64 = 20;

/// Default reward percentile for the low fee tier.
pub const DEFAULT_LOW_PERCENTILE: f64 = 25.0;

/// Default reward percentile for the medium fee tier.
pub const DEFAULT_MEDIUM_PERCENTILE: f64 = 50.0;

/// Default reward percentile for the high fee tier.
pub const DEFAULT_HIGH_PERCENTILE: f64 = 75.0;

/// The EIP-1559 gas utilization target as a ratio of the block gas limit.
///
/// Base fee adjustment steers blocks towards 50% full; congestion is measured
/// as the excess over this target.
pub const GAS_USED_RATIO_TARGET: f64 = 0.5;

/// Percentage buffer added to the priority fee returned by a Linea-style gas
/// oracle, expressed in basis points over 100 (115 = +15%).
pub const LINEA_PRIORITY_FEE_BUFFER_PERCENT: u128 = 115;

/// Base fee multiplier for Linea-style chains: `maxFee = 2 * baseFee + tip`.
///
/// The doubling absorbs up to six consecutive maximum base fee increases.
pub const LINEA_BASE_FEE_MULTIPLIER: u128 = 2;

/// One inclusion threshold: a transaction whose candidate base fee and
/// priority fee both clear the given percentiles of the recent distributions
/// is expected to be included by `block`.
#[derive(Debug, Clone, Copy)]
pub struct InclusionThreshold {
    /// Upper bound of the inclusion bracket, in blocks from now.
    pub block: u32,
    /// Percentile of the sorted historical base fees the candidate base fee
    /// must reach.
    pub base_fee_percentile: f64,
    /// Percentile of the sorted historical priority fees the candidate
    /// priority fee must reach.
    pub priority_fee_percentile: f64,
}

/// Inclusion thresholds walked in order, nearest block first.
///
/// Block 1 is the implicit lower bound with no threshold check. The priority
/// fee percentiles are complementary: clearing the 30th percentile of the
/// ascending distribution corresponds to outbidding the bottom 30% of recent
/// tips.
pub const INCLUSION_THRESHOLDS: [InclusionThreshold; 5] = [
    InclusionThreshold { block: 2, base_fee_percentile: 45.0, priority_fee_percentile: 30.0 },
    InclusionThreshold { block: 3, base_fee_percentile: 35.0, priority_fee_percentile: 30.0 },
    InclusionThreshold { block: 4, base_fee_percentile: 30.0, priority_fee_percentile: 20.0 },
    InclusionThreshold { block: 5, base_fee_percentile: 20.0, priority_fee_percentile: 20.0 },
    InclusionThreshold { block: 6, base_fee_percentile: 10.0, priority_fee_percentile: 10.0 },
];

/// Inclusion bracket returned when no threshold passes: at least this many
/// blocks, open ended.
pub const INCLUSION_FALLBACK_BLOCKS: (u32, u32) = (6, 7);

/// Number of most recent base fee entries dropped before sorting the
/// historical base fee distribution for inclusion estimation.
///
/// The last entry of a fee history window is the *projected* next-block base
/// fee and the one before it is still settling; both are too noisy to rank
/// against.
pub const BASE_FEE_NOISE_ENTRIES: usize = 2;
