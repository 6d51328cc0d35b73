//! Per-chain-class fee composition strategies.
//!
//! One strategy per [`ChainClass`](crate::config::ChainClass) variant,
//! selected once at call entry by the engine:
//!
//! - [`l1`]: congestion-sensitive base fee headroom.
//! - [`l2`]: flat base fee headroom, shared by Arbitrum-style and
//!   Optimism-style rollups.
//! - [`linea`]: oracle-driven estimation with a fixed priority fee buffer.

pub mod l1;
pub mod l2;
pub mod linea;

use crate::{
    config::{ChainParameters, SuggestionsConfig},
    error::SuggestError,
    gas_price::{MEDIUM_COLUMN, suggest_gas_price},
    inclusion::{estimate_inclusion, sorted_base_fees, sorted_priority_fees},
    types::{Fee, FeeSuggestions},
};
use alloy::rpc::types::FeeHistory;

/// Fixed-point denominator for applying fractional multipliers to fees.
const FACTOR_SCALE: u128 = 10_000;

/// Scales a fee by a fractional factor without routing the fee through
/// floating point.
pub(crate) fn scale_fee(fee: u128, factor: f64) -> u128 {
    let numerator = (factor.max(0.0) * FACTOR_SCALE as f64).round() as u128;
    fee.saturating_mul(numerator) / FACTOR_SCALE
}

/// Composes fee tiers from history-derived gas prices.
///
/// Each tier's max fee is the base fee scaled by
/// `multiplier * (1 + congestion * congestion_multiplier)` plus the tier's
/// priority fee. The L2 path passes a zero congestion score, collapsing the
/// factor to the flat multiplier.
pub(crate) fn compose_from_history(
    history: &FeeHistory,
    params: &ChainParameters,
    config: &SuggestionsConfig,
    congestion: f64,
) -> Result<FeeSuggestions, SuggestError> {
    let price = suggest_gas_price(history, config.gas_price_blocks as usize)?;

    let tier = |multiplier: f64, congestion_multiplier: f64, priority_fee: u128| {
        let factor = multiplier * (1.0 + congestion * congestion_multiplier);
        Fee {
            max_priority_fee_per_gas: priority_fee,
            max_fee_per_gas: scale_fee(price.base_fee, factor).saturating_add(priority_fee),
        }
    };

    let low = tier(config.base_fee_multipliers.low, config.congestion_multipliers.low, price.low);
    let medium = tier(
        config.base_fee_multipliers.medium,
        config.congestion_multipliers.medium,
        price.medium,
    );
    let high =
        tier(config.base_fee_multipliers.high, config.congestion_multipliers.high, price.high);

    let base_fees = sorted_base_fees(history);
    let priority_fees = sorted_priority_fees(history, MEDIUM_COLUMN);
    let inclusion =
        |fee: &Fee| estimate_inclusion(fee, &base_fees, &priority_fees, params.network_block_time);

    Ok(FeeSuggestions {
        low_inclusion: inclusion(&low),
        medium_inclusion: inclusion(&medium),
        high_inclusion: inclusion(&high),
        low,
        medium,
        high,
        estimated_base_fee: price.base_fee,
        priority_fee_lower_bound: price.low,
        priority_fee_upper_bound: price.high,
        congestion,
    })
}
