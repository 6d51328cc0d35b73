//! Block and time until inclusion estimation.
//!
//! A candidate fee is ranked against the recent base fee and priority fee
//! distributions through a fixed ladder of percentile thresholds
//! ([`INCLUSION_THRESHOLDS`]). The first threshold the candidate clears
//! brackets the expected inclusion block; a candidate that clears none gets
//! an open-ended "at least six blocks" estimate. This is a deliberately
//! cheap deterministic heuristic, not a calibrated probability model.

use crate::{
    constants::{BASE_FEE_NOISE_ENTRIES, INCLUSION_FALLBACK_BLOCKS, INCLUSION_THRESHOLDS},
    percentile::percentile,
    types::{Fee, Inclusion},
};
use alloy::rpc::types::FeeHistory;

/// Prepares the ascending-sorted historical base fee distribution.
///
/// The two most recent entries are dropped before sorting: the last one is
/// the projected next-block value and the one before it is still settling,
/// so both are transient noise for ranking purposes.
pub fn sorted_base_fees(history: &FeeHistory) -> Vec<u128> {
    let fees = &history.base_fee_per_gas;
    let end = fees.len().saturating_sub(BASE_FEE_NOISE_ENTRIES);
    let mut fees = fees[..end].to_vec();
    fees.sort_unstable();
    fees
}

/// Prepares the ascending-sorted historical priority fee distribution from
/// one reward column.
pub fn sorted_priority_fees(history: &FeeHistory, column: usize) -> Vec<u128> {
    let mut fees: Vec<u128> = history
        .reward
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|row| row.get(column).copied())
        .collect();
    fees.sort_unstable();
    fees
}

/// Predicts the inclusion bracket for a candidate fee.
///
/// The candidate base fee is `max_fee - priority_fee`. Thresholds are walked
/// nearest block first; the first one where both the candidate base fee and
/// the priority fee clear their percentile determines the bracket, with
/// block 1 as the implicit lower bound (a transaction can always land in the
/// very next block). Empty distributions clear no threshold and fall through
/// to the open-ended bracket.
pub fn estimate_inclusion(
    fee: &Fee,
    sorted_base_fees: &[u128],
    sorted_priority_fees: &[u128],
    block_time: f64,
) -> Inclusion {
    let candidate_base_fee = fee.max_fee_per_gas.saturating_sub(fee.max_priority_fee_per_gas);

    let mut previous_block = 1;
    for threshold in INCLUSION_THRESHOLDS {
        let base_fee_bar = percentile(sorted_base_fees, threshold.base_fee_percentile);
        let priority_fee_bar = percentile(sorted_priority_fees, threshold.priority_fee_percentile);

        let passes = base_fee_bar.is_some_and(|bar| candidate_base_fee >= bar)
            && priority_fee_bar.is_some_and(|bar| fee.max_priority_fee_per_gas >= bar);
        if passes {
            return Inclusion::from_blocks(previous_block, threshold.block, block_time);
        }
        previous_block = threshold.block;
    }

    let (min_blocks, max_blocks) = INCLUSION_FALLBACK_BLOCKS;
    Inclusion::from_blocks(min_blocks, max_blocks, block_time)
}
