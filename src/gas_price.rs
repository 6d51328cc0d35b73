//! Gas price estimation from a fee history snapshot.

use crate::{error::SuggestError, priority_fee::estimate_priority_fee, types::GasPrice};
use alloy::rpc::types::FeeHistory;

/// Reward column indices when all three tier percentiles are requested.
pub(crate) const LOW_COLUMN: usize = 0;
/// Medium tier reward column.
pub(crate) const MEDIUM_COLUMN: usize = 1;
/// High tier reward column.
pub(crate) const HIGH_COLUMN: usize = 2;

/// Combines the projected next-block base fee with per-tier priority fees
/// into a [`GasPrice`] snapshot.
///
/// The base fee is the *last* entry of the snapshot's base fee sequence,
/// which fee history defines as the projected value for the next block. Tier
/// ordering is enforced by raising any lower tier that exceeds the next one.
///
/// Fails with [`SuggestError::EmptyFeeHistory`] when the snapshot carries no
/// base fees.
pub fn suggest_gas_price(history: &FeeHistory, window: usize) -> Result<GasPrice, SuggestError> {
    let base_fee =
        history.base_fee_per_gas.last().copied().ok_or(SuggestError::EmptyFeeHistory)?;

    let price = GasPrice {
        base_fee,
        low: estimate_priority_fee(history, LOW_COLUMN, window)?,
        medium: estimate_priority_fee(history, MEDIUM_COLUMN, window)?,
        high: estimate_priority_fee(history, HIGH_COLUMN, window)?,
    };

    Ok(price.enforce_tier_order())
}
