//! Representative priority fee extraction from fee history reward columns.

use crate::error::SuggestError;
use alloy::rpc::types::FeeHistory;

/// Derives a representative priority fee for one reward percentile column.
///
/// Extracts the column's value from the last `window` blocks of the snapshot
/// (skipping blocks missing the column), sorts the values and takes their
/// median. A zero median falls back to the smallest non-zero value at or
/// above the median rank, so quiet windows with a few real tips still
/// produce a usable suggestion; an all-zero column yields zero.
///
/// Fails with [`SuggestError::InsufficientData`] when no block in the window
/// carries the requested column.
pub fn estimate_priority_fee(
    history: &FeeHistory,
    column: usize,
    window: usize,
) -> Result<u128, SuggestError> {
    let rows = history.reward.as_deref().unwrap_or_default();
    let start = rows.len().saturating_sub(window);

    let mut values: Vec<u128> =
        rows[start..].iter().filter_map(|row| row.get(column).copied()).collect();
    if values.is_empty() {
        return Err(SuggestError::InsufficientData { column });
    }
    values.sort_unstable();

    let mid = values.len() / 2;
    let median = if values.len() % 2 == 1 {
        values[mid]
    } else {
        values[mid - 1].midpoint(values[mid])
    };
    if median > 0 {
        return Ok(median);
    }

    // Zero median: the window is mostly empty tips. Use the cheapest real tip
    // at or above the median rank, or zero if there is none.
    Ok(values[mid..].iter().copied().find(|value| *value > 0).unwrap_or_default())
}
