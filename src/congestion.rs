//! Network congestion scoring from gas used ratios.

use crate::constants::GAS_USED_RATIO_TARGET;

/// Scores network congestion over a window of gas used ratios.
///
/// Each ratio contributes its excess over the 50% EIP-1559 utilization
/// target; the average excess is doubled to normalize a fully congested
/// window to `1.0` and clamped into `[0, 1]`.
///
/// The window must be non-empty; the engine validates fee history length
/// before scoring.
pub fn congestion(gas_used_ratios: &[f64]) -> f64 {
    debug_assert!(!gas_used_ratios.is_empty(), "congestion window must be non-empty");
    if gas_used_ratios.is_empty() {
        return 0.0;
    }

    let excess: f64 =
        gas_used_ratios.iter().map(|ratio| (ratio - GAS_USED_RATIO_TARGET).max(0.0)).sum();
    let score = excess / gas_used_ratios.len() as f64 * 2.0;
    score.min(1.0)
}
