//! Percentile and median extraction over fee value sequences.

/// Returns the value at percentile `p` of an ascending-sorted sequence.
///
/// The rank is `ceil(p / 100 * n)`, 1-based and clamped to `[1, n]`, so
/// `p <= 0` yields the minimum and `p >= 100` the maximum. Returns `None` on
/// an empty sequence.
///
/// The input must already be sorted ascending; the result over an unsorted
/// sequence is meaningless.
pub fn percentile(sorted: &[u128], p: f64) -> Option<u128> {
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len();
    let rank = (p / 100.0 * n as f64).ceil() as i64;
    let rank = rank.clamp(1, n as i64) as usize;
    Some(sorted[rank - 1])
}

/// Returns the median of a sequence, sorting a copy.
///
/// Odd-length sequences yield the middle element; even-length sequences yield
/// the arithmetic mean of the two middle elements. Returns `None` on an empty
/// sequence.
pub fn median(values: &[u128]) -> Option<u128> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(sorted[mid - 1].midpoint(sorted[mid]))
    }
}
