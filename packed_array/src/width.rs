//! Minimal bit width estimation.

/// Smallest bit width able to represent every value in `values`.
///
/// This is the position of the highest set bit of the maximum plus one,
/// never less than 1: an all-zero input still needs one bit per item.
///
/// `values` must be non-empty (checked in debug builds only).
///
/// # Examples
///
/// ```
/// use packed_array::compute_bits_per_item;
///
/// assert_eq!(compute_bits_per_item(&[0]), 1);
/// assert_eq!(compute_bits_per_item(&[31]), 5);
/// assert_eq!(compute_bits_per_item(&[32]), 6);
/// ```
pub fn compute_bits_per_item(values: &[u32]) -> u32 {
    debug_assert!(!values.is_empty());

    let max = values.iter().copied().max().unwrap_or(0);
    (32 - max.leading_zeros()).max(1)
}
