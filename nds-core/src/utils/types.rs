#[cfg(test)]
#[path = "../../tests/unit/utils/types_test.rs"]
mod types_test;

/// Alias to a scalar floating type used for point coordinates.
pub type Float = f64;

/// A "no link" sentinel used by arena based linked structures (chains, trees, fronts).
pub const NONE: u32 = u32::MAX;

/// Returns `ceil(log2(n))`, zero for `n <= 1`.
pub fn log2_up(n: usize) -> usize {
    if n <= 1 { 0 } else { (usize::BITS - (n - 1).leading_zeros()) as usize }
}

/// Fills the slice with the identity permutation `0, 1, 2, ...`.
pub fn fill_identity(indices: &mut [u32]) {
    indices.iter_mut().zip(0_u32..).for_each(|(index, value)| *index = value);
}
