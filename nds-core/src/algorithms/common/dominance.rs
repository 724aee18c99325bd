//! Dominance relation helpers.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/common/dominance_test.rs"]
mod dominance_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares two points by Pareto dominance: `Less` means `a` dominates `b`, `Greater` means `b`
/// dominates `a`, `Equal` means the points are equal or mutually non-dominating.
pub fn dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());

    let (mut less, mut greater) = (false, false);
    for (a, b) in a.iter().zip(b.iter()) {
        if a < b {
            less = true;
        } else if a > b {
            greater = true;
        }
        if less && greater {
            return Ordering::Equal;
        }
    }

    match (less, greater) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Checks whether `a` strictly dominates `b`.
pub fn strictly_dominates(a: &[Float], b: &[Float]) -> bool {
    dominance_order(a, b) == Ordering::Less
}

/// Checks whether `a` strictly dominates `b` assuming that `a` is lexicographically smaller than `b`
/// and differs from it. Coordinate `0` is implied by the order, so only `1..=max_obj` are checked.
#[inline]
pub fn strictly_dominates_assuming_lexicographically_smaller(a: &[Float], b: &[Float], max_obj: usize) -> bool {
    (1..=max_obj).all(|obj| a[obj] <= b[obj])
}

/// Checks whether `a` strictly dominates `b` assuming that the points differ, so no objective
/// is implied by their order.
#[inline]
pub fn strictly_dominates_assuming_not_same(a: &[Float], b: &[Float], max_obj: usize) -> bool {
    (0..=max_obj).all(|obj| a[obj] <= b[obj])
}
