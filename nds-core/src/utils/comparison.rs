use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is greater than any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares two points lexicographically: the first coordinate is the most significant one.
pub fn compare_lexicographically(a: &[Float], b: &[Float]) -> Ordering {
    a.iter().zip(b.iter()).map(|(a, b)| compare_floats(*a, *b)).find(|ord| *ord != Ordering::Equal).unwrap_or(Ordering::Equal)
}
