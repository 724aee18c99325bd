//! An index sorting kernel: reorders a permutation of point indices by external values without
//! touching the values themselves.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/common/index_sort_test.rs"]
mod index_sort_test;

use crate::utils::Float;

/// A default size below which insertion sort is used.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 20;

/// Describes how a partition step has split an index range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// Ranges `[.., mid)` and `[mid, ..)` are separated: no value on the left exceeds any value on the right.
    At(usize),
    /// The element at `mid` equals the pivot and is already in place: `[.., mid)` and `[mid + 1, ..)`
    /// still need sorting.
    Around(usize),
}

/// Sorts indices by values associated with them using a quicksort-style partitioning above
/// a threshold and insertion sort below it.
#[derive(Clone, Debug)]
pub struct IndexSorter {
    threshold: usize,
}

impl Default for IndexSorter {
    fn default() -> Self {
        Self::new(DEFAULT_INSERTION_THRESHOLD)
    }
}

impl IndexSorter {
    /// Creates a new instance of `IndexSorter` with given insertion sort threshold.
    pub fn new(threshold: usize) -> Self {
        Self { threshold: threshold.max(2) }
    }

    /// Returns insertion sort threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Reorders `indices` so that `values[indices[k]]` is non-decreasing.
    pub fn sort_by_values<T>(&self, indices: &mut [u32], values: &[T])
    where
        T: PartialOrd + Copy,
    {
        self.sort_by_key(indices, |index| values[index as usize]);
    }

    /// Reorders `indices` so that `key(indices[k])` is non-decreasing.
    pub fn sort_by_key<K, F>(&self, indices: &mut [u32], key: F)
    where
        K: PartialOrd + Copy,
        F: Fn(u32) -> K,
    {
        self.sort_range(indices, &key);
    }

    /// Sorts indices of points lexicographically: coordinate `0` is the most significant one.
    pub fn lexicographical_sort<P>(&self, indices: &mut [u32], points: &[P], dimension: usize)
    where
        P: AsRef<[Float]>,
    {
        self.lexicographical_sort_from(indices, points, 0, dimension);
    }

    fn lexicographical_sort_from<P>(&self, indices: &mut [u32], points: &[P], coordinate: usize, dimension: usize)
    where
        P: AsRef<[Float]>,
    {
        let value = |index: u32| points[index as usize].as_ref()[coordinate];
        self.sort_by_key(indices, value);

        let next = coordinate + 1;
        if next == dimension {
            return;
        }

        // NOTE sort every run of equal values by the next coordinate
        let mut start = 0;
        while start < indices.len() {
            let current = value(indices[start]);
            let mut end = start + 1;
            while end < indices.len() && value(indices[end]) == current {
                end += 1;
            }
            if end - start > 1 {
                self.lexicographical_sort_from(&mut indices[start..end], points, next, dimension);
            }
            start = end;
        }
    }

    fn sort_range<K, F>(&self, indices: &mut [u32], key: &F)
    where
        K: PartialOrd + Copy,
        F: Fn(u32) -> K,
    {
        let len = indices.len();
        if len < self.threshold {
            insertion_sort(indices, key);
            return;
        }

        let (left_until, right_from) = match partition(indices, key) {
            Split::At(mid) => (mid, mid),
            Split::Around(mid) => (mid, mid + 1),
        };

        if left_until > 1 {
            self.sort_range(&mut indices[..left_until], key);
        }
        if len - right_from > 1 {
            self.sort_range(&mut indices[right_from..], key);
        }
    }
}

/// Partitions indices around the value of the middle element.
pub fn partition<K, F>(indices: &mut [u32], key: &F) -> Split
where
    K: PartialOrd + Copy,
    F: Fn(u32) -> K,
{
    debug_assert!(!indices.is_empty());

    let pivot = key(indices[indices.len() / 2]);
    let mut left = 0_isize;
    let mut right = indices.len() as isize - 1;

    while left <= right {
        while key(indices[left as usize]) < pivot {
            left += 1;
        }
        while key(indices[right as usize]) > pivot {
            right -= 1;
        }
        if left <= right {
            // NOTE equal keys stay in place, so sorted input is never reordered
            if key(indices[left as usize]) != key(indices[right as usize]) {
                indices.swap(left as usize, right as usize);
            }
            left += 1;
            right -= 1;
        }
    }

    if left - 1 == right { Split::At(left as usize) } else { Split::Around((left - 1) as usize) }
}

/// Sorts indices using insertion sort.
pub fn insertion_sort<K, F>(indices: &mut [u32], key: &F)
where
    K: PartialOrd + Copy,
    F: Fn(u32) -> K,
{
    for i in 1..indices.len() {
        let current = indices[i];
        let current_key = key(current);
        let mut j = i;
        while j > 0 && current_key < key(indices[j - 1]) {
            indices[j] = indices[j - 1];
            j -= 1;
        }
        indices[j] = current;
    }
}
