use super::FrontCollection;
use crate::algorithms::jfb::KeyTable;

/// All ranked points kept in one list regardless of their fronts. Every query scans the whole
/// list, as the fast non-dominated sort compares every pair of points.
pub(crate) struct PointList {
    obj: usize,
    // NOTE (point, rank) pairs
    items: Vec<(u32, u32)>,
}

impl PointList {
    /// Creates a new instance of `PointList` able to keep `capacity` points without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { obj: 1, items: Vec::with_capacity(capacity) }
    }
}

impl FrontCollection for PointList {
    fn reset(&mut self, obj: usize) {
        self.obj = obj;
        self.items.clear();
    }

    fn add(&mut self, _keys: &KeyTable, point: u32, rank: u32) {
        self.items.push((point, rank));
    }

    fn rank_lower_bound(&self, keys: &KeyTable, point: u32, lower_bound: u32) -> u32 {
        self.items
            .iter()
            .filter(|&&(candidate, rank)| rank >= lower_bound && keys.dominates(candidate, point, self.obj))
            .fold(lower_bound, |result, &(_, rank)| result.max(rank + 1))
    }
}
