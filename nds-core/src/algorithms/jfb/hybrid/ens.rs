use super::FrontCollection;
use crate::algorithms::jfb::KeyTable;
use crate::utils::NONE;

/// Fronts stored as plain chains of points, scanned point by point as the efficient non-dominated
/// sort does.
pub(crate) struct ChainFronts {
    obj: usize,
    ranks: Vec<u32>,
    heads: Vec<u32>,
    // NOTE (point, next item) pairs
    items: Vec<(u32, u32)>,
}

impl ChainFronts {
    /// Creates a new instance of `ChainFronts` able to keep `capacity` points without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            obj: 1,
            ranks: Vec::with_capacity(capacity),
            heads: Vec::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }
}

impl FrontCollection for ChainFronts {
    fn reset(&mut self, obj: usize) {
        self.obj = obj;
        self.ranks.clear();
        self.heads.clear();
        self.items.clear();
    }

    fn add(&mut self, _keys: &KeyTable, point: u32, rank: u32) {
        let item = self.items.len() as u32;
        match self.ranks.binary_search(&rank) {
            Ok(front) => {
                self.items.push((point, self.heads[front]));
                self.heads[front] = item;
            }
            Err(front) => {
                self.items.push((point, NONE));
                self.ranks.insert(front, rank);
                self.heads.insert(front, item);
            }
        }
    }

    fn rank_lower_bound(&self, keys: &KeyTable, point: u32, lower_bound: u32) -> u32 {
        for front in (0..self.ranks.len()).rev() {
            let rank = self.ranks[front];
            if rank < lower_bound {
                break;
            }

            let mut item = self.heads[front];
            while item != NONE {
                let (candidate, next) = self.items[item as usize];
                if keys.dominates(candidate, point, self.obj) {
                    return rank + 1;
                }
                item = next;
            }
        }

        lower_bound
    }
}
