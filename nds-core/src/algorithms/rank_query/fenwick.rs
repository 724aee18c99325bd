use super::RankQueryIndex;

/// A Fenwick (binary indexed) tree of prefix maxima built over keys compressed for a single sweep.
///
/// `reset` sorts and deduplicates announced keys, so the tree size depends on the sweep, not on
/// the key universe.
pub struct FenwickRankQuery {
    keys: Vec<u32>,
    // NOTE values are stored as `rank + 1`, zero means "nothing inserted"
    tree: Vec<u32>,
}

impl RankQueryIndex for FenwickRankQuery {
    const NAME: &'static str = "Fenwick tree";

    fn with_capacity(universe: usize) -> Self {
        Self { keys: Vec::with_capacity(universe), tree: Vec::with_capacity(universe + 1) }
    }

    fn reset<I>(&mut self, keys: I)
    where
        I: Iterator<Item = u32>,
    {
        self.keys.clear();
        self.keys.extend(keys);
        self.keys.sort_unstable();
        self.keys.dedup();

        self.tree.clear();
        self.tree.resize(self.keys.len() + 1, 0);
    }

    fn put(&mut self, key: u32, rank: u32) {
        debug_assert!(self.keys.binary_search(&key).is_ok(), "key {key} was not announced");
        let Ok(position) = self.keys.binary_search(&key) else {
            return;
        };

        let value = rank + 1;
        let mut idx = position + 1;
        while idx < self.tree.len() {
            if self.tree[idx] < value {
                self.tree[idx] = value;
            }
            idx += idx & idx.wrapping_neg();
        }
    }

    fn max_rank_at_most(&self, key: u32) -> Option<u32> {
        let mut idx = self.keys.partition_point(|&existing| existing <= key);
        let mut result = 0;
        while idx > 0 {
            result = result.max(self.tree[idx]);
            idx -= idx & idx.wrapping_neg();
        }

        result.checked_sub(1)
    }
}
