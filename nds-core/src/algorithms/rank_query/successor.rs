use super::RankQueryIndex;

/// A van Emde Boas style successor set over `0..universe`: a hierarchy of 64-bit words where a bit on
/// level `l + 1` tells whether the corresponding word on level `l` is non-empty.
struct SuccessorSet {
    levels: Vec<Vec<u64>>,
}

impl SuccessorSet {
    fn new(universe: usize) -> Self {
        let mut levels = Vec::new();
        let mut size = universe.max(1);
        loop {
            let words = size.div_ceil(64);
            levels.push(vec![0_u64; words]);
            if words == 1 {
                break;
            }
            size = words;
        }

        Self { levels }
    }

    fn insert(&mut self, key: u32) {
        let mut key = key as usize;
        for level in self.levels.iter_mut() {
            let word = &mut level[key >> 6];
            let was_empty = *word == 0;
            *word |= 1_u64 << (key & 63);
            if !was_empty {
                break;
            }
            key >>= 6;
        }
    }

    fn remove(&mut self, key: u32) {
        let mut key = key as usize;
        for level in self.levels.iter_mut() {
            let word = &mut level[key >> 6];
            *word &= !(1_u64 << (key & 63));
            if *word != 0 {
                break;
            }
            key >>= 6;
        }
    }

    /// Returns the largest element which is not greater than `key`.
    fn prev(&self, key: u32) -> Option<u32> {
        self.prev_at(0, key as usize).map(|key| key as u32)
    }

    /// Returns the smallest element which is greater than `key`.
    fn next(&self, key: u32) -> Option<u32> {
        self.next_at(0, key as usize).map(|key| key as u32)
    }

    fn prev_at(&self, level: usize, key: usize) -> Option<usize> {
        let (word, bit) = (key >> 6, key & 63);
        let masked = self.levels[level][word] & (u64::MAX >> (63 - bit));
        if masked != 0 {
            return Some((word << 6) | (63 - masked.leading_zeros() as usize));
        }
        if word == 0 {
            return None;
        }

        let word = self.prev_at(level + 1, word - 1)?;
        let bits = self.levels[level][word];

        Some((word << 6) | (63 - bits.leading_zeros() as usize))
    }

    fn next_at(&self, level: usize, key: usize) -> Option<usize> {
        let (word, bit) = (key >> 6, key & 63);
        let masked = if bit == 63 { 0 } else { self.levels[level][word] & (u64::MAX << (bit + 1)) };
        if masked != 0 {
            return Some((word << 6) | masked.trailing_zeros() as usize);
        }
        if level + 1 == self.levels.len() {
            return None;
        }

        let word = self.next_at(level + 1, word)?;
        let bits = self.levels[level][word];

        Some((word << 6) | bits.trailing_zeros() as usize)
    }
}

/// Keeps a staircase of `(key, rank)` pairs in an integer successor set: ranks strictly increase
/// with keys, so the answer to a prefix query is the rank of the predecessor. Insertion removes
/// successors which are no longer needed, amortized `O(log64 U)` per operation.
pub struct IntegerSuccessorRankQuery {
    set: SuccessorSet,
    ranks: Vec<u32>,
    first: Option<u32>,
}

impl RankQueryIndex for IntegerSuccessorRankQuery {
    const NAME: &'static str = "integer successor";

    fn with_capacity(universe: usize) -> Self {
        Self { set: SuccessorSet::new(universe), ranks: vec![0; universe.max(1)], first: None }
    }

    fn reset<I>(&mut self, _keys: I)
    where
        I: Iterator<Item = u32>,
    {
        // NOTE only inserted keys are cleared, so reset is proportional to the previous sweep
        let mut current = self.first.take();
        while let Some(key) = current {
            current = self.set.next(key);
            self.set.remove(key);
        }
    }

    fn put(&mut self, key: u32, rank: u32) {
        if self.max_rank_at_most(key).is_some_and(|existing| existing >= rank) {
            return;
        }

        self.set.insert(key);
        self.ranks[key as usize] = rank;
        if self.first.is_none_or(|first| key < first) {
            self.first = Some(key);
        }

        while let Some(next) = self.set.next(key) {
            if self.ranks[next as usize] > rank {
                break;
            }
            self.set.remove(next);
        }
    }

    fn max_rank_at_most(&self, key: u32) -> Option<u32> {
        self.set.prev(key).map(|key| self.ranks[key as usize])
    }
}
