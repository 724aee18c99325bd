//! Implementation of the divide-and-conquer non-dominated sorting algorithm by Jensen, improved by
//! Fortin et al. and by Buzdalov and Shalyto. Time complexity is `O(N * (log N)^(M - 1))`, where
//! `N` is the number of points and `M` the number of objectives.
//!
//! Points are presorted lexicographically, so objective `0` is handled by the order of point indices.
//! The recursion splits point sets by the median of the current objective and goes down to two
//! objectives, which are resolved by a sweep over point indices backed by a rank query index.
//! Small subproblems may be passed to a base case algorithm, see [`BaseCaseStrategy`].

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/jfb/jfb_test.rs"]
mod jfb_test;

mod hybrid;
pub use self::hybrid::BaseCaseStrategy;
use self::hybrid::{Hybrid, HybridScratch};

mod threshold;
pub use self::threshold::{Threshold, ThresholdPolicy};

use crate::NonDominatedSorting;
use crate::algorithms::common::{IndexSorter, Presorter};
use crate::algorithms::rank_query::RankQueryIndex;
use crate::utils::*;

/// A minimal size of a subproblem which is worth running in parallel.
const PARALLEL_THRESHOLD: usize = 1024;

/// A point index with its current rank (a lower bound until the point is ranked).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slot {
    pub index: u32,
    pub rank: u32,
}

/// Coordinates of unique points compressed to dense integer ranks per objective, row by row.
/// Column `0` keeps the lexicographic position of a point.
#[derive(Default)]
pub(crate) struct KeyTable {
    keys: Vec<u32>,
    dimension: usize,
}

impl KeyTable {
    #[inline]
    pub fn key(&self, point: u32, obj: usize) -> u32 {
        self.keys[point as usize * self.dimension + obj]
    }

    /// Checks whether `a` dominates `b` taking into account objectives `0..=obj`.
    #[inline]
    pub fn dominates(&self, a: u32, b: u32, obj: usize) -> bool {
        if a >= b {
            return false;
        }

        let a = &self.keys[a as usize * self.dimension..];
        let b = &self.keys[b as usize * self.dimension..];

        (1..=obj).all(|obj| a[obj] <= b[obj])
    }
}

/// A non-dominated sorting by Jensen-Fortin-Buzdalov, parametrized by a rank query index.
pub struct JensenFortinBuzdalov<R: RankQueryIndex> {
    presorter: Presorter,
    sorter: IndexSorter,
    key_indices: Vec<u32>,
    keys: KeyTable,
    slots: Vec<Slot>,
    unique_ranks: Vec<u32>,
    scratch: Scratch<R>,
    hybrid: Hybrid,
    pool: Option<ThreadPool>,
}

impl<R: RankQueryIndex> JensenFortinBuzdalov<R> {
    /// Creates a new instance of `JensenFortinBuzdalov`. `allowed_threads` set to `None` means all
    /// available CPUs.
    pub fn new(
        max_points: usize,
        max_dimension: usize,
        strategy: BaseCaseStrategy,
        allowed_threads: Option<usize>,
    ) -> GenericResult<Self> {
        strategy.validate()?;

        let presorter = Presorter::new(max_points, max_dimension)?;
        let hybrid = Hybrid::new(strategy);
        let threads = resolve_threads(allowed_threads);
        let pool = if threads > 1 { Some(ThreadPool::new(threads)?) } else { None };

        Ok(Self {
            presorter,
            sorter: IndexSorter::default(),
            key_indices: vec![0; max_points],
            keys: KeyTable { keys: Vec::with_capacity(max_points * max_dimension), dimension: 0 },
            slots: vec![Slot::default(); max_points],
            unique_ranks: vec![0; max_points],
            scratch: Scratch::new(max_points, max_points, &hybrid),
            hybrid,
            pool,
        })
    }

    /// Returns threshold states of the base case strategy for `helper_a` and `helper_b` subproblems.
    pub fn thresholds(&self) -> (Option<&Threshold>, Option<&Threshold>) {
        self.hybrid.thresholds()
    }

    fn compress_coordinates(&mut self, n: usize, dimension: usize) {
        let unique = self.presorter.unique_points();
        let keys = &mut self.keys;
        keys.dimension = dimension;
        keys.keys.clear();
        keys.keys.resize(n * dimension, 0);

        (0..n).for_each(|point| keys.keys[point * dimension] = point as u32);

        for obj in 1..dimension {
            let indices = &mut self.key_indices[..n];
            fill_identity(indices);
            self.sorter.sort_by_key(indices, |point| unique.point(point as usize)[obj]);

            let mut rank = 0_u32;
            let mut last = unique.point(indices[0] as usize)[obj];
            for &point in indices.iter() {
                let value = unique.point(point as usize)[obj];
                if value != last {
                    rank += 1;
                    last = value;
                }
                keys.keys[point as usize * dimension + obj] = rank;
            }
        }
    }
}

impl<R: RankQueryIndex> NonDominatedSorting for JensenFortinBuzdalov<R> {
    fn name(&self) -> String {
        let threads = self.pool.as_ref().map_or(1, |pool| pool.num_threads());

        format!(
            "Jensen-Fortin-Buzdalov sweep ({} rank query, threads: {threads}, base case: {})",
            R::NAME,
            self.hybrid.strategy().name()
        )
    }

    fn maximum_points(&self) -> usize {
        self.presorter.maximum_points()
    }

    fn maximum_dimension(&self) -> usize {
        self.presorter.maximum_dimension()
    }

    fn sort_into(&mut self, points: &[Vec<Float>], ranks: &mut [usize], maximal_meaningful_rank: usize) -> GenericResult<()> {
        let Some(n) = self.presorter.prepare(points, ranks.len())? else {
            return Ok(());
        };

        let dimension = self.presorter.unique_points().dimension();
        if dimension == 1 {
            // NOTE distinct one-dimensional points form a chain
            self.unique_ranks[..n].iter_mut().zip(0_u32..).for_each(|(rank, position)| *rank = position);
        } else {
            self.compress_coordinates(n, dimension);

            let Self { keys, slots, unique_ranks, scratch, hybrid, pool, .. } = self;
            let slots = &mut slots[..n];
            slots.iter_mut().zip(0_u32..).for_each(|(slot, index)| *slot = Slot { index, rank: 0 });

            let context = Context { keys, hybrid, parallel: pool.is_some(), universe: n };
            match pool.as_ref() {
                Some(pool) => pool.execute(|| context.helper_a(slots, dimension - 1, scratch))?,
                None => context.helper_a(slots, dimension - 1, scratch),
            }

            slots.iter().for_each(|slot| unique_ranks[slot.index as usize] = slot.rank);
        }

        self.presorter.project_ranks(&self.unique_ranks[..n], ranks, maximal_meaningful_rank);

        Ok(())
    }
}

/// Working buffers of a recursion branch.
struct Scratch<R: RankQueryIndex> {
    temp: Vec<Slot>,
    values: Vec<u32>,
    rank_query: R,
    hybrid: HybridScratch,
}

impl<R: RankQueryIndex> Scratch<R> {
    fn new(capacity: usize, universe: usize, hybrid: &Hybrid) -> Self {
        Self {
            temp: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            rank_query: R::with_capacity(universe),
            hybrid: hybrid.create_scratch(capacity),
        }
    }
}

/// Read-only state shared by all recursion branches.
struct Context<'a> {
    keys: &'a KeyTable,
    hybrid: &'a Hybrid,
    parallel: bool,
    universe: usize,
}

impl Context<'_> {
    /// Ranks points of the slice taking into account objectives `0..=obj`. Objectives above `obj`
    /// have equal values for all points of the slice.
    fn helper_a<R: RankQueryIndex>(&self, slots: &mut [Slot], obj: usize, scratch: &mut Scratch<R>) {
        match slots.len() {
            0 | 1 => return,
            2 => {
                let (first, second) = (slots[0], slots[1]);
                if self.keys.dominates(first.index, second.index, obj) {
                    slots[1].rank = second.rank.max(first.rank + 1);
                }
                return;
            }
            _ => {}
        }

        if obj == 1 {
            self.sweep_a(slots, &mut scratch.rank_query);
            return;
        }

        if self.hybrid.helper_a(self.keys, slots, obj, &mut scratch.hybrid) {
            return;
        }

        let median = self.median(slots.iter(), obj, &mut scratch.values);
        let (less, equal) = self.split_by_median(slots, obj, median, &mut scratch.temp);
        let until_equal = less + equal;

        {
            let (left, rest) = slots.split_at_mut(less);
            let middle = &mut rest[..equal];

            self.helper_a(left, obj, scratch);
            self.helper_b(left, middle, obj - 1, scratch);
            self.helper_a(middle, obj - 1, scratch);
        }
        merge_by_index(&mut slots[..until_equal], less, &mut scratch.temp);

        {
            let (good, weak) = slots.split_at_mut(until_equal);
            self.helper_b(good, weak, obj - 1, scratch);
            self.helper_a(weak, obj, scratch);
        }
        merge_by_index(slots, until_equal, &mut scratch.temp);
    }

    /// Updates ranks of weak points by good points taking into account objectives `0..=obj`.
    /// Objectives above `obj` of any good point are not greater than of any weak point.
    fn helper_b<R: RankQueryIndex>(&self, good: &mut [Slot], weak: &mut [Slot], obj: usize, scratch: &mut Scratch<R>) {
        if good.is_empty() || weak.is_empty() {
            return;
        }

        if good.len() == 1 || weak.len() == 1 {
            self.update_weak_directly(good, weak, obj);
            return;
        }

        if obj == 1 {
            self.sweep_b(good, weak, &mut scratch.rank_query);
            return;
        }

        if self.hybrid.helper_b(self.keys, good, weak, obj, &mut scratch.hybrid) {
            return;
        }

        let median = self.median(good.iter().chain(weak.iter()), obj, &mut scratch.values);
        let (good_less, good_equal) = self.split_by_median(good, obj, median, &mut scratch.temp);
        let (weak_less, weak_equal) = self.split_by_median(weak, obj, median, &mut scratch.temp);
        let good_until_equal = good_less + good_equal;
        let weak_until_equal = weak_less + weak_equal;

        {
            let (good_left, good_right) = good.split_at_mut(good_less);
            let good_right = &mut good_right[good_equal..];
            let (weak_left, weak_right) = weak.split_at_mut(weak_less);
            let weak_right = &mut weak_right[weak_equal..];

            let size = good_left.len() + weak_left.len() + good_right.len() + weak_right.len();
            if self.parallel && size >= PARALLEL_THRESHOLD {
                let mut forked = Scratch::<R>::new(good_right.len() + weak_right.len(), self.universe, self.hybrid);
                join(
                    || self.helper_b(good_left, weak_left, obj, scratch),
                    || self.helper_b(good_right, weak_right, obj, &mut forked),
                );
            } else {
                self.helper_b(good_left, weak_left, obj, scratch);
                self.helper_b(good_right, weak_right, obj, scratch);
            }
        }

        merge_by_index(&mut good[..good_until_equal], good_less, &mut scratch.temp);
        merge_by_index(&mut weak[weak_less..], weak_equal, &mut scratch.temp);

        self.helper_b(&mut good[..good_until_equal], &mut weak[weak_less..], obj - 1, scratch);

        merge_by_index(good, good_until_equal, &mut scratch.temp);
        merge_by_index(weak, weak_less, &mut scratch.temp);
    }

    fn sweep_a<R: RankQueryIndex>(&self, slots: &mut [Slot], rank_query: &mut R) {
        rank_query.reset(slots.iter().map(|slot| self.keys.key(slot.index, 1)));

        slots.iter_mut().for_each(|slot| {
            let key = self.keys.key(slot.index, 1);
            slot.rank = rank_query.minimal_feasible_rank(key, slot.rank);
            rank_query.put(key, slot.rank);
        });
    }

    fn sweep_b<R: RankQueryIndex>(&self, good: &[Slot], weak: &mut [Slot], rank_query: &mut R) {
        rank_query.reset(good.iter().map(|slot| self.keys.key(slot.index, 1)));

        let mut good_idx = 0;
        weak.iter_mut().for_each(|slot| {
            while good_idx < good.len() && good[good_idx].index < slot.index {
                let good_slot = good[good_idx];
                rank_query.put(self.keys.key(good_slot.index, 1), good_slot.rank);
                good_idx += 1;
            }

            slot.rank = rank_query.minimal_feasible_rank(self.keys.key(slot.index, 1), slot.rank);
        });
    }

    fn update_weak_directly(&self, good: &[Slot], weak: &mut [Slot], obj: usize) {
        weak.iter_mut().for_each(|weak_slot| {
            for good_slot in good.iter().take_while(|good_slot| good_slot.index < weak_slot.index) {
                if good_slot.rank >= weak_slot.rank && self.keys.dominates(good_slot.index, weak_slot.index, obj) {
                    weak_slot.rank = good_slot.rank + 1;
                }
            }
        });
    }

    fn median<'a, I>(&self, slots: I, obj: usize, values: &mut Vec<u32>) -> u32
    where
        I: Iterator<Item = &'a Slot>,
    {
        values.clear();
        values.extend(slots.map(|slot| self.keys.key(slot.index, obj)));

        let mid = values.len() / 2;
        *values.select_nth_unstable(mid).1
    }

    /// Stable three-way partition of slots into groups with value less than, equal to and greater
    /// than the median. Returns sizes of the first two groups.
    fn split_by_median(&self, slots: &mut [Slot], obj: usize, median: u32, temp: &mut Vec<Slot>) -> (usize, usize) {
        temp.clear();

        let mut less = 0;
        for idx in 0..slots.len() {
            let slot = slots[idx];
            if self.keys.key(slot.index, obj) < median {
                slots[less] = slot;
                less += 1;
            } else {
                temp.push(slot);
            }
        }

        let mut position = less;
        for &slot in temp.iter().filter(|slot| self.keys.key(slot.index, obj) == median) {
            slots[position] = slot;
            position += 1;
        }
        let equal = position - less;

        for &slot in temp.iter().filter(|slot| self.keys.key(slot.index, obj) > median) {
            slots[position] = slot;
            position += 1;
        }

        (less, equal)
    }
}

/// Merges two sorted by point index runs `[..mid)` and `[mid..)` into one.
fn merge_by_index(slots: &mut [Slot], mid: usize, temp: &mut Vec<Slot>) {
    if mid == 0 || mid == slots.len() || slots[mid - 1].index < slots[mid].index {
        return;
    }

    temp.clear();
    temp.extend_from_slice(&slots[..mid]);

    let (mut left, mut right, mut target) = (0, mid, 0);
    while left < temp.len() && right < slots.len() {
        if temp[left].index < slots[right].index {
            slots[target] = temp[left];
            left += 1;
        } else {
            slots[target] = slots[right];
            right += 1;
        }
        target += 1;
    }

    while left < temp.len() {
        slots[target] = temp[left];
        left += 1;
        target += 1;
    }
}
