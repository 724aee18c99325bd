//! Implementation of the divide-and-conquer non-dominated sorting which merges fronts of adjacent
//! blocks of lexicographically sorted points, see [Mishra et al.][1].
//!
//! [1]: https://doi.org/10.1109/CEC.2016.7744218 "Divide and Conquer Based Non-Dominated Sorting"

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dcns_test.rs"]
mod dcns_test;

use crate::NonDominatedSorting;
use crate::algorithms::common::{Presorter, UniquePoints, strictly_dominates_assuming_not_same};
use crate::utils::*;

/// Specifies how a target front for an inserted point is searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontSearch {
    /// Fronts are checked one by one starting from the lowest feasible one.
    Sequential,
    /// Fronts are bisected, as dominance by a front is monotonic across fronts.
    Binary,
}

/// A non-dominated sorting which merges fronts of blocks pairwise in a bottom-up manner.
pub struct DivideConquerNonDominatedSort {
    presorter: Presorter,
    search: FrontSearch,
    fronts: Fronts,
    unique_ranks: Vec<u32>,
}

impl DivideConquerNonDominatedSort {
    /// Creates a new instance of `DivideConquerNonDominatedSort`.
    pub fn new(max_points: usize, max_dimension: usize, search: FrontSearch) -> GenericResult<Self> {
        Ok(Self {
            presorter: Presorter::new(max_points, max_dimension)?,
            search,
            fronts: Fronts::new(max_points),
            unique_ranks: vec![0; max_points],
        })
    }
}

impl NonDominatedSorting for DivideConquerNonDominatedSort {
    fn name(&self) -> String {
        match self.search {
            FrontSearch::Sequential => "DCNS-SS".to_string(),
            FrontSearch::Binary => "DCNS-BS".to_string(),
        }
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

        let unique = self.presorter.unique_points();
        let context = MergeContext { points: unique, max_obj: unique.dimension() - 1, search: self.search };

        self.fronts.reset(n);
        for level in 0..log2_up(n) {
            let delta = 1 << level;
            let mut left = 0;
            while left + delta < n {
                let middle = left + delta;
                self.fronts.merge(&context, left, middle, n);
                left = middle + delta;
            }
        }

        self.fronts.assign_ranks(&mut self.unique_ranks[..n]);
        self.presorter.project_ranks(&self.unique_ranks[..n], ranks, maximal_meaningful_rank);

        Ok(())
    }
}

struct MergeContext<'a> {
    points: &'a UniquePoints,
    max_obj: usize,
    search: FrontSearch,
}

/// Fronts of all blocks stored as linked chains of point indices. A block starting at `l` keeps its
/// `k`-th front at `first[l + k]`, the list of fronts is terminated by `NONE`.
struct Fronts {
    first: Vec<u32>,
    next: Vec<u32>,
    found_ranks: Vec<usize>,
    found_points: Vec<u32>,
}

impl Fronts {
    fn new(max_points: usize) -> Self {
        Self {
            first: vec![NONE; max_points],
            next: vec![NONE; max_points],
            found_ranks: Vec::with_capacity(max_points),
            found_points: Vec::with_capacity(max_points),
        }
    }

    fn reset(&mut self, n: usize) {
        self.first[..n].iter_mut().zip(0_u32..).for_each(|(first, index)| *first = index);
        self.next[..n].iter_mut().for_each(|next| *next = NONE);
    }

    /// Merges fronts of the block `[middle, min(n, 2 * middle - left))` into fronts of the block
    /// `[left, middle)`.
    fn merge(&mut self, context: &MergeContext, left: usize, middle: usize, n: usize) {
        let right = n.min(middle + middle - left);

        let mut target_until = left;
        while target_until < middle && self.first[target_until] != NONE {
            target_until += 1;
        }

        // the lowest target front an inserted front is allowed to go
        let mut min_target = left;
        for inserted in middle..right {
            let inserted_start = self.first[inserted];
            if inserted_start == NONE {
                break;
            }
            self.first[inserted] = NONE;

            if min_target == target_until {
                self.first[target_until] = inserted_start;
                target_until += 1;
                min_target = target_until;
                continue;
            }

            // find ranks first, do not integrate points into target fronts yet
            self.found_ranks.clear();
            self.found_points.clear();
            let mut index = inserted_start;
            while index != NONE {
                let rank = self.find_rank(context, min_target, target_until, context.points.point(index as usize));
                self.found_ranks.push(rank);
                self.found_points.push(index);
                index = self.next[index as usize];
            }

            // integrate points starting from the last tested one
            let mut lowest = target_until;
            for (&index, &rank) in self.found_points.iter().zip(self.found_ranks.iter()).rev() {
                if rank == target_until {
                    target_until += 1;
                }
                self.next[index as usize] = self.first[rank];
                self.first[rank] = index;
                lowest = lowest.min(rank);
            }
            min_target = lowest + 1;
        }

        if target_until < right {
            self.first[target_until] = NONE;
        }
    }

    fn find_rank(&self, context: &MergeContext, from: usize, until: usize, point: &[Float]) -> usize {
        match context.search {
            FrontSearch::Sequential => {
                (from..until).find(|&target| self.is_not_dominated_by(context, target, point)).unwrap_or(until)
            }
            FrontSearch::Binary => {
                if self.is_not_dominated_by(context, from, point) {
                    return from;
                }

                let (mut from, mut until) = (from, until);
                while until - from > 1 {
                    let middle = (from + until) / 2;
                    if self.is_not_dominated_by(context, middle, point) {
                        until = middle;
                    } else {
                        from = middle;
                    }
                }

                until
            }
        }
    }

    /// Checks every member of the target front: it may hold lexicographically larger points merged
    /// from the right block, so no member can be skipped.
    fn is_not_dominated_by(&self, context: &MergeContext, target: usize, point: &[Float]) -> bool {
        let mut index = self.first[target];
        while index != NONE {
            if strictly_dominates_assuming_not_same(context.points.point(index as usize), point, context.max_obj) {
                return false;
            }
            index = self.next[index as usize];
        }

        true
    }

    fn assign_ranks(&self, unique_ranks: &mut [u32]) {
        let n = unique_ranks.len();
        for (rank, &first) in self.first[..n].iter().enumerate().take_while(|(_, first)| **first != NONE) {
            let mut index = first;
            while index != NONE {
                unique_ranks[index as usize] = rank as u32;
                index = self.next[index as usize];
            }
        }
    }
}
