//! Implementation of the [Fast Non-Dominated Sort Algorithm][1] as used by NSGA-II.
//! Time complexity is `O(M * N^2)`, where `M` is the number of objectives and `N` the number of
//! unique points.
//!
//! [1]: https://www.iitk.ac.in/kangal/Deb_NSGA-II.pdf "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II)"

#[cfg(test)]
#[path = "../../tests/unit/algorithms/fnds_test.rs"]
mod fnds_test;

use crate::NonDominatedSorting;
use crate::algorithms::common::{Presorter, strictly_dominates_assuming_lexicographically_smaller};
use crate::utils::*;

/// A quadratic non-dominated sorting which counts dominators of every point and peels fronts one
/// by one.
pub struct FastNonDominatedSort {
    presorter: Presorter,
    // the indices of the points that are dominated by the point, lists keep their capacity
    // between calls and grow only for a batch with more dominance pairs than the previous ones
    dominated_points: Vec<Vec<u32>>,
    // the number of points that dominate the point
    domination_count: Vec<u32>,
    current_front: Vec<u32>,
    next_front: Vec<u32>,
    unique_ranks: Vec<u32>,
}

impl FastNonDominatedSort {
    /// Creates a new instance of `FastNonDominatedSort`.
    pub fn new(max_points: usize, max_dimension: usize) -> GenericResult<Self> {
        Ok(Self {
            presorter: Presorter::new(max_points, max_dimension)?,
            dominated_points: vec![Vec::new(); max_points],
            domination_count: vec![0; max_points],
            current_front: Vec::with_capacity(max_points),
            next_front: Vec::with_capacity(max_points),
            unique_ranks: vec![0; max_points],
        })
    }
}

impl NonDominatedSorting for FastNonDominatedSort {
    fn name(&self) -> String {
        "Fast Non-Dominated Sorting".to_string()
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
        let max_obj = unique.dimension() - 1;

        self.dominated_points[..n].iter_mut().for_each(|dominated| dominated.clear());
        self.domination_count[..n].iter_mut().for_each(|count| *count = 0);
        self.current_front.clear();
        // NOTE points left unranked are reported with the sentinel rank
        self.unique_ranks[..n].iter_mut().for_each(|rank| *rank = u32::MAX);

        // NOTE unique points are lexicographically sorted, so only a preceding point can dominate
        for q_i in 0..n {
            let q = unique.point(q_i);
            for p_i in 0..q_i {
                if strictly_dominates_assuming_lexicographically_smaller(unique.point(p_i), q, max_obj) {
                    self.dominated_points[p_i].push(q_i as u32);
                    self.domination_count[q_i] += 1;
                }
            }

            if self.domination_count[q_i] == 0 {
                self.current_front.push(q_i as u32);
            }
        }

        let max_rank = maximal_meaningful_rank.min(u32::MAX as usize - 1) as u32;
        let mut rank = 0_u32;
        while !self.current_front.is_empty() {
            self.next_front.clear();

            for &p_i in self.current_front.iter() {
                self.unique_ranks[p_i as usize] = rank;

                for &q_i in self.dominated_points[p_i as usize].iter() {
                    let count = &mut self.domination_count[q_i as usize];
                    *count -= 1;
                    if *count == 0 {
                        self.next_front.push(q_i);
                    }
                }
            }

            std::mem::swap(&mut self.current_front, &mut self.next_front);
            rank += 1;

            if rank > max_rank {
                break;
            }
        }

        self.presorter.project_ranks(&self.unique_ranks[..n], ranks, maximal_meaningful_rank);

        Ok(())
    }
}
