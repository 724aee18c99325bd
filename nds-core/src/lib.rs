//! This crate exposes non-dominated sorting (Pareto front ranking) algorithms for sets of
//! multidimensional points.
//!
//! Every engine implements [`NonDominatedSorting`]: a sorter is created for a fixed maximum amount of
//! points and dimension, then it can be used repeatedly without reallocation. Points are minimized
//! in all objectives, a point gets the index of its front: zero for points dominated by nothing.
//!
//! # Examples
//!
//! ```
//! use nds_core::prelude::*;
//!
//! let mut sorting = NonDominatedSortingBuilder::new(3, 2).build().unwrap();
//! let ranks = sorting.sort(&[vec![1., 1.], vec![2., 2.], vec![0., 3.]], usize::MAX).unwrap();
//!
//! assert_eq!(ranks, vec![0, 1, 0]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod builder;
pub mod datasets;
pub mod prelude;
pub mod presets;
pub mod utils;

use crate::utils::{Float, GenericResult};

/// Represents a non-dominated sorting algorithm.
pub trait NonDominatedSorting {
    /// Returns a human readable name of the algorithm.
    fn name(&self) -> String;

    /// Returns the maximum amount of points the sorter accepts.
    fn maximum_points(&self) -> usize;

    /// Returns the maximum dimension of points the sorter accepts.
    fn maximum_dimension(&self) -> usize;

    /// Sorts points and writes their ranks into `ranks`, one rank per point in input order.
    /// Ranks greater than `maximal_meaningful_rank` are reported as `maximal_meaningful_rank + 1`.
    ///
    /// All points should have the same dimension and finite coordinates. An empty input is valid.
    fn sort_into(&mut self, points: &[Vec<Float>], ranks: &mut [usize], maximal_meaningful_rank: usize) -> GenericResult<()>;

    /// Sorts points and returns their ranks, see [`NonDominatedSorting::sort_into`].
    fn sort(&mut self, points: &[Vec<Float>], maximal_meaningful_rank: usize) -> GenericResult<Vec<usize>> {
        let mut ranks = vec![0; points.len()];
        self.sort_into(points, &mut ranks, maximal_meaningful_rank)?;

        Ok(ranks)
    }
}
