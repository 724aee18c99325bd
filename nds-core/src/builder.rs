//! Provides the way to configure and create a non-dominated sorting.

#[cfg(test)]
#[path = "../tests/unit/builder_test.rs"]
mod builder_test;

use crate::NonDominatedSorting;
use crate::algorithms::jfb::BaseCaseStrategy;
use crate::algorithms::rank_query::*;
use crate::algorithms::*;
use crate::utils::{GenericResult, InfoLogger};

/// Specifies a non-dominated sorting algorithm with its tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Algorithm {
    /// Divide-and-conquer sorting by Jensen, Fortin and Buzdalov, see [`JensenFortinBuzdalov`].
    JensenFortinBuzdalov {
        /// A backing structure of the rank query index used by the sweep.
        backing: RankQueryBacking,
        /// An algorithm used for small subproblems.
        hybrid: BaseCaseStrategy,
        /// Amount of threads allowed, `None` means all available CPUs.
        allowed_threads: Option<usize>,
    },
    /// Divide-and-conquer sorting which merges fronts, see [`DivideConquerNonDominatedSort`].
    DivideConquer {
        /// A search method of a target front.
        search: FrontSearch,
    },
    /// Sorting based on dominance trees, see [`DominanceTreeSort`].
    DominanceTree {
        /// A merge method of trees within one layer.
        layer_merge: LayerMerge,
    },
    /// Quadratic sorting as used by NSGA-II, see [`FastNonDominatedSort`].
    FastNonDominatedSort,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::JensenFortinBuzdalov {
            backing: RankQueryBacking::RedBlackTree,
            hybrid: BaseCaseStrategy::Dummy,
            allowed_threads: Some(1),
        }
    }
}

/// A builder for a non-dominated sorting.
pub struct NonDominatedSortingBuilder {
    max_points: usize,
    max_dimension: usize,
    algorithm: Algorithm,
    logger: Option<InfoLogger>,
}

impl NonDominatedSortingBuilder {
    /// Creates a new instance of `NonDominatedSortingBuilder` for sorters which accept up to
    /// `max_points` points of dimension up to `max_dimension`.
    pub fn new(max_points: usize, max_dimension: usize) -> Self {
        Self { max_points, max_dimension, algorithm: Algorithm::default(), logger: None }
    }

    /// Sets an algorithm. Default is a single threaded sweep with a red-black tree.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds a non-dominated sorting.
    pub fn build(self) -> GenericResult<Box<dyn NonDominatedSorting + Send>> {
        let (max_points, max_dimension) = (self.max_points, self.max_dimension);

        let sorting: Box<dyn NonDominatedSorting + Send> = match self.algorithm {
            Algorithm::JensenFortinBuzdalov { backing, hybrid, allowed_threads } => match backing {
                RankQueryBacking::RedBlackTree => Box::new(JensenFortinBuzdalov::<RedBlackTreeRankQuery>::new(
                    max_points,
                    max_dimension,
                    hybrid,
                    allowed_threads,
                )?),
                RankQueryBacking::Fenwick => Box::new(JensenFortinBuzdalov::<FenwickRankQuery>::new(
                    max_points,
                    max_dimension,
                    hybrid,
                    allowed_threads,
                )?),
                RankQueryBacking::IntegerSuccessor => Box::new(JensenFortinBuzdalov::<IntegerSuccessorRankQuery>::new(
                    max_points,
                    max_dimension,
                    hybrid,
                    allowed_threads,
                )?),
            },
            Algorithm::DivideConquer { search } => {
                Box::new(DivideConquerNonDominatedSort::new(max_points, max_dimension, search)?)
            }
            Algorithm::DominanceTree { layer_merge } => {
                Box::new(DominanceTreeSort::new(max_points, max_dimension, layer_merge)?)
            }
            Algorithm::FastNonDominatedSort => Box::new(FastNonDominatedSort::new(max_points, max_dimension)?),
        };

        if let Some(logger) = self.logger.as_ref() {
            (logger)(&format!(
                "configured to use {} for up to {max_points} points of dimension up to {max_dimension}",
                sorting.name()
            ));
        }

        Ok(sorting)
    }
}
