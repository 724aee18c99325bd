//! Named algorithm configurations which are known to perform well.

#[cfg(test)]
#[path = "../tests/unit/presets_test.rs"]
mod presets_test;

use crate::algorithms::jfb::{BaseCaseStrategy, ThresholdPolicy};
use crate::algorithms::rank_query::RankQueryBacking;
use crate::algorithms::{FrontSearch, LayerMerge};
use crate::builder::Algorithm;
use crate::utils::Float;

const CONSTANT_100: ThresholdPolicy = ThresholdPolicy::Constant(100);
const CONSTANT_200: ThresholdPolicy = ThresholdPolicy::Constant(200);
const CONSTANT_20000: ThresholdPolicy = ThresholdPolicy::Constant(20000);

const DYNAMIC_100: ThresholdPolicy = ThresholdPolicy::Dynamic(100);
const DYNAMIC_200: ThresholdPolicy = ThresholdPolicy::Dynamic(200);

const GROWTH_SMALL: Float = 1.000001;
const GROWTH_LARGE: Float = 1.0001;

/// Specifies how thresholds of a hybrid base case are tuned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tuning {
    /// Constant thresholds.
    None,
    /// Thresholds depending on the subproblem size.
    Dynamic,
    /// Dynamic thresholds which slowly grow every time the base case is used.
    AdjustableSmall,
    /// Dynamic thresholds which grow faster every time the base case is used.
    AdjustableLarge,
}

/// A sweep with a red-black tree rank query index.
pub fn red_black_tree_sweep(allowed_threads: Option<usize>) -> Algorithm {
    jfb(RankQueryBacking::RedBlackTree, BaseCaseStrategy::Dummy, allowed_threads)
}

/// A sweep with a Fenwick tree rank query index.
pub fn fenwick_sweep(allowed_threads: Option<usize>) -> Algorithm {
    jfb(RankQueryBacking::Fenwick, BaseCaseStrategy::Dummy, allowed_threads)
}

/// A single threaded sweep with an integer successor rank query index.
pub fn integer_successor_sweep() -> Algorithm {
    jfb(RankQueryBacking::IntegerSuccessor, BaseCaseStrategy::Dummy, Some(1))
}

/// A sweep with a red-black tree rank query index and fast non-dominated sort base case.
pub fn red_black_tree_sweep_hybrid_fnds(allowed_threads: Option<usize>) -> Algorithm {
    jfb(RankQueryBacking::RedBlackTree, linear_nds(), allowed_threads)
}

/// A single threaded sweep with an integer successor rank query index and ENS base case.
pub fn integer_successor_hybrid_ens() -> Algorithm {
    jfb(RankQueryBacking::IntegerSuccessor, ens(Tuning::None), Some(1))
}

/// A single threaded sweep with an integer successor rank query index and NDT base case.
pub fn integer_successor_hybrid_ndt(split_threshold: usize) -> Algorithm {
    jfb(RankQueryBacking::IntegerSuccessor, ndt(Tuning::None, split_threshold), Some(1))
}

/// A sweep with a red-black tree rank query index and ENS base case.
pub fn red_black_tree_sweep_hybrid_ens(tuning: Tuning, allowed_threads: Option<usize>) -> Algorithm {
    jfb(RankQueryBacking::RedBlackTree, ens(tuning), allowed_threads)
}

/// A sweep with a red-black tree rank query index and NDT base case.
pub fn red_black_tree_sweep_hybrid_ndt(tuning: Tuning, split_threshold: usize, allowed_threads: Option<usize>) -> Algorithm {
    jfb(RankQueryBacking::RedBlackTree, ndt(tuning, split_threshold), allowed_threads)
}

/// A front-merging divide-and-conquer with sequential search.
pub fn divide_conquer_sequential_search() -> Algorithm {
    Algorithm::DivideConquer { search: FrontSearch::Sequential }
}

/// A front-merging divide-and-conquer with binary search.
pub fn divide_conquer_binary_search() -> Algorithm {
    Algorithm::DivideConquer { search: FrontSearch::Binary }
}

/// Dominance trees with recursive merge of layers.
pub fn dominance_tree_recursive() -> Algorithm {
    Algorithm::DominanceTree { layer_merge: LayerMerge::Recursive }
}

/// Dominance trees with sequential merge of layers.
pub fn dominance_tree_sequential() -> Algorithm {
    Algorithm::DominanceTree { layer_merge: LayerMerge::Sequential }
}

fn jfb(backing: RankQueryBacking, hybrid: BaseCaseStrategy, allowed_threads: Option<usize>) -> Algorithm {
    Algorithm::JensenFortinBuzdalov { backing, hybrid, allowed_threads }
}

fn linear_nds() -> BaseCaseStrategy {
    BaseCaseStrategy::LinearNds { helper_a: CONSTANT_100, helper_b: CONSTANT_200 }
}

fn ens(tuning: Tuning) -> BaseCaseStrategy {
    let (helper_a, helper_b) = policies(tuning, CONSTANT_200);

    BaseCaseStrategy::Ens { helper_a, helper_b }
}

fn ndt(tuning: Tuning, split_threshold: usize) -> BaseCaseStrategy {
    let (helper_a, helper_b) = policies(tuning, CONSTANT_20000);

    BaseCaseStrategy::Ndt { helper_a, helper_b, split_threshold }
}

fn policies(tuning: Tuning, constant_b: ThresholdPolicy) -> (ThresholdPolicy, ThresholdPolicy) {
    let adjustable = |growth| {
        (
            ThresholdPolicy::DynamicAdjustable { base: 100, growth },
            ThresholdPolicy::DynamicAdjustable { base: 200, growth },
        )
    };

    match tuning {
        Tuning::None => (CONSTANT_100, constant_b),
        Tuning::Dynamic => (DYNAMIC_100, DYNAMIC_200),
        Tuning::AdjustableSmall => adjustable(GROWTH_SMALL),
        Tuning::AdjustableLarge => adjustable(GROWTH_LARGE),
    }
}
