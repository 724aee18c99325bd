//! Base case strategies which replace the recursion on small subproblems.

#[cfg(test)]
#[path = "../../../../tests/unit/algorithms/jfb/hybrid_test.rs"]
mod hybrid_test;

mod ens;
use self::ens::ChainFronts;

mod linear;
use self::linear::PointList;

mod ndt;
use self::ndt::TreeFronts;

use super::threshold::{Threshold, ThresholdPolicy};
use super::{KeyTable, Slot};
use crate::utils::GenericResult;

/// Specifies an algorithm used for small subproblems of the recursion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BaseCaseStrategy {
    /// Never triggers: the recursion always goes down to the sweep.
    Dummy,
    /// Fast non-dominated sort which compares a point with every ranked point of the subproblem.
    LinearNds {
        /// A threshold policy for the subproblem which ranks points of one set.
        helper_a: ThresholdPolicy,
        /// A threshold policy for the subproblem which ranks points of one set against another.
        helper_b: ThresholdPolicy,
    },
    /// Efficient non-dominated sort with fronts kept as chains of points.
    Ens {
        /// A threshold policy for the subproblem which ranks points of one set.
        helper_a: ThresholdPolicy,
        /// A threshold policy for the subproblem which ranks points of one set against another.
        helper_b: ThresholdPolicy,
    },
    /// Efficient non-dominated sort with fronts kept as non-dominated trees.
    Ndt {
        /// A threshold policy for the subproblem which ranks points of one set.
        helper_a: ThresholdPolicy,
        /// A threshold policy for the subproblem which ranks points of one set against another.
        helper_b: ThresholdPolicy,
        /// A maximum size of a tree leaf.
        split_threshold: usize,
    },
}

impl BaseCaseStrategy {
    /// Checks whether the strategy is properly configured.
    pub fn validate(&self) -> GenericResult<()> {
        match self {
            Self::Dummy => Ok(()),
            Self::LinearNds { helper_a, helper_b } | Self::Ens { helper_a, helper_b } => {
                helper_a.validate().and_then(|_| helper_b.validate())
            }
            Self::Ndt { helper_a, helper_b, split_threshold } => {
                if *split_threshold == 0 {
                    return Err("split threshold of non-dominated tree should be positive".into());
                }
                helper_a.validate().and_then(|_| helper_b.validate())
            }
        }
    }

    /// Returns a human readable name of the strategy.
    pub fn name(&self) -> String {
        match self {
            Self::Dummy => "none".to_string(),
            Self::LinearNds { helper_a, helper_b } => format!("FNDS (A: {helper_a}, B: {helper_b})"),
            Self::Ens { helper_a, helper_b } => format!("ENS (A: {helper_a}, B: {helper_b})"),
            Self::Ndt { helper_a, helper_b, split_threshold } => {
                format!("NDT (A: {helper_a}, B: {helper_b}, split: {split_threshold})")
            }
        }
    }
}

/// A collection of fronts which answers "which rank should a point get given its lower bound".
pub(crate) trait FrontCollection {
    /// Removes all fronts, `obj` is the last objective taken into account.
    fn reset(&mut self, obj: usize);

    /// Adds a point with its final rank.
    fn add(&mut self, keys: &KeyTable, point: u32, rank: u32);

    /// Returns `max(lower_bound, 1 + max rank of a stored point dominating the given one)`.
    fn rank_lower_bound(&self, keys: &KeyTable, point: u32, lower_bound: u32) -> u32;
}

/// A scratch space of a base case algorithm.
pub(crate) enum HybridScratch {
    None,
    List(PointList),
    Chains(ChainFronts),
    Trees(TreeFronts),
}

/// A base case strategy bound to threshold states of a single sorter.
pub(crate) struct Hybrid {
    strategy: BaseCaseStrategy,
    threshold_a: Option<Threshold>,
    threshold_b: Option<Threshold>,
}

impl Hybrid {
    pub fn new(strategy: BaseCaseStrategy) -> Self {
        let (threshold_a, threshold_b) = match strategy {
            BaseCaseStrategy::Dummy => (None, None),
            BaseCaseStrategy::LinearNds { helper_a, helper_b }
            | BaseCaseStrategy::Ens { helper_a, helper_b }
            | BaseCaseStrategy::Ndt { helper_a, helper_b, .. } => {
                (Some(Threshold::new(helper_a)), Some(Threshold::new(helper_b)))
            }
        };

        Self { strategy, threshold_a, threshold_b }
    }

    pub fn strategy(&self) -> &BaseCaseStrategy {
        &self.strategy
    }

    pub fn thresholds(&self) -> (Option<&Threshold>, Option<&Threshold>) {
        (self.threshold_a.as_ref(), self.threshold_b.as_ref())
    }

    /// Creates a scratch space able to hold `capacity` points without reallocation.
    pub fn create_scratch(&self, capacity: usize) -> HybridScratch {
        match self.strategy {
            BaseCaseStrategy::Dummy => HybridScratch::None,
            BaseCaseStrategy::LinearNds { .. } => HybridScratch::List(PointList::with_capacity(capacity)),
            BaseCaseStrategy::Ens { .. } => HybridScratch::Chains(ChainFronts::with_capacity(capacity)),
            BaseCaseStrategy::Ndt { split_threshold, .. } => {
                HybridScratch::Trees(TreeFronts::new(split_threshold, capacity))
            }
        }
    }

    /// Ranks points of the slice if the threshold allows it. Returns false if nothing was done.
    pub fn helper_a(&self, keys: &KeyTable, slots: &mut [Slot], obj: usize, scratch: &mut HybridScratch) -> bool {
        if !self.threshold_a.as_ref().is_some_and(|threshold| threshold.should_use_base_case(slots.len(), obj)) {
            return false;
        }

        match scratch {
            HybridScratch::None => return false,
            HybridScratch::List(fronts) => rank_slots(fronts, keys, slots, obj),
            HybridScratch::Chains(fronts) => rank_slots(fronts, keys, slots, obj),
            HybridScratch::Trees(fronts) => rank_slots(fronts, keys, slots, obj),
        }

        true
    }

    /// Updates ranks of weak points by good points if the threshold allows it. Returns false if
    /// nothing was done.
    pub fn helper_b(
        &self,
        keys: &KeyTable,
        good: &[Slot],
        weak: &mut [Slot],
        obj: usize,
        scratch: &mut HybridScratch,
    ) -> bool {
        let size = good.len() + weak.len();
        if !self.threshold_b.as_ref().is_some_and(|threshold| threshold.should_use_base_case(size, obj)) {
            return false;
        }

        match scratch {
            HybridScratch::None => return false,
            HybridScratch::List(fronts) => update_weak_slots(fronts, keys, good, weak, obj),
            HybridScratch::Chains(fronts) => update_weak_slots(fronts, keys, good, weak, obj),
            HybridScratch::Trees(fronts) => update_weak_slots(fronts, keys, good, weak, obj),
        }

        true
    }
}

fn rank_slots<F: FrontCollection>(fronts: &mut F, keys: &KeyTable, slots: &mut [Slot], obj: usize) {
    fronts.reset(obj);
    slots.iter_mut().for_each(|slot| {
        slot.rank = fronts.rank_lower_bound(keys, slot.index, slot.rank);
        fronts.add(keys, slot.index, slot.rank);
    });
}

fn update_weak_slots<F: FrontCollection>(fronts: &mut F, keys: &KeyTable, good: &[Slot], weak: &mut [Slot], obj: usize) {
    fronts.reset(obj);
    good.iter().for_each(|slot| fronts.add(keys, slot.index, slot.rank));
    weak.iter_mut().for_each(|slot| slot.rank = fronts.rank_lower_bound(keys, slot.index, slot.rank));
}
