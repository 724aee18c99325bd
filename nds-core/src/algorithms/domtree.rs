//! Implementation of the non-dominated sorting based on dominance trees with presorting and delayed
//! insertion, see [Fang et al.][1] and [Buzdalov et al.][2].
//!
//! A dominance tree is a chain of mutually non-dominating nodes, where every node owns a dominance
//! tree of points it dominates. Once all points are merged into a single tree, ranks are assigned
//! layer by layer: the top chain is a front, children of its nodes are merged into the next tree.
//!
//! [1]: https://doi.org/10.1007/s00500-007-0210-5 "An efficient non-dominated sorting method for evolutionary algorithms"
//! [2]: https://doi.org/10.1007/978-3-319-99253-2_22 "Dominance trees revisited"

#[cfg(test)]
#[path = "../../tests/unit/algorithms/domtree_test.rs"]
mod domtree_test;

use crate::NonDominatedSorting;
use crate::algorithms::common::{Presorter, UniquePoints, strictly_dominates_assuming_lexicographically_smaller};
use crate::utils::*;

/// Specifies how trees of one layer are merged together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerMerge {
    /// Trees are merged pairwise by halving the layer.
    Recursive,
    /// Trees are merged one by one into an accumulated tree.
    Sequential,
}

/// A non-dominated sorting based on dominance trees.
pub struct DominanceTreeSort {
    presorter: Presorter,
    layer_merge: LayerMerge,
    forest: Forest,
    layer: Vec<u32>,
    unique_ranks: Vec<u32>,
}

impl DominanceTreeSort {
    /// Creates a new instance of `DominanceTreeSort`.
    pub fn new(max_points: usize, max_dimension: usize, layer_merge: LayerMerge) -> GenericResult<Self> {
        Ok(Self {
            presorter: Presorter::new(max_points, max_dimension)?,
            layer_merge,
            forest: Forest::new(max_points),
            layer: Vec::with_capacity(max_points),
            unique_ranks: vec![0; max_points],
        })
    }
}

impl NonDominatedSorting for DominanceTreeSort {
    fn name(&self) -> String {
        let merge = match self.layer_merge {
            LayerMerge::Recursive => "recursive",
            LayerMerge::Sequential => "sequential",
        };

        format!("Dominance Tree (presort, {merge} merge, delayed insertion)")
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
        let forest = &mut self.forest;
        let layer = &mut self.layer;
        let unique_ranks = &mut self.unique_ranks[..n];

        forest.reset(n);
        unique_ranks.iter_mut().for_each(|rank| *rank = u32::MAX);

        layer.clear();
        layer.extend(0..n as u32);
        let mut tree = forest.merge_recursively(unique, layer.as_slice());

        let mut rank = 0_usize;
        while tree != NONE {
            layer.clear();

            let mut node = tree;
            while node != NONE {
                unique_ranks[node as usize] = rank as u32;
                let child = forest.child[node as usize];
                if child != NONE {
                    layer.push(child);
                }
                node = forest.next[node as usize];
            }

            if rank >= maximal_meaningful_rank {
                // NOTE deeper points are reported with the sentinel rank
                break;
            }

            tree = match self.layer_merge {
                LayerMerge::Recursive => forest.merge_recursively(unique, layer.as_slice()),
                LayerMerge::Sequential => forest.merge_sequentially(unique, layer.as_slice()),
            };
            rank += 1;
        }

        self.presorter.project_ranks(unique_ranks, ranks, maximal_meaningful_rank);

        Ok(())
    }
}

/// Dominance trees over unique points stored in an arena: node `i` represents the point `i`.
struct Forest {
    next: Vec<u32>,
    child: Vec<u32>,
    // delayed merges of excised chains into children of a dominating node
    pending: Vec<(u32, u32)>,
}

impl Forest {
    fn new(max_points: usize) -> Self {
        Self { next: vec![NONE; max_points], child: vec![NONE; max_points], pending: Vec::with_capacity(max_points) }
    }

    fn reset(&mut self, n: usize) {
        self.next[..n].iter_mut().for_each(|next| *next = NONE);
        self.child[..n].iter_mut().for_each(|child| *child = NONE);
        self.pending.clear();
    }

    fn merge_recursively(&mut self, points: &UniquePoints, trees: &[u32]) -> u32 {
        match trees.len() {
            0 => NONE,
            1 => trees[0],
            len => {
                let (left, right) = trees.split_at(len / 2);
                let left = self.merge_recursively(points, left);
                let right = self.merge_recursively(points, right);

                self.merge(points, left, right)
            }
        }
    }

    fn merge_sequentially(&mut self, points: &UniquePoints, trees: &[u32]) -> u32 {
        trees.iter().fold(NONE, |merged, &tree| self.merge(points, merged, tree))
    }

    /// Merges two trees and all the child trees affected by that.
    fn merge(&mut self, points: &UniquePoints, a: u32, b: u32) -> u32 {
        let head = self.merge_chains(points, a, b);

        while let Some((node, chain)) = self.pending.pop() {
            let child = self.child[node as usize];
            self.child[node as usize] = self.merge_chains(points, child, chain);
        }

        head
    }

    /// Merges two chains sorted by node index into one. Nodes dominated by a node of another chain
    /// are excised and scheduled to be merged into its children.
    fn merge_chains(&mut self, points: &UniquePoints, mut a: u32, mut b: u32) -> u32 {
        if a == NONE {
            return b;
        }

        if b == NONE {
            return a;
        }

        let (mut head, mut tail) = (NONE, NONE);
        while a != NONE && b != NONE {
            let taken = if a < b {
                b = self.excise_dominated(points, a, b);
                let taken = a;
                a = self.next[taken as usize];
                taken
            } else {
                a = self.excise_dominated(points, b, a);
                let taken = b;
                b = self.next[taken as usize];
                taken
            };

            self.next[taken as usize] = NONE;
            if tail == NONE {
                head = taken;
            } else {
                self.next[tail as usize] = taken;
            }
            tail = taken;
        }

        self.next[tail as usize] = if a != NONE { a } else { b };

        head
    }

    /// Removes nodes dominated by `main` from the chain starting at `other`, which holds only nodes
    /// with greater index. Returns a new head of the chain.
    fn excise_dominated(&mut self, points: &UniquePoints, main: u32, other: u32) -> u32 {
        let main_point = points.point(main as usize);
        let max_obj = points.dimension() - 1;

        let (mut head, mut prev) = (NONE, NONE);
        let (mut excised_head, mut excised_tail) = (NONE, NONE);
        let mut current = other;

        while current != NONE {
            let following = self.next[current as usize];

            if strictly_dominates_assuming_lexicographically_smaller(main_point, points.point(current as usize), max_obj) {
                self.next[current as usize] = NONE;
                if excised_tail == NONE {
                    excised_head = current;
                } else {
                    self.next[excised_tail as usize] = current;
                }
                excised_tail = current;

                if prev != NONE {
                    self.next[prev as usize] = following;
                }
            } else {
                if head == NONE {
                    head = current;
                }
                prev = current;
            }

            current = following;
        }

        if excised_head != NONE {
            self.pending.push((main, excised_head));
        }

        head
    }
}
