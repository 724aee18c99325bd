use super::RankQueryIndex;
use crate::utils::NONE;

struct Node {
    key: u32,
    rank: u32,
    // NOTE the maximum rank in the subtree rooted at this node
    max_rank: u32,
    left: u32,
    right: u32,
    is_red: bool,
}

/// A left-leaning red-black tree keyed by the key, stored in an arena. Every node keeps the maximum
/// rank of its subtree, so prefix queries skip whole subtrees.
pub struct RedBlackTreeRankQuery {
    nodes: Vec<Node>,
    root: u32,
}

impl RankQueryIndex for RedBlackTreeRankQuery {
    const NAME: &'static str = "red-black tree";

    fn with_capacity(universe: usize) -> Self {
        Self { nodes: Vec::with_capacity(universe), root: NONE }
    }

    fn reset<I>(&mut self, _keys: I)
    where
        I: Iterator<Item = u32>,
    {
        self.nodes.clear();
        self.root = NONE;
    }

    fn put(&mut self, key: u32, rank: u32) {
        self.root = self.insert(self.root, key, rank);
        self.nodes[self.root as usize].is_red = false;
    }

    fn max_rank_at_most(&self, key: u32) -> Option<u32> {
        let mut result: Option<u32> = None;
        let mut current = self.root;

        while current != NONE {
            let node = &self.nodes[current as usize];
            if node.key <= key {
                let left_max = self.max_rank(node.left).unwrap_or(0);
                let candidate = node.rank.max(left_max);
                result = Some(result.map_or(candidate, |result| result.max(candidate)));
                current = node.right;
            } else {
                current = node.left;
            }
        }

        result
    }
}

impl RedBlackTreeRankQuery {
    fn insert(&mut self, node: u32, key: u32, rank: u32) -> u32 {
        if node == NONE {
            self.nodes.push(Node { key, rank, max_rank: rank, left: NONE, right: NONE, is_red: true });
            return (self.nodes.len() - 1) as u32;
        }

        let existing = self.nodes[node as usize].key;
        if key < existing {
            let left = self.insert(self.nodes[node as usize].left, key, rank);
            self.nodes[node as usize].left = left;
        } else if key > existing {
            let right = self.insert(self.nodes[node as usize].right, key, rank);
            self.nodes[node as usize].right = right;
        } else {
            let current = &mut self.nodes[node as usize];
            current.rank = current.rank.max(rank);
        }

        let mut node = node;
        if self.is_red(self.nodes[node as usize].right) && !self.is_red(self.nodes[node as usize].left) {
            node = self.rotate_left(node);
        }
        let left = self.nodes[node as usize].left;
        if self.is_red(left) && self.is_red(self.nodes[left as usize].left) {
            node = self.rotate_right(node);
        }
        if self.is_red(self.nodes[node as usize].left) && self.is_red(self.nodes[node as usize].right) {
            self.flip_colors(node);
        }

        self.update(node);

        node
    }

    fn rotate_left(&mut self, node: u32) -> u32 {
        let pivot = self.nodes[node as usize].right;
        self.nodes[node as usize].right = self.nodes[pivot as usize].left;
        self.nodes[pivot as usize].left = node;
        self.nodes[pivot as usize].is_red = self.nodes[node as usize].is_red;
        self.nodes[node as usize].is_red = true;
        self.update(node);
        self.update(pivot);

        pivot
    }

    fn rotate_right(&mut self, node: u32) -> u32 {
        let pivot = self.nodes[node as usize].left;
        self.nodes[node as usize].left = self.nodes[pivot as usize].right;
        self.nodes[pivot as usize].right = node;
        self.nodes[pivot as usize].is_red = self.nodes[node as usize].is_red;
        self.nodes[node as usize].is_red = true;
        self.update(node);
        self.update(pivot);

        pivot
    }

    fn flip_colors(&mut self, node: u32) {
        let (left, right) = (self.nodes[node as usize].left, self.nodes[node as usize].right);
        for idx in [node, left, right] {
            let node = &mut self.nodes[idx as usize];
            node.is_red = !node.is_red;
        }
    }

    fn update(&mut self, node: u32) {
        let (left, right) = (self.nodes[node as usize].left, self.nodes[node as usize].right);
        let children_max = self.max_rank(left).max(self.max_rank(right));
        let node = &mut self.nodes[node as usize];
        node.max_rank = children_max.map_or(node.rank, |max_rank| max_rank.max(node.rank));
    }

    fn is_red(&self, node: u32) -> bool {
        node != NONE && self.nodes[node as usize].is_red
    }

    fn max_rank(&self, node: u32) -> Option<u32> {
        if node == NONE { None } else { Some(self.nodes[node as usize].max_rank) }
    }
}
