use super::FrontCollection;
use crate::algorithms::jfb::KeyTable;
use crate::utils::NONE;

#[derive(Clone, Copy)]
struct TreeNode {
    // NOTE zero means a leaf: objective zero is never used for splitting
    split_obj: u32,
    split_value: u32,
    left: u32,
    right: u32,
    head: u32,
    size: u32,
    depth: u32,
}

impl TreeNode {
    fn leaf(depth: u32) -> Self {
        Self { split_obj: 0, split_value: 0, left: NONE, right: NONE, head: NONE, size: 0, depth }
    }

    fn is_leaf(&self) -> bool {
        self.split_obj == 0
    }
}

/// Fronts stored as non-dominated trees: every front is a k-d style tree which splits buckets of
/// points by the median of objectives `1..=obj` in turn. A subtree of points with values not less
/// than the split value is visited only when the queried point is not less than the split value.
pub(crate) struct TreeFronts {
    obj: usize,
    split_threshold: u32,
    ranks: Vec<u32>,
    roots: Vec<u32>,
    nodes: Vec<TreeNode>,
    items: Vec<(u32, u32)>,
    values: Vec<u32>,
}

impl TreeFronts {
    /// Creates a new instance of `TreeFronts` which splits leaves larger than `split_threshold` and
    /// keeps `capacity` points without reallocation.
    pub fn new(split_threshold: usize, capacity: usize) -> Self {
        Self {
            obj: 1,
            split_threshold: split_threshold.clamp(1, u32::MAX as usize) as u32,
            ranks: Vec::with_capacity(capacity),
            roots: Vec::with_capacity(capacity),
            // NOTE every split adds two nodes and every front adds a root
            nodes: Vec::with_capacity(3 * capacity),
            items: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn split(&mut self, keys: &KeyTable, node: u32) {
        let depth = self.nodes[node as usize].depth as usize;

        for attempt in 0..self.obj {
            let split_obj = 1 + (depth + attempt) % self.obj;

            self.values.clear();
            let mut item = self.nodes[node as usize].head;
            while item != NONE {
                let (point, next) = self.items[item as usize];
                self.values.push(keys.key(point, split_obj));
                item = next;
            }

            let (min, max) = self.values.iter().fold((u32::MAX, 0), |(min, max), &v| (min.min(v), max.max(v)));
            if min == max {
                continue;
            }

            let mid = self.values.len() / 2;
            let split_value = *self.values.select_nth_unstable(mid).1;
            let split_value = if split_value == min { min + 1 } else { split_value };

            let (left, right) = (self.nodes.len() as u32, self.nodes.len() as u32 + 1);
            self.nodes.push(TreeNode::leaf(depth as u32 + 1));
            self.nodes.push(TreeNode::leaf(depth as u32 + 1));

            let mut item = self.nodes[node as usize].head;
            while item != NONE {
                let (point, next) = self.items[item as usize];
                let target = if keys.key(point, split_obj) < split_value { left } else { right };
                let target_node = &mut self.nodes[target as usize];
                self.items[item as usize].1 = target_node.head;
                target_node.head = item;
                target_node.size += 1;
                item = next;
            }

            let parent = &mut self.nodes[node as usize];
            parent.split_obj = split_obj as u32;
            parent.split_value = split_value;
            parent.left = left;
            parent.right = right;
            parent.head = NONE;
            parent.size = 0;

            return;
        }
    }

    fn has_dominator(&self, keys: &KeyTable, node: u32, point: u32) -> bool {
        let node = &self.nodes[node as usize];

        if node.is_leaf() {
            let mut item = node.head;
            while item != NONE {
                let (candidate, next) = self.items[item as usize];
                if keys.dominates(candidate, point, self.obj) {
                    return true;
                }
                item = next;
            }
            return false;
        }

        self.has_dominator(keys, node.left, point)
            || (keys.key(point, node.split_obj as usize) >= node.split_value && self.has_dominator(keys, node.right, point))
    }
}

impl FrontCollection for TreeFronts {
    fn reset(&mut self, obj: usize) {
        self.obj = obj.max(1);
        self.ranks.clear();
        self.roots.clear();
        self.nodes.clear();
        self.items.clear();
    }

    fn add(&mut self, keys: &KeyTable, point: u32, rank: u32) {
        let front = match self.ranks.binary_search(&rank) {
            Ok(front) => front,
            Err(front) => {
                self.ranks.insert(front, rank);
                self.roots.insert(front, self.nodes.len() as u32);
                self.nodes.push(TreeNode::leaf(0));
                front
            }
        };

        let mut node = self.roots[front];
        while !self.nodes[node as usize].is_leaf() {
            let current = &self.nodes[node as usize];
            node = if keys.key(point, current.split_obj as usize) < current.split_value {
                current.left
            } else {
                current.right
            };
        }

        let item = self.items.len() as u32;
        let leaf = &mut self.nodes[node as usize];
        self.items.push((point, leaf.head));
        leaf.head = item;
        leaf.size += 1;

        if leaf.size > self.split_threshold {
            self.split(keys, node);
        }
    }

    fn rank_lower_bound(&self, keys: &KeyTable, point: u32, lower_bound: u32) -> u32 {
        for front in (0..self.ranks.len()).rev() {
            let rank = self.ranks[front];
            if rank < lower_bound {
                break;
            }

            if self.has_dominator(keys, self.roots[front], point) {
                return rank + 1;
            }
        }

        lower_bound
    }
}
