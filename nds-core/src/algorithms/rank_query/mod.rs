//! Rank-query indices answer "what is the minimal feasible rank of a point with this key" against
//! `(key, rank)` pairs inserted earlier in a sweep. All backings share the same semantics and differ
//! only in costs.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/rank_query/rank_query_test.rs"]
mod rank_query_test;

mod fenwick;
pub use self::fenwick::FenwickRankQuery;

mod red_black;
pub use self::red_black::RedBlackTreeRankQuery;

mod successor;
pub use self::successor::IntegerSuccessorRankQuery;

/// Specifies a backing structure of a rank query index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankQueryBacking {
    /// A balanced search tree with per-node rank maxima, see [`RedBlackTreeRankQuery`].
    RedBlackTree,
    /// A prefix-maximum tree over locally compressed keys, see [`FenwickRankQuery`].
    Fenwick,
    /// A successor structure over the integer key universe, see [`IntegerSuccessorRankQuery`].
    IntegerSuccessor,
}

/// An index which keeps `(key, rank)` pairs and answers maximum rank queries over key prefixes.
///
/// Keys are dense coordinate ranks, so they are always less than the universe size passed to
/// `with_capacity`.
pub trait RankQueryIndex: Send + Sized {
    /// A human readable name of the backing structure.
    const NAME: &'static str;

    /// Creates an index able to serve keys in `0..universe` and up to `universe` insertions.
    fn with_capacity(universe: usize) -> Self;

    /// Removes all pairs and announces keys which can be inserted before the next reset.
    fn reset<I>(&mut self, keys: I)
    where
        I: Iterator<Item = u32>;

    /// Inserts a key with its rank. The key must be one of the keys announced by `reset`.
    fn put(&mut self, key: u32, rank: u32);

    /// Returns the maximum rank among inserted keys which are less than or equal to `key`.
    fn max_rank_at_most(&self, key: u32) -> Option<u32>;

    /// Returns the minimal rank a point with `key` can get: it has to be greater than any rank of
    /// an inserted key which is not greater, and it is never less than `lower_bound`.
    #[inline]
    fn minimal_feasible_rank(&self, key: u32, lower_bound: u32) -> u32 {
        match self.max_rank_at_most(key) {
            Some(rank) if rank >= lower_bound => rank + 1,
            _ => lower_bound,
        }
    }
}
