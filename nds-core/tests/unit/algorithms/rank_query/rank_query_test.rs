use super::*;
use crate::helpers::utils::create_test_random;
use crate::utils::Random;

fn naive_max_rank_at_most(pairs: &[(u32, u32)], key: u32) -> Option<u32> {
    pairs.iter().filter(|(existing, _)| *existing <= key).map(|(_, rank)| *rank).max()
}

fn check_simple_queries<R: RankQueryIndex>() {
    let mut index = R::with_capacity(16);
    index.reset([2, 5, 9, 12].into_iter());

    assert_eq!(index.max_rank_at_most(15), None);
    assert_eq!(index.minimal_feasible_rank(15, 3), 3);

    index.put(5, 1);
    index.put(9, 0);
    index.put(2, 0);
    index.put(12, 4);

    assert_eq!(index.max_rank_at_most(0), None);
    assert_eq!(index.max_rank_at_most(2), Some(0));
    assert_eq!(index.max_rank_at_most(4), Some(0));
    assert_eq!(index.max_rank_at_most(5), Some(1));
    assert_eq!(index.max_rank_at_most(11), Some(1));
    assert_eq!(index.max_rank_at_most(12), Some(4));

    assert_eq!(index.minimal_feasible_rank(1, 0), 0);
    assert_eq!(index.minimal_feasible_rank(6, 0), 2);
    assert_eq!(index.minimal_feasible_rank(6, 1), 2);
    assert_eq!(index.minimal_feasible_rank(6, 3), 3);
    assert_eq!(index.minimal_feasible_rank(13, 0), 5);
}

fn check_random_queries<R: RankQueryIndex>() {
    let random = create_test_random();
    let universe = 200;
    let mut index = R::with_capacity(universe);

    for _ in 0..10 {
        let keys = (0..50).map(|_| random.uniform_int(0, universe as i32 - 1) as u32).collect::<Vec<_>>();
        index.reset(keys.iter().copied());

        let mut pairs = Vec::new();
        for &key in keys.iter() {
            let query = random.uniform_int(0, universe as i32 - 1) as u32;
            assert_eq!(index.max_rank_at_most(query), naive_max_rank_at_most(&pairs, query));

            let rank = random.uniform_int(0, 20) as u32;
            index.put(key, rank);
            pairs.push((key, rank));
        }

        (0..universe as u32).for_each(|query| {
            assert_eq!(index.max_rank_at_most(query), naive_max_rank_at_most(&pairs, query));
        });
    }
}

#[test]
fn can_answer_simple_queries_with_red_black_tree() {
    check_simple_queries::<RedBlackTreeRankQuery>();
}

#[test]
fn can_answer_simple_queries_with_fenwick_tree() {
    check_simple_queries::<FenwickRankQuery>();
}

#[test]
fn can_answer_simple_queries_with_integer_successor() {
    check_simple_queries::<IntegerSuccessorRankQuery>();
}

#[test]
fn can_answer_random_queries_with_red_black_tree() {
    check_random_queries::<RedBlackTreeRankQuery>();
}

#[test]
fn can_answer_random_queries_with_fenwick_tree() {
    check_random_queries::<FenwickRankQuery>();
}

#[test]
fn can_answer_random_queries_with_integer_successor() {
    check_random_queries::<IntegerSuccessorRankQuery>();
}

#[test]
fn can_handle_large_universe_with_integer_successor() {
    let mut index = IntegerSuccessorRankQuery::with_capacity(100_000);
    index.reset(std::iter::empty());

    index.put(99_999, 2);
    index.put(64, 1);
    index.put(4_095, 1);
    index.put(0, 0);

    assert_eq!(index.max_rank_at_most(63), Some(0));
    assert_eq!(index.max_rank_at_most(64), Some(1));
    assert_eq!(index.max_rank_at_most(99_998), Some(1));
    assert_eq!(index.max_rank_at_most(99_999), Some(2));

    index.reset(std::iter::empty());
    assert_eq!(index.max_rank_at_most(99_999), None);
}
