use super::*;
use crate::datasets::*;
use crate::helpers::algorithms::*;
use crate::helpers::utils::create_test_random;
use crate::utils::{DefaultRandom, Random};

parameterized_test! {can_sort_points, (search, size, dimension, values), {
    can_sort_points_impl(search, size, dimension, values);
}}

can_sort_points! {
    case_01_sequential_one_dimension: (FrontSearch::Sequential, 40, 1, 100),
    case_02_sequential_two_dimensions: (FrontSearch::Sequential, 300, 2, 1000),
    case_03_sequential_four_dimensions: (FrontSearch::Sequential, 300, 4, 6),
    case_04_binary_two_dimensions: (FrontSearch::Binary, 300, 2, 1000),
    case_05_binary_three_dimensions: (FrontSearch::Binary, 257, 3, 4),
    case_06_binary_single_point: (FrontSearch::Binary, 1, 3, 4),
}

fn can_sort_points_impl(search: FrontSearch, size: usize, dimension: usize, values: i32) {
    let points = discrete(&create_test_random(), size, dimension, values);
    let mut sorting = DivideConquerNonDominatedSort::new(size, dimension, search).unwrap();

    let ranks = sorting.sort(&points, usize::MAX).unwrap();

    assert_eq!(ranks, get_expected_ranks(&points, usize::MAX));
}

parameterized_test! {can_rank_point_dominated_by_later_member_of_front, search, {
    let points = [[0., 3.], [2., 1.], [2., 3.], [4., 0.], [0., 1.], [2., 4.], [0., 0.], [3., 2.], [0., 3.]]
        .iter()
        .map(|point| point.to_vec())
        .collect::<Vec<_>>();
    let mut sorting = DivideConquerNonDominatedSort::new(points.len(), 2, search).unwrap();

    let ranks = sorting.sort(&points, usize::MAX).unwrap();

    assert_eq!(ranks, vec![2, 2, 3, 1, 1, 4, 0, 3, 2]);
}}

can_rank_point_dominated_by_later_member_of_front! {
    case_01_sequential: FrontSearch::Sequential,
    case_02_binary: FrontSearch::Binary,
}

parameterized_test! {can_sort_many_small_inputs, (search, dimension), {
    let mut sorting = DivideConquerNonDominatedSort::new(10, dimension, search).unwrap();

    for seed in 0..500 {
        let random = DefaultRandom::new_with_seed(seed);
        let size = random.uniform_int(2, 10) as usize;
        let points = discrete(&random, size, dimension, 5);

        let ranks = sorting.sort(&points, usize::MAX).unwrap();

        assert_eq!(ranks, get_expected_ranks(&points, usize::MAX), "seed {seed}: {points:?}");
    }
}}

can_sort_many_small_inputs! {
    case_01_sequential_two_dimensions: (FrontSearch::Sequential, 2),
    case_02_binary_two_dimensions: (FrontSearch::Binary, 2),
    case_03_sequential_three_dimensions: (FrontSearch::Sequential, 3),
    case_04_binary_three_dimensions: (FrontSearch::Binary, 3),
}

#[test]
fn can_sort_chain_of_points() {
    let points = (0..33).rev().map(|value| vec![value as Float, value as Float]).collect::<Vec<_>>();
    let mut sorting = DivideConquerNonDominatedSort::new(40, 2, FrontSearch::Binary).unwrap();

    let ranks = sorting.sort(&points, usize::MAX).unwrap();

    assert_eq!(ranks, (0..33).rev().collect::<Vec<_>>());
}

#[test]
fn can_sort_layered_points_with_limited_rank() {
    let (points, expected) = n_fronts(&create_test_random(), 120, 3, 12);
    let mut sorting = DivideConquerNonDominatedSort::new(120, 3, FrontSearch::Sequential).unwrap();

    let ranks = sorting.sort(&points, 5).unwrap();

    assert_eq!(ranks, expected.into_iter().map(|rank| rank.min(6)).collect::<Vec<_>>());
}

#[test]
fn can_return_name() {
    assert_eq!(DivideConquerNonDominatedSort::new(1, 1, FrontSearch::Sequential).unwrap().name(), "DCNS-SS");
    assert_eq!(DivideConquerNonDominatedSort::new(1, 1, FrontSearch::Binary).unwrap().name(), "DCNS-BS");
}
