use super::*;
use crate::algorithms::jfb::ThresholdPolicy;
use crate::datasets::*;
use crate::helpers::algorithms::*;
use crate::helpers::utils::create_test_random;
use crate::presets::*;
use crate::utils::{DefaultRandom, Float, Random};
use std::sync::{Arc, Mutex};

parameterized_test! {can_sort_simple_scenarios, (points, expected), {
    can_sort_simple_scenarios_impl(points, expected);
}}

can_sort_simple_scenarios! {
    case_01_single_point: (vec![vec![5.]], vec![0]),
    case_02_dominated_point: (vec![vec![1., 1.], vec![2., 2.]], vec![0, 1]),
    case_03_duplicates: (vec![vec![3., 3.], vec![3., 3.]], vec![0, 0]),
    case_04_antichain: (vec![vec![1., 5.], vec![3., 3.], vec![5., 1.]], vec![0, 0, 0]),
    case_05_empty: (Vec::<Vec<Float>>::new(), vec![]),
}

fn can_sort_simple_scenarios_impl(points: Vec<Vec<Float>>, expected: Vec<usize>) {
    for algorithm in get_all_algorithms() {
        assert_eq!(sort_by(algorithm, &points, usize::MAX), expected, "{algorithm:?}");
    }
}

#[test]
fn can_limit_ranks_for_random_points() {
    let points = uniform_hypercube(&create_test_random(), 100, 3);
    let expected = get_expected_ranks(&points, 5);

    for algorithm in get_all_algorithms() {
        let ranks = sort_by(algorithm, &points, 5);

        assert_eq!(ranks, expected, "{algorithm:?}");
        assert!(ranks.iter().all(|&rank| rank <= 6));
        assert_valid_fronts(&points, &ranks, 5);
    }
}

parameterized_test! {can_agree_across_engines, (size, dimension, values), {
    can_agree_across_engines_impl(size, dimension, values);
}}

can_agree_across_engines! {
    case_01_two_dimensions: (500, 2, 50),
    case_02_three_dimensions: (400, 3, 20),
    case_03_four_dimensions_duplicates: (400, 4, 3),
    case_04_seven_dimensions: (200, 7, 100),
}

fn can_agree_across_engines_impl(size: usize, dimension: usize, values: i32) {
    let points = discrete(&create_test_random(), size, dimension, values);
    let expected = sort_by(Algorithm::FastNonDominatedSort, &points, usize::MAX);
    assert_valid_fronts(&points, &expected, usize::MAX);

    for algorithm in get_all_algorithms() {
        assert_eq!(sort_by(algorithm, &points, usize::MAX), expected, "{algorithm:?}");
    }
}

#[test]
fn can_agree_on_real_valued_points() {
    let random = create_test_random();
    let mut points = uniform_hypercube(&random, 300, 3);
    points.extend(uniform_hyperplane(&random, 100, 3));
    let expected = get_expected_ranks(&points, usize::MAX);

    for algorithm in get_all_algorithms() {
        assert_eq!(sort_by(algorithm, &points, usize::MAX), expected, "{algorithm:?}");
    }
}

#[test]
fn can_produce_the_same_ranks_for_permuted_input() {
    let random = DefaultRandom::new_with_seed(7);
    let points = discrete(&random, 300, 3, 8);
    let mut permutation = (0..points.len()).collect::<Vec<_>>();
    (1..permutation.len()).rev().for_each(|idx| {
        let other = random.uniform_int(0, idx as i32) as usize;
        permutation.swap(idx, other);
    });
    let permuted = permutation.iter().map(|&idx| points[idx].clone()).collect::<Vec<_>>();

    for algorithm in get_all_algorithms() {
        let ranks = sort_by(algorithm, &points, usize::MAX);
        let permuted_ranks = sort_by(algorithm, &permuted, usize::MAX);

        permutation.iter().enumerate().for_each(|(position, &idx)| {
            assert_eq!(permuted_ranks[position], ranks[idx], "{algorithm:?}");
        });
    }
}

#[test]
fn can_produce_the_same_ranks_with_any_amount_of_threads() {
    let points = uniform_hypercube(&create_test_random(), 3000, 4);
    let expected = sort_by(red_black_tree_sweep(Some(1)), &points, usize::MAX);

    for algorithm in [
        red_black_tree_sweep(Some(2)),
        red_black_tree_sweep(None),
        fenwick_sweep(Some(4)),
        red_black_tree_sweep_hybrid_ens(Tuning::Dynamic, Some(3)),
        red_black_tree_sweep_hybrid_ndt(Tuning::AdjustableLarge, 8, None),
    ] {
        assert_eq!(sort_by(algorithm, &points, usize::MAX), expected, "{algorithm:?}");
    }
}

#[test]
fn can_sort_repeatedly_with_the_same_sorter() {
    let random = create_test_random();
    let mut sorting = NonDominatedSortingBuilder::new(200, 3).with_algorithm(fenwick_sweep(Some(1))).build().unwrap();

    for size in [200, 50, 1, 0, 199] {
        let points = discrete(&random, size, 3, 10);

        let first = sorting.sort(&points, usize::MAX).unwrap();
        let second = sorting.sort(&points, usize::MAX).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, get_expected_ranks(&points, usize::MAX));
    }
}

#[test]
fn can_log_configuration() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    let sorting = NonDominatedSortingBuilder::new(10, 2)
        .with_algorithm(dominance_tree_sequential())
        .with_logger(logger)
        .build()
        .unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        format!("configured to use {} for up to 10 points of dimension up to 2", sorting.name())
    );
}

parameterized_test! {can_reject_invalid_configuration, (max_points, max_dimension, algorithm), {
    let result = NonDominatedSortingBuilder::new(max_points, max_dimension).with_algorithm(algorithm).build();

    assert!(result.is_err());
}}

can_reject_invalid_configuration! {
    case_01_no_points: (0, 2, Algorithm::default()),
    case_02_no_dimension: (10, 0, divide_conquer_binary_search()),
    case_03_invalid_growth: (10, 2, Algorithm::JensenFortinBuzdalov {
        backing: RankQueryBacking::Fenwick,
        hybrid: BaseCaseStrategy::Ens {
            helper_a: ThresholdPolicy::DynamicAdjustable { base: 10, growth: 0.9 },
            helper_b: ThresholdPolicy::Constant(10),
        },
        allowed_threads: Some(1),
    }),
}

parameterized_test! {can_reject_invalid_input, (points, algorithm), {
    let mut sorting = NonDominatedSortingBuilder::new(3, 2).with_algorithm(algorithm).build().unwrap();

    assert!(sorting.sort(&points, usize::MAX).is_err());
}}

can_reject_invalid_input! {
    case_01_too_many_points: (vec![vec![1., 1.]; 4], Algorithm::default()),
    case_02_too_large_dimension: (vec![vec![1., 1., 1.]], dominance_tree_recursive()),
    case_03_non_finite: (vec![vec![1., Float::NAN]], Algorithm::FastNonDominatedSort),
    case_04_mixed_dimensions: (vec![vec![1., 1.], vec![1.]], divide_conquer_sequential_search()),
}
