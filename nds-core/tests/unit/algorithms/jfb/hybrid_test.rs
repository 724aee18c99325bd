use super::*;
use crate::helpers::utils::create_test_random;
use crate::utils::Random;

fn create_keys(points: &[Vec<u32>]) -> KeyTable {
    let dimension = points.first().map_or(1, |point| point.len() + 1);
    let keys = points
        .iter()
        .zip(0_u32..)
        .flat_map(|(point, index)| std::iter::once(index).chain(point.iter().copied()))
        .collect();

    KeyTable { keys, dimension }
}

fn create_random_points(size: usize, dimension: usize, max_value: i32) -> Vec<Vec<u32>> {
    let random = create_test_random();

    (0..size).map(|_| (0..dimension).map(|_| random.uniform_int(0, max_value) as u32).collect()).collect()
}

fn create_slots(size: usize) -> Vec<Slot> {
    (0..size as u32).map(|index| Slot { index, rank: 0 }).collect()
}

fn get_naive_ranks(keys: &KeyTable, size: usize, obj: usize) -> Vec<u32> {
    let mut ranks = vec![0_u32; size];
    for point in 0..size as u32 {
        ranks[point as usize] = (0..point)
            .filter(|&other| keys.dominates(other, point, obj))
            .map(|other| ranks[other as usize] + 1)
            .max()
            .unwrap_or(0);
    }

    ranks
}

parameterized_test! {can_rank_points_with_fronts, (size, dimension, max_value, split_threshold), {
    can_rank_points_with_fronts_impl(size, dimension, max_value, split_threshold);
}}

can_rank_points_with_fronts! {
    case_01_two_objectives: (50, 2, 20, 1),
    case_02_three_objectives: (80, 3, 10, 2),
    case_03_many_duplicates: (60, 4, 2, 3),
    case_04_large_leaves: (100, 3, 50, 64),
}

fn can_rank_points_with_fronts_impl(size: usize, dimension: usize, max_value: i32, split_threshold: usize) {
    let keys = create_keys(&create_random_points(size, dimension, max_value));
    let expected = get_naive_ranks(&keys, size, dimension);

    let mut list = PointList::with_capacity(size);
    let mut slots = create_slots(size);
    rank_slots(&mut list, &keys, &mut slots, dimension);
    assert_eq!(slots.iter().map(|slot| slot.rank).collect::<Vec<_>>(), expected);

    let mut chains = ChainFronts::with_capacity(size);
    let mut slots = create_slots(size);
    rank_slots(&mut chains, &keys, &mut slots, dimension);
    assert_eq!(slots.iter().map(|slot| slot.rank).collect::<Vec<_>>(), expected);

    let mut trees = TreeFronts::new(split_threshold, size);
    let mut slots = create_slots(size);
    rank_slots(&mut trees, &keys, &mut slots, dimension);
    assert_eq!(slots.iter().map(|slot| slot.rank).collect::<Vec<_>>(), expected);
}

#[test]
fn can_respect_lower_bounds_when_updating_weak_points() {
    let keys = create_keys(&[vec![1, 1], vec![0, 5], vec![2, 2], vec![3, 0], vec![4, 4]]);
    let good = vec![Slot { index: 0, rank: 3 }, Slot { index: 1, rank: 0 }];
    let mut weak = vec![Slot { index: 2, rank: 1 }, Slot { index: 3, rank: 2 }, Slot { index: 4, rank: 5 }];

    let mut fronts = ChainFronts::with_capacity(5);
    update_weak_slots(&mut fronts, &keys, &good, &mut weak, 2);

    assert_eq!(weak.iter().map(|slot| slot.rank).collect::<Vec<_>>(), vec![4, 2, 5]);
}

#[test]
fn can_use_base_case_only_within_threshold() {
    let keys = create_keys(&create_random_points(10, 3, 5));
    let hybrid = Hybrid::new(BaseCaseStrategy::Ens {
        helper_a: ThresholdPolicy::Constant(5),
        helper_b: ThresholdPolicy::Constant(5),
    });
    let mut scratch = hybrid.create_scratch(10);

    let mut slots = create_slots(10);
    assert!(!hybrid.helper_a(&keys, &mut slots, 3, &mut scratch));

    let mut slots = create_slots(5);
    assert!(hybrid.helper_a(&keys, &mut slots, 3, &mut scratch));
}

#[test]
fn can_never_use_dummy_base_case() {
    let keys = create_keys(&create_random_points(4, 3, 5));
    let hybrid = Hybrid::new(BaseCaseStrategy::Dummy);
    let mut scratch = hybrid.create_scratch(10);
    let (good, mut weak) = (create_slots(2), create_slots(4).split_off(2));

    assert!(!hybrid.helper_a(&keys, &mut create_slots(4), 3, &mut scratch));
    assert!(!hybrid.helper_b(&keys, &good, &mut weak, 3, &mut scratch));
    assert!(matches!(hybrid.thresholds(), (None, None)));
}

#[test]
fn can_validate_strategy() {
    let valid = ThresholdPolicy::Constant(10);
    let invalid = ThresholdPolicy::DynamicAdjustable { base: 10, growth: 0.5 };

    assert!(BaseCaseStrategy::Dummy.validate().is_ok());
    assert!(BaseCaseStrategy::Ens { helper_a: valid, helper_b: valid }.validate().is_ok());
    assert!(BaseCaseStrategy::Ens { helper_a: valid, helper_b: invalid }.validate().is_err());
    assert!(BaseCaseStrategy::LinearNds { helper_a: valid, helper_b: valid }.validate().is_ok());
    assert!(BaseCaseStrategy::LinearNds { helper_a: invalid, helper_b: valid }.validate().is_err());
    assert!(BaseCaseStrategy::Ndt { helper_a: valid, helper_b: valid, split_threshold: 0 }.validate().is_err());
    assert!(BaseCaseStrategy::Ndt { helper_a: invalid, helper_b: valid, split_threshold: 4 }.validate().is_err());
}

#[test]
fn can_update_weak_points_with_point_list() {
    let keys = create_keys(&[vec![1, 1], vec![0, 5], vec![2, 2], vec![3, 0], vec![4, 4]]);
    let good = vec![Slot { index: 0, rank: 3 }, Slot { index: 1, rank: 0 }];
    let mut weak = vec![Slot { index: 2, rank: 1 }, Slot { index: 3, rank: 2 }, Slot { index: 4, rank: 5 }];

    let hybrid = Hybrid::new(BaseCaseStrategy::LinearNds {
        helper_a: ThresholdPolicy::Constant(5),
        helper_b: ThresholdPolicy::Constant(5),
    });
    let mut scratch = hybrid.create_scratch(5);

    assert!(hybrid.helper_b(&keys, &good, &mut weak, 2, &mut scratch));
    assert_eq!(weak.iter().map(|slot| slot.rank).collect::<Vec<_>>(), vec![4, 2, 5]);
}
