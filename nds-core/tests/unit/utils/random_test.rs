use super::*;

#[test]
fn can_reproduce_values_with_the_same_seed() {
    let generate = |seed| {
        let random = DefaultRandom::new_with_seed(seed);
        (0..10).map(|_| (random.uniform_int(0, 10), random.uniform_real(0., 1.))).collect::<Vec<_>>()
    };

    assert_eq!(generate(42), generate(42));
    assert_ne!(generate(42), generate(43));
}

#[test]
fn can_generate_values_within_bounds() {
    let random = DefaultRandom::new_with_seed(0);

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-3, 3);
        let real = random.uniform_real(-1., 2.);

        assert!((-3..=3).contains(&int));
        assert!((-1. ..2.).contains(&real));
    });

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}
