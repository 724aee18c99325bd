//! Synthetic point sets used by tests and benchmarks.

#[cfg(test)]
#[path = "../tests/unit/datasets_test.rs"]
mod datasets_test;

use crate::utils::{Float, Random};

/// Generates points with coordinates uniformly distributed in `[0, 1)`.
pub fn uniform_hypercube(random: &dyn Random, size: usize, dimension: usize) -> Vec<Vec<Float>> {
    (0..size).map(|_| (0..dimension).map(|_| random.uniform_real(0., 1.)).collect()).collect()
}

/// Generates points on the hyperplane where coordinates sum up to one. Almost surely, all of them
/// belong to the first front.
pub fn uniform_hyperplane(random: &dyn Random, size: usize, dimension: usize) -> Vec<Vec<Float>> {
    (0..size).map(|_| hyperplane_point(random, dimension)).collect()
}

/// Generates points with integer coordinates in `[0, values)`, so duplicates are likely.
pub fn discrete(random: &dyn Random, size: usize, dimension: usize, values: i32) -> Vec<Vec<Float>> {
    let max = values.max(1) - 1;

    (0..size).map(|_| (0..dimension).map(|_| random.uniform_int(0, max) as Float).collect()).collect()
}

/// Generates points split into `fronts` layers of equal size (the last one may be smaller). Every
/// point of a layer dominates every point of the next layer. Returns points with expected ranks.
pub fn n_fronts(random: &dyn Random, size: usize, dimension: usize, fronts: usize) -> (Vec<Vec<Float>>, Vec<usize>) {
    let fronts = fronts.clamp(1, size.max(1));
    let front_size = size.div_ceil(fronts);

    (0..size)
        .map(|idx| {
            let rank = idx / front_size;
            let point = hyperplane_point(random, dimension).into_iter().map(|value| value + rank as Float).collect();

            (point, rank)
        })
        .unzip()
}

fn hyperplane_point(random: &dyn Random, dimension: usize) -> Vec<Float> {
    let mut point = (0..dimension).map(|_| random.uniform_real(0., 1.) + Float::EPSILON).collect::<Vec<_>>();
    let sum = point.iter().sum::<Float>();
    point.iter_mut().for_each(|value| *value /= sum);

    point
}
