//! Input validation, lexicographic presorting and removal of duplicate points.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/common/presort_test.rs"]
mod presort_test;

use super::IndexSorter;
use crate::utils::*;

/// A dense table of distinct points in lexicographic order stored row by row.
pub struct UniquePoints {
    dimension: usize,
    coordinates: Vec<Float>,
}

impl UniquePoints {
    fn with_capacity(max_points: usize, max_dimension: usize) -> Self {
        Self { dimension: 0, coordinates: Vec::with_capacity(max_points * max_dimension) }
    }

    /// Returns amount of unique points.
    pub fn len(&self) -> usize {
        if self.dimension == 0 { 0 } else { self.coordinates.len() / self.dimension }
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns dimension of points.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns a point at given position.
    #[inline]
    pub fn point(&self, index: usize) -> &[Float] {
        let start = index * self.dimension;
        &self.coordinates[start..start + self.dimension]
    }

    /// Iterates over points in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &[Float]> + '_ {
        self.coordinates.chunks_exact(self.dimension.max(1))
    }

    fn reset(&mut self, dimension: usize) {
        self.dimension = dimension;
        self.coordinates.clear();
    }

    fn push(&mut self, point: &[Float]) {
        self.coordinates.extend_from_slice(point);
    }
}

/// Validates input of a sorter and prepares the unique point table. Owns scratch buffers allocated
/// once for the configured capacity.
pub struct Presorter {
    max_points: usize,
    max_dimension: usize,
    sorter: IndexSorter,
    indices: Vec<u32>,
    unique: UniquePoints,
    representatives: Vec<u32>,
}

impl Presorter {
    /// Creates a new instance of `Presorter`.
    pub fn new(max_points: usize, max_dimension: usize) -> GenericResult<Self> {
        if max_points == 0 || max_points >= NONE as usize {
            return Err(format!("maximum amount of points should be in [1, {}), got {max_points}", NONE).into());
        }

        if max_dimension == 0 {
            return Err("maximum dimension should be positive".into());
        }

        Ok(Self {
            max_points,
            max_dimension,
            sorter: IndexSorter::default(),
            indices: vec![0; max_points],
            unique: UniquePoints::with_capacity(max_points, max_dimension),
            representatives: vec![0; max_points],
        })
    }

    /// Returns the maximum amount of points accepted.
    pub fn maximum_points(&self) -> usize {
        self.max_points
    }

    /// Returns the maximum dimension accepted.
    pub fn maximum_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Returns the unique point table built by the last `prepare` call.
    pub fn unique_points(&self) -> &UniquePoints {
        &self.unique
    }

    /// Validates input, sorts points lexicographically and removes duplicates. Returns amount of
    /// unique points or `None` when there is nothing to sort.
    pub fn prepare(&mut self, points: &[Vec<Float>], ranks_len: usize) -> GenericResult<Option<usize>> {
        let Some(dimension) = self.validate(points, ranks_len)? else {
            return Ok(None);
        };

        let n = points.len();
        let indices = &mut self.indices[..n];
        fill_identity(indices);
        self.sorter.lexicographical_sort(indices, points, dimension);

        self.unique.reset(dimension);
        let mut last: Option<&[Float]> = None;
        for &index in indices.iter() {
            let point = points[index as usize].as_slice();
            if last.is_none_or(|last| last != point) {
                debug_assert!(last.is_none_or(|last| compare_lexicographically(last, point).is_lt()));
                self.unique.push(point);
                last = Some(point);
            }
            self.representatives[index as usize] = (self.unique.len() - 1) as u32;
        }

        Ok(Some(self.unique.len()))
    }

    /// Copies ranks of unique points to the original positions, replacing ranks which exceed
    /// `maximal_meaningful_rank` with `maximal_meaningful_rank + 1`.
    pub fn project_ranks(&self, unique_ranks: &[u32], ranks: &mut [usize], maximal_meaningful_rank: usize) {
        let sentinel = maximal_meaningful_rank.saturating_add(1);
        let representatives = &self.representatives[..ranks.len()];

        ranks.iter_mut().zip(representatives.iter()).for_each(|(rank, &representative)| {
            *rank = (unique_ranks[representative as usize] as usize).min(sentinel);
        });
    }

    fn validate(&self, points: &[Vec<Float>], ranks_len: usize) -> GenericResult<Option<usize>> {
        if points.len() != ranks_len {
            return Err(format!("amount of points ({}) and ranks ({ranks_len}) differ", points.len()).into());
        }

        if points.len() > self.max_points {
            return Err(format!("too many points: {}, maximum is {}", points.len(), self.max_points).into());
        }

        let Some(dimension) = points.first().map(|point| point.len()) else {
            return Ok(None);
        };

        if dimension == 0 || dimension > self.max_dimension {
            return Err(format!("dimension should be in [1, {}], got {dimension}", self.max_dimension).into());
        }

        points.iter().enumerate().try_for_each(|(idx, point)| {
            if point.len() != dimension {
                return Err(GenericError::from(format!(
                    "point {idx} has dimension {}, expected {dimension}",
                    point.len()
                )));
            }

            if point.iter().any(|value| !value.is_finite()) {
                return Err(format!("point {idx} has non-finite coordinates").into());
            }

            Ok(())
        })?;

        Ok(Some(dimension))
    }
}
