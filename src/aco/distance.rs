//! Pairwise distance matrix.

use super::types::City;

/// Offset added to every inter-city distance so no edge has length zero.
pub const DISTANCE_EPSILON: f64 = 0.0001;

/// Precomputed `n x n` Euclidean distances, stored row-major.
///
/// Off-diagonal entries are the Euclidean distance plus
/// [`DISTANCE_EPSILON`]; diagonal entries are `+inf` so a self-loop
/// carries zero selection weight.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for an ordered sequence of cities.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![f64::INFINITY; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]) + DISTANCE_EPSILON;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` for a matrix over zero cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from city `i` to city `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Cyclic length of a tour, including the closing edge.
    ///
    /// Tours shorter than two cities have length 0.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(tour[tour.len() - 1], tour[0])
    }
}
