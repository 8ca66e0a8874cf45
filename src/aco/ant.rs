//! Single-ant tour construction.
//!
//! An ant starts at a uniformly random city and repeatedly moves to an
//! unvisited city chosen by roulette-wheel selection, where the chance of
//! picking `j` from `i` is proportional to
//! `pheromone[i][j]^alpha * (1 / distance[i][j])^beta`.
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//! of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::Rng;

use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;

/// Attractiveness of an edge with the given trail level and length.
#[inline]
pub fn selection_weight(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    pheromone.powf(alpha) * (1.0 / distance).powf(beta)
}

/// Roulette-wheel selection over `weights`, returning the chosen position.
///
/// Draws `r` uniformly from `[0, total)` and subtracts weights in order
/// until `r <= 0`. If rounding leaves `r` positive after the last weight
/// (or the total is zero or NaN), position 0 is returned.
///
/// `weights` must not be empty.
pub fn roulette_select<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty(), "roulette over no candidates");
    let total: f64 = weights.iter().sum();
    let mut r = rng.random::<f64>() * total;
    for (idx, &w) in weights.iter().enumerate() {
        r -= w;
        if r <= 0.0 {
            return idx;
        }
    }
    0
}

/// A closed tour built by one ant.
#[derive(Debug, Clone, PartialEq)]
pub struct AntTour {
    /// City indices in visiting order; a permutation of `0..n`.
    pub path: Vec<usize>,
    /// Cyclic length under the distance matrix.
    pub length: f64,
}

/// Builds ant tours against read-only distance and pheromone matrices.
///
/// Construction never mutates either matrix, so any number of builders
/// may share the same pair concurrently.
#[derive(Debug, Clone, Copy)]
pub struct AntPathBuilder<'a> {
    distances: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> AntPathBuilder<'a> {
    /// Creates a builder over matrices of the same size.
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromone: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        debug_assert_eq!(distances.len(), pheromone.len());
        Self {
            distances,
            pheromone,
            alpha,
            beta,
        }
    }

    /// Selection weight of moving from `i` to `j`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        selection_weight(
            self.pheromone.get(i, j),
            self.distances.get(i, j),
            self.alpha,
            self.beta,
        )
    }

    /// Constructs one tour from a random start city.
    ///
    /// Must not be called on an empty instance.
    pub fn build<R: Rng>(&self, rng: &mut R) -> AntTour {
        let n = self.distances.len();
        debug_assert!(n > 0, "cannot build a tour over zero cities");

        let start = rng.random_range(0..n);
        let mut visited = vec![false; n];
        visited[start] = true;

        let mut path = Vec::with_capacity(n);
        path.push(start);

        let mut candidates = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        let mut current = start;

        while path.len() < n {
            candidates.clear();
            weights.clear();
            for (j, &seen) in visited.iter().enumerate() {
                if !seen {
                    candidates.push(j);
                    weights.push(self.weight(current, j));
                }
            }

            let next = candidates[roulette_select(&weights, rng)];
            visited[next] = true;
            path.push(next);
            current = next;
        }

        let length = self.distances.tour_length(&path);
        AntTour { path, length }
    }
}
