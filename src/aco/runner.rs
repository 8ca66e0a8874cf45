//! ACO iteration loop.
//!
//! [`AcoRunner`] orchestrates the colony over a fixed city set:
//! construct (all ants) → evaluate → evaporate → deposit → repeat.
//!
//! Ant construction only reads the matrices, so all ants of an iteration
//! may run concurrently. Evaporation and deposit start only once every ant
//! of that iteration has finished.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ant::{AntPathBuilder, AntTour};
use super::config::AcoConfig;
use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::types::{validate_cities, City};
use crate::error::Result;

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
pub struct AcoResult {
    /// The best tour found, as city records in visiting order.
    pub best: Vec<City>,

    /// The same tour as indices into the input sequence.
    pub best_tour: Vec<usize>,

    /// Cyclic length of the best tour under the distance matrix
    /// (each edge carries the distance epsilon). 0 for fewer than two cities.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Best cost at the end of each iteration.
    pub cost_history: Vec<f64>,
}

impl AcoResult {
    /// Result for inputs with no edges to optimize.
    fn trivial(cities: &[City]) -> Self {
        Self {
            best: cities.to_vec(),
            best_tour: (0..cities.len()).collect(),
            best_cost: 0.0,
            iterations: 0,
            stagnated: false,
            cancelled: false,
            timed_out: false,
            cost_history: Vec::new(),
        }
    }
}

/// Executes the ACO loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner, City};
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 1.0),
///     City::new("c", 1.0, 1.0),
///     City::new("d", 1.0, 0.0),
/// ];
/// let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(42)).unwrap();
/// assert_eq!(result.best.len(), 4);
/// assert!((result.best_cost - 4.0).abs() < 1e-3);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony over `cities`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or a city has a non-finite
    /// coordinate.
    pub fn run(cities: &[City], config: &AcoConfig) -> Result<AcoResult> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// at the start of the next iteration and returns the best tour found
    /// so far.
    pub fn run_with_cancel(
        cities: &[City],
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        config.validate()?;
        validate_cities(cities)?;

        let n = cities.len();
        if n < 2 {
            return Ok(AcoResult::trivial(cities));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(
            "aco: start n={n} ants={} iterations={} seed={seed}",
            config.ant_count, config.iterations
        );

        let distances = DistanceMatrix::from_cities(cities);
        let mut pheromone = PheromoneMatrix::new(n);

        let mut best_tour: Vec<usize> = (0..n).collect();
        let mut best_cost = f64::INFINITY;
        let mut cost_history = Vec::with_capacity(config.iterations);

        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        let mut iterations = 0usize;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        for iteration in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    timed_out = true;
                    break;
                }
            }

            // Construction: one independent generator per ant.
            let seeds: Vec<u64> = (0..config.ant_count).map(|_| rng.random()).collect();
            let builder = AntPathBuilder::new(&distances, &pheromone, config.alpha, config.beta);
            let tours = construct_tours(&builder, &seeds, config.parallel);

            let improved = update_best(&tours, &mut best_tour, &mut best_cost);
            if improved {
                trace!("aco: iteration {iteration} new best {best_cost:.6}");
            }

            pheromone.evaporate(config.evaporation_rate);
            for tour in &tours {
                pheromone.deposit_tour(&tour.path, tour.length, config.q);
            }

            cost_history.push(best_cost);
            iterations += 1;

            if improved {
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        // Stopped before any ant ran: fall back to the input order.
        if !best_cost.is_finite() {
            best_cost = distances.tour_length(&best_tour);
        }

        let reason = if cancelled {
            "cancelled"
        } else if timed_out {
            "time limit"
        } else if stagnated {
            "stagnated"
        } else {
            "completed"
        };
        info!("aco: {reason} after {iterations} iterations, best cost {best_cost:.6}");

        let best = best_tour.iter().map(|&i| cities[i].clone()).collect();
        Ok(AcoResult {
            best,
            best_tour,
            best_cost,
            iterations,
            stagnated,
            cancelled,
            timed_out,
            cost_history,
        })
    }
}

/// Replaces the running best with the shortest tour in `tours` if it is
/// strictly shorter. Tours are scanned in order, so the earliest of several
/// equally short tours is kept. Returns `true` if the best changed.
fn update_best(tours: &[AntTour], best_tour: &mut Vec<usize>, best_cost: &mut f64) -> bool {
    let mut improved = false;
    for tour in tours {
        if tour.length < *best_cost {
            *best_cost = tour.length;
            best_tour.clone_from(&tour.path);
            improved = true;
        }
    }
    improved
}

/// Builds one tour per seed, in seed order.
fn construct_tours(builder: &AntPathBuilder<'_>, seeds: &[u64], parallel: bool) -> Vec<AntTour> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return seeds
            .par_iter()
            .map(|&s| builder.build(&mut StdRng::seed_from_u64(s)))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    seeds
        .iter()
        .map(|&s| builder.build(&mut StdRng::seed_from_u64(s)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::distance::DISTANCE_EPSILON;
    use crate::error::AcoError;
    use std::f64::consts::PI;

    fn unit_square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 1.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 1.0, 0.0),
        ]
    }

    fn circle(n: usize, radius: f64) -> Vec<City> {
        // Shuffled visiting order so the input itself is not the answer.
        (0..n)
            .map(|k| (k * 7) % n)
            .map(|k| {
                let theta = 2.0 * PI * k as f64 / n as f64;
                City::new(format!("p{k}"), radius * theta.cos(), radius * theta.sin())
            })
            .collect()
    }

    fn is_permutation(result: &AcoResult, n: usize) -> bool {
        let mut idx = result.best_tour.clone();
        idx.sort_unstable();
        idx == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_empty_input() {
        let result = AcoRunner::run(&[], &AcoConfig::default()).unwrap();
        assert!(result.best.is_empty());
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_single_city_returned_unchanged() {
        let cities = vec![City::new("solo", 3.5, -1.0)];
        let result = AcoRunner::run(&cities, &AcoConfig::default()).unwrap();
        assert_eq!(result.best, cities);
        assert_eq!(result.best_cost, 0.0);
        assert!(result.cost_history.is_empty());
    }

    #[test]
    fn test_two_cities_there_and_back() {
        let cities = vec![City::new("a", 0.0, 0.0), City::new("b", 3.0, 4.0)];
        let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(42)).unwrap();
        assert_eq!(result.best.len(), 2);
        assert!(result.best.contains(&cities[0]));
        assert!(result.best.contains(&cities[1]));
        assert!((result.best_cost - 2.0 * (5.0 + DISTANCE_EPSILON)).abs() < 1e-9);
    }

    #[test]
    fn test_unit_square_optimal() {
        let config = AcoConfig::default().with_seed(42);
        let result = AcoRunner::run(&unit_square(), &config).unwrap();
        assert!(
            (result.best_cost - 4.0).abs() < 1e-3,
            "expected perimeter 4.0, got {}",
            result.best_cost
        );
        assert_eq!(result.iterations, 100);
        assert!(is_permutation(&result, 4));
    }

    #[test]
    fn test_circle_near_optimal() {
        let n = 12;
        let cities = circle(n, 10.0);
        let optimal = 2.0 * n as f64 * 10.0 * (PI / n as f64).sin();
        let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(42)).unwrap();
        assert!(is_permutation(&result, n));
        assert!(
            result.best_cost <= optimal * 1.25,
            "expected within 25% of {optimal}, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_best_records_match_indices() {
        let cities = circle(8, 1.0);
        let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(5)).unwrap();
        for (city, &idx) in result.best.iter().zip(&result.best_tour) {
            assert_eq!(city, &cities[idx]);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let cities = circle(15, 5.0);
        let config = AcoConfig::default().with_iterations(30).with_seed(1234);
        let a = AcoRunner::run(&cities, &config).unwrap();
        let b = AcoRunner::run(&cities, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let cities = circle(10, 3.0);
        let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(42)).unwrap();
        assert_eq!(result.cost_history.len(), 100);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.cost_history.last().copied(), Some(result.best_cost));
    }

    #[test]
    fn test_update_best_keeps_earlier_on_tie() {
        let tours = vec![
            AntTour {
                path: vec![0, 1, 2, 3],
                length: 4.0,
            },
            AntTour {
                path: vec![3, 2, 1, 0],
                length: 4.0,
            },
        ];
        let mut best_tour = vec![0, 2, 1, 3];
        let mut best_cost = f64::INFINITY;

        assert!(update_best(&tours, &mut best_tour, &mut best_cost));
        assert_eq!(best_tour, vec![0, 1, 2, 3]);
        assert_eq!(best_cost, 4.0);

        // An equal tour in a later iteration does not replace the best either.
        let later = vec![AntTour {
            path: vec![1, 2, 3, 0],
            length: 4.0,
        }];
        assert!(!update_best(&later, &mut best_tour, &mut best_cost));
        assert_eq!(best_tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_update_best_takes_strictly_shorter() {
        let tours = vec![
            AntTour {
                path: vec![0, 1, 2],
                length: 5.0,
            },
            AntTour {
                path: vec![2, 0, 1],
                length: 3.0,
            },
        ];
        let mut best_tour = vec![0, 1, 2];
        let mut best_cost = 4.0;
        assert!(update_best(&tours, &mut best_tour, &mut best_cost));
        assert_eq!(best_tour, vec![2, 0, 1]);
        assert_eq!(best_cost, 3.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = AcoRunner::run(&unit_square(), &AcoConfig::default().with_ant_count(0));
        assert!(matches!(err, Err(AcoError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_city_rejected() {
        let mut cities = unit_square();
        cities[2].y = f64::NAN;
        let err = AcoRunner::run(&cities, &AcoConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AcoError::NonFiniteCoordinate {
                index: 2,
                name: "c".into()
            }
        );
    }

    #[test]
    fn test_cancellation() {
        // Flag set before running, so the outcome does not depend on timing.
        let cancel = Arc::new(AtomicBool::new(true));
        let cities = unit_square();
        let result =
            AcoRunner::run_with_cancel(&cities, &AcoConfig::default().with_seed(1), Some(cancel))
                .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, cities);
        assert!((result.best_cost - (4.0 + 4.0 * DISTANCE_EPSILON)).abs() < 1e-12);
    }

    #[test]
    fn test_time_limit_zero_stops_immediately() {
        let config = AcoConfig::default().with_time_limit_ms(0).with_seed(1);
        let result = AcoRunner::run(&circle(6, 1.0), &config).unwrap();
        assert!(result.timed_out);
        assert_eq!(result.iterations, 0);
        assert!(is_permutation(&result, 6));
    }

    #[test]
    fn test_stagnation_limit() {
        let config = AcoConfig::default()
            .with_iterations(1000)
            .with_stagnation_limit(5)
            .with_seed(42);
        let result = AcoRunner::run(&unit_square(), &config).unwrap();
        assert!(result.stagnated);
        assert!(result.iterations < 1000);
        assert!((result.best_cost - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_duplicate_cities_kept() {
        let cities = vec![
            City::new("x", 0.0, 0.0),
            City::new("x", 0.0, 0.0),
            City::new("y", 2.0, 0.0),
        ];
        let result = AcoRunner::run(&cities, &AcoConfig::default().with_seed(3)).unwrap();
        assert!(is_permutation(&result, 3));
        assert_eq!(result.best.iter().filter(|c| c.name == "x").count(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let cities = circle(20, 4.0);
        let config = AcoConfig::default().with_iterations(25).with_seed(77);
        let seq = AcoRunner::run(&cities, &config.clone().with_parallel(false)).unwrap();
        let par = AcoRunner::run(&cities, &config.with_parallel(true)).unwrap();
        assert_eq!(seq, par);
    }
}
