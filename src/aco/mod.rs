//! Ant Colony Optimization (ACO) for the Euclidean TSP.
//!
//! A population-based constructive metaheuristic. In every iteration a
//! colony of ants each builds a closed tour, choosing the next city with
//! probability weighted by learned pheromone trails and inverse distance.
//! Trails then evaporate and are reinforced along every ant's tour in
//! proportion to its quality.
//!
//! # Key Types
//!
//! - [`City`]: Labelled input point
//! - [`DistanceMatrix`]: Pairwise distances, built once per solve
//! - [`PheromoneMatrix`]: Trail levels, evolved across iterations
//! - [`AntPathBuilder`]: Roulette-wheel tour construction for one ant
//! - [`AcoConfig`]: Colony parameters
//! - [`AcoRunner`]: Executes the iteration loop
//! - [`AcoResult`]: Best tour and run statistics
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod distance;
mod pheromone;
mod runner;
mod types;

pub use ant::{roulette_select, selection_weight, AntPathBuilder, AntTour};
pub use config::AcoConfig;
pub use distance::{DistanceMatrix, DISTANCE_EPSILON};
pub use pheromone::{PheromoneMatrix, INITIAL_PHEROMONE, PHEROMONE_FLOOR};
pub use runner::{AcoResult, AcoRunner};
pub use types::{route_length, validate_cities, City};
