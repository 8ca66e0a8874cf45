//! Ant Colony Optimization for the Euclidean Traveling Salesman Problem.
//!
//! Given a list of labelled points, returns a cyclic visiting order with a
//! low total length. The solver is a classic Ant System:
//!
//! - **Distance matrix**: Euclidean distances plus a small epsilon, with
//!   unreachable self-loops.
//! - **Pheromone matrix**: Uniform initial trails, multiplicative
//!   evaporation with a floor, undirected deposits.
//! - **Ant construction**: Roulette-wheel selection weighted by
//!   `pheromone^alpha * (1/distance)^beta`.
//! - **Iteration loop**: construct → evaluate → evaporate → deposit,
//!   tracking the best tour across all iterations.
//!
//! # Quick start
//!
//! ```
//! use u_antcolony::{optimize_route, AcoConfig, City};
//!
//! let cities = vec![
//!     City::new("a", 0.0, 0.0),
//!     City::new("b", 1.0, 1.0),
//!     City::new("c", 0.0, 1.0),
//!     City::new("d", 1.0, 0.0),
//! ];
//! let route = optimize_route(&cities, &AcoConfig::default().with_seed(1)).unwrap();
//! assert_eq!(route.len(), 4);
//! ```
//!
//! # Features
//!
//! - `parallel`: construct the ants of an iteration on the rayon pool.
//! - `serde`: derive `Serialize`/`Deserialize` for cities, config and the
//!   route request/response types.
//! - `wasm`: JavaScript bindings via wasm-bindgen.

pub mod aco;
pub mod error;
pub mod route;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use aco::{AcoConfig, AcoResult, AcoRunner, City};
pub use error::{AcoError, Result};
pub use route::{optimize_route, RouteRequest, RouteResponse};
