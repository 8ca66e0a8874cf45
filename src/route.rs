//! Request/response boundary for route optimization.
//!
//! Mirrors the JSON shapes a route service exchanges:
//!
//! ```text
//! request:  {"cities": [{"name": "A", "x": 0.0, "y": 0.0}, ...]}
//! response: {"route":  [{"name": "C", "x": 2.0, "y": 1.0}, ...]}
//! ```
//!
//! The route is implicitly cyclic; consumers append the first city when
//! they need a closed polyline.

use crate::aco::{AcoConfig, AcoRunner, City};
use crate::error::Result;

/// Cities to be ordered.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub cities: Vec<City>,
}

/// Best visiting order found.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResponse {
    pub route: Vec<City>,
}

impl RouteRequest {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Solves the request with the given colony parameters.
    pub fn solve(&self, config: &AcoConfig) -> Result<RouteResponse> {
        let route = optimize_route(&self.cities, config)?;
        Ok(RouteResponse { route })
    }
}

/// Returns `cities` reordered into a short cyclic tour.
///
/// The output is a permutation of the input. Empty and single-city inputs
/// come back unchanged.
///
/// # Errors
///
/// Fails if the configuration is invalid or a city has a non-finite
/// coordinate.
pub fn optimize_route(cities: &[City], config: &AcoConfig) -> Result<Vec<City>> {
    AcoRunner::run(cities, config).map(|result| result.best)
}
