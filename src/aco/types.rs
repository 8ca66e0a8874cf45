//! City records handled by the colony.

use crate::error::{AcoError, Result};

/// A labelled point in the plane.
///
/// The name is only a label: two cities may share a name, or even share
/// both name and coordinates. The solver works on positions `0..n` in the
/// input sequence and maps back to records only when returning a tour.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::City;
///
/// let a = City::new("A", 0.0, 0.0);
/// let b = City::new("B", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Display label.
    pub name: String,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Plain Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rejects the first city with a NaN or infinite coordinate.
pub fn validate_cities(cities: &[City]) -> Result<()> {
    match cities.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(AcoError::NonFiniteCoordinate {
            index,
            name: cities[index].name.clone(),
        }),
        None => Ok(()),
    }
}

/// Euclidean length of a closed tour over the given records, without the
/// epsilon the distance matrix adds.
///
/// Empty and single-city tours have length 0.
pub fn route_length(route: &[City]) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }
    let open: f64 = route.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    open + route[route.len() - 1].distance_to(&route[0])
}
