//! ACO configuration.
//!
//! [`AcoConfig`] holds all parameters that control the colony loop.

use crate::error::{AcoError, Result};

/// Configuration for the Ant Colony Optimization loop.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ant_count, 20);
/// assert_eq!(config.iterations, 100);
/// assert!((config.evaporation_rate - 0.5).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(40)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants constructing a tour in every iteration.
    pub ant_count: usize,

    /// Pheromone exponent. Higher values favour well-trodden edges.
    pub alpha: f64,

    /// Inverse-distance exponent. Higher values favour short edges.
    pub beta: f64,

    /// Fraction of pheromone removed per iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Deposit constant. Each ant adds `q / tour_length` to its edges.
    pub q: f64,

    /// Number of construct/evaporate/deposit rounds.
    pub iterations: usize,

    /// Number of consecutive iterations without improvement before stopping.
    ///
    /// Set to 0 to always run the full iteration budget.
    pub stagnation_limit: usize,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled. Results are the
    /// same either way for a given seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each iteration, so a run may exceed it by
    /// one iteration's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            iterations: 100,
            stagnation_limit: 0,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the inverse-distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit constant.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.ant_count == 0 {
            return Err(invalid("ant_count must be positive"));
        }
        if self.iterations == 0 {
            return Err(invalid("iterations must be positive"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(invalid(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(invalid(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(invalid(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(invalid(format!(
                "q must be finite and positive, got {}",
                self.q
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> AcoError {
    AcoError::InvalidConfig(msg.into())
}
