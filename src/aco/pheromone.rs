//! Pheromone trail state.

/// Value every trail starts at.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Lower bound enforced after evaporation.
pub const PHEROMONE_FLOOR: f64 = 0.0001;

/// Mutable `n x n` pheromone levels, stored row-major.
///
/// Trails are undirected: [`deposit`](Self::deposit) always updates both
/// `(i, j)` and `(j, i)`. After every [`evaporate`](Self::evaporate) call
/// each entry is at least [`PHEROMONE_FLOOR`].
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with every entry at [`INITIAL_PHEROMONE`].
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![INITIAL_PHEROMONE; n * n],
        }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` for a matrix over zero cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail level between city `i` and city `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Multiplies every entry by `1 - rate`, then raises entries below the
    /// floor back to [`PHEROMONE_FLOOR`].
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for tau in &mut self.data {
            *tau *= keep;
            if *tau < PHEROMONE_FLOOR {
                *tau = PHEROMONE_FLOOR;
            }
        }
    }

    /// Adds `amount` to the trail between `i` and `j` in both directions.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        let n = self.n;
        self.data[i * n + j] += amount;
        self.data[j * n + i] += amount;
    }

    /// Deposits `q / length` on every edge of a closed tour.
    pub fn deposit_tour(&mut self, tour: &[usize], length: f64, q: f64) {
        if tour.len() < 2 {
            return;
        }
        let amount = q / length;
        for w in tour.windows(2) {
            self.deposit(w[0], w[1], amount);
        }
        self.deposit(tour[tour.len() - 1], tour[0], amount);
    }

    /// Smallest entry, or `None` for an empty matrix.
    pub fn min_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }
}
