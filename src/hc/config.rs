//! Hill-climbing configuration: neighborhood, acceptance, and tie policies.

/// Size of the single-queen displacement neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Displace the chosen queen by 1 or 2 rows (16 neighbors for N=8).
    Small,

    /// Displace by anything in `1..=n-1` (56 neighbors for N=8).
    Large,
}

/// Policy for accepting a move that does not improve the cost.
///
/// Improving moves are always accepted; this governs the rest. Accepting
/// the occasional worse move lets the walk escape local optima.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Acceptance {
    /// Accept a non-improving move with a constant probability in
    /// `[0, 1]`. Zero gives strict hill climbing.
    Fixed(f64),

    /// Accept with probability `numerator / (100 * iteration)` — the
    /// acceptance percentage shrinks as the search progresses, similar to
    /// simulated annealing without an explicit temperature.
    ///
    /// Iterations are counted from 1, so the starting probability is
    /// `numerator / 100` (clamped to 1).
    Decaying {
        /// Percentage numerator; 60.0 starts at 60% on iteration 1.
        numerator: f64,
    },
}

/// Tie policy for the best-saved board.
///
/// The original accepts equal-cost boards into the best slot, so the
/// best-saved board churns among equal-cost states; kept configurable
/// rather than silently tightened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Update the best-saved board on equal or better cost.
    AcceptEqual,

    /// Update only on strictly better cost.
    StrictImprovement,
}

/// Configuration for the stochastic hill-climbing engine.
///
/// # Defaults
///
/// ```
/// use queens_metaheur::hc::{Acceptance, HcConfig, Neighborhood, TieBreak};
///
/// let config = HcConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.max_iterations, 10_000);
/// assert_eq!(config.neighborhood, Neighborhood::Large);
/// assert_eq!(config.acceptance, Acceptance::Fixed(0.30));
/// assert_eq!(config.reset_interval, 500);
/// assert_eq!(config.tie_break, TieBreak::AcceptEqual);
/// assert!(config.random_init);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_metaheur::hc::{Acceptance, HcConfig, Neighborhood};
///
/// let config = HcConfig::default()
///     .with_neighborhood(Neighborhood::Small)
///     .with_acceptance(Acceptance::Decaying { numerator: 60.0 })
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Number of columns (and rows) on the board. 8 for a normal chess board.
    pub board_size: usize,

    /// Maximum number of iterations (proposed moves) before termination.
    pub max_iterations: usize,

    /// Neighborhood to draw displacement magnitudes from.
    pub neighborhood: Neighborhood,

    /// Policy for accepting non-improving moves.
    pub acceptance: Acceptance,

    /// Iterations between resets of the current board to the best-saved
    /// board. Keeps the walk from drifting far from the best region.
    /// Set to 0 to disable resets.
    pub reset_interval: usize,

    /// Start from a random board (`true`) or the fixed staircase board
    /// (`false`, row = column index).
    pub random_init: bool,

    /// Tie policy for best-saved updates.
    pub tie_break: TieBreak,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            max_iterations: 10_000,
            neighborhood: Neighborhood::Large,
            acceptance: Acceptance::Fixed(0.30),
            reset_interval: 500,
            random_init: true,
            tie_break: TieBreak::AcceptEqual,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the displacement neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the acceptance policy for non-improving moves.
    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Sets the reset interval (0 to disable).
    pub fn with_reset_interval(mut self, interval: usize) -> Self {
        self.reset_interval = interval;
        self
    }

    /// Chooses between a random and a staircase initial board.
    pub fn with_random_init(mut self, random: bool) -> Self {
        self.random_init = random;
        self
    }

    /// Sets the best-saved tie policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 {
            return Err("board_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        match self.acceptance {
            Acceptance::Fixed(p) => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(format!("fixed acceptance must be in [0, 1], got {p}"));
                }
            }
            Acceptance::Decaying { numerator } => {
                if numerator <= 0.0 {
                    return Err(format!("decaying numerator must be positive, got {numerator}"));
                }
            }
        }
        Ok(())
    }
}
