//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the genetic engine.
///
/// Controls board size, population size, operator rates, and termination.
///
/// # Defaults
///
/// ```
/// use queens_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 6);
/// assert_eq!(config.max_generations, 50_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_board_size(4)
///     .with_population_size(10)
///     .with_mutation_probability(0.4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of columns (and rows) on the board. 8 for a normal chess board.
    pub board_size: usize,

    /// Number of boards in the population.
    ///
    /// Must be even: each selection round pairs two parents and produces
    /// exactly two offspring, so the generation is refilled in pairs.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of mutating each offspring, independently (0.0–1.0).
    ///
    /// A mutation moves one random queen to a guaranteed-different row.
    pub mutation_probability: f64,

    /// Generations between reinjection of the best-saved board.
    ///
    /// Every this many generations, the population's worst member is
    /// overwritten with the best board seen so far, if strictly better.
    /// Set to 0 to disable reinjection.
    pub reinject_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 6,
            max_generations: 50_000,
            mutation_probability: 0.25,
            reinject_interval: 100,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the reinjection interval (0 to disable).
    pub fn with_reinject_interval(mut self, interval: usize) -> Self {
        self.reinject_interval = interval;
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
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.population_size % 2 != 0 {
            return Err("population_size must be even".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        Ok(())
    }
}
