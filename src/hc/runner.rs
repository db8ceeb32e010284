//! Hill-climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize the current board (random or staircase) and save it as
//!    the best
//! 2. At each iteration:
//!    a. Displace one random queen by a random amount from the
//!       configured neighborhood
//!    b. Accept the move if it improves the cost; otherwise accept with
//!       the configured probability, or revert the column
//!    c. Update the best-saved board per the tie policy
//!    d. Every `reset_interval` iterations, copy the best-saved board
//!       back over the current one
//! 3. Terminate on a zero-cost board or after `max_iterations`
//!
//! The engine **minimizes** the raw conflict count from
//! [`Board::conflicts`]; see [`crate::board`] for the sign conventions.

use super::config::{Acceptance, HcConfig, Neighborhood, TieBreak};
use crate::board::Board;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Best-cost samples are recorded every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// A reset of the current board to the best-saved board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetEvent {
    /// Iteration at which the reset fired (a multiple of the interval).
    pub iteration: usize,

    /// Best-saved cost at the reset.
    pub cost: usize,

    /// Diagnostic hash of the board state restored.
    pub hash: u64,
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// The initial board, evaluated, before any moves.
    pub initial: Board,

    /// The best board found.
    pub best: Board,

    /// Conflict count of the best board (0 means solved).
    pub best_cost: usize,

    /// Total number of iterations (proposed moves).
    pub iterations: usize,

    /// Whether a zero-conflict board was found.
    pub solved: bool,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Number of best-saved updates. Under [`TieBreak::AcceptEqual`] this
    /// includes churn among equal-cost boards.
    pub best_updates: usize,

    /// Resets of the current board to the best-saved board, in order.
    pub resets: Vec<ResetEvent>,

    /// Best cost sampled every 100 iterations. Monotonically non-increasing.
    pub cost_history: Vec<usize>,
}

/// Executes the stochastic hill-climbing engine.
///
/// # Usage
///
/// ```
/// use queens_metaheur::hc::{HcConfig, HcRunner};
///
/// let config = HcConfig::default().with_board_size(4).with_seed(42);
/// let result = HcRunner::run(&config);
/// assert!(result.best_cost <= queens_metaheur::board::max_pairs(4));
/// ```
pub struct HcRunner;

impl HcRunner {
    /// Runs the search until a solution is found or the iteration budget
    /// is exhausted.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`HcConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(config: &HcConfig) -> HcResult {
        config.validate().expect("invalid HcConfig");

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let n = config.board_size;
        let mut current = if config.random_init {
            Board::random(n, &mut rng)
        } else {
            Board::staircase(n)
        };
        let mut current_cost = current.conflicts();
        let initial = current.clone();

        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut iterations = 0;
        let mut accepted_moves = 0;
        let mut improving_moves = 0;
        let mut best_updates = 0;
        let mut resets = Vec::new();
        let mut cost_history = vec![best_cost];

        while current_cost != 0 && iterations < config.max_iterations {
            iterations += 1;

            // Propose a single-queen displacement
            let col = rng.random_range(0..n);
            let disp = displacement(config.neighborhood, n, &mut rng);
            let old_row = current.row(col);
            current.set_row(col, (old_row + disp) % n);
            let new_cost = current.conflicts();

            if new_cost < current_cost {
                improving_moves += 1;
                accepted_moves += 1;
                current_cost = new_cost;
            } else if accepts_worse(config.acceptance, iterations, &mut rng) {
                accepted_moves += 1;
                current_cost = new_cost;
            } else {
                current.set_row(col, old_row);
            }

            let improves_best = match config.tie_break {
                TieBreak::AcceptEqual => current_cost <= best_cost,
                TieBreak::StrictImprovement => current_cost < best_cost,
            };
            if improves_best {
                best = current.clone();
                best_cost = current_cost;
                best_updates += 1;
            }

            if config.reset_interval > 0 && iterations % config.reset_interval == 0 {
                current = best.clone();
                current_cost = best_cost;
                resets.push(ResetEvent {
                    iteration: iterations,
                    cost: best_cost,
                    hash: current.state_hash(),
                });
            }

            if iterations % HISTORY_INTERVAL == 0 {
                cost_history.push(best_cost);
            }
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        best.conflicts();
        HcResult {
            solved: best_cost == 0,
            initial,
            best,
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            best_updates,
            resets,
            cost_history,
        }
    }
}

/// Draws a displacement magnitude from the configured neighborhood.
///
/// Small: `{1, 2}` (clamped to `n - 1`); Large: `{1, ..., n - 1}`.
fn displacement(neighborhood: Neighborhood, n: usize, rng: &mut SmallRng) -> usize {
    let span = match neighborhood {
        Neighborhood::Small => 2.min(n - 1),
        Neighborhood::Large => n - 1,
    };
    1 + rng.random_range(0..span)
}

/// Decides whether to keep a non-improving move.
fn accepts_worse(acceptance: Acceptance, iteration: usize, rng: &mut SmallRng) -> bool {
    let probability = match acceptance {
        Acceptance::Fixed(p) => p,
        Acceptance::Decaying { numerator } => (numerator / (100.0 * iteration as f64)).min(1.0),
    };
    probability > 0.0 && rng.random_range(0.0..1.0) < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::max_pairs;

    #[test]
    fn test_four_queens_solves() {
        for seed in [1, 7, 42] {
            let config = HcConfig::default().with_board_size(4).with_seed(seed);
            let result = HcRunner::run(&config);

            assert!(result.solved, "seed {seed} failed to solve 4-queens");
            assert_eq!(result.best_cost, 0);
            assert_eq!(result.best.cached_conflicts(), Some(0));
        }
    }

    #[test]
    fn test_strict_hill_climbing_never_accepts_worse() {
        let config = HcConfig::default()
            .with_acceptance(Acceptance::Fixed(0.0))
            .with_seed(42);
        let result = HcRunner::run(&config);

        assert_eq!(
            result.accepted_moves, result.improving_moves,
            "with zero acceptance probability every accepted move must improve"
        );
    }

    #[test]
    fn test_cost_history_monotone_non_increasing() {
        let config = HcConfig::default().with_seed(42);
        let result = HcRunner::run(&config);

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-saved cost must never increase: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_staircase_init_starts_at_worst_cost() {
        let config = HcConfig::default()
            .with_random_init(false)
            .with_max_iterations(10)
            .with_acceptance(Acceptance::Fixed(0.0))
            .with_seed(42);
        let result = HcRunner::run(&config);

        assert_eq!(result.cost_history[0], max_pairs(8));
    }

    #[test]
    fn test_reset_events_fire_on_interval() {
        let config = HcConfig::default()
            .with_random_init(false)
            .with_acceptance(Acceptance::Fixed(0.0))
            .with_reset_interval(50)
            .with_max_iterations(300)
            .with_seed(42);
        let result = HcRunner::run(&config);

        assert!(!result.resets.is_empty());
        for event in &result.resets {
            assert_eq!(event.iteration % 50, 0);
        }
        for window in result.resets.windows(2) {
            assert!(window[1].cost <= window[0].cost);
        }
    }

    #[test]
    fn test_resets_disabled() {
        let config = HcConfig::default()
            .with_reset_interval(0)
            .with_max_iterations(500)
            .with_seed(42);
        let result = HcRunner::run(&config);
        assert!(result.resets.is_empty());
    }

    #[test]
    fn test_strict_tie_break_updates_no_more_than_accept_equal() {
        // Resets copy the best board back into the walk, so they are
        // disabled here to keep the two trajectories identical; the tie
        // policy then only affects how often the best slot is rewritten.
        let equal = HcRunner::run(
            &HcConfig::default()
                .with_tie_break(TieBreak::AcceptEqual)
                .with_reset_interval(0)
                .with_seed(42),
        );
        let strict = HcRunner::run(
            &HcConfig::default()
                .with_tie_break(TieBreak::StrictImprovement)
                .with_reset_interval(0)
                .with_seed(42),
        );

        assert!(strict.best_updates <= equal.best_updates);
        assert_eq!(strict.best_cost, equal.best_cost);
        assert_eq!(strict.iterations, equal.iterations);
    }

    #[test]
    fn test_small_neighborhood_solves_four_queens() {
        let config = HcConfig::default()
            .with_board_size(4)
            .with_neighborhood(Neighborhood::Small)
            .with_seed(7);
        let result = HcRunner::run(&config);
        assert!(result.solved);
    }

    #[test]
    fn test_decaying_acceptance_runs() {
        let config = HcConfig::default()
            .with_acceptance(Acceptance::Decaying { numerator: 60.0 })
            .with_seed(42);
        let result = HcRunner::run(&config);
        assert!(result.iterations <= 10_000);
        assert!(result.best_cost <= max_pairs(8));
    }

    #[test]
    fn test_trivial_board_solved_without_moving() {
        let config = HcConfig::default().with_board_size(1).with_seed(42);
        let result = HcRunner::run(&config);

        assert!(result.solved);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.accepted_moves, 0);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let config = HcConfig::default().with_seed(99);
        let a = HcRunner::run(&config);
        let b = HcRunner::run(&config);

        assert_eq!(a.cost_history, b.cost_history);
        assert_eq!(a.best.rows(), b.best.rows());
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    #[should_panic(expected = "invalid HcConfig")]
    fn test_invalid_config_panics() {
        let config = HcConfig::default().with_max_iterations(0);
        HcRunner::run(&config);
    }
}
