//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement,
//! with best-ever tracking and periodic reinjection of the best board
//! over the population's worst member.

use super::config::GaConfig;
use super::operators::{displace_mutation, single_point_crossover};
use super::selection::{cumulative_fractions, select_distinct_parents};
use crate::board::{fitness_ceiling, Board};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Result of a genetic engine run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The initial population, evaluated, before any evolution.
    pub initial_population: Vec<Board>,

    /// The best board found during the entire run.
    pub best: Board,

    /// Fitness of the best board (`fitness_ceiling(n)` means solved).
    pub best_fitness: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether a zero-conflict board was found.
    pub solved: bool,

    /// Best-saved fitness at the end of each generation, starting with the
    /// initial population. Monotonically non-decreasing.
    pub fitness_history: Vec<usize>,
}

/// Executes the genetic engine.
///
/// # Usage
///
/// ```
/// use queens_metaheur::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_board_size(4).with_seed(42);
/// let result = GaRunner::run(&config);
/// assert!(result.best_fitness <= queens_metaheur::board::fitness_ceiling(4));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolutionary loop until a solution is found or the
    /// generation budget is exhausted.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let n = config.board_size;
        let ceiling = fitness_ceiling(n);

        // Initialize and evaluate the population
        let mut population: Vec<Board> =
            (0..config.population_size).map(|_| Board::random(n, &mut rng)).collect();
        evaluate(&mut population);
        let initial_population = population.clone();

        // Best-saved board: owned independently of the population, only
        // ever replaced by a strictly fitter candidate.
        let b = best_index(&population);
        let mut best = population[b].clone();
        let mut best_fitness = ceiling - conflicts_of(&best);

        let mut fitness_history = Vec::new();
        fitness_history.push(best_fitness);

        let mut generations = 0;
        let mut solved = best_fitness == ceiling;

        while !solved && generations < config.max_generations {
            next_generation(&mut population, ceiling, config, &mut rng);
            generations += 1;

            let b = best_index(&population);
            let gen_best_fitness = ceiling - conflicts_of(&population[b]);
            if gen_best_fitness > best_fitness {
                best = population[b].clone();
                best_fitness = gen_best_fitness;
            }
            fitness_history.push(best_fitness);

            if best_fitness == ceiling {
                solved = true;
                break;
            }

            // Reinjection: overwrite the worst member with the best-saved
            // board, keeping elite pressure without per-generation elitism.
            if config.reinject_interval > 0 && generations % config.reinject_interval == 0 {
                let w = worst_index(&population);
                if best_fitness > ceiling - conflicts_of(&population[w]) {
                    population[w] = best.clone();
                }
            }
        }

        GaResult {
            initial_population,
            best,
            best_fitness,
            generations,
            solved,
            fitness_history,
        }
    }
}

/// Replaces the population with a full generation of offspring.
///
/// Parents are drawn by fitness-proportional selection, recombined with
/// single-point crossover, and mutated with the configured probability;
/// each pairing yields exactly two children.
fn next_generation(
    population: &mut Vec<Board>,
    ceiling: usize,
    config: &GaConfig,
    rng: &mut SmallRng,
) {
    let fitness: Vec<usize> = population.iter().map(|b| ceiling - conflicts_of(b)).collect();
    let fractions = cumulative_fractions(&fitness);
    let parents = std::mem::take(population);

    for _ in 0..parents.len() / 2 {
        let (p1, p2) = select_distinct_parents(&fractions, rng);
        let (mut c1, mut c2) = single_point_crossover(&parents[p1], &parents[p2], rng);

        if rng.random_range(0.0..1.0) < config.mutation_probability {
            displace_mutation(&mut c1, rng);
        }
        if rng.random_range(0.0..1.0) < config.mutation_probability {
            displace_mutation(&mut c2, rng);
        }

        // Evaluate after mutation so no child carries a stale cache.
        c1.conflicts();
        c2.conflicts();
        population.push(c1);
        population.push(c2);
    }
}

/// Fill every board's conflict cache.
fn evaluate(population: &mut [Board]) {
    for board in population.iter_mut() {
        board.conflicts();
    }
}

/// Cached conflict count of an evaluated board.
///
/// # Panics
/// Panics if the board has not been evaluated since its last mutation.
fn conflicts_of(board: &Board) -> usize {
    board.cached_conflicts().expect("board not evaluated")
}

/// Index of the fittest board — an explicit scan, independent of any
/// population ordering.
fn best_index(population: &[Board]) -> usize {
    let mut best = 0;
    for p in 1..population.len() {
        if conflicts_of(&population[p]) < conflicts_of(&population[best]) {
            best = p;
        }
    }
    best
}

/// Index of the least fit board — an explicit scan.
fn worst_index(population: &[Board]) -> usize {
    let mut worst = 0;
    for p in 1..population.len() {
        if conflicts_of(&population[p]) > conflicts_of(&population[worst]) {
            worst = p;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_queens_solves() {
        let config = GaConfig::default().with_board_size(4).with_seed(42);
        let result = GaRunner::run(&config);

        assert!(result.solved, "4-queens should be solved within the budget");
        assert_eq!(result.best_fitness, fitness_ceiling(4));
        let mut best = result.best.clone();
        assert_eq!(best.conflicts(), 0);
    }

    #[test]
    fn test_four_queens_solves_across_seeds() {
        for seed in [1, 7, 1234] {
            let config = GaConfig::default().with_board_size(4).with_seed(seed);
            let result = GaRunner::run(&config);
            assert!(result.solved, "seed {seed} failed to solve 4-queens");
        }
    }

    #[test]
    fn test_history_monotone_non_decreasing() {
        let config = GaConfig::default()
            .with_max_generations(500)
            .with_seed(42);
        let result = GaRunner::run(&config);

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best-saved fitness must never decrease: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_trivial_board_solved_without_evolving() {
        // A 1-column board has no conflicts; the loop never runs.
        let config = GaConfig::default().with_board_size(1).with_seed(42);
        let result = GaRunner::run(&config);

        assert!(result.solved);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_eight_queens_improves() {
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&config);

        let initial = result.fitness_history[0];
        assert!(
            result.best_fitness > initial,
            "expected improvement over initial fitness {initial}"
        );
        assert!(result.best_fitness <= fitness_ceiling(8));
    }

    #[test]
    fn test_reinjection_disabled() {
        let config = GaConfig::default()
            .with_board_size(4)
            .with_reinject_interval(0)
            .with_max_generations(200)
            .with_seed(42);
        let result = GaRunner::run(&config);
        assert!(result.generations <= 200);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let config = GaConfig::default()
            .with_max_generations(300)
            .with_seed(99);
        let a = GaRunner::run(&config);
        let b = GaRunner::run(&config);

        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.best.rows(), b.best.rows());
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_invalid_config_panics() {
        let config = GaConfig::default().with_population_size(5);
        GaRunner::run(&config);
    }
}
