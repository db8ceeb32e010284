//! Metaheuristic N-Queens solvers.
//!
//! Two independent search engines share one board/cost model:
//!
//! - **Genetic engine** ([`ga`]): evolves a small population of boards
//!   with fitness-proportional selection, single-point crossover, and
//!   low-probability mutation, replacing the whole population each
//!   generation and periodically reinjecting the best board ever seen.
//! - **Hill-climbing engine** ([`hc`]): walks a single board through
//!   single-queen displacements, accepting improvements always and
//!   worse moves with a configurable probability, with periodic resets
//!   to the best board found.
//!
//! Both minimize pairwise queen attacks ([`board::Board::conflicts`])
//! and stop on a zero-conflict board or an iteration budget. The GA
//! reports the complementary maximize-this score
//! `fitness = fitness_ceiling(n) - conflicts`; see [`board`] for the
//! two sign conventions.
//!
//! # Example
//!
//! ```
//! use queens_metaheur::ga::{GaConfig, GaRunner};
//! use queens_metaheur::hc::{HcConfig, HcRunner};
//!
//! let ga = GaRunner::run(&GaConfig::default().with_board_size(4).with_seed(42));
//! let hc = HcRunner::run(&HcConfig::default().with_board_size(4).with_seed(42));
//! assert!(ga.solved && hc.solved);
//! ```

pub mod board;
pub mod ga;
pub mod hc;
