//! Stochastic hill-climbing engine.
//!
//! Walks a single board through the space of single-queen displacements:
//! each iteration moves one random queen by a random amount, keeps the
//! move if it reduces the conflict count, and otherwise keeps it anyway
//! with a configurable probability — a hill-climbing variant with
//! probabilistic uphill acceptance, similar to simulated annealing
//! without a temperature schedule. The best board ever seen is saved
//! separately and the walk is periodically reset to it.
//!
//! # Key Types
//!
//! - [`HcConfig`]: search parameters ([`Neighborhood`], [`Acceptance`],
//!   [`TieBreak`], reset interval)
//! - [`HcRunner`]: executes the search loop
//! - [`HcResult`]: final best board with move counters and
//!   [`ResetEvent`] diagnostics
//!
//! # References
//!
//! - Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*
//!   (stochastic hill climbing, §4.1)

mod config;
mod runner;

pub use config::{Acceptance, HcConfig, Neighborhood, TieBreak};
pub use runner::{HcResult, HcRunner, ResetEvent};
