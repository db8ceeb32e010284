//! Fitness-proportional parent selection.
//!
//! Selection builds a cumulative normalized fitness distribution over the
//! population and maps a uniform draw in `[0, 1)` to a population index.
//! Higher-fitness boards occupy wider bins and are selected more often.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning* (roulette wheel selection)

use rand::Rng;

/// Retry budget for drawing a second, distinct parent.
///
/// With two or more strictly positive weights the resampling loop
/// terminates almost surely; the bound turns the remaining degenerate
/// cases into a fail-fast panic instead of a hang.
const DISTINCT_DRAW_LIMIT: usize = 10_000;

/// Builds the cumulative fraction distribution over a fitness vector.
///
/// `fractions[p]` is the probability that a uniform draw selects an index
/// `<= p`; the last entry is pinned to exactly 1.0. A zero fitness sum
/// cannot occur with this crate's fitness scale (every board scores at
/// least 2), but is guarded by falling back to a uniform distribution.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn cumulative_fractions(fitness: &[usize]) -> Vec<f64> {
    assert!(!fitness.is_empty(), "cannot select from an empty population");

    let n = fitness.len();
    let total: usize = fitness.iter().sum();
    if total == 0 {
        return (0..n).map(|p| (p + 1) as f64 / n as f64).collect();
    }

    let mut fractions = Vec::with_capacity(n);
    let mut cumulative = 0.0;
    for (p, &f) in fitness.iter().enumerate() {
        if p == n - 1 {
            fractions.push(1.0);
        } else {
            cumulative += f as f64 / total as f64;
            fractions.push(cumulative);
        }
    }
    fractions
}

/// Maps a uniform draw in `[0, 1)` to a population index.
///
/// Bin boundaries: a draw `<=` the first fraction selects index 0; a draw
/// `>` the second-to-last fraction selects the last index; otherwise the
/// first `p` with `fractions[p] < draw <= fractions[p + 1]` selects
/// `p + 1`.
///
/// # Panics
/// Panics if `fractions` is empty.
pub fn weighted_index(fractions: &[f64], draw: f64) -> usize {
    let n = fractions.len();
    assert!(n > 0, "cannot select from an empty population");

    if n == 1 || draw <= fractions[0] {
        return 0;
    }
    if draw > fractions[n - 2] {
        return n - 1;
    }
    for p in 0..n - 2 {
        if draw > fractions[p] && draw <= fractions[p + 1] {
            return p + 1;
        }
    }
    // Unreachable for any draw in [0, 1): the branches above partition it.
    n - 1
}

/// Selects one parent index by fitness-proportional draw.
pub fn select_parent<R: Rng>(fractions: &[f64], rng: &mut R) -> usize {
    weighted_index(fractions, rng.random_range(0.0..1.0))
}

/// Selects two distinct parent indices.
///
/// The second index is resampled until it differs from the first, up to
/// a fixed retry budget.
///
/// # Panics
/// Panics with a selection-deadlock message if no distinct second parent
/// is found within the retry budget (only possible for a degenerate
/// population, e.g. size 1).
pub fn select_distinct_parents<R: Rng>(fractions: &[f64], rng: &mut R) -> (usize, usize) {
    let first = select_parent(fractions, rng);
    for _ in 0..DISTINCT_DRAW_LIMIT {
        let second = select_parent(fractions, rng);
        if second != first {
            return (first, second);
        }
    }
    panic!(
        "selection deadlock: no distinct second parent after {DISTINCT_DRAW_LIMIT} draws \
         (population size {})",
        fractions.len()
    );
}
