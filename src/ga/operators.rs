//! Genetic operators over board encodings.
//!
//! - [`single_point_crossover`]: exchange column segments between two
//!   parents at a random cut point
//! - [`displace_mutation`]: move one random queen to a guaranteed-different
//!   row
//!
//! Both operators are closed over valid boards: children always have the
//! parents' length and every row stays in range.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use crate::board::Board;
use rand::Rng;

/// Single-point crossover at a random cut `c` in `[0, n - 2]`.
///
/// See [`crossover_at`] for the column assignment.
///
/// # Panics
/// Panics if the parents differ in size or have fewer than 2 columns.
pub fn single_point_crossover<R: Rng>(
    parent1: &Board,
    parent2: &Board,
    rng: &mut R,
) -> (Board, Board) {
    let n = parent1.size();
    assert!(n >= 2, "crossover needs at least 2 columns");
    let cut = rng.random_range(0..n - 1);
    crossover_at(parent1, parent2, cut)
}

/// Single-point crossover at an explicit cut point.
///
/// The first child takes parent2's columns `[0, cut]` and parent1's
/// columns `(cut, n)`; the second child takes the complementary
/// assignment. Every column of each child comes from exactly one parent.
///
/// # Panics
/// Panics if the parents differ in size or `cut >= n - 1`.
pub fn crossover_at(parent1: &Board, parent2: &Board, cut: usize) -> (Board, Board) {
    let n = parent1.size();
    assert_eq!(n, parent2.size(), "parents must have equal size");
    assert!(cut < n - 1, "cut point {cut} out of range for size {n}");

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for col in 0..n {
        if col <= cut {
            child1.push(parent2.row(col));
            child2.push(parent1.row(col));
        } else {
            child1.push(parent1.row(col));
            child2.push(parent2.row(col));
        }
    }
    (Board::from_rows(child1), Board::from_rows(child2))
}

/// Moves one random queen to a different row.
///
/// The new row is `(old + offset) mod n` with a random nonzero offset, so
/// the mutated column always changes and no other column is touched.
///
/// # Panics
/// Panics if the board has fewer than 2 columns (no different row exists).
pub fn displace_mutation<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.size();
    assert!(n >= 2, "mutation needs at least 2 rows");
    let col = rng.random_range(0..n);
    let offset = 1 + rng.random_range(0..n - 1);
    board.set_row(col, (board.row(col) + offset) % n);
}
