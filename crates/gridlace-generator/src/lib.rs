//! Seed-reproducible sudoku puzzle generation.
//!
//! A [`PuzzleGenerator`] fills an empty [`Board`] with a playable puzzle
//! for a requested [`Difficulty`]. All randomness is drawn from a single
//! stream derived from a [`Seed`], so the same seed and difficulty always
//! produce the same puzzle, on every run and platform.

use derive_more::{Display, Error};
use gridlace_core::{Board, Difficulty};

pub mod backtracking;
pub mod seed;

pub use backtracking::BacktrackingGenerator;
pub use seed::Seed;

/// Maximum cell-visit iterations before generation is declared failed.
///
/// A correctly behaving search on a 9×9 grid converges in a small
/// multiple of 81 iterations; the cap only guards against pathological
/// non-termination.
pub const MAX_ITERATIONS: u32 = 1_000_000;

/// Fatal generation failure: the search exceeded [`MAX_ITERATIONS`]
/// without resolving every cell.
///
/// The generator performs no automatic retry; a caller may retry with a
/// different seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("puzzle generation gave up after 1000000 search iterations")]
pub struct GenerationExhausted;

/// Fills an empty board with a playable puzzle.
pub trait PuzzleGenerator {
    /// Fills `board` with a puzzle whose clue count lies in
    /// `difficulty`'s range, deterministically derived from `seed`.
    ///
    /// `board` is expected to be empty; its previous contents are
    /// overwritten during the search.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationExhausted`] if the search exceeds its
    /// iteration cap. The board's contents are unspecified afterwards.
    fn generate(
        &self,
        board: &mut Board,
        difficulty: Difficulty,
        seed: &Seed,
    ) -> Result<(), GenerationExhausted>;
}
