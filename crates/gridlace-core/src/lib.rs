//! Core sudoku model: coordinates, digit sets, the 9×9 board with its
//! validity checks, difficulty tiers, and the compact binary board format.

pub mod board;
pub mod coordinate;
pub mod difficulty;
pub mod digit_set;

pub use board::{Board, BoardError, DecodeError, ParseBoardError};
pub use coordinate::Coordinate;
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use digit_set::DigitSet;
