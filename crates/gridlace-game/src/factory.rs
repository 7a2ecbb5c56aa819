//! Construction glue wiring the stock generator to sessions.

use gridlace_core::Difficulty;
use gridlace_generator::{BacktrackingGenerator, GenerationExhausted, Seed};

use crate::session::{Session, SessionDecodeError};

/// Starts a session with the stock backtracking generator and a freshly
/// drawn random seed.
///
/// # Errors
///
/// Propagates [`GenerationExhausted`] from the generator.
pub fn new_session(difficulty: Difficulty) -> Result<Session, GenerationExhausted> {
    new_session_with_seed(difficulty, &Seed::random())
}

/// Starts a session with the stock backtracking generator and a
/// caller-provided seed.
///
/// # Errors
///
/// Propagates [`GenerationExhausted`] from the generator.
pub fn new_session_with_seed(
    difficulty: Difficulty,
    seed: &Seed,
) -> Result<Session, GenerationExhausted> {
    Session::start(difficulty, &BacktrackingGenerator, seed)
}

/// Restores a session from its encoded frame.
///
/// # Errors
///
/// Propagates decode failures from [`Session::decode`].
pub fn load(bytes: &[u8]) -> Result<Session, SessionDecodeError> {
    Session::decode(bytes)
}
