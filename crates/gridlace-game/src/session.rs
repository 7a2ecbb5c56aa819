//! A playable game session and its binary persistence frame.

use derive_more::{Display, Error};
use gridlace_core::{Board, DecodeError, Difficulty};
use gridlace_generator::{GenerationExhausted, PuzzleGenerator, Seed};

/// A game session: the player-mutable `current` board, the generated
/// puzzle as `initial`, the difficulty it was generated for, and a turn
/// counter.
///
/// `initial` is never mutated after generation; it is only read back as
/// the copy source of [`reset`](Session::reset). Note that it holds the
/// generated *puzzle*, not the full completed solution — the solved grid
/// the search found is discarded once clues are removed. This is
/// intentional (and part of the persisted format's meaning), even though
/// it means the stored "solution template" cannot verify solvability
/// beyond the clues it shows.
///
/// Equality is structural over both boards, the difficulty, and the turn
/// counter.
///
/// # Examples
///
/// ```
/// use gridlace_core::Difficulty;
/// use gridlace_game::Session;
/// use gridlace_generator::{BacktrackingGenerator, Seed};
///
/// let session =
///     Session::start(Difficulty::Easy, &BacktrackingGenerator, &Seed::new("test")).unwrap();
/// assert_eq!(session.current(), session.initial());
/// assert_eq!(session.turn_count(), 0);
///
/// let restored = Session::decode(&session.encode()).unwrap();
/// assert_eq!(restored, session);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: Board,
    initial: Board,
    difficulty: Difficulty,
    turns: u32,
}

impl Session {
    /// Length in bytes of an encoded session frame: a 4-byte big-endian
    /// turn counter, one difficulty ordinal byte, and two board frames.
    pub const FRAME_LEN: usize = 4 + 1 + 2 * Board::FRAME_LEN;

    /// Starts a fresh session: the generator fills a new `initial`
    /// board, `current` becomes a copy of it, and the turn counter is 0.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerationExhausted`] from the generator.
    pub fn start<G>(
        difficulty: Difficulty,
        generator: &G,
        seed: &Seed,
    ) -> Result<Self, GenerationExhausted>
    where
        G: PuzzleGenerator + ?Sized,
    {
        let mut initial = Board::new();
        generator.generate(&mut initial, difficulty, seed)?;
        let current = initial.deep_copy();
        Ok(Self {
            current,
            initial,
            difficulty,
            turns: 0,
        })
    }

    /// The player-mutable board.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Mutable access to the player's board; this is how external
    /// callers place and clear digits cell by cell.
    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.current
    }

    /// The generated puzzle, exactly as produced.
    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// The difficulty this session was generated for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Copies `initial` back into `current`. The turn counter is left
    /// untouched; resetting it is a separate, caller-driven operation
    /// ([`reset_turns`](Session::reset_turns)).
    pub fn reset(&mut self) {
        self.current.copy_from(&self.initial);
    }

    /// Advances the turn counter by one. No upper bound.
    pub fn increment_turn(&mut self) {
        self.turns += 1;
    }

    /// The number of turns taken.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turns
    }

    /// Sets the turn counter back to 0.
    pub fn reset_turns(&mut self) {
        self.turns = 0;
    }

    /// Encodes the session into its fixed 87-byte frame.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::FRAME_LEN] {
        let mut out = [0u8; Self::FRAME_LEN];
        out[..4].copy_from_slice(&self.turns.to_be_bytes());
        out[4] = self.difficulty.ordinal();
        out[5..5 + Board::FRAME_LEN].copy_from_slice(&self.current.encode());
        out[5 + Board::FRAME_LEN..].copy_from_slice(&self.initial.encode());
        out
    }

    /// Decodes a session from its 87-byte frame. Trailing bytes beyond
    /// the frame are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDecodeError::Truncated`] on short input,
    /// [`SessionDecodeError::UnknownDifficulty`] if the ordinal byte
    /// matches no tier, and [`SessionDecodeError::Board`] if an embedded
    /// board frame is malformed. No partial session is returned.
    pub fn decode(bytes: &[u8]) -> Result<Self, SessionDecodeError> {
        if bytes.len() < Self::FRAME_LEN {
            return Err(SessionDecodeError::Truncated { len: bytes.len() });
        }
        let turns = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let ordinal = bytes[4];
        let difficulty = Difficulty::from_ordinal(ordinal)
            .ok_or(SessionDecodeError::UnknownDifficulty { ordinal })?;
        let current = Board::decode(&bytes[5..5 + Board::FRAME_LEN])?;
        let initial = Board::decode(&bytes[5 + Board::FRAME_LEN..Self::FRAME_LEN])?;
        Ok(Self {
            current,
            initial,
            difficulty,
            turns,
        })
    }
}

/// Malformed session frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionDecodeError {
    /// The input is shorter than the fixed 87-byte frame.
    #[display("session frame truncated: need 87 bytes, got {len}")]
    Truncated {
        /// Number of bytes actually available.
        len: usize,
    },
    /// The difficulty ordinal byte matches no tier.
    #[display("unknown difficulty ordinal {ordinal}")]
    UnknownDifficulty {
        /// The decoded ordinal.
        ordinal: u8,
    },
    /// An embedded board frame failed to decode.
    #[display("embedded board frame is malformed: {_0}")]
    Board(#[error(source)] DecodeError),
}

impl From<DecodeError> for SessionDecodeError {
    fn from(err: DecodeError) -> Self {
        Self::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use gridlace_core::Coordinate;
    use gridlace_generator::BacktrackingGenerator;

    use super::*;

    fn session(difficulty: Difficulty, seed: &str) -> Session {
        Session::start(difficulty, &BacktrackingGenerator, &Seed::new(seed)).unwrap()
    }

    fn empty_cell(board: &Board) -> Coordinate {
        Coordinate::grid()
            .find(|&coord| board.get(coord) == 0)
            .expect("puzzle has empty cells")
    }

    #[test]
    fn start_pairs_identical_boards() {
        let session = session(Difficulty::Easy, "test");
        assert_eq!(session.current(), session.initial());
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.turn_count(), 0);

        let clues = session.initial().filled_count();
        assert!((36..49).contains(&clues));
    }

    #[test]
    fn reset_restores_initial_but_keeps_turns() {
        let mut session = session(Difficulty::Medium, "test");
        let coord = empty_cell(session.current());
        session.current_mut().set(1, coord).unwrap();
        session.increment_turn();
        assert_ne!(session.current(), session.initial());

        session.reset();
        assert_eq!(session.current(), session.initial());
        assert_eq!(session.turn_count(), 1);

        session.reset_turns();
        assert_eq!(session.turn_count(), 0);
    }

    #[test]
    fn same_seed_yields_equal_sessions() {
        for difficulty in Difficulty::ALL {
            let a = session(difficulty, "Test");
            let b = session(difficulty, "Test");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn encode_decode_round_trip_with_turns() {
        let mut session = session(Difficulty::Easy, "test");
        session.increment_turn();
        session.increment_turn();
        session.increment_turn();

        let restored = Session::decode(&session.encode()).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.turn_count(), 3);
    }

    #[test]
    fn frame_layout() {
        let mut session = session(Difficulty::Hard, "test");
        for _ in 0..260 {
            session.increment_turn();
        }

        let frame = session.encode();
        assert_eq!(frame.len(), 87);
        assert_eq!(frame[..4], [0, 0, 1, 4]);
        assert_eq!(frame[4], Difficulty::Hard.ordinal());
        assert_eq!(frame[5..46], session.current().encode());
        assert_eq!(frame[46..], session.initial().encode());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        assert_eq!(
            Session::decode(&[0; 86]),
            Err(SessionDecodeError::Truncated { len: 86 })
        );
    }

    #[test]
    fn decode_rejects_unknown_difficulty() {
        let mut frame = session(Difficulty::Easy, "test").encode();
        frame[4] = 6;
        assert_eq!(
            Session::decode(&frame),
            Err(SessionDecodeError::UnknownDifficulty { ordinal: 6 })
        );
    }

    #[test]
    fn decode_surfaces_board_errors() {
        let mut frame = session(Difficulty::Easy, "test").encode();
        frame[6] = 0xFF;
        assert!(matches!(
            Session::decode(&frame),
            Err(SessionDecodeError::Board(DecodeError::InvalidDigit { .. }))
        ));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let session = session(Difficulty::Easy, "test");
        let mut bytes = session.encode().to_vec();
        bytes.push(0xAB);
        assert_eq!(Session::decode(&bytes).unwrap(), session);
    }
}
