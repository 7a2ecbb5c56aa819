//! The 9×9 sudoku board: cell access, validity checks, and the 41-byte
//! binary wire format.

use std::{collections::HashSet, fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{coordinate::Coordinate, digit_set::DigitSet};

/// A 9×9 grid of digits, where 0 denotes an empty cell.
///
/// The board owns its storage and upholds a single invariant: every cell
/// holds a value in `0..=9` at all times, enforced by rejecting writes at
/// the [`set`](Board::set) boundary. Validity of *placements* (no digit
/// reuse in a row, column, or box) is a queryable data state, never a
/// write failure.
///
/// Equality and hashing are structural: two boards are equal iff every
/// cell matches.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Coordinate};
///
/// let mut board = Board::new();
/// board.set(5, Coordinate::new(0, 0)).unwrap();
/// assert_eq!(board.get(Coordinate::new(0, 0)), 5);
///
/// // 5 now conflicts with itself nowhere, but a second 5 in the row does.
/// assert!(board.is_value_valid(5, Coordinate::new(0, 0)));
/// assert!(!board.is_value_valid(5, Coordinate::new(8, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[u8; 9]; 9],
}

impl Board {
    /// Grid side length.
    pub const SIZE: u8 = 9;

    /// Length in bytes of an encoded board frame.
    pub const FRAME_LEN: usize = 41;

    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` into the cell at `coord`.
    ///
    /// The write is unconditional: no placement-validity check is
    /// performed here. A value of 0 empties the cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ValueOutOfRange`] if `value > 9` and
    /// [`BoardError::OutOfBounds`] if either coordinate component is ≥9.
    /// The board is left unchanged on error.
    pub fn set(&mut self, value: u8, coord: Coordinate) -> Result<(), BoardError> {
        if value > 9 {
            return Err(BoardError::ValueOutOfRange { value });
        }
        if coord.x() >= Self::SIZE || coord.y() >= Self::SIZE {
            return Err(BoardError::OutOfBounds { coordinate: coord });
        }
        self.cells[coord.y() as usize][coord.x() as usize] = value;
        Ok(())
    }

    /// Returns the value stored at `coord` (0 = empty).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate component is ≥9.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> u8 {
        self.cells[coord.y() as usize][coord.x() as usize]
    }

    /// Empties the cell at `coord`, equivalent to `set(0, coord)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate component is ≥9.
    pub fn clear(&mut self, coord: Coordinate) {
        self.cells[coord.y() as usize][coord.x() as usize] = 0;
    }

    /// Returns the set of coordinates sharing `coord`'s row or column.
    ///
    /// `include_self` controls whether `coord` itself is part of the
    /// result (17 cells with it, 16 without).
    #[must_use]
    pub fn row_and_column_cells(coord: Coordinate, include_self: bool) -> HashSet<Coordinate> {
        let mut cells = HashSet::new();
        for i in 0..Self::SIZE {
            let row_cell = Coordinate::new(i, coord.y());
            let column_cell = Coordinate::new(coord.x(), i);
            if include_self || row_cell != coord {
                cells.insert(row_cell);
            }
            if include_self || column_cell != coord {
                cells.insert(column_cell);
            }
        }
        cells
    }

    /// Returns the 9 coordinates of the 3×3 box containing `coord`, with
    /// the box origin at `(x / 3 * 3, y / 3 * 3)`.
    ///
    /// `include_self` controls whether `coord` itself is part of the
    /// result.
    #[must_use]
    pub fn box_cells(coord: Coordinate, include_self: bool) -> HashSet<Coordinate> {
        let base_x = coord.x() / 3 * 3;
        let base_y = coord.y() / 3 * 3;
        let mut cells = HashSet::new();
        for y in base_y..base_y + 3 {
            for x in base_x..base_x + 3 {
                let cell = Coordinate::new(x, y);
                if include_self || cell != coord {
                    cells.insert(cell);
                }
            }
        }
        cells
    }

    /// Returns the non-empty values in `coord`'s row and column.
    #[must_use]
    pub fn row_and_column_values(&self, coord: Coordinate) -> DigitSet {
        self.values_of(&Self::row_and_column_cells(coord, true))
    }

    /// Returns the non-empty values in `coord`'s 3×3 box.
    #[must_use]
    pub fn box_values(&self, coord: Coordinate) -> DigitSet {
        self.values_of(&Self::box_cells(coord, true))
    }

    fn values_of(&self, cells: &HashSet<Coordinate>) -> DigitSet {
        let mut values = DigitSet::new();
        for &cell in cells {
            let value = self.get(cell);
            if value != 0 {
                values.insert(value);
            }
        }
        values
    }

    /// Returns whether placing `value` at `coord` would respect the
    /// row/column/box constraints.
    ///
    /// 0 is never valid: an empty cell carries no placed digit. Otherwise
    /// the value must not already appear among the *other* cells of
    /// `coord`'s row, column, or box; the cell's own current content is
    /// excluded from the comparison. Evaluated against the current board
    /// contents.
    #[must_use]
    pub fn is_value_valid(&self, value: u8, coord: Coordinate) -> bool {
        if value == 0 {
            return false;
        }
        let mut peers = Self::row_and_column_cells(coord, false);
        peers.extend(Self::box_cells(coord, false));
        peers.into_iter().all(|cell| self.get(cell) != value)
    }

    /// Returns whether the value currently stored at `coord` is valid,
    /// i.e. `is_value_valid(self.get(coord), coord)`.
    #[must_use]
    pub fn is_value_valid_at(&self, coord: Coordinate) -> bool {
        self.is_value_valid(self.get(coord), coord)
    }

    /// Returns whether the board is completely and consistently filled.
    ///
    /// Every cell must be valid under [`is_value_valid`] using its own
    /// stored value, so any empty cell makes the whole board unsolved.
    ///
    /// [`is_value_valid`]: Board::is_value_valid
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Coordinate::grid().all(|coord| self.is_value_valid_at(coord))
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Coordinate::grid()
            .filter(|&coord| self.get(coord) != 0)
            .count()
    }

    /// Produces an independent copy with identical contents.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Overwrites this board's contents from `other`, cell by cell.
    pub fn copy_from(&mut self, other: &Self) {
        self.cells = other.cells;
    }

    /// Encodes the board into its fixed 41-byte frame.
    ///
    /// The layout is bit-exact with the format this crate inherited:
    ///
    /// - byte 0: the value at (0,0) as a full byte — the one cell that
    ///   does not share a nibble;
    /// - bytes 1-4: column x=0, rows 1-8, two rows per byte with the
    ///   earlier row in the high nibble;
    /// - bytes 5-40: for each row, cells x=1..8 packed in pairs, high
    ///   nibble first.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::FRAME_LEN] {
        let mut out = [0u8; Self::FRAME_LEN];
        out[0] = self.get(Coordinate::new(0, 0));
        for (i, y) in (1u8..9).step_by(2).enumerate() {
            let high = self.get(Coordinate::new(0, y));
            let low = self.get(Coordinate::new(0, y + 1));
            out[1 + i] = (high << 4) | low;
        }
        let mut i = 5;
        for y in 0..Self::SIZE {
            for x in (1u8..9).step_by(2) {
                let high = self.get(Coordinate::new(x, y));
                let low = self.get(Coordinate::new(x + 1, y));
                out[i] = (high << 4) | low;
                i += 1;
            }
        }
        out
    }

    /// Decodes a board from its 41-byte frame. Trailing bytes beyond the
    /// frame are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 41 bytes are
    /// given, and [`DecodeError::InvalidDigit`] if a stored value falls
    /// outside `0..=9`. No partial board is returned on error.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < Self::FRAME_LEN {
            return Err(DecodeError::Truncated { len: bytes.len() });
        }
        let mut board = Self::new();
        board.put(bytes[0], Coordinate::new(0, 0))?;
        let mut y = 1;
        for &byte in &bytes[1..5] {
            board.put(byte >> 4, Coordinate::new(0, y))?;
            board.put(byte & 0x0F, Coordinate::new(0, y + 1))?;
            y += 2;
        }
        for (i, &byte) in bytes[5..Self::FRAME_LEN].iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let y = (i / 4) as u8;
            #[expect(clippy::cast_possible_truncation)]
            let x = (1 + 2 * (i % 4)) as u8;
            board.put(byte >> 4, Coordinate::new(x, y))?;
            board.put(byte & 0x0F, Coordinate::new(x + 1, y))?;
        }
        Ok(board)
    }

    fn put(&mut self, value: u8, coord: Coordinate) -> Result<(), DecodeError> {
        self.set(value, coord)
            .map_err(|_| DecodeError::InvalidDigit { value })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y % 3 == 0 && y != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for x in 0..9 {
                if x % 3 == 0 && x != 0 {
                    write!(f, "| ")?;
                }
                match self.cells[y][x] {
                    0 => write!(f, "_ ")?,
                    value => write!(f, "{value} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses an 81-character grid string in row-major order, where `1`-`9`
    /// are digits and `.` or `0` is an empty cell. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 81 {
            return Err(ParseBoardError::WrongLength { len: cells.len() });
        }
        let mut board = Self::new();
        for (coord, character) in Coordinate::grid().zip(cells) {
            let value = match character {
                '.' | '0' => 0,
                '1'..='9' => character as u8 - b'0',
                _ => return Err(ParseBoardError::InvalidCharacter { character }),
            };
            board.cells[coord.y() as usize][coord.x() as usize] = value;
        }
        Ok(board)
    }
}

/// Rejected cell write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The value does not fit the digit domain `0..=9`.
    #[display("value {value} is outside the digit range 0-9")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
    },
    /// A coordinate component lies outside the 9×9 grid.
    #[display("coordinate {coordinate} is outside the 9x9 grid")]
    OutOfBounds {
        /// The offending coordinate.
        coordinate: Coordinate,
    },
}

/// Malformed board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DecodeError {
    /// The input is shorter than the fixed 41-byte frame.
    #[display("board frame truncated: need 41 bytes, got {len}")]
    Truncated {
        /// Number of bytes actually available.
        len: usize,
    },
    /// A stored cell value falls outside the digit domain `0..=9`.
    #[display("board frame holds {value}, which is not a sudoku digit")]
    InvalidDigit {
        /// The decoded value.
        value: u8,
    },
}

/// Malformed grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The string does not hold exactly 81 cells.
    #[display("grid string holds {len} cells, expected 81")]
    WrongLength {
        /// Number of non-whitespace characters found.
        len: usize,
    },
    /// A character is neither a digit, `.`, nor `0`.
    #[display("unexpected character {character:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}
