//! Cell coordinates on the 9×9 grid.

use derive_more::Display;

/// A cell position on the 9×9 grid, addressed as `(x, y)`.
///
/// `x` selects the column and `y` the row, both counted from the top-left
/// corner. Coordinates are plain values with structural equality and
/// hashing, so they work as map and set keys.
///
/// Construction performs no range check: [`Board::set`] is the validation
/// boundary and reports an out-of-range component as an error rather than
/// refusing to represent it.
///
/// # Examples
///
/// ```
/// use gridlace_core::Coordinate;
///
/// let coord = Coordinate::new(3, 7);
/// assert_eq!(coord.x(), 3);
/// assert_eq!(coord.y(), 7);
/// assert_eq!(coord.to_string(), "(3, 7)");
/// ```
///
/// [`Board::set`]: crate::Board::set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("({x}, {y})")]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Creates a coordinate from its column and row components.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column component.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row component.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns an iterator over all 81 grid cells in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Coordinate;
    ///
    /// let cells: Vec<_> = Coordinate::grid().collect();
    /// assert_eq!(cells.len(), 81);
    /// assert_eq!(cells[0], Coordinate::new(0, 0));
    /// assert_eq!(cells[1], Coordinate::new(1, 0));
    /// assert_eq!(cells[80], Coordinate::new(8, 8));
    /// ```
    pub fn grid() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self::new(x, y)))
    }
}
