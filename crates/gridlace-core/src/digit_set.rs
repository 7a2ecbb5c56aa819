//! A set of sudoku digits 1-9, backed by a bitmask.

/// A set of digits from 1 to 9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent
/// digits 1-9, providing cheap storage and fast membership tests. It is
/// used for the row/column/box value queries on [`Board`] and for the
/// generator's per-cell tried-sets.
///
/// # Examples
///
/// ```
/// use gridlace_core::DigitSet;
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
///
/// [`Board`]: crate::Board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0x1FF);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn mask(digit: u8) -> u16 {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Inserts a digit into the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn insert(&mut self, digit: u8) {
        self.0 |= Self::mask(digit);
    }

    /// Removes a digit from the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn remove(&mut self, digit: u8) {
        self.0 &= !Self::mask(digit);
    }

    /// Returns whether the set contains a digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the digits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { set: self, next: 1 }
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    set: DigitSet,
    next: u8,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.next <= 9 {
            let digit = self.next;
            self.next += 1;
            if self.set.contains(digit) {
                return Some(digit);
            }
        }
        None
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
