//! Cell positions on the 9×9 grid and sets of them.

use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use std::str::FromStr;

use derive_more::{Display as DeriveDisplay, Error};

/// A cell position on the 9×9 grid.
///
/// Cells are numbered 0-80 in row-major order and displayed in the usual
/// Sudoku notation: rows `A`-`I` top to bottom, columns `1`-`9` left to
/// right, so cell 0 is `A1` and cell 80 is `I9`.
///
/// # Examples
///
/// ```
/// use crosshatch_core::Cell;
///
/// let cell = Cell::new(4, 4);
/// assert_eq!(cell.to_string(), "E5");
/// assert_eq!(cell.index(), 40);
/// assert_eq!(cell.box_index(), 4);
///
/// let parsed: Cell = "E5".parse().unwrap();
/// assert_eq!(parsed, cell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Creates a cell from row and column, both in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "row and column must be less than 9");
        Self(row * 9 + col)
    }

    /// Creates a cell from its row-major index in the range 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index must be less than 81");
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self(index)
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row of this cell (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column of this cell (0-8, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8,
    /// row-major over boxes).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..81).map(Self::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = self.col() + 1;
        write!(f, "{row}{col}")
    }
}

/// Error returned when parsing a [`Cell`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
#[display("invalid cell label (expected `A1` through `I9`)")]
pub struct ParseCellError;

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row @ 'A'..='I'), Some(col @ '1'..='9'), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCellError);
        };
        Ok(Self::new(row as u8 - b'A', col as u8 - b'1'))
    }
}

/// A set of cell positions.
///
/// Backed by a 128-bit integer with one bit per cell in row-major order.
/// The topology uses this to represent peer sets, and the naked-twins rule
/// intersects two peer sets to find the cells both twins can see.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Cell, CellSet};
///
/// let mut set = CellSet::EMPTY;
/// set.insert(Cell::new(0, 0));
/// set.insert(Cell::new(8, 8));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::new(0, 0)));
/// assert!(!set.contains(Cell::new(4, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u128);

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Inserts a cell. Returns `true` if the set changed.
    pub const fn insert(&mut self, cell: Cell) -> bool {
        let before = self.0;
        self.0 |= 1 << cell.0;
        self.0 != before
    }

    /// Removes a cell. Returns `true` if the set changed.
    pub const fn remove(&mut self, cell: Cell) -> bool {
        let before = self.0;
        self.0 &= !(1 << cell.0);
        self.0 != before
    }

    /// Returns `true` if the set contains the cell.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & (1 << cell.0) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the cells in row-major order.
    #[must_use]
    pub const fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`] in row-major order.
#[derive(Debug, Clone)]
pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let cell = Cell::from_index(self.0.trailing_zeros() as usize);
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CellSetIter {}
impl ExactSizeIterator for CellSetIter {}
