//! Board state: one candidate set per cell.

use std::fmt::{self, Display, Write as _};
use std::str::FromStr;

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Cell, Digit, DigitSet};

/// The candidate state of a 9×9 puzzle.
///
/// Each cell holds a [`DigitSet`] of digits still possible there. A cell is
/// *solved* when its set has exactly one digit, and the board is in
/// *contradiction* when some cell's set is empty. Eliminations only ever
/// shrink sets; the board never re-adds a candidate, so backtracking works
/// by cloning the whole board before a guess.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Board, Cell, Digit};
///
/// let board: Board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///     .parse()
///     .unwrap();
///
/// assert_eq!(board.solved_digit(Cell::new(0, 0)), Some(Digit::new(2)));
/// assert_eq!(board.solved_count(), 17);
/// assert!(!board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates an empty board where every cell admits every digit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Parses a board from its 81-character row-major encoding.
    ///
    /// Characters `'1'`-`'9'` are clues; `'.'` and `'0'` mark unknown
    /// cells. Clue cells become single-candidate sets, unknown cells start
    /// with all nine candidates. No constraint propagation happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the string is not exactly 81 characters or
    /// contains a character outside `1`-`9`, `.` and `0`.
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        let len = line.chars().count();
        if len != 81 {
            return Err(ParseError::BadLength { len });
        }
        let mut board = Self::new();
        for (index, ch) in line.chars().enumerate() {
            match ch {
                '.' | '0' => {}
                _ => {
                    let digit =
                        Digit::from_char(ch).ok_or(ParseError::BadCharacter { ch, index })?;
                    board.cells[index] = DigitSet::from_digit(digit);
                }
            }
        }
        Ok(board)
    }

    /// Renders the board in the 81-character encoding, `'.'` for any cell
    /// that is not solved.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or('.', Digit::to_char))
            .collect()
    }

    /// Returns the candidate set of the given cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Fixes a cell to a single digit, discarding its other candidates.
    /// Returns `true` if the cell changed.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> bool {
        let single = DigitSet::from_digit(digit);
        let changed = self.cells[cell.index()] != single;
        self.cells[cell.index()] = single;
        changed
    }

    /// Removes a candidate from a cell. Returns `true` if the cell changed.
    ///
    /// Eliminating the last candidate leaves the cell empty; callers detect
    /// that through [`contradiction`](Self::contradiction).
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Returns the digit of a solved cell, or `None` if the cell still has
    /// several (or zero) candidates.
    #[must_use]
    pub const fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()].as_single()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if all 81 cells are solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == 81
    }

    /// Returns the first cell (row-major) with an empty candidate set, if
    /// any. A board with such a cell is unsolvable as it stands.
    #[must_use]
    pub fn contradiction(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.cells[cell.index()].is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl Display for Board {
    /// Renders the full candidate grid, one column per cell wide enough for
    /// the largest candidate set, with `3x3` box separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self
            .cells
            .iter()
            .map(|set| set.len())
            .max()
            .unwrap_or(1)
            .max(1);
        let segment = "-".repeat(width * 3);
        let separator = format!("{segment}+{segment}+{segment}");

        for row in 0..9 {
            if row == 3 || row == 6 {
                f.write_str(&separator)?;
                f.write_char('\n')?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    f.write_char('|')?;
                }
                let set = self.candidates(Cell::new(row, col));
                let text = if set.is_empty() {
                    "!".to_owned()
                } else {
                    set.to_string()
                };
                write!(f, "{text:^width$}")?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Board`] from its 81-character encoding
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseError {
    /// The encoding did not have exactly 81 characters.
    #[display("puzzle encoding must be 81 characters, got {len}")]
    BadLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The encoding contained a character that is not a digit or a
    /// placeholder.
    #[display("invalid character {ch:?} at position {index}")]
    BadCharacter {
        /// The offending character.
        ch: char,
        /// Its position in the input.
        index: usize,
    },
}
