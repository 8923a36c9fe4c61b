//! Units and peers for standard and diagonal Sudoku.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

use crate::{Cell, CellSet};

/// The rule variant a puzzle is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Rows, columns and boxes only.
    Standard,
    /// Rows, columns, boxes and the two main diagonals.
    #[default]
    Diagonal,
}

/// The kind of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One of the nine rows.
    Row,
    /// One of the nine columns.
    Column,
    /// One of the nine 3×3 boxes.
    Box,
    /// One of the two main diagonals (diagonal variant only).
    Diagonal,
}

/// A group of nine cells that must contain each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
}

impl Unit {
    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        self.kind
    }

    /// Returns the nine cells of this unit.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Maximum number of units any single cell can belong to.
///
/// A cell is in one row, one column and one box; in the diagonal variant
/// the center cell additionally lies on both diagonals.
const MAX_UNITS_PER_CELL: usize = 5;

/// The unit and peer structure of the grid.
///
/// Built once per solve and shared immutably: the rules and the search
/// driver take `&Topology` alongside the board they mutate. Two boards
/// solved under different variants simply use different topologies.
///
/// A cell's *peers* are all cells that share at least one unit with it,
/// excluding the cell itself. Under standard rules every cell has 20
/// peers; diagonal cells gain more.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Cell, Topology, Variant};
///
/// let standard = Topology::new(Variant::Standard);
/// assert_eq!(standard.units().len(), 27);
/// assert_eq!(standard.peers(Cell::new(0, 0)).len(), 20);
///
/// let diagonal = Topology::new(Variant::Diagonal);
/// assert_eq!(diagonal.units().len(), 29);
/// // A1 and E5 share the main diagonal.
/// assert!(diagonal.peers(Cell::new(0, 0)).contains(Cell::new(4, 4)));
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    units_by_cell: [ArrayVec<[u8; MAX_UNITS_PER_CELL]>; 81],
    peers: [CellSet; 81],
}

impl Topology {
    /// Builds the topology for the given variant.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn new(variant: Variant) -> Self {
        let mut units = Vec::with_capacity(29);

        for i in 0..9 {
            units.push(Unit {
                kind: UnitKind::Row,
                cells: std::array::from_fn(|c| Cell::new(i, c as u8)),
            });
        }
        for i in 0..9 {
            units.push(Unit {
                kind: UnitKind::Column,
                cells: std::array::from_fn(|r| Cell::new(r as u8, i)),
            });
        }
        for b in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Box,
                cells: std::array::from_fn(|i| {
                    let i = i as u8;
                    Cell::new((b / 3) * 3 + i / 3, (b % 3) * 3 + i % 3)
                }),
            });
        }
        if variant == Variant::Diagonal {
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
            });
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(8 - i as u8, i as u8)),
            });
        }

        let mut units_by_cell: [ArrayVec<[u8; MAX_UNITS_PER_CELL]>; 81] =
            std::array::from_fn(|_| ArrayVec::new());
        let mut peers = [CellSet::EMPTY; 81];
        for (unit_index, unit) in units.iter().enumerate() {
            let unit_index = unit_index as u8;
            for &cell in unit.cells() {
                units_by_cell[cell.index()].push(unit_index);
                for &other in unit.cells() {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            variant,
            units,
            units_by_cell,
            peers,
        }
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all units: 27 under standard rules, 29 with diagonals.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the units containing the given cell.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.units_by_cell[cell.index()]
            .iter()
            .map(|&i| &self.units[usize::from(i)])
    }

    /// Returns the peers of the given cell.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Diagonal => f.write_str("diagonal"),
        }
    }
}
