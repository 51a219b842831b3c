//! Compass directions and 3x3 neighbourhood signatures
//!
//! A signature records which of the eight cells surrounding a position are
//! occupied. Neighbours that fall outside the grid are treated as empty, so
//! edge and corner cells simply produce smaller signatures.

use bitvec::BitArr;
use bitvec::order::Lsb0;
use std::fmt;

use crate::spatial::grid::TileGrid;

/// Neighbour position relative to the centre cell
///
/// North is the row above, south the row below, west the column to the
/// left and east the column to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row above, column to the left
    NorthWest,
    /// Row above
    North,
    /// Row above, column to the right
    NorthEast,
    /// Column to the left
    West,
    /// Column to the right
    East,
    /// Row below, column to the left
    SouthWest,
    /// Row below
    South,
    /// Row below, column to the right
    SouthEast,
}

impl Direction {
    /// All directions in row-major order around the centre
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// `(row, col)` offset of this neighbour from the centre cell
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::SouthWest => (1, -1),
            Self::South => (1, 0),
            Self::SouthEast => (1, 1),
        }
    }

    /// Whether the direction lies on a grid axis rather than a diagonal
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::West | Self::East | Self::South)
    }

    /// Position of the direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn name(self) -> &'static str {
        match self {
            Self::NorthWest => "north-west",
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::West => "west",
            Self::East => "east",
            Self::SouthWest => "south-west",
            Self::South => "south",
            Self::SouthEast => "south-east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type DirectionBits = BitArr!(for 8, in u8, Lsb0);

/// Set of occupied directions around one cell
#[derive(Clone)]
pub struct Signature {
    bits: DirectionBits,
}

impl Default for Signature {
    fn default() -> Self {
        Self::empty()
    }
}

impl Signature {
    /// Signature with no occupied neighbours
    pub const fn empty() -> Self {
        Self {
            bits: DirectionBits::ZERO,
        }
    }

    /// Signature containing exactly `directions`
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut signature = Self::empty();
        for &direction in directions {
            signature.insert(direction);
        }
        signature
    }

    /// Mark `direction` as occupied
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.index(), true);
    }

    /// Test whether `direction` is occupied
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.index()).is_some_and(|bit| *bit)
    }

    /// Test whether every direction in `required` is occupied
    pub fn contains_all(&self, required: &[Direction]) -> bool {
        required.iter().all(|&direction| self.contains(direction))
    }

    /// Number of occupied directions
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no direction is occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Occupied directions in row-major order
    pub fn directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.contains(direction))
            .collect()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        Direction::ALL
            .into_iter()
            .all(|direction| self.contains(direction) == other.contains(direction))
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.directions()).finish()
    }
}

/// Collect the occupied neighbours of `(row, col)`
///
/// Offsets that leave the grid are skipped, never wrapped.
pub fn build_signature(grid: &TileGrid, row: usize, col: usize) -> Signature {
    let mut signature = Signature::empty();
    for direction in Direction::ALL {
        let (row_offset, col_offset) = direction.offset();
        let (Some(neighbor_row), Some(neighbor_col)) = (
            row.checked_add_signed(row_offset),
            col.checked_add_signed(col_offset),
        ) else {
            continue;
        };
        if grid.is_occupied(neighbor_row, neighbor_col) {
            signature.insert(direction);
        }
    }
    signature
}
