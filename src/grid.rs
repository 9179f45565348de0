//! Observable board state: cells, coordinates and the action codec.
//!
//! This is the only information a targeting bot ever sees. Ship identities
//! and positions stay inside the environment; the grid records just the
//! outcome of every attack so far.

use core::fmt;

use crate::common::GridError;
use crate::config::BOARD_SIZE;

/// Observable state of one board cell.
///
/// The numeric values are a wire contract shared with external consumers
/// (renderers, training harnesses) and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    /// Never attacked.
    Empty = 0,
    /// Attacked, no ship.
    Miss = 1,
    /// Attacked, ship present, ship still afloat.
    Hit = 2,
    /// Attacked, belongs to a fully destroyed ship.
    Sunk = 3,
}

impl Cell {
    /// Numeric encoding per the observation contract.
    #[inline]
    pub fn encode(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Cell::encode`].
    pub fn decode(value: u8) -> Result<Self, GridError> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Miss),
            2 => Ok(Cell::Hit),
            3 => Ok(Cell::Sunk),
            _ => Err(GridError::BadCellValue { value }),
        }
    }
}

/// A board coordinate with `x, y ∈ [0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Decode a flat integer action: `(x, y) = (action / N, action % N)`.
    pub fn from_action(action: usize) -> Result<Self, GridError> {
        if action >= BOARD_SIZE * BOARD_SIZE {
            return Err(GridError::BadAction { action });
        }
        Ok(Self {
            x: action / BOARD_SIZE,
            y: action % BOARD_SIZE,
        })
    }

    /// Flat integer action for this coordinate.
    #[inline]
    pub fn action(&self) -> usize {
        self.x * BOARD_SIZE + self.y
    }

    /// Offset by `(dx, dy)`, or `None` if the result leaves the board.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The full observable grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// All-`Empty` grid.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Cell, GridError> {
        self.check(coord)?;
        Ok(self.cells[coord.x][coord.y])
    }

    /// Write `cell` at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        self.check(coord)?;
        self.cells[coord.x][coord.y] = cell;
        Ok(())
    }

    #[inline]
    fn check(&self, coord: Coord) -> Result<(), GridError> {
        if coord.x >= BOARD_SIZE || coord.y >= BOARD_SIZE {
            Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
        } else {
            Ok(())
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == state)
            .count()
    }

    /// Coordinates in scan order: y-major, x within each row.
    ///
    /// Bot decisions iterate the board in this order, so it is part of their
    /// documented deterministic behavior.
    pub fn scan() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }

    /// Numeric encoding of the whole grid per the observation contract.
    pub fn encode(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                out[x][y] = self.cells[x][y].encode();
            }
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let glyph = match self.cells[x][y] {
                    Cell::Empty => '·',
                    Cell::Miss => 'o',
                    Cell::Hit => 'x',
                    Cell::Sunk => '#',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
