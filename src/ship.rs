//! Individual vessels: occupied cells and damage tracking.

use core::fmt;

use crate::common::{AttackOutcome, EnvError};
use crate::config::BOARD_SIZE;
use crate::grid::Coord;

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Consecutive cells along the x-axis.
    Horizontal,
    /// Consecutive cells along the y-axis.
    Vertical,
}

/// One placed ship: a fixed footprint plus per-segment damage flags.
///
/// Ships never move after construction; all mutation goes through
/// [`Ship::attack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    damaged: Vec<bool>,
    sunk: bool,
}

impl Ship {
    /// Place a ship of `length` cells starting at `origin`.
    ///
    /// Fails if the footprint leaves the board or the length is outside the
    /// supported 2..=5 range. The placement search guards bounds before
    /// calling, so `ShipOutOfBounds` here indicates a driver bug.
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Result<Self, EnvError> {
        if !(2..=5).contains(&length) {
            return Err(EnvError::BadShipLength { length });
        }
        let mut cells = Vec::with_capacity(length);
        for offset in 0..length {
            let (x, y) = match orientation {
                Orientation::Horizontal => (origin.x + offset, origin.y),
                Orientation::Vertical => (origin.x, origin.y + offset),
            };
            if x >= BOARD_SIZE || y >= BOARD_SIZE {
                return Err(EnvError::ShipOutOfBounds);
            }
            cells.push(Coord::new(x, y));
        }
        Ok(Ship {
            damaged: vec![false; length],
            cells,
            sunk: false,
        })
    }

    /// Resolve an attack at `coord` against this ship.
    ///
    /// Foreign coordinates report `Miss` without any state change.
    /// Re-attacking a damaged segment (or any segment of a sunk ship) is a
    /// `NoEffect` no-op, so damage is never double-counted.
    pub fn attack(&mut self, coord: Coord) -> AttackOutcome {
        let Some(idx) = self.cells.iter().position(|&c| c == coord) else {
            return AttackOutcome::Miss;
        };
        if self.sunk || self.damaged[idx] {
            return AttackOutcome::NoEffect;
        }
        self.damaged[idx] = true;
        if self.damaged.iter().all(|&d| d) {
            self.sunk = true;
            AttackOutcome::Sunk
        } else {
            AttackOutcome::Hit
        }
    }

    /// The fixed footprint, in order from the origin.
    pub fn occupied_cells(&self) -> &[Coord] {
        &self.cells
    }

    /// True once every segment is damaged.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// True if `coord` is part of this ship's footprint.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self.damaged.iter().filter(|&&d| d).count();
        write!(f, "{}/{} at {}", hits, self.cells.len(), self.cells[0])
    }
}
