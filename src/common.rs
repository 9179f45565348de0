//! Shared types: attack outcomes and error enums.

use core::fmt;

/// Result of resolving an attack against a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The coordinate is not occupied by this ship.
    Miss,
    /// An undamaged segment was hit; the ship is still afloat.
    Hit,
    /// The hit destroyed the last undamaged segment.
    Sunk,
    /// The coordinate was already damaged (or the ship already sunk);
    /// nothing changed. Distinct from `Miss` but equally idempotent.
    NoEffect,
}

/// Errors from raw grid and mask coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Integer action outside the valid range.
    BadAction { action: usize },
    /// Cell value outside the 0..=3 encoding.
    BadCellValue { value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the board", x, y)
            }
            GridError::BadAction { action } => {
                write!(f, "action {} is outside the valid range", action)
            }
            GridError::BadCellValue { value } => {
                write!(f, "cell value {} is not a valid cell state", value)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors returned by environment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Underlying grid error (out-of-range action or coordinate).
    Grid(GridError),
    /// A ship footprint would leave the board.
    ShipOutOfBounds,
    /// Requested ship length outside the supported 2..=5 range.
    BadShipLength { length: usize },
    /// Random placement could not fit the fleet within the retry budget.
    PlacementExhausted,
}

impl From<GridError> for EnvError {
    fn from(err: GridError) -> Self {
        EnvError::Grid(err)
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::Grid(e) => write!(f, "grid error: {}", e),
            EnvError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            EnvError::BadShipLength { length } => {
                write!(f, "ship length {} is outside 2..=5", length)
            }
            EnvError::PlacementExhausted => {
                write!(f, "unable to place fleet within the retry budget")
            }
        }
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised by the targeting bots.
///
/// Each of these means the observation is inconsistent with the declared
/// fleet. None are recoverable by guessing, so they surface instead of being
/// replaced with a default move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Underlying grid error.
    Grid(GridError),
    /// A sunk run on the board has no matching length in the declared fleet.
    PhantomWreck { length: usize },
    /// Every declared ship is already sunk but the episode is not terminal.
    FleetExhausted,
    /// No cell can still hold the smallest afloat ship.
    NoCandidates,
}

impl From<GridError> for SearchError {
    fn from(err: GridError) -> Self {
        SearchError::Grid(err)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Grid(e) => write!(f, "grid error: {}", e),
            SearchError::PhantomWreck { length } => {
                write!(
                    f,
                    "sunk ship of length {} not present in declared fleet",
                    length
                )
            }
            SearchError::FleetExhausted => {
                write!(f, "no ships afloat yet the episode has not terminated")
            }
            SearchError::NoCandidates => {
                write!(f, "no cell can hold the smallest afloat ship")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Grid(e) => Some(e),
            _ => None,
        }
    }
}
