//! Run-length targeting heuristic.
//!
//! Each decision re-derives everything from the observation: an exclusion
//! mask of cells provably empty of ships, the lengths of wrecks already on
//! the board, and the smallest ship still afloat. Located-but-unsunk ships
//! are always finished first; otherwise the bot fires into a straight run of
//! open cells long enough to hold the smallest afloat ship.
//!
//! The observation analysis lives here and is shared with the diagonal sweep
//! bot, which replaces only the exploration stage.

use crate::common::SearchError;
use crate::env::{Mask, Step};
use crate::grid::{Cell, Coord, Grid};
use crate::policy::Policy;

/// Board axis, used to walk straight lines of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    /// `delta` cells along this axis from `from`, if still on the board.
    fn step(self, from: Coord, delta: isize) -> Option<Coord> {
        match self {
            Axis::X => from.offset(delta, 0),
            Axis::Y => from.offset(0, delta),
        }
    }
}

/// What one observation tells us before any cell is chosen.
pub(crate) struct Analysis {
    /// Cells that provably cannot hold an undiscovered ship segment: every
    /// attacked cell plus the full neighborhood of each wreck.
    pub excluded: Mask,
    /// Minimum length among ships still afloat.
    pub smallest: usize,
}

/// Build the exclusion mask and account for sunk ships.
///
/// `declared` is the public fleet composition. A wreck length with no match
/// in it, or a board with nothing left afloat, is an inconsistency between
/// observation and fleet and surfaces as an error.
pub(crate) fn analyze(grid: &Grid, declared: &[usize]) -> Result<Analysis, SearchError> {
    let mut excluded = Mask::new();
    for coord in Grid::scan() {
        match grid.get(coord)? {
            Cell::Miss | Cell::Hit => excluded.set(coord)?,
            // sunk ships touch nothing, so their whole neighborhood is dead
            Cell::Sunk => {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        if let Some(n) = coord.offset(dx, dy) {
                            excluded.set(n)?;
                        }
                    }
                }
            }
            Cell::Empty => {}
        }
    }

    // Measure each wreck once. Scan order reaches its lowest cell first, and
    // wrecks are straight, so walking right then down covers both
    // orientations.
    let mut visited = Mask::new();
    let mut afloat: Vec<usize> = declared.to_vec();
    for coord in Grid::scan() {
        if grid.get(coord)? != Cell::Sunk || visited.get(coord)? {
            continue;
        }
        visited.set(coord)?;
        let mut length = 1;
        for axis in [Axis::X, Axis::Y] {
            let mut cur = coord;
            while let Some(next) = axis.step(cur, 1) {
                if grid.get(next)? != Cell::Sunk {
                    break;
                }
                visited.set(next)?;
                length += 1;
                cur = next;
            }
        }
        match afloat.iter().position(|&l| l == length) {
            Some(idx) => {
                afloat.remove(idx);
            }
            None => return Err(SearchError::PhantomWreck { length }),
        }
    }

    let smallest = afloat
        .iter()
        .copied()
        .min()
        .ok_or(SearchError::FleetExhausted)?;
    Ok(Analysis { excluded, smallest })
}

/// Finish-the-kill stage: follow up on any `Hit` cell before exploring.
///
/// A hit with a hit neighbor fixes its ship's orientation, so only that axis
/// is extended. An isolated hit may still offer follow-up cells on both
/// axes; an axis stays viable only while a smallest-afloat ship fits through
/// the hit along it.
pub(crate) fn pursue(grid: &Grid, analysis: &Analysis) -> Result<Option<Coord>, SearchError> {
    for coord in Grid::scan() {
        if grid.get(coord)? != Cell::Hit {
            continue;
        }

        let along_y = hit_neighbor(grid, coord, Axis::Y)?;
        let along_x = hit_neighbor(grid, coord, Axis::X)?;

        if along_y {
            if let Some(c) = open_end(grid, coord, Axis::Y)? {
                return Ok(Some(c));
            }
        }
        if along_x {
            if let Some(c) = open_end(grid, coord, Axis::X)? {
                return Ok(Some(c));
            }
        }
        if !along_y && !along_x {
            if run_through(&analysis.excluded, coord, Axis::Y)? >= analysis.smallest {
                if let Some(c) = open_end(grid, coord, Axis::Y)? {
                    return Ok(Some(c));
                }
            }
            if run_through(&analysis.excluded, coord, Axis::X)? >= analysis.smallest {
                if let Some(c) = open_end(grid, coord, Axis::X)? {
                    return Ok(Some(c));
                }
            }
        }
    }
    Ok(None)
}

fn hit_neighbor(grid: &Grid, coord: Coord, axis: Axis) -> Result<bool, SearchError> {
    for delta in [1isize, -1] {
        if let Some(n) = axis.step(coord, delta) {
            if grid.get(n)? == Cell::Hit {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// First cell past the contiguous hits through `coord` along `axis`, if that
/// cell is still `Empty`. Checks the positive direction first.
fn open_end(grid: &Grid, coord: Coord, axis: Axis) -> Result<Option<Coord>, SearchError> {
    for delta in [1isize, -1] {
        let mut cur = coord;
        while let Some(next) = axis.step(cur, delta) {
            if grid.get(next)? == Cell::Hit {
                cur = next;
                continue;
            }
            if grid.get(next)? == Cell::Empty {
                return Ok(Some(next));
            }
            break;
        }
    }
    Ok(None)
}

/// Length of the maximal unexcluded run through `coord` along `axis`,
/// counting `coord` itself.
fn run_through(excluded: &Mask, coord: Coord, axis: Axis) -> Result<usize, SearchError> {
    let mut count = 1;
    for delta in [1isize, -1] {
        let mut cur = coord;
        while let Some(next) = axis.step(cur, delta) {
            if excluded.get(next)? {
                break;
            }
            count += 1;
            cur = next;
        }
    }
    Ok(count)
}

/// Exploration stage: fire into the first run that can hold the smallest
/// afloat ship.
///
/// Every unexcluded cell contributes its rightward and downward runs. The
/// shot lands `smallest - 1` cells into the chosen run, where overlap with a
/// same-length ship is most likely. Selection among candidates is the first
/// one in scan order; runs are deliberately not weighted by length.
fn explore(analysis: &Analysis) -> Result<Coord, SearchError> {
    let mut candidates: Vec<Coord> = Vec::new();
    for coord in Grid::scan() {
        if analysis.excluded.get(coord)? {
            continue;
        }
        for axis in [Axis::X, Axis::Y] {
            let mut run = 1;
            let mut cur = coord;
            while let Some(next) = axis.step(cur, 1) {
                if analysis.excluded.get(next)? {
                    break;
                }
                run += 1;
                cur = next;
            }
            if run >= analysis.smallest {
                // the run reaches at least `smallest` cells, so the offset
                // target is always on the board
                if let Some(target) = axis.step(coord, (analysis.smallest - 1) as isize) {
                    candidates.push(target);
                }
            }
        }
    }
    candidates.first().copied().ok_or(SearchError::NoCandidates)
}

/// The canonical run-length targeting bot.
pub struct SearchBot {
    declared: Vec<usize>,
}

impl SearchBot {
    /// Bot told the public fleet composition (positions stay hidden).
    pub fn new(declared: Vec<usize>) -> Self {
        Self { declared }
    }
}

impl Policy for SearchBot {
    fn choose(&mut self, step: &Step) -> Result<usize, SearchError> {
        if step.terminated {
            return Ok(0);
        }
        let grid = &step.observation;
        let analysis = analyze(grid, &self.declared)?;
        if let Some(coord) = pursue(grid, &analysis)? {
            return Ok(coord.action());
        }
        explore(&analysis).map(|c| c.action())
    }
}
