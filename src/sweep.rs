//! Diagonal-sweep exploration bot.
//!
//! Same finish-the-kill front end as the run-length bot, but exploration
//! walks diagonal lanes with a cursor that bounces between board corners,
//! shifting three columns at each edge so the lanes precess across the
//! board. The cursor is instance-owned state, reset when a terminal step is
//! observed.

use crate::common::SearchError;
use crate::config::BOARD_SIZE;
use crate::env::Step;
use crate::grid::Coord;
use crate::policy::Policy;
use crate::search::{analyze, pursue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    DownRight,
    UpLeft,
}

/// Bounce cursor. Coordinates are signed because the advance rules step off
/// the board transiently before the edge handling folds them back in.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: isize,
    y: isize,
    heading: Heading,
}

const N: isize = BOARD_SIZE as isize;

impl Cursor {
    fn start() -> Self {
        Cursor {
            x: 1,
            y: 0,
            heading: Heading::DownRight,
        }
    }

    /// One bounce step. Edge handling either restarts a lane at the top or
    /// reflects into the opposite heading three lanes over.
    fn advance(&mut self) {
        match self.heading {
            Heading::DownRight => {
                self.x += 1;
                self.y += 1;
                if self.y > N - 1 {
                    if self.x == 1 {
                        self.x = 0;
                        self.y = 0;
                    } else if self.x == 2 {
                        self.y = 0;
                    } else {
                        self.y -= 1;
                        self.x -= 3;
                        self.heading = Heading::UpLeft;
                    }
                } else if self.x > N - 1 {
                    if self.y == 1 {
                        self.x = 0;
                        self.y = 1;
                    } else {
                        self.x -= 1;
                        self.y -= 3;
                        self.heading = Heading::UpLeft;
                    }
                }
            }
            Heading::UpLeft => {
                self.x -= 1;
                self.y -= 1;
                if self.y < 0 {
                    self.y += 1;
                    self.x += 3;
                    self.heading = Heading::DownRight;
                } else if self.x < 0 {
                    self.x += 1;
                    self.y += 3;
                    self.heading = Heading::DownRight;
                }
            }
        }
    }

    fn coord(&self) -> Option<Coord> {
        if (0..N).contains(&self.x) && (0..N).contains(&self.y) {
            Some(Coord::new(self.x as usize, self.y as usize))
        } else {
            None
        }
    }
}

/// Targeting bot that explores along bouncing diagonal lanes.
pub struct SweepBot {
    declared: Vec<usize>,
    cursor: Cursor,
}

impl SweepBot {
    /// Bot told the public fleet composition (positions stay hidden).
    pub fn new(declared: Vec<usize>) -> Self {
        Self {
            declared,
            cursor: Cursor::start(),
        }
    }
}

// The cursor revisits lanes as it precesses, so give it ample room before
// declaring the board unservable.
const MAX_ADVANCES: usize = 10_000;

impl Policy for SweepBot {
    fn choose(&mut self, step: &Step) -> Result<usize, SearchError> {
        if step.terminated {
            self.cursor = Cursor::start();
            return Ok(0);
        }
        let grid = &step.observation;
        let analysis = analyze(grid, &self.declared)?;
        if let Some(coord) = pursue(grid, &analysis)? {
            return Ok(coord.action());
        }
        for _ in 0..MAX_ADVANCES {
            if let Some(coord) = self.cursor.coord() {
                if !analysis.excluded.get(coord)? {
                    return Ok(coord.action());
                }
            }
            self.cursor.advance();
        }
        Err(SearchError::NoCandidates)
    }
}
