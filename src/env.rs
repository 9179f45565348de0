//! The single-player Battleship environment.
//!
//! Owns one fleet and one observable grid per episode. Drivers call
//! [`BattleshipEnv::reset`] once and then feed actions to
//! [`BattleshipEnv::step`] until the step reports termination.

use log::debug;
use rand::Rng;

use crate::common::{AttackOutcome, EnvError};
use crate::config::{default_fleet, BOARD_SIZE};
use crate::grid::{Cell, Coord, Grid};
use crate::mask::BitGrid;
use crate::ship::{Orientation, Ship};

/// Flag grid sized for the standard board.
pub type Mask = BitGrid<u128, BOARD_SIZE>;

/// How `step` treats a coordinate that was already attacked this episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidActionPolicy {
    /// Re-resolve against ship state; idempotent per ship semantics.
    #[default]
    Allow,
    /// Return the unchanged observation with reward −1.
    Punish,
    /// Advance in raster order to the next unattacked cell first.
    Skip,
}

impl InvalidActionPolicy {
    /// Build from the two original boolean switches. Punishing takes
    /// precedence when both are requested; this is a documented policy
    /// choice, not a derived rule.
    pub fn from_flags(punish: bool, skip: bool) -> Self {
        if punish {
            InvalidActionPolicy::Punish
        } else if skip {
            InvalidActionPolicy::Skip
        } else {
            InvalidActionPolicy::Allow
        }
    }
}

/// Lifecycle of one environment instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Terminated,
}

/// One transition: the observation after the attack, its reward, and whether
/// the episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub observation: Grid,
    pub reward: i32,
    pub terminated: bool,
}

/// Environment state machine. See the module docs for the driver protocol.
#[derive(Debug)]
pub struct BattleshipEnv {
    lengths: Vec<usize>,
    fleet: Vec<Ship>,
    grid: Grid,
    attacked: Mask,
    policy: InvalidActionPolicy,
    phase: Phase,
}

// Placement retry budgets. A standard fleet on a 10×10 board fits with large
// margin, so exhausting these indicates a caller-supplied fleet that cannot
// satisfy the separation invariant.
const SHIP_ATTEMPTS: usize = 256;
const FLEET_ATTEMPTS: usize = 32;

impl BattleshipEnv {
    /// Environment with the standard `[5, 4, 3, 3, 2]` fleet.
    pub fn new(policy: InvalidActionPolicy) -> Self {
        BattleshipEnv {
            lengths: default_fleet(),
            fleet: Vec::new(),
            grid: Grid::new(),
            attacked: Mask::new(),
            policy,
            phase: Phase::NotStarted,
        }
    }

    /// Environment with a caller-chosen fleet composition.
    pub fn with_fleet(lengths: Vec<usize>, policy: InvalidActionPolicy) -> Result<Self, EnvError> {
        if let Some(&length) = lengths.iter().find(|l| !(2..=5).contains(*l)) {
            return Err(EnvError::BadShipLength { length });
        }
        Ok(BattleshipEnv {
            lengths,
            fleet: Vec::new(),
            grid: Grid::new(),
            attacked: Mask::new(),
            policy,
            phase: Phase::NotStarted,
        })
    }

    /// Generate a fresh fleet and clear all episode state.
    ///
    /// Returns the initial all-`Empty` observation; ship positions are never
    /// revealed.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<Step, EnvError> {
        self.fleet = place_fleet(rng, &self.lengths)?;
        self.grid = Grid::new();
        self.attacked = Mask::new();
        self.phase = Phase::InProgress;
        debug!("episode reset, fleet of {} placed", self.fleet.len());
        Ok(Step {
            observation: self.grid,
            reward: 0,
            terminated: false,
        })
    }

    /// Attack the cell encoded by the flat integer `action` in `[0, 99]`.
    pub fn step<R: Rng>(&mut self, rng: &mut R, action: usize) -> Result<Step, EnvError> {
        let coord = Coord::from_action(action)?;
        self.step_at(rng, coord)
    }

    /// Attack an explicit coordinate.
    ///
    /// On a terminated (or never started) environment this performs a reset
    /// and returns its result instead of resolving an attack.
    pub fn step_at<R: Rng>(&mut self, rng: &mut R, coord: Coord) -> Result<Step, EnvError> {
        // bounds check up front; misbehaving drivers get an error, not a panic
        self.grid.get(coord)?;

        if self.phase != Phase::InProgress {
            return self.reset(rng);
        }

        let mut coord = coord;
        match self.policy {
            InvalidActionPolicy::Punish => {
                if self.attacked.get(coord)? {
                    return Ok(Step {
                        observation: self.grid,
                        reward: -1,
                        terminated: false,
                    });
                }
            }
            InvalidActionPolicy::Skip => {
                while self.attacked.get(coord)? {
                    coord = next_in_raster(coord);
                }
            }
            InvalidActionPolicy::Allow => {}
        }
        self.attacked.set(coord)?;

        let outcome = self.resolve(coord)?;
        let reward = match outcome {
            AttackOutcome::Hit | AttackOutcome::Sunk => 1,
            AttackOutcome::Miss | AttackOutcome::NoEffect => 0,
        };

        let terminated = self.fleet.iter().all(Ship::is_sunk);
        if terminated {
            self.phase = Phase::Terminated;
            debug!("episode terminated after attack at {}", coord);
        }
        Ok(Step {
            observation: self.grid,
            reward,
            terminated,
        })
    }

    /// Resolve an attack against the fleet and update the grid.
    ///
    /// Ships never share a cell, so the linear scan stops at the first ship
    /// reporting anything other than `Miss`.
    fn resolve(&mut self, coord: Coord) -> Result<AttackOutcome, EnvError> {
        let mut outcome = AttackOutcome::Miss;
        let mut reveal: Vec<Coord> = Vec::new();
        for ship in self.fleet.iter_mut() {
            match ship.attack(coord) {
                AttackOutcome::Miss => continue,
                res => {
                    outcome = res;
                    if res == AttackOutcome::Sunk {
                        reveal.extend_from_slice(ship.occupied_cells());
                    }
                    break;
                }
            }
        }
        match outcome {
            // only Empty or Miss cells can globally miss
            AttackOutcome::Miss => self.grid.set(coord, Cell::Miss)?,
            AttackOutcome::Hit => self.grid.set(coord, Cell::Hit)?,
            AttackOutcome::Sunk => {
                for &cell in &reveal {
                    self.grid.set(cell, Cell::Sunk)?;
                }
            }
            // re-attack of a damaged segment: the cell keeps its state
            AttackOutcome::NoEffect => {}
        }
        Ok(outcome)
    }

    /// Current observation snapshot.
    pub fn observation(&self) -> Grid {
        self.grid
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fleet composition this environment was configured with.
    pub fn fleet_lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The placed fleet. For drivers and tests; targeting bots must only see
    /// [`BattleshipEnv::observation`].
    pub fn ships(&self) -> &[Ship] {
        &self.fleet
    }
}

/// Next cell in raster order: increment x, overflow into y, wrap to (0, 0).
fn next_in_raster(coord: Coord) -> Coord {
    if coord.x + 1 < BOARD_SIZE {
        Coord::new(coord.x + 1, coord.y)
    } else if coord.y + 1 < BOARD_SIZE {
        Coord::new(0, coord.y + 1)
    } else {
        Coord::new(0, 0)
    }
}

/// Place every requested length with a one-cell buffer around each placed
/// ship, so no two ships touch, not even diagonally.
fn place_fleet<R: Rng>(rng: &mut R, lengths: &[usize]) -> Result<Vec<Ship>, EnvError> {
    'fleet: for _ in 0..FLEET_ATTEMPTS {
        let mut buffer = Mask::new();
        let mut fleet = Vec::with_capacity(lengths.len());
        for &len in lengths {
            let mut placed = false;
            for _ in 0..SHIP_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_x, max_y) = match orientation {
                    Orientation::Horizontal => (BOARD_SIZE - len, BOARD_SIZE - 1),
                    Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - len),
                };
                let origin = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
                let ship = Ship::new(origin, orientation, len)?;
                let blocked = ship
                    .occupied_cells()
                    .iter()
                    .any(|&c| buffer.get(c).unwrap_or(true));
                if blocked {
                    continue;
                }
                for &cell in ship.occupied_cells() {
                    for dx in -1..=1 {
                        for dy in -1..=1 {
                            if let Some(n) = cell.offset(dx, dy) {
                                let _ = buffer.set(n);
                            }
                        }
                    }
                }
                fleet.push(ship);
                placed = true;
                break;
            }
            if !placed {
                // this fleet prefix painted itself into a corner; start over
                continue 'fleet;
            }
        }
        return Ok(fleet);
    }
    Err(EnvError::PlacementExhausted)
}
