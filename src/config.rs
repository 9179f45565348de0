//! Standard board and fleet configuration.

/// Name and length of one ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Lengths of the standard fleet, in placement order.
pub fn default_fleet() -> Vec<usize> {
    SHIPS.iter().map(|s| s.length()).collect()
}
