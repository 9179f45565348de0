use gridshot::{Cell, Coord, Grid, GridError, BOARD_SIZE};

#[test]
fn cell_encoding_is_the_wire_contract() {
    assert_eq!(Cell::Empty.encode(), 0);
    assert_eq!(Cell::Miss.encode(), 1);
    assert_eq!(Cell::Hit.encode(), 2);
    assert_eq!(Cell::Sunk.encode(), 3);
    for v in 0..4u8 {
        assert_eq!(Cell::decode(v).unwrap().encode(), v);
    }
    assert_eq!(
        Cell::decode(4).unwrap_err(),
        GridError::BadCellValue { value: 4 }
    );
}

#[test]
fn action_codec_roundtrip() {
    assert_eq!(Coord::from_action(57).unwrap(), Coord::new(5, 7));
    assert_eq!(Coord::new(5, 7).action(), 57);
    for action in 0..BOARD_SIZE * BOARD_SIZE {
        assert_eq!(Coord::from_action(action).unwrap().action(), action);
    }
    assert_eq!(
        Coord::from_action(100).unwrap_err(),
        GridError::BadAction { action: 100 }
    );
}

#[test]
fn grid_access_is_bounds_checked() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(Coord::new(0, 0)).unwrap(), Cell::Empty);
    assert_eq!(
        grid.get(Coord::new(10, 0)).unwrap_err(),
        GridError::OutOfBounds { x: 10, y: 0 }
    );
    assert!(grid.set(Coord::new(3, 12), Cell::Miss).is_err());
}

#[test]
fn encode_reflects_cell_states() {
    let mut grid = Grid::new();
    grid.set(Coord::new(2, 3), Cell::Hit).unwrap();
    grid.set(Coord::new(9, 9), Cell::Sunk).unwrap();
    let encoded = grid.encode();
    assert_eq!(encoded[2][3], 2);
    assert_eq!(encoded[9][9], 3);
    assert_eq!(encoded[0][0], 0);
}

#[test]
fn scan_order_is_y_major() {
    let coords: Vec<Coord> = Grid::scan().collect();
    assert_eq!(coords.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(coords[0], Coord::new(0, 0));
    assert_eq!(coords[1], Coord::new(1, 0));
    assert_eq!(coords[BOARD_SIZE], Coord::new(0, 1));
    assert_eq!(coords[BOARD_SIZE * BOARD_SIZE - 1], Coord::new(9, 9));
}

#[test]
fn offset_clamps_to_board() {
    let c = Coord::new(0, 9);
    assert_eq!(c.offset(-1, 0), None);
    assert_eq!(c.offset(0, 1), None);
    assert_eq!(c.offset(1, -1), Some(Coord::new(1, 8)));
}
