use gridshot::{AttackOutcome, Coord, EnvError, Orientation, Ship};

#[test]
fn construction_rejects_out_of_bounds() {
    let err = Ship::new(Coord::new(8, 0), Orientation::Horizontal, 5).unwrap_err();
    assert_eq!(err, EnvError::ShipOutOfBounds);
    let err = Ship::new(Coord::new(0, 7), Orientation::Vertical, 4).unwrap_err();
    assert_eq!(err, EnvError::ShipOutOfBounds);
}

#[test]
fn construction_rejects_bad_lengths() {
    assert_eq!(
        Ship::new(Coord::new(0, 0), Orientation::Horizontal, 1).unwrap_err(),
        EnvError::BadShipLength { length: 1 }
    );
    assert_eq!(
        Ship::new(Coord::new(0, 0), Orientation::Horizontal, 6).unwrap_err(),
        EnvError::BadShipLength { length: 6 }
    );
}

#[test]
fn footprint_follows_orientation() {
    let ship = Ship::new(Coord::new(2, 5), Orientation::Horizontal, 3).unwrap();
    assert_eq!(
        ship.occupied_cells(),
        &[Coord::new(2, 5), Coord::new(3, 5), Coord::new(4, 5)]
    );
    let ship = Ship::new(Coord::new(9, 6), Orientation::Vertical, 4).unwrap();
    assert_eq!(
        ship.occupied_cells(),
        &[
            Coord::new(9, 6),
            Coord::new(9, 7),
            Coord::new(9, 8),
            Coord::new(9, 9)
        ]
    );
}

#[test]
fn attack_sequence_hit_then_sunk() {
    let mut ship = Ship::new(Coord::new(0, 0), Orientation::Horizontal, 2).unwrap();
    assert!(!ship.is_sunk());
    assert_eq!(ship.attack(Coord::new(0, 0)), AttackOutcome::Hit);
    assert!(!ship.is_sunk());
    assert_eq!(ship.attack(Coord::new(1, 0)), AttackOutcome::Sunk);
    assert!(ship.is_sunk());
}

#[test]
fn foreign_coordinates_miss_without_state_change() {
    let mut ship = Ship::new(Coord::new(4, 4), Orientation::Vertical, 3).unwrap();
    assert_eq!(ship.attack(Coord::new(5, 4)), AttackOutcome::Miss);
    assert_eq!(ship.attack(Coord::new(5, 4)), AttackOutcome::Miss);
    assert!(!ship.is_sunk());
}

#[test]
fn reattacking_damaged_segment_is_no_effect() {
    let mut ship = Ship::new(Coord::new(4, 4), Orientation::Vertical, 3).unwrap();
    assert_eq!(ship.attack(Coord::new(4, 5)), AttackOutcome::Hit);
    assert_eq!(ship.attack(Coord::new(4, 5)), AttackOutcome::NoEffect);
    // no double counting: the other two segments still sink it
    assert_eq!(ship.attack(Coord::new(4, 4)), AttackOutcome::Hit);
    assert_eq!(ship.attack(Coord::new(4, 6)), AttackOutcome::Sunk);
    // any attack on a sunk ship is inert
    assert_eq!(ship.attack(Coord::new(4, 4)), AttackOutcome::NoEffect);
}

#[test]
fn contains_matches_footprint() {
    let ship = Ship::new(Coord::new(1, 1), Orientation::Horizontal, 2).unwrap();
    assert!(ship.contains(Coord::new(1, 1)));
    assert!(ship.contains(Coord::new(2, 1)));
    assert!(!ship.contains(Coord::new(3, 1)));
    assert_eq!(ship.len(), 2);
}
