use gridshot::{
    default_fleet, BattleshipEnv, Cell, Coord, Grid, InvalidActionPolicy, Policy, SearchBot,
    SearchError, Step, SweepBot, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn observe(grid: Grid) -> Step {
    Step {
        observation: grid,
        reward: 0,
        terminated: false,
    }
}

#[test]
fn terminal_step_returns_noop_action() {
    let mut bot = SearchBot::new(default_fleet());
    let step = Step {
        observation: Grid::new(),
        reward: 1,
        terminated: true,
    };
    assert_eq!(bot.choose(&step).unwrap(), 0);
}

#[test]
fn isolated_hit_is_followed_up_adjacently() {
    let mut grid = Grid::new();
    grid.set(Coord::new(5, 5), Cell::Hit).unwrap();
    let mut bot = SearchBot::new(vec![2]);
    let action = bot.choose(&observe(grid)).unwrap();
    let expected: Vec<usize> = [(4, 5), (6, 5), (5, 4), (5, 6)]
        .iter()
        .map(|&(x, y)| Coord::new(x, y).action())
        .collect();
    assert!(
        expected.contains(&action),
        "action {} is not adjacent to the hit",
        action
    );
}

#[test]
fn vertical_pair_is_extended_along_its_column() {
    let mut grid = Grid::new();
    grid.set(Coord::new(3, 3), Cell::Hit).unwrap();
    grid.set(Coord::new(3, 4), Cell::Hit).unwrap();
    let mut bot = SearchBot::new(vec![3, 2]);
    let action = bot.choose(&observe(grid)).unwrap();
    let allowed = [Coord::new(3, 5).action(), Coord::new(3, 2).action()];
    assert!(
        allowed.contains(&action),
        "action {} left the hit column",
        action
    );
}

#[test]
fn blocked_end_forces_the_other_direction() {
    let mut grid = Grid::new();
    grid.set(Coord::new(3, 3), Cell::Hit).unwrap();
    grid.set(Coord::new(3, 4), Cell::Hit).unwrap();
    grid.set(Coord::new(3, 5), Cell::Miss).unwrap();
    let mut bot = SearchBot::new(vec![3, 2]);
    let action = bot.choose(&observe(grid)).unwrap();
    assert_eq!(action, Coord::new(3, 2).action());
}

#[test]
fn first_move_on_empty_board_is_deterministic() {
    // scan order starts at (0,0); smallest afloat is 2, so the shot lands
    // one cell into the first rightward run
    let mut bot = SearchBot::new(default_fleet());
    let action = bot.choose(&observe(Grid::new())).unwrap();
    assert_eq!(action, Coord::new(1, 0).action());
}

#[test]
fn wreck_length_must_match_the_declared_fleet() {
    let mut grid = Grid::new();
    grid.set(Coord::new(0, 0), Cell::Sunk).unwrap();
    grid.set(Coord::new(0, 1), Cell::Sunk).unwrap();
    let mut bot = SearchBot::new(vec![3]);
    assert_eq!(
        bot.choose(&observe(grid)).unwrap_err(),
        SearchError::PhantomWreck { length: 2 }
    );
}

#[test]
fn nothing_afloat_on_a_nonterminal_step_is_an_error() {
    let mut grid = Grid::new();
    grid.set(Coord::new(0, 0), Cell::Sunk).unwrap();
    grid.set(Coord::new(0, 1), Cell::Sunk).unwrap();
    let mut bot = SearchBot::new(vec![2]);
    assert_eq!(
        bot.choose(&observe(grid)).unwrap_err(),
        SearchError::FleetExhausted
    );
}

#[test]
fn no_viable_run_is_an_error() {
    // misses everywhere except one free cell: a carrier cannot fit anywhere
    let mut grid = Grid::new();
    for coord in Grid::scan() {
        if coord != Coord::new(0, 0) {
            grid.set(coord, Cell::Miss).unwrap();
        }
    }
    let mut bot = SearchBot::new(vec![5]);
    assert_eq!(
        bot.choose(&observe(grid)).unwrap_err(),
        SearchError::NoCandidates
    );
}

#[test]
fn sunk_neighborhood_is_never_targeted() {
    // a wreck in the middle of the board; no shot may land next to it
    let mut grid = Grid::new();
    grid.set(Coord::new(4, 4), Cell::Sunk).unwrap();
    grid.set(Coord::new(5, 4), Cell::Sunk).unwrap();
    let mut bot = SearchBot::new(vec![3, 2]);
    let action = bot.choose(&observe(grid)).unwrap();
    let target = Coord::from_action(action).unwrap();
    for x in 3..=6 {
        for y in 3..=5 {
            assert_ne!(target, Coord::new(x, y));
        }
    }
}

#[test]
fn sweep_bot_opens_on_its_first_lane() {
    let mut bot = SweepBot::new(default_fleet());
    let action = bot.choose(&observe(Grid::new())).unwrap();
    assert_eq!(action, Coord::new(1, 0).action());
}

#[test]
fn sweep_bot_resets_its_cursor_on_terminal_steps() {
    let mut bot = SweepBot::new(default_fleet());
    let first = bot.choose(&observe(Grid::new())).unwrap();

    // walk the cursor somewhere else
    let mut grid = Grid::new();
    grid.set(Coord::new(1, 0), Cell::Miss).unwrap();
    let moved = bot.choose(&observe(grid)).unwrap();
    assert_ne!(moved, first);

    let terminal = Step {
        observation: grid,
        reward: 0,
        terminated: true,
    };
    assert_eq!(bot.choose(&terminal).unwrap(), 0);
    // back at the start of the sweep
    assert_eq!(bot.choose(&observe(Grid::new())).unwrap(), first);
}

fn run_episode(bot: &mut dyn Policy, seed: u64) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut env = BattleshipEnv::new(InvalidActionPolicy::Allow);
    let mut step = env.reset(&mut rng).unwrap();
    let mut shots = 0;
    loop {
        let action = bot.choose(&step).unwrap();
        if step.terminated {
            return shots;
        }
        step = env.step(&mut rng, action).unwrap();
        shots += 1;
        assert!(shots <= BOARD_SIZE * BOARD_SIZE, "episode failed to finish");
    }
}

#[test]
fn search_bot_finishes_episodes_within_the_board_budget() {
    for seed in 0..20 {
        let mut bot = SearchBot::new(default_fleet());
        let shots = run_episode(&mut bot, seed);
        assert!(shots >= gridshot::TOTAL_SHIP_CELLS);
    }
}

#[test]
fn sweep_bot_finishes_episodes_within_the_board_budget() {
    for seed in 0..20 {
        let mut bot = SweepBot::new(default_fleet());
        let shots = run_episode(&mut bot, seed);
        assert!(shots >= gridshot::TOTAL_SHIP_CELLS);
    }
}
