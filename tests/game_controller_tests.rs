use std::cell::Cell as Counter;
use std::rc::Rc;

use solo_battleship::{
    BoardSnapshot, Cell, FixedLayout, GameConfig, GameController, GameError, GameSession,
    GameStatus, Layout, LayoutError, LayoutGenerator, Move, OccupancyGrid, RestartTrigger, View,
    TURN_BUDGET,
};

const SHIP_CELLS: [(usize, usize); 4] = [(0, 0), (0, 1), (0, 2), (9, 9)];

fn fixed() -> FixedLayout {
    FixedLayout::new(OccupancyGrid::from_cells(SHIP_CELLS).unwrap(), 2)
}

/// Counts how many layouts were requested.
struct Counting {
    calls: Rc<Counter<usize>>,
}

impl LayoutGenerator for Counting {
    fn generate(&mut self) -> Result<Layout, LayoutError> {
        self.calls.set(self.calls.get() + 1);
        Ok(Layout {
            grid: OccupancyGrid::from_cells(SHIP_CELLS)?,
            ship_count: 2,
        })
    }
}

/// Succeeds `remaining` times, then fails.
struct Flaky {
    remaining: usize,
}

impl LayoutGenerator for Flaky {
    fn generate(&mut self) -> Result<Layout, LayoutError> {
        if self.remaining == 0 {
            return Err(LayoutError::UnableToPlaceShip("Carrier"));
        }
        self.remaining -= 1;
        Ok(Layout {
            grid: OccupancyGrid::from_cells(SHIP_CELLS)?,
            ship_count: 2,
        })
    }
}

fn board(view: View) -> BoardSnapshot {
    match view {
        View::Board(snap) => snap,
        other => panic!("expected board view, got {:?}", other),
    }
}

#[test]
fn move_is_applied_and_rendered() {
    let trigger = RestartTrigger::default();
    let mut game = GameController::new(fixed(), &trigger, GameConfig::default()).unwrap();
    let snap = board(game.handle(Some(Move::new(5, 5))).unwrap());
    assert_eq!(snap.cell(5, 5), Some(Cell::Miss));
    assert_eq!(snap.turns_left, 29);
    assert_eq!(snap.score, 0);
}

#[test]
fn request_without_move_only_renders() {
    let trigger = RestartTrigger::default();
    let mut game = GameController::new(fixed(), &trigger, GameConfig::default()).unwrap();
    let snap = board(game.handle(None).unwrap());
    assert_eq!(snap.count(Cell::Unknown), 100);
    assert_eq!(snap.turns_left, TURN_BUDGET);
}

#[test]
fn invalid_moves_are_absorbed() {
    let trigger = RestartTrigger::default();
    let mut game = GameController::new(fixed(), &trigger, GameConfig::default()).unwrap();
    let first = board(game.handle(Some(Move::new(3, 3))).unwrap());
    let again = board(game.handle(Some(Move::new(3, 3))).unwrap());
    let off = board(game.handle(Some(Move::new(-1, 12))).unwrap());
    assert_eq!(first, again);
    assert_eq!(first, off);
}

#[test]
fn win_is_reported_on_the_request_after_the_third_hit() {
    let trigger = RestartTrigger::default();
    let mut game = GameController::new(fixed(), &trigger, GameConfig::default()).unwrap();
    for col in 0..3 {
        board(game.handle(Some(Move::new(0, col))).unwrap());
    }
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.session().board().score(), 3);

    assert_eq!(game.handle(Some(Move::new(9, 9))).unwrap(), View::YouWin);
    let fresh = board(game.handle(None).unwrap());
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.count(Cell::Unknown), 100);
    assert_eq!(game.games_started(), 2);
}

#[test]
fn game_over_after_thirty_misses() {
    let trigger = RestartTrigger::default();
    let mut game = GameController::new(fixed(), &trigger, GameConfig::default()).unwrap();
    for r in 1..4 {
        for c in 0..10 {
            board(game.handle(Some(Move::new(r, c))).unwrap());
        }
    }
    assert!(game.session().board().is_lost());
    assert_eq!(game.session().board().turns_left(), 0);

    assert_eq!(game.handle(None).unwrap(), View::GameOver);
    assert_eq!(board(game.handle(None).unwrap()).turns_left, TURN_BUDGET);
}

#[test]
fn loss_takes_priority_over_win() {
    let layout = fixed().generate().unwrap();
    let mut session = GameSession::new(layout, GameConfig::new(1, 1));
    session.apply(Move::new(0, 0)).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    session.apply(Move::new(5, 5)).unwrap();
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.ship_count(), 2);
    assert!(session.ships().is_occupied(9, 9));
}

#[test]
fn restart_takes_priority_and_regenerates_layout() {
    let calls = Rc::new(Counter::new(0));
    let trigger = RestartTrigger::default();
    let gen = Counting {
        calls: calls.clone(),
    };
    let mut game = GameController::new(gen, &trigger, GameConfig::default()).unwrap();
    assert_eq!(calls.get(), 1);
    for col in 0..3 {
        game.handle(Some(Move::new(0, col))).unwrap();
    }

    assert!(trigger.on_edge(1_000));
    assert_eq!(game.handle(Some(Move::new(5, 5))).unwrap(), View::Restarting);
    assert_eq!(calls.get(), 2);
    assert!(!trigger.is_armed());

    let snap = board(game.handle(None).unwrap());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.turns_left, TURN_BUDGET);
    assert_eq!(snap.count(Cell::Unknown), 100);
}

#[test]
fn idle_trigger_leaves_game_alone() {
    let calls = Rc::new(Counter::new(0));
    let trigger = RestartTrigger::default();
    let gen = Counting {
        calls: calls.clone(),
    };
    let mut game = GameController::new(gen, &trigger, GameConfig::default()).unwrap();
    game.handle(Some(Move::new(4, 4))).unwrap();
    assert!(!trigger.consume());
    let snap = board(game.handle(None).unwrap());
    assert_eq!(snap.cell(4, 4), Some(Cell::Miss));
    assert_eq!(calls.get(), 1);
}

#[test]
fn layout_failure_at_startup_is_fatal() {
    let trigger = RestartTrigger::default();
    let err = GameController::new(Flaky { remaining: 0 }, &trigger, GameConfig::default())
        .err()
        .unwrap();
    assert_eq!(err, GameError::Layout(LayoutError::UnableToPlaceShip("Carrier")));
}

#[test]
fn layout_failure_on_restart_keeps_current_session() {
    let trigger = RestartTrigger::default();
    let mut game =
        GameController::new(Flaky { remaining: 1 }, &trigger, GameConfig::default()).unwrap();
    game.handle(Some(Move::new(0, 0))).unwrap();
    assert!(game.restart().is_err());
    assert_eq!(game.session().board().score(), 1);
    assert_eq!(game.games_started(), 1);
}

#[test]
fn invalid_config_is_rejected() {
    let trigger = RestartTrigger::default();
    for config in [GameConfig::new(0, 30), GameConfig::new(3, 0)] {
        let err = GameController::new(fixed(), &trigger, config).err().unwrap();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }
}
