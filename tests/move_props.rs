use proptest::prelude::*;
use solo_battleship::{
    apply_move, Board, Cell, GameConfig, GuessResult, LayoutGenerator, Move, OccupancyGrid,
    RandomFleet,
};

fn random_ships(seed: u64) -> OccupancyGrid {
    RandomFleet::seeded(seed).generate().unwrap().grid
}

// Large enough that the turn budget never runs out within 100 cells.
fn roomy_board() -> Board {
    Board::new(GameConfig::new(100, 200))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolved_cells_never_change(
        seed in any::<u64>(),
        row in 0..10i32,
        col in 0..10i32,
        repeats in 1..5usize,
    ) {
        let ships = random_ships(seed);
        let mut board = Board::default();
        apply_move(&mut board, &ships, Move::new(row, col)).unwrap();
        let after_first = board.snapshot();
        prop_assert!(after_first.cell(row as usize, col as usize).unwrap().is_resolved());
        for _ in 0..repeats {
            prop_assert!(apply_move(&mut board, &ships, Move::new(row, col)).is_err());
            prop_assert_eq!(board.snapshot(), after_first);
        }
    }

    #[test]
    fn off_board_moves_leave_state_untouched(
        seed in any::<u64>(),
        prior in proptest::collection::vec((0..10i32, 0..10i32), 0..20),
        row in prop_oneof![i32::MIN..0, 10..i32::MAX, 0..10i32],
        col in prop_oneof![i32::MIN..0, 10..i32::MAX],
        swap in any::<bool>(),
    ) {
        let ships = random_ships(seed);
        let mut board = roomy_board();
        for (r, c) in prior {
            let _ = apply_move(&mut board, &ships, Move::new(r, c));
        }
        let (row, col) = if swap { (col, row) } else { (row, col) };
        let before = board.clone();
        prop_assert!(apply_move(&mut board, &ships, Move::new(row, col)).is_err());
        prop_assert_eq!(board, before);
    }

    #[test]
    fn each_move_scores_or_spends_a_turn(
        seed in any::<u64>(),
        moves in proptest::collection::vec((-2..12i32, -2..12i32), 1..80),
    ) {
        let ships = random_ships(seed);
        let mut board = roomy_board();
        for (r, c) in moves {
            let before = board.snapshot();
            match apply_move(&mut board, &ships, Move::new(r, c)) {
                Ok(GuessResult::Hit) => {
                    prop_assert_eq!(board.score(), before.score + 1);
                    prop_assert_eq!(board.turns_left(), before.turns_left);
                    prop_assert_eq!(board.cell(r as usize, c as usize), Some(Cell::Hit));
                    prop_assert!(ships.is_occupied(r as usize, c as usize));
                }
                Ok(GuessResult::Miss) => {
                    prop_assert_eq!(board.score(), before.score);
                    prop_assert_eq!(board.turns_left(), before.turns_left - 1);
                    prop_assert_eq!(board.cell(r as usize, c as usize), Some(Cell::Miss));
                    prop_assert!(!ships.is_occupied(r as usize, c as usize));
                }
                Err(_) => prop_assert_eq!(board.snapshot(), before),
            }
        }
        let snap = board.snapshot();
        prop_assert_eq!(snap.count(Cell::Hit), board.score() as usize);
        prop_assert_eq!(snap.count(Cell::Miss), 200 - board.turns_left() as usize);
    }
}
