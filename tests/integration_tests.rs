//! Integration tests for goban
//!
//! These exercise the public contract used by search code: move generation,
//! push/pop, legality (suicide, super-ko), captures and area scoring.

use goban::coord::{Move, Point, coord_to_name, flatten, name_to_coord, unflatten};
use goban::error::BoardError;
use goban::position::{Board, Color};
use goban::scoring::{Areas, GameResult};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play a sequence of named moves on a fresh board, alternating colors
/// starting with Black. Panics if any move is refused.
fn setup_position(size: usize, moves: &[&str]) -> Board {
    let mut board = Board::with_seed(size, 2024).unwrap();
    for name in moves {
        assert_eq!(board.play_named(name), Ok(true), "move {name} refused");
    }
    board
}

fn point(board: &Board, name: &str) -> Point {
    match board.name_to_move(name).unwrap() {
        Move::Play(pt) => pt,
        Move::Pass => panic!("{name} is not a point"),
    }
}

/// Grid contents, for whole-board comparisons.
fn grid(board: &Board) -> Vec<Option<Color>> {
    (0..board.points()).map(|pt| board.cell(pt)).collect()
}

/// A ko on the lower-left of a 5x5 board, White's B2 stone in atari and
/// Black to move. Black C2 takes it.
///
/// ```text
///   3 . B W . .
///   2 B W . W .
///   1 . B W . .
///     A B C D E
/// ```
const KO_SETUP: &[&str] = &["B3", "C3", "A2", "D2", "B1", "C1", "E5", "B2"];

// =============================================================================
// Coordinate encoding
// =============================================================================

#[test]
fn test_flat_roundtrip_every_point() {
    for size in [5, 7, 9] {
        for pt in 0..size * size {
            let (x, y) = unflatten(size, pt);
            assert_eq!(flatten(size, x, y), pt);
        }
    }
}

#[test]
fn test_legal_move_names_roundtrip() {
    let board = setup_position(9, &["E5", "D4", "C3"]);
    for mv in board.legal_moves() {
        let name = board.move_to_name(mv);
        assert_eq!(board.name_to_move(&name), Ok(mv));
    }
    assert_eq!(coord_to_name((-1, -1)), "PASS");
    assert_eq!(name_to_coord(9, "PASS"), Ok((-1, -1)));
}

#[test]
fn test_invalid_move_names() {
    let mut board = Board::new(9).unwrap();
    assert!(matches!(
        board.play_named("I5"),
        Err(BoardError::InvalidMoveName(_))
    ));
    assert!(matches!(
        board.play_named("A0"),
        Err(BoardError::InvalidMoveName(_))
    ));
    assert_eq!(board.history().len(), 0);
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_corner_scenario_5x5() {
    let mut board = Board::with_seed(5, 1).unwrap();
    let corner = flatten(5, 0, 0);
    assert!(board.push(Move::Play(corner)).unwrap());

    // White may play on all 24 empty points, or pass
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 25);
    assert!(moves.contains(&Move::Pass));
    assert!(!moves.contains(&Move::Play(corner)));

    assert!(board.push(Move::Play(flatten(5, 0, 1))).unwrap());
    assert_eq!(board.liberties(corner), Some(1));
    assert!(board.push(Move::Play(flatten(5, 4, 4))).unwrap());
    assert!(board.push(Move::Play(flatten(5, 1, 0))).unwrap());

    // The corner stone lost its last liberty and is already gone
    assert_eq!(board.cell(corner), None);
    assert_eq!(board.captures(Color::White), 1);
    assert_eq!(board.stones(Color::Black), 1);
    assert_eq!(board.liberties(flatten(5, 0, 1)), Some(3));
    assert_eq!(board.liberties(flatten(5, 1, 0)), Some(3));
    assert!(board.empties().any(|pt| pt == corner));
}

#[test]
fn test_weak_moves_superset_of_legal_moves() {
    let board = setup_position(5, KO_SETUP);
    let weak = board.weak_legal_moves();
    for mv in board.legal_moves() {
        assert!(weak.contains(&mv));
    }
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_surrounded_point_is_suicide() {
    // White surrounds C3; Black plays on the edge meanwhile
    let mut board = setup_position(5, &["E5", "B3", "E4", "D3", "E3", "C2", "A5", "C4"]);
    let c3 = point(&board, "C3");
    assert_eq!(board.next_player(), Color::Black);
    assert!(!board.is_legal(Move::Play(c3)));
    assert!(!board.weak_is_legal(Move::Play(c3)));
    assert!(!board.legal_moves().contains(&Move::Play(c3)));
    assert!(!board.weak_legal_moves().contains(&Move::Play(c3)));

    let hash = board.hash();
    assert_eq!(board.push(Move::Play(c3)), Ok(false));
    assert_eq!(board.hash(), hash);
    assert_eq!(board.cell(c3), None);
    board.pop().unwrap();

    // White may fill it: it is White's own eye
    board.play(Move::Pass).unwrap();
    assert!(board.is_legal(Move::Play(c3)));
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_restores_neighbor_liberties() {
    let mut board = setup_position(5, KO_SETUP);
    let names = ["A2", "B3", "B1"];
    let before: Vec<i16> = names
        .iter()
        .map(|n| board.liberties(point(&board, n)).unwrap())
        .collect();
    assert_eq!(before, vec![2, 2, 1]);

    assert!(board.play_named("C2").unwrap());
    let b2 = point(&board, "B2");
    assert_eq!(board.cell(b2), None);
    assert_eq!(board.captures(Color::Black), 1);
    assert_eq!(board.stones(Color::White), 3);

    for (name, libs) in names.iter().zip(before) {
        assert_eq!(board.liberties(point(&board, name)), Some(libs + 1), "{name}");
    }
    assert_eq!(board.liberties(point(&board, "C2")), Some(1));
}

#[test]
fn test_capture_large_string() {
    // White A1-A2-A3 along the edge, captured by Black's B-column wall
    let board = setup_position(5, &["B1", "A1", "B2", "A2", "B3", "A3", "A4"]);
    for name in ["A1", "A2", "A3"] {
        assert_eq!(board.cell(point(&board, name)), None, "{name}");
    }
    assert_eq!(board.captures(Color::Black), 3);
    assert_eq!(board.stones(Color::White), 0);
    // Freed points are liberties again: the B column string gets three back
    assert_eq!(board.liberties(point(&board, "B2")), Some(7));
}

// =============================================================================
// Super-ko
// =============================================================================

#[test]
fn test_immediate_ko_recapture_is_rejected() {
    let mut board = setup_position(5, KO_SETUP);
    assert!(board.play_named("C2").unwrap());

    let retake = board.name_to_move("B2").unwrap();
    assert!(board.weak_is_legal(retake));
    assert!(board.weak_legal_moves().contains(&retake));
    assert!(!board.is_legal(retake));
    assert!(!board.legal_moves().contains(&retake));

    // A rejected push changes nothing but still needs its pop
    let hash = board.hash();
    let cells = grid(&board);
    assert_eq!(board.push(retake), Ok(false));
    assert_eq!(board.hash(), hash);
    assert_eq!(grid(&board), cells);
    assert_eq!(board.depth(), 1);
    board.pop().unwrap();

    // The earlier position is still remembered
    assert!(!board.is_legal(retake));
    assert_eq!(board.play(retake), Ok(false));
}

#[test]
fn test_ko_retake_after_threat() {
    let mut board = setup_position(5, KO_SETUP);
    board.play_named("C2").unwrap();
    // White plays elsewhere, Black answers, now the retake makes a new position
    board.play_named("E1").unwrap();
    board.play_named("D4").unwrap();
    let retake = board.name_to_move("B2").unwrap();
    assert!(board.is_legal(retake));
    assert!(board.play(retake).unwrap());
    assert_eq!(board.cell(point(&board, "C2")), None);
    assert_eq!(board.captures(Color::White), 1);
}

#[test]
fn test_popping_forgets_positions_of_the_abandoned_line() {
    let mut board = setup_position(5, KO_SETUP);
    let take = board.name_to_move("C2").unwrap();
    assert!(board.push(take).unwrap());
    let retake = board.name_to_move("B2").unwrap();
    assert!(!board.is_legal(retake));
    board.pop().unwrap();

    // Back before the capture: nothing of the abandoned line is remembered
    assert!(board.is_legal(take));
    assert!(board.push(take).unwrap());
    assert!(!board.is_legal(retake));
}

// =============================================================================
// Push / pop
// =============================================================================

#[test]
fn test_push_pop_idempotence() {
    let mut board = setup_position(7, &["D4", "C3", "E5"]);
    let hash = board.hash();
    let cells = grid(&board);
    let counts = (board.stones(Color::Black), board.stones(Color::White));
    let history = board.history_names();

    let line = [
        "C4", "D5", "C5", "E4", "D3", "PASS", "E3", "F4", "B3", "C2", "B2", "PASS", "PASS",
    ];
    for name in line {
        let mv = board.name_to_move(name).unwrap();
        assert!(board.push(mv).unwrap(), "{name}");
    }
    assert!(board.is_game_over());
    assert_eq!(board.depth(), line.len());
    assert_eq!(board.push(Move::Pass), Err(BoardError::GameOver));

    for _ in line {
        board.pop().unwrap();
    }
    assert_eq!(board.hash(), hash);
    assert_eq!(grid(&board), cells);
    assert_eq!(
        (board.stones(Color::Black), board.stones(Color::White)),
        counts
    );
    assert_eq!(board.history_names(), history);
    assert_eq!(board.next_player(), Color::White);
    assert!(!board.is_game_over());
    assert_eq!(board.pop(), Err(BoardError::EmptyTrail));
}

#[test]
fn test_boards_do_not_share_hash_tables() {
    let mut a = Board::with_seed(5, 1).unwrap();
    let mut b = Board::with_seed(5, 2).unwrap();
    a.play_named("C3").unwrap();
    b.play_named("C3").unwrap();
    assert_ne!(a.hash(), b.hash());
    // Same seed, same table
    let mut c = Board::with_seed(5, 1).unwrap();
    c.play_named("C3").unwrap();
    assert_eq!(a.hash(), c.hash());
}

// =============================================================================
// Scoring and end of game
// =============================================================================

#[test]
fn test_empty_board_areas() {
    let board = Board::new(5).unwrap();
    assert_eq!(
        board.count_areas(),
        Areas {
            black: 0,
            white: 0,
            neutral: 25
        }
    );
}

#[test]
fn test_two_passes_then_draw() {
    let mut board = Board::new(5).unwrap();
    assert!(board.push(Move::Pass).unwrap());
    assert!(!board.is_game_over());
    assert!(board.push(Move::Pass).unwrap());
    assert!(board.is_game_over());
    assert_eq!(board.compute_score(), (0, 0));
    assert_eq!(board.result(), GameResult::Draw);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_result_follows_score() {
    let board = setup_position(5, &["C3", "PASS", "PASS"]);
    assert!(board.is_game_over());
    assert_eq!(board.compute_score(), (25, 0));
    assert_eq!(board.result(), GameResult::BlackWins);
    assert_eq!(board.final_go_score(), "B+25");
    assert_eq!(board.result().to_string(), "0-1");
}

#[test]
fn test_pass_then_move_does_not_end_game() {
    let board = setup_position(5, &["C3", "PASS", "C4", "PASS"]);
    assert!(!board.is_game_over());
    assert!(board.last_player_passed());
    assert_eq!(board.history_names(), vec!["C3", "PASS", "C4", "PASS"]);
}
