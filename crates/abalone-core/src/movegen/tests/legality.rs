//! 合法性判定と実行のテスト

use super::{cell, mv};
use crate::movegen::{execute, validate, IllegalMove};
use crate::position::BoardState;
use crate::types::{Cell, Direction, Marble, Move, Player};

const B: Marble = Marble::Black;
const W: Marble = Marble::White;
const E: Marble = Marble::Empty;

fn play(board: &mut BoardState, s: &str) {
    if let Err(e) = execute(board, Player::Black, mv(s)) {
        panic!("{s} should be legal: {e}");
    }
}

fn reject(board: &BoardState, s: &str) -> IllegalMove {
    match validate(board, Player::Black, mv(s)) {
        Ok(_) => panic!("{s} should be illegal"),
        Err(e) => e,
    }
}

fn assert_cells(board: &BoardState, expected: &[(&str, Marble)]) {
    for &(name, marble) in expected {
        assert_eq!(board.get(cell(name)), marble, "{name}");
    }
}

#[test]
fn test_in_line_moves() {
    let mut board = BoardState::default();

    play(&mut board, "B1NE");
    assert_cells(&board, &[("B1", E), ("C2", B)]);

    play(&mut board, "B2NW");
    assert_cells(&board, &[("D2", B), ("C2", B), ("B2", E)]);

    // 3個の並びを動かす
    play(&mut board, "A2NE");
    assert_cells(&board, &[("D5", B), ("C4", B), ("B3", B), ("A2", E)]);

    assert_eq!(reject(&board, "G5SE"), IllegalMove::NotOwnMarble);
    assert_eq!(reject(&board, "C2E"), IllegalMove::TooManyMarbles);
    assert_eq!(reject(&board, "B6SW"), IllegalMove::WouldMoveOffBoard);
    assert!(board.is_consistent());
}

#[test]
fn test_sumito_sequence() {
    let mut board = BoardState::default();
    play(&mut board, "B1NE");
    play(&mut board, "B2NW");
    play(&mut board, "A2NE");

    // 2対1で空きマスへ押す
    board.set(cell("C7"), W);
    play(&mut board, "A5NE");
    assert_cells(&board, &[("D8", W), ("C7", B), ("B6", B), ("A5", E)]);

    // 2対1で盤外へ押し出す
    board.set(cell("A5"), W);
    let record = execute(&mut board, Player::Black, mv("C7SW")).unwrap();
    assert!(record.captured);
    assert_cells(&board, &[("A5", B), ("B6", B), ("C7", E)]);

    // 3対1
    board.set(cell("C1"), W);
    play(&mut board, "C4W");
    assert_cells(&board, &[("C1", B), ("C2", B), ("C3", B), ("C4", E)]);

    // 3対2
    board.set(cell("A1"), W);
    board.set(cell("A2"), W);
    play(&mut board, "A5W");
    assert_cells(&board, &[("A1", W), ("A2", B), ("A3", B), ("A4", B), ("A5", E)]);

    // 押した先に自分の玉
    board.set(cell("C4"), W);
    assert_eq!(reject(&board, "C1E"), IllegalMove::BlockedLanding);
    // 1対1
    assert_eq!(reject(&board, "A2W"), IllegalMove::CannotPushLine);
    board.set(cell("B1"), W);
    assert_eq!(reject(&board, "C1SE"), IllegalMove::CannotPushLine);
    assert!(board.is_consistent());
}

#[test]
fn test_broadside_moves() {
    let mut board = BoardState::default();
    for s in ["B1NE", "B2NW", "A2NE"] {
        play(&mut board, s);
    }
    board.set(cell("C7"), W);
    play(&mut board, "A5NE");
    board.set(cell("A5"), W);
    play(&mut board, "C7SW");
    board.set(cell("C1"), W);
    play(&mut board, "C4W");
    board.set(cell("A1"), W);
    board.set(cell("A2"), W);
    play(&mut board, "A5W");
    board.set(cell("C4"), W);
    board.set(cell("B1"), W);

    play(&mut board, "C1D2NW");
    assert_cells(&board, &[("D1", B), ("E2", B), ("C1", E), ("D2", E)]);

    let off_first = Move::Broadside {
        first: Cell::OFF,
        second: cell("E2"),
        direction: Direction::E,
    };
    assert_eq!(validate(&board, Player::Black, off_first), Err(IllegalMove::BoundaryOffBoard));
    let off_second = Move::broadside(cell("E2"), Cell::OFF, Direction::E);
    assert_eq!(validate(&board, Player::Black, off_second), Err(IllegalMove::BoundaryOffBoard));

    board.set(cell("C4"), B);
    board.set(cell("D5"), E);
    assert_eq!(reject(&board, "E2E2E"), IllegalMove::NotAStraightLineOfValidLength);
    assert_eq!(reject(&board, "C2C5NE"), IllegalMove::NotAStraightLineOfValidLength);
    assert_eq!(reject(&board, "C1F3NW"), IllegalMove::NotAStraightLineOfValidLength);
    assert_eq!(reject(&board, "D1E2NE"), IllegalMove::DirectionMustBeSideways);
    assert_eq!(reject(&board, "G5G7NE"), IllegalMove::NotOwnMarble);
    assert_eq!(reject(&board, "A2A4NE"), IllegalMove::DestinationMustBeEmpty);
    assert_eq!(reject(&board, "A2A4SE"), IllegalMove::DestinationMustBeEmpty);
    assert_eq!(reject(&board, "C2C3SW"), IllegalMove::DestinationMustBeEmpty);
    assert!(board.is_consistent());
}

#[test]
fn test_in_line_from_off_board() {
    let board = BoardState::default();
    let off = Move::in_line(Cell::OFF, Direction::NE);
    assert_eq!(validate(&board, Player::Black, off), Err(IllegalMove::NotOwnMarble));
    assert_eq!(reject(&board, "E5NE"), IllegalMove::NotOwnMarble);
}

#[test]
fn test_validate_does_not_mutate() {
    let board = BoardState::default();
    let before = board.clone();
    let plan = validate(&board, Player::Black, mv("A1NE")).unwrap();
    assert_eq!(board, before);
    // A1 が空き、D4 に黒が入る（A1, B2, C3 の3個を動かす）
    assert_eq!(plan.changes.len(), 2);
    assert_eq!(plan.changes[0].cell, cell("A1"));
    assert_eq!(plan.changes[1].cell, cell("D4"));
    assert!(!plan.captured);
}

#[test]
fn test_sumito_relocates_single_marble() {
    // 黒2個（E3, E4）で白1個（E5）を空きマス（E6）へ押す
    let mut board = BoardState::empty(Player::Black);
    board.set(cell("E3"), B);
    board.set(cell("E4"), B);
    board.set(cell("E5"), W);
    let record = board.do_move(mv("E3E")).unwrap();
    assert_cells(&board, &[("E3", E), ("E4", B), ("E5", B), ("E6", W)]);
    assert_eq!(board.score().black, 2);
    assert_eq!(board.score().white, 1);
    assert_eq!(board.side_to_move(), Player::White);
    board.undo_move(&record);
    assert_cells(&board, &[("E3", B), ("E4", B), ("E5", W), ("E6", E)]);
    assert_eq!(board.side_to_move(), Player::Black);
}

#[test]
fn test_capture_and_undo() {
    let mut board = BoardState::empty(Player::White);
    board.set(cell("E7"), W);
    board.set(cell("E8"), W);
    board.set(cell("E9"), B);
    let before = board.clone();
    let record = board.do_move(mv("E7E")).unwrap();
    assert!(record.captured);
    assert_eq!(board.pieces(Player::Black).len(), 0);
    assert_cells(&board, &[("E7", E), ("E8", W), ("E9", W)]);
    board.undo_move(&record);
    assert_eq!(board, before);
}

#[test]
fn test_white_pushes_black() {
    // 白3個で黒2個を押す
    let mut board = BoardState::empty(Player::White);
    for name in ["I5", "H5", "G5"] {
        board.set(cell(name), W);
    }
    for name in ["F5", "E5"] {
        board.set(cell(name), B);
    }
    let record = execute(&mut board, Player::White, mv("I5SE")).unwrap();
    assert!(!record.captured);
    assert_cells(&board, &[("I5", E), ("F5", W), ("E5", B), ("D5", B)]);
}
