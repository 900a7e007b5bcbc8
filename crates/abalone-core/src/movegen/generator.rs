//! 指し手生成器
//!
//! 手番側の玉ごとに、その玉を最後尾とする縦押し6方向と、
//! 「前方」3方向の隣（1つ先・2つ先）を端とする横移動の候補を作り、
//! `validate` を通ったものだけを返す。
//!
//! 縦押しは最後尾の玉で識別されるので、長さ2〜3の並びも1マスの候補6方向で尽くされる。
//! 横移動の端の組は前方3方向だけから作るので、同じ並びを2回数えることはない。

use crate::position::BoardState;
use crate::types::{Cell, Direction, Marble, Move, Player};

use super::legality::{is_legal, validate};
use super::movelist::MoveList;

/// 候補を検査し、合法なら追加する
#[inline]
fn push_if_legal(board: &BoardState, player: Player, mv: Move, list: &mut MoveList) {
    match validate(board, player, mv) {
        Ok(_) => list.push(mv),
        Err(reason) => log::trace!("rejected {mv}: {reason}"),
    }
}

#[inline]
fn is_own(board: &BoardState, cell: Cell, own: Marble) -> bool {
    !cell.is_off() && board.get(cell) == own
}

/// 端の組 (start, end) の横移動の候補を、並びに平行でない4方向について調べる
#[inline]
fn push_broadsides(
    board: &BoardState,
    player: Player,
    start: Cell,
    end: Cell,
    axis: Direction,
    list: &mut MoveList,
) {
    for dir in Direction::ALL {
        if !dir.is_parallel(axis) {
            push_if_legal(board, player, Move::broadside(start, end, dir), list);
        }
    }
}

/// `player` の合法手を全て `list` に追加する
///
/// 終局しているかどうかは見ない。
pub fn generate_legal_moves(board: &BoardState, player: Player, list: &mut MoveList) {
    let own = Marble::of(player);
    for cell in board.pieces(player) {
        for dir in Direction::ALL {
            push_if_legal(board, player, Move::in_line(cell, dir), list);
        }
        for axis in Direction::FORWARD {
            let n1 = cell.neighbor(axis);
            if !is_own(board, n1, own) {
                continue;
            }
            push_broadsides(board, player, cell, n1, axis, list);
            let n2 = n1.neighbor(axis);
            if is_own(board, n2, own) {
                push_broadsides(board, player, cell, n2, axis, list);
            }
        }
    }
}

/// 手番側の合法手
pub fn legal_moves(board: &BoardState) -> MoveList {
    let mut list = MoveList::new();
    generate_legal_moves(board, board.side_to_move(), &mut list);
    list
}

/// 合法手が1つでもあるか（見つかった時点で打ち切る）
pub fn has_legal_move(board: &BoardState, player: Player) -> bool {
    board.pieces(player).iter().any(|cell| {
        Direction::ALL
            .into_iter()
            .any(|dir| is_legal(board, player, Move::in_line(cell, dir)))
    }) || {
        let mut list = MoveList::new();
        generate_legal_moves(board, player, &mut list);
        !list.is_empty()
    }
}

/// 深さ `depth` までの局面数を数える（指し手生成の検証用）
///
/// 終局した局面は子を持たない葉として扱う。
pub fn perft(board: &mut BoardState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_over() {
        return 0;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let Ok(record) = board.do_move(mv) else {
            continue;
        };
        nodes += perft(board, depth - 1);
        board.undo_move(&record);
    }
    nodes
}

/// ルートの指し手ごとの perft
pub fn perft_divide(board: &mut BoardState, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 || board.is_over() {
        return Vec::new();
    }
    let mut result = Vec::new();
    for mv in legal_moves(board) {
        let Ok(record) = board.do_move(mv) else {
            continue;
        };
        result.push((mv, perft(board, depth - 1)));
        board.undo_move(&record);
    }
    result
}
