//! ランダムな合法手の抽選
//!
//! 玉と方向をランダムに選び、半分の確率で横方向の隣の玉を含めて横移動にする。
//! `MAX_MARBLE_SAMPLES` 回の抽選で見つからなければ全合法手から一様に選ぶ。

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::position::BoardState;
use crate::types::{Cell, Direction, Marble, Move, Player};

use super::generator::generate_legal_moves;
use super::legality::is_legal;
use super::movelist::MoveList;

/// 玉を選び直す回数の上限
pub const MAX_MARBLE_SAMPLES: usize = 32;

/// ランダムな合法手。合法手がなければ None
pub fn random_legal_move<R: Rng + ?Sized>(
    board: &BoardState,
    player: Player,
    rng: &mut R,
) -> Option<Move> {
    let pieces = board.pieces(player);
    if pieces.is_empty() {
        return None;
    }
    for _ in 0..MAX_MARBLE_SAMPLES {
        let Some(cell) = pieces.nth(rng.random_range(0..pieces.len())) else {
            continue;
        };
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        for dir in directions {
            let mv = sample_candidate(board, player, cell, dir, rng);
            if is_legal(board, player, mv) {
                return Some(mv);
            }
        }
    }

    log::debug!("random sampler fell back to full generation for {player}");
    let mut list = MoveList::new();
    generate_legal_moves(board, player, &mut list);
    list.as_slice().choose(rng).copied()
}

/// `cell` を含む候補を1つ作る
///
/// 横移動の並びの向き（`axis`）は移動方向とは別に選ぶ。
fn sample_candidate<R: Rng + ?Sized>(
    board: &BoardState,
    player: Player,
    cell: Cell,
    dir: Direction,
    rng: &mut R,
) -> Move {
    if rng.random_bool(0.5) {
        let own = Marble::of(player);
        let axis = Direction::ALL[rng.random_range(0..Direction::NUM)];
        let n1 = cell.neighbor(axis);
        if !axis.is_parallel(dir) && !n1.is_off() && board.get(n1) == own {
            let n2 = n1.neighbor(axis);
            let end = if !n2.is_off() && board.get(n2) == own && rng.random_bool(0.5) {
                n2
            } else {
                n1
            };
            return Move::broadside(cell, end, dir);
        }
    }
    Move::in_line(cell, dir)
}
