//! 指し手生成モジュール
//!
//! - `validate` / `execute`: 縦押し（押し出しを含む）と横移動の合法性判定と実行
//! - `generate_legal_moves`: 手番側の全合法手（重複なし）
//! - `random_legal_move`: ランダムな合法手の抽選
//! - `perft`: 指し手生成の検証用ノード数カウント

mod generator;
mod legality;
mod movelist;
mod random;

#[cfg(test)]
mod tests;

pub use generator::{generate_legal_moves, has_legal_move, legal_moves, perft, perft_divide};
pub use legality::{
    execute, is_legal, validate, CellChange, CellChanges, IllegalMove, MovePlan, MoveRecord,
};
pub use movelist::{MoveList, MAX_MOVES};
pub use random::{random_legal_move, MAX_MARBLE_SAMPLES};
