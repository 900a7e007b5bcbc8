//! 局面表現モジュール
//!
//! アバロンの局面を表現し、手の実行・巻き戻しを行う。
//!
//! - `BoardState`: 局面本体（マスごとの内容・手番ごとの玉の集合・手番）
//! - `Layout`: 初期配置（標準・ベルギアンデイジー・ジャーマンデイジー）
//! - `do_move` / `undo_move`: 手の実行と巻き戻し（`MoveRecord` を使う）
//! - 9×9 密配列（`BoardArray`）と JSON 表現（`BoardStateJson`）の相互変換
//!
//! マスの内容と玉の集合は `BoardState::set` を通じて更新されることを前提とし、
//! 常に互いに整合しているように保つ。

mod array;
mod board;
mod layout;

pub use array::{BoardArray, BoardArrayError, BoardStateJson};
pub use board::BoardState;
pub use layout::{Layout, ParseLayoutError};
