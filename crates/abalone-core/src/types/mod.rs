//! 基本型モジュール
//!
//! 盤・座標・指し手の基本型を定義する。
//!
//! - `Cube` / `Axial`: 六角格子の座標（距離・方向の計算用）
//! - `Cell`: 盤上の61マスと盤外番兵 `Cell::OFF`、盤配列との対応
//! - `CellSet`: マスの集合（手番ごとの玉の索引）
//! - `Player` / `Marble` / `Direction`
//! - `Move`: 縦押し・横移動と棋譜表記
//! - `Score`: 玉の数と勝敗判定
//!
//! 依存関係: `Cube` ← `Direction` ← `Cell` ← `CellSet` / `Move`

mod cell;
mod cellset;
mod cube;
mod direction;
mod marble;
mod moves;
mod player;
mod score;

pub use cell::{line_from_to, line_to_edge, Cell, Line, ParseCellError, ROWS};
pub use cellset::{CellSet, CellSetIter};
pub use cube::{Axial, Cube, HexError};
pub use direction::{Direction, ParseDirectionError};
pub use marble::Marble;
pub use moves::{Move, NotationError};
pub use player::Player;
pub use score::Score;
