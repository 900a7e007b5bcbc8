//! アバロンのルールエンジン
//!
//! 61マスの六角盤、縦押し（押し出し）と横移動の合法性判定、合法手生成、
//! 盤の回転・鏡映、Zobrist ハッシュと置換表を提供する。
//! 探索や評価関数はこのクレートの外側で実装する。
//!
//! ```
//! use abalone_core::{legal_moves, BoardState, Move};
//!
//! let mut board = BoardState::default();
//! assert_eq!(legal_moves(&board).len(), 44);
//!
//! let mv: Move = "A1NE".parse().unwrap();
//! let record = board.do_move(mv).unwrap();
//! board.undo_move(&record);
//! assert_eq!(board, BoardState::default());
//! ```

pub mod movegen;
pub mod position;
pub mod symmetry;
pub mod tt;
pub mod types;

pub use movegen::{generate_legal_moves, legal_moves, perft, IllegalMove, MoveList, MoveRecord};
pub use position::{BoardState, Layout};
pub use symmetry::{canonical_form, Symmetry};
pub use tt::{PositionCache, ZobristKeys};
pub use types::{Cell, Direction, Marble, Move, Player, Score};
