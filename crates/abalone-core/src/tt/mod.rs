//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）と Zobrist ハッシュ。
//!
//! - `ZobristKeys`: 局面のハッシュ値（指し手ごとに差分更新）
//! - `TTEntry`: エントリ（64bitキーで照合）
//! - `TranspositionTable`: クラスター単位の置換表
//! - `PositionCache`: 置換表・評価値・子局面の指し手をまとめたキャッシュ
//!
//! 世代管理は8刻みのカウンターで行い、古い世代のエントリほど置換されやすい。

mod cache;
mod entry;
mod table;
mod zobrist;

pub use cache::{CacheConfig, PositionCache, SlotTable};
pub use entry::{Bound, TTData, TTEntry};
pub use table::TranspositionTable;
pub use zobrist::ZobristKeys;

/// クラスターサイズ（エントリ数）
pub const CLUSTER_SIZE: usize = 3;

/// Generation関連の定数
pub const GENERATION_BITS: u32 = 3;
pub const GENERATION_DELTA: u8 = 1 << GENERATION_BITS; // 8
pub const GENERATION_CYCLE: u16 = 255 + GENERATION_DELTA as u16;
pub const GENERATION_MASK: u16 = 0xF8; // (0xFF << GENERATION_BITS) as u8
