//! 開発用ツールの共通処理

pub mod perft;
