//! perft（指し手生成の検証用ノード数カウント）の実行と結果の出力

use std::path::Path;
use std::time::{Duration, Instant};

use abalone_core::movegen::{legal_moves, perft};
use abalone_core::position::BoardStateJson;
use abalone_core::tt::{CacheConfig, PositionCache, ZobristKeys};
use abalone_core::{BoardState, MoveList, Player};
use anyhow::{Context, Result};
use serde::Serialize;

/// 白番の局面に混ぜるキー（局面ハッシュには手番が入らないため）
const WHITE_TO_MOVE_KEY: u64 = 0x9E37_79B9_7F4A_7C15;

/// JSON 文字列（`{"board": [[...]], "to_move": "black"}`）から局面を読む
pub fn parse_position(json: &str) -> Result<BoardState> {
    let json: BoardStateJson = serde_json::from_str(json).context("局面JSONの解析に失敗")?;
    BoardState::try_from(json).context("局面JSONの盤面が不正")
}

pub fn load_position(path: &Path) -> Result<BoardState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("局面ファイルを読めません: {}", path.display()))?;
    parse_position(&text).with_context(|| format!("局面ファイル: {}", path.display()))
}

pub fn load_cache_config(path: &Path) -> Result<CacheConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("キャッシュ設定を読めません: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("キャッシュ設定の解析に失敗: {}", path.display()))
}

/// ルートの指し手ごとのノード数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivideEntry {
    #[serde(rename = "move")]
    pub mv: String,
    pub nodes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerftReport {
    pub depth: u32,
    pub nodes: u64,
    pub elapsed_ms: u128,
    pub nps: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub divide: Vec<DivideEntry>,
}

impl PerftReport {
    fn new(depth: u32, nodes: u64, elapsed: Duration, divide: Vec<DivideEntry>) -> Self {
        let secs = elapsed.as_secs_f64();
        let nps = if secs > 0.0 { (nodes as f64 / secs) as u64 } else { 0 };
        Self {
            depth,
            nodes,
            elapsed_ms: elapsed.as_millis(),
            nps,
            divide,
        }
    }

    /// 人が読む形式
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.divide {
            out.push_str(&format!("{}: {}\n", entry.mv, entry.nodes));
        }
        out.push_str(&format!(
            "depth {} nodes {} time {}ms nps {}",
            self.depth, self.nodes, self.elapsed_ms, self.nps
        ));
        out
    }
}

/// perft を実行する
///
/// `cache` を渡すと子局面の指し手リストを局面ハッシュで使い回す。
pub fn run(board: &mut BoardState, depth: u32, divide: bool, cache: Option<&mut PositionCache>) -> PerftReport {
    let start = Instant::now();
    let mut entries = Vec::new();
    let nodes = match cache {
        None if divide => {
            let mut total = 0;
            for (mv, nodes) in abalone_core::movegen::perft_divide(board, depth) {
                total += nodes;
                entries.push(DivideEntry {
                    mv: mv.to_string(),
                    nodes,
                });
            }
            total
        }
        None => perft(board, depth),
        Some(cache) => {
            let keys = ZobristKeys::with_seed(0);
            let key = keys.hash(board);
            if divide && depth > 0 && !board.is_over() {
                let mut total = 0;
                for mv in legal_moves(board) {
                    let Ok(record) = board.do_move(mv) else {
                        continue;
                    };
                    let nodes = cached_perft(board, keys.update(key, &record), depth - 1, &keys, cache);
                    board.undo_move(&record);
                    total += nodes;
                    entries.push(DivideEntry {
                        mv: mv.to_string(),
                        nodes,
                    });
                }
                total
            } else {
                cached_perft(board, key, depth, &keys, cache)
            }
        }
    };
    let report = PerftReport::new(depth, nodes, start.elapsed(), entries);
    log::info!("perft depth {} nodes {} ({}ms)", depth, nodes, report.elapsed_ms);
    report
}

/// 指し手リストをキャッシュしながら数える perft
///
/// `key` は `board` の局面ハッシュ（手番は含まない）。
pub fn cached_perft(
    board: &mut BoardState,
    key: u64,
    depth: u32,
    keys: &ZobristKeys,
    cache: &mut PositionCache,
) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_over() {
        return 0;
    }
    let cache_key = match board.side_to_move() {
        Player::Black => key,
        Player::White => key ^ WHITE_TO_MOVE_KEY,
    };
    let moves: MoveList = match cache.children(cache_key) {
        Some(moves) => moves.clone(),
        None => {
            let moves = legal_moves(board);
            cache.store_children(cache_key, moves.clone());
            moves
        }
    };
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let Ok(record) = board.do_move(mv) else {
            continue;
        };
        nodes += cached_perft(board, keys.update(key, &record), depth - 1, keys, cache);
        board.undo_move(&record);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use abalone_core::Layout;

    fn small_cache() -> PositionCache {
        PositionCache::new(&CacheConfig {
            tt_entries: 16,
            heuristic_entries: 16,
            children_entries: 1024,
        })
    }

    #[test]
    fn test_run_plain_and_divide() {
        let mut board = BoardState::default();
        let report = run(&mut board, 2, false, None);
        assert_eq!(report.nodes, 1936);
        assert!(report.divide.is_empty());

        let report = run(&mut board, 2, true, None);
        assert_eq!(report.nodes, 1936);
        assert_eq!(report.divide.len(), 44);
        assert_eq!(board, BoardState::default());
    }

    #[test]
    fn test_cached_perft_matches_plain() {
        let mut cache = small_cache();
        let mut board = BoardState::from_layout(Layout::BelgianDaisy, Player::Black);
        assert_eq!(run(&mut board, 2, false, Some(&mut cache)).nodes, 2692);
        // キャッシュが温まった状態でも同じ
        let report = run(&mut board, 2, true, Some(&mut cache));
        assert_eq!(report.nodes, 2692);
        assert_eq!(report.divide.len(), 52);
        assert_eq!(board, BoardState::from_layout(Layout::BelgianDaisy, Player::Black));
    }

    #[test]
    fn test_parse_position() {
        let json = serde_json::to_string(&BoardStateJson::from(&BoardState::default())).unwrap();
        assert_eq!(parse_position(&json).unwrap(), BoardState::default());
        assert!(parse_position("{}").is_err());
        assert!(parse_position(r#"{"board": [[2,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0]], "to_move": "white"}"#).is_err());
    }

    #[test]
    fn test_report_text_and_json() {
        let mut board = BoardState::default();
        let report = run(&mut board, 1, true, None);
        let text = report.to_text();
        assert!(text.contains("A1NE: 1"));
        assert!(text.ends_with(&format!("nps {}", report.nps)));
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["nodes"], 44);
        assert_eq!(value["divide"][0]["nodes"], 1);
    }
}
