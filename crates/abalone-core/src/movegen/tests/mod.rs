//! movegen モジュールのテスト

mod legality;

use crate::types::{Cell, Move};

fn cell(s: &str) -> Cell {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}
