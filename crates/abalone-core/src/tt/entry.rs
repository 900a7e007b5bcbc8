//! 置換表エントリー
//!
//! TTEntry: 64bitキーで照合するエントリ
//! TTData: 読み取り用のデータ構造

use super::{GENERATION_CYCLE, GENERATION_MASK};
use crate::types::Move;

/// 探索値の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Bound {
    /// なし（空のエントリ）
    #[default]
    None = 0,
    /// 上界（fail-low: 真の値はこれ以下）
    Upper = 1,
    /// 下界（fail-high: 真の値はこれ以上）
    Lower = 2,
    /// 正確な値
    Exact = 3,
}

/// 置換表から読み取ったデータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTData {
    /// 最善手
    pub best_move: Option<Move>,
    /// 探索値
    pub value: i32,
    /// 探索深さ
    pub depth: u8,
    /// 境界タイプ
    pub bound: Bound,
}

/// 置換表エントリー
#[derive(Debug, Clone, Copy, Default)]
pub struct TTEntry {
    key: u64,
    best_move: Option<Move>,
    value: i32,
    depth: u8,
    bound: Bound,
    /// 書き込んだ時点の世代（下位3bitは使用しない）
    generation8: u8,
}

impl TTEntry {
    /// 空のエントリ
    pub const EMPTY: TTEntry = TTEntry {
        key: 0,
        best_move: None,
        value: 0,
        depth: 0,
        bound: Bound::None,
        generation8: 0,
    };

    /// エントリが使用されているか
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.bound != Bound::None
    }

    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn matches(&self, key: u64) -> bool {
        self.is_occupied() && self.key == key
    }

    pub fn read(&self) -> TTData {
        TTData {
            best_move: self.best_move,
            value: self.value,
            depth: self.depth,
            bound: self.bound,
        }
    }

    /// エントリに保存
    ///
    /// 同じ局面を浅い探索で上書きする場合は、確定値か世代が古いときに限る。
    /// 新しい手がない場合は古い手を保持する。
    pub fn save(&mut self, key: u64, data: TTData, generation8: u8) {
        let same = self.matches(key);
        if data.best_move.is_some() || !same {
            self.best_move = data.best_move;
        }
        if !same
            || data.bound == Bound::Exact
            || data.depth >= self.depth
            || self.relative_age(generation8) != 0
        {
            self.key = key;
            self.value = data.value;
            self.depth = data.depth;
            self.bound = data.bound;
            self.generation8 = generation8;
        }
    }

    /// 相対的な世代（0 = 最新）
    #[inline]
    pub fn relative_age(&self, generation8: u8) -> u8 {
        let age = GENERATION_CYCLE
            .wrapping_add(generation8 as u16)
            .wrapping_sub(self.generation8 as u16);
        (age & GENERATION_MASK) as u8
    }

    /// 置換価値 = depth - relative_age（空のエントリは最優先で置換）
    #[inline]
    pub fn replace_value(&self, generation8: u8) -> i32 {
        if !self.is_occupied() {
            return i32::MIN;
        }
        self.depth as i32 - self.relative_age(generation8) as i32
    }
}
