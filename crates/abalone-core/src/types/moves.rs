//! 指し手（Move）と棋譜表記
//!
//! 表記は `<マス>[<マス>]<方向>`。
//!
//! - 1マス: 縦押し（in-line）。マスは最後尾の玉（caboose）
//! - 2マス: 横移動（broadside）。マスは並びの両端で、どちらの順でも受け付ける
//!
//! 例: `A1NE`, `C3C5NW`, `b1b2NW`

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::{Cell, Direction};

/// 指し手
///
/// 横移動の両端は `Move::broadside` で表記順の昇順に揃えるので、
/// 同じ横移動は端の順序によらず等しくなる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    /// 縦押し: 最後尾の玉から `direction` の向きへ1〜3個を動かす（押し出しを含む）
    InLine { caboose: Cell, direction: Direction },
    /// 横移動: `first`〜`second` の2〜3個を `direction` の向きへ平行移動する
    Broadside {
        first: Cell,
        second: Cell,
        direction: Direction,
    },
}

impl Move {
    #[inline]
    pub const fn in_line(caboose: Cell, direction: Direction) -> Move {
        Move::InLine { caboose, direction }
    }

    /// 横移動（両端を昇順に並べ替える）
    #[inline]
    pub fn broadside(a: Cell, b: Cell, direction: Direction) -> Move {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Move::Broadside {
            first,
            second,
            direction,
        }
    }

    #[inline]
    pub const fn direction(self) -> Direction {
        match self {
            Move::InLine { direction, .. } | Move::Broadside { direction, .. } => direction,
        }
    }

    #[inline]
    pub const fn is_broadside(self) -> bool {
        matches!(self, Move::Broadside { .. })
    }

    /// 表記に現れるマス（縦押しは1つ、横移動は両端の2つ）
    pub fn cells(self) -> SmallVec<[Cell; 2]> {
        match self {
            Move::InLine { caboose, .. } => smallvec::smallvec![caboose],
            Move::Broadside { first, second, .. } => smallvec::smallvec![first, second],
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Move::InLine { caboose, direction } => write!(f, "{caboose}{direction}"),
            Move::Broadside {
                first,
                second,
                direction,
            } => write!(f, "{first}{second}{direction}"),
        }
    }
}

/// 棋譜表記の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid move length: {0:?}")]
    InvalidLength(String),
    #[error("invalid cell in move: {0:?}")]
    InvalidCell(String),
    #[error("invalid direction in move: {0:?}")]
    InvalidDirection(String),
}

fn parse_cell(s: &str, range: std::ops::Range<usize>) -> Result<Cell, NotationError> {
    s.get(range)
        .and_then(|part| part.parse::<Cell>().ok())
        .ok_or_else(|| NotationError::InvalidCell(s.to_string()))
}

fn parse_direction(s: &str, start: usize) -> Result<Direction, NotationError> {
    s.get(start..)
        .and_then(|part| part.parse::<Direction>().ok())
        .ok_or_else(|| NotationError::InvalidDirection(s.to_string()))
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            // マス2文字 + 方向1〜2文字
            3 | 4 => Ok(Move::in_line(parse_cell(s, 0..2)?, parse_direction(s, 2)?)),
            5 | 6 => {
                let a = parse_cell(s, 0..2)?;
                let b = parse_cell(s, 2..4)?;
                Ok(Move::broadside(a, b, parse_direction(s, 4)?))
            }
            _ => Err(NotationError::InvalidLength(s.to_string())),
        }
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
