//! 方向（Direction）

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cube::{Cube, HexError};

/// 6方向（インデックス順は時計回り）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    NE = 0,
    E = 1,
    SE = 2,
    SW = 3,
    W = 4,
    NW = 5,
}

impl Direction {
    /// 方向の数
    pub const NUM: usize = 6;

    /// 全ての方向
    pub const ALL: [Direction; 6] = [
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// 指し手生成で並びを1回ずつ数えるための「前方」3方向
    pub const FORWARD: [Direction; 3] = [Direction::NW, Direction::NE, Direction::E];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// u8からDirectionに変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Direction> {
        match n {
            0 => Some(Direction::NE),
            1 => Some(Direction::E),
            2 => Some(Direction::SE),
            3 => Some(Direction::SW),
            4 => Some(Direction::W),
            5 => Some(Direction::NW),
            _ => None,
        }
    }

    /// 逆方向
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// 同じ軸上（同方向か逆方向）かどうか
    #[inline]
    pub const fn is_parallel(self, other: Direction) -> bool {
        self as u8 % 3 == other as u8 % 3
    }

    /// キューブ座標での単位ベクトル
    #[inline]
    pub const fn unit(self) -> Cube {
        match self {
            Direction::NE => Cube::new(1, -1, 0),
            Direction::E => Cube::new(1, 0, -1),
            Direction::SE => Cube::new(0, 1, -1),
            Direction::SW => Cube::new(-1, 1, 0),
            Direction::W => Cube::new(-1, 0, 1),
            Direction::NW => Cube::new(0, -1, 1),
        }
    }

    /// 単位ベクトルから方向を引く
    ///
    /// 6方向のいずれとも一致しない場合は `HexError::UndefinedDirection`。
    pub const fn from_unit(v: Cube) -> Result<Direction, HexError> {
        match (v.q, v.r, v.s) {
            (1, -1, 0) => Ok(Direction::NE),
            (1, 0, -1) => Ok(Direction::E),
            (0, 1, -1) => Ok(Direction::SE),
            (-1, 1, 0) => Ok(Direction::SW),
            (-1, 0, 1) => Ok(Direction::W),
            (0, -1, 1) => Ok(Direction::NW),
            _ => Err(HexError::UndefinedDirection(v)),
        }
    }

    /// 棋譜表記の文字列
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 方向表記の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NE" => Ok(Direction::NE),
            "E" => Ok(Direction::E),
            "SE" => Ok(Direction::SE),
            "SW" => Ok(Direction::SW),
            "W" => Ok(Direction::W),
            "NW" => Ok(Direction::NW),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_sums_to_zero() {
        for dir in Direction::ALL {
            assert_eq!(dir.unit() + dir.opposite().unit(), Cube::ZERO);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_unit_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_unit(dir.unit()), Ok(dir));
        }
        assert!(Direction::from_unit(Cube::new(1, 1, -2)).is_err());
        assert!(Direction::from_unit(Cube::ZERO).is_err());
    }

    #[test]
    fn test_is_parallel() {
        assert!(Direction::NE.is_parallel(Direction::SW));
        assert!(Direction::E.is_parallel(Direction::E));
        assert!(!Direction::E.is_parallel(Direction::NE));
        assert!(!Direction::NW.is_parallel(Direction::W));
    }

    #[test]
    fn test_direction_str() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>(), Ok(dir));
        }
        assert!("N".parse::<Direction>().is_err());
        assert!("ne".parse::<Direction>().is_err());
    }
}
