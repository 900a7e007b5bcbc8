//! 六角格子のキューブ座標・アキシャル座標
//!
//! キューブ座標 `(q, r, s)` は常に `q + r + s = 0` を満たす。
//! 盤の中心（E5）が原点で、盤上の61マスは `max(|q|, |r|, |s|) <= 4` の領域になる。

use std::ops::{Add, Neg, Sub};

use super::Direction;

/// 座標計算のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// 正規化したベクトルが6方向のいずれとも一致しない
    #[error("vector {0} does not have a direction")]
    UndefinedDirection(Cube),
}

/// キューブ座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i8,
    pub r: i8,
    pub s: i8,
}

/// アキシャル座標（キューブ座標の `s` を省略したもの）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axial {
    pub q: i8,
    pub r: i8,
}

impl Cube {
    /// 原点（盤の中心）
    pub const ZERO: Cube = Cube::new(0, 0, 0);

    /// 盤の半径
    pub const BOARD_RADIUS: i8 = 4;

    #[inline]
    pub const fn new(q: i8, r: i8, s: i8) -> Cube {
        debug_assert!(q as i16 + r as i16 + s as i16 == 0);
        Cube { q, r, s }
    }

    #[inline]
    pub const fn from_axial(axial: Axial) -> Cube {
        Cube::new(axial.q, axial.r, -axial.q - axial.r)
    }

    #[inline]
    pub const fn to_axial(self) -> Axial {
        Axial { q: self.q, r: self.r }
    }

    /// 盤上（61マスの範囲内）かどうか
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.norm() <= Cube::BOARD_RADIUS
    }

    /// 原点からの距離
    #[inline]
    pub const fn norm(self) -> i8 {
        let q = self.q.abs();
        let r = self.r.abs();
        let s = self.s.abs();
        let m = if q > r { q } else { r };
        if m > s { m } else { s }
    }

    /// 2点間の距離 `max(|Δq|, |Δr|, |Δs|)`
    #[inline]
    pub const fn distance(self, other: Cube) -> i8 {
        Cube::new(self.q - other.q, self.r - other.r, self.s - other.s).norm()
    }

    /// 各成分を符号（-1, 0, +1）に置き換える
    ///
    /// 結果は一般に `q + r + s = 0` を満たさないので `Cube::new` を経由しない。
    #[inline]
    pub const fn normalize(self) -> Cube {
        Cube {
            q: self.q.signum(),
            r: self.r.signum(),
            s: self.s.signum(),
        }
    }

    /// `self` から `other` への方向
    ///
    /// 2点が6軸のいずれかの上に並んでいない場合（同一点を含む）は
    /// `HexError::UndefinedDirection`。
    #[inline]
    pub fn direction_to(self, other: Cube) -> Result<Direction, HexError> {
        Direction::from_unit((other - self).normalize())
    }
}

impl Axial {
    #[inline]
    pub const fn new(q: i8, r: i8) -> Axial {
        Axial { q, r }
    }

    #[inline]
    pub const fn to_cube(self) -> Cube {
        Cube::from_axial(self)
    }
}

impl Add for Cube {
    type Output = Cube;

    #[inline]
    fn add(self, rhs: Cube) -> Cube {
        Cube::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for Cube {
    type Output = Cube;

    #[inline]
    fn sub(self, rhs: Cube) -> Cube {
        Cube::new(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

impl Neg for Cube {
    type Output = Cube;

    #[inline]
    fn neg(self) -> Cube {
        Cube::new(-self.q, -self.r, -self.s)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(q: {}, r: {}, s: {})", self.q, self.r, self.s)
    }
}
