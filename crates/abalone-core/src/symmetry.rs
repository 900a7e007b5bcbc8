//! 盤の対称変換（回転6種・鏡映6種）
//!
//! 盤の中心（E5）まわりの時計回りの回転と、キューブ座標の軸に関する鏡映。
//! どの変換も値を返すだけで、入力は変更しない。
//!
//! | 変換 | (q, r, s) の行き先 |
//! |------|--------------------|
//! | 60°  | (-r, -s, -q) |
//! | 120° | (s, q, r) |
//! | 180° | (-q, -r, -s) |
//! | 240° | (r, s, q) |
//! | 300° | (-s, -q, -r) |
//! | 360° | (q, r, s) |
//! | qx / q | (q, s, r) / (-q, -s, -r) |
//! | rx / r | (s, r, q) / (-s, -r, -q) |
//! | sx / s | (r, q, s) / (-r, -q, -s) |

use std::str::FromStr;

use crate::position::BoardState;
use crate::types::{Cell, Cube, Direction, Move};

/// 不正な変換パラメータ
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("rotation must be one of 60, 120, 180, 240, 300, 360 degrees (got {0})")]
    InvalidRotation(i32),
    #[error("reflection axis must be one of q, qx, r, rx, s, sx (got {0:?})")]
    InvalidAxis(String),
}

/// 時計回りの回転
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R60,
    R120,
    R180,
    R240,
    R300,
    R360,
}

impl Rotation {
    pub const ALL: [Rotation; 6] = [
        Rotation::R60,
        Rotation::R120,
        Rotation::R180,
        Rotation::R240,
        Rotation::R300,
        Rotation::R360,
    ];

    pub fn from_degrees(degrees: i32) -> Result<Rotation, TransformError> {
        match degrees {
            60 => Ok(Rotation::R60),
            120 => Ok(Rotation::R120),
            180 => Ok(Rotation::R180),
            240 => Ok(Rotation::R240),
            300 => Ok(Rotation::R300),
            360 => Ok(Rotation::R360),
            _ => Err(TransformError::InvalidRotation(degrees)),
        }
    }

    pub const fn degrees(self) -> i32 {
        self.steps() as i32 * 60
    }

    /// 60°単位の回転数（360° は 6）
    const fn steps(self) -> usize {
        match self {
            Rotation::R60 => 1,
            Rotation::R120 => 2,
            Rotation::R180 => 3,
            Rotation::R240 => 4,
            Rotation::R300 => 5,
            Rotation::R360 => 6,
        }
    }

    /// 逆回転（360° - θ、360° の逆は 360°）
    pub const fn inverse(self) -> Rotation {
        match self {
            Rotation::R60 => Rotation::R300,
            Rotation::R120 => Rotation::R240,
            Rotation::R180 => Rotation::R180,
            Rotation::R240 => Rotation::R120,
            Rotation::R300 => Rotation::R60,
            Rotation::R360 => Rotation::R360,
        }
    }

    pub const fn apply_cube(self, c: Cube) -> Cube {
        let Cube { q, r, s } = c;
        match self {
            Rotation::R60 => Cube::new(-r, -s, -q),
            Rotation::R120 => Cube::new(s, q, r),
            Rotation::R180 => Cube::new(-q, -r, -s),
            Rotation::R240 => Cube::new(r, s, q),
            Rotation::R300 => Cube::new(-s, -q, -r),
            Rotation::R360 => c,
        }
    }
}

/// 鏡映の軸
///
/// `Qx` などは2成分の入れ替えのみ、`Q` などは入れ替えた上で全成分の符号を反転する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Q,
    Qx,
    R,
    Rx,
    S,
    Sx,
}

impl Axis {
    pub const ALL: [Axis; 6] = [Axis::Q, Axis::Qx, Axis::R, Axis::Rx, Axis::S, Axis::Sx];

    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Q => "q",
            Axis::Qx => "qx",
            Axis::R => "r",
            Axis::Rx => "rx",
            Axis::S => "s",
            Axis::Sx => "sx",
        }
    }

    pub const fn apply_cube(self, c: Cube) -> Cube {
        let Cube { q, r, s } = c;
        match self {
            Axis::Qx => Cube::new(q, s, r),
            Axis::Q => Cube::new(-q, -s, -r),
            Axis::Rx => Cube::new(s, r, q),
            Axis::R => Cube::new(-s, -r, -q),
            Axis::Sx => Cube::new(r, q, s),
            Axis::S => Cube::new(-r, -q, -s),
        }
    }

    /// 方向インデックス i の行き先は (k - i) mod 6
    const fn direction_offset(self) -> usize {
        match self {
            Axis::S => 0,
            Axis::Qx => 1,
            Axis::R => 2,
            Axis::Sx => 3,
            Axis::Q => 4,
            Axis::Rx => 5,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| TransformError::InvalidAxis(s.to_string()))
    }
}

/// 盤の対称変換（12要素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Rotate(Rotation),
    Reflect(Axis),
}

impl Symmetry {
    /// 恒等変換
    pub const IDENTITY: Symmetry = Symmetry::Rotate(Rotation::R360);

    pub const ALL: [Symmetry; 12] = [
        Symmetry::Rotate(Rotation::R360),
        Symmetry::Rotate(Rotation::R60),
        Symmetry::Rotate(Rotation::R120),
        Symmetry::Rotate(Rotation::R180),
        Symmetry::Rotate(Rotation::R240),
        Symmetry::Rotate(Rotation::R300),
        Symmetry::Reflect(Axis::Q),
        Symmetry::Reflect(Axis::Qx),
        Symmetry::Reflect(Axis::R),
        Symmetry::Reflect(Axis::Rx),
        Symmetry::Reflect(Axis::S),
        Symmetry::Reflect(Axis::Sx),
    ];

    /// 逆変換（鏡映は自分自身）
    pub const fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate(rotation) => Symmetry::Rotate(rotation.inverse()),
            Symmetry::Reflect(axis) => Symmetry::Reflect(axis),
        }
    }

    pub const fn apply_cube(self, c: Cube) -> Cube {
        match self {
            Symmetry::Rotate(rotation) => rotation.apply_cube(c),
            Symmetry::Reflect(axis) => axis.apply_cube(c),
        }
    }

    /// マスの行き先（`Cell::OFF` は `Cell::OFF`）
    pub const fn apply_cell(self, cell: Cell) -> Cell {
        match cell.to_cube() {
            Some(c) => Cell::from_cube(self.apply_cube(c)),
            None => Cell::OFF,
        }
    }

    /// 方向の行き先（単位ベクトルを変換したもの）
    pub const fn apply_direction(self, dir: Direction) -> Direction {
        let i = dir.index();
        let j = match self {
            Symmetry::Rotate(rotation) => (i + rotation.steps()) % Direction::NUM,
            Symmetry::Reflect(axis) => (axis.direction_offset() + Direction::NUM - i) % Direction::NUM,
        };
        Direction::ALL[j]
    }

    /// 指し手の行き先（横移動の両端は昇順に並べ直す）
    pub fn apply_move(self, mv: Move) -> Move {
        match mv {
            Move::InLine { caboose, direction } => {
                Move::in_line(self.apply_cell(caboose), self.apply_direction(direction))
            }
            Move::Broadside {
                first,
                second,
                direction,
            } => Move::broadside(
                self.apply_cell(first),
                self.apply_cell(second),
                self.apply_direction(direction),
            ),
        }
    }

    /// 局面全体を変換する（手番はそのまま）
    pub fn apply_board(self, board: &BoardState) -> BoardState {
        let mut image = BoardState::empty(board.side_to_move());
        for cell in board.occupied() {
            image.set(self.apply_cell(cell), board.get(cell));
        }
        image
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symmetry::Rotate(rotation) => write!(f, "rotate {}", rotation.degrees()),
            Symmetry::Reflect(axis) => write!(f, "reflect {axis}"),
        }
    }
}

/// 12通りの像のうち `canonical_array()` が辞書順最小のものと、そこへの変換
///
/// 正規形で得た指し手は `symmetry.inverse().apply_move(mv)` で元の局面の手に戻る。
pub fn canonical_form(board: &BoardState) -> (BoardState, Symmetry) {
    let mut best = (board.clone(), Symmetry::IDENTITY);
    let mut best_array = board.canonical_array();
    for symmetry in Symmetry::ALL.into_iter().skip(1) {
        let image = symmetry.apply_board(board);
        let array = image.canonical_array();
        if array < best_array {
            best_array = array;
            best = (image, symmetry);
        }
    }
    best
}
