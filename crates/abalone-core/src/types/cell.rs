//! マス（Cell）と盤配列インデックス
//!
//! 盤は 5,6,7,8,9,8,7,6,5 マスの9段からなる六角形。外部表記は段の文字（A-I）と
//! 列の数字（1-9）で、F段より上は1から始まらない（F2, G3, H4, I5 が左端）。
//!
//! - `Cell`: 表記順（A1 < A2 < … < I9）の通し番号 0..61 と盤外番兵 `Cell::OFF`
//! - 盤配列インデックス `(x, y)`: `x = 0` が I段、`y` は各段の左端を0に詰めた列番号
//! - 密配列インデックス: 9×9 の配列に段ごとの列オフセットを入れて並べたもの
//!
//! キューブ座標との対応は `q = 列 - 5`, `r = 4 - 段`, `s = -q - r`（段は A = 0 … I = 8）。

use std::str::FromStr;

use smallvec::SmallVec;

use super::cube::Cube;
use super::Direction;

/// 段の数
pub const ROWS: usize = 9;

/// 各段のマス数（A段から）
pub(crate) const ROW_LEN: [u8; ROWS] = [5, 6, 7, 8, 9, 8, 7, 6, 5];

/// 各段の先頭セル番号（A段から）
pub(crate) const ROW_START: [u8; ROWS] = [0, 5, 11, 18, 26, 35, 43, 50, 56];

/// 各段の左端の列番号（A段から）
const MIN_DIGIT: [u8; ROWS] = [1, 1, 1, 1, 1, 2, 3, 4, 5];

/// 段の文字
const ROW_CHARS: [char; ROWS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// 直線上のマス列（最長でも9マス）
pub type Line = SmallVec<[Cell; 9]>;

/// マス（0-60）と盤外番兵（61）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// 盤上のマスの数
    pub const NUM: usize = 61;

    /// 盤外番兵
    pub const OFF: Cell = Cell(Cell::NUM as u8);

    /// 中央（E5）
    pub const CENTER: Cell = Cell(30);

    /// 段（A = 0 … I = 8）と列の数字（1-9）から生成
    #[inline]
    pub const fn new(row: u8, digit: u8) -> Option<Cell> {
        if row as usize >= ROWS {
            return None;
        }
        let min = MIN_DIGIT[row as usize];
        let len = ROW_LEN[row as usize];
        if digit < min || digit >= min + len {
            return None;
        }
        Some(Cell(ROW_START[row as usize] + digit - min))
    }

    /// 通し番号から生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < Cell::NUM {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// インデックスとして使用（`Cell::OFF` は 61）
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 as usize >= Cell::NUM
    }

    /// 段（A = 0 … I = 8）。`Cell::OFF` は None
    #[inline]
    pub const fn row(self) -> Option<u8> {
        if self.is_off() {
            return None;
        }
        let mut row = ROWS - 1;
        while ROW_START[row] > self.0 {
            row -= 1;
        }
        Some(row as u8)
    }

    /// 列の数字（1-9）。`Cell::OFF` は None
    #[inline]
    pub const fn digit(self) -> Option<u8> {
        match self.row() {
            Some(row) => Some(self.0 - ROW_START[row as usize] + MIN_DIGIT[row as usize]),
            None => None,
        }
    }

    /// キューブ座標に変換。`Cell::OFF` は None
    #[inline]
    pub const fn to_cube(self) -> Option<Cube> {
        match (self.row(), self.digit()) {
            (Some(row), Some(digit)) => {
                let q = digit as i8 - 5;
                let r = 4 - row as i8;
                Some(Cube::new(q, r, -q - r))
            }
            _ => None,
        }
    }

    /// キューブ座標から変換。盤外の座標は `Cell::OFF`
    #[inline]
    pub const fn from_cube(cube: Cube) -> Cell {
        if !cube.is_on_board() {
            return Cell::OFF;
        }
        match Cell::new((4 - cube.r) as u8, (cube.q + 5) as u8) {
            Some(cell) => cell,
            None => Cell::OFF,
        }
    }

    /// 隣のマス。盤外に出る場合、および `Cell::OFF` 自身は `Cell::OFF`
    #[inline]
    pub fn neighbor(self, dir: Direction) -> Cell {
        NEIGHBORS[self.index()][dir.index()]
    }

    /// 盤配列インデックス `(x, y)` に変換。`Cell::OFF` は None
    #[inline]
    pub const fn to_array_index(self) -> Option<(usize, usize)> {
        match self.row() {
            Some(row) => {
                let x = ROWS - 1 - row as usize;
                let y = (self.0 - ROW_START[row as usize]) as usize;
                Some((x, y))
            }
            None => None,
        }
    }

    /// 盤配列インデックスから変換。範囲外は `Cell::OFF`
    #[inline]
    pub const fn from_array_index(x: usize, y: usize) -> Cell {
        if x >= ROWS {
            return Cell::OFF;
        }
        let row = ROWS - 1 - x;
        if y >= ROW_LEN[row] as usize {
            return Cell::OFF;
        }
        Cell(ROW_START[row] + y as u8)
    }

    /// 盤配列の段 `x` のマス数
    #[inline]
    pub const fn array_row_len(x: usize) -> usize {
        ROW_LEN[ROWS - 1 - x] as usize
    }

    /// 9×9 密配列でのインデックス `(x, y)` に変換。`Cell::OFF` は None
    ///
    /// I段〜F段（`x < 4`）は右寄せ、E段〜A段は左寄せで並べるので、
    /// 密配列の列はちょうど「列の数字 - 1」になる。
    #[inline]
    pub const fn to_dense_index(self) -> Option<(usize, usize)> {
        match (self.row(), self.digit()) {
            (Some(row), Some(digit)) => Some((ROWS - 1 - row as usize, digit as usize - 1)),
            _ => None,
        }
    }

    /// 9×9 密配列のインデックスから変換。使われない隅・範囲外は `Cell::OFF`
    #[inline]
    pub const fn from_dense_index(x: usize, y: usize) -> Cell {
        if x >= ROWS || y >= ROWS {
            return Cell::OFF;
        }
        match Cell::new((ROWS - 1 - x) as u8, y as u8 + 1) {
            Some(cell) => cell,
            None => Cell::OFF,
        }
    }

    /// 全てのマスを返すイテレータ（表記順）
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Cell::NUM as u8).map(Cell)
    }
}

/// 隣接テーブル [Cell.index()][Direction.index()]（盤外番兵分を+1確保）
static NEIGHBORS: [[Cell; Direction::NUM]; Cell::NUM + 1] = build_neighbors();

const fn build_neighbors() -> [[Cell; Direction::NUM]; Cell::NUM + 1] {
    let mut table = [[Cell::OFF; Direction::NUM]; Cell::NUM + 1];
    let mut i = 0;
    while i < Cell::NUM {
        let cube = match Cell(i as u8).to_cube() {
            Some(cube) => cube,
            None => panic!("on-board cell without cube coordinate"),
        };
        let mut d = 0;
        while d < Direction::NUM {
            let unit = Direction::ALL[d].unit();
            let next = Cube {
                q: cube.q + unit.q,
                r: cube.r + unit.r,
                s: cube.s + unit.s,
            };
            table[i][d] = Cell::from_cube(next);
            d += 1;
        }
        i += 1;
    }
    table
}

/// `from` から `dir` 方向へ盤端までのマス列（`from` を含む）
///
/// `from` が `Cell::OFF` のときは空。
pub fn line_to_edge(from: Cell, dir: Direction) -> Line {
    let mut line = Line::new();
    let mut cell = from;
    while !cell.is_off() {
        line.push(cell);
        cell = cell.neighbor(dir);
    }
    line
}

/// `from` から `to` までの直線（両端を含む）とその方向
///
/// 2点が6軸のいずれかの上にない場合、同一点の場合、どちらかが `Cell::OFF` の場合は None。
pub fn line_from_to(from: Cell, to: Cell) -> Option<(Line, Direction)> {
    let (a, b) = (from.to_cube()?, to.to_cube()?);
    let dir = a.direction_to(b).ok()?;
    let mut line = Line::new();
    let mut cell = from;
    line.push(cell);
    while cell != to {
        cell = cell.neighbor(dir);
        line.push(cell);
    }
    Some((line, dir))
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.row(), self.digit()) {
            (Some(row), Some(digit)) => write!(f, "{}{}", ROW_CHARS[row as usize], digit),
            _ => f.write_str("OFF"),
        }
    }
}

/// マス表記の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell: {0:?}")]
pub struct ParseCellError(pub String);

impl FromStr for Cell {
    type Err = ParseCellError;

    /// "A1"〜"I9"（段の文字は大文字小文字を区別しない）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellError(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let row = bytes[0].to_ascii_uppercase().wrapping_sub(b'A');
        let digit = bytes[1].wrapping_sub(b'0');
        Cell::new(row, digit).ok_or_else(err)
    }
}
