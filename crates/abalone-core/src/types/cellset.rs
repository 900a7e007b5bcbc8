//! マスの集合（CellSet）
//!
//! 61マスを u64 のビットで表す。手番ごとの玉の位置の索引として使う。

use super::Cell;
use super::cell::{ROW_LEN, ROW_START, ROWS};

/// マスの集合（ビット i が `Cell` の通し番号 i に対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CellSet(u64);

impl CellSet {
    /// 空集合
    pub const EMPTY: CellSet = CellSet(0);

    /// 盤上の全マス
    pub const ALL: CellSet = CellSet((1u64 << Cell::NUM) - 1);

    #[inline]
    pub const fn from_bits(bits: u64) -> CellSet {
        CellSet(bits & CellSet::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 要素数
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        !cell.is_off() && self.0 & (1u64 << cell.index()) != 0
    }

    /// `Cell::OFF` は無視する
    #[inline]
    pub fn insert(&mut self, cell: Cell) {
        if !cell.is_off() {
            self.0 |= 1u64 << cell.index();
        }
    }

    #[inline]
    pub fn remove(&mut self, cell: Cell) {
        if !cell.is_off() {
            self.0 &= !(1u64 << cell.index());
        }
    }

    /// 段（A = 0 … I = 8）の占有列を、左端を bit0 としたビット列で返す
    #[inline]
    pub const fn row_bits(self, row: u8) -> u16 {
        let row = row as usize;
        if row >= ROWS {
            return 0;
        }
        let mask = (1u64 << ROW_LEN[row]) - 1;
        ((self.0 >> ROW_START[row]) & mask) as u16
    }

    /// 表記順で n 番目（0始まり）の要素
    pub fn nth(self, n: usize) -> Option<Cell> {
        let mut bits = self.0;
        for _ in 0..n {
            if bits == 0 {
                return None;
            }
            bits &= bits - 1;
        }
        if bits == 0 {
            None
        } else {
            Cell::from_index(bits.trailing_zeros() as usize)
        }
    }

    /// 表記順に要素を返すイテレータ
    #[inline]
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

impl std::ops::BitOr for CellSet {
    type Output = CellSet;

    #[inline]
    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for CellSet {
    type Output = CellSet;

    #[inline]
    fn bitand(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 & rhs.0)
    }
}

/// CellSet のイテレータ（最下位ビットから取り出す）
#[derive(Debug, Clone)]
pub struct CellSetIter(u64);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Cell::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_remove() {
        let mut set = CellSet::EMPTY;
        set.insert(cell("A1"));
        set.insert(cell("I9"));
        set.insert(Cell::OFF);
        assert_eq!(set.len(), 2);
        assert!(set.contains(cell("I9")));
        assert!(!set.contains(Cell::OFF));
        set.remove(cell("A1"));
        assert!(!set.contains(cell("A1")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_in_notation_order() {
        let set: CellSet = ["E5", "A2", "C3"].iter().map(|s| cell(s)).collect();
        let cells: Vec<Cell> = set.iter().collect();
        assert_eq!(cells, vec![cell("A2"), cell("C3"), cell("E5")]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_nth() {
        let set: CellSet = ["B1", "B2", "H8"].iter().map(|s| cell(s)).collect();
        assert_eq!(set.nth(0), Some(cell("B1")));
        assert_eq!(set.nth(2), Some(cell("H8")));
        assert_eq!(set.nth(3), None);
        assert_eq!(CellSet::EMPTY.nth(0), None);
    }

    #[test]
    fn test_row_bits() {
        let set: CellSet = ["C3", "C5", "D1", "I9"].iter().map(|s| cell(s)).collect();
        // C段は C1 が bit0
        assert_eq!(set.row_bits(2), 0b10100);
        assert_eq!(set.row_bits(3), 0b1);
        // I段は I5 が bit0
        assert_eq!(set.row_bits(8), 0b10000);
        assert_eq!(set.row_bits(0), 0);
        assert_eq!(set.row_bits(9), 0);
    }

    #[test]
    fn test_all() {
        assert_eq!(CellSet::ALL.len(), Cell::NUM);
        assert!(Cell::all().all(|c| CellSet::ALL.contains(c)));
    }
}
