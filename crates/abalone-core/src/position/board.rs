//! 局面本体（BoardState）

use crate::movegen::{self, IllegalMove, MoveRecord};
use crate::types::{Cell, CellSet, Marble, Move, Player, Score, ROWS};

use super::Layout;

/// 局面
///
/// マスごとの内容（密な表現）と、手番ごとの玉の位置の集合（疎な索引）を
/// 同時に持つ。両者は `set` を通じてのみ更新され、常に一致している。
///
/// `Clone` は盤全体の複製で、並列探索のワーカーごとに局面を分ける境界になる。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    /// マスの内容 [Cell.index()]
    cells: [Marble; Cell::NUM],
    /// 手番ごとの玉の位置 [Player.index()]
    occupancy: [CellSet; Player::NUM],
    /// 手番
    side_to_move: Player,
}

impl BoardState {
    /// 玉のない盤
    pub fn empty(side_to_move: Player) -> BoardState {
        BoardState {
            cells: [Marble::Empty; Cell::NUM],
            occupancy: [CellSet::EMPTY; Player::NUM],
            side_to_move,
        }
    }

    /// 初期配置から作成
    pub fn from_layout(layout: Layout, first: Player) -> BoardState {
        let mut board = BoardState::empty(first);
        for player in Player::ALL {
            for &cell in layout.cells(player) {
                board.set(cell, Marble::of(player));
            }
        }
        board
    }

    /// マスの内容
    ///
    /// # Panics
    /// `cell` が `Cell::OFF` の場合
    #[inline]
    pub fn get(&self, cell: Cell) -> Marble {
        assert!(!cell.is_off(), "get on the off-board cell");
        self.cells[cell.index()]
    }

    /// マスの内容を置き換え、以前の内容を返す
    ///
    /// # Panics
    /// `cell` が `Cell::OFF` の場合
    pub fn set(&mut self, cell: Cell, marble: Marble) -> Marble {
        assert!(!cell.is_off(), "set on the off-board cell");
        let prev = std::mem::replace(&mut self.cells[cell.index()], marble);
        if let Some(owner) = prev.owner() {
            self.occupancy[owner.index()].remove(cell);
        }
        if let Some(owner) = marble.owner() {
            self.occupancy[owner.index()].insert(cell);
        }
        prev
    }

    /// `player` の玉があるマス
    #[inline]
    pub fn pieces(&self, player: Player) -> CellSet {
        self.occupancy[player.index()]
    }

    /// 玉があるマス（両手番）
    #[inline]
    pub fn occupied(&self) -> CellSet {
        self.occupancy[0] | self.occupancy[1]
    }

    /// 密な表現と疎な索引が一致しているか
    pub fn is_consistent(&self) -> bool {
        if !(self.occupancy[0] & self.occupancy[1]).is_empty() {
            return false;
        }
        Cell::all().all(|cell| {
            let marble = self.cells[cell.index()];
            Player::ALL
                .into_iter()
                .all(|p| self.occupancy[p.index()].contains(cell) == (marble.owner() == Some(p)))
        })
    }

    /// 手番ごとの玉の数
    #[inline]
    pub fn score(&self) -> Score {
        Score::new(self.pieces(Player::Black).len() as u8, self.pieces(Player::White).len() as u8)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.score().is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.score().winner()
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    #[inline]
    pub fn switch_side(&mut self) {
        self.side_to_move = !self.side_to_move;
    }

    /// 手番側で指し手を実行し、手番を交代する
    ///
    /// 不正な手なら局面は変わらない。
    pub fn do_move(&mut self, mv: Move) -> Result<MoveRecord, IllegalMove> {
        let record = movegen::execute(self, self.side_to_move, mv)?;
        self.switch_side();

        #[cfg(feature = "consistency-checks")]
        debug_assert!(self.is_consistent(), "inconsistent board after {mv}");

        Ok(record)
    }

    /// `do_move` を巻き戻す（直前に実行した手の記録を渡す）
    pub fn undo_move(&mut self, record: &MoveRecord) {
        for change in record.changes.iter().rev() {
            self.set(change.cell, change.before);
        }
        self.side_to_move = record.player;
    }
}

impl Default for BoardState {
    /// 標準配置・黒番
    fn default() -> Self {
        BoardState::from_layout(Layout::Standard, Player::Black)
    }
}

impl std::fmt::Display for BoardState {
    /// I段を上にした六角形の盤面図（黒 `●`, 白 `○`, 空 `·`）
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const LETTERS: &[u8; ROWS] = b"ABCDEFGHI";
        for x in 0..ROWS {
            let row = ROWS - 1 - x;
            let indent = (x as isize - 4).unsigned_abs();
            write!(f, "{:indent$}{} ", "", LETTERS[row] as char)?;
            for y in 0..Cell::array_row_len(x) {
                let symbol = match self.get(Cell::from_array_index(x, y)) {
                    Marble::Empty => '·',
                    Marble::Black => '●',
                    Marble::White => '○',
                };
                if y > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            // 右下がりの斜め列の番号（6〜9）
            if x > 4 {
                write!(f, " {}", 14 - x)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "       1 2 3 4 5")?;
        write!(f, "{} to move, {}", self.side_to_move, self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = BoardState::default();
        assert_eq!(board.side_to_move(), Player::Black);
        assert_eq!(board.score(), Score::INITIAL);
        assert_eq!(board.get(cell("A1")), Marble::Black);
        assert_eq!(board.get(cell("C5")), Marble::Black);
        assert_eq!(board.get(cell("G7")), Marble::White);
        assert_eq!(board.get(cell("E5")), Marble::Empty);
        assert!(board.is_consistent());
        assert!(!board.is_over());
    }

    #[test]
    fn test_set_keeps_index() {
        let mut board = BoardState::empty(Player::White);
        assert_eq!(board.set(cell("E5"), Marble::Black), Marble::Empty);
        assert!(board.pieces(Player::Black).contains(cell("E5")));
        // 上書きすると以前の持ち主の索引から外れる
        assert_eq!(board.set(cell("E5"), Marble::White), Marble::Black);
        assert!(!board.pieces(Player::Black).contains(cell("E5")));
        assert!(board.pieces(Player::White).contains(cell("E5")));
        board.set(cell("E5"), Marble::Empty);
        assert!(board.occupied().is_empty());
        assert!(board.is_consistent());
    }

    #[test]
    #[should_panic]
    fn test_get_off_panics() {
        let board = BoardState::default();
        board.get(Cell::OFF);
    }

    #[test]
    #[should_panic]
    fn test_set_off_panics() {
        let mut board = BoardState::default();
        board.set(Cell::OFF, Marble::Black);
    }

    #[test]
    fn test_switch_side() {
        let mut board = BoardState::default();
        board.switch_side();
        assert_eq!(board.side_to_move(), Player::White);
        board.set_side_to_move(Player::Black);
        assert_eq!(board.side_to_move(), Player::Black);
    }

    #[test]
    fn test_do_undo_move() {
        let mut board = BoardState::default();
        let before = board.clone();
        let record = board.do_move("A1NE".parse().unwrap()).unwrap();
        assert_eq!(board.side_to_move(), Player::White);
        assert_ne!(board, before);
        board.undo_move(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_move_leaves_board() {
        let mut board = BoardState::default();
        let before = board.clone();
        assert!(board.do_move("A1SE".parse().unwrap()).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_display() {
        let text = BoardState::default().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    I ○ ○ ○ ○ ○");
        assert_eq!(lines[8], "    A ● ● ● ● ● 6");
        assert!(lines[10].starts_with("black to move"));
    }
}
