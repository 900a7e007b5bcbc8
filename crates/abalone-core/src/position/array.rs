//! 9×9 密配列との相互変換
//!
//! ```text
//!    0 1 2 3 4 5 6 7 8
//! 0          ○ ○ ○ ○ ○    I
//! 1        ○ ○ ○ ○ ○ ○    H
//! 2      · · · ○ ○ ○ ·    G
//! 3    · · · · · · · ·    F
//! 4  · · · · · · · · ·    E
//! 5  · · · · · · · ·      D
//! 6  · · ● ● ● · ·        C
//! 7  ● ● ● ● ● ●          B
//! 8  ● ● ● ● ●            A
//! ```
//!
//! 値は黒 = +1、白 = -1、空と使われない隅 = 0。

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Marble, Player, ROWS};

use super::BoardState;

/// 9×9 密配列
pub type BoardArray = [[i8; ROWS]; ROWS];

/// 密配列からの変換エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardArrayError {
    /// -1, 0, +1 以外の値
    #[error("invalid value {value} at ({x}, {y})")]
    InvalidValue { x: usize, y: usize, value: i8 },
    /// 盤外の隅に玉がある
    #[error("marble on unplayable cell ({x}, {y})")]
    UnplayableCell { x: usize, y: usize },
}

impl BoardState {
    /// 密配列に変換（黒 = +1）
    pub fn to_array(&self) -> BoardArray {
        let mut array = [[0; ROWS]; ROWS];
        for cell in self.occupied() {
            if let Some((x, y)) = cell.to_dense_index() {
                array[x][y] = self.get(cell).to_i8();
            }
        }
        array
    }

    /// 手番側を +1 とした密配列
    pub fn canonical_array(&self) -> BoardArray {
        let mut array = self.to_array();
        let sign = self.side_to_move().sign();
        if sign != 1 {
            for value in array.iter_mut().flatten() {
                *value *= sign;
            }
        }
        array
    }

    /// 密配列から局面を作成（黒 = +1）
    pub fn from_array(array: &BoardArray, side_to_move: Player) -> Result<BoardState, BoardArrayError> {
        let mut board = BoardState::empty(side_to_move);
        for (x, row) in array.iter().enumerate() {
            for (y, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let player =
                    Player::from_sign(value).ok_or(BoardArrayError::InvalidValue { x, y, value })?;
                let cell = Cell::from_dense_index(x, y);
                if cell.is_off() {
                    return Err(BoardArrayError::UnplayableCell { x, y });
                }
                board.set(cell, Marble::of(player));
            }
        }
        Ok(board)
    }
}

/// ファイル入出力用の局面表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStateJson {
    pub board: BoardArray,
    pub to_move: Player,
}

impl From<&BoardState> for BoardStateJson {
    fn from(board: &BoardState) -> Self {
        BoardStateJson {
            board: board.to_array(),
            to_move: board.side_to_move(),
        }
    }
}

impl TryFrom<BoardStateJson> for BoardState {
    type Error = BoardArrayError;

    fn try_from(json: BoardStateJson) -> Result<Self, Self::Error> {
        BoardState::from_array(&json.board, json.to_move)
    }
}
