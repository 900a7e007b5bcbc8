//! 手番（Player）

use serde::{Deserialize, Serialize};

/// 手番（黒/白）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 密配列表現での符号（黒 = +1、白 = -1）
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// 密配列表現の符号から手番に変換
    #[inline]
    pub const fn from_sign(sign: i8) -> Option<Player> {
        match sign {
            1 => Some(Player::Black),
            -1 => Some(Player::White),
            _ => None,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}
