//! 盤上の玉の数と勝敗判定

use serde::{Deserialize, Serialize};

use super::Player;

/// 盤上に残っている玉の数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// 初期配置での玉の数
    pub const INITIAL_MARBLES: u8 = 14;

    /// この数まで減ったら負け（6個押し出された）
    pub const LOSING_COUNT: u8 = 8;

    /// 初期状態
    pub const INITIAL: Score = Score::new(Score::INITIAL_MARBLES, Score::INITIAL_MARBLES);

    #[inline]
    pub const fn new(black: u8, white: u8) -> Score {
        Score { black, white }
    }

    #[inline]
    pub const fn get(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// 押し出された玉の数（初期配置が14個の場合）
    #[inline]
    pub const fn captured(self, player: Player) -> u8 {
        Score::INITIAL_MARBLES.saturating_sub(self.get(player))
    }

    /// どちらかが `LOSING_COUNT` 以下なら終局
    #[inline]
    pub const fn is_over(self) -> bool {
        self.black <= Score::LOSING_COUNT || self.white <= Score::LOSING_COUNT
    }

    /// 勝者。相手が `LOSING_COUNT` 以下になった側（黒の勝ちを先に判定）
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        if self.white <= Score::LOSING_COUNT {
            Some(Player::Black)
        } else if self.black <= Score::LOSING_COUNT {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::INITIAL
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "black {} - white {}", self.black, self.white)
    }
}
