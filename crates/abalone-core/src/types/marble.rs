//! マスの内容（Marble）

use super::Player;

/// マスの内容（空/黒/白）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Marble {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Marble {
    /// 手番の玉
    #[inline]
    pub const fn of(player: Player) -> Marble {
        match player {
            Player::Black => Marble::Black,
            Player::White => Marble::White,
        }
    }

    /// 玉の持ち主（空なら None）
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Marble::Empty => None,
            Marble::Black => Some(Player::Black),
            Marble::White => Some(Player::White),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marble::Empty)
    }

    /// 密配列表現での値（空 = 0、黒 = +1、白 = -1）
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self.owner() {
            Some(player) => player.sign(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marble_owner() {
        assert_eq!(Marble::Empty.owner(), None);
        assert_eq!(Marble::of(Player::Black).owner(), Some(Player::Black));
        assert_eq!(Marble::of(Player::White).owner(), Some(Player::White));
    }

    #[test]
    fn test_marble_to_i8() {
        assert_eq!(Marble::Empty.to_i8(), 0);
        assert_eq!(Marble::Black.to_i8(), 1);
        assert_eq!(Marble::White.to_i8(), -1);
    }
}
