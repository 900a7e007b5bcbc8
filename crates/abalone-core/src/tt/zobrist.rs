//! Zobristハッシュ
//!
//! (手番, 盤配列の段, 列) ごとに1つの乱数を持ち、局面のハッシュは
//! 玉のあるマスの乱数の XOR とする。同じ局面でも別のテーブルから作ったハッシュは一致しないので、
//! 探索中は1つの `ZobristKeys` を使い回す。

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::movegen::MoveRecord;
use crate::position::BoardState;
use crate::types::{Cell, Player, ROWS};

/// Zobristハッシュの乱数テーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// [Player.index()][x][y]（盤配列インデックス）
    psq: [[[u64; ROWS]; ROWS]; Player::NUM],
}

impl ZobristKeys {
    /// シードを指定して生成（同じシードなら同じテーブル）
    pub fn with_seed(seed: u64) -> ZobristKeys {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut psq = [[[0u64; ROWS]; ROWS]; Player::NUM];
        for value in psq.iter_mut().flatten().flatten() {
            *value = rng.next_u64();
        }
        ZobristKeys { psq }
    }

    /// スレッドローカルの乱数生成器からシードを取って生成
    pub fn new() -> ZobristKeys {
        let seed: u64 = rand::rng().random();
        log::debug!("zobrist seed: {seed:#018x}");
        ZobristKeys::with_seed(seed)
    }

    /// (手番, マス) の乱数（`Cell::OFF` は 0）
    #[inline]
    pub fn key(&self, player: Player, cell: Cell) -> u64 {
        match cell.to_array_index() {
            Some((x, y)) => self.psq[player.index()][x][y],
            None => 0,
        }
    }

    /// 局面のハッシュ
    pub fn hash(&self, board: &BoardState) -> u64 {
        let mut key = 0;
        for player in Player::ALL {
            for cell in board.pieces(player) {
                key ^= self.key(player, cell);
            }
        }
        key
    }

    /// 1マスの玉の有無を反転したハッシュ
    #[inline]
    pub fn toggle(&self, key: u64, player: Player, cell: Cell) -> u64 {
        key ^ self.key(player, cell)
    }

    /// 実行した指し手の記録からハッシュを差分更新する
    ///
    /// `undo_move` 後のハッシュも同じ記録で戻せる（XOR は自己逆）。
    pub fn update(&self, mut key: u64, record: &MoveRecord) -> u64 {
        for change in &record.changes {
            if let Some(owner) = change.before.owner() {
                key = self.toggle(key, owner, change.cell);
            }
            if let Some(owner) = change.after.owner() {
                key = self.toggle(key, owner, change.cell);
            }
        }
        key
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::legal_moves;
    use crate::position::Layout;

    #[test]
    fn test_keys_unique() {
        let keys = ZobristKeys::with_seed(1);
        let mut all: Vec<u64> = Player::ALL
            .into_iter()
            .flat_map(|p| Cell::all().map(move |c| (p, c)))
            .map(|(p, c)| keys.key(p, c))
            .collect();
        assert!(all.iter().all(|&k| k != 0));
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), Player::NUM * Cell::NUM);
        assert_eq!(keys.key(Player::Black, Cell::OFF), 0);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(ZobristKeys::with_seed(42), ZobristKeys::with_seed(42));
        assert_ne!(ZobristKeys::with_seed(42), ZobristKeys::with_seed(43));
    }

    #[test]
    fn test_hash_empty_and_layouts() {
        let keys = ZobristKeys::with_seed(3);
        assert_eq!(keys.hash(&BoardState::empty(Player::Black)), 0);
        let standard = keys.hash(&BoardState::default());
        let daisy = keys.hash(&BoardState::from_layout(Layout::BelgianDaisy, Player::Black));
        assert_ne!(standard, daisy);
    }

    #[test]
    fn test_incremental_update() {
        let keys = ZobristKeys::with_seed(5);
        let mut board = BoardState::from_layout(Layout::GermanDaisy, Player::Black);
        let root = keys.hash(&board);
        for mv in legal_moves(&board) {
            let record = board.do_move(mv).unwrap();
            let key = keys.update(root, &record);
            assert_eq!(key, keys.hash(&board), "{mv}");
            board.undo_move(&record);
            assert_eq!(keys.update(key, &record), root);
        }
    }
}
