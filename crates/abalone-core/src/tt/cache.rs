//! 探索用キャッシュ（置換表・評価値キャッシュ・子局面の指し手キャッシュ）

use serde::Deserialize;

use super::entry::{Bound, TTData};
use super::table::TranspositionTable;
use crate::movegen::MoveList;
use crate::types::Move;

/// キャッシュの大きさ（エントリ数、2のべき乗に切り上げる）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub tt_entries: usize,
    pub heuristic_entries: usize,
    pub children_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tt_entries: 1 << 18,
            heuristic_entries: 1 << 16,
            children_entries: 1 << 12,
        }
    }
}

/// キーの下位ビットで引く直接マップ表（衝突したら常に上書き）
#[derive(Debug, Clone)]
pub struct SlotTable<V> {
    slots: Vec<Option<(u64, V)>>,
    mask: usize,
}

impl<V> SlotTable<V> {
    pub fn new(entries: usize) -> Self {
        let len = entries.max(1).next_power_of_two();
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            mask: len - 1,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    /// キー全体が一致したときだけ返す
    pub fn get(&self, key: u64) -> Option<&V> {
        match &self.slots[self.index(key)] {
            Some((stored, value)) if *stored == key => Some(value),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: u64, value: V) {
        let index = self.index(key);
        self.slots[index] = Some((key, value));
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// 使用率（1000分率、先頭の最大1000スロットから推定）
    pub fn hashfull(&self) -> u32 {
        let sample = 1000.min(self.slots.len());
        let used = self.slots.iter().take(sample).filter(|slot| slot.is_some()).count();
        (used * 1000 / sample) as u32
    }
}

/// 外部の探索が使うキャッシュ一式
///
/// キーは `ZobristKeys::hash` の値。異なる局面のハッシュ衝突は検出しない。
/// 内部で同期しないので、並列探索ではワーカーごとに持つか外側でロックする。
#[derive(Debug, Clone)]
pub struct PositionCache {
    tt: TranspositionTable,
    heuristics: SlotTable<i32>,
    children: SlotTable<MoveList>,
}

impl PositionCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Self {
            tt: TranspositionTable::new(config.tt_entries),
            heuristics: SlotTable::new(config.heuristic_entries),
            children: SlotTable::new(config.children_entries),
        };
        log::debug!(
            "position cache: tt {} entries, heuristic {} slots, children {} slots",
            cache.tt.capacity(),
            cache.heuristics.capacity(),
            cache.children.capacity()
        );
        cache
    }

    /// 置換表（保存されている深さが `depth` 以上のときだけ返す）
    #[inline]
    pub fn probe(&self, key: u64, depth: u8) -> Option<TTData> {
        self.tt.probe(key, depth)
    }

    /// 置換表に保存する
    pub fn store(&mut self, key: u64, best_move: Option<Move>, bound: Bound, value: i32, depth: u8) {
        self.tt.store(
            key,
            TTData {
                best_move,
                value,
                depth,
                bound,
            },
        );
    }

    /// 深さを問わない最善手の参照
    #[inline]
    pub fn best_move(&self, key: u64) -> Option<Move> {
        self.tt.get(key).and_then(|data| data.best_move)
    }

    #[inline]
    pub fn heuristic(&self, key: u64) -> Option<i32> {
        self.heuristics.get(key).copied()
    }

    #[inline]
    pub fn store_heuristic(&mut self, key: u64, value: i32) {
        self.heuristics.insert(key, value);
    }

    #[inline]
    pub fn children(&self, key: u64) -> Option<&MoveList> {
        self.children.get(key)
    }

    #[inline]
    pub fn store_children(&mut self, key: u64, moves: MoveList) {
        self.children.insert(key, moves);
    }

    /// 新しい探索を開始（置換表の世代を進める）
    pub fn new_search(&mut self) {
        self.tt.new_search();
    }

    pub fn clear(&mut self) {
        self.tt.clear();
        self.heuristics.clear();
        self.children.clear();
    }

    /// 置換表の使用率（1000分率、現在の世代のみ）
    pub fn hashfull(&self) -> u32 {
        self.tt.hashfull(0)
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }
}

impl Default for PositionCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::legal_moves;
    use crate::position::BoardState;
    use crate::tt::ZobristKeys;

    fn small() -> CacheConfig {
        CacheConfig {
            tt_entries: 64,
            heuristic_entries: 8,
            children_entries: 4,
        }
    }

    #[test]
    fn test_config_deserialize() {
        let config: CacheConfig = serde_json::from_str(r#"{"tt_entries": 1024}"#).unwrap();
        assert_eq!(config.tt_entries, 1024);
        assert_eq!(config.heuristic_entries, CacheConfig::default().heuristic_entries);
    }

    #[test]
    fn test_slot_table() {
        let mut table = SlotTable::new(5);
        assert_eq!(table.capacity(), 8);
        table.insert(3, "a");
        assert_eq!(table.get(3), Some(&"a"));
        // 同じスロットの別キーでは引けず、書き込むと置き換わる
        assert_eq!(table.get(11), None);
        table.insert(11, "b");
        assert_eq!(table.get(3), None);
        assert_eq!(table.get(11), Some(&"b"));
        table.clear();
        assert_eq!(table.get(11), None);
        assert_eq!(table.hashfull(), 0);
    }

    #[test]
    fn test_position_cache() {
        let keys = ZobristKeys::with_seed(11);
        let board = BoardState::default();
        let key = keys.hash(&board);
        let mut cache = PositionCache::new(&small());

        assert!(cache.probe(key, 0).is_none());
        let best = legal_moves(&board).as_slice().first().copied();
        cache.store(key, best, Bound::Exact, 10, 4);
        assert_eq!(cache.probe(key, 4).map(|d| d.value), Some(10));
        assert!(cache.probe(key, 5).is_none());
        assert_eq!(cache.best_move(key), best);
        assert!(cache.hashfull() > 0);

        cache.store_heuristic(key, -3);
        assert_eq!(cache.heuristic(key), Some(-3));

        cache.store_children(key, legal_moves(&board));
        assert_eq!(cache.children(key).map(MoveList::len), Some(44));

        cache.clear();
        assert!(cache.probe(key, 0).is_none());
        assert!(cache.heuristic(key).is_none());
        assert!(cache.children(key).is_none());
    }
}
