//! TranspositionTable本体
//!
//! - Cluster: エントリのグループ
//! - TranspositionTable: テーブル本体
//! - probe/store操作

use super::entry::{TTData, TTEntry};
use super::{CLUSTER_SIZE, GENERATION_BITS, GENERATION_DELTA};

/// クラスター構造
/// 同じハッシュインデックスに対して複数のエントリを持つ
#[derive(Debug, Clone, Copy, Default)]
struct Cluster {
    entries: [TTEntry; CLUSTER_SIZE],
}

impl Cluster {
    const EMPTY: Cluster = Cluster {
        entries: [TTEntry::EMPTY; CLUSTER_SIZE],
    };
}

/// 置換表
///
/// 容量は作成時に固定し、満杯になったら置換価値の低いエントリから上書きする。
#[derive(Debug, Clone)]
pub struct TranspositionTable {
    /// クラスターの配列（長さは2のべき乗）
    clusters: Vec<Cluster>,
    /// 世代カウンター（下位3bitは使用しない）
    generation8: u8,
}

impl TranspositionTable {
    /// エントリ数を指定して作成（クラスター数は2のべき乗に切り上げる）
    pub fn new(entries: usize) -> Self {
        let cluster_count = entries.div_ceil(CLUSTER_SIZE).max(1).next_power_of_two();
        Self {
            clusters: vec![Cluster::EMPTY; cluster_count],
            generation8: 0,
        }
    }

    /// クラスター数
    #[inline]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// 格納できるエントリ数
    #[inline]
    pub fn capacity(&self) -> usize {
        self.clusters.len() * CLUSTER_SIZE
    }

    /// クリア
    pub fn clear(&mut self) {
        self.generation8 = 0;
        self.clusters.fill(Cluster::EMPTY);
    }

    /// 新しい探索を開始（世代を進める）
    pub fn new_search(&mut self) {
        self.generation8 = self.generation8.wrapping_add(GENERATION_DELTA);
    }

    /// 現在の世代を取得
    #[inline]
    pub fn generation(&self) -> u8 {
        self.generation8
    }

    /// 置換表を検索する
    ///
    /// 保存されている深さが `depth` 以上のときだけ返す。
    pub fn probe(&self, key: u64, depth: u8) -> Option<TTData> {
        self.get(key).filter(|data| data.depth >= depth)
    }

    /// 深さを問わずに検索する（最善手だけを使う場合など）
    pub fn get(&self, key: u64) -> Option<TTData> {
        self.cluster(key)
            .entries
            .iter()
            .find(|entry| entry.matches(key))
            .map(TTEntry::read)
    }

    /// 保存する
    ///
    /// 同じキーのエントリがあればそれを更新し、なければ
    /// 置換価値（depth - relative_age）が最小のエントリを上書きする。
    pub fn store(&mut self, key: u64, data: TTData) {
        let gen8 = self.generation8;
        let index = self.cluster_index(key);
        let entries = &mut self.clusters[index].entries;

        let slot = match entries.iter().position(|entry| entry.matches(key)) {
            Some(i) => i,
            None => {
                let mut replace = 0;
                let mut min_value = i32::MAX;
                for (i, entry) in entries.iter().enumerate() {
                    let value = entry.replace_value(gen8);
                    if value < min_value {
                        min_value = value;
                        replace = i;
                    }
                }
                replace
            }
        };
        entries[slot].save(key, data, gen8);
    }

    /// 置換表の使用率を1000分率で返す
    ///
    /// 先頭の最大1000クラスターを調べ、世代が `max_age` 以内のエントリを数える。
    pub fn hashfull(&self, max_age: u8) -> u32 {
        let max_age_internal = max_age << GENERATION_BITS;
        let gen8 = self.generation8;
        let sample_count = 1000.min(self.clusters.len());
        let count = self
            .clusters
            .iter()
            .take(sample_count)
            .flat_map(|cluster| cluster.entries.iter())
            .filter(|entry| entry.is_occupied() && entry.relative_age(gen8) <= max_age_internal)
            .count();
        (count * 1000 / (sample_count * CLUSTER_SIZE)) as u32
    }

    /// クラスターインデックスを計算
    #[inline]
    fn cluster_index(&self, key: u64) -> usize {
        // key * cluster_count / 2^64 でインデックスを計算
        ((key as u128 * self.clusters.len() as u128) >> 64) as usize
    }

    #[inline]
    fn cluster(&self, key: u64) -> &Cluster {
        &self.clusters[self.cluster_index(key)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tt::Bound;

    fn data(depth: u8, value: i32) -> TTData {
        TTData {
            best_move: None,
            value,
            depth,
            bound: Bound::Lower,
        }
    }

    #[test]
    fn test_tt_new() {
        let tt = TranspositionTable::new(1000);
        // 1000 / 3 = 334 → 512 クラスター
        assert_eq!(tt.cluster_count(), 512);
        assert_eq!(tt.capacity(), 512 * CLUSTER_SIZE);
        assert_eq!(tt.generation(), 0);
        assert_eq!(TranspositionTable::new(0).cluster_count(), 1);
    }

    #[test]
    fn test_tt_new_search() {
        let mut tt = TranspositionTable::new(64);
        tt.new_search();
        assert_eq!(tt.generation(), GENERATION_DELTA);
        tt.new_search();
        assert_eq!(tt.generation(), GENERATION_DELTA * 2);
        // u8 で wrap しても動作する
        for _ in 0..300 {
            tt.new_search();
        }
        tt.store(1, data(1, 1));
        assert!(tt.probe(1, 1).is_some());
    }

    #[test]
    fn test_tt_probe_depth() {
        let mut tt = TranspositionTable::new(64);
        let key = 0x1234_5678_9ABC_DEF0;
        assert!(tt.probe(key, 0).is_none());
        tt.store(key, data(5, 42));
        assert_eq!(tt.probe(key, 5).map(|d| d.value), Some(42));
        assert_eq!(tt.probe(key, 3).map(|d| d.value), Some(42));
        // 要求より浅い結果は返さない
        assert!(tt.probe(key, 6).is_none());
        assert!(tt.get(key).is_some());
    }

    #[test]
    fn test_tt_replacement_in_cluster() {
        // クラスター1つだけの表で、4つ目の局面は最も浅いエントリを置き換える
        let mut tt = TranspositionTable::new(1);
        tt.store(1, data(8, 1));
        tt.store(2, data(2, 2));
        tt.store(3, data(6, 3));
        tt.store(4, data(4, 4));
        assert!(tt.get(2).is_none());
        for key in [1, 3, 4] {
            assert!(tt.get(key).is_some(), "{key}");
        }

        // 古い世代のエントリは深くても置き換えられやすい
        tt.new_search();
        tt.new_search();
        tt.store(5, data(3, 5));
        assert!(tt.get(4).is_none());
        tt.store(6, data(1, 6));
        assert!(tt.get(3).is_none());
        assert!(tt.get(5).is_some());
    }

    #[test]
    fn test_tt_hashfull_and_clear() {
        let mut tt = TranspositionTable::new(3 * 4);
        assert_eq!(tt.hashfull(0), 0);
        for key in 0..64u64 {
            tt.store(key.wrapping_mul(0x9E37_79B9_7F4A_7C15), data(1, 0));
        }
        assert!(tt.hashfull(0) > 0);
        tt.clear();
        assert_eq!(tt.hashfull(0), 0);
        assert_eq!(tt.generation(), 0);
    }
}
