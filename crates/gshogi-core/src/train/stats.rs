//! 評価パスの統計

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::types::Move;

/// 1回の `evaluate_organism` の統計
///
/// 局面ごとに独立に集計し、加算で合成する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationStats {
    pub eval_time_ms: u64,
    pub total_positions: u64,
    pub total_correct: u64,
    /// 特徴量キャッシュに当たった局面数
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// 棋士の手が成りだった局面数
    pub upgrade_total: u64,
    pub upgrade_correct: u64,
    /// 棋士の手が駒打ちだった局面数
    pub drop_total: u64,
    pub drop_correct: u64,
    /// 駒打ちを逃し、同じ升への駒移動を選んだ
    pub missed_drop_same_square: u64,
    /// 駒打ちを逃し、別の升への駒移動を選んだ
    pub missed_drop_other_square: u64,
    /// 成りを逃し、同じ升への不成を選んだ
    pub missed_upgrade_same_square: u64,
    /// 成りを逃し、別の升への不成を選んだ
    pub missed_upgrade_other_square: u64,
    /// 合法手表に載っていない局面数
    pub missing_legal_moves: u64,
}

impl EvaluationStats {
    /// 1局面分の結果を記録する
    pub fn record(&mut self, expert: Move, chosen: Option<Move>) {
        self.total_positions += 1;
        if expert.is_promotion() {
            self.upgrade_total += 1;
        }
        if expert.is_drop() {
            self.drop_total += 1;
        }

        let Some(chosen) = chosen else {
            self.missing_legal_moves += 1;
            return;
        };

        if chosen == expert {
            self.total_correct += 1;
            if expert.is_promotion() {
                self.upgrade_correct += 1;
            }
            if expert.is_drop() {
                self.drop_correct += 1;
            }
            return;
        }

        if chosen.is_drop() || chosen.is_promotion() {
            return;
        }
        let same_square = chosen.to() == expert.to();
        if expert.is_drop() {
            if same_square {
                self.missed_drop_same_square += 1;
            } else {
                self.missed_drop_other_square += 1;
            }
        } else if expert.is_promotion() {
            if same_square {
                self.missed_upgrade_same_square += 1;
            } else {
                self.missed_upgrade_other_square += 1;
            }
        }
    }

    /// 名前 → 値の表（最適化器に渡す形）
    pub fn as_map(&self) -> BTreeMap<&'static str, u64> {
        BTreeMap::from([
            ("eval_time_ms", self.eval_time_ms),
            ("total_positions", self.total_positions),
            ("total_correct", self.total_correct),
            ("cache_hits", self.cache_hits),
            ("cache_misses", self.cache_misses),
            ("upgrade_total", self.upgrade_total),
            ("upgrade_correct", self.upgrade_correct),
            ("drop_total", self.drop_total),
            ("drop_correct", self.drop_correct),
            ("missed_drop_same_square", self.missed_drop_same_square),
            ("missed_drop_other_square", self.missed_drop_other_square),
            ("missed_upgrade_same_square", self.missed_upgrade_same_square),
            ("missed_upgrade_other_square", self.missed_upgrade_other_square),
            ("missing_legal_moves", self.missing_legal_moves),
        ])
    }

    /// 1行の要約
    pub fn format_report(&self) -> String {
        format!(
            "correct={}/{} drops={}/{} upgrades={}/{} cache_hits={} cache_misses={} time={}ms",
            self.total_correct,
            self.total_positions,
            self.drop_correct,
            self.drop_total,
            self.upgrade_correct,
            self.upgrade_total,
            self.cache_hits,
            self.cache_misses,
            self.eval_time_ms
        )
    }
}

impl AddAssign for EvaluationStats {
    fn add_assign(&mut self, rhs: EvaluationStats) {
        self.eval_time_ms += rhs.eval_time_ms;
        self.total_positions += rhs.total_positions;
        self.total_correct += rhs.total_correct;
        self.cache_hits += rhs.cache_hits;
        self.cache_misses += rhs.cache_misses;
        self.upgrade_total += rhs.upgrade_total;
        self.upgrade_correct += rhs.upgrade_correct;
        self.drop_total += rhs.drop_total;
        self.drop_correct += rhs.drop_correct;
        self.missed_drop_same_square += rhs.missed_drop_same_square;
        self.missed_drop_other_square += rhs.missed_drop_other_square;
        self.missed_upgrade_same_square += rhs.missed_upgrade_same_square;
        self.missed_upgrade_other_square += rhs.missed_upgrade_other_square;
        self.missing_legal_moves += rhs.missing_legal_moves;
    }
}

impl Add for EvaluationStats {
    type Output = EvaluationStats;

    fn add(mut self, rhs: EvaluationStats) -> EvaluationStats {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sq;
    use crate::types::PieceKind;

    #[test]
    fn test_record_shapes() {
        let drop = Move::drop(PieceKind::Gold, sq(5, 2));
        let onto_same = Move::normal(sq(6, 3), sq(5, 2), false);
        let elsewhere = Move::normal(sq(6, 3), sq(6, 2), false);
        let promote = Move::normal(sq(2, 4), sq(2, 3), true);
        let no_promote = Move::normal(sq(2, 4), sq(2, 3), false);

        let mut stats = EvaluationStats::default();
        stats.record(drop, Some(drop));
        stats.record(drop, Some(onto_same));
        stats.record(drop, Some(elsewhere));
        stats.record(promote, Some(no_promote));
        stats.record(promote, Some(elsewhere));
        stats.record(promote, None);

        assert_eq!(stats.total_positions, 6);
        assert_eq!(stats.total_correct, 1);
        assert_eq!((stats.drop_total, stats.drop_correct), (3, 1));
        assert_eq!((stats.upgrade_total, stats.upgrade_correct), (3, 0));
        assert_eq!(stats.missed_drop_same_square, 1);
        assert_eq!(stats.missed_drop_other_square, 1);
        assert_eq!(stats.missed_upgrade_same_square, 1);
        assert_eq!(stats.missed_upgrade_other_square, 1);
        assert_eq!(stats.missing_legal_moves, 1);
    }

    #[test]
    fn test_sum_matches_map() {
        let mut a = EvaluationStats::default();
        a.record(Move::drop(PieceKind::Pawn, sq(5, 5)), None);
        let b = EvaluationStats {
            cache_hits: 3,
            ..EvaluationStats::default()
        };
        let map = (a + b).as_map();
        assert_eq!(map["total_positions"], 1);
        assert_eq!(map["missing_legal_moves"], 1);
        assert_eq!(map["cache_hits"], 3);
        assert_eq!(map.len(), 14);
    }
}
