//! 探索エージェント

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::eval::Heuristic;
use crate::movegen::generate_legal;
use crate::position::Position;
use crate::types::{Color, Move, Value};

use super::{SearchStats, order_moves};

/// 探索の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 探索深さ（1以上）
    pub depth: u32,
    /// 直近に指した手を避ける履歴バッファの長さ
    pub history_len: usize,
    /// 同点の手を選ぶ乱数のシード（None なら毎回ランダム）
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 2,
            history_len: 4,
            seed: None,
        }
    }
}

/// 着手決定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Play(Move),
    /// 合法手がない
    Forfeit,
}

/// 固定深さの αβ 探索で手を選ぶエージェント
#[derive(Debug, Clone)]
pub struct SearchAgent {
    color: Color,
    heuristic: Heuristic,
    config: SearchConfig,
    history: VecDeque<Move>,
    rng: Xoshiro256PlusPlus,
    stats: SearchStats,
}

impl SearchAgent {
    pub fn new(color: Color, heuristic: Heuristic, config: SearchConfig) -> SearchAgent {
        let seed = config.seed.unwrap_or_else(rand::random);
        SearchAgent {
            color,
            heuristic,
            history: VecDeque::with_capacity(config.history_len + 1),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            config,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 直近に指した手（古い順）
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().copied()
    }

    /// 直前の着手決定の統計
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// 局面で指す手を決める
    ///
    /// 履歴バッファにある手は候補から外す（全ての手が外れる場合は外さない）。
    /// 最善値に並んだ手から一様に選び、履歴バッファに積む。
    pub fn choose(&mut self, pos: &Position) -> Decision {
        self.stats.reset();

        let mut moves = generate_legal(pos);
        if moves.is_empty() {
            log::debug!("{:?} has no legal moves", self.color);
            return Decision::Forfeit;
        }
        order_moves(pos, &mut moves);

        let fresh: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| !self.history.contains(mv))
            .collect();
        let candidates = if fresh.is_empty() { moves } else { fresh };

        let depth = self.config.depth.max(1);
        let mut searcher = Searcher {
            heuristic: &self.heuristic,
            perspective: self.color,
            stats: &mut self.stats,
        };

        let mut best = -Value::INFINITE;
        let mut ties: Vec<Move> = Vec::new();
        for mv in candidates {
            let mut next = pos.clone();
            next.do_move(mv);

            // 最善値と同点の手も正確な値が返るよう、下限は最善値の1つ下
            let alpha = if ties.is_empty() {
                -Value::INFINITE
            } else {
                best - Value::new(1)
            };
            let value = -searcher.negamax(&next, depth - 1, 1, -Value::INFINITE, -alpha);

            if value > best {
                best = value;
                ties.clear();
                ties.push(mv);
            } else if value == best {
                ties.push(mv);
            }
        }

        self.stats.ties = ties.len();
        let chosen = ties[self.rng.random_range(0..ties.len())];

        self.history.push_back(chosen);
        while self.history.len() > self.config.history_len {
            self.history.pop_front();
        }

        log::debug!(
            "{:?} chose {} (score {}): {}",
            self.color,
            chosen,
            best,
            self.stats.format_report()
        );
        Decision::Play(chosen)
    }
}

/// 1回の着手決定中の探索状態
struct Searcher<'a> {
    heuristic: &'a Heuristic,
    perspective: Color,
    stats: &'a mut SearchStats,
}

impl Searcher<'_> {
    /// 手番側から見た評価値（fail-soft）
    fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        ply: i32,
        mut alpha: Value,
        beta: Value,
    ) -> Value {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            let eval = self.heuristic.evaluate(pos, self.perspective);
            let score = Value::from_eval(eval);
            if score.raw() as i64 != eval {
                // 上限を超えた評価値同士は区別できず同点になる
                self.stats.saturated += 1;
                log::debug!("static eval {} clamped to {}", eval, score);
            }
            return if pos.side_to_move() == self.perspective {
                score
            } else {
                -score
            };
        }

        let mut moves = generate_legal(pos);
        if moves.is_empty() {
            return Value::mated_in(ply);
        }
        order_moves(pos, &mut moves);

        let mut best = -Value::INFINITE;
        for mv in moves {
            let mut next = pos.clone();
            next.do_move(mv);
            let value = -self.negamax(&next, depth - 1, ply + 1, -beta, -alpha);

            if value > best {
                best = value;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
