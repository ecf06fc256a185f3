//! 重みベクトルの適応度評価

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::eval::WeightedEvaluator;
use crate::features::{FeatureConfig, FeatureExtractor, FeatureSet, RawFeatures};
use crate::types::Move;

use super::data::decode_samples;
use super::{EvalMode, EvaluationStats, FeatureCache, HarnessError, LegalMoveTable, Sample, TrainingData};

/// ハーネスの設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub mode: EvalMode,
    /// 評価する局面数（None ならモードの全局面）
    pub num_eval: Option<usize>,
    /// パスごとに統計を info ログに出す
    pub log_stats: bool,
}

/// 棋譜との一致数で重みベクトルを評価する
///
/// 特徴量キャッシュはモードの切り替えで消す。キャッシュを満たしていない局面を
/// 含むパスは逐次実行してキャッシュを埋め、以降のパスはキャッシュを読むだけ。
#[derive(Debug)]
pub struct OrganismEvaluator {
    features: FeatureSet,
    extractor: FeatureExtractor,
    legal_moves: LegalMoveTable,
    train: Vec<Sample>,
    test: Vec<Sample>,
    train_drops: Vec<Sample>,
    mode: EvalMode,
    num_eval: usize,
    log_stats: bool,
    cache: FeatureCache,
    /// キャッシュ済みの先頭局面数
    warm: usize,
    stats: EvaluationStats,
}

impl OrganismEvaluator {
    pub fn new(
        data: TrainingData,
        features: &FeatureConfig,
        config: HarnessConfig,
    ) -> Result<OrganismEvaluator, HarnessError> {
        let extractor = FeatureExtractor::standard()?;
        Self::with_extractor(data, FeatureSet::new(features)?, extractor, config)
    }

    pub fn with_extractor(
        data: TrainingData,
        features: FeatureSet,
        extractor: FeatureExtractor,
        config: HarnessConfig,
    ) -> Result<OrganismEvaluator, HarnessError> {
        let train = decode_samples(&data.train)?;
        let test = decode_samples(&data.test)?;
        let train_drops = train.iter().filter(|s| s.expert.is_drop()).copied().collect();

        let mut evaluator = OrganismEvaluator {
            features,
            extractor,
            legal_moves: data.legal_moves,
            train,
            test,
            train_drops,
            mode: config.mode,
            num_eval: 0,
            log_stats: config.log_stats,
            cache: FeatureCache::new(),
            warm: 0,
            stats: EvaluationStats::default(),
        };
        evaluator.num_eval = evaluator.samples().len();
        if let Some(n) = config.num_eval {
            evaluator.set_num_eval(n)?;
        }

        log::info!(
            "harness ready: train={} test={} train_drops={} legal_moves={} features={}",
            evaluator.train.len(),
            evaluator.test.len(),
            evaluator.train_drops.len(),
            evaluator.legal_moves.len(),
            evaluator.features.len()
        );
        if evaluator.legal_moves.mismatched() > 0 {
            log::warn!(
                "{} result boards in the legal move table differ from the applied moves",
                evaluator.legal_moves.mismatched()
            );
        }
        Ok(evaluator)
    }

    /// 現在のモードで重みベクトルを評価し、適応度（一致数の2乗）を返す
    pub fn evaluate_organism(&mut self, weights: &[i32]) -> Result<u64, HarnessError> {
        let evaluator = WeightedEvaluator::new(self.features.clone(), weights)?;
        let start = Instant::now();

        let mut stats = if self.num_eval > self.warm {
            let stats = self.cold_pass(&evaluator);
            self.warm = self.num_eval;
            stats
        } else {
            self.warm_pass(&evaluator)
        };
        stats.eval_time_ms = start.elapsed().as_millis() as u64;

        if self.log_stats {
            log::info!("[{}] {}", self.mode, stats.format_report());
        }
        self.stats = stats;
        Ok(stats.total_correct * stats.total_correct)
    }

    /// キャッシュを埋めながら逐次評価する
    fn cold_pass(&mut self, evaluator: &WeightedEvaluator) -> EvaluationStats {
        let samples = match self.mode {
            EvalMode::Train => &self.train,
            EvalMode::Test => &self.test,
            EvalMode::TrainDrops => &self.train_drops,
        };
        let mut stats = EvaluationStats::default();
        for sample in &samples[..self.num_eval] {
            let Some(legal) = self.legal_moves.get(&sample.key) else {
                log::warn!("no legal moves for {}", sample.key.to_hex());
                stats.record(sample.expert, None);
                continue;
            };
            let chosen = select(legal.children().map(|(mv, next)| {
                let key = next.key();
                let raw = match self.cache.get(&key) {
                    Some(raw) => {
                        stats.cache_hits += 1;
                        *raw
                    }
                    None => {
                        stats.cache_misses += 1;
                        *self
                            .cache
                            .insert(key, self.extractor.extract(&next, sample.player))
                    }
                };
                (mv, evaluator.score(&raw))
            }));
            stats.record(sample.expert, chosen);
        }
        log::debug!("feature cache holds {} positions", self.cache.len());
        stats
    }

    /// キャッシュを読むだけの評価（局面ごとに独立）
    fn warm_pass(&self, evaluator: &WeightedEvaluator) -> EvaluationStats {
        let samples = &self.samples()[..self.num_eval];
        let run = |sample: &Sample| self.evaluate_sample(evaluator, sample);

        #[cfg(feature = "parallel")]
        let stats = samples
            .par_iter()
            .map(run)
            .reduce(EvaluationStats::default, |a, b| a + b);
        #[cfg(not(feature = "parallel"))]
        let stats = samples
            .iter()
            .map(run)
            .fold(EvaluationStats::default(), |a, b| a + b);

        stats
    }

    fn evaluate_sample(&self, evaluator: &WeightedEvaluator, sample: &Sample) -> EvaluationStats {
        let mut stats = EvaluationStats::default();
        let Some(legal) = self.legal_moves.get(&sample.key) else {
            stats.record(sample.expert, None);
            return stats;
        };
        let chosen = select(legal.children().map(|(mv, next)| {
            let raw: RawFeatures = match self.cache.get(&next.key()) {
                Some(raw) => {
                    stats.cache_hits += 1;
                    *raw
                }
                None => {
                    stats.cache_misses += 1;
                    self.extractor.extract(&next, sample.player)
                }
            };
            (mv, evaluator.score(&raw))
        }));
        stats.record(sample.expert, chosen);
        stats
    }

    /// 評価モードを切り替える。キャッシュを消し、局面数をモードの局面数に収める
    pub fn set_mode(&mut self, mode: EvalMode) {
        self.mode = mode;
        self.clear_cache();
        self.num_eval = self.num_eval.min(self.samples().len());
        if self.num_eval == 0 {
            self.num_eval = self.samples().len();
        }
        log::info!("mode switched to {} ({} positions)", mode, self.num_eval);
    }

    /// 文字列でモードを切り替える（`train` / `test` / `train_drops`）
    pub fn set_mode_str(&mut self, mode: &str) -> Result<(), HarnessError> {
        self.set_mode(mode.parse()?);
        Ok(())
    }

    /// 評価する局面数を設定する（現在のモードの局面数以下、0は不可）
    pub fn set_num_eval(&mut self, n: usize) -> Result<(), HarnessError> {
        if n == 0 {
            return Err(HarnessError::ZeroPositions);
        }
        let available = self.samples().len();
        if n > available {
            return Err(HarnessError::NotEnoughPositions {
                mode: self.mode,
                requested: n,
                available,
            });
        }
        self.num_eval = n;
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.warm = 0;
    }

    fn samples(&self) -> &[Sample] {
        match self.mode {
            EvalMode::Train => &self.train,
            EvalMode::Test => &self.test,
            EvalMode::TrainDrops => &self.train_drops,
        }
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    #[inline]
    pub fn num_eval(&self) -> usize {
        self.num_eval
    }

    /// 現在のモードの局面数
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.samples().len()
    }

    #[inline]
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    pub fn feature_labels(&self) -> Vec<&'static str> {
        self.features.labels()
    }

    #[inline]
    pub fn num_major_features(&self) -> usize {
        self.features.n_major()
    }

    /// 直前の `evaluate_organism` の統計
    #[inline]
    pub fn stats(&self) -> &EvaluationStats {
        &self.stats
    }

    #[inline]
    pub fn cache(&self) -> &FeatureCache {
        &self.cache
    }
}

/// 評価値が最大の手（同点は先に現れた手）
fn select(scored: impl Iterator<Item = (Move, i64)>) -> Option<Move> {
    let mut best: Option<(Move, i64)> = None;
    for (mv, score) in scored {
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}
