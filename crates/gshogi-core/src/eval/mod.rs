//! 重みのリンクを反映した評価関数
//!
//! 評価値 = 歩の枚数差 × 歩の価値 + Σ 特徴量 × 実効重み
//!
//! リンクされた特徴量の実効重みは「自分の重み + リンク先の重み」
//! （リンク先が歩なら「自分の重み + 歩の価値」）。実効重みは構築時に一度だけ計算する。

use crate::features::{FeatureExtractor, FeatureSet, Link, RawFeatures};
use crate::position::{AttackIndex, Position};
use crate::types::Color;

/// 評価関数の構築エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("weight vector has {actual} entries but {expected} features are registered")]
    WeightLength { expected: usize, actual: usize },
}

/// 特徴量の並びと重みベクトルから作る線形評価関数
#[derive(Debug, Clone)]
pub struct WeightedEvaluator {
    features: FeatureSet,
    weights: Vec<i32>,
    coefficients: Vec<i64>,
}

impl WeightedEvaluator {
    /// 重みベクトルの長さは登録特徴量数と一致しなければならない
    pub fn new(features: FeatureSet, weights: &[i32]) -> Result<WeightedEvaluator, EvalError> {
        if weights.len() != features.len() {
            return Err(EvalError::WeightLength {
                expected: features.len(),
                actual: weights.len(),
            });
        }

        let coefficients = (0..features.len())
            .map(|i| {
                let own = weights[i] as i64;
                match features.link(i) {
                    None => own,
                    Some(Link::PawnValue) => own + features.pawn_value() as i64,
                    Some(Link::Index(base)) => own + weights[base] as i64,
                }
            })
            .collect();

        Ok(WeightedEvaluator {
            features,
            weights: weights.to_vec(),
            coefficients,
        })
    }

    #[inline]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    #[inline]
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// 登録順の実効重み
    #[inline]
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// 生の特徴量の評価値
    pub fn score(&self, raw: &RawFeatures) -> i64 {
        let material = raw.pawn_count as i64 * self.features.pawn_value() as i64;
        self.features
            .ids()
            .iter()
            .zip(&self.coefficients)
            .fold(material, |acc, (&id, &c)| acc + raw.get(id) as i64 * c)
    }
}

/// 特徴量計算と評価関数を組にした、指定手番視点の静的評価
#[derive(Debug, Clone)]
pub struct Heuristic {
    extractor: FeatureExtractor,
    evaluator: WeightedEvaluator,
}

impl Heuristic {
    pub fn new(extractor: FeatureExtractor, evaluator: WeightedEvaluator) -> Heuristic {
        Heuristic {
            extractor,
            evaluator,
        }
    }

    #[inline]
    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    #[inline]
    pub fn evaluator(&self) -> &WeightedEvaluator {
        &self.evaluator
    }

    /// `player` 視点の評価値
    pub fn evaluate(&self, pos: &Position, player: Color) -> i64 {
        let attacks = AttackIndex::compute(pos);
        let raw = self.extractor.extract_with(pos, &attacks, player);
        self.evaluator.score(&raw)
    }
}
