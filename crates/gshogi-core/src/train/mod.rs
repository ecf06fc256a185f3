//! 評価ハーネス
//!
//! 棋譜の (局面, 棋士の指し手) を再生し、重みベクトルで選んだ手が棋士の手と
//! 一致した数を数える。適応度は一致数の2乗。
//!
//! - `FeatureCache`: 指した後の局面 → 生の特徴量（モード切り替えで消去）
//! - `TrainingData` / `LegalMoveTable`: 外部から与える棋譜と合法手表
//! - `OrganismEvaluator`: 重みベクトルの適応度を計算する

mod cache;
mod data;
mod harness;
mod stats;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eval::EvalError;
use crate::features::FeatureError;
use crate::position::EncodingError;

pub use cache::FeatureCache;
pub use data::{LegalMoveTable, LegalMoves, Record, Sample, TrainingData};
pub use harness::{HarnessConfig, OrganismEvaluator};
pub use stats::EvaluationStats;

/// 評価に使う棋譜
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    /// 学習用の棋譜
    #[default]
    Train,
    /// 評価用（学習に使わない）棋譜
    Test,
    /// 学習用の棋譜のうち、棋士の手が駒打ちのもの
    TrainDrops,
}

impl EvalMode {
    pub const ALL: [EvalMode; 3] = [EvalMode::Train, EvalMode::Test, EvalMode::TrainDrops];

    pub const fn as_str(self) -> &'static str {
        match self {
            EvalMode::Train => "train",
            EvalMode::Test => "test",
            EvalMode::TrainDrops => "train_drops",
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvalMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| HarnessError::UnknownMode(s.to_string()))
    }
}

/// 評価ハーネスのエラー
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("Mode not supported: {0}")]
    UnknownMode(String),

    #[error("Positions to evaluate must be non-zero.")]
    ZeroPositions,

    #[error("Not enough positions available in {mode} data: requested {requested}, available {available}")]
    NotEnoughPositions {
        mode: EvalMode,
        requested: usize,
        available: usize,
    },

    #[error("invalid board {board}: {source}")]
    Board {
        board: String,
        #[source]
        source: EncodingError,
    },

    #[error("invalid move {raw} for board {board}")]
    Move { board: String, raw: i32 },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Feature(#[from] FeatureError),
}
