//! TOML の実行設定
//!
//! ```toml
//! [corpus]
//! train = "json/train_data.json.gz"
//! test = "json/test_data.json.gz"
//! legal_moves = "json/legal_moves_cache.json.gz"
//!
//! [features]
//! pawn_value = 100
//!
//! [harness]
//! mode = "train"
//! num_eval = 500
//!
//! [search]
//! depth = 2
//!
//! [game]
//! max_round = 256
//! ```
//!
//! コマンドラインの指定はファイルの値より優先する。

use std::path::Path;

use anyhow::{Context, Result};
use gshogi_core::features::FeatureConfig;
use gshogi_core::search::SearchConfig;
use gshogi_core::train::HarnessConfig;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusPaths;

/// 対局の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 手数の上限（到達したら勝敗なし）
    pub max_round: u16,
    /// 対局数
    pub games: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            max_round: 256,
            games: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub corpus: CorpusPaths,
    pub features: FeatureConfig,
    pub harness: HarnessConfig,
    pub search: SearchConfig,
    pub game: GameSettings,
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// ファイルが指定されていれば読み込み、なければ既定値
    pub fn load_or_default(path: Option<&Path>) -> Result<RunConfig> {
        match path {
            Some(path) => RunConfig::load(path),
            None => Ok(RunConfig::default()),
        }
    }
}
