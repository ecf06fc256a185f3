//! 特徴量ベースの将棋評価関数と、その重みを学習するための評価ハーネス
//!
//! - `types` / `position`: 局面・指し手・利き
//! - `movegen`: 合法手生成
//! - `features`: 特徴量と囲いライブラリ
//! - `eval`: 重みのリンクを反映した評価関数
//! - `search`: αβ探索による着手決定
//! - `train`: 棋譜の一致率による重みの適応度評価
//! - `game`: 2つの重みベクトルの対局

pub mod eval;
pub mod features;
pub mod game;
pub mod movegen;
pub mod position;
pub mod search;
pub mod train;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
