//! gshogi の評価ハーネスと対局を動かすためのローダーとコマンド群
//!
//! - `corpus`: 棋譜・合法手表・重みベクトルの読み込み
//! - `config`: TOML の実行設定
//! - `common::io`: gzip 対応のファイルI/O

pub mod common;
pub mod config;
pub mod corpus;
