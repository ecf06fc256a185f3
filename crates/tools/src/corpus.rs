//! 棋譜・合法手表・重みベクトルの読み込み
//!
//! 棋譜: `[{"board": "<hex>", "pmove": <move>}, ...]`
//! 合法手表: `[{"board": "<hex>", "actions": [[<move>, "<hex>"], ...]}, ...]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gshogi_core::train::{LegalMoveTable, Record, TrainingData};
use serde::{Deserialize, Serialize};

use crate::common::io::{open_reader, read_json};

/// 合法手表の1局面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoveEntry {
    pub board: String,
    pub actions: Vec<(i32, String)>,
}

/// 学習データのファイル一式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusPaths {
    pub train: Option<PathBuf>,
    pub test: Option<PathBuf>,
    pub legal_moves: Option<PathBuf>,
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let records: Vec<Record> = read_json(path.as_ref())?;
    log::info!("loaded {} records from {}", records.len(), path.as_ref().display());
    Ok(records)
}

pub fn load_legal_moves<P: AsRef<Path>>(path: P) -> Result<LegalMoveTable> {
    let path = path.as_ref();
    let entries: Vec<LegalMoveEntry> = read_json(path)?;

    let mut table = LegalMoveTable::new();
    for (i, entry) in entries.iter().enumerate() {
        table
            .insert(&entry.board, entry.actions.iter().map(|(mv, result)| (*mv, result)))
            .with_context(|| format!("{}: entry {}", path.display(), i))?;
    }
    log::info!("loaded legal moves for {} positions from {}", table.len(), path.display());
    Ok(table)
}

/// 学習データ一式を読み込む（指定のないファイルは空として扱う）
pub fn load_training_data(paths: &CorpusPaths) -> Result<TrainingData> {
    let train = match &paths.train {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };
    let test = match &paths.test {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };
    let legal_moves = match &paths.legal_moves {
        Some(path) => load_legal_moves(path)?,
        None => LegalMoveTable::new(),
    };
    if train.is_empty() && test.is_empty() {
        bail!("no train or test records given");
    }
    Ok(TrainingData {
        train,
        test,
        legal_moves,
    })
}

/// 重みベクトルをパースする
///
/// カンマ・空白・改行区切りの整数列。`#` 以降は行末までコメント。
pub fn parse_weights(text: &str) -> Result<Vec<i32>> {
    let mut weights = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let body = line.split('#').next().unwrap_or_default();
        for token in body.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let w = token
                .parse::<i32>()
                .with_context(|| format!("line {}: invalid weight {:?}", line_no + 1, token))?;
            weights.push(w);
        }
    }
    if weights.is_empty() {
        bail!("weight vector is empty");
    }
    Ok(weights)
}

pub fn read_weights<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    let path = path.as_ref();
    let reader = open_reader(path).with_context(|| format!("failed to open {}", path.display()))?;
    let text = std::io::read_to_string(reader)?;
    parse_weights(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// `--weights` の値を解釈する。ファイルがあればファイル、なければ CSV 文字列
pub fn weights_arg(arg: &str) -> Result<Vec<i32>> {
    if Path::new(arg).is_file() {
        read_weights(arg)
    } else {
        parse_weights(arg)
    }
}
