//! 棋譜と合法手表
//!
//! どちらも外部のローダーが用意し、ハーネスの構築時に渡す。
//! 16進文字列と指し手の整数はここで一度だけ復元する。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::position::{Position, PositionKey};
use crate::types::{Color, Move};

use super::HarnessError;

/// 棋譜の1局面（局面の16進エンコードと棋士が指した手）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub board: String,
    #[serde(rename = "pmove")]
    pub expert: i32,
}

impl Record {
    pub fn new(board: impl Into<String>, expert: i32) -> Record {
        Record {
            board: board.into(),
            expert,
        }
    }
}

/// 1局面の合法手
///
/// 指した後の局面はここには持たず、評価のたびに `board` に指し手を適用して作る。
#[derive(Debug, Clone)]
pub struct LegalMoves {
    board: Position,
    moves: Vec<Move>,
}

impl LegalMoves {
    #[inline]
    pub fn board(&self) -> &Position {
        &self.board
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// (指し手, 指した後の局面) を合法手の順に返す
    pub fn children(&self) -> impl Iterator<Item = (Move, Position)> + '_ {
        self.moves.iter().map(|&mv| {
            let mut next = self.board.clone();
            next.do_move(mv);
            (mv, next)
        })
    }
}

/// 局面 → 合法手の表
#[derive(Debug, Clone, Default)]
pub struct LegalMoveTable {
    entries: HashMap<PositionKey, LegalMoves>,
    /// 指し手を適用した結果と食い違っていた「指した後の局面」の数
    mismatched: usize,
}

impl LegalMoveTable {
    pub fn new() -> LegalMoveTable {
        LegalMoveTable::default()
    }

    /// 1局面分の合法手を登録する（同じ局面は上書き）
    ///
    /// 各指し手は局面に適用できなければならない。添えられた「指した後の局面」は
    /// 読み込めることだけを確かめ、指し手の適用結果と違えば警告して無視する。
    pub fn insert<S: AsRef<str>>(
        &mut self,
        board: &str,
        actions: impl IntoIterator<Item = (i32, S)>,
    ) -> Result<(), HarnessError> {
        let pos = decode_board(board)?;
        let mut moves = Vec::new();
        for (raw, result) in actions {
            let mv = decode_move(board, raw)?;
            if !pos.is_applicable(mv) {
                return Err(HarnessError::Move {
                    board: board.to_string(),
                    raw,
                });
            }
            let listed = decode_board(result.as_ref())?;
            let mut next = pos.clone();
            next.do_move(mv);
            if next.key() != listed.key() {
                log::warn!("result board for move {} does not match board {}", mv, board);
                self.mismatched += 1;
            }
            moves.push(mv);
        }
        self.entries.insert(pos.key(), LegalMoves { board: pos, moves });
        Ok(())
    }

    #[inline]
    pub fn get(&self, key: &PositionKey) -> Option<&LegalMoves> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn mismatched(&self) -> usize {
        self.mismatched
    }
}

/// ハーネスに渡す学習データ一式
#[derive(Debug, Clone, Default)]
pub struct TrainingData {
    pub train: Vec<Record>,
    pub test: Vec<Record>,
    pub legal_moves: LegalMoveTable,
}

/// 復元済みの1局面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// 合法手表を引くキー
    pub key: PositionKey,
    /// 手番（特徴量はこの側から見る）
    pub player: Color,
    pub expert: Move,
}

impl Sample {
    pub fn from_record(record: &Record) -> Result<Sample, HarnessError> {
        let pos = decode_board(&record.board)?;
        Ok(Sample {
            key: pos.key(),
            player: pos.side_to_move(),
            expert: decode_move(&record.board, record.expert)?,
        })
    }
}

pub(super) fn decode_samples(records: &[Record]) -> Result<Vec<Sample>, HarnessError> {
    records.iter().map(Sample::from_record).collect()
}

fn decode_board(board: &str) -> Result<Position, HarnessError> {
    Position::from_hex(board).map_err(|source| HarnessError::Board {
        board: board.to_string(),
        source,
    })
}

fn decode_move(board: &str, raw: i32) -> Result<Move, HarnessError> {
    Move::from_raw(raw).ok_or_else(|| HarnessError::Move {
        board: board.to_string(),
        raw,
    })
}
