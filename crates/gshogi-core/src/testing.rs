//! テスト用の局面構築ヘルパー

use crate::position::{ENCODED_LEN, Position};
use crate::types::{Color, Piece, PieceKind, Square};

pub(crate) fn sq(file: i32, rank: i32) -> Square {
    Square::from_numbers(file, rank).unwrap()
}

pub(crate) fn black(kind: PieceKind) -> Piece {
    Piece::new(kind, Color::Black)
}

pub(crate) fn white(kind: PieceKind) -> Piece {
    Piece::new(kind, Color::White)
}

/// 盤上の駒・持ち駒・手数を指定して局面を作る
pub(crate) fn position(
    board: &[(Square, Piece)],
    hands: &[(Color, PieceKind, u8)],
    round: u16,
) -> Position {
    let mut bytes = [0xFFu8; ENCODED_LEN];
    for &(sq, piece) in board {
        bytes[sq.index()] = piece.code();
    }
    bytes[Square::NUM..].fill(0);
    for &(color, kind, count) in hands {
        bytes[Square::NUM + color.index() * PieceKind::NUM + kind.index()] = count;
    }
    bytes[ENCODED_LEN - 2..].copy_from_slice(&round.to_be_bytes());
    Position::from_bytes(&bytes).unwrap()
}
