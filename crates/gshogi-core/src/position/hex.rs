//! 局面の16進エンコード
//!
//! 99バイト固定長:
//! - 0..81: 升ごとの駒コード（空きは `0xFF`）
//! - 81..97: 持ち駒の枚数（先手の駒種0..7、続いて後手の駒種0..7）
//! - 97..99: 手数（ビッグエンディアン）
//!
//! 読み込み時の駒テーブルは升番号順に盤上の駒、続いて先手・後手の持ち駒を並べる。

use std::fmt;
use std::str::FromStr;

use crate::types::{Color, Piece, PieceKind, Square};

use super::{Location, PieceId, Position};

/// エンコード長（バイト）
pub const ENCODED_LEN: usize = 99;

const EMPTY: u8 = 0xFF;
const HAND_OFFSET: usize = Square::NUM;
const ROUND_OFFSET: usize = HAND_OFFSET + Color::NUM * PieceKind::NUM;

/// 局面エンコードの読み込みエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("encoded position must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid hex digit {digit:?} at offset {offset}")]
    HexDigit { offset: usize, digit: char },

    #[error("invalid piece code {code:#04x} on square {square}")]
    PieceCode { square: usize, code: u8 },

    #[error("{color:?} holds {count} kings in hand")]
    KingInHand { color: Color, count: u8 },

    #[error("position has {0} pieces, at most 40 are allowed")]
    TooManyPieces(usize),

    /// 盤上の玉が2枚以上（玉のない局面は囲いの型や詰将棋で使うため受け付ける）
    #[error("{color:?} has {count} kings on the board")]
    KingCount { color: Color, count: usize },
}

/// 局面の正規化キー（特徴量キャッシュのキー）
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u8; ENCODED_LEN]);

impl PositionKey {
    /// バイト列
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.0
    }

    /// 大文字16進文字列
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Debug for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionKey({})", self.to_hex())
    }
}

impl Position {
    /// 99バイトのエンコードから局面を復元
    pub fn from_bytes(bytes: &[u8]) -> Result<Position, EncodingError> {
        if bytes.len() != ENCODED_LEN {
            return Err(EncodingError::Length {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let round = u16::from_be_bytes([bytes[ROUND_OFFSET], bytes[ROUND_OFFSET + 1]]);
        let mut pos = Position::empty(round);

        let mut board = Vec::with_capacity(PieceId::MAX);
        for sq in Square::all() {
            let code = bytes[sq.index()];
            if code == EMPTY {
                continue;
            }
            let piece = Piece::from_code(code).ok_or(EncodingError::PieceCode {
                square: sq.index(),
                code,
            })?;
            board.push((sq, piece));
        }

        let mut hand_total = 0usize;
        for color in Color::ALL {
            let count = bytes[hand_index(color, PieceKind::King)];
            if count != 0 {
                return Err(EncodingError::KingInHand { color, count });
            }
            hand_total += PieceKind::HAND
                .iter()
                .map(|&k| bytes[hand_index(color, k)] as usize)
                .sum::<usize>();
        }

        for color in Color::ALL {
            let count = board
                .iter()
                .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                .count();
            if count > 1 {
                return Err(EncodingError::KingCount { color, count });
            }
        }

        let total = board.len() + hand_total;
        if total > PieceId::MAX {
            return Err(EncodingError::TooManyPieces(total));
        }

        for (sq, piece) in board {
            pos.put(piece, Location::Board(sq));
        }
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                for _ in 0..bytes[hand_index(color, kind)] {
                    pos.put(Piece::new(kind, color), Location::Hand);
                }
            }
        }
        Ok(pos)
    }

    /// 16進文字列から局面を復元（大文字小文字は区別しない）
    pub fn from_hex(hex: &str) -> Result<Position, EncodingError> {
        Position::from_bytes(&decode_hex(hex)?)
    }

    /// 99バイトのエンコード
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut bytes = [EMPTY; ENCODED_LEN];
        for (_, sq, piece) in self.board_pieces() {
            bytes[sq.index()] = piece.code();
        }
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                bytes[hand_index(color, kind)] = self.hand_count(color, kind) as u8;
            }
        }
        let [hi, lo] = self.round().to_be_bytes();
        bytes[ROUND_OFFSET] = hi;
        bytes[ROUND_OFFSET + 1] = lo;
        bytes
    }

    /// 正規化キー
    #[inline]
    pub fn key(&self) -> PositionKey {
        PositionKey(self.to_bytes())
    }

    /// 大文字16進文字列
    pub fn to_hex(&self) -> String {
        encode_hex(&self.to_bytes())
    }

    /// 先後を入れ替えた局面（盤を180度回転し、持ち駒と手番を交換）
    pub fn flipped(&self) -> Position {
        let mut pos = Position::empty(self.round() ^ 1);
        for sq in Square::all() {
            if let Some(piece) = self.piece_on(sq.rotate()) {
                pos.put(piece.flip(), Location::Board(sq));
            }
        }
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                for _ in 0..self.hand_count(color.opponent(), kind) {
                    pos.put(Piece::new(kind, color), Location::Hand);
                }
            }
        }
        pos
    }
}

impl FromStr for Position {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_hex(s.trim())
    }
}

#[inline]
fn hand_index(color: Color, kind: PieceKind) -> usize {
    HAND_OFFSET + color.index() * PieceKind::NUM + kind.index()
}

fn encode_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, EncodingError> {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() != ENCODED_LEN * 2 {
        return Err(EncodingError::Length {
            expected: ENCODED_LEN,
            actual: chars.len() / 2,
        });
    }
    let nibble = |offset: usize| -> Result<u8, EncodingError> {
        let digit = chars[offset];
        digit
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(EncodingError::HexDigit { offset, digit })
    };
    (0..ENCODED_LEN)
        .map(|i| Ok((nibble(2 * i)? << 4) | nibble(2 * i + 1)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn sq(file: i32, rank: i32) -> Square {
        Square::from_numbers(file, rank).unwrap()
    }

    #[test]
    fn test_startpos_roundtrip() {
        let pos = Position::startpos();
        let hex = pos.to_hex();
        assert_eq!(hex.len(), ENCODED_LEN * 2);
        let loaded = Position::from_hex(&hex).unwrap();
        assert_eq!(loaded, pos);
        assert_eq!(loaded.to_hex(), hex);
    }

    #[test]
    fn test_startpos_bytes() {
        let bytes = Position::startpos().to_bytes();
        // 1九香（先手）、1一香（後手）
        assert_eq!(bytes[sq(1, 9).index()], 3);
        assert_eq!(bytes[sq(1, 1).index()], 3 + 16);
        assert_eq!(bytes[sq(5, 5).index()], 0xFF);
        assert!(bytes[HAND_OFFSET..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_roundtrip_with_hand_and_promotion() {
        let mut pos = Position::startpos();
        pos.do_move(Move::normal(sq(7, 7), sq(7, 6), false));
        pos.do_move(Move::normal(sq(3, 3), sq(3, 4), false));
        pos.do_move(Move::normal(sq(8, 8), sq(2, 2), true));
        let hex = pos.to_hex();
        let loaded: Position = hex.parse().unwrap();
        assert_eq!(loaded.to_hex(), hex);
        assert_eq!(loaded.round(), 3);
        assert_eq!(loaded.hand_count(Color::Black, PieceKind::Bishop), 1);
        assert_eq!(
            loaded.piece_on(sq(2, 2)),
            Some(Piece::promoted(PieceKind::Bishop, Color::Black))
        );
    }

    #[test]
    fn test_lowercase_hex_accepted() {
        let hex = Position::startpos().to_hex().to_lowercase();
        assert_eq!(Position::from_hex(&hex).unwrap(), Position::startpos());
    }

    #[test]
    fn test_round_is_big_endian() {
        let mut bytes = Position::startpos().to_bytes();
        bytes[ROUND_OFFSET] = 0x01;
        bytes[ROUND_OFFSET + 1] = 0x03;
        let pos = Position::from_bytes(&bytes).unwrap();
        assert_eq!(pos.round(), 259);
        assert_eq!(pos.side_to_move(), Color::White);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            Position::from_hex("FF"),
            Err(EncodingError::Length { .. })
        ));

        let mut hex = Position::startpos().to_hex();
        hex.replace_range(0..1, "G");
        assert!(matches!(
            Position::from_hex(&hex),
            Err(EncodingError::HexDigit { offset: 0, .. })
        ));

        let mut bytes = Position::startpos().to_bytes();
        bytes[sq(5, 5).index()] = 14; // 成り玉
        assert!(matches!(
            Position::from_bytes(&bytes),
            Err(EncodingError::PieceCode { code: 14, .. })
        ));

        let mut bytes = Position::startpos().to_bytes();
        bytes[sq(5, 5).index()] = 6;
        assert!(matches!(
            Position::from_bytes(&bytes),
            Err(EncodingError::KingCount { color: Color::Black, count: 2 })
        ));

        let mut bytes = Position::startpos().to_bytes();
        bytes[hand_index(Color::Black, PieceKind::Pawn)] = 1;
        assert!(matches!(
            Position::from_bytes(&bytes),
            Err(EncodingError::TooManyPieces(41))
        ));
    }

    #[test]
    fn test_kingless_position_accepted() {
        let mut bytes = Position::startpos().to_bytes();
        bytes[sq(5, 9).index()] = EMPTY;
        bytes[sq(5, 1).index()] = EMPTY;
        let pos = Position::from_bytes(&bytes).unwrap();
        assert_eq!(pos.king(Color::Black), None);
        assert_eq!(pos.king(Color::White), None);
        assert_eq!(pos.num_pieces(), 38);
    }

    #[test]
    fn test_flipped_position() {
        let mut pos = Position::startpos();
        pos.do_move(Move::normal(sq(7, 7), sq(7, 6), false));
        let flipped = pos.flipped();
        assert_eq!(flipped.side_to_move(), Color::Black);
        assert_eq!(
            flipped.piece_on(sq(3, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(flipped.flipped().to_hex(), pos.to_hex());
    }
}
