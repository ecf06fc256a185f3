//! 駒種（PieceKind）と駒（Piece）
//!
//! 駒種の数値は局面エンコードおよび指し手エンコード（駒打ちの打つ駒）で使われる
//! 固定値であり、変更してはならない。

use super::Color;

/// 駒種（成りは含まない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Silver = 1,
    Knight = 2,
    Lance = 3,
    Rook = 4,
    Bishop = 5,
    King = 6,
    Gold = 7,
}

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 8;

    /// 全ての駒種（数値順）
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Gold,
    ];

    /// 持ち駒になりうる駒種
    pub const HAND: [PieceKind; 7] = [
        PieceKind::Pawn,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
    ];

    /// u8から駒種に変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceKind> {
        if (n as usize) < Self::NUM { Some(Self::ALL[n as usize]) } else { None }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 成れる駒種か（玉と金以外）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceKind::King | PieceKind::Gold)
    }

    /// 飛び駒か
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Lance | PieceKind::Rook | PieceKind::Bishop)
    }
}

/// 駒（駒種 + 成り + 手番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub promoted: bool,
    pub color: Color,
}

impl Piece {
    /// 成っていない駒を生成
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            promoted: false,
            color,
        }
    }

    /// 成り駒を生成
    #[inline]
    pub const fn promoted(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            promoted: true,
            color,
        }
    }

    /// エンコード値 `kind + 8 * promoted + 16 * color`
    #[inline]
    pub const fn code(self) -> u8 {
        self.kind as u8 + ((self.promoted as u8) << 3) + ((self.color as u8) << 4)
    }

    /// エンコード値から駒を復元（不正な値なら None）
    pub const fn from_code(code: u8) -> Option<Piece> {
        if code >= 32 {
            return None;
        }
        let Some(kind) = PieceKind::from_u8(code & 7) else {
            return None;
        };
        let promoted = code & 8 != 0;
        if promoted && !kind.can_promote() {
            return None;
        }
        let color = if code & 16 == 0 { Color::Black } else { Color::White };
        Some(Piece {
            kind,
            promoted,
            color,
        })
    }

    /// 金と同じ動きをする駒か（金・と・成香・成桂・成銀）
    #[inline]
    pub const fn moves_as_gold(self) -> bool {
        match self.kind {
            PieceKind::Gold => true,
            PieceKind::Pawn | PieceKind::Lance | PieceKind::Knight | PieceKind::Silver => {
                self.promoted
            }
            _ => false,
        }
    }

    /// 持ち駒になったときの駒（成りを解除し、手番を反転）
    #[inline]
    pub const fn captured(self) -> Piece {
        Piece::new(self.kind, self.color.opponent())
    }

    /// 手番を入れ替えた駒
    #[inline]
    pub const fn flip(self) -> Piece {
        Piece {
            kind: self.kind,
            promoted: self.promoted,
            color: self.color.opponent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_code() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).code(), 0);
        assert_eq!(Piece::promoted(PieceKind::Rook, Color::Black).code(), 12);
        assert_eq!(Piece::new(PieceKind::King, Color::White).code(), 22);
        assert_eq!(Piece::promoted(PieceKind::Bishop, Color::White).code(), 29);
    }

    #[test]
    fn test_piece_from_code() {
        for code in 0..32u8 {
            if let Some(piece) = Piece::from_code(code) {
                assert_eq!(piece.code(), code);
            }
        }
        // 成り玉・成り金は存在しない
        assert_eq!(Piece::from_code(14), None);
        assert_eq!(Piece::from_code(15), None);
        assert_eq!(Piece::from_code(0xFF), None);
    }

    #[test]
    fn test_moves_as_gold() {
        assert!(Piece::new(PieceKind::Gold, Color::Black).moves_as_gold());
        assert!(Piece::promoted(PieceKind::Pawn, Color::White).moves_as_gold());
        assert!(!Piece::promoted(PieceKind::Bishop, Color::Black).moves_as_gold());
        assert!(!Piece::new(PieceKind::Silver, Color::Black).moves_as_gold());
    }

    #[test]
    fn test_captured_piece() {
        let dragon = Piece::promoted(PieceKind::Rook, Color::White);
        assert_eq!(dragon.captured(), Piece::new(PieceKind::Rook, Color::Black));
    }
}
