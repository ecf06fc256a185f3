//! 指し手（Move）
//!
//! 整数1つに `(移動元 * 81 + 移動先) * 4 + 成り * 2 + 駒打ち` を詰め込む。
//! 駒打ちの場合は移動元の位置に打つ駒の駒種番号が入る。
//! 最大値は 26243 なので u16 に収まる。

use super::{PieceKind, Square};

/// 指し手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// 盤上の駒を動かす手
    #[inline]
    pub const fn normal(from: Square, to: Square, promote: bool) -> Move {
        Move(((from.raw() as u16 * 81 + to.raw() as u16) << 2) | ((promote as u16) << 1))
    }

    /// 駒打ち
    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Move {
        Move(((kind as u16 * 81 + to.raw() as u16) << 2) | 1)
    }

    /// 整数表現から復元（範囲外や矛盾した値なら None）
    pub const fn from_raw(raw: i32) -> Option<Move> {
        if raw < 0 {
            return None;
        }
        let body = raw / 4;
        let from = body / 81;
        let to = body % 81;
        let promote = raw & 2 != 0;
        let drop = raw & 1 != 0;
        if drop {
            // 打つ駒は玉以外の駒種で、成りながら打つことはできない
            if promote || from >= PieceKind::NUM as i32 || from == PieceKind::King as i32 {
                return None;
            }
        } else if from >= Square::NUM as i32 {
            return None;
        }
        Some(Move(raw as u16))
    }

    /// 整数表現
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// 駒打ちか
    #[inline]
    pub const fn is_drop(self) -> bool {
        self.0 & 1 != 0
    }

    /// 成る手か
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.0 & 2 != 0
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_u8(((self.0 >> 2) % 81) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// 移動元（駒打ちなら None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        if self.is_drop() {
            None
        } else {
            Square::from_u8(((self.0 >> 2) / 81) as u8)
        }
    }

    /// 打つ駒の駒種（駒打ちでなければ None）
    #[inline]
    pub const fn drop_kind(self) -> Option<PieceKind> {
        if self.is_drop() {
            PieceKind::from_u8(((self.0 >> 2) / 81) as u8)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let to = self.to();
        match (self.from(), self.drop_kind()) {
            (_, Some(kind)) => write!(
                f,
                "{:?}*{}{}",
                kind,
                to.file().number(),
                to.rank().number()
            ),
            (Some(from), _) => write!(
                f,
                "{}{}-{}{}{}",
                from.file().number(),
                from.rank().number(),
                to.file().number(),
                to.rank().number(),
                if self.is_promotion() { "+" } else { "" }
            ),
            (None, None) => write!(f, "?{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_encoding() {
        let from = Square::from_numbers(7, 7).unwrap();
        let to = Square::from_numbers(7, 6).unwrap();
        let mv = Move::normal(from, to, false);
        assert_eq!(
            mv.raw() as i32,
            (from.index() as i32 * 81 + to.index() as i32) * 4
        );
        assert_eq!(mv.from(), Some(from));
        assert_eq!(mv.to(), to);
        assert!(!mv.is_drop());
        assert!(!mv.is_promotion());
    }

    #[test]
    fn test_drop_encoding() {
        let to = Square::from_numbers(5, 5).unwrap();
        let mv = Move::drop(PieceKind::Bishop, to);
        assert_eq!(mv.raw() as i32, (5 * 81 + to.index() as i32) * 4 + 1);
        assert!(mv.is_drop());
        assert_eq!(mv.from(), None);
        assert_eq!(mv.drop_kind(), Some(PieceKind::Bishop));
    }

    #[test]
    fn test_move_from_raw() {
        let mv = Move::normal(Square::from_numbers(2, 4).unwrap(), Square::from_numbers(2, 3).unwrap(), true);
        assert_eq!(Move::from_raw(mv.raw() as i32), Some(mv));
        assert_eq!(Move::from_raw(-1), None);
        // 成りながらの駒打ち
        assert_eq!(Move::from_raw((1 * 81 + 3) * 4 + 3), None);
        // 玉打ち
        assert_eq!(Move::from_raw((6 * 81 + 3) * 4 + 1), None);
        // 移動元が盤外
        assert_eq!(Move::from_raw((81 * 81) * 4), None);
    }
}
