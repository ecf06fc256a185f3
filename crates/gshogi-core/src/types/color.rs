//! 手番（Color）

/// 手番（先手/後手）
///
/// 数値は局面エンコードの所有者ビットと一致する（先手 = 0, 後手 = 1）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 手数の偶奇から手番を求める（0手目は先手）
    #[inline]
    pub const fn from_round(round: u16) -> Color {
        if round & 1 == 0 { Color::Black } else { Color::White }
    }

    /// 前進方向の段の増分（先手は1段目へ向かう）
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_color_from_round() {
        assert_eq!(Color::from_round(0), Color::Black);
        assert_eq!(Color::from_round(1), Color::White);
        assert_eq!(Color::from_round(42), Color::Black);
    }

    #[test]
    fn test_color_forward() {
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.forward(), 1);
    }
}
