//! 段（Rank）と筋（File）

use super::Color;

/// 段（1段〜9段）
///
/// 先手は1段目の方向へ進む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
    Rank9 = 8,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 9;

    /// 全ての段
    pub const ALL: [Rank; 9] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
        Rank::Rank9,
    ];

    /// u8（0始まり）からRankに変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Rank> {
        if n < 9 { Some(Rank::ALL[n as usize]) } else { None }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 段の番号（1〜9）
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    /// 相対段（指定した手番から見た段）
    #[inline]
    pub const fn relative(self, color: Color) -> Rank {
        match color {
            Color::Black => self,
            Color::White => Rank::ALL[8 - self as usize],
        }
    }

    /// 成れる段かどうか（先手視点で1-3段、後手視点で7-9段）
    #[inline]
    pub const fn can_promote(self, color: Color) -> bool {
        (self.relative(color) as u8) <= (Rank::Rank3 as u8)
    }

    /// 自陣（先手なら7-9段、後手なら1-3段）かどうか
    #[inline]
    pub const fn in_home_camp(self, color: Color) -> bool {
        self.can_promote(color.opponent())
    }
}

/// 筋（1筋〜9筋）
///
/// 先手から見て右端が1筋。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    File1 = 0,
    File2 = 1,
    File3 = 2,
    File4 = 3,
    File5 = 4,
    File6 = 5,
    File7 = 6,
    File8 = 7,
    File9 = 8,
}

impl File {
    /// 筋の数
    pub const NUM: usize = 9;

    /// 全ての筋
    pub const ALL: [File; 9] = [
        File::File1,
        File::File2,
        File::File3,
        File::File4,
        File::File5,
        File::File6,
        File::File7,
        File::File8,
        File::File9,
    ];

    /// u8（0始まり）からFileに変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<File> {
        if n < 9 { Some(File::ALL[n as usize]) } else { None }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 筋の番号（1〜9）
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_from_u8() {
        assert_eq!(Rank::from_u8(0), Some(Rank::Rank1));
        assert_eq!(Rank::from_u8(8), Some(Rank::Rank9));
        assert_eq!(Rank::from_u8(9), None);
        assert_eq!(File::from_u8(4), Some(File::File5));
        assert_eq!(File::from_u8(9), None);
    }

    #[test]
    fn test_rank_can_promote() {
        // 先手: 1-3段で成れる
        assert!(Rank::Rank1.can_promote(Color::Black));
        assert!(Rank::Rank3.can_promote(Color::Black));
        assert!(!Rank::Rank4.can_promote(Color::Black));

        // 後手: 7-9段で成れる
        assert!(!Rank::Rank6.can_promote(Color::White));
        assert!(Rank::Rank7.can_promote(Color::White));
        assert!(Rank::Rank9.can_promote(Color::White));
    }

    #[test]
    fn test_rank_home_camp() {
        assert!(Rank::Rank7.in_home_camp(Color::Black));
        assert!(!Rank::Rank3.in_home_camp(Color::Black));
        assert!(Rank::Rank3.in_home_camp(Color::White));
        assert!(!Rank::Rank5.in_home_camp(Color::White));
    }

    #[test]
    fn test_rank_relative() {
        assert_eq!(Rank::Rank1.relative(Color::Black), Rank::Rank1);
        assert_eq!(Rank::Rank1.relative(Color::White), Rank::Rank9);
        assert_eq!(Rank::Rank5.relative(Color::White), Rank::Rank5); // 中央は同じ
    }
}
