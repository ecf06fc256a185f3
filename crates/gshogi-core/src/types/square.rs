//! 升（Square）
//!
//! 升番号は `(筋 - 1) * 9 + (段 - 1)`。0 が 1一、80 が 9九。
//! 局面エンコードの盤面バイト列の並びと一致する。

use super::{Color, File, Rank};

/// 盤上の升（0〜80）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = 81;

    /// 筋と段から升を生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(file as u8 * 9 + rank as u8)
    }

    /// 筋・段の番号（1〜9）から升を生成
    #[inline]
    pub const fn from_numbers(file: i32, rank: i32) -> Option<Square> {
        if file < 1 || file > 9 || rank < 1 || rank > 9 {
            None
        } else {
            Some(Square(((file - 1) * 9 + (rank - 1)) as u8))
        }
    }

    /// u8から升に変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Self::NUM { Some(Square(n)) } else { None }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 生の値
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 筋
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 / 9) as usize]
    }

    /// 段
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 9) as usize]
    }

    /// 筋・段をずらした升（盤外なら None）
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::from_numbers(
            self.file().number() + df as i32,
            self.rank().number() + dr as i32,
        )
    }

    /// 手番から見た前方1マス
    #[inline]
    pub const fn ahead(self, color: Color) -> Option<Square> {
        self.offset(0, color.forward())
    }

    /// 手番から見た後方1マス
    #[inline]
    pub const fn behind(self, color: Color) -> Option<Square> {
        self.offset(0, -color.forward())
    }

    /// 盤面を180度回転させた升
    #[inline]
    pub const fn rotate(self) -> Square {
        Square(80 - self.0)
    }

    /// 周囲8マス（盤外は除く）
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        const DELTAS: [(i8, i8); 8] =
            [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
        DELTAS.into_iter().filter_map(move |(df, dr)| self.offset(df, dr))
    }

    /// 全ての升を升番号順に列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_numbering() {
        let sq = Square::new(File::File1, Rank::Rank1);
        assert_eq!(sq.index(), 0);
        let sq = Square::new(File::File9, Rank::Rank9);
        assert_eq!(sq.index(), 80);
        let sq = Square::from_numbers(7, 6).unwrap();
        assert_eq!(sq.index(), 6 * 9 + 5);
        assert_eq!(sq.file(), File::File7);
        assert_eq!(sq.rank(), Rank::Rank6);
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::from_numbers(1, 1).unwrap();
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, -1), None);
        assert_eq!(sq.offset(1, 1), Square::from_numbers(2, 2));
        assert_eq!(sq.ahead(Color::White), Square::from_numbers(1, 2));
        assert_eq!(sq.ahead(Color::Black), None);
    }

    #[test]
    fn test_square_neighbors() {
        assert_eq!(Square::from_numbers(1, 1).unwrap().neighbors().count(), 3);
        assert_eq!(Square::from_numbers(5, 1).unwrap().neighbors().count(), 5);
        assert_eq!(Square::from_numbers(5, 5).unwrap().neighbors().count(), 8);
    }

    #[test]
    fn test_square_rotate() {
        let sq = Square::from_numbers(2, 8).unwrap();
        assert_eq!(sq.rotate(), Square::from_numbers(8, 2).unwrap());
        assert_eq!(sq.rotate().rotate(), sq);
    }
}
