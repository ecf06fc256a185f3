//! 特徴量計算の入力

use smallvec::SmallVec;

use crate::position::{AttackIndex, Position};
use crate::types::{Color, Piece, PieceKind, Square};

type SquareList = SmallVec<[Square; 4]>;

/// 特徴量計算に必要なものをまとめた読み取り専用の文脈
///
/// 駒種・成り・手番ごとの駒の位置を前もって集めておく。
pub struct FeatureContext<'a> {
    pub pos: &'a Position,
    pub attacks: &'a AttackIndex,
    pub player: Color,
    pub opponent: Color,
    squares: [[SquareList; 2 * PieceKind::NUM]; Color::NUM],
}

#[inline]
const fn slot(kind: PieceKind, promoted: bool) -> usize {
    kind.index() * 2 + promoted as usize
}

impl<'a> FeatureContext<'a> {
    pub fn new(pos: &'a Position, attacks: &'a AttackIndex, player: Color) -> FeatureContext<'a> {
        let mut squares: [[SquareList; 2 * PieceKind::NUM]; Color::NUM] = Default::default();
        for (_, sq, piece) in pos.board_pieces() {
            squares[piece.color.index()][slot(piece.kind, piece.promoted)].push(sq);
        }
        FeatureContext {
            pos,
            attacks,
            player,
            opponent: player.opponent(),
            squares,
        }
    }

    /// 指定した手番・駒種・成りの駒がある升
    #[inline]
    pub fn squares(&self, color: Color, kind: PieceKind, promoted: bool) -> &[Square] {
        &self.squares[color.index()][slot(kind, promoted)]
    }

    /// 視点側の駒がある升
    #[inline]
    pub fn own(&self, kind: PieceKind, promoted: bool) -> &[Square] {
        self.squares(self.player, kind, promoted)
    }

    /// 視点側の駒種の駒がある升（成り・不成の両方）
    pub fn own_any(&self, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.own(kind, false)
            .iter()
            .chain(self.own(kind, true))
            .copied()
    }

    /// 指定した手番・駒種・成りの駒の枚数
    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind, promoted: bool) -> i32 {
        self.squares(color, kind, promoted).len() as i32
    }

    /// 枚数差（視点側 - 相手側）
    #[inline]
    pub fn count_diff(&self, kind: PieceKind, promoted: bool) -> i32 {
        self.count(self.player, kind, promoted) - self.count(self.opponent, kind, promoted)
    }

    /// 升にある視点側の駒
    #[inline]
    pub fn own_piece_at(&self, sq: Option<Square>) -> Option<Piece> {
        sq.and_then(|s| self.pos.piece_on(s))
            .filter(|p| p.color == self.player)
    }

    /// 升に視点側の指定駒種（成りを問わない）があるか
    #[inline]
    pub fn has_own_kind(&self, sq: Option<Square>, kind: PieceKind) -> bool {
        self.own_piece_at(sq).is_some_and(|p| p.kind == kind)
    }

    /// 視点側が升を守っているか（1マス利きまたは飛び利きがある）
    #[inline]
    pub fn defended(&self, sq: Square) -> bool {
        self.attacks.is_attacked(self.player, sq)
    }

    /// 視点側から見て左右の升（手番の向きで反転する）
    #[inline]
    pub fn side_squares(&self, sq: Square) -> [Option<Square>; 2] {
        let left = crate::position::oriented((1, 0), self.player);
        [sq.offset(left.0, left.1), sq.offset(-left.0, -left.1)]
    }
}
