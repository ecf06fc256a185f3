//! 利き（AttackIndex）
//!
//! 升ごと・手番ごとに、その升に利いている駒を3種類に分けて保持する。
//! - fixed: 1マスだけ動く方向の利き（歩・桂・金・玉、馬龍の1マス利きなど）
//! - flow: 飛び駒の利き。最初に駒がある升（利いている駒）まで含む
//! - blocked flow: 飛び駒の利きのうち、途中の駒に遮られて届かない部分。
//!   遮っている駒の次の升から、次の駒がある升（または盤端）までを記録する
//!
//! 盤面が変わったら `AttackIndex::compute` で丸ごと作り直す。

use smallvec::SmallVec;

use crate::types::{Color, Piece, PieceKind, Square};

use super::{PieceId, Position};

/// 利きの1エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttackEntry {
    /// 利いている駒
    pub attacker: PieceId,
    /// 遮っている駒（blocked flow のときのみ）
    pub blocker: Option<PieceId>,
}

type Entries = SmallVec<[AttackEntry; 4]>;

/// 先手から見た (筋の増分, 段の増分)。先手は段が減る方向へ進む。
type Delta = (i8, i8);

const PAWN_STEPS: &[Delta] = &[(0, -1)];
const KNIGHT_STEPS: &[Delta] = &[(-1, -2), (1, -2)];
const SILVER_STEPS: &[Delta] = &[(0, -1), (-1, -1), (1, -1), (-1, 1), (1, 1)];
const GOLD_STEPS: &[Delta] = &[(0, -1), (-1, -1), (1, -1), (-1, 0), (1, 0), (0, 1)];
const KING_STEPS: &[Delta] = &[
    (0, -1),
    (-1, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const ORTHOGONAL: &[Delta] = &[(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: &[Delta] = &[(-1, -1), (1, -1), (-1, 1), (1, 1)];
const LANCE_SLIDES: &[Delta] = &[(0, -1)];

/// 駒の動き（1マス方向と飛び方向）
#[derive(Debug, Clone, Copy)]
pub struct MovePattern {
    pub steps: &'static [Delta],
    pub slides: &'static [Delta],
}

impl MovePattern {
    /// 駒の動き方
    pub const fn of(piece: Piece) -> MovePattern {
        const NONE: &[Delta] = &[];
        let (steps, slides) = match (piece.kind, piece.promoted) {
            (PieceKind::Pawn | PieceKind::Lance | PieceKind::Knight | PieceKind::Silver, true) => {
                (GOLD_STEPS, NONE)
            }
            (PieceKind::Gold, _) => (GOLD_STEPS, NONE),
            (PieceKind::Pawn, false) => (PAWN_STEPS, NONE),
            (PieceKind::Lance, false) => (NONE, LANCE_SLIDES),
            (PieceKind::Knight, false) => (KNIGHT_STEPS, NONE),
            (PieceKind::Silver, false) => (SILVER_STEPS, NONE),
            (PieceKind::King, _) => (KING_STEPS, NONE),
            (PieceKind::Rook, false) => (NONE, ORTHOGONAL),
            (PieceKind::Rook, true) => (DIAGONAL, ORTHOGONAL),
            (PieceKind::Bishop, false) => (NONE, DIAGONAL),
            (PieceKind::Bishop, true) => (ORTHOGONAL, DIAGONAL),
        };
        MovePattern { steps, slides }
    }
}

/// 手番に合わせて向きを変えた増分（後手は180度回転）
#[inline]
pub(crate) const fn oriented((df, dr): Delta, color: Color) -> Delta {
    match color {
        Color::Black => (df, dr),
        Color::White => (-df, -dr),
    }
}

/// 局面全体の利き
#[derive(Debug, Clone)]
pub struct AttackIndex {
    fixed: [[Entries; Square::NUM]; Color::NUM],
    flow: [[Entries; Square::NUM]; Color::NUM],
    blocked_flow: [[Entries; Square::NUM]; Color::NUM],
}

impl AttackIndex {
    /// 局面から利きを計算する
    pub fn compute(pos: &Position) -> AttackIndex {
        let mut index = AttackIndex {
            fixed: std::array::from_fn(|_| std::array::from_fn(|_| Entries::new())),
            flow: std::array::from_fn(|_| std::array::from_fn(|_| Entries::new())),
            blocked_flow: std::array::from_fn(|_| std::array::from_fn(|_| Entries::new())),
        };

        for (id, from, piece) in pos.board_pieces() {
            let us = piece.color.index();
            let pattern = MovePattern::of(piece);

            for &delta in pattern.steps {
                let (df, dr) = oriented(delta, piece.color);
                if let Some(to) = from.offset(df, dr) {
                    index.fixed[us][to.index()].push(AttackEntry {
                        attacker: id,
                        blocker: None,
                    });
                }
            }

            for &delta in pattern.slides {
                let (df, dr) = oriented(delta, piece.color);
                let mut blocker = None;
                let mut cursor = from.offset(df, dr);
                while let Some(to) = cursor {
                    let entry = AttackEntry {
                        attacker: id,
                        blocker,
                    };
                    match blocker {
                        None => index.flow[us][to.index()].push(entry),
                        Some(_) => index.blocked_flow[us][to.index()].push(entry),
                    }
                    if let Some(occupant) = pos.id_on(to) {
                        if blocker.is_some() {
                            break;
                        }
                        blocker = Some(occupant);
                    }
                    cursor = to.offset(df, dr);
                }
            }
        }

        index
    }

    /// 1マス利き
    #[inline]
    pub fn fixed(&self, color: Color, sq: Square) -> &[AttackEntry] {
        &self.fixed[color.index()][sq.index()]
    }

    /// 飛び利き
    #[inline]
    pub fn flow(&self, color: Color, sq: Square) -> &[AttackEntry] {
        &self.flow[color.index()][sq.index()]
    }

    /// 遮られた飛び利き
    #[inline]
    pub fn blocked_flow(&self, color: Color, sq: Square) -> &[AttackEntry] {
        &self.blocked_flow[color.index()][sq.index()]
    }

    /// 1マス利きと飛び利きをまとめて列挙
    pub fn attackers(&self, color: Color, sq: Square) -> impl Iterator<Item = &AttackEntry> {
        self.fixed(color, sq).iter().chain(self.flow(color, sq))
    }

    /// 利きの数（1マス利き + 飛び利き）
    #[inline]
    pub fn count(&self, color: Color, sq: Square) -> usize {
        self.fixed(color, sq).len() + self.flow(color, sq).len()
    }

    /// 利いているか
    #[inline]
    pub fn is_attacked(&self, color: Color, sq: Square) -> bool {
        self.count(color, sq) > 0
    }
}

/// 指定した手番の駒が升に利いているか（利きを丸ごと計算せずに判定する）
pub fn is_square_attacked(pos: &Position, sq: Square, by: Color) -> bool {
    pos.board_pieces()
        .filter(|(_, _, piece)| piece.color == by)
        .any(|(_, from, piece)| {
            let pattern = MovePattern::of(piece);
            let steps = pattern.steps.iter().any(|&delta| {
                let (df, dr) = oriented(delta, by);
                from.offset(df, dr) == Some(sq)
            });
            steps
                || pattern.slides.iter().any(|&delta| {
                    let (df, dr) = oriented(delta, by);
                    let mut cursor = from.offset(df, dr);
                    while let Some(to) = cursor {
                        if to == sq {
                            return true;
                        }
                        if !pos.is_empty(to) {
                            return false;
                        }
                        cursor = to.offset(df, dr);
                    }
                    false
                })
        })
}

/// 盤上の駒の移動先（自駒のある升は除き、相手駒のある升は含む）
///
/// 成り・不成の区別や王手放置の判定はしない。
pub fn reachable_squares(pos: &Position, from: Square, piece: Piece) -> SmallVec<[Square; 20]> {
    let mut squares = SmallVec::new();
    let pattern = MovePattern::of(piece);
    for &delta in pattern.steps {
        let (df, dr) = oriented(delta, piece.color);
        if let Some(to) = from.offset(df, dr) {
            if !pos.is_owned_by(to, piece.color) {
                squares.push(to);
            }
        }
    }
    for &delta in pattern.slides {
        let (df, dr) = oriented(delta, piece.color);
        let mut cursor = from.offset(df, dr);
        while let Some(to) = cursor {
            if pos.is_owned_by(to, piece.color) {
                break;
            }
            squares.push(to);
            if !pos.is_empty(to) {
                break;
            }
            cursor = to.offset(df, dr);
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i32, rank: i32) -> Square {
        Square::from_numbers(file, rank).unwrap()
    }

    #[test]
    fn test_startpos_fixed_attacks() {
        let pos = Position::startpos();
        let index = AttackIndex::compute(&pos);
        // 7六は7七の歩だけが利いている
        let attackers = index.fixed(Color::Black, sq(7, 6));
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].attacker, pos.id_on(sq(7, 7)).unwrap());
        assert_eq!(attackers[0].blocker, None);
        // 3四は後手の3三の歩
        assert_eq!(index.fixed(Color::White, sq(3, 4)).len(), 1);
        // 5八には金2枚・銀なし・玉
        assert_eq!(index.fixed(Color::Black, sq(5, 8)).len(), 3);
    }

    #[test]
    fn test_startpos_flow_and_blocked_flow() {
        let pos = Position::startpos();
        let index = AttackIndex::compute(&pos);
        let rook = pos.id_on(sq(2, 8)).unwrap();
        let pawn = pos.id_on(sq(2, 7)).unwrap();

        // 飛車の前方: 2七の歩まで flow
        assert!(index.flow(Color::Black, sq(2, 7)).iter().any(|e| e.attacker == rook));
        // その先は2七の歩に遮られて 2三の歩まで blocked flow
        for rank in 3..=6 {
            let entries = index.blocked_flow(Color::Black, sq(2, rank));
            assert!(
                entries
                    .iter()
                    .any(|e| e.attacker == rook && e.blocker == Some(pawn)),
                "rank {rank}"
            );
        }
        assert!(index.blocked_flow(Color::Black, sq(2, 2)).is_empty());

        // 香車の利きは1七の歩で止まる
        let lance = pos.id_on(sq(1, 9)).unwrap();
        assert!(index.flow(Color::Black, sq(1, 8)).iter().any(|e| e.attacker == lance));
        assert!(index.flow(Color::Black, sq(1, 7)).iter().any(|e| e.attacker == lance));
        assert!(index.flow(Color::Black, sq(1, 6)).is_empty());
    }

    #[test]
    fn test_attack_index_is_color_symmetric() {
        let pos = Position::startpos();
        let index = AttackIndex::compute(&pos);
        for s in Square::all() {
            let r = s.rotate();
            assert_eq!(index.fixed(Color::Black, s).len(), index.fixed(Color::White, r).len());
            assert_eq!(index.flow(Color::Black, s).len(), index.flow(Color::White, r).len());
            assert_eq!(
                index.blocked_flow(Color::Black, s).len(),
                index.blocked_flow(Color::White, r).len()
            );
        }
    }

    #[test]
    fn test_is_square_attacked_matches_index() {
        let pos = Position::startpos();
        let index = AttackIndex::compute(&pos);
        for s in Square::all() {
            for color in Color::ALL {
                assert_eq!(is_square_attacked(&pos, s, color), index.is_attacked(color, s));
            }
        }
    }

    #[test]
    fn test_reachable_squares() {
        let pos = Position::startpos();
        let rook = pos.piece_on(sq(2, 8)).unwrap();
        let squares = reachable_squares(&pos, sq(2, 8), rook);
        // 横には動けるが、前後は自駒で塞がっている
        assert!(squares.contains(&sq(1, 8)));
        assert!(squares.contains(&sq(3, 8)));
        assert!(!squares.contains(&sq(2, 7)));
        let bishop = pos.piece_on(sq(8, 8)).unwrap();
        assert!(reachable_squares(&pos, sq(8, 8), bishop).is_empty());
    }
}
