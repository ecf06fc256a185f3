//! 指し手生成器
//!
//! 探索・対局で使う合法手を生成する。評価ハーネスは外部の合法手表を使うため、
//! ここを通らない。打ち歩詰めの判定は行わない。

use crate::position::{Position, is_square_attacked, reachable_squares};
use crate::types::{Color, Move, Piece, PieceKind, Rank, Square};

/// 行き所のない段か（歩・香は1段目、桂は1-2段目。手番から見た段）
#[inline]
fn is_dead_rank(kind: PieceKind, color: Color, rank: Rank) -> bool {
    let relative = rank.relative(color);
    match kind {
        PieceKind::Pawn | PieceKind::Lance => relative == Rank::Rank1,
        PieceKind::Knight => relative <= Rank::Rank2,
        _ => false,
    }
}

/// 手番側の疑似合法手（自玉への王手放置を含む）
pub fn generate_pseudo_legal(pos: &Position) -> Vec<Move> {
    let us = pos.side_to_move();
    let mut moves = Vec::with_capacity(128);

    for (_, from, piece) in pos.board_pieces() {
        if piece.color != us {
            continue;
        }
        for to in reachable_squares(pos, from, piece) {
            push_board_moves(&mut moves, piece, from, to);
        }
    }

    for kind in PieceKind::HAND {
        if pos.hand_count(us, kind) == 0 {
            continue;
        }
        for to in Square::all() {
            if !pos.is_empty(to) || is_dead_rank(kind, us, to.rank()) {
                continue;
            }
            if kind == PieceKind::Pawn && has_pawn_on_file(pos, us, to) {
                continue;
            }
            moves.push(Move::drop(kind, to));
        }
    }

    moves
}

/// 手番側の合法手
pub fn generate_legal(pos: &Position) -> Vec<Move> {
    let us = pos.side_to_move();
    let mut moves = generate_pseudo_legal(pos);
    if pos.king_square(us).is_some() {
        moves.retain(|&mv| !leaves_king_attacked(pos, mv, us));
    }
    moves
}

/// 指し手を適用した結果、自玉に利きが残るか
fn leaves_king_attacked(pos: &Position, mv: Move, us: Color) -> bool {
    let mut next = pos.clone();
    next.do_move(mv);
    match next.king_square(us) {
        Some(king) => is_square_attacked(&next, king, us.opponent()),
        None => true,
    }
}

fn push_board_moves(moves: &mut Vec<Move>, piece: Piece, from: Square, to: Square) {
    let us = piece.color;
    let promotable = piece.kind.can_promote()
        && !piece.promoted
        && (from.rank().can_promote(us) || to.rank().can_promote(us));
    if promotable {
        moves.push(Move::normal(from, to, true));
    }
    if piece.promoted || !is_dead_rank(piece.kind, us, to.rank()) {
        moves.push(Move::normal(from, to, false));
    }
}

/// 二歩になるか
fn has_pawn_on_file(pos: &Position, us: Color, to: Square) -> bool {
    Rank::ALL.iter().any(|&rank| {
        pos.piece_on(Square::new(to.file(), rank)) == Some(Piece::new(PieceKind::Pawn, us))
    })
}
