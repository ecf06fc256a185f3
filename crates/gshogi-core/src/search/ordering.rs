//! 手の並べ替え
//!
//! 動かす駒の種類で優先度を決める。玉、成り大駒、大駒、成り小駒、小駒の順で、
//! 駒打ちは最後。同じ優先度の中では生成順を保つ。

use crate::position::Position;
use crate::types::{Move, PieceKind};

/// 探索する駒の順（駒種, 成り）
pub const SEARCH_ORDER: [(PieceKind, bool); 14] = [
    (PieceKind::King, false),
    (PieceKind::Bishop, true),
    (PieceKind::Rook, true),
    (PieceKind::Rook, false),
    (PieceKind::Bishop, false),
    (PieceKind::Pawn, true),
    (PieceKind::Silver, true),
    (PieceKind::Knight, true),
    (PieceKind::Lance, true),
    (PieceKind::Pawn, false),
    (PieceKind::Silver, false),
    (PieceKind::Knight, false),
    (PieceKind::Gold, false),
    (PieceKind::Lance, false),
];

/// 駒打ちの優先度
const DROP_PRIORITY: usize = SEARCH_ORDER.len();

/// 指し手の優先度（小さいほど先に探索する）
fn priority(pos: &Position, mv: Move) -> usize {
    let Some(piece) = mv.from().and_then(|from| pos.piece_on(from)) else {
        return DROP_PRIORITY;
    };
    SEARCH_ORDER
        .iter()
        .position(|&(kind, promoted)| kind == piece.kind && promoted == piece.promoted)
        .unwrap_or(DROP_PRIORITY)
}

/// 探索順に並べ替える（安定ソート）
pub fn order_moves(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| priority(pos, mv));
}
