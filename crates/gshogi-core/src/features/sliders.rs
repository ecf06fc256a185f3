//! 飛車・角の配置と働き

use crate::position::reachable_squares;
use crate::types::{PieceKind, Rank, Square};

use super::FeatureContext;

/// 敵陣にいる飛車（龍）
pub(super) fn rook_enemy_camp(ctx: &FeatureContext) -> i32 {
    ctx.own_any(PieceKind::Rook)
        .filter(|sq| sq.rank().can_promote(ctx.player))
        .count() as i32
}

/// 飛車と相手玉の筋の関係
///
/// 戻り値は (同じ筋, 隣の筋, 端玉の内側の筋)。端玉は 9・8 筋または 2・1 筋にいる玉。
pub(super) fn rook_king_files(ctx: &FeatureContext) -> (i32, i32, i32) {
    let Some(king) = ctx.pos.king_square(ctx.opponent) else {
        return (0, 0, 0);
    };
    let king_file = king.file().number();

    let (mut same, mut adjacent, mut edge) = (0, 0, 0);
    for rook in ctx.own_any(PieceKind::Rook) {
        let rook_file = rook.file().number();
        if rook_file == king_file {
            same += 1;
        }
        if (rook_file - king_file).abs() == 1 {
            adjacent += 1;
        }
        let inside = match king_file {
            8 | 9 => king_file - rook_file == 1,
            1 | 2 => rook_file - king_file == 1,
            _ => false,
        };
        if inside {
            edge += 1;
        }
    }
    (same, adjacent, edge)
}

/// 筋が開いている飛車と、相手の駒が1枚だけある筋の飛車
pub(super) fn rook_open_files(ctx: &FeatureContext) -> (i32, i32) {
    let (mut open, mut semi_open) = (0, 0);
    for rook in ctx.own_any(PieceKind::Rook) {
        let mut on_file = 0;
        let mut owned = 0;
        for rank in Rank::ALL {
            let sq = Square::new(rook.file(), rank);
            if sq == rook {
                continue;
            }
            if let Some(piece) = ctx.pos.piece_on(sq) {
                on_file += 1;
                if piece.color == ctx.player {
                    owned += 1;
                }
            }
        }
        if on_file == 0 {
            open += 1;
        }
        if on_file == 1 && owned == 0 {
            semi_open += 1;
        }
    }
    (open, semi_open)
}

/// 駒種（成り含む）の移動先のうち、相手の利きがない升の数
pub(super) fn safe_mobility(ctx: &FeatureContext, kind: PieceKind) -> i32 {
    let mut safe = 0;
    for from in ctx.own_any(kind) {
        let Some(piece) = ctx.pos.piece_on(from) else {
            continue;
        };
        safe += reachable_squares(ctx.pos, from, piece)
            .into_iter()
            .filter(|&to| !ctx.attacks.is_attacked(ctx.opponent, to))
            .count() as i32;
    }
    safe
}

/// 相手の飛び利きのうち遮られているものの数
pub(super) fn blocked_flow(ctx: &FeatureContext) -> i32 {
    Square::all()
        .map(|sq| ctx.attacks.blocked_flow(ctx.opponent, sq).len() as i32)
        .sum()
}
