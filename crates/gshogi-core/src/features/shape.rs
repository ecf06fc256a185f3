//! 駒の形（悪形のペナルティと好形のボーナス）
//!
//! 「前」「後ろ」「左右」は視点側の手番から見た向き。

use std::collections::HashSet;

use crate::types::{PieceKind, Rank, Square};

use super::FeatureContext;

/// 銀の頭に自分の金がいる
pub(super) fn gold_ahead_silver_penalty(ctx: &FeatureContext) -> i32 {
    let count = ctx
        .own(PieceKind::Silver, false)
        .iter()
        .filter(|sq| {
            ctx.own_piece_at(sq.ahead(ctx.player))
                .is_some_and(|p| p.kind == PieceKind::Gold)
        })
        .count() as i32;
    -count
}

/// 飛車（龍）の上下左右に自分の金がいる
pub(super) fn gold_adjacent_rook_penalty(ctx: &FeatureContext) -> i32 {
    let mut count = 0;
    for rook in ctx.own_any(PieceKind::Rook) {
        let [left, right] = ctx.side_squares(rook);
        for sq in [rook.ahead(ctx.player), rook.behind(ctx.player), left, right] {
            if ctx.has_own_kind(sq, PieceKind::Gold) {
                count += 1;
            }
        }
    }
    -count
}

/// 角（馬）の斜め4方向が自駒で塞がっている
pub(super) fn boxed_in_bishop_penalty(ctx: &FeatureContext) -> i32 {
    let mut corners = 0;
    for bishop in ctx.own_any(PieceKind::Bishop) {
        for (df, dr) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            if ctx.own_piece_at(bishop.offset(df, dr)).is_some() {
                corners += 1;
            }
        }
    }
    -corners
}

/// 歩の前に自駒がいる（銀は除く）
pub(super) fn piece_ahead_of_pawn_penalty(ctx: &FeatureContext) -> i32 {
    let count = ctx
        .own(PieceKind::Pawn, false)
        .iter()
        .filter(|sq| {
            ctx.own_piece_at(sq.ahead(ctx.player))
                .is_some_and(|p| p.kind != PieceKind::Silver)
        })
        .count() as i32;
    -count
}

/// 角の頭に自分の利きがある
pub(super) fn bishop_head_protected(ctx: &FeatureContext) -> i32 {
    ctx.own(PieceKind::Bishop, false)
        .iter()
        .filter_map(|sq| sq.ahead(ctx.player))
        .filter(|&head| ctx.defended(head))
        .count() as i32
}

/// 腰掛け銀: 銀の真後ろと左右いずれかに自分の歩
pub(super) fn reclining_silver(ctx: &FeatureContext) -> i32 {
    ctx.own(PieceKind::Silver, false)
        .iter()
        .filter(|&&silver| {
            let [left, right] = ctx.side_squares(silver);
            ctx.has_own_kind(silver.behind(ctx.player), PieceKind::Pawn)
                && (ctx.has_own_kind(left, PieceKind::Pawn)
                    || ctx.has_own_kind(right, PieceKind::Pawn))
        })
        .count() as i32
}

/// 5段目の自分の歩に利きがある
pub(super) fn claimed_files(ctx: &FeatureContext) -> i32 {
    ctx.pos
        .board_pieces()
        .filter(|&(_, sq, piece)| {
            sq.rank() == Rank::Rank5
                && piece.color == ctx.player
                && piece.kind == PieceKind::Pawn
                && ctx.defended(sq)
        })
        .count() as i32
}

/// 左右に並んだ同種の駒（成っていないもの）の組の数
///
/// 一度組にした相方はそれ以降の起点にしない。
pub(super) fn adjacent_pairs(ctx: &FeatureContext, kind: PieceKind) -> i32 {
    let is_partner = |sq: Option<Square>| {
        ctx.own_piece_at(sq)
            .is_some_and(|p| p.kind == kind && !p.promoted)
    };

    let mut seen = HashSet::new();
    let mut pairs = 0;
    for &sq in ctx.own(kind, false) {
        if seen.contains(&sq) {
            continue;
        }
        let [left, right] = ctx.side_squares(sq);
        if let Some(partner) = left.filter(|_| is_partner(left)) {
            pairs += 1;
            seen.insert(partner);
        } else if let Some(partner) = right.filter(|_| is_partner(right)) {
            pairs += 1;
            seen.insert(partner);
        }
    }
    pairs
}
