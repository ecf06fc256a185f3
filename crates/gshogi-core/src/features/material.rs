//! 駒割り（盤上の駒と持ち駒）

use crate::types::PieceKind;

use super::{FeatureContext, FeatureId, RawFeatures};

/// 盤上の駒の枚数差（玉を除く）
///
/// 成っていない歩の枚数差は重みを持たず `pawn_count` に入る。
pub(super) fn material(ctx: &FeatureContext, out: &mut RawFeatures) {
    use PieceKind::*;

    out.pawn_count = ctx.count_diff(Pawn, false);

    out.set(FeatureId::LanceValue, ctx.count_diff(Lance, false));
    out.set(FeatureId::KnightValue, ctx.count_diff(Knight, false));
    out.set(FeatureId::SilverValue, ctx.count_diff(Silver, false));
    out.set(FeatureId::BishopValue, ctx.count_diff(Bishop, false));
    out.set(FeatureId::RookValue, ctx.count_diff(Rook, false));
    out.set(FeatureId::GoldValue, ctx.count_diff(Gold, false));

    out.set(FeatureId::PromotedPawnBonus, ctx.count_diff(Pawn, true));
    out.set(FeatureId::PromotedLanceBonus, ctx.count_diff(Lance, true));
    out.set(FeatureId::PromotedKnightBonus, ctx.count_diff(Knight, true));
    out.set(FeatureId::PromotedSilverBonus, ctx.count_diff(Silver, true));
    out.set(FeatureId::PromotedBishopBonus, ctx.count_diff(Bishop, true));
    out.set(FeatureId::PromotedRookBonus, ctx.count_diff(Rook, true));

    let gold_movers = ctx.count_diff(Gold, false)
        + [Pawn, Lance, Knight, Silver]
            .iter()
            .map(|&k| ctx.count_diff(k, true))
            .sum::<i32>();
    out.set(FeatureId::GoldAndEqvValue, gold_movers);
}

/// 持ち駒
///
/// 駒種ごとのボーナスは枚数差。PIECES_IN_HAND は視点側の持ち駒の総数。
pub(super) fn material_in_hand(ctx: &FeatureContext, out: &mut RawFeatures) {
    let diff = |kind: PieceKind| {
        ctx.pos.hand_count(ctx.player, kind) as i32 - ctx.pos.hand_count(ctx.opponent, kind) as i32
    };

    out.set(FeatureId::PawnInHandBonus, diff(PieceKind::Pawn));
    out.set(FeatureId::LanceInHandBonus, diff(PieceKind::Lance));
    out.set(FeatureId::KnightInHandBonus, diff(PieceKind::Knight));
    out.set(FeatureId::SilverInHandBonus, diff(PieceKind::Silver));
    out.set(FeatureId::BishopInHandBonus, diff(PieceKind::Bishop));
    out.set(FeatureId::RookInHandBonus, diff(PieceKind::Rook));
    out.set(FeatureId::GoldInHandBonus, diff(PieceKind::Gold));

    let total: usize = PieceKind::HAND
        .iter()
        .map(|&k| ctx.pos.hand_count(ctx.player, k))
        .sum();
    out.set(FeatureId::PiecesInHand, total as i32);
}
