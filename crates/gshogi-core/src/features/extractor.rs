//! 特徴量の計算

use std::sync::Arc;

use crate::position::{AttackIndex, Position};
use crate::types::{Color, PieceKind};

use super::{
    CastleLibrary, FeatureContext, FeatureError, FeatureId, RawFeatures, king, material, shape,
    sliders,
};

/// 局面から全特徴量を計算する
///
/// 囲いライブラリは共有され、構築後は読み取り専用。
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    castles: Arc<CastleLibrary>,
}

impl FeatureExtractor {
    pub fn new(castles: Arc<CastleLibrary>) -> FeatureExtractor {
        FeatureExtractor { castles }
    }

    /// 組み込みの囲いライブラリを使う
    pub fn standard() -> Result<FeatureExtractor, FeatureError> {
        Ok(FeatureExtractor::new(Arc::new(CastleLibrary::standard()?)))
    }

    #[inline]
    pub fn castles(&self) -> &CastleLibrary {
        &self.castles
    }

    /// `player` 視点の特徴量
    pub fn extract(&self, pos: &Position, player: Color) -> RawFeatures {
        let attacks = AttackIndex::compute(pos);
        self.extract_with(pos, &attacks, player)
    }

    /// 計算済みの利きを使って `player` 視点の特徴量を求める
    pub fn extract_with(&self, pos: &Position, attacks: &AttackIndex, player: Color) -> RawFeatures {
        use FeatureId::*;

        let ctx = FeatureContext::new(pos, attacks, player);
        let mut out = RawFeatures::ZERO;

        material::material(&ctx, &mut out);
        material::material_in_hand(&ctx, &mut out);

        let safety = king::king_safety(&ctx);
        out.set(PlayerKingDefenders, safety.defenders);
        out.set(PlayerKingEscapeRoutes, safety.escape_routes);
        out.set(PlayerKingThreatPenalty, safety.threat_penalty);

        let (vulnerable, attacking) = king::controlled_squares(&ctx);
        out.set(InCampVulnerabilityPenalty, vulnerable);
        out.set(OutCampAttack, attacking);

        out.set(CastleFormation, self.castles.feature(&ctx));

        out.set(GoldAheadSilverPenalty, shape::gold_ahead_silver_penalty(&ctx));
        out.set(GoldAdjacentRookPenalty, shape::gold_adjacent_rook_penalty(&ctx));
        out.set(BoxedInBishopPenalty, shape::boxed_in_bishop_penalty(&ctx));
        out.set(PieceAheadOfPawnPenalty, shape::piece_ahead_of_pawn_penalty(&ctx));
        out.set(BishopHeadProtected, shape::bishop_head_protected(&ctx));
        out.set(RecliningSilver, shape::reclining_silver(&ctx));
        out.set(ClaimedFiles, shape::claimed_files(&ctx));
        out.set(AdjacentSilvers, shape::adjacent_pairs(&ctx, PieceKind::Silver));
        out.set(AdjacentGolds, shape::adjacent_pairs(&ctx, PieceKind::Gold));

        out.set(RookEnemyCamp, sliders::rook_enemy_camp(&ctx));
        let (same, adjacent, edge) = sliders::rook_king_files(&ctx);
        out.set(RookAttackKingFile, same);
        out.set(RookAttackKingAdjFile, adjacent);
        out.set(RookAttackKingAdjFile9821, edge);
        let (open, semi_open) = sliders::rook_open_files(&ctx);
        out.set(RookOpenFile, open);
        out.set(RookSemiOpenFile, semi_open);
        out.set(BishopMobility, sliders::safe_mobility(&ctx, PieceKind::Bishop));
        out.set(RookMobility, sliders::safe_mobility(&ctx, PieceKind::Rook));
        out.set(BlockedFlow, sliders::blocked_flow(&ctx));

        out.set(AggressionBalance, king::aggression_balance(&ctx));
        let (attacks_on_king, safe) = king::king_attack(&ctx);
        out.set(EnemyKingAttacks, attacks_on_king);
        out.set(EnemyKingAttacksSafe, safe);
        out.set(TotalAttacking, king::total_attacking(&ctx));
        out.set(DistanceToKings, king::distance_to_kings(&ctx));

        out
    }
}
