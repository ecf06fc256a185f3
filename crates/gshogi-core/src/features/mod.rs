//! 特徴量
//!
//! 局面と利きから、指定した手番（`player`）の視点で約35個の整数特徴量を計算する。
//!
//! - `FeatureId`: 計算できる全特徴量の列挙。値は `RawFeatures` の固定長配列の添字
//! - `FeatureSet`: 設定に応じて登録された特徴量の並び。重みベクトルとの対応、
//!   メジャー/マイナーの区分、リンク表を持つ
//! - `FeatureExtractor`: 特徴量の計算（囲いライブラリを保持する）
//!
//! 個々の特徴量は `(FeatureContext) -> i32` の純関数として実装する。
//! ペナルティ系の特徴量は負の値、ボーナス系は正の値を返す。

mod castle;
mod castle_data;
mod context;
mod extractor;
mod king;
mod material;
mod set;
mod shape;
mod sliders;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::position::EncodingError;

pub use castle::{CastleLibrary, Formation};
pub use context::FeatureContext;
pub use extractor::FeatureExtractor;
pub use set::{FeatureSet, FeatureSpec, Link, LinkTarget, Tier};

/// 特徴量の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FeatureId {
    LanceValue,
    KnightValue,
    SilverValue,
    BishopValue,
    RookValue,
    GoldValue,
    GoldAndEqvValue,
    PromotedPawnBonus,
    PromotedLanceBonus,
    PromotedKnightBonus,
    PromotedSilverBonus,
    PromotedBishopBonus,
    PromotedRookBonus,
    PawnInHandBonus,
    LanceInHandBonus,
    KnightInHandBonus,
    SilverInHandBonus,
    BishopInHandBonus,
    RookInHandBonus,
    GoldInHandBonus,
    PiecesInHand,
    PlayerKingDefenders,
    PlayerKingEscapeRoutes,
    PlayerKingThreatPenalty,
    InCampVulnerabilityPenalty,
    OutCampAttack,
    CastleFormation,
    GoldAheadSilverPenalty,
    GoldAdjacentRookPenalty,
    BoxedInBishopPenalty,
    PieceAheadOfPawnPenalty,
    BishopHeadProtected,
    RecliningSilver,
    ClaimedFiles,
    AdjacentSilvers,
    AdjacentGolds,
    RookEnemyCamp,
    RookAttackKingFile,
    RookAttackKingAdjFile,
    RookAttackKingAdjFile9821,
    RookOpenFile,
    RookSemiOpenFile,
    BishopMobility,
    RookMobility,
    BlockedFlow,
    AggressionBalance,
    EnemyKingAttacks,
    EnemyKingAttacksSafe,
    TotalAttacking,
    DistanceToKings,
}

impl FeatureId {
    /// 特徴量の種類数
    pub const COUNT: usize = 50;

    /// 全特徴量（識別子の順）
    pub const ALL: [FeatureId; Self::COUNT] = [
        FeatureId::LanceValue,
        FeatureId::KnightValue,
        FeatureId::SilverValue,
        FeatureId::BishopValue,
        FeatureId::RookValue,
        FeatureId::GoldValue,
        FeatureId::GoldAndEqvValue,
        FeatureId::PromotedPawnBonus,
        FeatureId::PromotedLanceBonus,
        FeatureId::PromotedKnightBonus,
        FeatureId::PromotedSilverBonus,
        FeatureId::PromotedBishopBonus,
        FeatureId::PromotedRookBonus,
        FeatureId::PawnInHandBonus,
        FeatureId::LanceInHandBonus,
        FeatureId::KnightInHandBonus,
        FeatureId::SilverInHandBonus,
        FeatureId::BishopInHandBonus,
        FeatureId::RookInHandBonus,
        FeatureId::GoldInHandBonus,
        FeatureId::PiecesInHand,
        FeatureId::PlayerKingDefenders,
        FeatureId::PlayerKingEscapeRoutes,
        FeatureId::PlayerKingThreatPenalty,
        FeatureId::InCampVulnerabilityPenalty,
        FeatureId::OutCampAttack,
        FeatureId::CastleFormation,
        FeatureId::GoldAheadSilverPenalty,
        FeatureId::GoldAdjacentRookPenalty,
        FeatureId::BoxedInBishopPenalty,
        FeatureId::PieceAheadOfPawnPenalty,
        FeatureId::BishopHeadProtected,
        FeatureId::RecliningSilver,
        FeatureId::ClaimedFiles,
        FeatureId::AdjacentSilvers,
        FeatureId::AdjacentGolds,
        FeatureId::RookEnemyCamp,
        FeatureId::RookAttackKingFile,
        FeatureId::RookAttackKingAdjFile,
        FeatureId::RookAttackKingAdjFile9821,
        FeatureId::RookOpenFile,
        FeatureId::RookSemiOpenFile,
        FeatureId::BishopMobility,
        FeatureId::RookMobility,
        FeatureId::BlockedFlow,
        FeatureId::AggressionBalance,
        FeatureId::EnemyKingAttacks,
        FeatureId::EnemyKingAttacksSafe,
        FeatureId::TotalAttacking,
        FeatureId::DistanceToKings,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 外部（最適化器・重みファイル）と共有する名前
    pub const fn name(self) -> &'static str {
        match self {
            FeatureId::LanceValue => "LANCE_VALUE",
            FeatureId::KnightValue => "KNIGHT_VALUE",
            FeatureId::SilverValue => "SILVER_VALUE",
            FeatureId::BishopValue => "BISHOP_VALUE",
            FeatureId::RookValue => "ROOK_VALUE",
            FeatureId::GoldValue => "GOLD_VALUE",
            FeatureId::GoldAndEqvValue => "GOLD_AND_EQV_VALUE",
            FeatureId::PromotedPawnBonus => "PROMOTED_PAWN_BONUS",
            FeatureId::PromotedLanceBonus => "PROMOTED_LANCE_BONUS",
            FeatureId::PromotedKnightBonus => "PROMOTED_KNIGHT_BONUS",
            FeatureId::PromotedSilverBonus => "PROMOTED_SILVER_BONUS",
            FeatureId::PromotedBishopBonus => "PROMOTED_BISHOP_BONUS",
            FeatureId::PromotedRookBonus => "PROMOTED_ROOK_BONUS",
            FeatureId::PawnInHandBonus => "PAWN_IN_HAND_BONUS",
            FeatureId::LanceInHandBonus => "LANCE_IN_HAND_BONUS",
            FeatureId::KnightInHandBonus => "KNIGHT_IN_HAND_BONUS",
            FeatureId::SilverInHandBonus => "SILVER_IN_HAND_BONUS",
            FeatureId::BishopInHandBonus => "BISHOP_IN_HAND_BONUS",
            FeatureId::RookInHandBonus => "ROOK_IN_HAND_BONUS",
            FeatureId::GoldInHandBonus => "GOLD_IN_HAND_BONUS",
            FeatureId::PiecesInHand => "PIECES_IN_HAND",
            FeatureId::PlayerKingDefenders => "PLAYER_KING_DEFENDERS",
            FeatureId::PlayerKingEscapeRoutes => "PLAYER_KING_ESCAPE_ROUTES",
            FeatureId::PlayerKingThreatPenalty => "PLAYER_KING_THREAT_PENALTY",
            FeatureId::InCampVulnerabilityPenalty => "IN_CAMP_VULNERABILITY_PENALTY",
            FeatureId::OutCampAttack => "OUT_CAMP_ATTACK",
            FeatureId::CastleFormation => "CASTLE_FORMATION",
            FeatureId::GoldAheadSilverPenalty => "GOLD_AHEAD_SILVER_PENALTY",
            FeatureId::GoldAdjacentRookPenalty => "GOLD_ADJACENT_ROOK_PENALTY",
            FeatureId::BoxedInBishopPenalty => "BOXED_IN_BISHOP_PENALTY",
            FeatureId::PieceAheadOfPawnPenalty => "PIECE_AHEAD_OF_PAWN_PENALTY",
            FeatureId::BishopHeadProtected => "BISHOP_HEAD_PROTECTED",
            FeatureId::RecliningSilver => "RECLINING_SILVER",
            FeatureId::ClaimedFiles => "CLAIMED_FILES",
            FeatureId::AdjacentSilvers => "ADJACENT_SILVERS",
            FeatureId::AdjacentGolds => "ADJACENT_GOLDS",
            FeatureId::RookEnemyCamp => "ROOK_ENEMY_CAMP",
            FeatureId::RookAttackKingFile => "ROOK_ATTACK_KING_FILE",
            FeatureId::RookAttackKingAdjFile => "ROOK_ATTACK_KING_ADJ_FILE",
            FeatureId::RookAttackKingAdjFile9821 => "ROOK_ATTACK_KING_ADJ_FILE_9821",
            FeatureId::RookOpenFile => "ROOK_OPEN_FILE",
            FeatureId::RookSemiOpenFile => "ROOK_SEMI_OPEN_FILE",
            FeatureId::BishopMobility => "BISHOP_MOBILITY",
            FeatureId::RookMobility => "ROOK_MOBILITY",
            FeatureId::BlockedFlow => "BLOCKED_FLOW",
            FeatureId::AggressionBalance => "AGGRESSION_BALANCE",
            FeatureId::EnemyKingAttacks => "ENEMY_KING_ATTACKS",
            FeatureId::EnemyKingAttacksSafe => "ENEMY_KING_ATTACKS_SAFE",
            FeatureId::TotalAttacking => "TOTAL_ATTACKING",
            FeatureId::DistanceToKings => "DISTANCE_TO_KINGS",
        }
    }

    /// 名前から識別子を引く
    pub fn from_name(name: &str) -> Option<FeatureId> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 1局面・1手番分の生の特徴量
///
/// 登録の有無にかかわらず全特徴量を計算して保持する。
/// 歩の枚数差は重みを持たないため別に持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFeatures {
    pub pawn_count: i32,
    pub values: [i32; FeatureId::COUNT],
}

impl RawFeatures {
    /// 全て0の特徴量
    pub const ZERO: RawFeatures = RawFeatures {
        pawn_count: 0,
        values: [0; FeatureId::COUNT],
    };

    #[inline]
    pub fn get(&self, id: FeatureId) -> i32 {
        self.values[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: FeatureId, value: i32) {
        self.values[id.index()] = value;
    }
}

impl Default for RawFeatures {
    fn default() -> Self {
        RawFeatures::ZERO
    }
}

/// 特徴量の登録方法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// 歩1枚の固定価値（歩の枚数差とリンク先 PAWN_VALUE に使う）
    pub pawn_value: i32,
    /// 金と成り小駒をまとめて GOLD_AND_EQV_VALUE にする
    pub group_promotions: bool,
    /// 持ち駒を駒種ごとのボーナスにする（false なら PIECES_IN_HAND の1つ）
    pub in_hand_bonus: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            pawn_value: 100,
            group_promotions: false,
            in_hand_bonus: true,
        }
    }
}

/// 特徴量まわりのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Cannot link {feature} to {target}: {target} does not exist")]
    UnresolvedLink {
        feature: &'static str,
        target: &'static str,
    },

    #[error("feature {0} is registered twice")]
    Duplicate(&'static str),

    #[error("castle formation {name} is not a valid position: {source}")]
    CastleEncoding {
        name: String,
        #[source]
        source: EncodingError,
    },

    #[error("castle formation {name} has no king")]
    CastleWithoutKing { name: String },
}
