//! 登録特徴量の並びとリンク表
//!
//! 並び順が重みベクトルとの唯一の対応付けであり、メジャー特徴量
//! （最適化器側で長いビット幅を割り当てるもの）を先に並べる。

use super::{FeatureConfig, FeatureError, FeatureId, RawFeatures};

/// 最適化器側のビット幅区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Major,
    Minor,
}

/// 登録時のリンク指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// 固定の歩の価値
    PawnValue,
    /// 先に登録された特徴量
    Feature(FeatureId),
}

/// 解決済みのリンク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    PawnValue,
    Index(usize),
}

/// 特徴量1つ分の登録内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub id: FeatureId,
    pub tier: Tier,
    pub link: Option<LinkTarget>,
}

impl FeatureSpec {
    pub const fn major(id: FeatureId) -> FeatureSpec {
        FeatureSpec {
            id,
            tier: Tier::Major,
            link: None,
        }
    }

    pub const fn minor(id: FeatureId) -> FeatureSpec {
        FeatureSpec {
            id,
            tier: Tier::Minor,
            link: None,
        }
    }

    pub const fn linked(id: FeatureId, target: LinkTarget) -> FeatureSpec {
        FeatureSpec {
            id,
            tier: Tier::Major,
            link: Some(target),
        }
    }
}

/// 登録された特徴量の並び
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    ids: Vec<FeatureId>,
    tiers: Vec<Tier>,
    links: Vec<Option<Link>>,
    n_major: usize,
    pawn_value: i32,
}

impl FeatureSet {
    /// 設定に従って標準の並びを登録する
    pub fn new(config: &FeatureConfig) -> Result<FeatureSet, FeatureError> {
        use FeatureId::*;
        use LinkTarget::{Feature, PawnValue};

        let mut specs = vec![
            FeatureSpec::major(LanceValue),
            FeatureSpec::major(KnightValue),
            FeatureSpec::major(SilverValue),
            FeatureSpec::major(BishopValue),
            FeatureSpec::major(RookValue),
        ];

        if config.group_promotions {
            specs.push(FeatureSpec::major(GoldAndEqvValue));
        } else {
            specs.extend([
                FeatureSpec::major(GoldValue),
                FeatureSpec::linked(PromotedPawnBonus, PawnValue),
                FeatureSpec::linked(PromotedLanceBonus, Feature(LanceValue)),
                FeatureSpec::linked(PromotedKnightBonus, Feature(KnightValue)),
                FeatureSpec::linked(PromotedSilverBonus, Feature(SilverValue)),
            ]);
        }
        specs.extend([
            FeatureSpec::linked(PromotedBishopBonus, Feature(BishopValue)),
            FeatureSpec::linked(PromotedRookBonus, Feature(RookValue)),
        ]);

        if config.in_hand_bonus {
            specs.extend([
                FeatureSpec::linked(PawnInHandBonus, PawnValue),
                FeatureSpec::linked(LanceInHandBonus, Feature(LanceValue)),
                FeatureSpec::linked(KnightInHandBonus, Feature(KnightValue)),
                FeatureSpec::linked(SilverInHandBonus, Feature(SilverValue)),
                FeatureSpec::linked(BishopInHandBonus, Feature(BishopValue)),
                FeatureSpec::linked(RookInHandBonus, Feature(RookValue)),
                FeatureSpec::linked(GoldInHandBonus, Feature(GoldValue)),
            ]);
        } else {
            specs.push(FeatureSpec::minor(PiecesInHand));
        }

        specs.extend(
            [
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
            ]
            .map(FeatureSpec::minor),
        );

        FeatureSet::from_specs(specs, config.pawn_value)
    }

    /// 任意の並びを登録する
    ///
    /// リンク先はそれより前に登録された特徴量でなければならない。
    pub fn from_specs(
        specs: impl IntoIterator<Item = FeatureSpec>,
        pawn_value: i32,
    ) -> Result<FeatureSet, FeatureError> {
        let mut set = FeatureSet {
            ids: Vec::new(),
            tiers: Vec::new(),
            links: Vec::new(),
            n_major: 0,
            pawn_value,
        };

        for spec in specs {
            if set.ids.contains(&spec.id) {
                return Err(FeatureError::Duplicate(spec.id.name()));
            }
            let link = match spec.link {
                None => None,
                Some(LinkTarget::PawnValue) => Some(Link::PawnValue),
                Some(LinkTarget::Feature(target)) => {
                    let index = set.position(target).ok_or(FeatureError::UnresolvedLink {
                        feature: spec.id.name(),
                        target: target.name(),
                    })?;
                    Some(Link::Index(index))
                }
            };
            if spec.tier == Tier::Major {
                set.n_major += 1;
            }
            set.ids.push(spec.id);
            set.tiers.push(spec.tier);
            set.links.push(link);
        }

        Ok(set)
    }

    /// 登録数
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// メジャー特徴量の数
    #[inline]
    pub fn n_major(&self) -> usize {
        self.n_major
    }

    /// 歩の固定価値
    #[inline]
    pub fn pawn_value(&self) -> i32 {
        self.pawn_value
    }

    /// 登録順の識別子
    #[inline]
    pub fn ids(&self) -> &[FeatureId] {
        &self.ids
    }

    /// 登録順の名前
    pub fn labels(&self) -> Vec<&'static str> {
        self.ids.iter().map(|id| id.name()).collect()
    }

    #[inline]
    pub fn tier(&self, index: usize) -> Tier {
        self.tiers[index]
    }

    #[inline]
    pub fn link(&self, index: usize) -> Option<Link> {
        self.links[index]
    }

    /// 識別子の登録位置
    pub fn position(&self, id: FeatureId) -> Option<usize> {
        self.ids.iter().position(|&x| x == id)
    }

    /// 生の特徴量を登録順のベクトルにする
    pub fn project(&self, raw: &RawFeatures) -> Vec<i32> {
        self.ids.iter().map(|&id| raw.get(id)).collect()
    }
}
