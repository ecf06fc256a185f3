//! 玉の安全度・陣地の支配・攻めの量

use crate::position::Location;
use crate::types::Square;

use super::FeatureContext;

/// 玉周りの安全度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct KingSafety {
    pub defenders: i32,
    pub escape_routes: i32,
    pub threat_penalty: i32,
}

/// 玉とその周囲の升
fn king_zone(king: Square) -> impl Iterator<Item = Square> {
    king.neighbors().chain(std::iter::once(king))
}

/// 視点側の玉の周囲（玉の升を含む）の守り・逃げ道・脅威
pub(super) fn king_safety(ctx: &FeatureContext) -> KingSafety {
    let Some(king) = ctx.pos.king_square(ctx.player) else {
        return KingSafety::default();
    };

    let mut safety = KingSafety::default();
    for sq in king_zone(king) {
        if ctx.pos.is_empty(sq) {
            safety.escape_routes += 1;
        }
        safety.threat_penalty -= ctx.attacks.count(ctx.opponent, sq) as i32;
        safety.defenders += ctx.attacks.count(ctx.player, sq) as i32;
    }
    safety
}

/// 自陣で守りより攻めの利きが多い自駒の数（負）と、
/// 敵陣で守りより攻めの利きが多い相手駒の数
pub(super) fn controlled_squares(ctx: &FeatureContext) -> (i32, i32) {
    let mut vulnerable = 0;
    let mut attacking = 0;
    for (_, sq, piece) in ctx.pos.board_pieces() {
        let rank = sq.rank();
        let ours = ctx.attacks.count(ctx.player, sq);
        let theirs = ctx.attacks.count(ctx.opponent, sq);
        if piece.color == ctx.player && rank.in_home_camp(ctx.player) && theirs > ours {
            vulnerable += 1;
        }
        if piece.color == ctx.opponent && rank.in_home_camp(ctx.opponent) && ours > theirs {
            attacking += 1;
        }
    }
    (-vulnerable, attacking)
}

/// 相手玉とその周囲への利きの数と、そのうち利いている駒自身に味方の利きがあるもの
pub(super) fn king_attack(ctx: &FeatureContext) -> (i32, i32) {
    let Some(king) = ctx.pos.king_square(ctx.opponent) else {
        return (0, 0);
    };

    let mut attacks = 0;
    let mut safe = 0;
    for sq in king_zone(king) {
        for entry in ctx.attacks.attackers(ctx.player, sq) {
            attacks += 1;
            if let Location::Board(from) = ctx.pos.record(entry.attacker).location
                && ctx.defended(from)
            {
                safe += 1;
            }
        }
    }
    (attacks, safe)
}

/// 盤全体の利きの数の差（視点側 - 相手側）
pub(super) fn total_attacking(ctx: &FeatureContext) -> i32 {
    Square::all()
        .map(|sq| {
            ctx.attacks.count(ctx.player, sq) as i32 - ctx.attacks.count(ctx.opponent, sq) as i32
        })
        .sum()
}

/// 段の進み具合の差
///
/// 駒ごとに `(10 - 段) / 9` を足し合わせた差を最後に整数へ切り捨てる。
/// 段は絶対座標（先手から見た段）のまま使う。
pub(super) fn aggression_balance(ctx: &FeatureContext) -> i32 {
    let mut ninths = 0;
    for (_, sq, piece) in ctx.pos.board_pieces() {
        let progress = 10 - sq.rank().number();
        if piece.color == ctx.player {
            ninths += progress;
        } else {
            ninths -= progress;
        }
    }
    // 整数除算は0方向への切り捨てなので、小数の和を int にキャストするのと一致する
    ninths / 9
}

/// 2升の「距離」
///
/// 各升の (筋 - 段) の2乗和を10で割ったもの。升どうしの差ではないが、
/// 学習済みの重みとの互換のためこの式のまま使う。
pub(super) fn distance(a: Square, b: Square) -> i32 {
    let da = a.file().number() - a.rank().number();
    let db = b.file().number() - b.rank().number();
    (da * da + db * db) / 10
}

/// 視点側の駒から相手玉までの距離の和 - 相手の駒から視点側の玉までの距離の和
pub(super) fn distance_to_kings(ctx: &FeatureContext) -> i32 {
    let (Some(own_king), Some(enemy_king)) = (
        ctx.pos.king_square(ctx.player),
        ctx.pos.king_square(ctx.opponent),
    ) else {
        return 0;
    };

    ctx.pos
        .board_pieces()
        .map(|(_, sq, piece)| {
            if piece.color == ctx.player {
                distance(sq, enemy_king)
            } else {
                -distance(sq, own_king)
            }
        })
        .sum()
}
