use super::castle_data::BLACK_CASTLES;
use super::king::distance;
use super::*;
use crate::position::Position;
use crate::testing::{black, position, sq, white};
use crate::types::{Color, Move, Piece, PieceKind, Square};

use PieceKind::*;

fn extractor() -> FeatureExtractor {
    FeatureExtractor::standard().unwrap()
}

fn bishop_exchange() -> Position {
    let mut pos = Position::startpos();
    pos.do_move(Move::normal(sq(7, 7), sq(7, 6), false));
    pos.do_move(Move::normal(sq(3, 3), sq(3, 4), false));
    pos.do_move(Move::normal(sq(8, 8), sq(2, 2), true));
    pos.do_move(Move::normal(sq(3, 1), sq(2, 2), false));
    pos.do_move(Move::normal(sq(2, 7), sq(2, 6), false));
    pos.do_move(Move::drop(Bishop, sq(4, 5)));
    pos
}

#[test]
fn test_startpos_material_is_balanced() {
    let extractor = extractor();
    let pos = Position::startpos();
    let black_view = extractor.extract(&pos, Color::Black);
    let white_view = extractor.extract(&pos, Color::White);

    assert_eq!(black_view.pawn_count, 0);
    for id in [
        FeatureId::LanceValue,
        FeatureId::KnightValue,
        FeatureId::SilverValue,
        FeatureId::BishopValue,
        FeatureId::RookValue,
        FeatureId::GoldValue,
        FeatureId::GoldAndEqvValue,
        FeatureId::PiecesInHand,
        FeatureId::TotalAttacking,
    ] {
        assert_eq!(black_view.get(id), 0, "{id}");
    }

    // 段の進み具合だけは絶対座標のため符号が反転する
    assert_eq!(black_view.get(FeatureId::AggressionBalance), -13);
    assert_eq!(white_view.get(FeatureId::AggressionBalance), 13);
    for id in FeatureId::ALL {
        if id != FeatureId::AggressionBalance {
            assert_eq!(black_view.get(id), white_view.get(id), "{id}");
        }
    }
}

#[test]
fn test_features_mirror_under_color_flip() {
    let extractor = extractor();
    let mut positions = vec![Position::startpos(), bishop_exchange()];
    let mut pos = bishop_exchange();
    pos.do_move(Move::normal(sq(2, 6), sq(2, 5), false));
    pos.do_move(Move::normal(sq(8, 3), sq(8, 4), false));
    positions.push(pos);

    for pos in &positions {
        let flipped = pos.flipped();
        for player in Color::ALL {
            let original = extractor.extract(pos, player);
            let mirrored = extractor.extract(&flipped, player.opponent());
            assert_eq!(original.pawn_count, mirrored.pawn_count);
            for id in FeatureId::ALL {
                if id == FeatureId::AggressionBalance {
                    continue;
                }
                assert_eq!(original.get(id), mirrored.get(id), "{id} ({player:?})");
            }
        }
    }
}

#[test]
fn test_material_and_hand() {
    let pos = position(
        &[
            (sq(5, 9), black(King)),
            (sq(2, 8), black(Rook)),
            (sq(1, 7), black(Pawn)),
            (sq(2, 7), black(Pawn)),
            (sq(5, 1), white(King)),
            (sq(6, 7), Piece::promoted(Pawn, Color::White)),
            (sq(9, 3), white(Pawn)),
        ],
        &[(Color::Black, Pawn, 2), (Color::White, Gold, 1)],
        0,
    );
    let extractor = extractor();

    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.pawn_count, 1);
    assert_eq!(b.get(FeatureId::RookValue), 1);
    assert_eq!(b.get(FeatureId::PromotedPawnBonus), -1);
    assert_eq!(b.get(FeatureId::GoldAndEqvValue), -1);
    assert_eq!(b.get(FeatureId::PawnInHandBonus), 2);
    assert_eq!(b.get(FeatureId::GoldInHandBonus), -1);
    assert_eq!(b.get(FeatureId::PiecesInHand), 2);

    let w = extractor.extract(&pos, Color::White);
    assert_eq!(w.pawn_count, -1);
    assert_eq!(w.get(FeatureId::RookValue), -1);
    assert_eq!(w.get(FeatureId::PromotedPawnBonus), 1);
    assert_eq!(w.get(FeatureId::PawnInHandBonus), -2);
    assert_eq!(w.get(FeatureId::GoldInHandBonus), 1);
    assert_eq!(w.get(FeatureId::PiecesInHand), 1);
}

#[test]
fn test_king_safety_and_attacks() {
    // 先手: 9九玉 5三金 5四歩 / 後手: 5一玉
    let pos = position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, 3), black(Gold)),
            (sq(5, 4), black(Pawn)),
            (sq(5, 1), white(King)),
        ],
        &[],
        0,
    );
    let extractor = extractor();

    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::PlayerKingDefenders), 3);
    assert_eq!(b.get(FeatureId::PlayerKingEscapeRoutes), 3);
    assert_eq!(b.get(FeatureId::PlayerKingThreatPenalty), 0);
    assert_eq!(b.get(FeatureId::EnemyKingAttacks), 3);
    assert_eq!(b.get(FeatureId::EnemyKingAttacksSafe), 3);
    // 先手の利き 3 + 6 + 1、後手の利き 5
    assert_eq!(b.get(FeatureId::TotalAttacking), 5);

    let w = extractor.extract(&pos, Color::White);
    assert_eq!(w.get(FeatureId::PlayerKingDefenders), 5);
    assert_eq!(w.get(FeatureId::PlayerKingEscapeRoutes), 5);
    assert_eq!(w.get(FeatureId::PlayerKingThreatPenalty), -3);
    assert_eq!(w.get(FeatureId::EnemyKingAttacks), 0);
    assert_eq!(w.get(FeatureId::TotalAttacking), -5);
}

#[test]
fn test_unprotected_attacker_is_not_safe() {
    let pos = position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, 3), black(Gold)),
            (sq(5, 1), white(King)),
        ],
        &[],
        0,
    );
    let b = extractor().extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::EnemyKingAttacks), 3);
    assert_eq!(b.get(FeatureId::EnemyKingAttacksSafe), 0);
}

#[test]
fn test_camp_control() {
    // 後手陣の5三金に先手の歩だけが利いている
    let pos = position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, 4), black(Pawn)),
            (sq(1, 1), white(King)),
            (sq(5, 3), white(Gold)),
        ],
        &[],
        0,
    );
    let extractor = extractor();
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::OutCampAttack), 1);
    assert_eq!(b.get(FeatureId::InCampVulnerabilityPenalty), 0);
    let w = extractor.extract(&pos, Color::White);
    assert_eq!(w.get(FeatureId::InCampVulnerabilityPenalty), -1);
    assert_eq!(w.get(FeatureId::OutCampAttack), 0);
}

fn kings() -> [(Square, Piece); 2] {
    [(sq(9, 9), black(King)), (sq(1, 1), white(King))]
}

fn with_kings(pieces: &[(Square, Piece)]) -> Position {
    let mut board = kings().to_vec();
    board.extend_from_slice(pieces);
    position(&board, &[], 0)
}

#[test]
fn test_shape_penalties() {
    let extractor = extractor();

    // 5七銀の頭に5六金、5八の金は数えない
    let pos = with_kings(&[
        (sq(5, 7), black(Silver)),
        (sq(5, 6), black(Gold)),
        (sq(5, 8), black(Gold)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::GoldAheadSilverPenalty), -1);

    // 5八飛の左右と上に金
    let pos = with_kings(&[
        (sq(5, 8), black(Rook)),
        (sq(4, 8), black(Gold)),
        (sq(5, 7), black(Gold)),
        (sq(5, 9), white(Gold)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::GoldAdjacentRookPenalty), -2);

    // 5五角の斜めに自分の歩が2枚、相手の駒は数えない
    let pos = with_kings(&[
        (sq(5, 5), black(Bishop)),
        (sq(4, 4), black(Pawn)),
        (sq(6, 6), black(Pawn)),
        (sq(4, 6), white(Pawn)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::BoxedInBishopPenalty), -2);

    // 5七歩の前に金、4七歩の前の銀は数えない
    let pos = with_kings(&[
        (sq(5, 7), black(Pawn)),
        (sq(5, 6), black(Gold)),
        (sq(4, 7), black(Pawn)),
        (sq(4, 6), black(Silver)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::PieceAheadOfPawnPenalty), -1);
}

#[test]
fn test_shape_bonuses() {
    let extractor = extractor();

    // 8八角の頭8七に7八金が利いている
    let pos = with_kings(&[(sq(8, 8), black(Bishop)), (sq(7, 8), black(Gold))]);
    assert_eq!(
        extractor
            .extract(&pos, Color::Black)
            .get(FeatureId::BishopHeadProtected),
        1
    );
    let pos = with_kings(&[(sq(8, 8), black(Bishop))]);
    assert_eq!(
        extractor
            .extract(&pos, Color::Black)
            .get(FeatureId::BishopHeadProtected),
        0
    );

    // 腰掛け銀: 5六銀、5七歩、4六歩
    let pos = with_kings(&[
        (sq(5, 6), black(Silver)),
        (sq(5, 7), black(Pawn)),
        (sq(4, 6), black(Pawn)),
    ]);
    assert_eq!(
        extractor
            .extract(&pos, Color::Black)
            .get(FeatureId::RecliningSilver),
        1
    );

    // 5五歩に5六金が利いている、3五歩には利きがない
    let pos = with_kings(&[
        (sq(5, 5), black(Pawn)),
        (sq(5, 6), black(Gold)),
        (sq(3, 5), black(Pawn)),
    ]);
    assert_eq!(
        extractor
            .extract(&pos, Color::Black)
            .get(FeatureId::ClaimedFiles),
        1
    );
}

#[test]
fn test_adjacent_pairs() {
    let extractor = extractor();
    let pos = with_kings(&[
        (sq(4, 7), black(Silver)),
        (sq(5, 7), black(Silver)),
        (sq(6, 7), black(Silver)),
        (sq(4, 9), black(Gold)),
        (sq(6, 9), black(Gold)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::AdjacentSilvers), 2);
    assert_eq!(b.get(FeatureId::AdjacentGolds), 0);

    // 成銀は組にならない
    let pos = with_kings(&[
        (sq(4, 7), black(Silver)),
        (sq(5, 7), Piece::promoted(Silver, Color::Black)),
    ]);
    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::AdjacentSilvers), 0);
}

#[test]
fn test_rook_files() {
    // 後手玉8一、先手の飛車7八と9八、9筋には後手の歩
    let pos = position(
        &[
            (sq(5, 9), black(King)),
            (sq(7, 8), black(Rook)),
            (sq(9, 8), black(Rook)),
            (sq(8, 1), white(King)),
            (sq(9, 3), white(Pawn)),
        ],
        &[],
        0,
    );
    let b = extractor().extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::RookAttackKingFile), 0);
    assert_eq!(b.get(FeatureId::RookAttackKingAdjFile), 2);
    assert_eq!(b.get(FeatureId::RookAttackKingAdjFile9821), 1);
    assert_eq!(b.get(FeatureId::RookOpenFile), 1);
    assert_eq!(b.get(FeatureId::RookSemiOpenFile), 1);
    assert_eq!(b.get(FeatureId::RookEnemyCamp), 0);
}

#[test]
fn test_dragon_in_enemy_camp() {
    let pos = with_kings(&[(sq(5, 2), Piece::promoted(Rook, Color::Black))]);
    let b = extractor().extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::RookEnemyCamp), 1);
    assert_eq!(b.get(FeatureId::PromotedRookBonus), 1);
    assert_eq!(b.get(FeatureId::RookValue), 0);
}

#[test]
fn test_mobility_and_blocked_flow() {
    // 5五飛の上方向は5二の後手金で止まり、5三には金が利いている
    let pos = with_kings(&[(sq(5, 5), black(Rook)), (sq(5, 2), white(Gold))]);
    let extractor = extractor();

    let b = extractor.extract(&pos, Color::Black);
    assert_eq!(b.get(FeatureId::RookMobility), 14);
    assert_eq!(b.get(FeatureId::BishopMobility), 0);
    assert_eq!(b.get(FeatureId::BlockedFlow), 0);

    // 後手から見ると、先手の飛車の利きが5二で遮られて5一に届かない
    let w = extractor.extract(&pos, Color::White);
    assert_eq!(w.get(FeatureId::BlockedFlow), 1);
}

#[test]
fn test_distance_formula_is_literal() {
    assert_eq!(distance(sq(5, 9), sq(5, 1)), 3);
    assert_eq!(distance(sq(1, 1), sq(9, 9)), 0);
    assert_eq!(distance(sq(4, 2), sq(5, 1)), 2);
    // 同じ升どうしでも0にならない
    assert_eq!(distance(sq(9, 1), sq(9, 1)), 12);
}

#[test]
fn test_distance_and_aggression() {
    let pos = position(
        &[
            (sq(5, 9), black(King)),
            (sq(4, 2), black(Gold)),
            (sq(7, 7), black(Pawn)),
            (sq(3, 3), black(Silver)),
            (sq(5, 1), white(King)),
        ],
        &[],
        0,
    );
    let extractor = extractor();
    let b = extractor.extract(&pos, Color::Black);
    // 先手: 1 + 8 + 3 + 7、後手: 9 で 10/9 を切り捨て
    assert_eq!(b.get(FeatureId::AggressionBalance), 1);
    let w = extractor.extract(&pos, Color::White);
    assert_eq!(w.get(FeatureId::AggressionBalance), -1);

    // 先手: 5九玉 3 + 4二金 2 + 7七歩 1 + 3三銀 1、後手: 5一玉 3
    assert_eq!(b.get(FeatureId::DistanceToKings), 4);
}

#[test]
fn test_castle_feature_matches_library() {
    let extractor = extractor();
    let library = extractor.castles();

    for (name, hex) in BLACK_CASTLES {
        let pos = Position::from_hex(hex).unwrap();
        let formation = &library.formations(Color::Black)[*name];
        assert_eq!(
            extractor
                .extract(&pos, Color::Black)
                .get(FeatureId::CastleFormation),
            formation.piece_count() as i32,
            "{name}"
        );

        // 玉だけでは一致なし
        let king_only = position(&[(formation.king(), black(King))], &[], 0);
        assert_eq!(
            extractor
                .extract(&king_only, Color::Black)
                .get(FeatureId::CastleFormation),
            0,
            "{name}"
        );
    }
}
