//! 評価ハーネスのテスト

use crate::features::{FeatureConfig, FeatureId, FeatureSet};
use crate::position::Position;
use crate::testing::{black, position, sq, white};
use crate::types::{Color, Move, PieceKind};

use super::*;

use PieceKind::*;

/// 先手5五飛が後手の金（5筋の `rank` 段）を取れる局面
fn gold_on_file(rank: i32) -> Position {
    position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, 5), black(Rook)),
            (sq(1, 1), white(King)),
            (sq(5, rank), white(Gold)),
        ],
        &[],
        0,
    )
}

fn capture(rank: i32) -> (Move, Position) {
    let mv = Move::normal(sq(5, 5), sq(5, rank), false);
    let result = position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, rank), black(Rook)),
            (sq(1, 1), white(King)),
        ],
        &[(Color::Black, Gold, 1)],
        1,
    );
    (mv, result)
}

fn sidestep(rank: i32) -> (Move, Position) {
    let mv = Move::normal(sq(5, 5), sq(4, 5), false);
    let result = position(
        &[
            (sq(9, 9), black(King)),
            (sq(4, 5), black(Rook)),
            (sq(1, 1), white(King)),
            (sq(5, rank), white(Gold)),
        ],
        &[],
        1,
    );
    (mv, result)
}

/// 先手が金を持ち、5二に打つ局面
fn gold_in_hand() -> Position {
    position(
        &[(sq(9, 9), black(King)), (sq(1, 1), white(King))],
        &[(Color::Black, Gold, 1)],
        0,
    )
}

fn gold_drop() -> (Move, Position) {
    let mv = Move::drop(Gold, sq(5, 2));
    let result = position(
        &[
            (sq(9, 9), black(King)),
            (sq(5, 2), black(Gold)),
            (sq(1, 1), white(King)),
        ],
        &[],
        1,
    );
    (mv, result)
}

fn king_step() -> (Move, Position) {
    let mv = Move::normal(sq(9, 9), sq(9, 8), false);
    let result = position(
        &[(sq(9, 8), black(King)), (sq(1, 1), white(King))],
        &[(Color::Black, Gold, 1)],
        1,
    );
    (mv, result)
}

fn insert(table: &mut LegalMoveTable, board: &Position, actions: &[(Move, Position)]) {
    table
        .insert(
            &board.to_hex(),
            actions.iter().map(|(mv, result)| (mv.raw() as i32, result.to_hex())),
        )
        .unwrap();
}

fn record(board: &Position, expert: Move) -> Record {
    Record::new(board.to_hex(), expert.raw() as i32)
}

const RANKS: [i32; 4] = [1, 2, 3, 4];

/// 学習用: 金を取る4局面と金を打つ1局面、評価用: 金を取る2局面
fn training_data() -> TrainingData {
    let mut legal_moves = LegalMoveTable::new();
    let mut train = Vec::new();
    for rank in RANKS {
        let board = gold_on_file(rank);
        insert(&mut legal_moves, &board, &[sidestep(rank), capture(rank)]);
        train.push(record(&board, capture(rank).0));
    }
    insert(&mut legal_moves, &gold_in_hand(), &[gold_drop(), king_step()]);
    train.push(record(&gold_in_hand(), gold_drop().0));

    let test = vec![
        record(&gold_on_file(2), capture(2).0),
        record(&gold_on_file(3), capture(3).0),
    ];
    TrainingData {
        train,
        test,
        legal_moves,
    }
}

fn harness(config: HarnessConfig) -> OrganismEvaluator {
    OrganismEvaluator::new(training_data(), &FeatureConfig::default(), config).unwrap()
}

/// 金の価値と、それより少し安い持ち駒の金だけを持つ重みベクトル
fn gold_weights(harness: &OrganismEvaluator, value: i32) -> Vec<i32> {
    let set = FeatureSet::new(&FeatureConfig::default()).unwrap();
    let mut weights = vec![0; harness.num_features()];
    weights[set.position(FeatureId::GoldValue).unwrap()] = value;
    weights[set.position(FeatureId::GoldInHandBonus).unwrap()] = -value / 5;
    weights
}

#[test]
fn test_single_action_table_scores_n_squared() {
    let mut legal_moves = LegalMoveTable::new();
    let mut train = Vec::new();
    for rank in RANKS {
        let board = gold_on_file(rank);
        insert(&mut legal_moves, &board, &[capture(rank)]);
        train.push(record(&board, capture(rank).0));
    }
    let data = TrainingData {
        train,
        test: Vec::new(),
        legal_moves,
    };
    let mut harness =
        OrganismEvaluator::new(data, &FeatureConfig::default(), HarnessConfig::default()).unwrap();

    let ones = vec![1; harness.num_features()];
    assert_eq!(harness.evaluate_organism(&ones).unwrap(), 16);
    assert_eq!(harness.stats().total_correct, 4);
    assert_eq!(harness.stats().total_positions, 4);
}

#[test]
fn test_uniquely_best_expert_moves() {
    let mut harness = harness(HarnessConfig::default());
    let weights = gold_weights(&harness, 500);

    // 取った金は持ち駒、打った金は盤上の価値になる
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 25);
    let stats = *harness.stats();
    assert_eq!(stats.total_correct, 5);
    assert_eq!((stats.drop_total, stats.drop_correct), (1, 1));
    assert_eq!(stats.cache_misses, 10);
    assert_eq!(stats.cache_hits, 0);
}

#[test]
fn test_wrong_preference_scores_zero() {
    let mut harness = harness(HarnessConfig::default());
    let weights = gold_weights(&harness, -500);

    // 金を取らずに横へ逃げる。金打ちは盤上に金を置かず玉を動かす
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 0);
    let stats = *harness.stats();
    assert_eq!(stats.total_correct, 0);
    assert_eq!(stats.missed_drop_other_square, 1);
}

#[test]
fn test_warm_pass_reads_cache() {
    let mut harness = harness(HarnessConfig::default());
    let weights = gold_weights(&harness, 500);

    let first = harness.evaluate_organism(&weights).unwrap();
    assert_eq!(harness.cache().len(), 10);

    let second = harness.evaluate_organism(&weights).unwrap();
    assert_eq!(first, second);
    assert_eq!(harness.stats().cache_hits, 10);
    assert_eq!(harness.stats().cache_misses, 0);
}

#[test]
fn test_mode_switch_clears_cache() {
    let mut harness = harness(HarnessConfig::default());
    let weights = gold_weights(&harness, 500);

    harness.evaluate_organism(&weights).unwrap();
    harness.evaluate_organism(&weights).unwrap();
    assert_eq!(harness.stats().cache_misses, 0);

    // 評価用の局面は学習用と同じだが、キャッシュは引き継がない
    harness.set_mode(EvalMode::Test);
    assert!(harness.cache().is_empty());
    assert_eq!(harness.num_eval(), 2);
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 4);
    assert_eq!(harness.stats().cache_misses, 4);
    assert_eq!(harness.stats().cache_hits, 0);

    harness.set_mode(EvalMode::Train);
    assert_eq!(harness.num_eval(), 2);
    harness.evaluate_organism(&weights).unwrap();
    assert_eq!(harness.stats().cache_misses, 4);
}

#[test]
fn test_train_drops_mode() {
    let mut harness = harness(HarnessConfig::default());
    harness.set_mode_str("train_drops").unwrap();
    assert_eq!(harness.mode(), EvalMode::TrainDrops);
    assert_eq!(harness.num_eval(), 1);

    let weights = gold_weights(&harness, 500);
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 1);
    assert_eq!(harness.stats().drop_correct, 1);
}

#[test]
fn test_num_eval_bounds() {
    let mut harness = harness(HarnessConfig::default());
    assert_eq!(harness.num_eval(), 5);

    assert!(matches!(
        harness.set_num_eval(0),
        Err(HarnessError::ZeroPositions)
    ));
    let err = harness.set_num_eval(6).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::NotEnoughPositions {
            mode: EvalMode::Train,
            requested: 6,
            available: 5
        }
    ));
    assert!(err.to_string().starts_with("Not enough positions available in train data"));

    harness.set_num_eval(3).unwrap();
    let weights = gold_weights(&harness, 500);
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 9);

    // 局面数を増やすと、キャッシュにない局面を含むので再び埋める
    harness.set_num_eval(5).unwrap();
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 25);
    assert_eq!(harness.stats().cache_hits, 6);
    assert_eq!(harness.stats().cache_misses, 4);
}

#[test]
fn test_config_num_eval_is_validated() {
    let config = HarnessConfig {
        num_eval: Some(10),
        ..HarnessConfig::default()
    };
    let result = OrganismEvaluator::new(training_data(), &FeatureConfig::default(), config);
    assert!(matches!(
        result,
        Err(HarnessError::NotEnoughPositions { .. })
    ));
}

#[test]
fn test_unknown_mode() {
    let mut harness = harness(HarnessConfig::default());
    let err = harness.set_mode_str("validation").unwrap_err();
    assert!(matches!(err, HarnessError::UnknownMode(ref m) if m == "validation"));
    assert_eq!(harness.mode(), EvalMode::Train);
    assert_eq!("test".parse::<EvalMode>().unwrap(), EvalMode::Test);
    assert_eq!(EvalMode::TrainDrops.to_string(), "train_drops");
}

#[test]
fn test_weight_length_mismatch() {
    let mut harness = harness(HarnessConfig::default());
    let result = harness.evaluate_organism(&[1, 2, 3]);
    assert!(matches!(result, Err(HarnessError::Eval(_))));
}

#[test]
fn test_missing_legal_moves_counted() {
    let mut data = training_data();
    data.test.push(record(&Position::startpos(), Move::normal(sq(7, 7), sq(7, 6), false)));
    let mut harness =
        OrganismEvaluator::new(data, &FeatureConfig::default(), HarnessConfig::default()).unwrap();
    harness.set_mode(EvalMode::Test);

    let weights = gold_weights(&harness, 500);
    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 4);
    assert_eq!(harness.stats().missing_legal_moves, 1);
    assert_eq!(harness.stats().total_positions, 3);
}

#[test]
fn test_corrupt_records_rejected() {
    let mut data = training_data();
    data.train.push(Record::new("ZZ", 0));
    let result = OrganismEvaluator::new(data, &FeatureConfig::default(), HarnessConfig::default());
    assert!(matches!(result, Err(HarnessError::Board { .. })));

    let mut data = training_data();
    data.train.push(Record::new(gold_on_file(2).to_hex(), -4));
    let result = OrganismEvaluator::new(data, &FeatureConfig::default(), HarnessConfig::default());
    assert!(matches!(result, Err(HarnessError::Move { raw: -4, .. })));
}

#[test]
fn test_evaluation_is_deterministic() {
    let config = HarnessConfig {
        num_eval: Some(5),
        ..HarnessConfig::default()
    };
    let mut a = harness(config.clone());
    let mut b = harness(config);
    let ones = vec![1; a.num_features()];
    for _ in 0..3 {
        assert_eq!(
            a.evaluate_organism(&ones).unwrap(),
            b.evaluate_organism(&ones).unwrap()
        );
        assert_eq!(a.stats().total_correct, b.stats().total_correct);
    }
}

#[test]
fn test_feature_accessors() {
    let harness = harness(HarnessConfig::default());
    let set = FeatureSet::new(&FeatureConfig::default()).unwrap();
    assert_eq!(harness.num_features(), set.len());
    assert_eq!(harness.num_major_features(), set.n_major());
    assert_eq!(harness.feature_labels()[0], "LANCE_VALUE");
}

#[test]
fn test_children_come_from_applied_moves() {
    let board = gold_on_file(2);
    let (take, taken) = capture(2);
    let (side, sided) = sidestep(2);

    // 指した後の局面を入れ違えた表
    let mut legal_moves = LegalMoveTable::new();
    insert(&mut legal_moves, &board, &[(take, sided), (side, taken.clone())]);
    assert_eq!(legal_moves.mismatched(), 2);

    let data = TrainingData {
        train: vec![record(&board, take)],
        test: Vec::new(),
        legal_moves,
    };
    let mut harness =
        OrganismEvaluator::new(data, &FeatureConfig::default(), HarnessConfig::default()).unwrap();
    let weights = gold_weights(&harness, 500);

    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 1);
    let mut next = board.clone();
    next.do_move(take);
    assert_eq!(next.key(), taken.key());
    assert!(harness.cache().get(&next.key()).is_some());

    assert_eq!(harness.evaluate_organism(&weights).unwrap(), 1);
    assert_eq!(harness.stats().cache_hits, 2);
}

#[test]
fn test_inapplicable_legal_move_rejected() {
    let board = gold_on_file(2);
    // 空き升から動かす手
    let bad = Move::normal(sq(6, 6), sq(6, 5), false);
    let mut legal_moves = LegalMoveTable::new();
    let err = legal_moves
        .insert(&board.to_hex(), [(bad.raw() as i32, board.to_hex())])
        .unwrap_err();
    assert!(matches!(err, HarnessError::Move { .. }));
    assert!(legal_moves.is_empty());
}
