//! 対局のテスト

use crate::eval::{Heuristic, WeightedEvaluator};
use crate::features::{FeatureConfig, FeatureExtractor, FeatureSet};
use crate::position::Position;
use crate::search::{SearchAgent, SearchConfig};
use crate::testing::{black, position, sq, white};
use crate::types::{Color, PieceKind};

use super::*;

use PieceKind::*;

fn flat_agent(color: Color, seed: u64) -> SearchAgent {
    let set = FeatureSet::new(&FeatureConfig::default()).unwrap();
    let weights = vec![0; set.len()];
    let config = SearchConfig {
        depth: 1,
        seed: Some(seed),
        ..SearchConfig::default()
    };
    SearchAgent::new(
        color,
        Heuristic::new(
            FeatureExtractor::standard().unwrap(),
            WeightedEvaluator::new(set, &weights).unwrap(),
        ),
        config,
    )
}

fn game(pos: Position) -> Game<SearchAgent, SearchAgent> {
    Game::new(pos, flat_agent(Color::Black, 1), flat_agent(Color::White, 2))
}

#[test]
fn test_gote_without_moves_loses() {
    // 後手玉5一は5二金・5三歩で詰んでいる
    let pos = position(
        &[
            (sq(5, 1), white(King)),
            (sq(5, 2), black(Gold)),
            (sq(5, 3), black(Pawn)),
            (sq(9, 9), black(King)),
        ],
        &[],
        1,
    );
    let mut game = game(pos);
    assert_eq!(game.play(100), MatchOutcome::SenteWin);
    assert!(game.moves().is_empty());
}

#[test]
fn test_sente_without_moves_loses() {
    let pos = position(
        &[
            (sq(5, 9), black(King)),
            (sq(5, 8), white(Gold)),
            (sq(5, 7), white(Pawn)),
            (sq(1, 1), white(King)),
        ],
        &[],
        0,
    );
    assert_eq!(game(pos).play(100), MatchOutcome::GoteWin);
}

#[test]
fn test_round_limit_is_undetermined() {
    let mut game = game(Position::startpos());
    assert_eq!(game.play(0), MatchOutcome::Undetermined);
    assert!(game.moves().is_empty());

    assert_eq!(game.play(4), MatchOutcome::Undetermined);
    assert_eq!(game.moves().len(), 4);
    assert_eq!(game.position().round(), 4);
    assert_eq!(game.sente().history().count(), 2);
    assert_eq!(game.gote().history().count(), 2);
}

#[test]
fn test_organism_game_rejects_bad_weights() {
    let n = FeatureSet::new(&FeatureConfig::default()).unwrap().len();
    let good = vec![1; n];
    let err = OrganismGame::new(&good, &[1, 2], 10, 1).unwrap_err();
    assert!(matches!(
        err,
        GameError::Weights {
            color: Color::White,
            ..
        }
    ));
}

#[test]
fn test_organism_game_simulates_from_startpos() {
    let n = FeatureSet::new(&FeatureConfig::default()).unwrap().len();
    let search = SearchConfig {
        depth: 1,
        seed: Some(3),
        ..SearchConfig::default()
    };
    let mut game = OrganismGame::with_config(
        &vec![1; n],
        &vec![0; n],
        6,
        &FeatureConfig::default(),
        search,
    )
    .unwrap();
    assert_eq!(game.simulate(), MatchOutcome::Undetermined);
}
