//! 対局
//!
//! 2つのエージェントに交互に指させ、合法手がなくなった側の負けとする。
//! 手数の上限に達したら勝敗なし。

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::eval::{EvalError, Heuristic, WeightedEvaluator};
use crate::features::{FeatureConfig, FeatureError, FeatureExtractor, FeatureSet};
use crate::position::Position;
use crate::search::{Decision, SearchAgent, SearchConfig};
use crate::types::{Color, Move};

/// 局面を見て手を決める側
pub trait Agent {
    fn color(&self) -> Color;

    fn choose(&mut self, pos: &Position) -> Decision;
}

impl Agent for SearchAgent {
    fn color(&self) -> Color {
        SearchAgent::color(self)
    }

    fn choose(&mut self, pos: &Position) -> Decision {
        SearchAgent::choose(self, pos)
    }
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn color(&self) -> Color {
        (**self).color()
    }

    fn choose(&mut self, pos: &Position) -> Decision {
        (**self).choose(pos)
    }
}

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    SenteWin,
    GoteWin,
    /// 手数の上限に達した
    Undetermined,
}

impl MatchOutcome {
    /// `color` の勝ち
    pub const fn win_for(color: Color) -> MatchOutcome {
        match color {
            Color::Black => MatchOutcome::SenteWin,
            Color::White => MatchOutcome::GoteWin,
        }
    }
}

/// 1局の対局
#[derive(Debug)]
pub struct Game<S, G> {
    pos: Position,
    sente: S,
    gote: G,
    moves: Vec<Move>,
}

impl<S: Agent, G: Agent> Game<S, G> {
    pub fn new(pos: Position, sente: S, gote: G) -> Game<S, G> {
        debug_assert_eq!(sente.color(), Color::Black);
        debug_assert_eq!(gote.color(), Color::White);
        Game {
            pos,
            sente,
            gote,
            moves: Vec::new(),
        }
    }

    /// 手数が `max_round` に達するまで指し進める
    pub fn play(&mut self, max_round: u16) -> MatchOutcome {
        while self.pos.round() < max_round {
            let side = self.pos.side_to_move();
            let decision = match side {
                Color::Black => self.sente.choose(&self.pos),
                Color::White => self.gote.choose(&self.pos),
            };
            match decision {
                Decision::Play(mv) => {
                    log::debug!("{}: {:?} {}", self.pos.round() + 1, side, mv);
                    self.pos.do_move(mv);
                    self.moves.push(mv);
                }
                Decision::Forfeit => {
                    let outcome = MatchOutcome::win_for(side.opponent());
                    log::info!(
                        "{:?} has no legal moves at round {}: {:?}",
                        side,
                        self.pos.round(),
                        outcome
                    );
                    return outcome;
                }
            }
        }
        log::info!("round limit {} reached", max_round);
        MatchOutcome::Undetermined
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// これまでに指された手
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn sente(&self) -> &S {
        &self.sente
    }

    pub fn gote(&self) -> &G {
        &self.gote
    }
}

/// 重みベクトル同士の対局の構築エラー
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("{color:?} weights: {source}")]
    Weights {
        color: Color,
        #[source]
        source: EvalError,
    },

    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// 2つの重みベクトルの対局（1つ目が先手）
#[derive(Debug)]
pub struct OrganismGame {
    sente: SearchAgent,
    gote: SearchAgent,
    max_round: u16,
}

impl OrganismGame {
    pub fn new(
        sente: &[i32],
        gote: &[i32],
        max_round: u16,
        depth: u32,
    ) -> Result<OrganismGame, GameError> {
        let search = SearchConfig {
            depth,
            ..SearchConfig::default()
        };
        Self::with_config(sente, gote, max_round, &FeatureConfig::default(), search)
    }

    pub fn with_config(
        sente: &[i32],
        gote: &[i32],
        max_round: u16,
        features: &FeatureConfig,
        search: SearchConfig,
    ) -> Result<OrganismGame, GameError> {
        let set = FeatureSet::new(features)?;
        let extractor = FeatureExtractor::standard()?;

        let agent = |color: Color, weights: &[i32], seed: Option<u64>| {
            let evaluator = WeightedEvaluator::new(set.clone(), weights)
                .map_err(|source| GameError::Weights { color, source })?;
            let config = SearchConfig {
                seed,
                ..search.clone()
            };
            Ok::<_, GameError>(SearchAgent::new(
                color,
                Heuristic::new(extractor.clone(), evaluator),
                config,
            ))
        };

        // 両者が同じ乱数列にならないようにシードをずらす
        let gote_seed = search.seed.map(|s| s.wrapping_add(1));
        Ok(OrganismGame {
            sente: agent(Color::Black, sente, search.seed)?,
            gote: agent(Color::White, gote, gote_seed)?,
            max_round,
        })
    }

    /// 平手から1局指す
    pub fn simulate(&mut self) -> MatchOutcome {
        let mut game = Game::new(Position::startpos(), &mut self.sente, &mut self.gote);
        game.play(self.max_round)
    }
}
