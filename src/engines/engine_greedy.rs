//! Skill-2 engine: take the most valuable piece on offer, else move at random.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::MaterialScorer;
use crate::search::iterative_deepening::seeded_rng;

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn capture_value(mv: &Move) -> i32 {
        mv.piece_captured()
            .map_or(0, |victim| MaterialScorer::piece_value(victim.kind))
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Knightfall Greedy"
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        legal_moves: &[Move],
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        let Some(best_value) = legal_moves.iter().map(Self::capture_value).max() else {
            return Ok(out);
        };
        let best_moves: Vec<Move> = legal_moves
            .iter()
            .copied()
            .filter(|mv| Self::capture_value(mv) == best_value)
            .collect();

        let mut rng = seeded_rng(params.seed);
        out.best_move = best_moves.choose(&mut rng).copied();
        out.info_lines.push(format!(
            "info string greedy_engine capture_score {best_value}"
        ));
        Ok(out)
    }
}
