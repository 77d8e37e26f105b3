//! Skill-1 random-move engine.
//!
//! Selects uniformly from legal moves and is mostly used for diagnostics,
//! integration testing, and low-strength play.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::iterative_deepening::seeded_rng;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Knightfall Random"
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        legal_moves: &[Move],
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        let mut rng = seeded_rng(params.seed);
        out.best_move = legal_moves.choose(&mut rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;

    #[test]
    fn picks_a_legal_move_and_repeats_under_a_seed() {
        let game = GameState::new_game();
        let legal = game.legal_moves();
        let params = GoParams {
            seed: Some(9),
            ..GoParams::default()
        };
        let mut engine = RandomEngine::new();

        let first = engine
            .choose_move(&game, &legal, &params)
            .expect("random engine does not fail");
        let second = engine
            .choose_move(&game, &legal, &params)
            .expect("random engine does not fail");

        let mv = first.best_move.expect("start position has moves");
        assert!(legal.contains(&mv));
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn empty_move_list_gives_no_move() {
        let game = GameState::new_game();
        let out = RandomEngine::new()
            .choose_move(&game, &[], &GoParams::default())
            .expect("random engine does not fail");
        assert_eq!(out.best_move, None);
    }
}
