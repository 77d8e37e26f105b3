//! Skill levels mapped to concrete engines.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;

pub fn build_engine(skill_level: u8) -> ChessResult<Box<dyn Engine>> {
    let engine: Box<dyn Engine> = match skill_level {
        1 => Box::new(RandomEngine::new()),
        2 => Box::new(GreedyEngine::new()),
        3 => Box::new(IterativeEngine::new_material(2)),
        4 => Box::new(IterativeEngine::new_standard(2)),
        5 => Box::new(IterativeEngine::new_material(3)),
        6 => Box::new(IterativeEngine::new_standard(3)),
        7 => Box::new(IterativeEngine::new_standard(4)),
        8 => Box::new(IterativeEngine::new_endgame(4)),
        9 => Box::new(IterativeEngine::new_standard(5)),
        10 => Box::new(IterativeEngine::new_endgame(5)),
        other => {
            return Err(ChessError::InvalidConfig(format!(
                "skill level {other} outside {MIN_SKILL_LEVEL}..={MAX_SKILL_LEVEL}"
            )))
        }
    };
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::{build_engine, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};
    use crate::chess_errors::ChessError;
    use crate::engines::engine_trait::GoParams;
    use crate::game_state::game_state::GameState;

    #[test]
    fn every_skill_level_builds_and_plays_a_legal_move() {
        let game = GameState::new_game();
        let legal = game.legal_moves();
        let params = GoParams {
            depth: Some(1),
            seed: Some(11),
            ..GoParams::default()
        };

        for skill in MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL {
            let mut engine = build_engine(skill).expect("skill in range");
            assert!(!engine.name().is_empty());
            let out = engine
                .choose_move(&game, &legal, &params)
                .expect("engines do not fail on the start position");
            assert!(legal.contains(&out.best_move.expect("start position has moves")));
        }
    }

    #[test]
    fn out_of_range_skill_is_a_config_error() {
        assert!(matches!(build_engine(0), Err(ChessError::InvalidConfig(_))));
        assert!(matches!(build_engine(11), Err(ChessError::InvalidConfig(_))));
    }
}
