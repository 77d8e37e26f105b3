use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, EndgameTaperedScorer, MaterialScorer, StandardScorer};
use crate::search::iterative_deepening::{find_best_move, SearchConfig};

/// Deepest search a `go depth` request may ask for.
pub const MAX_SEARCH_DEPTH: u8 = 12;

pub struct IterativeEngine<S: BoardScorer> {
    name: String,
    default_depth: u8,
    default_nodes: u64,
    scorer: S,
}

impl<S: BoardScorer> IterativeEngine<S> {
    pub fn with_scorer(name: &str, scorer: S, default_depth: u8) -> Self {
        Self {
            name: name.to_owned(),
            default_depth: default_depth.clamp(1, MAX_SEARCH_DEPTH),
            default_nodes: SearchConfig::default().max_nodes,
            scorer,
        }
    }

    fn search_config(&self, params: &GoParams) -> SearchConfig {
        SearchConfig {
            max_depth: params
                .depth
                .unwrap_or(self.default_depth)
                .clamp(1, MAX_SEARCH_DEPTH),
            max_nodes: params.nodes.unwrap_or(self.default_nodes),
            movetime_ms: params.movetime_ms,
            seed: params.seed,
        }
    }
}

impl IterativeEngine<MaterialScorer> {
    pub fn new_material(default_depth: u8) -> Self {
        Self::with_scorer("Knightfall Material", MaterialScorer, default_depth)
    }
}

impl IterativeEngine<StandardScorer> {
    pub fn new_standard(default_depth: u8) -> Self {
        Self::with_scorer("Knightfall Standard", StandardScorer, default_depth)
    }
}

impl IterativeEngine<EndgameTaperedScorer> {
    pub fn new_endgame(default_depth: u8) -> Self {
        Self::with_scorer("Knightfall Endgame", EndgameTaperedScorer, default_depth)
    }
}

impl<S: BoardScorer> Engine for IterativeEngine<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = self.search_config(params);
        let result = find_best_move(game_state, legal_moves, &self.scorer, &config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: result.info_lines,
        };
        out.info_lines.push(format!(
            "info string iterative_engine max_depth {} reached_depth {} nodes {} time {}",
            config.max_depth, result.reached_depth, result.nodes, result.elapsed_ms
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::IterativeEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;

    #[test]
    fn go_depth_overrides_the_default() {
        let game = GameState::new_game();
        let legal = game.legal_moves();
        let mut engine = IterativeEngine::new_standard(4);
        let out = engine
            .choose_move(
                &game,
                &legal,
                &GoParams {
                    depth: Some(1),
                    seed: Some(5),
                    ..GoParams::default()
                },
            )
            .expect("search does not fail");

        assert!(legal.contains(&out.best_move.expect("start position has moves")));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("max_depth 1 reached_depth 1")));
    }

    #[test]
    fn finds_mate_with_every_scorer() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN");
        let legal = game.legal_moves();
        let params = GoParams {
            seed: Some(2),
            ..GoParams::default()
        };

        let picks = [
            IterativeEngine::new_material(2).choose_move(&game, &legal, &params),
            IterativeEngine::new_standard(2).choose_move(&game, &legal, &params),
            IterativeEngine::new_endgame(2).choose_move(&game, &legal, &params),
        ];
        for pick in picks {
            let out = pick.expect("search does not fail");
            assert_eq!(out.best_move.map(|mv| mv.to_string()), Some("a1a8".to_owned()));
        }
    }
}
