//! Engine abstraction layer used by the search worker and the game session.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

/// Per-search limits. `None` leaves the engine's own default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub nodes: Option<u64>,
    /// Seed for any random choice the engine makes.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one of `legal_moves` for `game_state`, or `None` when the list
    /// is empty.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
