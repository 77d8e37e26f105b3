//! Terminal position detection.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Classify a position given its legal-move set.
pub fn classify(game_state: &GameState, legal_moves: &[Move]) -> GameStatus {
    if !legal_moves.is_empty() {
        return GameStatus::Ongoing;
    }
    if is_king_in_check(game_state, game_state.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

/// Classify a position, generating its legal moves first.
pub fn classify_position(game_state: &GameState) -> GameStatus {
    classify(game_state, &legal_moves(game_state))
}
