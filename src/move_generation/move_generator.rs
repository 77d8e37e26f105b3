use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

/// Source of legal moves for a position.
///
/// The rules engine has one implementation; the trait is the seam perft and
/// tests use to swap in scripted generators.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
