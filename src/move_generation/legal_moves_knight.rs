use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::leaper_attacks::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let piece = Piece::new(game_state.side_to_move, PieceKind::Knight);
    for from in squares_of(game_state.board.pieces(piece.color, piece.kind)) {
        push_targets(game_state, from, piece, knight_attacks(from), out);
    }
}
