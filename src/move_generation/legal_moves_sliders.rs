//! Bishop, rook, and queen pseudo-legal moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::slider_attacks::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_slider_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let occupancy = game_state.board.occupied();

    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        let piece = Piece::new(side, kind);
        for from in squares_of(game_state.board.pieces(side, kind)) {
            let targets = match kind {
                PieceKind::Bishop => bishop_attacks(from, occupancy),
                PieceKind::Rook => rook_attacks(from, occupancy),
                _ => queen_attacks(from, occupancy),
            };
            push_targets(game_state, from, piece, targets, out);
        }
    }
}
