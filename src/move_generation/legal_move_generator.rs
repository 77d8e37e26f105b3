//! Full legal move generation pipeline.
//!
//! Collects piece-wise pseudo-legal moves, then keeps only those that do not
//! leave the mover's own king attacked. The check is done by making each
//! candidate on a scratch state, testing the king square against raw enemy
//! attacks, and undoing it.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_unchecked, undo_move_unchecked};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        legal_moves(game_state)
    }
}

/// Geometry-only moves for the side to move; may leave its king in check.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_slider_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

/// Legal moves of the side to move. Order carries no meaning.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut scratch = game_state.clone();
    legal_moves_in_place(&mut scratch)
}

/// Legal moves computed with make/undo on `game_state` itself; the state is
/// restored before returning. Used by search to avoid a clone per node.
pub fn legal_moves_in_place(game_state: &mut GameState) -> Vec<Move> {
    let mover = game_state.side_to_move;
    let pseudo = pseudo_legal_moves(game_state);

    let mut legal = Vec::<Move>::with_capacity(pseudo.len());
    for mv in pseudo {
        make_move_unchecked(game_state, mv);
        let exposes_king = is_king_in_check(game_state, mover);
        undo_move_unchecked(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}
