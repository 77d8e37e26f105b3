use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let pawn = Piece::new(side, PieceKind::Pawn);
    let board = &game_state.board;
    let enemy_occ = board.occupancy(side.opposite());

    for from in squares_of(board.pieces(side, PieceKind::Pawn)) {
        // Pushes
        if let Some(one_step) = from.offset(side.forward(), 0) {
            if board.is_empty(one_step) {
                push_pawn_move(from, one_step, pawn, None, out);

                if from.row() == side.pawn_start_row() {
                    if let Some(two_step) = one_step.offset(side.forward(), 0) {
                        if board.is_empty(two_step) {
                            out.push(Move::new(from, two_step, pawn, None, SpecialMove::None));
                        }
                    }
                }
            }
        }

        // Captures
        let captures = pawn_attacks(side, from);
        for to in squares_of(captures & enemy_occ) {
            push_pawn_move(from, to, pawn, board.piece_at(to), out);
        }

        // En passant: the target square is empty, the victim sits beside us.
        if let Some(target) = game_state.en_passant_target {
            if captures & target.bit() != 0 {
                out.push(Move::new(
                    from,
                    target,
                    pawn,
                    Some(Piece::new(side.opposite(), PieceKind::Pawn)),
                    SpecialMove::EnPassantCapture,
                ));
            }
        }
    }
}

/// Push a single pawn step or capture, fanning out into one move per
/// promotion choice on the last rank.
fn push_pawn_move(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    out: &mut Vec<Move>,
) {
    if to.row() == pawn.color.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::new(from, to, pawn, captured, SpecialMove::Promotion(kind)));
        }
    } else {
        out.push(Move::new(from, to, pawn, captured, SpecialMove::None));
    }
}
