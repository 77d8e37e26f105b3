use crate::game_state::{chess_types::*, game_state::GameState};

/// Turn an attack set into moves for the piece on `from`, skipping squares
/// held by the mover and recording whatever enemy piece stands on a target.
#[inline]
pub fn push_targets(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: u64,
    out: &mut Vec<Move>,
) {
    let reachable = targets & !game_state.board.occupancy(piece.color);
    for to in squares_of(reachable) {
        let captured = game_state.board.piece_at(to);
        out.push(Move::new(from, to, piece, captured, SpecialMove::None));
    }
}
