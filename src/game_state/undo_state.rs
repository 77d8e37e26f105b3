use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Piece removed by the move and the square it stood on (differs from
    /// the destination for en passant).
    pub captured: Option<(Square, Piece)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
