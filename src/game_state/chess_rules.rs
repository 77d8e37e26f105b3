//! Canonical chess-rule constants.
//!
//! Starting position plus the fixed castling geometry shared by move
//! generation, the executor, and move construction from clicked squares.

use crate::game_state::chess_types::SpecialMove;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_COL: u8 = 4;
pub const KING_SIDE_ROOK_COL: u8 = 7;
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

/// Column layout of one castle, all on the mover's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_to_col: u8,
    pub rook_from_col: u8,
    pub rook_to_col: u8,
    /// Columns that must be empty.
    pub empty_cols: &'static [u8],
    /// Columns the king stands on, crosses, or lands on; none may be attacked.
    pub safe_cols: &'static [u8],
}

pub const KING_SIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_to_col: 6,
    rook_from_col: KING_SIDE_ROOK_COL,
    rook_to_col: 5,
    empty_cols: &[5, 6],
    safe_cols: &[4, 5, 6],
};

pub const QUEEN_SIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_to_col: 2,
    rook_from_col: QUEEN_SIDE_ROOK_COL,
    rook_to_col: 3,
    empty_cols: &[1, 2, 3],
    safe_cols: &[4, 3, 2],
};

#[inline]
pub fn castle_geometry(special: SpecialMove) -> Option<&'static CastleGeometry> {
    match special {
        SpecialMove::CastleKingSide => Some(&KING_SIDE_CASTLE),
        SpecialMove::CastleQueenSide => Some(&QUEEN_SIDE_CASTLE),
        _ => None,
    }
}
