//! Build a `Move` from two clicked squares and the current board.
//!
//! The result is only a candidate: callers look it up in the legal-move set.
//! Specials are inferred from geometry: a king stepping two files castles, a
//! pawn moving diagonally onto an empty square captures en passant, and a
//! pawn reaching its last rank promotes (to a queen unless told otherwise).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn make_move_from_squares(start: Square, end: Square, board: &Board) -> ChessResult<Move> {
    make_move_from_squares_with_promotion(start, end, board, PieceKind::Queen)
}

pub fn make_move_from_squares_with_promotion(
    start: Square,
    end: Square,
    board: &Board,
    promotion: PieceKind,
) -> ChessResult<Move> {
    let moved = board.piece_at(start).ok_or(ChessError::NoPieceOnSquare(start))?;
    let mut captured = board.piece_at(end);
    let mut special = SpecialMove::None;

    match moved.kind {
        PieceKind::King if start.row() == end.row() && start.col().abs_diff(end.col()) == 2 => {
            special = if end.col() > start.col() {
                SpecialMove::CastleKingSide
            } else {
                SpecialMove::CastleQueenSide
            };
        }
        PieceKind::Pawn => {
            if end.row() == moved.color.promotion_row() {
                special = SpecialMove::Promotion(promotion);
            } else if start.col() != end.col() && captured.is_none() {
                special = SpecialMove::EnPassantCapture;
                captured = Square::new(start.row(), end.col()).and_then(|sq| board.piece_at(sq));
            }
        }
        _ => {}
    }

    Ok(Move::new(start, end, moved, captured, special))
}
