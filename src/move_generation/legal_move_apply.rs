//! In-place move executor.
//!
//! `make_move_unchecked` applies a move assumed to be legal (generated by this
//! crate) and pushes an `UndoState`; `undo_move_unchecked` pops it and reverts
//! every effect. Public callers go through `GameState::make_move`, which
//! validates against the legal-move set first.

use crate::game_state::chess_rules::{castle_geometry, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};

pub(crate) fn make_move_unchecked(game_state: &mut GameState, mv: Move) {
    let mover = mv.piece_moved().color;
    let from = mv.start();
    let to = mv.end();

    let undo = UndoState {
        mv,
        captured: None,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_target: game_state.en_passant_target,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    let board = &mut game_state.board;
    let moved = board.remove(from).unwrap_or(mv.piece_moved());

    let capture_square = match mv.special() {
        SpecialMove::EnPassantCapture => Square::new(from.row(), to.col()),
        _ => Some(to),
    };
    let captured = capture_square.and_then(|sq| board.remove(sq).map(|piece| (sq, piece)));

    let placed = match mv.special() {
        SpecialMove::Promotion(kind) => Piece::new(mover, kind),
        _ => moved,
    };
    board.put(to, placed);

    if let Some(geometry) = castle_geometry(mv.special()) {
        let row = mover.back_rank();
        if let (Some(rook_from), Some(rook_to)) = (
            Square::new(row, geometry.rook_from_col),
            Square::new(row, geometry.rook_to_col),
        ) {
            if let Some(rook) = board.remove(rook_from) {
                board.put(rook_to, rook);
            }
        }
    }

    update_castling_rights(game_state, moved, from, to);

    game_state.en_passant_target =
        if moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Square::new((from.row() + to.row()) / 2, from.col())
        } else {
            None
        };

    if moved.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
    game_state.checkmate = false;
    game_state.stalemate = false;
    game_state.move_log.push(mv);
    game_state.undo_stack.push(UndoState { captured, ..undo });
}

/// Revert the latest move; `None` when nothing is left to undo.
pub(crate) fn undo_move_unchecked(game_state: &mut GameState) -> Option<Move> {
    let undo = game_state.undo_stack.pop()?;
    game_state.move_log.pop();

    let mv = undo.mv;
    let mover = mv.piece_moved().color;
    let board = &mut game_state.board;

    board.remove(mv.end());
    board.put(mv.start(), mv.piece_moved());

    if let Some(geometry) = castle_geometry(mv.special()) {
        let row = mover.back_rank();
        if let (Some(rook_from), Some(rook_to)) = (
            Square::new(row, geometry.rook_from_col),
            Square::new(row, geometry.rook_to_col),
        ) {
            if let Some(rook) = board.remove(rook_to) {
                board.put(rook_from, rook);
            }
        }
    }

    if let Some((square, piece)) = undo.captured {
        board.put(square, piece);
    }

    game_state.side_to_move = mover;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_target = undo.prev_en_passant_target;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.checkmate = false;
    game_state.stalemate = false;

    Some(mv)
}

/// A king move drops both of its side's rights; any move from or onto a
/// rook's home corner drops that corner's right.
fn update_castling_rights(game_state: &mut GameState, moved: Piece, from: Square, to: Square) {
    if moved.kind == PieceKind::King {
        game_state
            .castling_rights
            .remove(CastlingRights::king_side_flag(moved.color));
        game_state
            .castling_rights
            .remove(CastlingRights::queen_side_flag(moved.color));
    }

    for square in [from, to] {
        for color in [Color::White, Color::Black] {
            if square.row() != color.back_rank() {
                continue;
            }
            if square.col() == KING_SIDE_ROOK_COL {
                game_state
                    .castling_rights
                    .remove(CastlingRights::king_side_flag(color));
            } else if square.col() == QUEEN_SIDE_ROOK_COL {
                game_state
                    .castling_rights
                    .remove(CastlingRights::queen_side_flag(color));
            }
        }
    }
}
