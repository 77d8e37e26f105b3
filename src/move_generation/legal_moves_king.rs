use crate::game_state::chess_rules::{
    CastleGeometry, KING_HOME_COL, KING_SIDE_CASTLE, QUEEN_SIDE_CASTLE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::leaper_attacks::king_attacks;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let Some(from) = game_state.board.king_square(side) else {
        return;
    };

    let king = Piece::new(side, PieceKind::King);
    push_targets(game_state, from, king, king_attacks(from), out);
    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let row = side.back_rank();
    if king_from.row() != row || king_from.col() != KING_HOME_COL {
        return;
    }

    let rights = game_state.castling_rights;
    let options = [
        (
            CastlingRights::king_side_flag(side),
            &KING_SIDE_CASTLE,
            SpecialMove::CastleKingSide,
        ),
        (
            CastlingRights::queen_side_flag(side),
            &QUEEN_SIDE_CASTLE,
            SpecialMove::CastleQueenSide,
        ),
    ];

    for (flag, geometry, special) in options {
        if !rights.has(flag) || !castle_path_is_clear(game_state, side, geometry) {
            continue;
        }
        if let Some(king_to) = Square::new(row, geometry.king_to_col) {
            out.push(Move::new(
                king_from,
                king_to,
                Piece::new(side, PieceKind::King),
                None,
                special,
            ));
        }
    }
}

/// Rook in its corner, gap empty, and no square the king touches attacked
/// (which also rules out castling out of check).
fn castle_path_is_clear(game_state: &GameState, side: Color, geometry: &CastleGeometry) -> bool {
    let row = side.back_rank();
    let board = &game_state.board;

    let rook_home = Square::new(row, geometry.rook_from_col);
    if rook_home.and_then(|sq| board.piece_at(sq)) != Some(Piece::new(side, PieceKind::Rook)) {
        return false;
    }

    let gap_empty = geometry
        .empty_cols
        .iter()
        .filter_map(|&col| Square::new(row, col))
        .all(|sq| board.is_empty(sq));
    if !gap_empty {
        return false;
    }

    geometry
        .safe_cols
        .iter()
        .filter_map(|&col| Square::new(row, col))
        .all(|sq| !is_square_attacked(board, sq, side.opposite()))
}
