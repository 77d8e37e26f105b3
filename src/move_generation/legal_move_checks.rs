//! Raw geometric attack queries.
//!
//! These never consult the legality filter, so check detection cannot recurse
//! into move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.board.king_square(color) else {
        return false;
    };
    is_square_attacked(&game_state.board, king_sq, color.opposite())
}

/// Whether any `attacker_color` piece could capture on `square`.
///
/// Works backwards from the target: a knight on `square` would hit exactly
/// the squares an enemy knight must stand on, and so on per kind. Pawn
/// attackers are found with the defender's capture pattern.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let theirs = |kind| board.pieces(attacker_color, kind);

    if pawn_attacks(attacker_color.opposite(), square) & theirs(PieceKind::Pawn) != 0 {
        return true;
    }
    if knight_attacks(square) & theirs(PieceKind::Knight) != 0 {
        return true;
    }
    if king_attacks(square) & theirs(PieceKind::King) != 0 {
        return true;
    }

    let occupancy = board.occupied();
    let diagonal = theirs(PieceKind::Bishop) | theirs(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & diagonal != 0 {
        return true;
    }
    let straight = theirs(PieceKind::Rook) | theirs(PieceKind::Queen);
    rook_attacks(square, occupancy) & straight != 0
}

/// All enemy pieces attacking `square`, with their kinds.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let occupancy = board.occupied();
    let mut attackers = Vec::new();

    for kind in PieceKind::ALL {
        let reach = match kind {
            PieceKind::Pawn => pawn_attacks(attacker_color.opposite(), square),
            PieceKind::Knight => knight_attacks(square),
            PieceKind::Bishop => bishop_attacks(square, occupancy),
            PieceKind::Rook => rook_attacks(square, occupancy),
            PieceKind::Queen => bishop_attacks(square, occupancy) | rook_attacks(square, occupancy),
            PieceKind::King => king_attacks(square),
        };
        attackers.extend(
            squares_of(reach & board.pieces(attacker_color, kind)).map(|from| (from, kind)),
        );
    }

    attackers
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn pawn_attacks_are_diagonal_only() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN");
        assert!(is_square_attacked(game.board(), sq("c4"), Color::Black));
        assert!(is_square_attacked(game.board(), sq("e4"), Color::Black));
        assert!(!is_square_attacked(game.board(), sq("d4"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let game = GameState::from_fen("4k3/8/8/8/q7/8/2P5/4K3 w - - 0 1").expect("FEN");
        // Queen a4 toward e1 through b3, c2 (white pawn blocks).
        assert!(!is_king_in_check(&game, Color::White));
        assert!(is_square_attacked(game.board(), sq("c2"), Color::Black));
        assert!(!is_square_attacked(game.board(), sq("d1"), Color::Black));
    }

    #[test]
    fn double_check_lists_both_attackers() {
        let game = GameState::from_fen("4k3/8/8/8/8/5n2/8/4K2r w - - 0 1").expect("FEN");
        let attackers = attackers_to_square(game.board(), sq("e1"), Color::Black);
        assert_eq!(attackers.len(), 2);
        assert!(attackers.contains(&(sq("f3"), PieceKind::Knight)));
        assert!(attackers.contains(&(sq("h1"), PieceKind::Rook)));
        assert!(is_king_in_check(&game, Color::White));
    }
}
