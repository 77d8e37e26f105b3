//! Long algebraic move text (`e2e4`, `e7e8q`) to [`Move`]. The other
//! direction is `Move`'s `Display` impl.
//!
//! Parsing needs the position: the moving piece, any capture, and the move's
//! special kind are read off the board. The result is not checked for
//! legality; `GameState::make_move` does that.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_from_squares::make_move_from_squares_with_promotion;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "{text:?}: expected four or five characters"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let moved = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceOnSquare(from))?;
    let reaches_last_rank =
        moved.kind == PieceKind::Pawn && to.row() == moved.color.promotion_row();

    let promotion = match text[4..].chars().next() {
        Some(ch) => {
            if !reaches_last_rank {
                return Err(ChessError::InvalidAlgebraic(format!(
                    "{text:?}: only a pawn reaching the last rank may promote"
                )));
            }
            char_to_promotion(ch).ok_or_else(|| {
                ChessError::InvalidAlgebraic(format!("{text:?}: bad promotion piece '{ch}'"))
            })?
        }
        None if reaches_last_rank => {
            return Err(ChessError::InvalidAlgebraic(format!(
                "{text:?}: missing promotion piece"
            )));
        }
        None => PieceKind::Queen,
    };

    make_move_from_squares_with_promotion(from, to, game_state.board(), promotion)
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    PieceKind::from_letter(ch).filter(|kind| PieceKind::PROMOTIONS.contains(kind))
}

#[cfg(test)]
mod tests {
    use super::long_algebraic_to_move;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn simple_move_round_trips() {
        let game_state = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e2e4", &game_state).expect("move should parse");
        assert_eq!(mv.special(), SpecialMove::None);
        assert_eq!(mv.to_string(), "e2e4");
        assert!(game_state.legal_moves().contains(&mv));
    }

    #[test]
    fn promotion_requires_a_valid_suffix() {
        let game_state = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8n", &game_state).expect("move should parse");
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
        assert_eq!(mv.to_string(), "a7a8n");

        for bad in ["a7a8", "a7a8k", "a7a8p"] {
            assert!(matches!(
                long_algebraic_to_move(bad, &game_state),
                Err(ChessError::InvalidAlgebraic(_))
            ));
        }
        assert!(matches!(
            long_algebraic_to_move("e1e2q", &game_state),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn castling_and_en_passant_are_inferred() {
        let castle_state =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1c1", &castle_state).expect("castle should parse");
        assert_eq!(castle.special(), SpecialMove::CastleQueenSide);

        let ep_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let ep = long_algebraic_to_move("e5d6", &ep_state).expect("en passant should parse");
        assert_eq!(ep.special(), SpecialMove::EnPassantCapture);
        assert!(ep.is_capture());
    }

    #[test]
    fn empty_from_square_is_reported() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(matches!(
            long_algebraic_to_move("d2d4", &game_state),
            Err(ChessError::NoPieceOnSquare(_))
        ));
    }
}
