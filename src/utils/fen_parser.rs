//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string. Besides syntax, the parser rejects positions the move generator
//! cannot work with: each side needs exactly one king, no pawn may sit on a
//! back rank, the side that just moved may not be left in check, and an
//! en-passant target must sit behind a pawn that just advanced two squares.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| fen_error("missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| fen_error("missing en-passant square"))?;
    // Clocks are optional; many hand-written positions leave them off.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(&format!("invalid halfmove clock {halfmove_part:?}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| fen_error(&format!("invalid fullmove number {fullmove_part:?}")))?;

    validate_en_passant(&game_state)?;
    validate_position(&game_state)?;
    Ok(game_state)
}

fn fen_error(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(fen_error("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| fen_error(&format!("invalid piece character '{ch}'")))?;
            let square =
                Square::new(row, col).ok_or_else(|| fen_error("board rank has too many files"))?;
            board.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(fen_error("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(fen_error(&format!("invalid side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(fen_error(&format!("invalid castling character '{ch}'"))),
        };
        rights.insert(flag);
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| fen_error(&format!("invalid en-passant square {en_passant_part:?}")))?;
    if square.row() != 2 && square.row() != 5 {
        return Err(fen_error("en-passant square must be on rank 3 or 6"));
    }
    Ok(Some(square))
}

/// The target is the square the opponent's pawn skipped: on rank 6 with
/// White to move (rank 3 with Black), empty, with that pawn right in front.
fn validate_en_passant(game_state: &GameState) -> ChessResult<()> {
    let Some(target) = game_state.en_passant_target else {
        return Ok(());
    };
    let mover = game_state.side_to_move;
    let pusher = mover.opposite();

    let expected_row = if mover == Color::White { 5 } else { 2 };
    if target.row() != expected_row {
        return Err(fen_error(&format!(
            "en-passant square {target} does not fit {mover:?} to move"
        )));
    }
    if !game_state.board.is_empty(target) {
        return Err(fen_error(&format!("en-passant square {target} is occupied")));
    }
    let pushed_pawn = target
        .offset(pusher.forward(), 0)
        .and_then(|square| game_state.board.piece_at(square));
    if pushed_pawn != Some(Piece::new(pusher, PieceKind::Pawn)) {
        return Err(fen_error(&format!(
            "no {pusher:?} pawn in front of en-passant square {target}"
        )));
    }
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
}

fn validate_position(game_state: &GameState) -> ChessResult<()> {
    let board = &game_state.board;
    for color in [Color::White, Color::Black] {
        let kings = board.pieces(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(ChessError::InvalidGameState(format!(
                "{color:?} has {kings} kings, expected exactly one"
            )));
        }
    }

    const BACK_RANKS: u64 = 0xFF | (0xFF << 56);
    let pawns = board.pieces(Color::White, PieceKind::Pawn) | board.pieces(Color::Black, PieceKind::Pawn);
    if pawns & BACK_RANKS != 0 {
        return Err(ChessError::InvalidGameState(
            "pawn on the first or last rank".to_owned(),
        ));
    }

    let waiting = game_state.side_to_move.opposite();
    if is_king_in_check(game_state, waiting) {
        return Err(ChessError::InvalidGameState(format!(
            "{waiting:?} is in check but it is not their move"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move(), Color::White);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.castling_rights(), CastlingRights::ALL);
        assert_eq!(game_state.board().occupied().count_ones(), 32);
    }

    #[test]
    fn parses_en_passant_and_clocks() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .expect("FEN should parse");
        assert_eq!(
            game_state.en_passant_target(),
            Some(algebraic_to_square("d6").expect("d6"))
        );
        assert_eq!(game_state.fullmove_number(), 3);
    }

    #[test]
    fn missing_clocks_default() {
        let err = parse_fen("4k3/8/8/8/8/8/8/4K3 b -").expect_err("ep field is required");
        assert!(matches!(err, ChessError::InvalidFen(_)));

        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("clocks are optional");
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.fullmove_number(), 1);
    }

    #[test]
    fn genuine_en_passant_targets_are_accepted() {
        let black_to_move = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1")
            .expect("e3 behind a pawn that just left e2");
        assert_eq!(
            black_to_move.en_passant_target(),
            Some(algebraic_to_square("e3").expect("e3"))
        );
    }

    #[test]
    fn king_left_in_check_cannot_be_captured() {
        let err = parse_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1")
            .expect_err("black king attacked on white's move");
        assert!(matches!(err, ChessError::InvalidGameState(_)));

        // Same layout with Black to move is an ordinary check.
        let game = parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("legal check");
        assert!(game.in_check());
        assert!(game
            .legal_moves()
            .iter()
            .all(|mv| mv.piece_captured().map(|p| p.kind) != Some(PieceKind::King)));
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        let bad = [
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w Z - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            // Wrong rank for the side to move: would let d2 "capture" its own e2 pawn.
            "4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1",
            // Target square occupied.
            "4k3/8/3p4/3pP3/8/8/8/4K3 w - d6 0 2",
            // Nothing in front of the target.
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 2",
            // A White pawn where the Black double push should be.
            "4k3/8/8/3PP3/8/8/8/4K3 w - d6 0 2",
            "4k3/8/8/8/8/8/8/4K3 w - - x 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 0",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen} should be rejected"
            );
        }
    }

    #[test]
    fn impossible_positions_are_rejected() {
        for fen in [
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
            "P3k3/8/8/8/8/8/8/4K3 w - - 0 1",
            // Black is in check with White to move.
            "4k3/8/8/8/8/8/8/4RK2 w - - 0 1",
            "4k3/8/8/8/8/8/3p4/4K3 b - - 0 1",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidGameState(_))),
                "{fen} should be rejected"
            );
        }
    }
}
