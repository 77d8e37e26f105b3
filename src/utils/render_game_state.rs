//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the terminal front-end, tests,
//! and diagnostics. White's back rank is drawn at the bottom.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board_with_marks(game_state.board(), &[])
}

/// Like [`render_game_state`], but squares listed in `marks` are drawn in
/// brackets (used for the selected piece and its destinations).
pub fn render_board_with_marks(board: &Board, marks: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in (0..8u8).rev() {
        let rank = char::from(b'1' + row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let glyph = board.piece_at(square).map_or('·', piece_to_unicode);
            if marks.contains(&square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board_with_marks, render_game_state};
    use crate::game_state::chess_types::*;

    #[test]
    fn start_position_has_ten_lines_with_black_on_top() {
        let game = GameState::new_game();
        let text = render_game_state(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with('8'));
        assert!(lines[1].contains('♚'));
        assert!(lines[8].starts_with('1'));
        assert!(lines[8].contains('♔'));
        assert_eq!(text.matches('♙').count(), 8);
    }

    #[test]
    fn marked_squares_are_bracketed() {
        let game = GameState::new_game();
        let e2 = Square::new(1, 4).expect("e2");
        let e4 = Square::new(3, 4).expect("e4");
        let text = render_board_with_marks(game.board(), &[e2, e4]);
        assert!(text.contains("[♙]"));
        assert!(text.contains("[·]"));
        assert_eq!(text.matches('[').count(), 2);
    }
}
