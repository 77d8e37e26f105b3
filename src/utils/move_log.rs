//! Numbered move-log formatting ("1. e2e4  e7e5").

use crate::game_state::chess_types::{Color, Move};

/// Pair executed moves into numbered lines, White's move first.
///
/// A log whose first move was made by Black (a game set up from a FEN with
/// Black to move) starts with `"1. ...  e7e5"`.
pub fn move_log_lines(moves: &[Move]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending_white: Option<&Move> = None;

    for mv in moves {
        match mv.piece_moved().color {
            Color::White => {
                if let Some(white) = pending_white.take() {
                    lines.push(format!("{}. {white}", lines.len() + 1));
                }
                pending_white = Some(mv);
            }
            Color::Black => {
                let white = pending_white
                    .take()
                    .map_or_else(|| "...".to_owned(), |m| m.to_string());
                lines.push(format!("{}. {white}  {mv}", lines.len() + 1));
            }
        }
    }

    if let Some(white) = pending_white {
        lines.push(format!("{}. {white}", lines.len() + 1));
    }

    lines
}
