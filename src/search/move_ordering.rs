//! Move ordering for alpha-beta.
//!
//! Captures go first, most valuable victim then least valuable attacker,
//! followed by promotions and then quiet moves. The root is not sorted here
//! after the first iteration: it keeps the previous iteration's ranking.

use crate::game_state::chess_types::{Move, PieceKind};
use crate::search::board_scoring::MaterialScorer;

const CAPTURE_BONUS: i32 = 100_000;
const PROMOTION_BONUS: i32 = 90_000;

#[inline]
fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        // Nominal value so king captures of a defended piece still order last.
        PieceKind::King => 2_000,
        other => MaterialScorer::piece_value(other),
    }
}

pub fn move_order_score(mv: &Move) -> i32 {
    let mut score = 0i32;
    if let Some(victim) = mv.piece_captured() {
        let aggressor = piece_value(mv.piece_moved().kind);
        score += CAPTURE_BONUS + piece_value(victim.kind) * 16 - aggressor;
    }
    if let Some(kind) = mv.promotion() {
        score += PROMOTION_BONUS + piece_value(kind);
    }
    score
}

/// Sort `moves` best-first. Stable, so equal scores keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| -move_order_score(mv));
}

#[cfg(test)]
mod tests {
    use super::{move_order_score, order_moves};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn captures_come_first_with_best_victim_leading() {
        // White can take the queen on d5 or the pawn on b5.
        let game = GameState::from_fen("4k3/8/8/1p1q4/2P5/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut moves = legal_moves(&game);
        order_moves(&mut moves);

        assert_eq!(moves[0].to_string(), "c4d5");
        assert_eq!(moves[1].to_string(), "c4b5");
        assert!(moves[2..].iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn cheaper_attacker_is_preferred_on_equal_victims() {
        let game = GameState::from_fen("4k3/8/8/3r4/2P5/8/8/3RK3 w - - 0 1")
            .expect("FEN should parse");
        let mut moves = legal_moves(&game);
        order_moves(&mut moves);
        assert_eq!(moves[0].to_string(), "c4d5");
        assert_eq!(moves[1].to_string(), "d1d5");
    }

    #[test]
    fn promotions_precede_quiet_moves() {
        let game =
            GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = legal_moves(&game);
        order_moves(&mut moves);
        assert!(moves[..4].iter().all(|mv| mv.promotion().is_some()));
        assert_eq!(moves[0].to_string(), "a7a8q");
        assert!(moves[4..].iter().all(|mv| move_order_score(mv) == 0));
    }
}
