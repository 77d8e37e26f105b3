//! Perft node counting for move generator validation.
//!
//! Counts leaf nodes (plus a few move-type tallies) of the legal move tree
//! to a fixed depth so results can be compared with published reference
//! numbers.

use crate::game_state::chess_types::{Move, SpecialMove};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_unchecked, undo_move_unchecked};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn tally_leaf(&mut self, mv: &Move, gives_check: bool) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        match mv.special() {
            SpecialMove::EnPassantCapture => self.en_passant += 1,
            SpecialMove::CastleKingSide | SpecialMove::CastleQueenSide => self.castles += 1,
            SpecialMove::Promotion(_) => self.promotions += 1,
            SpecialMove::None => {}
        }
        if gives_check {
            self.checks += 1;
        }
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total);
    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for mv in generator.generate_legal_moves(game_state) {
        make_move_unchecked(game_state, mv);
        if depth == 1 {
            let gives_check = is_king_in_check(game_state, game_state.side_to_move);
            counts.tally_leaf(&mv, gives_check);
        } else {
            perft_recurse(generator, game_state, depth - 1, counts);
        }
        undo_move_unchecked(game_state);
    }
}

/// Per-root-move node counts, handy when bisecting a generator bug.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, u64)> {
    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    for mv in generator.generate_legal_moves(&scratch) {
        make_move_unchecked(&mut scratch, mv);
        let nodes = perft(generator, &scratch, depth.saturating_sub(1)).nodes;
        undo_move_unchecked(&mut scratch);
        out.push((mv, nodes));
    }
    out
}
