//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Searches only the caller's root move list, one depth at a time, until the
//! depth cap, the node budget, or the wall-clock budget stops it. A budget
//! that trips mid-iteration throws that iteration away, except at depth 1
//! where the partial ranking is all there is.
//!
//! Every root move that ties the best score is scored exactly, so the final
//! choice among equals is a fair (and seedable) random pick.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_unchecked, undo_move_unchecked};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_in_place;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE, MATE_THRESHOLD};
use crate::search::move_ordering::order_moves;

const INFINITY: i32 = MATE_SCORE + 1;

// Clock reads are comparatively slow; look at the deadline every this many nodes.
const TIME_CHECK_INTERVAL: u64 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub max_nodes: u64,
    pub movetime_ms: Option<u64>,
    /// Seed for the tie-break among equally scored root moves. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_nodes: 1_000_000,
            movetime_ms: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Deepest fully completed iteration (0 if only a partial depth-1 pass ran).
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub info_lines: Vec<String>,
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    nodes: u64,
    max_nodes: u64,
    deadline: Option<Instant>,
    aborted: bool,
}

impl<S: BoardScorer> SearchContext<'_, S> {
    #[inline]
    fn should_abort(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if self.nodes >= self.max_nodes {
            self.aborted = true;
        } else if self.nodes % TIME_CHECK_INTERVAL == 0 {
            if let Some(limit) = self.deadline {
                self.aborted = Instant::now() >= limit;
            }
        }
        self.aborted
    }
}

pub fn find_best_move<S: BoardScorer>(
    snapshot: &GameState,
    legal_moves: &[Move],
    scorer: &S,
    config: &SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let mut result = SearchResult::default();

    if legal_moves.is_empty() {
        result.best_score = terminal_score(snapshot, 0);
        result.nodes = 1;
        result.info_lines.push("info string no legal moves".to_owned());
        return result;
    }

    let mut ctx = SearchContext {
        scorer,
        nodes: 0,
        max_nodes: config.max_nodes.max(1),
        deadline: config
            .movetime_ms
            .map(|ms| started_at + Duration::from_millis(ms.max(1))),
        aborted: false,
    };

    let mut scratch = snapshot.clone();
    let mut root: Vec<Move> = legal_moves.to_vec();
    order_moves(&mut root);
    let mut best_moves: Vec<Move> = Vec::new();

    for depth in 1..=config.max_depth.max(1) {
        if depth > 1 && ctx.should_abort() {
            break;
        }

        let scored = search_root(&mut scratch, &root, depth, &mut ctx);
        let completed = !ctx.aborted;
        if scored.is_empty() || (!completed && depth > 1) {
            break;
        }

        // Next iteration searches the current ranking first.
        let mut ranked = scored.clone();
        ranked.sort_by_key(|&(_, score)| -score);
        let best_score = ranked[0].1;
        best_moves = ranked
            .iter()
            .take_while(|&&(_, score)| score == best_score)
            .map(|&(mv, _)| mv)
            .collect();
        let searched: Vec<Move> = ranked.iter().map(|&(mv, _)| mv).collect();
        root = searched
            .iter()
            .copied()
            .chain(root.iter().copied().filter(|mv| !searched.contains(mv)))
            .collect();

        result.best_score = best_score;
        result.nodes = ctx.nodes;
        if completed {
            result.reached_depth = depth;
        }
        result.info_lines.push(format!(
            "info depth {depth} score {} nodes {} time {} pv {}",
            format_score(best_score),
            ctx.nodes,
            started_at.elapsed().as_millis(),
            best_moves[0]
        ));

        if !completed || best_score >= MATE_THRESHOLD {
            break;
        }
    }

    let mut rng = seeded_rng(config.seed);
    result.best_move = best_moves.choose(&mut rng).copied().or(root.first().copied());
    if best_moves.len() > 1 {
        result.info_lines.push(format!(
            "info string picked among {} equally scored moves",
            best_moves.len()
        ));
    }
    result.nodes = ctx.nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

/// Score root moves in order until done or out of budget.
///
/// The window's lower bound trails the best score by one, so any move that
/// ties the best gets an exact score rather than a bound.
fn search_root<S: BoardScorer>(
    game_state: &mut GameState,
    root: &[Move],
    depth: u8,
    ctx: &mut SearchContext<'_, S>,
) -> Vec<(Move, i32)> {
    let mut scored = Vec::with_capacity(root.len());
    let mut alpha = -INFINITY;

    for &mv in root {
        make_move_unchecked(game_state, mv);
        let child = negamax(game_state, depth - 1, -INFINITY, -alpha, 1, ctx);
        undo_move_unchecked(game_state);

        let Some(child) = child else {
            break;
        };
        let score = -child;
        scored.push((mv, score));
        alpha = alpha.max(score - 1);
    }

    scored
}

/// Fail-soft negamax. `None` means the budget ran out and the value is void.
fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    ctx: &mut SearchContext<'_, S>,
) -> Option<i32> {
    if ctx.should_abort() {
        return None;
    }
    ctx.nodes += 1;

    // Terminal positions outrank the horizon so mates are always seen.
    let mut moves = legal_moves_in_place(game_state);
    if moves.is_empty() {
        return Some(terminal_score(game_state, ply));
    }
    if depth == 0 {
        return Some(ctx.scorer.score(game_state));
    }

    order_moves(&mut moves);
    let mut best = -INFINITY;

    for mv in moves {
        make_move_unchecked(game_state, mv);
        let child = negamax(game_state, depth - 1, -beta, -alpha, ply.saturating_add(1), ctx);
        undo_move_unchecked(game_state);

        let score = -child?;
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Some(best)
}

/// Deterministic generator for a given seed, OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move()) {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}

fn format_score(score: i32) -> String {
    if score >= MATE_THRESHOLD {
        format!("mate {}", (MATE_SCORE - score + 1) / 2)
    } else if score <= -MATE_THRESHOLD {
        format!("mate -{}", (MATE_SCORE + score) / 2)
    } else {
        format!("cp {score}")
    }
}
