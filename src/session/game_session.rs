//! Interactive game controller: selection, moves, undo, reset, and engine
//! turns, with no knowledge of how the board is drawn.
//!
//! The front-end calls [`GameSession::click`] or [`GameSession::try_move`] for
//! human input and [`GameSession::tick`] once per frame. Engine turns run on
//! a worker thread; every change to the position bumps a generation counter
//! and a search started for an older generation is thrown away.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_ladder::build_engine;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::GameStatus;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::move_from_squares::make_move_from_squares;
use crate::search::search_thread::{start_search, SearchHandle, SearchPoll};
use crate::session::session_config::{GameMode, SessionConfig};
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::move_log::move_log_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happens: game over or not a human's turn.
    Ignored,
    Selected(Square),
    Deselected,
    Moved(Move),
    /// The two clicks did not form a legal move; the second click is now
    /// the selection.
    Rejected,
}

struct PendingSearch {
    handle: SearchHandle,
    generation: u64,
}

pub struct GameSession {
    config: SessionConfig,
    game_state: GameState,
    legal_moves: Vec<Move>,
    status: GameStatus,
    selected: Option<Square>,
    clicks: Vec<Square>,
    generation: u64,
    search: Option<PendingSearch>,
    info_log: Vec<String>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_game_state(config, GameState::new_game())
    }

    /// Start from an arbitrary position (tests, tools).
    pub fn from_game_state(config: SessionConfig, mut game_state: GameState) -> Self {
        let legal_moves = game_state.legal_moves();
        let status = game_state.refresh_status_with(&legal_moves);
        Self {
            config,
            game_state,
            legal_moves,
            status,
            selected: None,
            clicks: Vec::new(),
            generation: 0,
            search: None,
            info_log: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the selected piece's legal moves, for highlighting.
    pub fn selected_destinations(&self) -> Vec<Square> {
        let Some(from) = self.selected else {
            return Vec::new();
        };
        let mut ends: Vec<Square> = self
            .legal_moves
            .iter()
            .filter(|mv| mv.start() == from)
            .map(|mv| mv.end())
            .collect();
        ends.dedup();
        ends
    }

    /// Squares of the pieces giving check to the side to move.
    pub fn checking_pieces(&self) -> Vec<Square> {
        let side = self.game_state.side_to_move();
        let board = self.game_state.board();
        let Some(king) = board.king_square(side) else {
            return Vec::new();
        };
        attackers_to_square(board, king, side.opposite())
            .into_iter()
            .map(|(from, _)| from)
            .collect()
    }

    pub fn is_human_turn(&self) -> bool {
        self.config.is_human(self.game_state.side_to_move())
    }

    pub fn is_engine_thinking(&self) -> bool {
        self.search
            .as_ref()
            .is_some_and(|pending| pending.generation == self.generation)
    }

    pub fn move_log_lines(&self) -> Vec<String> {
        move_log_lines(self.game_state.move_log())
    }

    pub fn drain_info_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.info_log)
    }

    /// Two-click move entry. Clicking the selected square again clears it.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.is_game_over() || !self.is_human_turn() {
            return ClickOutcome::Ignored;
        }

        if self.selected == Some(square) {
            self.clear_selection();
            return ClickOutcome::Deselected;
        }
        self.selected = Some(square);
        self.clicks.push(square);
        if self.clicks.len() < 2 {
            return ClickOutcome::Selected(square);
        }

        let candidate = make_move_from_squares(self.clicks[0], self.clicks[1], self.game_state.board());
        match candidate {
            Ok(mv) if self.legal_moves.contains(&mv) => {
                self.execute(mv);
                ClickOutcome::Moved(mv)
            }
            _ => {
                self.clicks = vec![square];
                ClickOutcome::Rejected
            }
        }
    }

    /// Play `mv` for the human side to move.
    pub fn try_move(&mut self, mv: Move) -> ChessResult<()> {
        if !self.is_human_turn() || self.is_game_over() {
            return Err(ChessError::IllegalMove(mv));
        }
        if !self.legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        self.execute(mv);
        Ok(())
    }

    /// Parse long algebraic text (`e2e4`, `e7e8q`) and play it.
    pub fn try_move_text(&mut self, text: &str) -> ChessResult<Move> {
        let mv = long_algebraic_to_move(text, &self.game_state)?;
        self.try_move(mv)?;
        Ok(mv)
    }

    /// Take back one ply.
    pub fn undo(&mut self) -> ChessResult<Move> {
        let mv = self.game_state.undo_move()?;
        self.position_changed();
        Ok(mv)
    }

    /// Take back plies until a human is to move again (one ply against a
    /// human opponent, usually two against the engine).
    pub fn undo_turn(&mut self) -> ChessResult<Vec<Move>> {
        let mut undone = vec![self.undo()?];
        while !self.is_human_turn() && self.game_state.undo_depth() > 0 {
            undone.push(self.undo()?);
        }
        Ok(undone)
    }

    pub fn reset(&mut self) {
        self.game_state = GameState::new_game();
        self.position_changed();
    }

    /// Drive the engine side. Starts a search when the engine is to move,
    /// then polls it without blocking. Returns the engine's move on the tick
    /// it is played.
    pub fn tick(&mut self) -> ChessResult<Option<Move>> {
        if self.config.mode != GameMode::PlayerVsEngine
            || self.is_game_over()
            || self.is_human_turn()
        {
            return Ok(None);
        }

        let Some(mut pending) = self.search.take() else {
            self.start_engine_search()?;
            return Ok(None);
        };

        if pending.generation != self.generation {
            self.info_log.push(format!(
                "info string discarded stale search from generation {}",
                pending.generation
            ));
            pending.handle.abandon();
            self.start_engine_search()?;
            return Ok(None);
        }

        match pending.handle.poll() {
            SearchPoll::Pending => {
                self.search = Some(pending);
                Ok(None)
            }
            SearchPoll::Ready(outcome) => {
                self.info_log.extend(pending.handle.take_info_lines());
                match outcome {
                    Some(mv) if self.legal_moves.contains(&mv) => {
                        self.execute(mv);
                        Ok(Some(mv))
                    }
                    _ => {
                        // Worker failed; the next tick starts a fresh search.
                        self.info_log
                            .push("info string engine produced no move".to_owned());
                        Ok(None)
                    }
                }
            }
        }
    }

    fn start_engine_search(&mut self) -> ChessResult<()> {
        let engine = build_engine(self.config.skill_level)?;
        self.info_log.push(format!(
            "info string {} thinking for {:?}",
            engine.name(),
            self.game_state.side_to_move()
        ));
        let handle = start_search(
            self.game_state.clone(),
            self.legal_moves.clone(),
            engine,
            self.config.go_params(),
        )?;
        self.search = Some(PendingSearch {
            handle,
            generation: self.generation,
        });
        Ok(())
    }

    fn execute(&mut self, mv: Move) {
        match self.game_state.make_listed_move(mv, &self.legal_moves) {
            Ok(()) => self.position_changed(),
            Err(err) => self.info_log.push(format!("info string {err}")),
        }
    }

    fn position_changed(&mut self) {
        self.generation += 1;
        self.legal_moves = self.game_state.legal_moves();
        self.status = self.game_state.refresh_status_with(&self.legal_moves);
        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.clicks.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ClickOutcome, GameSession};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::move_generation::game_status::GameStatus;
    use crate::session::session_config::{GameMode, SessionConfig};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn pvp() -> GameSession {
        GameSession::new(SessionConfig {
            mode: GameMode::PlayerVsPlayer,
            ..SessionConfig::default()
        })
    }

    fn pve(human: Color) -> GameSession {
        GameSession::new(SessionConfig {
            mode: GameMode::PlayerVsEngine,
            human_color: human,
            skill_level: 2,
            movetime_ms: None,
            seed: Some(17),
            verbose: false,
        })
    }

    fn tick_until_engine_moves(session: &mut GameSession) -> Move {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(mv) = session.tick().expect("search should start") {
                return mv;
            }
            assert!(Instant::now() < deadline, "engine never moved");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn two_clicks_play_a_move() {
        let mut session = pvp();
        assert_eq!(session.click(sq("e2")), ClickOutcome::Selected(sq("e2")));
        let mut ends = session.selected_destinations();
        ends.sort();
        assert_eq!(ends, vec![sq("e3"), sq("e4")]);

        let outcome = session.click(sq("e4"));
        assert!(matches!(outcome, ClickOutcome::Moved(mv) if mv.to_string() == "e2e4"));
        assert_eq!(session.game_state().side_to_move(), Color::Black);
        assert_eq!(session.selected_square(), None);
        assert_eq!(session.move_log_lines(), vec!["1. e2e4".to_owned()]);

        // The cached move list tracks the live position.
        assert_eq!(session.legal_moves(), session.game_state().legal_moves().as_slice());
    }

    #[test]
    fn clicking_the_selection_again_clears_it() {
        let mut session = pvp();
        session.click(sq("g1"));
        assert_eq!(session.click(sq("g1")), ClickOutcome::Deselected);
        assert_eq!(session.selected_square(), None);
        assert!(session.selected_destinations().is_empty());
    }

    #[test]
    fn illegal_pair_keeps_the_second_click_selected() {
        let mut session = pvp();
        session.click(sq("e2"));
        assert_eq!(session.click(sq("e5")), ClickOutcome::Rejected);
        assert_eq!(session.selected_square(), Some(sq("e5")));
        assert!(session.game_state().move_log().is_empty());

        // The rejected square is the new first click, so e5-d2 fails too and
        // leaves d2 as the start of the next attempt.
        assert_eq!(session.click(sq("d2")), ClickOutcome::Rejected);
        assert_eq!(session.selected_square(), Some(sq("d2")));
        assert!(matches!(session.click(sq("d4")), ClickOutcome::Moved(mv) if mv.to_string() == "d2d4"));
    }

    #[test]
    fn undo_and_reset_restore_earlier_positions() {
        let mut session = pvp();
        let start = session.game_state().clone();
        session.try_move_text("e2e4").expect("legal");
        session.try_move_text("c7c5").expect("legal");
        assert_eq!(session.move_log_lines(), vec!["1. e2e4  c7c5".to_owned()]);

        let undone = session.undo().expect("one move to undo");
        assert_eq!(undone.to_string(), "c7c5");
        assert_eq!(session.game_state().side_to_move(), Color::Black);

        session.reset();
        assert_eq!(session.game_state(), &start);
        assert!(matches!(session.undo(), Err(ChessError::EmptyUndoStack)));
    }

    #[test]
    fn checkmate_ends_the_game_and_freezes_input() {
        let mut session = pvp();
        for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            session.try_move_text(lan).expect("legal");
        }
        assert_eq!(session.status(), GameStatus::Checkmate);
        assert!(session.is_game_over());
        assert!(session.game_state().is_checkmate());
        assert!(session.legal_moves().is_empty());
        assert_eq!(session.checking_pieces(), vec![sq("h4")]);
        assert_eq!(session.click(sq("e1")), ClickOutcome::Ignored);
    }

    #[test]
    fn engine_answers_the_human_move() {
        let mut session = pve(Color::White);
        assert_eq!(session.tick().expect("no search yet"), None);
        session.try_move_text("e2e4").expect("legal");
        assert!(!session.is_human_turn());
        assert_eq!(session.click(sq("e7")), ClickOutcome::Ignored);

        let reply = tick_until_engine_moves(&mut session);
        assert_eq!(reply.piece_moved().color, Color::Black);
        assert!(session.is_human_turn());
        assert_eq!(session.game_state().move_log().len(), 2);
        assert!(!session.drain_info_lines().is_empty());

        let undone = session.undo_turn().expect("two plies to undo");
        assert_eq!(undone.len(), 2);
        assert!(session.game_state().move_log().is_empty());
    }

    #[test]
    fn search_for_an_old_position_is_discarded() {
        let mut session = pve(Color::Black);
        // Engine (White) to move: the first tick starts a search.
        assert_eq!(session.tick().expect("search should start"), None);
        assert!(session.is_engine_thinking());

        session.reset();
        assert!(!session.is_engine_thinking());
        assert_eq!(session.tick().expect("search should restart"), None);
        assert!(session
            .drain_info_lines()
            .iter()
            .any(|line| line.contains("discarded stale search")));

        let mv = tick_until_engine_moves(&mut session);
        assert_eq!(mv.piece_moved().color, Color::White);
        assert_eq!(session.game_state().move_log(), &[mv]);
    }

    #[test]
    fn human_cannot_move_for_the_engine() {
        let mut session = pve(Color::Black);
        let err = session.try_move_text("e2e4").expect_err("white belongs to the engine");
        assert!(matches!(err, ChessError::IllegalMove(_)));
    }
}
