use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, TryRecvError};
use std::thread;
use std::time::Duration;

use knightfall::game_state::chess_types::Square;
use knightfall::move_generation::game_status::GameStatus;
use knightfall::move_generation::legal_move_generator::LegalMoveGenerator;
use knightfall::move_generation::perft::{perft, perft_divide};
use knightfall::session::game_session::{ClickOutcome, GameSession};
use knightfall::session::session_config::{SessionConfig, USAGE};
use knightfall::utils::algebraic::algebraic_to_square;
use knightfall::utils::render_game_state::render_board_with_marks;

const HELP: &str = "commands: <square> (select, e.g. e2)  <move> (e.g. e2e4, e7e8q)  \
undo  takeback  reset  fen  moves  perft <depth>  help  quit";

fn main() {
    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let mut session = GameSession::new(config);

    // Stdin is read on its own thread so engine turns keep ticking.
    let (line_tx, line_rx) = channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP}");
    draw(&session);

    loop {
        match session.tick() {
            Ok(Some(mv)) => {
                println!("engine plays {mv}");
                draw(&session);
            }
            Ok(None) => {}
            Err(err) => println!("engine error: {err}"),
        }
        if session.config().verbose {
            for line in session.drain_info_lines() {
                println!("{line}");
            }
        } else {
            session.drain_info_lines();
        }

        match line_rx.try_recv() {
            Ok(line) => {
                if !handle_line(&mut session, line.trim()) {
                    break;
                }
            }
            Err(TryRecvError::Empty) => thread::sleep(Duration::from_millis(10)),
            Err(TryRecvError::Disconnected) => {
                if !session.is_engine_thinking() {
                    break;
                }
                thread::sleep(Duration::from_millis(10));
            }
        }
    }
}

/// Returns `false` when the user asked to quit.
fn handle_line(session: &mut GameSession, line: &str) -> bool {
    match line {
        "" => return true,
        "quit" | "exit" | "q" => return false,
        "help" | "?" => println!("{HELP}"),
        "fen" => println!("{}", session.game_state().get_fen()),
        "moves" => {
            let moves: Vec<String> = session.legal_moves().iter().map(|mv| mv.to_string()).collect();
            println!("{}", moves.join(" "));
        }
        "undo" | "z" => match session.undo() {
            Ok(mv) => {
                println!("undid {mv}");
                draw(session);
            }
            Err(err) => println!("{err}"),
        },
        "takeback" => match session.undo_turn() {
            Ok(moves) => {
                println!("took back {} plies", moves.len());
                draw(session);
            }
            Err(err) => println!("{err}"),
        },
        "reset" => {
            session.reset();
            draw(session);
        }
        text if text.starts_with("perft") => run_perft(session, text),
        text if text.len() == 2 => match algebraic_to_square(text) {
            Ok(square) => report_click(session, square),
            Err(err) => println!("{err}"),
        },
        text => match session.try_move_text(text) {
            Ok(_) => draw(session),
            Err(err) => println!("{err}"),
        },
    }
    io::stdout().flush().ok();
    true
}

fn run_perft(session: &GameSession, text: &str) {
    let Some(depth) = text
        .split_whitespace()
        .nth(1)
        .and_then(|d| d.parse::<u8>().ok())
        .filter(|d| (1..=6).contains(d))
    else {
        println!("usage: perft <depth 1-6>");
        return;
    };

    let game = session.game_state();
    for (mv, nodes) in perft_divide(&LegalMoveGenerator, game, depth) {
        println!("{mv}: {nodes}");
    }
    let counts = perft(&LegalMoveGenerator, game, depth);
    println!(
        "nodes {} captures {} en_passant {} castles {} promotions {} checks {}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks
    );
}

fn report_click(session: &mut GameSession, square: Square) {
    match session.click(square) {
        ClickOutcome::Ignored => println!("not your turn"),
        ClickOutcome::Selected(_) | ClickOutcome::Deselected => draw(session),
        ClickOutcome::Rejected => {
            println!("illegal move");
            draw(session);
        }
        ClickOutcome::Moved(mv) => {
            println!("played {mv}");
            draw(session);
        }
    }
}

fn draw(session: &GameSession) {
    let mut marks = session.selected_destinations();
    marks.extend(session.selected_square());
    marks.extend(session.checking_pieces());

    println!();
    println!("{}", render_board_with_marks(session.game_state().board(), &marks));
    for line in session.move_log_lines() {
        println!("{line}");
    }
    if let Some(mv) = session.game_state().last_move() {
        println!("last move: {mv}");
    }

    let side = session.game_state().side_to_move();
    match session.status() {
        GameStatus::Checkmate => println!("checkmate, {:?} wins", side.opposite()),
        GameStatus::Stalemate => println!("stalemate"),
        GameStatus::Ongoing if session.game_state().in_check() => println!("{side:?} to move (check)"),
        GameStatus::Ongoing => println!("{side:?} to move"),
    }
    io::stdout().flush().ok();
}
