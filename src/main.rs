use std::env;
use std::process::ExitCode;

use mailbox_chess::board::{Position, SearchConfig, DEFAULT_DEPTH};
use mailbox_chess::EngineController;

/// Longest game played before giving up on a result.
const MAX_PLIES: usize = 200;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let depth = match args.get(1).map(|s| s.parse::<u32>()) {
        None => DEFAULT_DEPTH,
        Some(Ok(depth)) => depth,
        Some(Err(err)) => {
            eprintln!("usage: mailbox_chess [depth] [fen]: bad depth: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = EngineController::with_config(SearchConfig::default().with_depth(depth));
    if let Some(fen) = args.get(2) {
        match Position::from_fen(fen) {
            Ok(position) => controller.set_position(position),
            Err(err) => {
                eprintln!("invalid fen: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    for ply in 0..MAX_PLIES {
        let Some(mv) = controller.play_engine_move() else {
            break;
        };
        let stats = controller.stats();
        println!(
            "{:>3}. {:<10} score {:>5} nodes {}",
            ply / 2 + 1,
            mv.notation(),
            stats.score,
            stats.nodes
        );
    }

    let position = controller.position();
    println!("{}", position.to_fen());
    if position.is_checkmate() {
        println!("checkmate, {} wins", position.side_to_move().opponent());
    } else if position.is_stalemate() {
        println!("stalemate");
    } else {
        println!("no result after {MAX_PLIES} plies");
    }
    ExitCode::SUCCESS
}
