use std::env;

use mailbox_chess::board::Position;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut position = Position::new();
    if let Err(err) = position.apply_coordinate_moves(args.iter().skip(1).map(String::as_str)) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let legal_moves = position.valid_moves();
    println!("side_to_move: {}", position.side_to_move());
    println!("in_check: {}", position.is_in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", position.is_checkmate());
    println!("stalemate: {}", position.is_stalemate());
    println!("fen: {}", position.to_fen());
    for mv in &legal_moves {
        println!("{} {}", mv, mv.notation());
    }
}
