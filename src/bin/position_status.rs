use std::env;
use std::process;

use chess_rules::board::{is_checkmate, is_king_in_check, legal_moves, Board, Color};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: position_status <placement> <white|black>");
        process::exit(2);
    }

    let board = match Board::from_placement(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    let color = match args[2].to_ascii_lowercase().as_str() {
        "white" | "w" => Color::White,
        "black" | "b" => Color::Black,
        other => {
            eprintln!("unknown color '{other}'");
            process::exit(2);
        }
    };

    let moves = legal_moves(&board, color);
    print!("{board}");
    println!("side: {color}");
    println!("legal_moves: {}", moves.len());
    println!("check: {}", is_king_in_check(&board, color));
    println!("checkmate: {}", is_checkmate(&board, color));
    for mv in &moves {
        println!("{mv}");
    }
}
