use anyhow::Result;
use std::time::Instant;
use scrabble_solver::{parse_letters, Board, Difficulty, ScrabbleAi};

const STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    ".........quiz..",
    "..........n....",
    "......bread....",
    "..........e....",
    ".....lodger....",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn run() -> Result<()> {
    let letters = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("retains"));
    let mut board = Board::default()
        .with_dictionary_from_file("wordlists/words.txt")?
        .with_state_from_strings(STATE)?;
    let rack = parse_letters(&letters)?;

    for &difficulty in &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Master] {
        let t0 = Instant::now();
        let word = ScrabbleAi::from(difficulty).find_best_move(&board, &rack);
        println!("{:?}: {} {:?} in {:?}", difficulty, word, word.placement(), t0.elapsed());
    }

    let t0 = Instant::now();
    let moves = ScrabbleAi::from(Difficulty::Master).anchor_moves(&board, &rack);
    println!("Best move for {} anchors in {:?}", moves.len(), t0.elapsed());
    for word in moves.iter().take(10) {
        println!("  {}", word);
    }

    if let Some(best) = moves.first() {
        let score = board.play_hand(best.placement())?;
        println!("Played {} for {} points:\n{}", best.text(), score, board);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
