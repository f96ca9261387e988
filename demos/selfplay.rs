use anyhow::Result;
use scrabble_solver::{Board, ComputerPlayer, Difficulty, Player, ScrabbleAi, TileBag, Turn};

fn run() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 123,
    };
    let mut board = Board::default().with_dictionary_from_file("wordlists/words.txt")?;
    let mut bag = TileBag::new(board.tileset(), seed);
    let mut players = vec![
        ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Medium))?,
        ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Master))?,
    ];

    let mut passes = 0;
    let mut turn = 0;
    while passes < players.len() {
        let i = turn % players.len();
        let rack: String = players[i].letters().iter().map(|l| l.to_char()).collect();
        match players[i].play_hand(&mut board, &mut bag)? {
            Turn::Played(word) => {
                passes = 0;
                println!("player {} [{}]: {}", i + 1, rack, word);
            }
            Turn::Rejected(illegal) => {
                passes += 1;
                println!("player {} [{}]: rejected, {}", i + 1, rack, illegal);
            }
            Turn::Pass => {
                passes += 1;
                println!("player {} [{}]: pass", i + 1, rack);
            }
        }
        if players[i].letters().is_empty() {
            break;
        }
        turn += 1;
    }

    println!("{}", board);
    for (i, player) in players.iter().enumerate() {
        println!("player {}: {} points", i + 1, player.score());
    }
    println!("{} tiles left in the bag", bag.len());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
