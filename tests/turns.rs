use anyhow::Result;
use scrabble_solver::{
    find_best_move, parse_letters, Board, ComputerPlayer, Difficulty, HumanPlayer, IllegalMove,
    Player, Placement, ScrabbleAi, TileBag, TileSet, Turn, CENTER,
};

const WORDFILE: &str = "wordlists/words.txt";

#[test]
fn test_opening_and_reply() -> Result<()> {
    let mut board = Board::default().with_dictionary_from_file(WORDFILE)?;
    let opening = Placement::from_word("quiz", 7, 6, true)?;
    // q=10 u=1 i=1 z=10, no premium between (7,6) and (7,9)
    assert_eq!(board.play_hand(&opening)?, 22);
    assert!(!board.anchors().contains(&CENTER));

    // the premium squares of the opening move do not count again
    let reply = board.placement_for_word("quizzes", 7, 6, true)?;
    assert_eq!(reply.len(), 3);
    let score = board.hand_legality_score(&reply)?;
    let word = board.hand_word(&reply)?;
    assert_eq!(word.text(), "quizzes");
    assert_eq!(word.score(), score);
    assert_eq!(board.play_hand(&reply)?, score);
    Ok(())
}

#[test]
fn test_rejected_hands_leave_board_unchanged() -> Result<()> {
    let mut board = Board::default().with_dictionary_from_file(WORDFILE)?;
    let before = board.to_string();
    for (word, row, col) in &[("quiz", 0, 0), ("zqui", 7, 7), ("z", 7, 7)] {
        let staged = Placement::from_word(word, *row, *col, true)?;
        assert!(board.play_hand(&staged).is_err());
        assert_eq!(board.to_string(), before);
        assert!(board.anchors().contains(&CENTER));
    }
    let staged = Placement::from_word("at", 6, 7, false)?;
    assert_eq!(board.play_hand(&staged), Ok(2));
    let staged = Placement::from_word("at", 6, 7, false)?;
    assert_eq!(board.play_hand(&staged), Err(IllegalMove::SquareTaken((6, 7))));
    Ok(())
}

#[test]
fn test_search_result_is_playable() -> Result<()> {
    let mut board = Board::default().with_dictionary_from_file(WORDFILE)?;
    board.play_word("lodger", 7, 4, true)?;
    let rack = parse_letters("eesttab")?;
    for &difficulty in &[Difficulty::Easy, Difficulty::Master] {
        let word = find_best_move(&rack, &board, difficulty.threshold());
        assert!(!word.is_empty());
        assert_eq!(board.hand_legality_score(word.placement()), Ok(word.score()));
    }
    let master = ScrabbleAi::from(Difficulty::Master).find_best_move(&board, &rack);
    let moves = ScrabbleAi::from(Difficulty::Master).anchor_moves(&board, &rack);
    assert_eq!(moves.first().map(|word| word.score()), Some(master.score()));
    Ok(())
}

#[test]
fn test_human_against_computer() -> Result<()> {
    let mut board = Board::default().with_dictionary_from_file(WORDFILE)?;
    let mut bag = TileBag::new(&TileSet::english(), 2024);
    let mut human = HumanPlayer::new(&mut bag)?;
    let mut computer = ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Hard))?;
    assert_eq!(bag.len(), 86);

    // the human passes, the computer opens
    assert_eq!(human.play_hand(&mut board, &mut bag)?, Turn::Pass);
    match computer.play_hand(&mut board, &mut bag)? {
        Turn::Played(word) => {
            assert!(word.placement().contains_key(&CENTER));
            assert_eq!(computer.score(), word.score());
        }
        Turn::Pass => assert_eq!(computer.score(), 0),
        Turn::Rejected(illegal) => panic!("computer move rejected: {}", illegal),
    }
    assert_eq!(computer.letters().len(), 7);
    assert_eq!(bag.len() + computer.letters().len() + human.letters().len() + board_tiles(&board), 100);
    Ok(())
}

#[test]
fn test_computers_play_out_a_game() -> Result<()> {
    let mut board = Board::default().with_dictionary_from_file(WORDFILE)?;
    let mut bag = TileBag::new(board.tileset(), 7);
    let mut players = vec![
        ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Easy))?,
        ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Master))?,
    ];
    let mut passes = 0;
    let mut turns = 0;
    while passes < 2 && turns < 200 {
        let player = &mut players[turns % 2];
        match player.play_hand(&mut board, &mut bag)? {
            Turn::Played(word) => {
                passes = 0;
                assert!(board.dictionary().accepts(word.text()));
            }
            Turn::Pass => passes += 1,
            Turn::Rejected(illegal) => panic!("computer move rejected: {}", illegal),
        }
        if player.letters().is_empty() {
            break;
        }
        turns += 1;
    }
    let held: usize = players.iter().map(|p| p.letters().len()).sum();
    assert_eq!(bag.len() + held + board_tiles(&board), 100);
    assert!(players.iter().all(|p| p.letters().len() <= 7));
    Ok(())
}

fn board_tiles(board: &Board) -> usize {
    board.to_string().chars().filter(|c| c.is_ascii_lowercase()).count()
}
