use crate::{Board, Error, IllegalMove, Letter, Placement, ScrabbleAi, TileBag, Word};

/// Number of letters a player holds when the bag is not empty.
pub const RACK_SIZE: usize = 7;

/// The outcome of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The word was played and scored.
    Played(Word),
    /// The placement broke the rules. Nothing changed on the board or the rack.
    Rejected(IllegalMove),
    /// No tiles were placed.
    Pass,
}

/// The letters a player holds and the points scored so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    letters: Vec<Letter>,
    score: u32,
}

impl Rack {
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check that every letter of `letters` is held, counting repeats.
    /// ## Errors
    /// Returns [`Error::LetterNotInRack`] for the first letter that is missing.
    pub fn check_holds(&self, letters: &[Letter]) -> Result<(), Error> {
        let mut held = self.letters.clone();
        for letter in letters {
            match held.iter().position(|l| l == letter) {
                Some(i) => {
                    held.swap_remove(i);
                }
                None => return Err(Error::LetterNotInRack(letter.to_char())),
            }
        }
        Ok(())
    }

    /// Remove `letters`. Nothing is removed if one of them is missing.
    /// ## Errors
    /// Returns [`Error::LetterNotInRack`] for the first letter that is missing.
    pub fn release(&mut self, letters: &[Letter]) -> Result<(), Error> {
        self.check_holds(letters)?;
        for letter in letters {
            if let Some(i) = self.letters.iter().position(|l| l == letter) {
                self.letters.remove(i);
            }
        }
        Ok(())
    }

    /// Draw up to `n` tiles, never holding more than [`RACK_SIZE`].
    /// ## Errors
    /// Returns [`Error::OutOfTiles`] if the bag is empty.
    pub fn draw(&mut self, bag: &mut TileBag, n: usize) -> Result<(), Error> {
        let n = n.min(RACK_SIZE.saturating_sub(self.letters.len()));
        if n > 0 {
            self.letters.extend(bag.draw_tiles(n)?);
        }
        Ok(())
    }
}

/// Common behavior of the players in a game.
pub trait Player {
    fn rack(&self) -> &Rack;

    fn rack_mut(&mut self) -> &mut Rack;

    /// Take a turn on `board`, drawing new tiles from `bag` after a play.
    /// ## Errors
    /// Returns an error if the turn could not be taken at all, for example if the
    /// staged letters are not in the rack.
    fn play_hand(&mut self, board: &mut Board, bag: &mut TileBag) -> Result<Turn, Error>;

    fn letters(&self) -> &[Letter] {
        self.rack().letters()
    }

    fn score(&self) -> u32 {
        self.rack().score()
    }

    /// Draw `n` tiles from `bag`.
    /// ## Errors
    /// Returns [`Error::OutOfTiles`] if the bag is empty.
    fn draw_tiles(&mut self, bag: &mut TileBag, n: usize) -> Result<(), Error> {
        self.rack_mut().draw(bag, n)
    }

    /// Remove the `letters` used in a play and draw as many new tiles as are left.
    /// ## Errors
    /// Returns [`Error::LetterNotInRack`] if a letter is not held.
    fn release_and_draw_tiles(&mut self, letters: &[Letter], bag: &mut TileBag) -> Result<(), Error> {
        self.rack_mut().release(letters)?;
        if bag.is_empty() {
            return Ok(());
        }
        self.rack_mut().draw(bag, letters.len())
    }

    /// Book a played word: add its score, release its letters and refill the rack.
    fn record(&mut self, word: Word, bag: &mut TileBag) -> Result<Turn, Error> {
        self.rack_mut().score += word.score();
        self.release_and_draw_tiles(&word.placement().letters(), bag)?;
        Ok(Turn::Played(word))
    }
}

/// A player that places tiles one by one, and then plays them.
#[derive(Debug, Clone, Default)]
pub struct HumanPlayer {
    rack: Rack,
    staged: Placement,
}

impl HumanPlayer {
    /// Create a player with a full rack from `bag`.
    /// ## Errors
    /// Returns [`Error::OutOfTiles`] if the bag is empty.
    pub fn new(bag: &mut TileBag) -> Result<HumanPlayer, Error> {
        let mut player = HumanPlayer::default();
        player.draw_tiles(bag, RACK_SIZE)?;
        Ok(player)
    }

    /// The tiles placed for this turn.
    pub fn staged(&self) -> &Placement {
        &self.staged
    }

    /// Place `letter` at `row`, `col` for this turn, and return the score of the tiles
    /// placed so far, or the reason they can not be played yet.
    ///
    /// The tile is only placed on an available square.
    pub fn place_tile(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
        letter: Letter,
    ) -> Result<u32, IllegalMove> {
        if !board.is_available(row, col) {
            if board.square(row, col).is_none() {
                return Err(IllegalMove::OffBoard((row, col)));
            }
            return Err(IllegalMove::SquareTaken((row, col)));
        }
        board.set_availability(row, col, false);
        self.staged.insert((row, col), letter);
        board.hand_legality_score(&self.staged)
    }

    /// Take back the tile at `row`, `col`.
    pub fn remove_tile(&mut self, board: &mut Board, row: usize, col: usize) -> Option<Letter> {
        let letter = self.staged.remove(&(row, col))?;
        board.set_availability(row, col, true);
        Some(letter)
    }

    /// Take back all tiles placed for this turn.
    pub fn reset_hand(&mut self, board: &mut Board) {
        for &(row, col) in self.staged.keys() {
            board.set_availability(row, col, true);
        }
        self.staged.clear();
    }
}

impl Player for HumanPlayer {
    fn rack(&self) -> &Rack {
        &self.rack
    }

    fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// Play the placed tiles. Without placed tiles the turn is a pass.
    /// A rejected placement is taken back.
    fn play_hand(&mut self, board: &mut Board, bag: &mut TileBag) -> Result<Turn, Error> {
        if self.staged.is_empty() {
            return Ok(Turn::Pass);
        }
        if let Err(e) = self.rack.check_holds(&self.staged.letters()) {
            self.reset_hand(board);
            return Err(e);
        }
        match board.hand_word(&self.staged) {
            Ok(word) => {
                board.commit(&self.staged);
                self.staged.clear();
                self.record(word, bag)
            }
            Err(illegal) => {
                self.reset_hand(board);
                Ok(Turn::Rejected(illegal))
            }
        }
    }
}

/// A player that plays the move found by a [`ScrabbleAi`].
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    rack: Rack,
    ai: ScrabbleAi,
}

impl ComputerPlayer {
    /// Create a player with a full rack from `bag`.
    /// ## Errors
    /// Returns [`Error::OutOfTiles`] if the bag is empty.
    pub fn new(bag: &mut TileBag, ai: ScrabbleAi) -> Result<ComputerPlayer, Error> {
        let mut player = ComputerPlayer {
            rack: Rack::default(),
            ai,
        };
        player.draw_tiles(bag, RACK_SIZE)?;
        Ok(player)
    }

    pub fn ai(&self) -> &ScrabbleAi {
        &self.ai
    }
}

impl Player for ComputerPlayer {
    fn rack(&self) -> &Rack {
        &self.rack
    }

    fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// Play the move found by the ai, or pass if there is none.
    fn play_hand(&mut self, board: &mut Board, bag: &mut TileBag) -> Result<Turn, Error> {
        let word = self.ai.find_best_move(board, self.rack.letters());
        if word.is_empty() {
            return Ok(Turn::Pass);
        }
        match board.play_hand(word.placement()) {
            Ok(_) => self.record(word, bag),
            Err(illegal) => Ok(Turn::Rejected(illegal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_letters, Difficulty, TileSet};
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn human_with(letters: &str) -> Result<HumanPlayer> {
        Ok(HumanPlayer {
            rack: Rack {
                letters: parse_letters(letters)?.to_vec(),
                score: 0,
            },
            staged: Placement::new(),
        })
    }

    #[test]
    fn test_new_players_hold_full_racks() -> Result<()> {
        let mut bag = TileBag::new(&TileSet::english(), 7);
        let human = HumanPlayer::new(&mut bag)?;
        let computer = ComputerPlayer::new(&mut bag, ScrabbleAi::from(Difficulty::Easy))?;
        assert_eq!(human.letters().len(), RACK_SIZE);
        assert_eq!(computer.letters().len(), RACK_SIZE);
        assert_eq!(bag.len(), 100 - 2 * RACK_SIZE);
        assert_eq!(computer.ai().threshold(), 10);
        Ok(())
    }

    #[test]
    fn test_rack_release() -> Result<()> {
        let mut rack = Rack {
            letters: parse_letters("aab")?.to_vec(),
            score: 0,
        };
        assert!(matches!(
            rack.release(&[letter('a'), letter('a'), letter('a')]),
            Err(Error::LetterNotInRack('a'))
        ));
        assert_eq!(rack.letters().len(), 3);
        rack.release(&[letter('a'), letter('b')])?;
        assert_eq!(rack.letters(), &[letter('a')]);
        Ok(())
    }

    #[test]
    fn test_place_and_remove_tiles() -> Result<()> {
        let mut board = Board::default().with_dictionary_from_words(&["at"])?;
        let mut human = human_with("atxyzqe")?;
        assert_eq!(
            human.place_tile(&mut board, 7, 7, letter('a')),
            Err(IllegalMove::TooShort)
        );
        assert!(!board.is_available(7, 7));
        assert_eq!(
            human.place_tile(&mut board, 7, 7, letter('t')),
            Err(IllegalMove::SquareTaken((7, 7)))
        );
        assert_eq!(human.place_tile(&mut board, 7, 8, letter('t')), Ok(2));
        assert_eq!(human.remove_tile(&mut board, 7, 8), Some(letter('t')));
        assert!(board.is_available(7, 8));
        human.reset_hand(&mut board);
        assert!(board.is_available(7, 7));
        assert!(human.staged().is_empty());
        Ok(())
    }

    #[test]
    fn test_human_turns() -> Result<()> {
        let mut board = Board::default().with_dictionary_from_words(&["at"])?;
        let mut bag = TileBag::new(&TileSet::english(), 11);
        let mut human = human_with("taxyzqe")?;
        assert_eq!(human.play_hand(&mut board, &mut bag)?, Turn::Pass);

        let _ = human.place_tile(&mut board, 7, 7, letter('t'));
        let _ = human.place_tile(&mut board, 7, 8, letter('a'));
        match human.play_hand(&mut board, &mut bag)? {
            Turn::Rejected(IllegalMove::NotAWord(word)) => assert_eq!(word, "ta"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(board.is_available(7, 7));
        assert!(human.staged().is_empty());

        let _ = human.place_tile(&mut board, 7, 7, letter('a'));
        let _ = human.place_tile(&mut board, 7, 8, letter('t'));
        match human.play_hand(&mut board, &mut bag)? {
            Turn::Played(word) => {
                assert_eq!(word.text(), "at");
                assert_eq!(word.score(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(human.score(), 2);
        assert_eq!(human.letters().len(), RACK_SIZE);
        assert_eq!(bag.len(), 98);
        assert!(board.is_played(7, 8));
        Ok(())
    }

    #[test]
    fn test_human_must_hold_letters() -> Result<()> {
        let mut board = Board::default().with_dictionary_from_words(&["at"])?;
        let mut bag = TileBag::new(&TileSet::english(), 11);
        let mut human = human_with("a")?;
        let _ = human.place_tile(&mut board, 7, 7, letter('a'));
        let _ = human.place_tile(&mut board, 7, 8, letter('t'));
        assert!(matches!(
            human.play_hand(&mut board, &mut bag),
            Err(Error::LetterNotInRack('t'))
        ));
        assert!(human.staged().is_empty());
        assert!(board.is_available(7, 8));
        Ok(())
    }

    #[test]
    fn test_computer_turns() -> Result<()> {
        let mut board = Board::default().with_dictionary_from_words(&["ab", "za"])?;
        let mut bag = TileBag::new(&TileSet::english(), 11);
        let mut computer = ComputerPlayer {
            rack: Rack {
                letters: parse_letters("abz")?.to_vec(),
                score: 0,
            },
            ai: ScrabbleAi::from(Difficulty::Master),
        };
        match computer.play_hand(&mut board, &mut bag)? {
            Turn::Played(word) => assert_eq!(word.text(), "za"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(computer.score(), 11);
        // "b" and two new tiles
        assert_eq!(computer.letters().len(), 3);

        let mut stuck = ComputerPlayer {
            rack: Rack::default(),
            ai: ScrabbleAi::new(1),
        };
        assert_eq!(stuck.play_hand(&mut board, &mut bag)?, Turn::Pass);
        Ok(())
    }

    #[test]
    fn test_empty_bag_is_tolerated_after_play() -> Result<()> {
        let mut board = Board::default().with_dictionary_from_words(&["at"])?;
        let mut bag = TileBag::new(&TileSet::english(), 3);
        bag.draw_tiles(100)?;
        let mut human = human_with("at")?;
        let _ = human.place_tile(&mut board, 7, 7, letter('a'));
        let _ = human.place_tile(&mut board, 7, 8, letter('t'));
        assert!(matches!(human.play_hand(&mut board, &mut bag)?, Turn::Played(_)));
        assert!(human.letters().is_empty());
        assert!(matches!(human.draw_tiles(&mut bag, 7), Err(Error::OutOfTiles)));
        Ok(())
    }
}
