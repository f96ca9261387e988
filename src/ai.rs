use crate::grid::N;
use crate::labelset::LetterSet;
use crate::{Board, Coord, Dictionary, Letter, Placement, StateId, Word};

#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::ops::ControlFlow;

/// How strong the computer player plays.
///
/// Each level is a score threshold: the search stops at the first move that
/// scores at least that many points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Master,
}

impl Difficulty {
    pub fn threshold(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
            Difficulty::Master => 1000,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Finds moves for a rack of letters on a [`Board`].
///
/// The search walks the board's dictionary automaton while it lays out letters,
/// so only prefixes of real words are ever explored. Every complete candidate is
/// scored by [`Board::hand_legality_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrabbleAi {
    threshold: u32,
}

impl From<Difficulty> for ScrabbleAi {
    fn from(difficulty: Difficulty) -> Self {
        ScrabbleAi::new(difficulty.threshold())
    }
}

impl ScrabbleAi {
    /// Create a search that stops as soon as a move scores at least `threshold`.
    pub fn new(threshold: u32) -> ScrabbleAi {
        ScrabbleAi { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Find the best move for `rack`, or the first move found that reaches the threshold.
    ///
    /// Anchors are visited in (`row`, `col`) order, each in horizontal and then vertical
    /// direction. A candidate replaces the best move found so far only if it scores
    /// strictly more. Returns the empty [`Word`] if no legal move exists.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, ScrabbleAi, Difficulty, parse_letters, Error};
    /// let board = Board::default().with_dictionary_from_words(&["ab", "za"])?;
    /// let rack = parse_letters("abz")?;
    /// let best = ScrabbleAi::from(Difficulty::Master).find_best_move(&board, &rack);
    /// assert_eq!(best.text(), "za");
    /// assert_eq!(best.score(), 11);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_best_move(&self, board: &Board, rack: &[Letter]) -> Word {
        let mut search = Search::new(board, rack, self.threshold);
        for &anchor in board.anchors() {
            if search.anchor(anchor).is_break() {
                break;
            }
        }
        search.best
    }

    /// The best move through each anchor, without a threshold, sorted by descending score.
    /// Anchors without a legal move are left out.
    ///
    /// With feature `rayon` the anchors are searched in parallel.
    pub fn anchor_moves(&self, board: &Board, rack: &[Letter]) -> Vec<Word> {
        let anchors: Vec<Coord> = board.anchors().iter().copied().collect();
        let best_at = |&anchor: &Coord| {
            let mut search = Search::new(board, rack, u32::MAX);
            let _ = search.anchor(anchor);
            search.best
        };
        #[cfg(feature = "rayon")]
        let mut words: Vec<Word> = anchors.par_iter().map(best_at).collect();
        #[cfg(not(feature = "rayon"))]
        let mut words: Vec<Word> = anchors.iter().map(best_at).collect();

        words.retain(|word| !word.is_empty());
        words.sort_by(|a, b| b.score().cmp(&a.score()));
        words
    }
}

/// Find the best move for `rack` on `board`, using the board's dictionary.
/// The search stops at the first move that scores at least `threshold`.
pub fn find_best_move(rack: &[Letter], board: &Board, threshold: u32) -> Word {
    ScrabbleAi::new(threshold).find_best_move(board, rack)
}

/// State of one move search.
struct Search<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    threshold: u32,
    rack: Vec<Letter>,
    staged: Placement,
    text: String,
    best: Word,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board, rack: &[Letter], threshold: u32) -> Search<'a> {
        Search {
            board,
            dictionary: board.dictionary(),
            threshold,
            rack: rack.to_vec(),
            staged: Placement::new(),
            text: String::new(),
            best: Word::default(),
        }
    }

    /// Search all words through `anchor` in both directions.
    fn anchor(&mut self, anchor: Coord) -> ControlFlow<()> {
        if self.board.is_played(anchor.0, anchor.1) || self.rack.is_empty() {
            return ControlFlow::Continue(());
        }
        self.line(anchor, true)?;
        self.line(anchor, false)
    }

    /// Search the words that cover `anchor` along one line.
    ///
    /// The first tile may be laid before the anchor, on empty squares that are not
    /// anchors themselves, leaving at least one rack letter for the anchor.
    /// Played letters directly before the start are a fixed prefix of the word.
    fn line(&mut self, anchor: Coord, horizontal: bool) -> ControlFlow<()> {
        let (dr, dc) = delta(horizontal);
        let mut starts = vec![anchor];
        let (mut row, mut col) = anchor;
        while starts.len() < self.rack.len() && row >= dr && col >= dc {
            let prev = (row - dr, col - dc);
            if self.board.is_played(prev.0, prev.1) || self.board.anchors().contains(&prev) {
                break;
            }
            starts.push(prev);
            row = prev.0;
            col = prev.1;
        }

        let end = position(anchor, horizontal);
        for start in starts {
            let prefix = self.board.played_run(start.0, start.1, horizontal, false);
            let state = match self.dictionary.walk(self.dictionary.start(), &prefix) {
                Some(state) => state,
                None => continue,
            };
            self.text = prefix;
            self.extend(start, horizontal, state, end)?;
        }
        ControlFlow::Continue(())
    }

    /// Lay the next letter at `cursor`: the played letter if there is one, else
    /// each distinct rack letter that continues a word.
    fn extend(&mut self, cursor: Coord, horizontal: bool, state: StateId, end: usize) -> ControlFlow<()> {
        let (row, col) = cursor;
        if row >= N || col >= N {
            return ControlFlow::Continue(());
        }
        if let Some(letter) = self.board.letter_at(row, col) {
            if let Some(next) = self.dictionary.step(state, letter) {
                self.text.push(letter.to_char());
                let flow = self.advance(cursor, horizontal, next, end);
                self.text.pop();
                return flow;
            }
            return ControlFlow::Continue(());
        }

        let mut tried = LetterSet::new();
        for i in 0..self.rack.len() {
            let letter = self.rack[i];
            if tried.insert(letter) {
                continue;
            }
            let next = match self.dictionary.step(state, letter) {
                Some(next) => next,
                None => continue,
            };
            if !self.fits_across(cursor, horizontal, letter) {
                continue;
            }
            self.rack.remove(i);
            self.staged.insert(cursor, letter);
            self.text.push(letter.to_char());
            let flow = self.advance(cursor, horizontal, next, end);
            self.text.pop();
            self.staged.remove(&cursor);
            self.rack.insert(i, letter);
            flow?;
        }
        ControlFlow::Continue(())
    }

    /// Consider the word ending at `cursor`, then grow it past `cursor`.
    fn advance(&mut self, cursor: Coord, horizontal: bool, state: StateId, end: usize) -> ControlFlow<()> {
        let (dr, dc) = delta(horizontal);
        let next = (cursor.0 + dr, cursor.1 + dc);
        let word_ends = self.board.letter_at(next.0, next.1).is_none();
        if word_ends
            && position(cursor, horizontal) >= end
            && !self.staged.is_empty()
            && self.dictionary.is_accepting(state)
        {
            self.consider()?;
        }
        if word_ends && self.rack.is_empty() {
            return ControlFlow::Continue(());
        }
        self.extend(next, horizontal, state, end)
    }

    /// The letters already above and below (or left and right of) `cursor` must
    /// form a word with `letter`.
    fn fits_across(&self, cursor: Coord, horizontal: bool, letter: Letter) -> bool {
        let before = self.board.played_run(cursor.0, cursor.1, !horizontal, false);
        let after = self.board.played_run(cursor.0, cursor.1, !horizontal, true);
        if before.is_empty() && after.is_empty() {
            return true;
        }
        let mut word = before;
        word.push(letter.to_char());
        word.push_str(&after);
        self.dictionary.accepts(&word)
    }

    fn consider(&mut self) -> ControlFlow<()> {
        let score = match self.board.hand_legality_score(&self.staged) {
            Ok(score) => score,
            Err(_) => return ControlFlow::Continue(()),
        };
        if score > self.best.score() || self.best.is_empty() {
            self.best = Word::new(self.text.clone(), self.staged.clone(), score);
            if score >= self.threshold {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

fn delta(horizontal: bool) -> (usize, usize) {
    if horizontal {
        (0, 1)
    } else {
        (1, 0)
    }
}

fn position((row, col): Coord, horizontal: bool) -> usize {
    if horizontal {
        col
    } else {
        row
    }
}
