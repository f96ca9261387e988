use crate::grid::{Grid, Square, CENTER, N};
use crate::{Coord, Dictionary, Error, IllegalMove, Letter, Placement, TileSet, Word};

#[cfg(feature = "flame_it")]
use flamer::flame;
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt;

/// The letters on the board, row by row. `None` is an empty square.
pub type State = [[Option<Letter>; N]; N];

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .letters
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Letter::to_char))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(TileSet::default())
    }
}

/// Represents the state of a `scrabble` board.
/// * A grid of 15x15 squares with possible letter/word premium,
/// * The letters played so far,
/// * The anchors: the squares where the next word can touch the board,
/// * The tile values used for scoring,
/// * The dictionary used for the game.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    squares: [[Square; N]; N],
    letters: State,
    anchors: BTreeSet<Coord>,
    tileset: TileSet,
    dictionary: Dictionary,
}

impl Board {
    /// Create a new empty `scrabble` board, with 15x15 squares.
    /// The [`tileset`](crate::TileSet) gives the points for each letter.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use scrabble_solver::{Board, TileSet};
    ///
    /// let board = Board::new(TileSet::english());
    /// assert!(board.anchors().contains(&(7, 7)));
    ///```
    /// Additional builder functions can be used to set the dictionary, grid and state of the board.
    /// See also:
    /// - [`with_dictionary_from_file`](Board::with_dictionary_from_file)
    /// - [`with_dictionary_from_words`](Board::with_dictionary_from_words)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    #[must_use]
    pub fn new(tileset: TileSet) -> Board {
        let grid = Grid::default();
        let squares = Self::squares_from_grid(&grid);
        let mut board = Board {
            grid,
            squares,
            letters: [[None; N]; N],
            anchors: BTreeSet::new(),
            tileset,
            dictionary: Dictionary::default(),
        };
        board.reset_anchors();
        board
    }

    fn squares_from_grid(grid: &Grid) -> [[Square; N]; N] {
        let mut squares = [[Square::new(grid[0][0]); N]; N];
        for (i, row) in grid.iter().enumerate() {
            for (j, &kind) in row.iter().enumerate() {
                squares[i][j] = Square::new(kind);
            }
        }
        squares
    }

    /// Specify the dictionary by reading it from `wordfile`, and returns the modified board.
    ///
    /// The `wordfile` must contain one word per line.
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` does not exist, or contains
    /// something other than letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let board = Board::default().with_dictionary_from_file("wordlists/words.txt")?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_dictionary_from_file(mut self, wordfile: &str) -> Result<Board, Error> {
        self.dictionary = Dictionary::from_file(wordfile)?;
        Ok(self)
    }

    /// Specify the dictionary by a list of words, and returns the modified board.
    /// ## Errors
    /// If a word contains something other than letters.
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let board = Board::default().with_dictionary_from_words(&["aardvark", "zebra"])?;
    /// assert_eq!(board.dictionary().word_count(), 2);
    /// # Ok::<(), Error>(())
    ///```
    pub fn with_dictionary_from_words(mut self, words: &[&str]) -> Result<Board, Error> {
        self.dictionary = Dictionary::from_words(words)?;
        Ok(self)
    }

    /// Use an existing dictionary, and returns the modified board.
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Board {
        self.dictionary = dictionary;
        self
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters; a space or "." is an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains something other than letters.
    pub fn state_from_strings(rows: &[&str]) -> Result<State, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = [[None; N]; N];
        for (i, &row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, c) in row.chars().enumerate() {
                state[i][j] = match c {
                    ' ' | '.' => None,
                    c => Some(Letter::try_from(c)?),
                };
            }
        }
        Ok(state)
    }

    /// Set board state from list of strings. All letters count as played in an
    /// earlier turn, and the anchors are recomputed.
    /// ## Errors
    /// See [`state_from_strings`](Board::state_from_strings)
    pub fn set_state_from_strings(&mut self, rows: &[&str]) -> Result<(), Error> {
        let state = Self::state_from_strings(rows)?;
        self.set_state(&state);
        Ok(())
    }

    /// Set board state from list of strings, and returns the modified board.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let state = &[
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     ".......cat.....",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert!(board.is_played(7, 8));
    /// assert!(board.anchors().contains(&(8, 8)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Replace all letters on the board, update squares and anchors
    pub fn set_state(&mut self, state: &State) {
        self.letters = *state;
        self.squares = Self::squares_from_grid(&self.grid);
        for (i, row) in state.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    self.squares[i][j].set_played();
                }
            }
        }
        self.reset_anchors();
    }

    /// Set board squares from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board squares.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        self.grid = Grid::from_strings(grid)?;
        let state = self.letters;
        self.set_state(&state);
        Ok(())
    }

    /// Set board squares from string representation, and returns the modified board.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board squares.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// Anchors are the empty squares next to a played letter,
    /// or only the center square on an empty board.
    fn reset_anchors(&mut self) {
        self.anchors.clear();
        for row in 0..N {
            for col in 0..N {
                if self.is_played(row, col) {
                    for neighbor in neighbors((row, col)) {
                        if !self.is_played(neighbor.0, neighbor.1) {
                            self.anchors.insert(neighbor);
                        }
                    }
                }
            }
        }
        if self.anchors.is_empty() && !self.is_played(CENTER.0, CENTER.1) {
            self.anchors.insert(CENTER);
        }
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return tileset
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// The squares where a new word can touch the board, in (`row`, `col`) order.
    pub fn anchors(&self) -> &BTreeSet<Coord> {
        &self.anchors
    }

    /// Return the square at `row`, `col`, or None outside the board.
    pub fn square(&self, row: usize, col: usize) -> Option<Square> {
        if row < N && col < N {
            return Some(self.squares[row][col]);
        }
        None
    }

    /// Return the played letter at `row`, `col`, or None if empty or outside the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<Letter> {
        if row < N && col < N {
            return self.letters[row][col];
        }
        None
    }

    /// Check if a tile can be placed at `row`, `col`: the square is on the board,
    /// not played, and not taken by a staged tile.
    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.square(row, col).map_or(false, |square| square.is_available())
    }

    /// Check if a letter was played at `row`, `col` in an earlier turn.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let mut board = Board::default().with_dictionary_from_words(&["aardvark"])?;
    /// board.play_word("aardvark", 7, 7, true)?;
    /// assert!(board.is_played(7, 7));
    /// assert!(!board.is_played(15, 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_played(&self, row: usize, col: usize) -> bool {
        self.square(row, col).map_or(false, |square| square.is_played())
    }

    /// Mark the square at `row`, `col` as taken or free while tiles are staged.
    /// Played squares and squares outside the board are not affected.
    pub fn set_availability(&mut self, row: usize, col: usize, available: bool) {
        if row < N && col < N {
            self.squares[row][col].set_availability(available);
        }
    }

    fn letter_with(&self, staged: &Placement, coord: Coord) -> Option<Letter> {
        staged
            .get(&coord)
            .copied()
            .or_else(|| self.letter_at(coord.0, coord.1))
    }

    /// Check if the staged tiles share a row (`horizontal`) or column, and every square
    /// between the first and last tile holds a staged or played letter.
    fn is_unbroken(&self, staged: &Placement, first: Coord, last: Coord, horizontal: bool) -> bool {
        if horizontal {
            staged.keys().all(|&(row, _)| row == first.0)
                && (first.1..=last.1).all(|col| self.letter_with(staged, (first.0, col)).is_some())
        } else {
            staged.keys().all(|&(_, col)| col == first.1)
                && (first.0..=last.0).all(|row| self.letter_with(staged, (row, first.1)).is_some())
        }
    }

    /// Calculate the score of the staged tiles, or the reason they can not be played.
    ///
    /// The tiles must touch an anchor, lie in one unbroken row or column, and every
    /// word they form must be in the dictionary: the word along the tiles, extended
    /// with adjacent played letters, and each word crossing a staged tile.
    ///
    /// A letter premium counts only for a staged tile, a word premium multiplies the
    /// word for each staged tile on it. Letters played in earlier turns score their
    /// plain value.
    /// ## Errors
    /// Returns the [`IllegalMove`](crate::IllegalMove) that rejects the placement.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Placement, Error};
    /// let board = Board::default().with_dictionary_from_words(&["at"])?;
    /// let staged = Placement::from_word("at", 7, 7, true)?;
    /// assert_eq!(board.hand_legality_score(&staged), Ok(2));
    /// let staged = Placement::from_word("ta", 7, 7, true)?;
    /// assert!(board.hand_legality_score(&staged).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn hand_legality_score(&self, staged: &Placement) -> Result<u32, IllegalMove> {
        self.evaluate(staged).map(|(_, score)| score)
    }

    /// The main word formed by the staged tiles, with its score.
    /// ## Errors
    /// See [`hand_legality_score`](Board::hand_legality_score).
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Placement, Error};
    /// let board = Board::default().with_dictionary_from_words(&["at"])?;
    /// let word = board.hand_word(&Placement::from_word("at", 6, 7, false)?)?;
    /// assert_eq!(word.text(), "at");
    /// assert_eq!(word.score(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn hand_word(&self, staged: &Placement) -> Result<Word, IllegalMove> {
        let (text, score) = self.evaluate(staged)?;
        Ok(Word::new(text, staged.clone(), score))
    }

    fn evaluate(&self, staged: &Placement) -> Result<(String, u32), IllegalMove> {
        let first = *staged.keys().next().ok_or(IllegalMove::EmptyHand)?;
        let last = *staged.keys().next_back().ok_or(IllegalMove::EmptyHand)?;
        for &(row, col) in staged.keys() {
            if row >= N || col >= N {
                return Err(IllegalMove::OffBoard((row, col)));
            }
            if self.is_played(row, col) {
                return Err(IllegalMove::SquareTaken((row, col)));
            }
        }
        if !staged.keys().any(|coord| self.anchors.contains(coord)) {
            return Err(IllegalMove::NotAnchored);
        }
        let vertical = self.is_unbroken(staged, first, last, false);
        let horizontal = self.is_unbroken(staged, first, last, true);
        match (vertical, horizontal) {
            // A single tile forms its word in whichever direction it has neighbors
            (true, true) => match self.line_score(staged, first, false, true) {
                Err(IllegalMove::TooShort) => self.line_score(staged, first, true, true),
                res => res,
            },
            (true, false) => self.line_score(staged, first, false, true),
            (false, true) => self.line_score(staged, first, true, true),
            (false, false) => Err(IllegalMove::NotAligned),
        }
    }

    /// Score the word through `origin` in the given direction.
    ///
    /// With `cross_check` set this is the main word of the move: it must have at
    /// least two letters, and for every staged tile on it the crossing word is scored
    /// by a call with `cross_check` unset. That call never recurses again, so the
    /// recursion is at most one level deep. A crossing "word" of a single letter
    /// means the tile has no neighbors in that direction, and scores 0.
    fn line_score(
        &self,
        staged: &Placement,
        origin: Coord,
        horizontal: bool,
        cross_check: bool,
    ) -> Result<(String, u32), IllegalMove> {
        let (dr, dc) = if horizontal { (0, 1) } else { (1, 0) };
        let (mut row, mut col) = origin;
        while row >= dr && col >= dc && self.letter_with(staged, (row - dr, col - dc)).is_some() {
            row -= dr;
            col -= dc;
        }

        let mut text = String::new();
        let mut letter_points = 0;
        let mut word_multiplier = 1;
        let mut cross_points = 0;
        while let Some(letter) = self.letter_with(staged, (row, col)) {
            text.push(letter.to_char());
            let mut points = self.tileset.points(letter);
            if staged.contains_key(&(row, col)) {
                let square = self.squares[row][col];
                points *= square.letter_multiplier();
                word_multiplier *= square.word_multiplier();
                if cross_check {
                    cross_points += self.line_score(staged, (row, col), !horizontal, false)?.1;
                }
            }
            letter_points += points;
            row += dr;
            col += dc;
        }

        if text.len() <= 1 {
            return if cross_check {
                Err(IllegalMove::TooShort)
            } else {
                Ok((text, 0))
            };
        }
        if !self.dictionary.accepts(&text) {
            return Err(IllegalMove::NotAWord(text));
        }
        Ok((text, letter_points * word_multiplier + cross_points))
    }

    /// Validate and commit the staged tiles. The letters are written to the board,
    /// their squares are played for the rest of the game, and the anchors are updated.
    /// Returns the score of the move.
    /// ## Errors
    /// If the move is not legal, see [`hand_legality_score`](Board::hand_legality_score).
    /// The board is not changed.
    pub fn play_hand(&mut self, staged: &Placement) -> Result<u32, IllegalMove> {
        let score = self.hand_legality_score(staged)?;
        self.commit(staged);
        Ok(score)
    }

    /// Write the staged letters to the board. The placement must be legal.
    pub(crate) fn commit(&mut self, staged: &Placement) {
        for (&(row, col), &letter) in staged.iter() {
            self.letters[row][col] = Some(letter);
            self.squares[row][col].set_played();
        }
        for &coord in staged.keys() {
            self.anchors.remove(&coord);
            for neighbor in neighbors(coord) {
                if !self.is_played(neighbor.0, neighbor.1) {
                    self.anchors.insert(neighbor);
                }
            }
        }
    }

    /// Stage `word` at `row`, `col` in the given direction. Squares that already hold
    /// the same letter are skipped; the others make up the returned placement.
    /// ## Errors
    /// - If `word` contains something other than letters.
    /// - If the placed `word` does not fit on the board.
    /// - If a letter of `word` differs from a letter on the board.
    pub fn placement_for_word(
        &self,
        word: &str,
        row: usize,
        col: usize,
        horizontal: bool,
    ) -> Result<Placement, Error> {
        let len = word.chars().count();
        let (dr, dc) = if horizontal { (0, 1) } else { (1, 0) };
        if (row + len * dr > N) || (col + len * dc > N) {
            return Err(Error::TilePlacementError {
                row,
                col,
                horizontal,
                len,
            });
        }
        let mut staged = Placement::new();
        for ((r, c), letter) in Placement::from_word(word, row, col, horizontal)?.iter() {
            match self.letter_at(*r, *c) {
                None => {
                    staged.insert((*r, *c), *letter);
                }
                Some(played) if played == *letter => {}
                Some(_) => return Err(Error::TileReplaceError { row: *r, col: *c }),
            }
        }
        Ok(staged)
    }

    /// Play `word` at `row`, `col` in the given direction.
    /// Returns the score of the move.
    /// ## Errors
    /// - See [`placement_for_word`](Board::placement_for_word).
    /// - If the move is not legal.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let mut board = Board::default().with_dictionary_from_words(&["rust", "rest"])?;
    /// let score = board.play_word("rust", 7, 7, true)?;
    /// assert_eq!(score, 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_word(&mut self, word: &str, row: usize, col: usize, horizontal: bool) -> Result<u32, Error> {
        let staged = self.placement_for_word(word, row, col, horizontal)?;
        Ok(self.play_hand(&staged)?)
    }

    /// The played letters that run on from `row`, `col` along the line, before it
    /// or after it, in reading order. The square itself is not included.
    pub(crate) fn played_run(&self, row: usize, col: usize, horizontal: bool, after: bool) -> String {
        let (dr, dc) = if horizontal { (0, 1) } else { (1, 0) };
        let (mut r, mut c) = (row, col);
        let mut run = Vec::new();
        loop {
            if after {
                r += dr;
                c += dc;
            } else if r >= dr && c >= dc {
                r -= dr;
                c -= dc;
            } else {
                break;
            }
            match self.letter_at(r, c) {
                Some(letter) => run.push(letter.to_char()),
                None => break,
            }
        }
        if !after {
            run.reverse();
        }
        run.into_iter().collect()
    }
}

/// The squares above, below, left and right of `coord` that are on the board.
fn neighbors((row, col): Coord) -> impl Iterator<Item = Coord> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let down = Some((row + 1, col)).filter(|&(r, _)| r < N);
    let right = Some((row, col + 1)).filter(|&(_, c)| c < N);
    vec![up, down, left, right].into_iter().flatten()
}
