use crate::tiles::encode_word;
use crate::{Error, Letter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// A square on the board as (`row`, `col`).
pub type Coord = (usize, usize);

/// Letters laid on the board for the current turn, not yet committed.
///
/// The coordinates are kept in (`row`, `col`) order, so the first and last entry
/// are the first and last tile of the placement.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement(BTreeMap<Coord, Letter>);

impl Deref for Placement {
    type Target = BTreeMap<Coord, Letter>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Placement {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(Coord, Letter)> for Placement {
    fn from_iter<I: IntoIterator<Item = (Coord, Letter)>>(iter: I) -> Self {
        Placement(iter.into_iter().collect())
    }
}

impl Placement {
    pub fn new() -> Placement {
        Placement(BTreeMap::new())
    }

    /// Lay out all letters of `word` from `row`, `col` in the given direction.
    /// No check is made against the board.
    /// ## Errors
    /// If `word` contains something other than letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Placement, Error};
    /// let placement = Placement::from_word("at", 7, 7, true)?;
    /// assert_eq!(placement.keys().copied().collect::<Vec<_>>(), vec![(7, 7), (7, 8)]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_word(word: &str, row: usize, col: usize, horizontal: bool) -> Result<Placement, Error> {
        let letters = encode_word(word).ok_or_else(|| Error::InvalidWord(String::from(word)))?;
        let (dr, dc) = if horizontal { (0, 1) } else { (1, 0) };
        Ok(letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| ((row + i * dr, col + i * dc), letter))
            .collect())
    }

    /// The staged letters, in (`row`, `col`) order.
    pub fn letters(&self) -> Vec<Letter> {
        self.values().copied().collect()
    }
}

/// A word that was found or played: the text of the word, the letters that were
/// placed for it, and its score.
///
/// Words compare by score only: two words with the same score are equal, whatever
/// their text.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    text: String,
    placement: Placement,
    score: u32,
}

impl Word {
    pub fn new(text: String, placement: Placement, score: u32) -> Word {
        Word {
            text,
            placement,
            score,
        }
    }

    /// The whole word as it reads on the board, including letters that were
    /// already played.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tiles placed to form the word.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True for the empty word that stands for "no move found".
    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Word: {}, score: {}", self.text, self.score)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_order_by_score() -> Result<(), Error> {
        let cat = Word::new(String::from("cat"), Placement::from_word("cat", 7, 6, true)?, 5);
        let dog = Word::new(String::from("dog"), Placement::from_word("dog", 6, 7, false)?, 5);
        let quiz = Word::new(String::from("quiz"), Placement::from_word("quiz", 7, 7, true)?, 22);
        assert_eq!(cat, dog);
        assert!(quiz > cat);
        let best = vec![cat, quiz, dog].into_iter().max().unwrap();
        assert_eq!(best.text(), "quiz");
        Ok(())
    }

    #[test]
    fn test_empty_word() {
        let word = Word::default();
        assert!(word.is_empty());
        assert_eq!(word.score(), 0);
        assert_eq!(word.to_string(), "Word: , score: 0");
    }

    #[test]
    fn test_placement_order() -> Result<(), Error> {
        let placement = Placement::from_word("tac", 9, 3, false)?;
        let keys: Vec<Coord> = placement.keys().copied().collect();
        assert_eq!(keys, vec![(9, 3), (10, 3), (11, 3)]);
        let letters: String = placement.letters().into_iter().map(char::from).collect();
        assert_eq!(letters, "tac");
        assert!(Placement::from_word("t c", 0, 0, true).is_err());
        Ok(())
    }
}
