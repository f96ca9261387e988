//! Basic types for working with scrabble letters.
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// Maximum length of a `Letters` list: one full row plus one.
pub const DIM: usize = 16;

/// The letters a player holds, or any short list of letters.
pub type Letters = ArrayVec<[Letter; DIM]>;

/// A lowercase letter `a`..`z`.
///
/// The letter is stored as its index in the alphabet, so it can be used
/// directly to index transition tables and point tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Return the letter with alphabet index `i`, or None if `i` is out of range.
    pub fn from_index(i: usize) -> Option<Letter> {
        if i < Self::COUNT {
            Some(Letter(i as u8))
        } else {
            None
        }
    }

    /// Index of the letter in the alphabet: `a` is 0, `z` is 25.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The lowercase character for this letter.
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterate over `a`..`z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    /// Accepts `a`..`z` in either case.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use scrabble_solver::{Letter, Error};
    /// let letter = Letter::try_from('Q')?;
    /// assert_eq!(letter.to_char(), 'q');
    /// assert!(Letter::try_from('*').is_err());
    /// # Ok::<(), Error>(())
    /// ```
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lc = c.to_ascii_lowercase();
        if lc.is_ascii_lowercase() {
            Ok(Letter(lc as u8 - b'a'))
        } else {
            Err(Error::InvalidLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a short string of letters, like a rack.
/// ## Errors
/// If `s` contains a character that is not a letter, or more than [`DIM`] letters.
/// ## Examples
/// ```
/// # use scrabble_solver::{parse_letters, Error};
/// let rack = parse_letters("Retains")?;
/// assert_eq!(rack.len(), 7);
/// # Ok::<(), Error>(())
/// ```
pub fn parse_letters(s: &str) -> Result<Letters, Error> {
    let mut letters = Letters::new();
    for c in s.chars() {
        let letter = Letter::try_from(c)?;
        if letters.try_push(letter).is_some() {
            return Err(Error::InvalidWord(String::from(s)));
        }
    }
    Ok(letters)
}

/// Lower-case and encode every character of `word`, or None if one is not a letter.
pub(crate) fn encode_word(word: &str) -> Option<Vec<Letter>> {
    word.chars().map(|c| Letter::try_from(c).ok()).collect()
}
