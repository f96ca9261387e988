use crate::labelset::LetterSet;
use crate::tiles::{encode_word, Letter};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;

/// Index of a state in the [`Dictionary`] automaton.
pub type StateId = u32;

/// Marks a missing transition. No transition ever leads back to the start state.
const NO_STATE: StateId = 0;
const START: StateId = 0;

type Transitions = [StateId; Letter::COUNT];

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A deterministic finite automaton that accepts exactly the words of a word list.
///
/// States live in an arena and are addressed by [`StateId`]. Each state has a
/// transition table with one slot per letter, and an accepting flag.
/// The start state has a transition for every letter, so every single letter is a
/// reachable (but not accepting) state. Beyond that the automaton is a trie: it is
/// deterministic, but not minimized.
pub struct Dictionary {
    transitions: Vec<Transitions>,
    accepting: Vec<bool>,
    word_count: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} states from '{}'>",
            self.word_count,
            self.state_count(),
            self.wordfile
        )
    }
}

impl Default for Dictionary {
    /// A dictionary without words
    fn default() -> Self {
        let mut dictionary = Dictionary {
            transitions: vec![[NO_STATE; Letter::COUNT]],
            accepting: vec![false],
            word_count: 0,
            wordfile: String::new(),
        };
        for letter in Letter::all() {
            let state = dictionary.add_state();
            dictionary.transitions[START as usize][letter.index()] = state;
        }
        dictionary
    }
}

impl Dictionary {
    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read, or a word contains something other than letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_file("wordlists/words.txt")?;
    /// assert!(dictionary.accepts("quiz"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_lines(contents.lines())?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word contains something other than letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "car", "at"])?;
    /// assert!(dictionary.accepts("cat"));
    /// assert!(!dictionary.accepts("ca"));
    /// assert!(!dictionary.accepts("dog"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Dictionary, Error> {
        Dictionary::from_lines(words.iter())
    }

    /// Build a dictionary from lines of text, one word per line.
    /// Surrounding whitespace is trimmed, and empty lines are skipped.
    /// ## Errors
    /// If a word contains something other than letters.
    pub fn from_lines<I, S>(lines: I) -> Result<Dictionary, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();
        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let letters = encode_word(word).ok_or_else(|| Error::InvalidWord(String::from(word)))?;
            dictionary.insert(&letters);
        }
        Ok(dictionary)
    }

    fn add_state(&mut self) -> StateId {
        self.transitions.push([NO_STATE; Letter::COUNT]);
        self.accepting.push(false);
        (self.transitions.len() - 1) as StateId
    }

    fn insert(&mut self, word: &[Letter]) {
        let mut state = START;
        for &letter in word {
            state = match self.step(state, letter) {
                Some(next) => next,
                None => {
                    let next = self.add_state();
                    self.transitions[state as usize][letter.index()] = next;
                    next
                }
            };
        }
        let accepting = &mut self.accepting[state as usize];
        if !*accepting {
            *accepting = true;
            self.word_count += 1;
        }
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary into a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::DictionarySerializeError(String::from(path)))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let mut dictionary: Dictionary = bincode::deserialize_from(BufReader::new(file))
            .map_err(|_| Error::DictionarySerializeError(String::from(path)))?;
        dictionary.wordfile = String::from(path);
        Ok(dictionary)
    }

    /// The start state, reached by the empty prefix.
    pub fn start(&self) -> StateId {
        START
    }

    /// Follow the transition for `letter` from `state`.
    pub fn step(&self, state: StateId, letter: Letter) -> Option<StateId> {
        match self.transitions[state as usize][letter.index()] {
            NO_STATE => None,
            next => Some(next),
        }
    }

    /// Follow the transitions for every character of `word` from `state`.
    /// Returns None if a transition is missing or a character is not a letter.
    pub fn walk(&self, state: StateId, word: &str) -> Option<StateId> {
        word.chars().try_fold(state, |state, c| {
            let letter = Letter::try_from(c).ok()?;
            self.step(state, letter)
        })
    }

    /// Returns true if `state` ends a word.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state as usize]
    }

    /// Returns true if `word` is in the dictionary. Case is ignored.
    /// Anything that is not a word, including the empty string, is rejected.
    pub fn accepts(&self, word: &str) -> bool {
        self.walk(START, word)
            .map_or(false, |state| self.is_accepting(state))
    }

    /// The letters with a transition out of `state`.
    pub fn letters_after(&self, state: StateId) -> LetterSet {
        Letter::all()
            .filter(|&letter| self.step(state, letter).is_some())
            .collect()
    }

    /// The number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of states in the automaton.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Path of the wordfile, empty if not built from a file.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_accepts_every_word() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.word_count(), WORDS.len());
        for &word in WORDS {
            assert!(dictionary.accepts(word), "{}", word);
            assert!(dictionary.accepts(&word.to_uppercase()), "{}", word);
        }
    }

    #[test]
    fn test_rejects_other_words() {
        let dictionary = test_dictionary();
        for &word in &["", "a", "b", "be", "aa", "belts", "zz", "b-l", "bél"] {
            assert!(!dictionary.accepts(word), "{}", word);
        }
    }

    #[test]
    fn test_cat_car_at() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["cat", "car", "at"])?;
        assert!(dictionary.accepts("cat"));
        assert!(!dictionary.accepts("ca"));
        assert!(!dictionary.accepts("dog"));
        // start, 26 single letters, "ca", "cat", "car", "at"
        assert_eq!(dictionary.state_count(), 31);
        Ok(())
    }

    #[test]
    fn test_single_letters_are_reachable() {
        let dictionary = Dictionary::default();
        assert_eq!(dictionary.letters_after(dictionary.start()).len(), 26);
        for letter in Letter::all() {
            let state = dictionary.step(dictionary.start(), letter).unwrap();
            assert!(!dictionary.is_accepting(state));
            assert!(dictionary.letters_after(state).is_empty());
        }
    }

    #[test]
    fn test_walk_and_step() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let be = dictionary.walk(dictionary.start(), "be").unwrap();
        let after: String = dictionary.letters_after(be).iter().map(|l| l.to_char()).collect();
        assert_eq!(after, "ls");
        let bel = dictionary.step(be, Letter::try_from('l')?).unwrap();
        assert!(dictionary.is_accepting(bel));
        assert_eq!(dictionary.walk(bel, "t"), dictionary.walk(dictionary.start(), "belt"));
        assert_eq!(dictionary.walk(be, "x"), None);
        Ok(())
    }

    #[test]
    fn test_whitespace_and_duplicates() -> Result<(), Error> {
        let dictionary = Dictionary::from_lines(vec!["  cat\r", "", "cat", "Dog "])?;
        assert_eq!(dictionary.word_count(), 2);
        assert!(dictionary.accepts("dog"));
        assert!(!dictionary.accepts(""));
        Ok(())
    }

    #[test]
    fn test_invalid_word() {
        match Dictionary::from_words(&["ok", "can't"]) {
            Err(Error::InvalidWord(word)) => assert_eq!(word, "can't"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let res = Dictionary::from_file("no/such/file.txt");
        assert!(matches!(res, Err(Error::ReadError { .. })));
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let dictionary = Dictionary::from_file("wordlists/words.txt")?;
        assert!(dictionary.word_count() > 100);
        assert_eq!(dictionary.wordfile(), "wordlists/words.txt");
        println!("{}", dictionary);
        Ok(())
    }
}
