use crate::tiles::Letter;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

/// A bitset of letters `a`..`z`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add `letter`. Returns true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let v = letter.index();
        let r = (self.0 & (1 << v)) != 0;
        self.0 |= 1 << v;
        r
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Letter::to_char).collect();
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    count: usize,
    value: u32,
}

impl IteratorLetterSet {
    fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Letter;
    fn next(&mut self) -> Option<Letter> {
        while self.count < Letter::COUNT {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Letter::from_index(i);
            }
        }
        None
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
