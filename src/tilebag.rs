use crate::{Error, Letter, TileSet};
use multiset::HashMultiSet;
use rand::{rngs::StdRng, seq::IteratorRandom, SeedableRng};

/// Keeps track of the tiles that have not been drawn yet.
///
/// Draws are random, from a seeded generator so a game can be replayed.
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: HashMultiSet<Letter>,
    rng: StdRng,
}

impl From<&TileSet> for TileBag {
    /// A full bag, seeded from system entropy.
    fn from(tileset: &TileSet) -> Self {
        TileBag::with_rng(tileset, StdRng::from_entropy())
    }
}

impl TileBag {
    /// A full bag with the tiles of `tileset`, seeded with `seed`.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{TileBag, TileSet};
    /// let bag = TileBag::new(&TileSet::english(), 123);
    /// assert_eq!(bag.len(), 100);
    /// ```
    pub fn new(tileset: &TileSet, seed: u64) -> TileBag {
        TileBag::with_rng(tileset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tileset: &TileSet, rng: StdRng) -> TileBag {
        let mut tiles = HashMultiSet::new();
        for letter in Letter::all() {
            let count = tileset.count(letter) as usize;
            if count > 0 {
                tiles.insert_times(letter, count);
            }
        }
        TileBag { tiles, rng }
    }

    /// Number of tiles left.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles left with `letter`.
    pub fn count_of(&self, letter: Letter) -> usize {
        self.tiles.count_of(&letter)
    }

    /// Draw `n` random tiles, or all remaining tiles if fewer are left.
    /// ## Errors
    /// Returns [`Error::OutOfTiles`] if the bag is empty.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{TileBag, TileSet, Error};
    /// let mut bag = TileBag::new(&TileSet::english(), 123);
    /// let rack = bag.draw_tiles(7)?;
    /// assert_eq!(rack.len(), 7);
    /// assert_eq!(bag.len(), 93);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn draw_tiles(&mut self, n: usize) -> Result<Vec<Letter>, Error> {
        if self.is_empty() {
            return Err(Error::OutOfTiles);
        }
        let amount = n.min(self.len());
        // sorted, so the draw only depends on the seed
        let mut tiles: Vec<Letter> = self.tiles.iter().copied().collect();
        tiles.sort_unstable();
        let drawn: Vec<Letter> = tiles.into_iter().choose_multiple(&mut self.rng, amount);
        for letter in &drawn {
            self.tiles.remove(letter);
        }
        Ok(drawn)
    }

    /// Put `discards` back into the bag in exchange for as many new tiles.
    /// The new tiles are drawn before the discards go back in.
    /// ## Errors
    /// Returns [`Error::ExchangeTooMany`] if there are fewer tiles left than `discards`.
    pub fn exchange_tiles(&mut self, discards: &[Letter]) -> Result<Vec<Letter>, Error> {
        if discards.len() > self.len() {
            return Err(Error::ExchangeTooMany {
                requested: discards.len(),
                remaining: self.len(),
            });
        }
        if discards.is_empty() {
            return Ok(Vec::new());
        }
        let drawn = self.draw_tiles(discards.len())?;
        for &letter in discards {
            self.tiles.insert(letter);
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_full_bag() -> Result<()> {
        let bag = TileBag::new(&TileSet::english(), 1);
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.count_of(Letter::try_from('e')?), 13);
        assert_eq!(bag.count_of(Letter::try_from('z')?), 1);
        Ok(())
    }

    #[test]
    fn test_draw_until_empty() -> Result<()> {
        let mut bag = TileBag::new(&TileSet::english(), 2);
        let mut drawn = Vec::new();
        while !bag.is_empty() {
            drawn.extend(bag.draw_tiles(7)?);
        }
        assert_eq!(drawn.len(), 100);
        for letter in Letter::all() {
            let n = drawn.iter().filter(|&&l| l == letter).count();
            assert_eq!(n as u32, TileSet::english().count(letter));
        }
        assert!(matches!(bag.draw_tiles(1), Err(Error::OutOfTiles)));
        Ok(())
    }

    #[test]
    fn test_draw_more_than_left() -> Result<()> {
        let table: Vec<_> = Letter::all()
            .map(|l| (l.to_char(), if l.to_char() == 'a' { 3 } else { 0 }, 1))
            .collect();
        let mut bag = TileBag::new(&TileSet::from_table(&table)?, 3);
        assert_eq!(bag.draw_tiles(7)?.len(), 3);
        assert!(bag.is_empty());
        Ok(())
    }

    #[test]
    fn test_seeded_draws_repeat() -> Result<()> {
        let mut bag1 = TileBag::new(&TileSet::english(), 42);
        let mut bag2 = TileBag::new(&TileSet::english(), 42);
        assert_eq!(bag1.draw_tiles(7)?, bag2.draw_tiles(7)?);
        Ok(())
    }

    #[test]
    fn test_exchange() -> Result<()> {
        let mut bag = TileBag::new(&TileSet::english(), 4);
        let mut rack = bag.draw_tiles(7)?;
        let discards: Vec<Letter> = rack.drain(..3).collect();
        let new = bag.exchange_tiles(&discards)?;
        assert_eq!(new.len(), 3);
        assert_eq!(bag.len(), 93);
        assert!(bag.exchange_tiles(&[]).unwrap().is_empty());

        let mut small = TileBag::new(&TileSet::english(), 5);
        small.draw_tiles(98)?;
        match small.exchange_tiles(&discards) {
            Err(Error::ExchangeTooMany {
                requested: 3,
                remaining: 2,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }
}
