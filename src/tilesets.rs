use crate::{Error, Letter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// label, count, points
pub type TileInfo = (char, u32, u32);

/// The standard english tile distribution, without blanks.
const ENGLISH: [TileInfo; Letter::COUNT] = [
    ('a', 10, 1),
    ('b', 2, 3),
    ('c', 2, 3),
    ('d', 4, 2),
    ('e', 13, 1),
    ('f', 2, 4),
    ('g', 3, 2),
    ('h', 2, 4),
    ('i', 9, 1),
    ('j', 1, 8),
    ('k', 1, 5),
    ('l', 4, 1),
    ('m', 2, 3),
    ('n', 6, 1),
    ('o', 8, 1),
    ('p', 2, 3),
    ('q', 1, 10),
    ('r', 6, 1),
    ('s', 4, 1),
    ('t', 6, 1),
    ('u', 4, 1),
    ('v', 2, 4),
    ('w', 2, 4),
    ('x', 1, 8),
    ('y', 2, 4),
    ('z', 1, 10),
];

/// A tileset for `scrabble`: the number of tiles and the point value of each letter.
///
/// The tileset is plain data that is handed to a [`Board`](crate::Board) and a
/// [`TileBag`](crate::TileBag) when they are created, so independent games can
/// use different tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileSet {
    counts: [u32; Letter::COUNT],
    points: [u32; Letter::COUNT],
}

impl Default for TileSet {
    fn default() -> Self {
        Self::english()
    }
}

impl TileSet {
    /// The english tileset: 100 tiles, `q` and `z` worth 10 points.
    pub fn english() -> TileSet {
        // The built-in table is well formed
        Self::build(&ENGLISH)
    }

    fn build(tiles: &[TileInfo]) -> TileSet {
        let mut counts = [0; Letter::COUNT];
        let mut points = [0; Letter::COUNT];
        for (i, &(_, count, value)) in tiles.iter().enumerate().take(Letter::COUNT) {
            counts[i] = count;
            points[i] = value;
        }
        TileSet { counts, points }
    }

    /// Create a tileset from a table of (`label`, `count`, `points`), one entry
    /// for each letter `a`..`z` in alphabetical order.
    /// ## Errors
    /// If the table does not have exactly 26 entries in alphabetical order.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{TileSet, Letter, Error};
    /// let table: Vec<_> = Letter::all().map(|l| (l.to_char(), 4, 1)).collect();
    /// let tileset = TileSet::from_table(&table)?;
    /// assert_eq!(tileset.total_tiles(), 104);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_table(tiles: &[TileInfo]) -> Result<TileSet, Error> {
        let in_order = tiles.len() == Letter::COUNT
            && tiles
                .iter()
                .zip(Letter::all())
                .all(|(&(label, _, _), letter)| label == letter.to_char());
        if !in_order {
            return Err(Error::InvalidTileSet(tiles.len()));
        }
        Ok(Self::build(tiles))
    }

    /// Return the points for `letter`.
    pub fn points(&self, letter: Letter) -> u32 {
        self.points[letter.index()]
    }

    /// Return the number of tiles with `letter` in the tileset.
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Total number of tiles.
    pub fn total_tiles(&self) -> u32 {
        self.counts.iter().sum()
    }
}
