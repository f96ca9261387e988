use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// The dimension of a scrabble board: N x N squares
pub const N: usize = 15;
/// The center square, which the first word must cover.
pub const CENTER: (usize, usize) = (N / 2, N / 2);
const Q: usize = 1 + N / 2;

/// Upper left quadrant of the board, including the center row and column.
const QUARTER_BOARD: [&str; Q] = [
    "tw -- -- dl -- -- -- tw",
    "-- dw -- -- -- tl -- --",
    "-- -- dw -- -- -- dl --",
    "dl -- -- dw -- -- -- dl",
    "-- -- -- -- dw -- -- --",
    "-- tl -- -- -- tl -- --",
    "-- -- dl -- -- -- dl --",
    "tw -- -- dl -- -- -- cs",
];

/// The premium of a square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SquareKind {
    Normal,
    Center,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use SquareKind::{Center, DoubleLetter, DoubleWord, Normal, TripleLetter, TripleWord};

impl SquareKind {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            DoubleWord => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for SquareKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Normal => "--",
            Center => "cs",
            DoubleLetter => "dl",
            TripleLetter => "tl",
            DoubleWord => "dw",
            TripleWord => "tw",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SquareKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Normal),
            "cs" => Ok(Center),
            "dl" => Ok(DoubleLetter),
            "tl" => Ok(TripleLetter),
            "dw" => Ok(DoubleWord),
            "tw" => Ok(TripleWord),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// One square of a board in play.
///
/// `played` is set once, when a turn commits a letter to the square. From then on
/// the square can not be written again and its premium is used up.
/// `available` is toggled while tiles are staged for the current turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    kind: SquareKind,
    available: bool,
    played: bool,
}

impl Square {
    pub fn new(kind: SquareKind) -> Square {
        Square {
            kind,
            available: true,
            played: false,
        }
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    pub fn letter_multiplier(&self) -> u32 {
        self.kind.letter_multiplier()
    }

    pub fn word_multiplier(&self) -> u32 {
        self.kind.word_multiplier()
    }

    pub fn is_available(&self) -> bool {
        !self.played && self.available
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Has no effect on a played square.
    pub fn set_availability(&mut self, available: bool) {
        if !self.played {
            self.available = available;
        }
    }

    pub(crate) fn set_played(&mut self) {
        self.played = true;
        self.available = false;
    }
}

type Inner = [[SquareKind; N]; N];
/// Scrabble board grid, consisting of 15x15 (normal or premium) squares.
///
/// A premium square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square at (7,7) must be used in the first turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard scrabble board
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Grid, SquareKind};
    /// let grid = Grid::default();
    /// assert_eq!(grid[0][0], SquareKind::TripleWord);
    /// assert_eq!(grid[7][7], SquareKind::Center);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a new empty grid 15x15 squares with no premium.
    fn empty() -> Grid {
        Grid([[Normal; N]; N])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            for (j, c) in row.split(' ').enumerate() {
                let val = c.parse().unwrap_or(Normal);
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Get board squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(SquareKind::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `SquareKind`.
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let squares: Vec<&str> = row.as_ref().split(' ').collect();
            if squares.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    squares.len(),
                ));
            }
            for (j, &square) in squares.iter().enumerate() {
                board[i][j] = square.parse()?;
            }
        }
        Ok(board)
    }
}
