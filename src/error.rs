use crate::word::Coord;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error (de)serializing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be (de)serialized")]
    DictionarySerializeError(String),

    /// The word contains characters outside `a`..`z`
    #[error("Invalid word \"{0}\"")]
    InvalidWord(String),

    /// The character is not a letter `a`..`z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing a premium square
    #[error("Invalid grid square: \"{0}\"")]
    GridParseError(String),

    /// A tile table must describe `a`..`z` in order
    #[error("Invalid tile table: {0} entries, expect 26 in alphabetical order")]
    InvalidTileSet(usize),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        horizontal: bool,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// The tile bag was empty when tiles were drawn
    #[error("No tiles left")]
    OutOfTiles,

    /// More tiles were offered for exchange than are left in the bag
    #[error("Cannot exchange {requested} tiles with {remaining} left in the bag")]
    ExchangeTooMany { requested: usize, remaining: usize },

    /// A released letter is not held in the rack
    #[error("Letter '{0}' is not in the rack")]
    LetterNotInRack(char),

    /// A move that was expected to be legal was rejected
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

/// Why a staged placement was rejected.
///
/// Rejection is a normal outcome of a legality query and is never fatal.
/// It is kept apart from a legal move that scores zero points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("No tiles placed")]
    EmptyHand,

    #[error("Square {0:?} is off the board")]
    OffBoard(Coord),

    #[error("Square {0:?} is already taken")]
    SquareTaken(Coord),

    /// No tile touches an anchor: the center square on the first turn,
    /// a square next to a played letter afterwards.
    #[error("Tiles must touch the center square or a played letter")]
    NotAnchored,

    #[error("Tiles must form a single unbroken row or column")]
    NotAligned,

    #[error("A word needs at least two letters")]
    TooShort,

    #[error("\"{0}\" is not a word")]
    NotAWord(String),
}
