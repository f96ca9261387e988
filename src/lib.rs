//! A scrabble rules engine for Rust.
//! <br>
//! This crate keeps the state of a game of scrabble: the 15x15 board with its premium
//! squares, the tiles in the bag and on the racks. It checks if a placement of tiles is
//! legal, scores it, and finds the best move for a rack of letters.
//! It can use the `rayon` crate to search the anchors of a board in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by creating a board, then specify the dictionary to be used, and optionally
//! the letters already on the board.
//! By default the standard board and the english tile values are used.
//! The dictionary must be in utf-8 and contain one word per line, with only the letters `a`..`z`.
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{parse_letters, Board, Placement, ScrabbleAi, Difficulty};
//!
//! let mut board = Board::default().with_dictionary_from_words(&["rust", "rest", "st"])?;
//! let staged = Placement::from_word("rust", 7, 7, true)?;
//! assert_eq!(board.play_hand(&staged)?, 4);
//!
//! let rack = parse_letters("eesx")?;
//! let word = ScrabbleAi::from(Difficulty::Master).find_best_move(&board, &rack);
//! println!("{}", word);
//! board.play_hand(word.placement())?;
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//!
//! The dictionary is a deterministic finite automaton with one state per word prefix.
//! The move search walks the automaton while it lays out letters from the rack, starting
//! at each anchor: an empty square next to a played letter, or the center square on an
//! empty board. Only prefixes of dictionary words are explored, and every complete
//! candidate is scored by the same rules check that is used for played moves.
//!
//! A legality check returns either the score of the move or the reason it is rejected,
//! so a rejected move is never confused with a move that scores nothing.
mod ai;
mod board;
mod dictionary;
mod error;
mod grid;
mod labelset;
mod player;
mod tilebag;
mod tiles;
mod tilesets;
mod word;

pub use ai::{find_best_move, Difficulty, ScrabbleAi};
pub use board::{Board, State};
pub use dictionary::{Dictionary, StateId};
pub use error::{Error, IllegalMove};
pub use grid::{Grid, Square, SquareKind, CENTER, N};
pub use labelset::LetterSet;
pub use player::{ComputerPlayer, HumanPlayer, Player, Rack, Turn, RACK_SIZE};
pub use tilebag::TileBag;
pub use tiles::{parse_letters, Letter, Letters};
pub use tilesets::{TileInfo, TileSet};
pub use word::{Coord, Placement, Word};
