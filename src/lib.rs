//! A boggle solver library for Rust.
//! <br>
//! This crate finds all the words from a wordlist that can be traced on a boggle board:
//! a square grid of tiles, where a word is spelled by a path of adjacent tiles (horizontal,
//! vertical or diagonal) that uses each tile at most once.
//! It can use the `rayon` crate to search from all starting tiles in parallel.
//!
//! Some tiles contain more than one letter. The tiles `Qu`, `St` and `Ie` count as two letters
//! toward the minimum word length of 3. The single letters `Q`, `S` and `I` are not allowed on the
//! board. These [`Rules`] can be changed.
//!
//! # How to use `boggle_solver`
//! For a single board, call [`solve`] with the rows of the board and the list of words.
//! To solve several boards with the same wordlist, create a [`Board`] and reuse its wordlist.
//! The wordlist can be read from a file in utf-8 with one word per line.
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Board, Error};
//! let mut board = Board::default()
//!     .with_wordlist_from_words(&["art", "ego", "gent", "newt", "qua", "quart", "tarp"])
//!     .with_grid_from_strings(&["T W Y R", "E N P H", "G Z Qu R", "O N T A"])?;
//! let words = board.find_words();
//! assert_eq!(words, ["ART", "EGO", "GENT", "NEWT", "QUA", "QUART", "TARP"]);
//! for word in words {
//!     println!("{} {:?}", word, board.trace(&word));
//! }
//! board.set_grid_from_strings(&["A R", "T E"])?;
//! assert_eq!(board.find_words(), ["ART"]);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod error;
mod grid;
mod rules;
mod solve;
mod wordlist;

pub use crate::board::{Board, Path};
pub use crate::error::Error;
pub use crate::grid::{Grid, Tile};
pub use crate::rules::{Rules, MIN_WORD_LEN, RESERVED_TILES, SPECIAL_TILES};
pub use crate::solve::{solve, solve_with_rules, try_solve, try_solve_with_rules};
pub use crate::wordlist::Wordlist;
