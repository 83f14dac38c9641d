use crate::grid::Grid;
use crate::rules::Rules;
use crate::wordlist::Wordlist;
use crate::Error;

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tinyvec::TinyVec;

/// A list of (`row`, `col`) positions of adjacent cells on the board.
pub type Path = TinyVec<[(usize, usize); 16]>;

/// Display the grid as N lines of N tiles.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

/// A boggle board, with everything needed to find the words on it:
/// * A square grid of tiles,
/// * The wordlist used for the game,
/// * The [`Rules`](crate::Rules) for special tiles and word length.
///
/// A word is found if it can be spelled by a path of adjacent cells (horizontal, vertical
/// or diagonal), using each cell at most once, and its weighted length is at least
/// [`min_word_len`](Rules::min_word_len).
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    /// Weight of the tile in each cell, in row-major order.
    weights: Vec<u32>,
    wordlist: Wordlist,
    rules: Rules,
}

impl Board {
    /// Create a new board with an empty grid and an empty wordlist.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use boggle_solver::{Board, Rules};
    ///
    /// let board = Board::new(Rules::default().with_min_word_len(4));
    ///```
    /// Additional builder functions can be used to set the wordlist and grid of the board.
    /// See also:
    /// - [`with_wordlist_from_file`](Board::with_wordlist_from_file)
    /// - [`with_wordlist_from_words`](Board::with_wordlist_from_words)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_grid_from_rows`](Board::with_grid_from_rows)
    #[must_use]
    pub fn new(rules: Rules) -> Board {
        Board {
            grid: Grid::default(),
            weights: Vec::new(),
            wordlist: Wordlist::default(),
            rules,
        }
    }

    /// Specify the wordlist by a list of words, and returns the modified board.
    /// ## Example
    /// ```
    /// use boggle_solver::Board;
    /// let board = Board::default().with_wordlist_from_words(&["aardvark", "zebra"]);
    /// assert_eq!(board.wordlist().word_count(), 2);
    ///```
    #[must_use]
    pub fn with_wordlist_from_words<I, S>(mut self, words: I) -> Board
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.wordlist = Wordlist::from_words(words);
        self
    }

    /// Specify the wordlist by reading it from `wordfile`, and returns the modified board.
    ///
    /// The `wordfile` must contain one word per line.
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` can not be read.
    pub fn with_wordlist_from_file(mut self, wordfile: &str) -> Result<Board, Error> {
        self.wordlist = Wordlist::from_file(wordfile)?;
        Ok(self)
    }

    #[cfg(feature = "bincode")]
    /// Specify the wordlist by deserializing it from the `wordfile`, and returns the modified board.
    ///
    /// The `wordfile` should be encoded with [`bincode`](https://docs.rs/bincode/1.3.1/bincode/) file
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` does not exist, or cannot be decoded.
    pub fn with_wordlist_deserialize_from(mut self, wordfile: &str) -> Result<Board, Error> {
        self.wordlist = Wordlist::deserialize_from(wordfile)?;
        Ok(self)
    }

    /// Use `wordlist`, and returns the modified board.
    #[must_use]
    pub fn with_wordlist(mut self, wordlist: Wordlist) -> Board {
        self.set_wordlist(wordlist);
        self
    }

    /// Replace the wordlist.
    pub fn set_wordlist(&mut self, wordlist: Wordlist) {
        self.wordlist = wordlist;
    }

    /// Replace the grid.
    /// ## Errors
    /// If the grid contains a reserved tile. The board is not modified in that case.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), Error> {
        for (row, col, tile) in grid.iter() {
            if self.rules.is_reserved(tile) {
                return Err(Error::ReservedTile {
                    row,
                    col,
                    tile: tile.to_string(),
                });
            }
        }
        self.weights = grid.iter().map(|(_, _, tile)| self.rules.weight(tile)).collect();
        self.grid = grid;
        Ok(())
    }

    /// Set the grid from a list of rows of tiles.
    /// ## Errors
    /// If the rows do not form a square grid of valid tiles.
    pub fn set_grid_from_rows<R, S>(&mut self, rows: &[R]) -> Result<(), Error>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.set_grid(Grid::from_rows(rows)?)
    }

    /// Set the grid from a list of rows of tiles, and returns the modified board.
    /// ## Errors
    /// If the rows do not form a square grid of valid tiles.
    pub fn with_grid_from_rows<R, S>(mut self, rows: &[R]) -> Result<Board, Error>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.set_grid_from_rows(rows)?;
        Ok(self)
    }

    /// Set the grid from strings, one per row with the tiles separated by whitespace.
    /// ## Errors
    /// If the strings do not form a square grid of valid tiles.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        self.set_grid(Grid::from_strings(rows)?)
    }

    /// Set the grid from strings, and returns the modified board.
    /// ## Errors
    /// If the strings do not form a square grid of valid tiles.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::default().with_grid_from_strings(&[
    ///     "T W Y R",
    ///     "E N P H",
    ///     "G Z Qu R",
    ///     "O N T A",
    /// ])?;
    /// assert_eq!(board.grid().size(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(rows)?;
        Ok(self)
    }

    /// Return reference to our grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return reference to our wordlist
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Return reference to our rules
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Find all words on the board. Returns the words sorted, in uppercase.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::default()
    ///     .with_wordlist_from_words(&["qua", "quart", "tar", "tarp", "newt", "arty"])
    ///     .with_grid_from_strings(&["T W Y R", "E N P H", "G Z Qu R", "O N T A"])?;
    /// assert_eq!(board.find_words(), ["NEWT", "QUA", "QUART", "TAR", "TARP"]);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_words(&self) -> Vec<String> {
        let never = AtomicBool::new(false);
        // Only cancellation can make the search fail
        self.find_words_cancellable(&never).unwrap_or_default()
    }

    /// Find all words on the board, like [`find_words`](Board::find_words).
    /// The search is stopped when `cancel` is set, which is checked before the search
    /// from each starting cell.
    /// ## Errors
    /// [`Error::Cancelled`] if the search was cancelled.
    pub fn find_words_cancellable(&self, cancel: &AtomicBool) -> Result<Vec<String>, Error> {
        let now = Instant::now();
        let cells = self.weights.len();

        #[cfg(feature = "rayon")]
        let found = (0..cells)
            .into_par_iter()
            .try_fold(
                || Search::new(self),
                |mut search, start| {
                    if cancel.load(Ordering::Relaxed) {
                        return Err(Error::Cancelled);
                    }
                    search.run_from(start);
                    Ok(search)
                },
            )
            .map(|search| search.map(|search| search.found))
            .collect::<Result<Vec<_>, Error>>()?
            .into_iter()
            .fold(BTreeSet::new(), |mut all, found| {
                all.extend(found);
                all
            });

        #[cfg(not(feature = "rayon"))]
        let found = {
            let mut search = Search::new(self);
            for start in 0..cells {
                if cancel.load(Ordering::Relaxed) {
                    return Err(Error::Cancelled);
                }
                search.run_from(start);
            }
            search.found
        };

        debug!(
            "found {} words on {}x{} grid in {:?}",
            found.len(),
            self.grid.size(),
            self.grid.size(),
            now.elapsed()
        );
        Ok(found.into_iter().collect())
    }

    /// Check if `word` (in any case) can be found on the board.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::default()
    ///     .with_wordlist_from_words(&["ab", "abc", "abd"])
    ///     .with_grid_from_strings(&["A B", "C D"])?;
    /// assert!(board.is_valid_word("abc"));
    /// assert!(!board.is_valid_word("AB"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.wordlist.is_word(&word) && self.find_words().binary_search(&word).is_ok()
    }

    /// Return a path of cells that spells `word` (in any case), or `None` if there is no such path.
    ///
    /// Only adjacency and single use of each cell are checked, not the wordlist or the word length.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::default().with_grid_from_strings(&["A B", "Qu D"])?;
    /// let path = board.trace("quad").unwrap();
    /// assert_eq!(&path[..], &[(1, 0), (0, 0), (1, 1)]);
    /// assert!(board.trace("bab").is_none());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn trace(&self, word: &str) -> Option<Path> {
        let word = word.to_uppercase();
        if word.is_empty() {
            return None;
        }
        let mut visited = vec![false; self.weights.len()];
        let mut path = Path::default();
        for (row, col, _) in self.grid.iter() {
            if self.trace_from(&word, row, col, &mut visited, &mut path) {
                return Some(path);
            }
        }
        None
    }

    fn trace_from(
        &self,
        rest: &str,
        row: usize,
        col: usize,
        visited: &mut [bool],
        path: &mut Path,
    ) -> bool {
        let i = row * self.grid.size() + col;
        if visited[i] {
            return false;
        }
        let rest = match rest.strip_prefix(&*self.grid[(row, col)]) {
            Some(rest) => rest,
            None => return false,
        };
        visited[i] = true;
        path.push((row, col));
        if rest.is_empty()
            || self
                .grid
                .neighbors(row, col)
                .any(|(r, c)| self.trace_from(rest, r, c, visited, path))
        {
            return true;
        }
        path.pop();
        visited[i] = false;
        false
    }

    /// Sum of the tile weights along `path`.
    pub fn weighted_len(&self, path: &[(usize, usize)]) -> u32 {
        path.iter()
            .map(|&(row, col)| self.weights[row * self.grid.size() + col])
            .fold(0, u32::saturating_add)
    }
}

/// State of a depth first search for words. The visited cells and the current word
/// always describe the path from the start cell to the cell being visited.
struct Search<'a> {
    board: &'a Board,
    visited: Vec<bool>,
    word: String,
    found: BTreeSet<String>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board) -> Search<'a> {
        Search {
            board,
            visited: vec![false; board.weights.len()],
            word: String::new(),
            found: BTreeSet::new(),
        }
    }

    /// Find all words that start in cell `start` (row-major index).
    fn run_from(&mut self, start: usize) {
        let size = self.board.grid.size();
        self.visit(start / size, start % size, 0);
        debug_assert!(self.word.is_empty());
        debug_assert!(self.visited.iter().all(|&v| !v));
    }

    fn visit(&mut self, row: usize, col: usize, len: u32) {
        let board = self.board;
        let i = row * board.grid.size() + col;
        if self.visited[i] {
            return;
        }
        let mark = self.word.len();
        self.word.push_str(&board.grid[(row, col)]);
        if board.wordlist.is_prefix(&self.word) {
            let len = len.saturating_add(board.weights[i]);
            self.visited[i] = true;
            if len >= board.rules.min_word_len()
                && board.wordlist.is_word(&self.word)
                && !self.found.contains(&self.word)
            {
                trace!("found word: {}", self.word);
                self.found.insert(self.word.clone());
            }
            for (r, c) in board.grid.neighbors(row, col) {
                self.visit(r, c, len);
            }
            self.visited[i] = false;
        }
        self.word.truncate(mark);
    }
}
