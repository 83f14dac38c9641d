use crate::Error;
use std::fmt;
use std::ops::{Deref, Index};
use std::str::FromStr;

/// Row and column offsets of the 8 neighbours of a cell.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The contents of one square on the board: one or more letters, in uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile(String);

impl Tile {
    /// Create a tile from `s`, converted to uppercase.
    /// Returns `None` if `s` is empty or contains non-alphabetic characters.
    /// ## Examples
    /// ```
    /// use boggle_solver::Tile;
    /// assert_eq!(Tile::new("Qu").as_deref(), Some("QU"));
    /// assert!(Tile::new("a1").is_none());
    /// ```
    pub fn new(s: &str) -> Option<Tile> {
        let tile = s.to_uppercase();
        if !tile.is_empty() && tile.chars().all(char::is_alphabetic) {
            Some(Tile(tile))
        } else {
            None
        }
    }
}

impl Deref for Tile {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Tile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::new(s).ok_or_else(|| Error::TileParseError(String::from(s)))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square grid of N x N tiles.
///
/// A `Grid` is always square and contains only valid tiles. An empty grid (N = 0)
/// is only used as the initial state of a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Index<(usize, usize)> for Grid {
    type Output = Tile;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.tiles[row * self.size + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .tiles
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|tile| format!("{:<2}", tile.to_string()))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Grid {
    /// Create a `Grid` from a list of rows, each row a list of tiles.
    ///
    /// ## Errors
    /// - [`EmptyBoard`](Error::EmptyBoard) if there are no rows.
    /// - [`InvalidRowLength`](Error::InvalidRowLength) if the rows do not form a square.
    /// - [`InvalidTile`](Error::InvalidTile) if a tile is empty or not alphabetic.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_rows(&[["a", "b"], ["qu", "d"]])?;
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(&*grid[(1, 0)], "QU");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Grid, Error>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyBoard);
        }
        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != size {
                return Err(Error::InvalidRowLength { row: i, len, size });
            }
        }
        let mut tiles = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.as_ref().iter().enumerate() {
                let cell = cell.as_ref();
                let tile = Tile::new(cell).ok_or_else(|| Error::InvalidTile {
                    row: i,
                    col: j,
                    tile: String::from(cell),
                })?;
                tiles.push(tile);
            }
        }
        Ok(Grid { size, tiles })
    }

    /// Create a `Grid` from strings. Each string is a row of tiles separated by whitespace.
    ///
    /// ## Errors
    /// The same as [`from_rows`](Grid::from_rows).
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["T W Y", "E N P", "G Z Qu"])?;
    /// assert_eq!(grid.to_strings(), vec!["T W Y", "E N P", "G Z QU"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().split_whitespace().collect::<Vec<&str>>())
            .collect::<Vec<_>>();
        Grid::from_rows(&rows)
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the tile at `row`, `col`, or None if outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row < self.size && col < self.size {
            return Some(&self[(row, col)]);
        }
        None
    }

    /// Iterate over all tiles in row-major order, as (`row`, `col`, `tile`) tuples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / size, i % size, tile))
    }

    /// Iterate over the (`row`, `col`) positions of the cells adjacent to `row`, `col`,
    /// including diagonals. Positions outside the grid are skipped.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["A B C", "D E F", "G H J"])?;
    /// assert_eq!(grid.neighbors(0, 0).count(), 3);
    /// assert_eq!(grid.neighbors(1, 1).count(), 8);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size as isize;
        let (row, col) = (row as isize, col as isize);
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            if r >= 0 && r < size && c >= 0 && c < size {
                Some((r as usize, c as usize))
            } else {
                None
            }
        })
    }

    /// Get grid rows as a vec of strings, with tiles separated by a space.
    pub fn to_strings(&self) -> Vec<String> {
        self.tiles
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(Tile::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }
}
