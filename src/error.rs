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

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// The board has no rows
    #[error("Empty board")]
    EmptyBoard,

    /// The board is not square: row `row` has `len` cells, expect `size`
    #[error("Invalid row {row}: length {len}, expect {size}")]
    InvalidRowLength { row: usize, len: usize, size: usize },

    /// Tile is empty or not alphabetic
    #[error("Invalid tile \"{tile}\" at row {row}, col {col}")]
    InvalidTile { row: usize, col: usize, tile: String },

    /// String can not be parsed as a tile
    #[error("Invalid tile \"{0}\"")]
    TileParseError(String),

    /// Tile is reserved as prefix of a multi-letter tile, and can not be used on its own
    #[error("Reserved tile \"{tile}\" at row {row}, col {col}")]
    ReservedTile { row: usize, col: usize, tile: String },

    /// The search was cancelled before it completed
    #[error("Search cancelled")]
    Cancelled,
}

impl Error {
    /// Returns true if the error means the board was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyBoard
                | Error::InvalidRowLength { .. }
                | Error::InvalidTile { .. }
                | Error::TileParseError(_)
                | Error::ReservedTile { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_invalid_input() {
        assert!(Error::EmptyBoard.is_invalid_input());
        assert!(Error::InvalidRowLength {
            row: 1,
            len: 4,
            size: 5
        }
        .is_invalid_input());
        assert!(Error::TileParseError(String::from("a1")).is_invalid_input());
        assert!(!Error::Cancelled.is_invalid_input());
    }

    #[test]
    fn test_display() {
        let err = Error::ReservedTile {
            row: 2,
            col: 0,
            tile: String::from("Q"),
        };
        assert_eq!(err.to_string(), "Reserved tile \"Q\" at row 2, col 0");
    }
}
