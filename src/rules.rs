use std::collections::{HashMap, HashSet};

/// Multi-letter tiles with the number of letters they count for.
pub const SPECIAL_TILES: &[(&str, u32)] = &[("QU", 2), ("ST", 2), ("IE", 2)];

/// Minimum weighted length of a word found on the board.
pub const MIN_WORD_LEN: u32 = 3;

/// Single letter tiles that can not be used on the board. They only exist as
/// the first letter of a multi-letter tile.
pub const RESERVED_TILES: &[&str] = &["Q", "S", "I"];

/// The rules of the game: tile weights, minimum word length and reserved tiles.
///
/// All tile tokens are stored in uppercase.
/// ## Examples
/// ```
/// use boggle_solver::Rules;
/// let rules = Rules::default().with_special_tile("th", 2).with_min_word_len(4);
/// assert_eq!(rules.weight("TH"), 2);
/// assert_eq!(rules.weight("QU"), 2);
/// assert_eq!(rules.weight("A"), 1);
/// assert_eq!(rules.min_word_len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    special_tiles: HashMap<String, u32>,
    min_word_len: u32,
    reserved_tiles: HashSet<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            special_tiles: SPECIAL_TILES
                .iter()
                .map(|&(tile, weight)| (String::from(tile), weight))
                .collect(),
            min_word_len: MIN_WORD_LEN,
            reserved_tiles: RESERVED_TILES.iter().map(|&t| String::from(t)).collect(),
        }
    }
}

impl Rules {
    /// Rules without special tiles or reserved tiles, and minimum word length `min_word_len`.
    pub fn plain(min_word_len: u32) -> Rules {
        Rules {
            special_tiles: HashMap::new(),
            min_word_len,
            reserved_tiles: HashSet::new(),
        }
    }

    /// Add (or replace) a multi-letter tile with its weight.
    #[must_use]
    pub fn with_special_tile(mut self, tile: &str, weight: u32) -> Rules {
        self.special_tiles.insert(tile.to_uppercase(), weight);
        self
    }

    #[must_use]
    pub fn with_min_word_len(mut self, min_word_len: u32) -> Rules {
        self.min_word_len = min_word_len;
        self
    }

    /// Replace the set of reserved tiles.
    #[must_use]
    pub fn with_reserved_tiles(mut self, tiles: &[&str]) -> Rules {
        self.reserved_tiles = tiles.iter().map(|t| t.to_uppercase()).collect();
        self
    }

    /// Return the weight of `tile`, or 1 if it is not a special tile.
    /// `tile` must be uppercase.
    pub fn weight(&self, tile: &str) -> u32 {
        self.special_tiles.get(tile).copied().unwrap_or(1)
    }

    pub fn min_word_len(&self) -> u32 {
        self.min_word_len
    }

    /// Check if (uppercase) `tile` is reserved.
    pub fn is_reserved(&self, tile: &str) -> bool {
        self.reserved_tiles.contains(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        for &(tile, weight) in SPECIAL_TILES {
            assert_eq!(rules.weight(tile), weight);
        }
        assert_eq!(rules.weight("A"), 1);
        assert_eq!(rules.weight("TH"), 1);
        assert_eq!(rules.min_word_len(), 3);
        for &tile in RESERVED_TILES {
            assert!(rules.is_reserved(tile));
        }
        assert!(!rules.is_reserved("QU"));
    }

    #[test]
    fn test_reserved_tiles() {
        let rules = Rules::default().with_reserved_tiles(&["x"]);
        assert!(rules.is_reserved("X"));
        assert!(!rules.is_reserved("Q"));
    }

    #[test]
    fn test_plain() {
        let rules = Rules::plain(2);
        assert_eq!(rules.weight("QU"), 1);
        assert!(!rules.is_reserved("Q"));
        assert_eq!(rules.min_word_len(), 2);
    }
}
