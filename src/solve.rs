use crate::{Board, Error, Grid, Rules, Wordlist};
use log::warn;

/// Find all words from `words` on the board given by `rows`, with the default [`Rules`].
///
/// Returns the words found in uppercase, sorted. If the board is not valid, an empty list
/// is returned. Use [`try_solve`] to tell an invalid board apart from a board without words.
/// ## Examples
/// ```
/// use boggle_solver::solve;
/// let rows = [
///     ["D", "O", "G", "P"],
///     ["C", "A", "T", "L"],
///     ["M", "O", "U", "M"],
///     ["E", "R", "A", "T"],
/// ];
/// assert_eq!(solve(&rows, &["Dog", "cat", "rat", "TOE"]), ["CAT", "DOG", "RAT", "TOE"]);
/// assert!(solve(&[["A", "B"], ["C", "Q"]], &["abc"]).is_empty());
/// ```
pub fn solve<R, S, I, W>(rows: &[R], words: I) -> Vec<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    solve_with_rules(rows, words, Rules::default())
}

/// Like [`solve`], with custom `rules`.
pub fn solve_with_rules<R, S, I, W>(rows: &[R], words: I, rules: Rules) -> Vec<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    match try_solve_with_rules(rows, words, rules) {
        Ok(found) => found,
        Err(err) => {
            warn!("board rejected: {}", err);
            Vec::new()
        }
    }
}

/// Find all words from `words` on the board given by `rows`, with the default [`Rules`].
/// ## Errors
/// If the board is empty, not square, or contains an invalid or reserved tile.
/// ## Examples
/// ```
/// # use boggle_solver::{try_solve, Error};
/// let found = try_solve(&[["A", "B"], ["C", "D"]], &["xyz"])?;
/// assert!(found.is_empty());
/// let err = try_solve(&[["A", "B"], ["C", "Q"]], &["abc"]).unwrap_err();
/// assert!(err.is_invalid_input());
/// # Ok::<(), Error>(())
/// ```
pub fn try_solve<R, S, I, W>(rows: &[R], words: I) -> Result<Vec<String>, Error>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    try_solve_with_rules(rows, words, Rules::default())
}

/// Like [`try_solve`], with custom `rules`.
/// ## Errors
/// If the board is empty, not square, or contains an invalid or reserved tile.
pub fn try_solve_with_rules<R, S, I, W>(
    rows: &[R],
    words: I,
    rules: Rules,
) -> Result<Vec<String>, Error>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut board = Board::new(rules);
    board.set_grid(Grid::from_rows(rows)?)?;
    board.set_wordlist(Wordlist::from_words(words));
    Ok(board.find_words())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ROWS: &[[&str; 0]] = &[];

    #[test]
    fn test_empty_board() {
        assert!(solve(NO_ROWS, &["word", "python", "grid"]).is_empty());
        assert!(matches!(
            try_solve(NO_ROWS, &["word"]),
            Err(Error::EmptyBoard)
        ));
        let rows: &[Vec<&str>] = &[vec![]];
        assert!(solve(rows, &["hello", "there", "general", "kenobi"]).is_empty());
    }

    #[test]
    fn test_single_cell() {
        assert!(solve(&[["A"]], &["a", "b", "c"]).is_empty());
        assert!(solve(&[["A"]], &["A", "AA", "AAA"]).is_empty());
    }

    #[test]
    fn test_not_square() {
        let rows = vec![
            vec!["A", "B", "C", "D", "E"],
            vec!["F", "G", "H", "J"],
            vec!["K", "L", "M"],
        ];
        assert!(solve(&rows, &["ABC", "FGH", "KLM", "GHI", "EJO"]).is_empty());
        let err = try_solve(&rows, &["ABC"]).unwrap_err();
        assert!(matches!(err, Error::InvalidRowLength { .. }));
    }

    #[test]
    fn test_mixed_case() {
        let rows = [
            ["D", "O", "G", "P"],
            ["C", "A", "T", "L"],
            ["M", "O", "U", "M"],
            ["E", "R", "A", "T"],
        ];
        let found = solve(&rows, &["Dog", "cat", "MOUSE", "rat", "TOE"]);
        assert_eq!(found, ["CAT", "DOG", "RAT", "TOE"]);
        let rows = [["d", "o"], ["g", "x"]];
        assert_eq!(solve(&rows, &["DOG"]), ["DOG"]);
    }

    #[test]
    fn test_reserved_tiles() {
        for &tile in &["Q", "S", "I", "q", "s", "i"] {
            let rows = [["C", "A", "T"], ["R", "A", "T"], ["D", "O", tile]];
            assert!(solve(&rows, &["cat", "rat", "dot"]).is_empty());
            let err = try_solve(&rows, &["cat"]).unwrap_err();
            assert!(matches!(err, Error::ReservedTile { row: 2, col: 2, .. }));
        }
    }

    #[test]
    fn test_invalid_tile() {
        let rows = [["C", "A"], ["T", "3"]];
        assert!(solve(&rows, &["cat"]).is_empty());
        assert!(try_solve(&rows, &["cat"]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_special_tiles() {
        let rows = [
            ["A", "B", "C", "D", "E", "F"],
            ["G", "H", "Ie", "J", "K", "L"],
            ["M", "N", "O", "P", "Qu", "R"],
            ["St", "T", "U", "V", "W", "X"],
            ["Y", "Z", "A", "B", "C", "D"],
            ["E", "F", "G", "H", "Ie", "J"],
        ];
        let words = ["abc", "ghiej", "ago", "vbh", "stuv", "yzab", "ezavwr"];
        assert_eq!(
            solve(&rows, &words),
            ["ABC", "EZAVWR", "GHIEJ", "VBH", "YZAB"]
        );
    }

    #[test]
    fn test_zigzag() {
        let rows = [["A", "B", "C"], ["D", "E", "F"], ["G", "H", "Ie"]];
        let words = ["AEIE", "CEG", "ACD", "BFHD", "IAE"];
        assert_eq!(solve(&rows, &words), ["AEIE", "BFHD", "CEG"]);
    }

    #[test]
    fn test_no_words() -> Result<(), Error> {
        let rows = [["A", "B"], ["C", "D"]];
        let words: &[&str] = &[];
        assert!(try_solve(&rows, words)?.is_empty());
        assert!(try_solve(&rows, &["dcba", "xy"])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_with_rules() {
        let rows = [["C", "A"], ["T", "S"]];
        let rules = Rules::default().with_reserved_tiles(&[]).with_min_word_len(4);
        assert_eq!(solve_with_rules(&rows, &["cat", "cats"], rules), ["CATS"]);
    }
}
