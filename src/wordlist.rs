use crate::Error;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// Words shorter than this (in characters) are not added to the wordlist.
const MIN_ENTRY_LEN: usize = 2;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Index of all the possible words, for fast lookup of words and prefixes during the search.
///
/// Words are stored in uppercase. Only alphabetic words of at least 2 letters are kept,
/// other words are silently dropped.
pub struct Wordlist {
    /// All words in the wordlist.
    words: HashSet<String>,
    /// All non-empty prefixes of all words, including the words themselves.
    prefixes: HashSet<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} prefixes from '{}'>",
            self.word_count(),
            self.prefix_count(),
            self.wordfile
        )
    }
}

/// Convert `word` to uppercase, and check that it can be used.
fn normalize(word: &str) -> Option<String> {
    let word = word.to_uppercase();
    if word.chars().count() >= MIN_ENTRY_LEN && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

impl From<HashSet<String>> for Wordlist {
    fn from(words: HashSet<String>) -> Self {
        let mut prefixes = HashSet::new();
        for word in &words {
            for (i, ch) in word.char_indices() {
                prefixes.insert(String::from(&word[..i + ch.len_utf8()]));
            }
        }
        debug!(
            "wordlist: {} words, {} prefixes",
            words.len(),
            prefixes.len()
        );
        Wordlist {
            words,
            prefixes,
            wordfile: String::new(),
        }
    }
}

impl Wordlist {
    /// Build a wordlist from a list of words.
    /// ## Examples
    /// ```
    /// use boggle_solver::Wordlist;
    /// let wordlist = Wordlist::from_words(&["Dog", "cat", "x", "r2d2", "CAT"]);
    /// assert_eq!(wordlist.word_count(), 2);
    /// assert!(wordlist.is_word("DOG"));
    /// assert!(wordlist.is_prefix("CA"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Wordlist::from_entries(words.into_iter().map(Some))
    }

    /// Build a wordlist from a list of optional words. Missing entries are skipped.
    pub fn from_entries<I, S>(entries: I) -> Wordlist
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .flatten()
            .filter_map(|word| normalize(word.as_ref()))
            .collect::<HashSet<String>>()
            .into()
    }

    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::from_words(contents.lines().map(str::trim));
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    /// Returns true if `word` is in wordlist. `word` must be uppercase.
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if some word in the wordlist starts with `prefix`. `prefix` must be uppercase.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// The number of words in the wordlist
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The number of distinct prefixes
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS)
    }

    #[test]
    fn test_counts() {
        let wordlist = test_wordlist();
        println!("{}", wordlist);
        assert_eq!(wordlist.word_count(), 11);
        // A, AA, B, BA, BE + all 11 words
        assert_eq!(wordlist.prefix_count(), 16);
    }

    #[test]
    fn test_is_word() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.is_word(&word.to_uppercase()));
        }
        assert!(!wordlist.is_word("BE"));
        assert!(!wordlist.is_word("bar"));
    }

    #[test]
    fn test_is_prefix() {
        let wordlist = test_wordlist();
        for prefix in &["A", "AA", "B", "BE", "BEL", "BELT"] {
            assert!(wordlist.is_prefix(prefix), "{}", prefix);
        }
        assert!(!wordlist.is_prefix(""));
        assert!(!wordlist.is_prefix("C"));
        assert!(!wordlist.is_prefix("BELTS"));
    }

    #[test]
    fn test_filter() {
        let wordlist = Wordlist::from_words(&["a", "ok", "Hello", "r2d2", "x-ray", "", "HELLO", "éte"]);
        let mut words = wordlist.iter().collect::<Vec<_>>();
        words.sort_unstable();
        assert_eq!(words, vec!["HELLO", "OK", "ÉTE"]);
    }

    #[test]
    fn test_from_entries() {
        let wordlist = Wordlist::from_entries(vec![Some("cat"), None, Some("dog")]);
        assert_eq!(wordlist.word_count(), 2);
        assert!(wordlist.is_word("DOG"));
    }

    #[test]
    fn test_empty() {
        let words: &[&str] = &[];
        let wordlist = Wordlist::from_words(words);
        assert!(wordlist.is_empty());
        assert_eq!(wordlist.prefix_count(), 0);
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let dir = tempfile::tempdir().map_err(|source| Error::ReadError {
            path: String::from("tempdir"),
            source,
        })?;
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "quart\n  tarp \nrat\n\nq").unwrap();
        let path = path.to_str().unwrap();
        let wordlist = Wordlist::from_file(path)?;
        assert_eq!(wordlist.word_count(), 3);
        assert!(wordlist.is_word("TARP"));
        assert_eq!(wordlist.wordfile, path);
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let res = Wordlist::from_file("no/such/wordfile.txt");
        assert!(matches!(res, Err(Error::ReadError { .. })));
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_deserialize_from() -> Result<(), Error> {
        let dir = tempfile::tempdir().map_err(|source| Error::ReadError {
            path: String::from("tempdir"),
            source,
        })?;
        let path = dir.path().join("words.bin");
        let wordlist = test_wordlist();
        let serialized = bincode::serialize(&wordlist).unwrap();
        std::fs::write(&path, serialized).unwrap();
        let path = path.to_str().unwrap();
        let restored = Wordlist::deserialize_from(path)?;
        assert_eq!(restored.word_count(), wordlist.word_count());
        assert_eq!(restored.prefix_count(), wordlist.prefix_count());
        assert!(restored.is_word("BELT"));
        assert!(restored.is_prefix("BEL"));
        assert_eq!(restored.wordfile, path);
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_deserialize_from_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        std::fs::write(&path, [0xffu8; 3]).unwrap();
        let res = Wordlist::deserialize_from(path.to_str().unwrap());
        assert!(matches!(res, Err(Error::WordfileDeserializeError(_))));
    }
}
