use anyhow::Result;
use boggle_solver::Board;
use std::time::Instant;

const GRID: &[&str] = &["T W Y R", "E N P H", "G Z Qu R", "O N T A"];

const WORDS: &[&str] = &[
    "art", "ego", "gent", "get", "net", "new", "newt", "prat", "pry", "qua", "quart", "quartz",
    "rat", "tar", "tarp", "ten", "went", "wet", "arty", "rhr", "not", "quar",
];

/// Usage: `cargo run --example solve [wordfile]`
fn run() -> Result<()> {
    env_logger::init();
    let t0 = Instant::now();
    let board = match std::env::args().nth(1) {
        Some(wordfile) => Board::default().with_wordlist_from_file(&wordfile)?,
        None => Board::default().with_wordlist_from_words(WORDS),
    };
    let board = board.with_grid_from_strings(GRID)?;
    println!("Create board with {} took {:?}", board.wordlist(), t0.elapsed());
    println!("{}", board);

    let t0 = Instant::now();
    let words = board.find_words();
    println!("Found {} words in {:?}", words.len(), t0.elapsed());
    for word in &words {
        if let Some(path) = board.trace(word) {
            println!("{:-8} {:?}", word, &path[..]);
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
