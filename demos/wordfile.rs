use anyhow::Result;
use boggle_solver::Wordlist;

#[cfg(feature = "bincode")]
fn serialize_wordlist(wordlist: &Wordlist, binfile: &str) -> Result<()> {
    use std::fs::File;
    use std::io::prelude::*;
    // save to bin file
    let serialized = bincode::serialize(wordlist)?;
    let mut file = File::create(binfile)?;
    file.write_all(&serialized)?;
    let restored = Wordlist::deserialize_from(binfile)?;
    println!("{}", restored);
    Ok(())
}

/// Usage: `cargo run --example wordfile --features bincode <wordfile> [binfile]`
fn run() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let wordfile = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing argument: wordfile"))?;
    let wordlist = Wordlist::from_file(&wordfile)?;
    println!("{}", wordlist);
    #[cfg(feature = "bincode")]
    {
        let binfile = args.next().unwrap_or_else(|| format!("{}.bin", wordfile));
        serialize_wordlist(&wordlist, &binfile)?;
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
