use anyhow::Result;
use std::time::Instant;
use scrabble_solver::Dictionary;

fn run() -> Result<()> {
    let wordfile = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("wordlists/words.txt"));
    let t0 = Instant::now();
    let dictionary = Dictionary::from_file(&wordfile)?;
    let dt = t0.elapsed();
    println!("{} took {:?}", dictionary, dt);

    #[cfg(feature = "bincode")]
    {
        let binfile = wordfile.replace(".txt", ".bin");
        dictionary.serialize_into(&binfile)?;
        let t0 = Instant::now();
        let dictionary = Dictionary::deserialize_from(&binfile)?;
        println!("{} took {:?}", dictionary, t0.elapsed());
    }

    for word in &["quiz", "QUIZ", "quizz", "lodger", "lodgers", "xyzzy", ""] {
        println!("{:>10}: {}", format!("\"{}\"", word), dictionary.accepts(word));
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
