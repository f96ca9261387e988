use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::Dictionary;
use std::fs::read_to_string;

const WORDFILE: &str = "wordlists/words.txt";

fn bench_from_file(c: &mut Criterion) {
    c.bench_function("dictionary.from_file", |b| {
        b.iter(|| Dictionary::from_file(WORDFILE).unwrap())
    });
}

fn bench_accepts(c: &mut Criterion) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let contents = read_to_string(WORDFILE).unwrap();
    let words: Vec<&str> = contents.lines().collect();
    c.bench_function("dictionary.accepts", |b| {
        b.iter(|| words.iter().filter(|&&word| dictionary.accepts(word)).count())
    });
    c.bench_function("dictionary.rejects", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|word| word.to_uppercase() + "q")
                .filter(|word| dictionary.accepts(word))
                .count()
        })
    });
}

criterion_group!(benches, bench_from_file, bench_accepts);
criterion_main!(benches);
