use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use analogy::solve_str;

const ALPHABET: &[u8] = b"aeioubdgklmnprst";

fn random_stem(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Build suffix-alternation proportions `stem1+us : stem1+i = stem2+us : x`
/// over random stems, the bread-and-butter shape of morphological data.
fn make_proportions(n: usize, stem_len: usize, seed: u64) -> Vec<(String, String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lemma = random_stem(&mut rng, stem_len);
            let target = random_stem(&mut rng, stem_len);
            (
                format!("{lemma}us"),
                format!("{lemma}i"),
                format!("{target}us"),
            )
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_single", |b| {
        b.iter(|| {
            let _ = solve_str("cat", "becontso", "badge");
        })
    });

    let proportions = make_proportions(100, 8, 123);
    c.bench_function("solve_batch_100", |b| {
        b.iter(|| {
            for (a, p_b, p_c) in &proportions {
                let _ = solve_str(a, p_b, p_c);
            }
        })
    });

    // Unsolvable inputs walk all four permutations, the worst case.
    c.bench_function("solve_unsolvable", |b| {
        b.iter(|| {
            let _ = solve_str("animus", "animi:", "princeps");
        })
    });

    let long = make_proportions(1, 64, 7);
    c.bench_function("solve_long_sequences", |b| {
        let (a, p_b, p_c) = &long[0];
        b.iter(|| {
            let _ = solve_str(a, p_b, p_c);
        })
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
