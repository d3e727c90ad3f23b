//! Ranker throughput over a synthetic city-sized vocabulary.

use atlas_keywords::{rank_log_odds, FrequencyCounter, KeywordParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_counter(vocab: usize, seed: u32) -> FrequencyCounter {
    let mut counter = FrequencyCounter::new();
    for i in 0..vocab {
        let count = (i as u32).wrapping_mul(seed) % 17 + 1;
        let token = format!("토큰{i:05}");
        for _ in 0..count {
            counter.tally(token.clone());
        }
    }
    counter
}

fn bench_rank_log_odds(c: &mut Criterion) {
    let params = KeywordParams::default();

    for vocab in [500, 5_000] {
        let target = synthetic_counter(vocab, 7);
        let rest = synthetic_counter(vocab * 4, 13);
        c.bench_function(&format!("rank_log_odds_{vocab}"), |b| {
            b.iter(|| rank_log_odds(black_box(&target), black_box(&rest), black_box(&params)));
        });
    }
}

criterion_group!(benches, bench_rank_log_odds);
criterion_main!(benches);
