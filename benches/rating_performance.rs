//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_room::rating::elo;
use elo_room::RatingStore;

fn create_bench_store(players: usize) -> RatingStore {
    let mut store = RatingStore::new();
    for i in 0..players {
        store
            .register(format!("player_{}", i), 800 + (i as i64 * 7) % 800)
            .unwrap();
    }
    store
}

fn bench_win_probability(c: &mut Criterion) {
    c.bench_function("win_probability", |b| {
        b.iter(|| black_box(elo::win_probability(black_box(1000), black_box(910))))
    });
}

fn bench_record_match(c: &mut Criterion) {
    let mut store = create_bench_store(2);

    c.bench_function("record_match", |b| {
        b.iter(|| {
            let _ = black_box(store.record_match("player_0", "player_1"));
            let _ = black_box(store.record_match("player_1", "player_0"));
        })
    });
}

fn bench_standings(c: &mut Criterion) {
    let store = create_bench_store(1000);

    c.bench_function("standings_1000_players", |b| {
        b.iter(|| black_box(store.standings()))
    });
}

criterion_group!(
    benches,
    bench_win_probability,
    bench_record_match,
    bench_standings
);
criterion_main!(benches);
