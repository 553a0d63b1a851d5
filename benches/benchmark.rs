use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cup_draw::constants::BASE_POOL_2;
use cup_draw::distribution::{pool_count_distribution, simulate_game_frequencies};
use cup_draw::draw::{draw_games, Drawer};
use cup_draw::presentation::presentation_steps;
use cup_draw::sample::sample;
use cup_draw::Cup;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_sample(c: &mut Criterion) {
    let pool: Vec<String> = BASE_POOL_2.iter().map(|g| g.to_string()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("sample_3_of_5", |b| {
        b.iter(|| sample(black_box(&pool), 3, &mut rng))
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("draw_final", |b| {
        b.iter(|| draw_games(black_box(Cup::Final), &mut rng))
    });

    c.bench_function("draw_mini", |b| {
        b.iter(|| draw_games(black_box(Cup::Mini), &mut rng))
    });
}

fn bench_presentation(c: &mut Criterion) {
    let draw = Drawer::new(Some(42)).draw(Cup::Mini).expect("draw");

    c.bench_function("presentation_steps_mini", |b| {
        b.iter(|| presentation_steps(black_box(&draw)))
    });
}

fn bench_distribution(c: &mut Criterion) {
    c.bench_function("pool_count_distribution_mini", |b| {
        b.iter(|| pool_count_distribution(black_box(Cup::Mini)))
    });

    c.bench_function("simulate_1000_draws_batch", |b| {
        b.iter(|| simulate_game_frequencies(black_box(Cup::Piko), 1000, Some(42)))
    });
}

criterion_group!(
    benches,
    bench_sample,
    bench_draw,
    bench_presentation,
    bench_distribution,
);
criterion_main!(benches);
