use lock_games::core::LockConfig;
use lock_games::lock::LockGame;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        expanding_binary_lock,
        expanding_colored_lock,
        computing_binary_cpre,
        solving_binary_lock,
        solving_colored_lock,
}

fn expanding_binary_lock(c: &mut criterion::Criterion) {
    c.bench_function("expand a 4-hole binary lock", |b| {
        b.iter(|| LockGame::binary(LockConfig::binary(4, 2)))
    });
}

fn expanding_colored_lock(c: &mut criterion::Criterion) {
    c.bench_function("expand a 3-hole 3-color lock", |b| {
        b.iter(|| LockGame::colored(LockConfig::colored(3, 2, 3)))
    });
}

fn computing_binary_cpre(c: &mut criterion::Criterion) {
    let Ok(game) = LockGame::binary(LockConfig::binary(5, 2)) else {
        return;
    };
    c.bench_function("cpre of the mixed rings, 5 holes", |b| {
        b.iter(|| game.cpre(game.target()))
    });
}

fn solving_binary_lock(c: &mut criterion::Criterion) {
    let Ok(game) = LockGame::binary(LockConfig::binary(5, 2)) else {
        return;
    };
    c.bench_function("winning set of a 5-hole binary lock", |b| {
        b.iter(|| game.compute_winning_set())
    });
}

fn solving_colored_lock(c: &mut criterion::Criterion) {
    let Ok(game) = LockGame::colored(LockConfig::colored(3, 2, 3)) else {
        return;
    };
    c.bench_function("winning set of a 3-hole 3-color lock", |b| {
        b.iter(|| game.compute_winning_set())
    });
}
