use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sortlab::test_config::{self, CONFIG};
use sortlab::{
    Algorithm, CocktailShakerSort, CombSort, CountingSort, CycleSort, GnomeSort, HeapSort,
    OddEvenSort, Options,
};

const N: usize = 4096;

fn quiet() -> Options {
    Options::new().set("record_states", false)
}

fn benchmark_cocktail(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: CocktailShakerSort<u64> = CocktailShakerSort::new(quiet());
    c.bench_function("cocktail-shaker 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_comb(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: CombSort<u64> = CombSort::new(quiet());
    c.bench_function("comb 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_cycle(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: CycleSort<u64> = CycleSort::new(quiet());
    c.bench_function("cycle 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_gnome(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: GnomeSort<u64> = GnomeSort::new(quiet());
    c.bench_function("gnome 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_heap(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: HeapSort<u64> = HeapSort::new(quiet());
    c.bench_function("heap 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_odd_even(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: OddEvenSort<u64> = OddEvenSort::new(quiet());
    c.bench_function("odd-even 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_counting(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    let mut algo: CountingSort<u64> = CountingSort::new(quiet());
    c.bench_function("counting 4096", |b| {
        b.iter(|| {
            black_box(algo.run(black_box(&data)));
        })
    });
}

fn benchmark_quicksort(c: &mut Criterion) {
    let mut rng = CONFIG.rng();
    let data = test_config::shuffled(N, &mut rng);
    c.bench_function("sort_unstable 4096", |b| {
        b.iter(|| {
            let mut copy = data.clone();
            black_box(copy.sort_unstable());
        })
    });
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_cocktail, benchmark_comb, benchmark_cycle, benchmark_gnome,
        benchmark_heap, benchmark_odd_even, benchmark_counting, benchmark_quicksort);
criterion_main!(benches);
