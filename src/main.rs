use log::LevelFilter;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use sortlab::{
    Algorithm, CocktailShakerSort, CombSort, CountingSort, CycleSort, GnomeSort, HeapSort,
    OddEvenSort, Options,
};

fn verify_sorted(arr: &[u64]) {
    for i in 1..arr.len() {
        assert!(arr[i - 1] <= arr[i]);
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .init();

    let mut rng = StdRng::seed_from_u64(12345);
    let mut data: Vec<u64> = (0..10_000).collect();
    data.shuffle(&mut rng);

    // state recording off: the quadratic sorts would snapshot millions of
    // arrays otherwise
    let opts = || Options::new().set("record_states", false);

    let mut algorithms: Vec<Box<dyn Algorithm<u64>>> = vec![
        Box::new(CocktailShakerSort::new(opts())),
        Box::new(CombSort::new(opts())),
        Box::new(CycleSort::new(opts())),
        Box::new(GnomeSort::new(opts())),
        Box::new(HeapSort::new(opts())),
        Box::new(OddEvenSort::new(opts())),
        Box::new(CountingSort::new(opts())),
    ];

    for algo in algorithms.iter_mut() {
        let start = Instant::now();
        let sorted = algo.run(&data);
        let duration = start.elapsed();
        verify_sorted(&sorted);
        println!("{} ({}): {:?}", algo.name(), algo.category(), duration);
        println!("    {}", algo.metrics());
    }

    let mut reference = data.clone();
    let start = Instant::now();
    reference.sort_unstable();
    let duration = start.elapsed();
    println!("sort_unstable: {:?}", duration);
}
