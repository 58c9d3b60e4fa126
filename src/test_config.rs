//! Test fixtures: env-driven configuration plus input-shape generators,
//! shared by the integration tests and the criterion benches.

use std::env;

use once_cell::sync::Lazy;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

pub static CONFIG: Lazy<TestConfig> = Lazy::new(TestConfig::from_env);

#[derive(Debug, Clone)]
pub struct TestConfig {
    pub seed: u64,
    pub num_runs: usize,
    pub max_elements: usize,
}

impl TestConfig {
    pub fn from_env() -> Self {
        // Check for environment variables to control seed randomization
        let randomize_seed = env::var("RANDOMIZE_SEED")
            .map(|val| val == "true")
            .unwrap_or(false);

        let seed = if randomize_seed {
            let seed: u64 = thread_rng().gen_range(0..u64::MAX);
            println!("Seed: {}", seed);
            seed
        } else {
            env::var("SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12345)
        };

        let num_runs = env::var("NUM_RUNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4);

        let max_elements = env::var("MAX_ELEMENTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2048);

        TestConfig { seed, num_runs, max_elements }
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn rng_offset(&self, offset: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(offset))
    }
}

/// Shuffled permutation of `0..n`.
pub fn shuffled(n: usize, rng: &mut StdRng) -> Vec<u64> {
    let mut arr: Vec<u64> = (0..n as u64).collect();
    arr.shuffle(rng);
    arr
}

pub fn uniform(n: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..n).map(|_| rng.gen_range(0..u64::MAX)).collect()
}

pub fn descending(n: usize) -> Vec<u64> {
    (0..n as u64).rev().collect()
}

/// Ascending run with `displaced` random transpositions applied.
pub fn nearly_sorted(n: usize, displaced: usize, rng: &mut StdRng) -> Vec<u64> {
    let mut arr: Vec<u64> = (0..n as u64).collect();
    for _ in 0..displaced {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        arr.swap(i, j);
    }
    arr
}

pub fn few_unique(n: usize, distinct: u64, rng: &mut StdRng) -> Vec<u64> {
    (0..n).map(|_| rng.gen_range(0..distinct)).collect()
}

/// Gaussian keys, clamped at zero.
pub fn gaussian(n: usize, mean: f64, std_dev: f64, rng: &mut StdRng) -> Vec<u64> {
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(rng).max(0.0) as u64).collect()
}

/// (key, original index) pairs over a tight key range; for stability checks.
pub fn keyed_pairs(n: usize, distinct: u64, rng: &mut StdRng) -> Vec<(u64, usize)> {
    (0..n).map(|i| (rng.gen_range(0..distinct), i)).collect()
}
