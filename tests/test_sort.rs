#[cfg(test)]
mod sorting {
    use lazy_static::lazy_static;
    use rand::Rng;

    use sortlab::test_config::{self, TestConfig};
    use sortlab::{
        Algorithm, CocktailShakerSort, CombSort, CountingSort, CycleSort, GnomeSort, HeapSort,
        OddEvenSort, Options,
    };

    lazy_static! {
        static ref CONFIG: TestConfig = TestConfig::from_env();
    }

    // recording every swap snapshot on multi-thousand-element inputs is
    // pointless here; the trace itself is covered in test_instrument.rs
    fn quiet() -> Options {
        Options::new().set("record_states", false)
    }

    fn roster() -> Vec<Box<dyn Algorithm<u64>>> {
        vec![
            Box::new(CocktailShakerSort::new(quiet())),
            Box::new(CombSort::new(quiet())),
            Box::new(CycleSort::new(quiet())),
            Box::new(GnomeSort::new(quiet())),
            Box::new(HeapSort::new(quiet())),
            Box::new(OddEvenSort::new(quiet())),
        ]
    }

    fn check_sorts(algo: &mut dyn Algorithm<u64>, input: &[u64]) {
        let sorted = algo.run(input);
        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(
            sorted,
            expected,
            "{} produced a wrong result. Seed: {}",
            algo.name(),
            CONFIG.seed
        );
    }

    #[test]
    fn small_shuffled() {
        let mut rng = CONFIG.rng();
        let input = test_config::shuffled(256, &mut rng);
        for algo in roster().iter_mut() {
            check_sorts(algo.as_mut(), &input);
        }
        check_sorts(&mut CountingSort::new(quiet()), &input);
    }

    #[test]
    fn descending_input() {
        let input = test_config::descending(512);
        for algo in roster().iter_mut() {
            check_sorts(algo.as_mut(), &input);
        }
        check_sorts(&mut CountingSort::new(quiet()), &input);
    }

    #[test]
    fn few_unique_values() {
        let mut rng = CONFIG.rng();
        let input = test_config::few_unique(1024, 16, &mut rng);
        for algo in roster().iter_mut() {
            check_sorts(algo.as_mut(), &input);
        }
        check_sorts(&mut CountingSort::new(quiet()), &input);
    }

    #[test]
    fn nearly_sorted_input() {
        let mut rng = CONFIG.rng();
        let input = test_config::nearly_sorted(1024, 32, &mut rng);
        for algo in roster().iter_mut() {
            check_sorts(algo.as_mut(), &input);
        }
    }

    #[test]
    fn random_runs() {
        for run in 0..CONFIG.num_runs {
            let mut rng = CONFIG.rng_offset(run as u64);
            let n = rng.gen_range(1..CONFIG.max_elements);
            let input = test_config::uniform(n, &mut rng);
            for algo in roster().iter_mut() {
                check_sorts(algo.as_mut(), &input);
            }
        }
    }

    #[test]
    fn random_runs_counting() {
        // dense key range: counting sort allocates max - min + 1 slots
        for run in 0..CONFIG.num_runs {
            let mut rng = CONFIG.rng_offset(run as u64);
            let n = rng.gen_range(1..CONFIG.max_elements);
            let input = test_config::few_unique(n, 1000, &mut rng);
            check_sorts(&mut CountingSort::new(quiet()), &input);
        }
    }

    #[test]
    fn reverse_comparator() {
        let mut rng = CONFIG.rng();
        let input = test_config::shuffled(256, &mut rng);
        let mut algo: HeapSort<u64> =
            HeapSort::with_comparator(quiet(), |a: &u64, b: &u64| b.cmp(a));
        let sorted = algo.run(&input);
        for i in 1..sorted.len() {
            assert!(
                sorted[i - 1] >= sorted[i],
                "not descending at {} ({} < {}). Seed: {}",
                i,
                sorted[i - 1],
                sorted[i],
                CONFIG.seed
            );
        }
    }

    fn check_stable(sorted: &[(u64, usize)]) {
        for i in 1..sorted.len() {
            assert!(sorted[i - 1].0 <= sorted[i].0, "keys out of order at {}", i);
            if sorted[i - 1].0 == sorted[i].0 {
                assert!(
                    sorted[i - 1].1 < sorted[i].1,
                    "equal keys reordered at {}. Seed: {}",
                    i,
                    CONFIG.seed
                );
            }
        }
    }

    #[test]
    fn stability_of_claiming_algorithms() {
        let mut rng = CONFIG.rng();
        let input = test_config::keyed_pairs(512, 8, &mut rng);
        let by_key = |a: &(u64, usize), b: &(u64, usize)| a.0.cmp(&b.0);

        let mut stable: Vec<Box<dyn Algorithm<(u64, usize)>>> = vec![
            Box::new(CocktailShakerSort::with_comparator(quiet(), by_key)),
            Box::new(GnomeSort::with_comparator(quiet(), by_key)),
            Box::new(OddEvenSort::with_comparator(quiet(), by_key)),
            Box::new(CountingSort::with_key(quiet(), |pair: &(u64, usize)| pair.0 as i64)),
        ];
        for algo in stable.iter_mut() {
            assert!(algo.is_stable());
            let sorted = algo.run(&input);
            check_stable(&sorted);
        }
    }
}
