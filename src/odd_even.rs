use log::debug;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::EventKind;

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n)", average: "O(n^2)", worst: "O(n^2)" },
    space: Bounds { best: "O(1)", average: "O(1)", worst: "O(1)" },
};

pub struct OddEvenSort<T> {
    ins: Instrument<T>,
    early_termination: bool,
}

impl<T: Clone + Debug> OddEvenSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("early_termination", true)
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    pub fn with_comparator(overrides: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        let early_termination = options.flag("early_termination", true);
        OddEvenSort { ins: Instrument::with_comparator(options, cmp), early_termination }
    }
}

impl<T: Ord + Clone + Debug + 'static> OddEvenSort<T> {
    pub fn new(overrides: Options) -> Self {
        OddEvenSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for OddEvenSort<T> {
    fn name(&self) -> &'static str {
        "odd-even-sort"
    }

    fn category(&self) -> Category {
        Category::Comparison
    }

    fn complexity(&self) -> Complexity {
        COMPLEXITY
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn is_in_place(&self) -> bool {
        true
    }

    fn info(&self) -> Info {
        Info {
            name: self.name(),
            category: self.category(),
            stable: self.is_stable(),
            in_place: self.is_in_place(),
            complexity: self.complexity(),
            optimizations: vec![("early_termination", self.early_termination)],
            notes: "brick sort; alternates disjoint odd and even pair passes",
        }
    }

    fn instrument(&self) -> &Instrument<T> {
        &self.ins
    }

    fn run(&mut self, input: &[T]) -> Vec<T> {
        self.ins.reset();
        if input.len() < 2 {
            return input.to_vec();
        }
        debug!("odd-even input: {:?}", input);

        let mut arr = input.to_vec();
        let n = arr.len();
        let mut rounds = 0usize;

        loop {
            rounds += 1;
            let mut swapped = false;

            self.ins.set_phase("odd-pass");
            self.ins.record_state(
                &arr,
                EventKind::PhaseStart { name: "odd-pass".into(), direction: None },
            );
            let mut i = 1;
            while i < n - 1 {
                if self.ins.compare_at(&arr, i, i + 1) == Ordering::Greater {
                    self.ins.swap(&mut arr, i, i + 1);
                    self.ins.record_state(&arr, EventKind::Swap { i, j: i + 1 });
                    swapped = true;
                }
                self.ins.step();
                i += 2;
            }
            self.ins.count("passes");

            self.ins.set_phase("even-pass");
            self.ins.record_state(
                &arr,
                EventKind::PhaseStart { name: "even-pass".into(), direction: None },
            );
            let mut i = 0;
            while i < n - 1 {
                if self.ins.compare_at(&arr, i, i + 1) == Ordering::Greater {
                    self.ins.swap(&mut arr, i, i + 1);
                    self.ins.record_state(&arr, EventKind::Swap { i, j: i + 1 });
                    swapped = true;
                }
                self.ins.step();
                i += 2;
            }
            self.ins.count("passes");

            if self.early_termination && !swapped {
                break;
            }
            // n rounds always suffice for a transposition network
            if rounds >= n {
                break;
            }
        }

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("odd-even output: {:?}", arr);
        arr
    }
}
