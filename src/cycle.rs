//! Cycle sort: writes each element directly into its final slot, one
//! permutation cycle at a time. Does the minimum possible number of writes,
//! which is the whole point of the algorithm.

use log::{debug, info};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::EventKind;

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n^2)", average: "O(n^2)", worst: "O(n^2)" },
    space: Bounds { best: "O(1)", average: "O(1)", worst: "O(1)" },
};

pub struct CycleSort<T> {
    ins: Instrument<T>,
    enable_optimization: bool,
}

impl<T: Clone + Debug> CycleSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("enable_optimization", true)
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    pub fn with_comparator(overrides: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        let enable_optimization = options.flag("enable_optimization", true);
        CycleSort { ins: Instrument::with_comparator(options, cmp), enable_optimization }
    }

    /// Final slot of `item` within `arr[cycle_start..]`: the number of
    /// elements strictly smaller than it.
    fn target_position(&mut self, arr: &[T], item: &T, cycle_start: usize) -> usize {
        let mut pos = cycle_start;
        for i in cycle_start + 1..arr.len() {
            let probe = self.ins.read(arr, i);
            if self.ins.compare(&probe, item) == Ordering::Less {
                pos += 1;
            }
        }
        pos
    }

    // equal elements keep their slots; park the item after them
    fn skip_duplicates(&mut self, arr: &[T], item: &T, mut pos: usize) -> usize {
        loop {
            let probe = self.ins.read(arr, pos);
            if self.ins.compare(item, &probe) == Ordering::Equal {
                pos += 1;
            } else {
                return pos;
            }
        }
    }
}

impl<T: Ord + Clone + Debug + 'static> CycleSort<T> {
    pub fn new(overrides: Options) -> Self {
        CycleSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for CycleSort<T> {
    fn name(&self) -> &'static str {
        "cycle-sort"
    }

    fn category(&self) -> Category {
        Category::Comparison
    }

    fn complexity(&self) -> Complexity {
        COMPLEXITY
    }

    fn is_stable(&self) -> bool {
        false
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
            optimizations: vec![("enable_optimization", self.enable_optimization)],
            notes: "write-minimal sort; each element is written at most once per cycle",
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
        debug!("cycle input: {:?}", input);

        let mut arr = input.to_vec();
        let n = arr.len();
        self.ins.set_phase("cycling");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "cycling".into(), direction: None },
        );

        for cycle_start in 0..n - 1 {
            let mut item = self.ins.read(&arr, cycle_start);
            let mut pos = self.target_position(&arr, &item, cycle_start);

            if pos == cycle_start {
                if self.enable_optimization {
                    self.ins.count("saved_writes");
                    continue;
                }
                // degenerate cycle: rewrite the element in place
                self.ins.record_state(&arr, EventKind::CycleStart { start: cycle_start });
                self.ins.write(&mut arr, cycle_start, item);
                self.ins.count("cycles");
                self.ins.record_state(
                    &arr,
                    EventKind::CycleComplete { start: cycle_start, writes: 1 },
                );
                self.ins.step();
                continue;
            }

            self.ins.record_state(&arr, EventKind::CycleStart { start: cycle_start });
            self.ins.count("cycles");
            let mut cycle_writes: u64 = 0;

            pos = self.skip_duplicates(&arr, &item, pos);
            let displaced = self.ins.read(&arr, pos);
            self.ins.write(&mut arr, pos, item);
            self.ins.record_state(&arr, EventKind::Write { index: pos });
            item = displaced;
            cycle_writes += 1;
            self.ins.step();

            while pos != cycle_start {
                pos = self.target_position(&arr, &item, cycle_start);
                pos = self.skip_duplicates(&arr, &item, pos);
                let displaced = self.ins.read(&arr, pos);
                self.ins.write(&mut arr, pos, item);
                self.ins.record_state(&arr, EventKind::Write { index: pos });
                item = displaced;
                cycle_writes += 1;
                self.ins.step();
            }
            self.ins.record_state(
                &arr,
                EventKind::CycleComplete { start: cycle_start, writes: cycle_writes },
            );
        }
        info!(
            "cycle sort: {} cycles, {} writes",
            self.ins.metrics().get("cycles"),
            self.ins.metrics().writes()
        );

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("cycle output: {:?}", arr);
        arr
    }
}
