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

pub struct GnomeSort<T> {
    ins: Instrument<T>,
    optimized_jumps: bool,
}

impl<T: Clone + Debug> GnomeSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("optimized_jumps", true)
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    pub fn with_comparator(overrides: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        let optimized_jumps = options.flag("optimized_jumps", true);
        GnomeSort { ins: Instrument::with_comparator(options, cmp), optimized_jumps }
    }
}

impl<T: Ord + Clone + Debug + 'static> GnomeSort<T> {
    pub fn new(overrides: Options) -> Self {
        GnomeSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for GnomeSort<T> {
    fn name(&self) -> &'static str {
        "gnome-sort"
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
            optimizations: vec![("optimized_jumps", self.optimized_jumps)],
            notes: "insertion by adjacent swaps; the optimized variant skips the walk back up",
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
        debug!("gnome input: {:?}", input);

        let mut arr = input.to_vec();
        self.ins.set_phase("sorting");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "sorting".into(), direction: None },
        );

        if self.optimized_jumps {
            for limit in 1..arr.len() {
                let mut pos = limit;
                while pos > 0 && self.ins.compare_at(&arr, pos - 1, pos) == Ordering::Greater {
                    self.ins.swap(&mut arr, pos - 1, pos);
                    self.ins.record_state(&arr, EventKind::Swap { i: pos - 1, j: pos });
                    pos -= 1;
                    self.ins.step();
                }
            }
        } else {
            let mut pos = 0usize;
            while pos < arr.len() {
                if pos == 0 || self.ins.compare_at(&arr, pos - 1, pos) != Ordering::Greater {
                    pos += 1;
                } else {
                    self.ins.swap(&mut arr, pos - 1, pos);
                    self.ins.record_state(&arr, EventKind::Swap { i: pos - 1, j: pos });
                    pos -= 1;
                }
                self.ins.step();
            }
        }

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("gnome output: {:?}", arr);
        arr
    }
}
