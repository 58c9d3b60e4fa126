//! Comb sort: bubble sort over a shrinking gap sequence. The gap shrinks by
//! the classic 1.3 factor (10/13 in integer arithmetic, see `config`) until
//! it reaches 1, then plain bubble passes finish the job.

use log::{debug, info};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::config::{GAP_SHRINK_DENOMINATOR, GAP_SHRINK_NUMERATOR, MIN_GAP};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::EventKind;

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n log n)", average: "O(n^2 / 2^p)", worst: "O(n^2)" },
    space: Bounds { best: "O(1)", average: "O(1)", worst: "O(1)" },
};

pub struct CombSort<T> {
    ins: Instrument<T>,
    early_termination: bool,
}

impl<T: Clone + Debug> CombSort<T> {
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
        CombSort { ins: Instrument::with_comparator(options, cmp), early_termination }
    }
}

impl<T: Ord + Clone + Debug + 'static> CombSort<T> {
    pub fn new(overrides: Options) -> Self {
        CombSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for CombSort<T> {
    fn name(&self) -> &'static str {
        "comb-sort"
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
            optimizations: vec![("early_termination", self.early_termination)],
            notes: "gapped bubble sort; kills turtles early via the shrinking gap sequence",
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
        debug!("comb input: {:?}", input);

        let mut arr = input.to_vec();
        let n = arr.len();
        self.ins.set_phase("gap-sweep");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "gap-sweep".into(), direction: None },
        );

        let mut gap = n;
        let mut final_passes = 0usize;
        loop {
            if gap > MIN_GAP {
                gap = (gap * GAP_SHRINK_NUMERATOR) / GAP_SHRINK_DENOMINATOR;
                if gap < MIN_GAP {
                    gap = MIN_GAP;
                }
                self.ins.record_state(&arr, EventKind::GapUpdate { gap });
                if gap == MIN_GAP {
                    self.ins.set_phase("final-passes");
                }
            } else {
                final_passes += 1;
            }

            let mut swapped = false;
            for i in 0..n - gap {
                if self.ins.compare_at(&arr, i, i + gap) == Ordering::Greater {
                    self.ins.swap(&mut arr, i, i + gap);
                    self.ins.record_state(&arr, EventKind::Swap { i, j: i + gap });
                    swapped = true;
                }
                self.ins.step();
            }
            self.ins.count("passes");

            if gap == MIN_GAP {
                if self.early_termination {
                    if !swapped {
                        break;
                    }
                } else if final_passes >= n {
                    break;
                }
            }
        }
        info!("comb finished after {} passes", self.ins.metrics().get("passes"));

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("comb output: {:?}", arr);
        arr
    }
}
