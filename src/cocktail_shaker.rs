//! Cocktail shaker sort: bidirectional bubble sort. A forward pass bubbles
//! the largest remaining element up, a backward pass sinks the smallest
//! remaining element down, so turtles move as fast as rabbits.

use log::debug;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::{Direction, EventKind};

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n)", average: "O(n^2)", worst: "O(n^2)" },
    space: Bounds { best: "O(1)", average: "O(1)", worst: "O(1)" },
};

pub struct CocktailShakerSort<T> {
    ins: Instrument<T>,
    early_termination: bool,
    shrink_boundaries: bool,
    optimized_comparisons: bool,
    track_sorted_regions: bool,
}

impl<T: Clone + Debug> CocktailShakerSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("early_termination", true)
            .set("shrink_boundaries", true)
            .set("optimized_comparisons", true)
            .set("track_sorted_regions", false)
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    pub fn with_comparator(overrides: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        let early_termination = options.flag("early_termination", true);
        let shrink_boundaries = options.flag("shrink_boundaries", true);
        let optimized_comparisons = options.flag("optimized_comparisons", true);
        let track_sorted_regions = options.flag("track_sorted_regions", false);
        CocktailShakerSort {
            ins: Instrument::with_comparator(options, cmp),
            early_termination,
            shrink_boundaries,
            optimized_comparisons,
            track_sorted_regions,
        }
    }
}

impl<T: Ord + Clone + Debug + 'static> CocktailShakerSort<T> {
    pub fn new(overrides: Options) -> Self {
        CocktailShakerSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for CocktailShakerSort<T> {
    fn name(&self) -> &'static str {
        "cocktail-shaker-sort"
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
            optimizations: vec![
                ("early_termination", self.early_termination),
                ("shrink_boundaries", self.shrink_boundaries),
                ("optimized_comparisons", self.optimized_comparisons),
                ("track_sorted_regions", self.track_sorted_regions),
            ],
            notes: "bidirectional bubble sort, good on small or nearly sorted inputs",
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
        debug!("cocktail shaker input: {:?}", input);

        let mut arr = input.to_vec();
        let mut start = 0usize;
        let mut end = arr.len() - 1;
        let mut sweeps = 0usize;

        loop {
            sweeps += 1;

            self.ins.set_phase("forward");
            self.ins.record_state(
                &arr,
                EventKind::PhaseStart { name: "forward".into(), direction: Some(Direction::Forward) },
            );
            let mut swapped = false;
            let mut last_swap = start;
            for i in start..end {
                if self.ins.compare_at(&arr, i, i + 1) == Ordering::Greater {
                    self.ins.swap(&mut arr, i, i + 1);
                    self.ins.record_state(&arr, EventKind::Swap { i, j: i + 1 });
                    swapped = true;
                    last_swap = i;
                }
                self.ins.step();
            }
            self.ins.count("passes");
            if self.shrink_boundaries {
                // everything above the last swap is in final position
                end = if self.optimized_comparisons { last_swap } else { end - 1 };
            }
            if self.track_sorted_regions && end + 1 < arr.len() {
                self.ins.record_state(
                    &arr,
                    EventKind::Sorted { indices: (end + 1..arr.len()).collect() },
                );
            }
            if (self.early_termination && !swapped) || start >= end {
                break;
            }

            self.ins.set_phase("backward");
            self.ins.record_state(
                &arr,
                EventKind::PhaseStart { name: "backward".into(), direction: Some(Direction::Backward) },
            );
            swapped = false;
            let mut first_swap = end;
            for i in (start..end).rev() {
                if self.ins.compare_at(&arr, i, i + 1) == Ordering::Greater {
                    self.ins.swap(&mut arr, i, i + 1);
                    self.ins.record_state(&arr, EventKind::Swap { i, j: i + 1 });
                    swapped = true;
                    first_swap = i;
                }
                self.ins.step();
            }
            self.ins.count("passes");
            if self.shrink_boundaries {
                start = if self.optimized_comparisons { first_swap } else { start + 1 };
            }
            if self.track_sorted_regions && start > 0 {
                self.ins.record_state(&arr, EventKind::Sorted { indices: (0..start).collect() });
            }
            if (self.early_termination && !swapped) || start >= end {
                break;
            }
            // n sweep pairs always suffice, even with every optimization off
            if sweeps >= arr.len() {
                break;
            }
        }

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("cocktail shaker output: {:?}", arr);
        arr
    }
}
