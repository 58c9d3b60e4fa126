use log::debug;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::EventKind;

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n log n)", average: "O(n log n)", worst: "O(n log n)" },
    space: Bounds { best: "O(1)", average: "O(1)", worst: "O(1)" },
};

pub struct HeapSort<T> {
    ins: Instrument<T>,
}

impl<T: Clone + Debug> HeapSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    pub fn with_comparator(overrides: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        HeapSort { ins: Instrument::with_comparator(options, cmp) }
    }

    // max-heap sift over arr[..end]
    fn sift_down(&mut self, arr: &mut [T], mut root: usize, end: usize) {
        loop {
            let left = 2 * root + 1;
            if left >= end {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < end && self.ins.compare_at(arr, left, right) == Ordering::Less {
                child = right;
            }
            if self.ins.compare_at(arr, root, child) == Ordering::Less {
                self.ins.swap(arr, root, child);
                self.ins.record_state(arr, EventKind::Swap { i: root, j: child });
                root = child;
            } else {
                break;
            }
            self.ins.step();
        }
    }
}

impl<T: Ord + Clone + Debug + 'static> HeapSort<T> {
    pub fn new(overrides: Options) -> Self {
        HeapSort::with_comparator(overrides, |a: &T, b: &T| a.cmp(b))
    }
}

impl<T: Clone + Debug> Algorithm<T> for HeapSort<T> {
    fn name(&self) -> &'static str {
        "heap-sort"
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
            optimizations: vec![],
            notes: "bottom-up heapify, then repeated extract-max into the sorted suffix",
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
        debug!("heap input: {:?}", input);

        let mut arr = input.to_vec();
        let n = arr.len();

        self.ins.set_phase("heapify");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "heapify".into(), direction: None },
        );
        for i in (0..n / 2).rev() {
            self.sift_down(&mut arr, i, n);
        }

        self.ins.set_phase("extract");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "extract".into(), direction: None },
        );
        for end in (1..n).rev() {
            self.ins.swap(&mut arr, 0, end);
            self.ins.record_state(&arr, EventKind::Swap { i: 0, j: end });
            self.sift_down(&mut arr, 0, end);
            self.ins.step();
        }

        self.ins.set_phase("completed");
        self.ins.record_state(&arr, EventKind::Completed);
        debug!("heap output: {:?}", arr);
        arr
    }
}
