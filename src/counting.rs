//! Counting sort over integer keys. The only distribution sort in the crate:
//! no element-to-element comparisons drive the placement, only key counts.

use log::{debug, info};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::rc::Rc;

use crate::algorithm::{Algorithm, Bounds, Category, Complexity, Info};
use crate::instrument::Instrument;
use crate::options::Options;
use crate::trace::EventKind;

const COMPLEXITY: Complexity = Complexity {
    time: Bounds { best: "O(n + k)", average: "O(n + k)", worst: "O(n + k)" },
    space: Bounds { best: "O(n + k)", average: "O(n + k)", worst: "O(n + k)" },
};

/// Types sortable by counting sort without a key extraction function.
/// Keys must fit in `i64`.
pub trait CountKey: Clone {
    fn count_key(&self) -> i64;
}

macro_rules! impl_count_key { ($($t:ty)*) => ($(
    impl CountKey for $t {
        fn count_key(&self) -> i64 {
            *self as i64
        }
    }
)*) }

impl_count_key! { i8 i16 i32 i64 u8 u16 u32 u64 usize }

pub struct CountingSort<T> {
    ins: Instrument<T>,
    key: Rc<dyn Fn(&T) -> i64>,
    auto_detect_range: bool,
    min_value: i64,
    max_value: i64,
}

impl<T: Clone + Debug + 'static> CountingSort<T> {
    pub fn defaults() -> Options {
        Options::new()
            .set("auto_detect_range", true)
            .set("min_value", 0i64)
            .set("max_value", 0i64)
            .set("animation_delay", 0i64)
            .set("record_states", true)
            .set("record_comparisons", false)
    }

    /// Sort by an extracted key instead of the element itself. The
    /// instrument's ordering is the key ordering, so range detection still
    /// routes every comparison through `compare`.
    pub fn with_key(overrides: Options, key_fn: impl Fn(&T) -> i64 + 'static) -> Self {
        let options = overrides.merged_over(Self::defaults());
        let auto_detect_range = options.flag("auto_detect_range", true);
        let min_value = options.int("min_value", 0);
        let max_value = options.int("max_value", 0);
        let key: Rc<dyn Fn(&T) -> i64> = Rc::new(key_fn);
        let by_key = Rc::clone(&key);
        let ins =
            Instrument::with_comparator(options, move |a: &T, b: &T| by_key(a).cmp(&by_key(b)));
        CountingSort { ins, key, auto_detect_range, min_value, max_value }
    }
}

impl<T: CountKey + Debug + 'static> CountingSort<T> {
    pub fn new(overrides: Options) -> Self {
        CountingSort::with_key(overrides, |v: &T| v.count_key())
    }
}

impl<T: Clone + Debug> Algorithm<T> for CountingSort<T> {
    fn name(&self) -> &'static str {
        "counting-sort"
    }

    fn category(&self) -> Category {
        Category::Distribution
    }

    fn complexity(&self) -> Complexity {
        COMPLEXITY
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn is_in_place(&self) -> bool {
        false
    }

    fn info(&self) -> Info {
        Info {
            name: self.name(),
            category: self.category(),
            stable: self.is_stable(),
            in_place: self.is_in_place(),
            complexity: self.complexity(),
            optimizations: vec![("auto_detect_range", self.auto_detect_range)],
            notes: "linear-time for dense integer keys; degrades with sparse ranges",
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
        debug!("counting input: {:?}", input);

        let arr = input.to_vec();
        let n = arr.len();

        let (min, max) = if self.auto_detect_range {
            self.ins.set_phase("detect-range");
            self.ins.record_state(
                &arr,
                EventKind::PhaseStart { name: "detect-range".into(), direction: None },
            );
            let mut min_elem = self.ins.read(&arr, 0);
            let mut max_elem = min_elem.clone();
            for i in 1..n {
                let probe = self.ins.read(&arr, i);
                if self.ins.compare(&probe, &min_elem) == Ordering::Less {
                    min_elem = probe.clone();
                }
                if self.ins.compare(&probe, &max_elem) == Ordering::Greater {
                    max_elem = probe;
                }
            }
            let min = (self.key)(&min_elem);
            let max = (self.key)(&max_elem);
            info!("detected key range [{}, {}]", min, max);
            self.ins.record_state(&arr, EventKind::RangeDetected { min, max });
            (min, max)
        } else {
            (self.min_value, self.max_value)
        };
        assert!(min <= max, "counting sort key range is inverted");

        let span = (max - min + 1) as usize;
        self.ins.count_by("range_size", span as u64);

        self.ins.set_phase("count");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "count".into(), direction: None },
        );
        let mut counts = vec![0u64; span];
        for i in 0..n {
            let probe = self.ins.read(&arr, i);
            counts[((self.key)(&probe) - min) as usize] += 1;
        }

        self.ins.set_phase("accumulate");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "accumulate".into(), direction: None },
        );
        for k in 1..span {
            counts[k] += counts[k - 1];
        }

        // stable placement: walk the input backwards
        self.ins.set_phase("place");
        self.ins.record_state(
            &arr,
            EventKind::PhaseStart { name: "place".into(), direction: None },
        );
        let mut out = arr.clone();
        for i in (0..n).rev() {
            let probe = self.ins.read(&arr, i);
            let slot = ((self.key)(&probe) - min) as usize;
            counts[slot] -= 1;
            self.ins.write(&mut out, counts[slot] as usize, probe);
            self.ins.step();
        }

        self.ins.set_phase("completed");
        self.ins.record_state(&out, EventKind::Completed);
        debug!("counting output: {:?}", out);
        out
    }
}
