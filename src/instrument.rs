use std::cmp::Ordering;

use crate::delay::{self, Delay};
use crate::metrics::{Metrics, COMPARISONS, READS, SWAPS, WRITES};
use crate::options::Options;
use crate::trace::{EventKind, TraceEvent};

/// Shared instrumentation context every algorithm sorts through.
///
/// All element access routes through `compare`/`swap`/`read`/`write`, so the
/// operation counts cannot drift from what the algorithm actually did. The
/// trace is an append-only event log with one writer; snapshots are deep
/// copies of the working array.
pub struct Instrument<T> {
    options: Options,
    metrics: Metrics,
    phase: String,
    trace: Vec<TraceEvent<T>>,
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
    delay: Box<dyn Delay>,
    record_states: bool,
    record_comparisons: bool,
}

impl<T: Clone> Instrument<T> {
    /// Natural `Ord` ordering.
    pub fn new(options: Options) -> Self
    where
        T: Ord + 'static,
    {
        Instrument::with_comparator(options, |a: &T, b: &T| a.cmp(b))
    }

    pub fn with_comparator(options: Options, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        let delay = delay::from_millis_option(options.int("animation_delay", 0));
        let record_states = options.flag("record_states", true);
        let record_comparisons = options.flag("record_comparisons", false);
        Instrument {
            options,
            metrics: Metrics::new(),
            phase: String::from("idle"),
            trace: Vec::new(),
            cmp: Box::new(cmp),
            delay,
            record_states,
            record_comparisons,
        }
    }

    /// Fresh metrics and trace for the next run.
    pub fn reset(&mut self) {
        self.metrics.reset();
        self.trace.clear();
        self.phase = String::from("idle");
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn trace(&self) -> &[TraceEvent<T>] {
        &self.trace
    }

    pub fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.metrics.incr(COMPARISONS);
        (self.cmp)(a, b)
    }

    /// Compare two positions of the working array, recording a `Comparison`
    /// event when `record_comparisons` is enabled.
    pub fn compare_at(&mut self, arr: &[T], i: usize, j: usize) -> Ordering {
        self.metrics.incr(COMPARISONS);
        let ordering = (self.cmp)(&arr[i], &arr[j]);
        if self.record_comparisons {
            self.record_state(arr, EventKind::Comparison { i, j, ordering });
        }
        ordering
    }

    pub fn read(&mut self, arr: &[T], i: usize) -> T {
        self.metrics.incr(READS);
        arr[i].clone()
    }

    pub fn write(&mut self, arr: &mut [T], i: usize, value: T) {
        self.metrics.incr(WRITES);
        arr[i] = value;
    }

    // Counts its own two reads and two writes; does not route through
    // `read`/`write`, so nothing is double counted.
    pub fn swap(&mut self, arr: &mut [T], i: usize, j: usize) {
        arr.swap(i, j);
        self.metrics.incr(SWAPS);
        self.metrics.add(READS, 2);
        self.metrics.add(WRITES, 2);
    }

    pub fn record_state(&mut self, arr: &[T], kind: EventKind) {
        if self.record_states {
            self.trace.push(TraceEvent { array: arr.to_vec(), kind });
        }
    }

    pub fn set_phase(&mut self, name: impl Into<String>) {
        self.phase = name.into();
    }

    /// Algorithm-specific counter (`cycles`, `passes`, ...).
    pub fn count(&mut self, name: &'static str) {
        self.metrics.incr(name);
    }

    pub fn count_by(&mut self, name: &'static str, n: u64) {
        self.metrics.add(name, n);
    }

    pub fn step(&self) {
        self.delay.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_counts_one_swap_two_reads_two_writes() {
        let mut ins: Instrument<u64> = Instrument::new(Options::new());
        let mut arr = vec![2u64, 1];
        ins.swap(&mut arr, 0, 1);
        assert_eq!(arr, vec![1, 2]);
        assert_eq!(ins.metrics().swaps(), 1);
        assert_eq!(ins.metrics().reads(), 2);
        assert_eq!(ins.metrics().writes(), 2);
    }

    #[test]
    fn snapshots_are_copies() {
        let mut ins: Instrument<u64> = Instrument::new(Options::new());
        let mut arr = vec![3u64, 1, 2];
        ins.record_state(&arr, EventKind::Completed);
        arr[0] = 99;
        assert_eq!(ins.trace()[0].array, vec![3, 1, 2]);
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut ins: Instrument<u64> =
            Instrument::with_comparator(Options::new(), |a: &u64, b: &u64| b.cmp(a));
        assert_eq!(ins.compare(&1, &2), Ordering::Greater);
        assert_eq!(ins.metrics().comparisons(), 1);
    }

    #[test]
    fn record_states_off_drops_events() {
        let mut ins: Instrument<u64> =
            Instrument::new(Options::new().set("record_states", false));
        let arr = vec![1u64, 2];
        ins.record_state(&arr, EventKind::Completed);
        assert!(ins.trace().is_empty());
    }

    #[test]
    fn reset_clears_run_state() {
        let mut ins: Instrument<u64> = Instrument::new(Options::new());
        let arr = vec![1u64, 2];
        ins.compare_at(&arr, 0, 1);
        ins.record_state(&arr, EventKind::Completed);
        ins.set_phase("completed");

        ins.reset();
        assert_eq!(ins.metrics().comparisons(), 0);
        assert!(ins.trace().is_empty());
        assert_eq!(ins.phase(), "idle");
    }
}
