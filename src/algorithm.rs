use std::fmt;

use crate::instrument::Instrument;
use crate::metrics::Metrics;
use crate::trace::TraceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comparison,
    Distribution,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comparison => "comparison",
            Category::Distribution => "distribution",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asymptotic bounds as notation strings, e.g. `"O(n log n)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: Bounds,
    pub space: Bounds,
}

/// Descriptive superset consumed by presentation layers: identity, claimed
/// properties, and the optimization flags as configured on this instance.
#[derive(Debug, Clone)]
pub struct Info {
    pub name: &'static str,
    pub category: Category,
    pub stable: bool,
    pub in_place: bool,
    pub complexity: Complexity,
    pub optimizations: Vec<(&'static str, bool)>,
    pub notes: &'static str,
}

/// Common surface of every sorting algorithm in the crate.
///
/// `run` sorts a copy of the input and returns it; the caller's slice is
/// never touched. Metrics and trace describe the most recent run.
pub trait Algorithm<T: Clone> {
    fn name(&self) -> &'static str;
    fn category(&self) -> Category;
    fn complexity(&self) -> Complexity;
    fn is_stable(&self) -> bool;
    fn is_in_place(&self) -> bool;
    fn info(&self) -> Info;
    fn instrument(&self) -> &Instrument<T>;
    fn run(&mut self, input: &[T]) -> Vec<T>;

    fn metrics<'a>(&'a self) -> &'a Metrics where T: 'a {
        self.instrument().metrics()
    }

    fn trace(&self) -> &[TraceEvent<T>] {
        self.instrument().trace()
    }

    fn phase<'a>(&'a self) -> &'a str where T: 'a {
        self.instrument().phase()
    }
}
