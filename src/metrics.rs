use std::collections::BTreeMap;
use std::fmt;

pub const COMPARISONS: &str = "comparisons";
pub const SWAPS: &str = "swaps";
pub const READS: &str = "reads";
pub const WRITES: &str = "writes";

/// Running operation counts for one sort run. The four core counters are
/// always present once touched; algorithms add their own counters under
/// their own names (`cycles`, `passes`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    counts: BTreeMap<&'static str, u64>,
}

impl Metrics {
    pub fn new() -> Self {
        Metrics::default()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn incr(&mut self, name: &'static str) {
        self.add(name, 1);
    }

    pub fn add(&mut self, name: &'static str, n: u64) {
        *self.counts.entry(name).or_insert(0) += n;
    }

    /// Absent counters read as zero.
    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn comparisons(&self) -> u64 {
        self.get(COMPARISONS)
    }

    pub fn swaps(&self) -> u64 {
        self.get(SWAPS)
    }

    pub fn reads(&self) -> u64 {
        self.get(READS)
    }

    pub fn writes(&self) -> u64 {
        self.get(WRITES)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, count) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = Metrics::new();
        metrics.incr(COMPARISONS);
        metrics.incr(COMPARISONS);
        metrics.add(WRITES, 2);
        assert_eq!(metrics.comparisons(), 2);
        assert_eq!(metrics.writes(), 2);
        assert_eq!(metrics.get("cycles"), 0);

        metrics.reset();
        assert_eq!(metrics.comparisons(), 0);
    }
}
