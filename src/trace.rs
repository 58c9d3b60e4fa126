use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// One variant per event discriminator. Consumers match on this instead of
/// switching on a free-form `type` string.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    PhaseStart { name: String, direction: Option<Direction> },
    Comparison { i: usize, j: usize, ordering: Ordering },
    Swap { i: usize, j: usize },
    Write { index: usize },
    Sorted { indices: Vec<usize> },
    GapUpdate { gap: usize },
    RangeDetected { min: i64, max: i64 },
    CycleStart { start: usize },
    CycleComplete { start: usize, writes: u64 },
    Completed,
}

impl EventKind {
    pub fn discriminator(&self) -> &'static str {
        match self {
            EventKind::PhaseStart { .. } => "phase-start",
            EventKind::Comparison { .. } => "comparison",
            EventKind::Swap { .. } => "swap",
            EventKind::Write { .. } => "write",
            EventKind::Sorted { .. } => "sorted",
            EventKind::GapUpdate { .. } => "gap-update",
            EventKind::RangeDetected { .. } => "range-detected",
            EventKind::CycleStart { .. } => "cycle-start",
            EventKind::CycleComplete { .. } => "cycle-complete",
            EventKind::Completed => "completed",
        }
    }
}

/// A state snapshot recorded during a run. `array` is a copy taken at the
/// moment of recording, never a live view of the working array.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent<T> {
    pub array: Vec<T>,
    pub kind: EventKind,
}
