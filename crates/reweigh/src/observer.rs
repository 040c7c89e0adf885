//! Progress reporting and cancellation hooks for the rounding loop.

use crate::graphlib::EdgeKey;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One decrement round, reported just before the potentials are lowered.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent<'a> {
    /// 1-based round number.
    pub iteration: usize,
    pub violating: &'a [&'a EdgeKey],
    /// Number of strongly connected components of the residual subgraph.
    pub components: usize,
    pub threshold: f64,
    /// Number of components at or below the threshold layer.
    pub selected: usize,
    pub decremented: &'a [&'a str],
}

pub trait Observer {
    fn on_iteration(&mut self, _event: &IterationEvent<'_>) {}

    /// Polled before every round; returning `true` stops the loop with
    /// [`crate::RoundingStatus::Cancelled`].
    fn cancelled(&self) -> bool {
        false
    }
}

impl Observer for () {}

/// A shareable cancellation switch.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Observer for CancelFlag {
    fn cancelled(&self) -> bool {
        self.is_cancelled()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub violating: Vec<EdgeKey>,
    pub components: usize,
    pub threshold: f64,
    pub selected: usize,
    pub decremented: Vec<String>,
}

/// Observer that keeps an owned copy of every event.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub records: Vec<IterationRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Observer for EventLog {
    fn on_iteration(&mut self, event: &IterationEvent<'_>) {
        self.records.push(IterationRecord {
            iteration: event.iteration,
            violating: event.violating.iter().map(|&k| k.clone()).collect(),
            components: event.components,
            threshold: event.threshold,
            selected: event.selected,
            decremented: event.decremented.iter().map(|&s| s.to_string()).collect(),
        });
    }
}
