//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort a copy of the registry by arrival (equal arrivals keep
//!    their input order).
//! 2. For each process: `start = max(clock, arrival)`, `end = start + burst`.
//! 3. Any gap between the clock and a later arrival is idle time.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::Scheduler;
use crate::error::SimulationError;
use crate::models::{ExecutionSegment, Process, Timeline};

/// Non-preemptive FCFS scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Timeline, SimulationError> {
        let mut working = processes.to_vec();
        working.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        for p in working {
            let start = clock.max(p.arrival);
            timeline.add_idle(start - clock);

            let end = start
                .checked_add(p.burst)
                .ok_or_else(|| SimulationError::overflow(&format!("running process '{}'", p.pid)))?;

            timeline.push(ExecutionSegment::new(p.pid, start, end));
            clock = end;
        }

        Ok(timeline)
    }
}
