//! Round-Robin (preemptive) scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every waiting process with `arrival <= clock` to the tail of
//!    the ready queue, ordered by (arrival, pid).
//! 2. Queue empty: the CPU idles until the next arrival. Nothing left to
//!    arrive: done.
//! 3. Dequeue the head and run it for `min(quantum, remaining)` units.
//! 4. Admit processes that arrived during that slice.
//! 5. Re-queue the preempted process at the tail if it has work left.
//!
//! # Queue Policy
//! Processes arriving during a slice, including exactly at its end,
//! enter the queue ahead of the process that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use super::state::{RunState, StateArena};
use super::Scheduler;
use crate::error::SimulationError;
use crate::models::{ExecutionSegment, Process, Timeline};

/// Preemptive Round-Robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 2)];
/// let timeline = RoundRobin::new(2).schedule(&processes).unwrap();
///
/// let spans: Vec<(i64, i64)> = timeline.segments.iter().map(|s| (s.start, s.end)).collect();
/// assert_eq!(spans, vec![(0, 2), (2, 4), (4, 6)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler with the given time quantum.
    ///
    /// A non-positive quantum is rejected when scheduling.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Time slice granted per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    fn admit(arena: &mut StateArena, queue: &mut VecDeque<usize>, until: i64) {
        for idx in arena.arrived_by(until) {
            arena.set_state(idx, RunState::Queued);
            queue.push_back(idx);
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Timeline, SimulationError> {
        if self.quantum <= 0 {
            return Err(SimulationError::MissingParameter {
                algorithm: self.name(),
                parameter: "quantum",
            });
        }

        let mut arena = StateArena::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        while !arena.all_completed() {
            Self::admit(&mut arena, &mut queue, clock);

            let Some(idx) = queue.pop_front() else {
                match arena.next_arrival() {
                    Some(next) => {
                        timeline.add_idle(next - clock);
                        clock = next;
                        continue;
                    }
                    None => break,
                }
            };

            arena.set_state(idx, RunState::Running);
            let entry = arena.get(idx);
            let pid = entry.process.pid.clone();
            let slice = self.quantum.min(entry.remaining);

            let start = clock;
            let end = start
                .checked_add(slice)
                .ok_or_else(|| SimulationError::overflow(&format!("running process '{pid}'")))?;

            timeline.push(ExecutionSegment::new(pid, start, end));
            clock = end;
            let remaining = arena.consume(idx, slice);

            Self::admit(&mut arena, &mut queue, clock);

            if remaining > 0 {
                arena.set_state(idx, RunState::Queued);
                queue.push_back(idx);
            } else {
                arena.set_state(idx, RunState::Completed);
            }
        }

        Ok(timeline)
    }
}
