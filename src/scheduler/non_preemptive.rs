//! Rule-driven non-preemptive scheduler (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Collect processes that have arrived and are not completed.
//! 2. If none: jump the clock to the earliest pending arrival (idle gap).
//! 3. Otherwise pick the lowest `(rule score, arrival, pid)` and run it
//!    to completion.
//! 4. Repeat until every process is completed.
//!
//! # Complexity
//! O(n^2): a linear scan per dispatch. Simulation sizes are small.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.4

use super::state::{RunState, StateArena};
use super::Scheduler;
use crate::dispatching::rules::{HighestPriority, ShortestBurst};
use crate::dispatching::{select_best, DispatchingRule};
use crate::error::SimulationError;
use crate::models::{ExecutionSegment, Process, Timeline};

/// Non-preemptive scheduler parameterized by a dispatching rule.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{NonPreemptive, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 6), Process::new("P2", 2, 2)];
/// let timeline = NonPreemptive::sjf().schedule(&processes).unwrap();
///
/// // P1 is alone at t=0 and is not preempted by the shorter P2.
/// assert_eq!(timeline.segments[0].end, 6);
/// assert_eq!(timeline.segments[1].start, 6);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptive<R: DispatchingRule> {
    rule: R,
}

/// Shortest-Job-First scheduler.
pub type Sjf = NonPreemptive<ShortestBurst>;

/// Static-priority scheduler.
pub type PriorityScheduler = NonPreemptive<HighestPriority>;

impl<R: DispatchingRule> NonPreemptive<R> {
    /// Creates a scheduler driven by `rule`.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The dispatching rule in use.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl NonPreemptive<ShortestBurst> {
    /// Shortest-Job-First (non-preemptive).
    pub fn sjf() -> Self {
        Self::new(ShortestBurst)
    }
}

impl NonPreemptive<HighestPriority> {
    /// Priority scheduling (non-preemptive, lower value first).
    pub fn priority() -> Self {
        Self::new(HighestPriority)
    }
}

impl<R: DispatchingRule> Scheduler for NonPreemptive<R> {
    fn name(&self) -> &'static str {
        self.rule.description()
    }

    fn schedule(&self, processes: &[Process]) -> Result<Timeline, SimulationError> {
        let mut arena = StateArena::new(processes);
        let mut timeline = Timeline::new();
        let mut clock: i64 = 0;

        while !arena.all_completed() {
            let ready = arena.arrived_by(clock);
            let selected = select_best(&self.rule, ready.iter().map(|&i| &arena.get(i).process))?;

            let Some(pos) = selected else {
                // CPU idle until the next arrival.
                match arena.next_arrival() {
                    Some(next) => {
                        timeline.add_idle(next - clock);
                        clock = next;
                        continue;
                    }
                    None => break,
                }
            };

            let idx = ready[pos];
            arena.set_state(idx, RunState::Running);
            let (pid, burst) = {
                let p = &arena.get(idx).process;
                (p.pid.clone(), p.burst)
            };
            log::debug!("{}: dispatch '{pid}' at t={clock}", self.rule.name());

            let end = clock
                .checked_add(burst)
                .ok_or_else(|| SimulationError::overflow(&format!("running process '{pid}'")))?;

            timeline.push(ExecutionSegment::new(pid, clock, end));
            arena.consume(idx, burst);
            arena.set_state(idx, RunState::Completed);
            clock = end;
        }

        Ok(timeline)
    }
}
