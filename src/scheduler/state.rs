//! Per-invocation process state.
//!
//! Each scheduler call builds its own [`StateArena`] from a private copy
//! of the registry and drops it on return. Entries are addressed by
//! registry index, so identifiers play no role in bookkeeping.

use crate::models::Process;

/// Lifecycle of a process inside one scheduler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunState {
    /// Not yet admitted to the ready set.
    Waiting,
    /// In the ready queue.
    Queued,
    /// Holding the CPU.
    Running,
    /// All burst units executed.
    Completed,
}

#[derive(Debug, Clone)]
pub(crate) struct ProcessState {
    pub process: Process,
    pub state: RunState,
    /// Burst units left to execute.
    pub remaining: i64,
}

/// Owned state for all processes of a single scheduler invocation.
#[derive(Debug, Clone)]
pub(crate) struct StateArena {
    entries: Vec<ProcessState>,
}

impl StateArena {
    /// Copies the registry into a fresh arena; every process starts `Waiting`.
    pub fn new(processes: &[Process]) -> Self {
        let entries = processes
            .iter()
            .map(|p| ProcessState {
                process: p.clone(),
                state: RunState::Waiting,
                remaining: p.burst,
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, idx: usize) -> &ProcessState {
        &self.entries[idx]
    }

    pub fn set_state(&mut self, idx: usize, state: RunState) {
        self.entries[idx].state = state;
    }

    /// Deducts executed units and returns what is left.
    pub fn consume(&mut self, idx: usize, units: i64) -> i64 {
        let entry = &mut self.entries[idx];
        entry.remaining -= units;
        entry.remaining
    }

    pub fn all_completed(&self) -> bool {
        self.entries.iter().all(|e| e.state == RunState::Completed)
    }

    /// Indices of `Waiting` processes with `arrival <= time`, ordered by
    /// (arrival, pid).
    pub fn arrived_by(&self, time: i64) -> Vec<usize> {
        let mut arrived: Vec<usize> = (0..self.entries.len())
            .filter(|&i| {
                let e = &self.entries[i];
                e.state == RunState::Waiting && e.process.arrival <= time
            })
            .collect();
        arrived.sort_by(|&a, &b| {
            self.entries[a]
                .process
                .arrival_key()
                .cmp(&self.entries[b].process.arrival_key())
        });
        arrived
    }

    /// Earliest arrival among `Waiting` processes.
    pub fn next_arrival(&self) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| e.state == RunState::Waiting)
            .map(|e| e.process.arrival)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_arena() -> StateArena {
        StateArena::new(&[
            Process::new("P2", 3, 4),
            Process::new("P1", 3, 2),
            Process::new("P0", 0, 1),
            Process::new("P3", 9, 1),
        ])
    }

    #[test]
    fn test_initial_state() {
        let arena = sample_arena();
        assert!(!arena.all_completed());
        assert_eq!(arena.get(0).state, RunState::Waiting);
        assert_eq!(arena.get(0).remaining, 4);
        assert_eq!(arena.next_arrival(), Some(0));
    }

    #[test]
    fn test_arrived_by_orders_by_arrival_then_pid() {
        let arena = sample_arena();
        assert_eq!(arena.arrived_by(5), vec![2, 1, 0]);
        assert!(arena.arrived_by(-1).is_empty());
    }

    #[test]
    fn test_arrived_by_skips_admitted() {
        let mut arena = sample_arena();
        arena.set_state(2, RunState::Queued);
        assert_eq!(arena.arrived_by(5), vec![1, 0]);
        assert_eq!(arena.next_arrival(), Some(3));
    }

    #[test]
    fn test_consume_and_complete() {
        let mut arena = StateArena::new(&[Process::new("P1", 0, 3)]);
        assert_eq!(arena.consume(0, 2), 1);
        assert_eq!(arena.consume(0, 1), 0);
        arena.set_state(0, RunState::Completed);
        assert!(arena.all_completed());
        assert_eq!(arena.next_arrival(), None);
    }

    #[test]
    fn test_empty_arena_is_complete() {
        assert!(StateArena::new(&[]).all_completed());
    }
}
