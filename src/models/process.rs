//! Process (job) model.
//!
//! A process is a CPU-bound unit of work with a known arrival time and
//! burst length. Processes are immutable once a simulation run starts;
//! schedulers operate on private copies.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Process identifier.
///
/// Accepts either an integer or a string on the wire. Identifiers are
/// totally ordered so that tie-breaks are reproducible: integers sort
/// before strings, integers numerically, strings lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pid {
    /// Numeric identifier.
    Num(i64),
    /// Named identifier (e.g., "P1").
    Name(String),
}

impl Ord for Pid {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Pid::Num(a), Pid::Num(b)) => a.cmp(b),
            (Pid::Name(a), Pid::Name(b)) => a.cmp(b),
            (Pid::Num(_), Pid::Name(_)) => Ordering::Less,
            (Pid::Name(_), Pid::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Pid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pid::Num(n) => write!(f, "{n}"),
            Pid::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Pid {
    fn from(n: i64) -> Self {
        Pid::Num(n)
    }
}

impl From<i32> for Pid {
    fn from(n: i32) -> Self {
        Pid::Num(i64::from(n))
    }
}

impl From<&str> for Pid {
    fn from(s: &str) -> Self {
        Pid::Name(s.to_string())
    }
}

impl From<String> for Pid {
    fn from(s: String) -> Self {
        Pid::Name(s)
    }
}

/// A process to be scheduled on the single CPU.
///
/// # Time Representation
/// All times are abstract integer units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Instant the process becomes eligible for execution.
    pub arrival: i64,
    /// Total CPU time the process requires.
    pub burst: i64,
    /// Scheduling priority (lower = more important). Only used by
    /// priority scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without a priority.
    pub fn new(pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Deterministic FIFO key: arrival, then identifier.
    pub(crate) fn arrival_key(&self) -> (i64, &Pid) {
        (self.arrival, &self.pid)
    }
}
